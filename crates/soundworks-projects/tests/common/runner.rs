//! Command runner recording invocations instead of spawning processes

use async_trait::async_trait;
use camino::Utf8Path;
use soundworks_projects::packages::CommandRunner;
use soundworks_projects::Result;
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct RecordingRunner {
    calls: Mutex<Vec<(String, Vec<String>)>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every command run so far, as `program arg...`
    pub fn command_lines(&self) -> Vec<String> {
        self.calls
            .lock()
            .expect("Runner lock")
            .iter()
            .map(|(program, args)| {
                std::iter::once(program.clone())
                    .chain(args.iter().cloned())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    async fn run(&self, _cwd: &Utf8Path, program: &str, args: &[String]) -> Result<()> {
        self.calls
            .lock()
            .expect("Runner lock")
            .push((program.to_string(), args.to_vec()));
        Ok(())
    }
}
