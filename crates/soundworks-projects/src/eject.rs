//! Copy the `@soundworks/helpers` browser launcher into the project

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use soundworks_core::paths::EJECT_LAUNCHER_DEFAULT_PATHNAME;
use soundworks_core::utils::{copy_dir, is_non_empty_dir};
use soundworks_core::{AnswerProvider, ProjectPaths, Question};
use tracing::info;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EjectPlan {
    pub source: Utf8PathBuf,
    pub destination: Utf8PathBuf,
    /// Import prefix of the ejected files, seen from a client directory
    pub import_prefix: String,
}

impl EjectPlan {
    pub fn apply(&self) -> Result<Vec<Utf8PathBuf>> {
        let written = copy_dir(&self.source, &self.destination)?;
        info!("Ejected {} file(s) to {}", written.len(), self.destination);
        Ok(written)
    }

    /// Import lines to replace in client entry points, `(old, new)`
    pub fn import_changes(&self) -> Vec<(String, String)> {
        ["launcher", "load-config"]
            .iter()
            .map(|module| {
                let binding = if *module == "launcher" { "launcher" } else { "loadConfig" };
                (
                    format!("import {} from '@soundworks/helpers/{}.js'", binding, module),
                    format!("import {} from '{}/{}.js'", binding, self.import_prefix, module),
                )
            })
            .collect()
    }
}

/// Ask where to eject the launcher
pub fn plan_eject(paths: &ProjectPaths, answers: &dyn AnswerProvider) -> Result<EjectPlan> {
    let answer = answers.text(Question::text_with_default(
        "In which directory would you like to eject the launcher?",
        EJECT_LAUNCHER_DEFAULT_PATHNAME,
    ))?;
    let answer = match answer.trim() {
        "" => EJECT_LAUNCHER_DEFAULT_PATHNAME,
        dir => dir,
    };

    let destination = normalize(&paths.root().join(answer));
    if is_non_empty_dir(&destination)? {
        return Err(Error::directory_not_empty(
            paths.relative(&destination).as_str(),
        ));
    }

    let source = paths.eject_launcher_src();
    if !source.is_dir() {
        return Err(Error::missing_source(paths.relative(&source).as_str()));
    }

    let some_client = paths.clients_src().join("someclient");
    let import_prefix = relative_path(&some_client, &destination).to_string();

    Ok(EjectPlan {
        source,
        destination,
        import_prefix,
    })
}

/// Resolve `.` and `..` components lexically
fn normalize(path: &Utf8Path) -> Utf8PathBuf {
    let mut normalized = Utf8PathBuf::new();
    for component in path.components() {
        match component {
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_str()),
        }
    }
    normalized
}

/// Path leading from directory `from` to `to`
fn relative_path(from: &Utf8Path, to: &Utf8Path) -> Utf8PathBuf {
    let from: Vec<_> = from.components().collect();
    let to: Vec<_> = to.components().collect();
    let common = from.iter().zip(&to).take_while(|(a, b)| a == b).count();

    let mut relative = Utf8PathBuf::new();
    for _ in common..from.len() {
        relative.push("..");
    }
    for component in &to[common..] {
        relative.push(component.as_str());
    }
    relative
}
