//! CLI command implementations

pub mod check_deps;
pub mod config_infos;
pub mod create;
pub mod create_client;
pub mod create_env;
pub mod eject_launcher;
pub mod find_doc;
pub mod install_packages;
pub mod upgrade_config;
pub mod version;

use anyhow::Result;
use camino::Utf8PathBuf;
use console::style;
use soundworks_core::{AnswerProvider, Choice, ProjectPaths, Question};
use soundworks_projects::packages::{PackageKind, SystemRunner};
use soundworks_projects::templates::TemplateCatalog;

use crate::cli::{Cli, Commands};
use crate::output;
use crate::prompt::TerminalPrompter;
use crate::version::VersionInfo;

const DOCUMENTATION_URL: &str = "https://soundworks.dev";
const ISSUES_URL: &str = "https://github.com/collective-soundworks/soundworks/issues";

/// Wizard tasks, declared in the order they run when given as flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    CreateClient,
    InstallPlugins,
    InstallLibs,
    FindDoc,
    ConfigInfos,
    CreateEnv,
    EjectLauncher,
    CheckDeps,
    UpgradeConfig,
}

impl Task {
    pub fn all() -> [Task; 9] {
        [
            Task::CreateClient,
            Task::InstallPlugins,
            Task::InstallLibs,
            Task::FindDoc,
            Task::ConfigInfos,
            Task::CreateEnv,
            Task::EjectLauncher,
            Task::CheckDeps,
            Task::UpgradeConfig,
        ]
    }

    /// Tasks run right after a project is created
    pub fn init_sequence() -> &'static [Task] {
        &[Task::InstallPlugins, Task::InstallLibs, Task::CreateClient]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Task::CreateClient => "create-client",
            Task::InstallPlugins => "install-plugins",
            Task::InstallLibs => "install-libs",
            Task::FindDoc => "find-doc",
            Task::ConfigInfos => "config-infos",
            Task::CreateEnv => "create-env",
            Task::EjectLauncher => "eject-launcher",
            Task::CheckDeps => "check-deps",
            Task::UpgradeConfig => "upgrade-config",
        }
    }

    /// Menu entry
    pub fn title(&self) -> &'static str {
        match self {
            Task::CreateClient => "create a new soundworks client",
            Task::InstallPlugins => "install / uninstall soundworks plugins",
            Task::InstallLibs => "install / uninstall related libs",
            Task::FindDoc => "find documentation about plugins and libs",
            Task::ConfigInfos => "get config informations about the application",
            Task::CreateEnv => "create a new environment config file",
            Task::EjectLauncher => "eject the launcher and default init views",
            Task::CheckDeps => "check and update the dependencies",
            Task::UpgradeConfig => "upgrade config files to the current format",
        }
    }

    pub fn from_id(id: &str) -> Option<Task> {
        Task::all().into_iter().find(|task| task.id() == id)
    }
}

const EXIT_CHOICE: &str = "exit";

/// Everything a task needs to run against one project
#[derive(Debug, Clone)]
pub struct Context {
    pub paths: ProjectPaths,
    pub templates_dir: Option<Utf8PathBuf>,
    pub assume_yes: bool,
    pub prompter: TerminalPrompter,
    pub runner: SystemRunner,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let paths = match &cli.project_dir {
            Some(dir) if dir.is_absolute() => ProjectPaths::new(dir.clone()),
            Some(dir) => ProjectPaths::new(ProjectPaths::from_current_dir()?.root().join(dir)),
            None => ProjectPaths::from_current_dir()?,
        };

        Ok(Self {
            paths,
            templates_dir: cli.templates_dir.clone(),
            assume_yes: cli.yes,
            prompter: TerminalPrompter,
            runner: SystemRunner::new(),
        })
    }

    /// Same settings, another project
    pub fn for_project(&self, paths: ProjectPaths) -> Self {
        Self {
            paths,
            ..self.clone()
        }
    }

    pub fn catalog(&self) -> Result<TemplateCatalog> {
        Ok(TemplateCatalog::load(self.templates_dir.as_deref())?)
    }

    /// Final confirmation before a task writes anything
    pub fn confirm(&self, message: &str) -> Result<bool> {
        if self.assume_yes {
            return Ok(true);
        }
        Ok(self.prompter.confirm(Question::confirm(message, true))?)
    }
}

/// Dispatch the parsed command line
pub async fn run(cli: Cli) -> Result<()> {
    let ctx = Context::from_cli(&cli)?;

    match cli.command {
        Some(Commands::Version(args)) => version::run(args),
        Some(Commands::Create(args)) => create::run(args, &ctx).await,
        None => wizard(cli.tasks.selected(), cli.tasks.init, &ctx).await,
    }
}

pub async fn run_task(task: Task, ctx: &Context) -> Result<()> {
    match task {
        Task::CreateClient => create_client::run(ctx),
        Task::InstallPlugins => install_packages::run(ctx, PackageKind::Plugins).await,
        Task::InstallLibs => install_packages::run(ctx, PackageKind::Libraries).await,
        Task::FindDoc => find_doc::run(ctx),
        Task::ConfigInfos => config_infos::run(ctx),
        Task::CreateEnv => create_env::run(ctx),
        Task::EjectLauncher => eject_launcher::run(ctx),
        Task::CheckDeps => check_deps::run(ctx).await,
        Task::UpgradeConfig => upgrade_config::run(ctx),
    }
}

/// Plugins, libs, then the first client
pub async fn init(ctx: &Context) -> Result<()> {
    output::header("soundworks init wizard");
    for task in Task::init_sequence() {
        run_task(*task, ctx).await?;
    }
    output::success("soundworks init wizard done");
    Ok(())
}

async fn wizard(tasks: Vec<Task>, init_mode: bool, ctx: &Context) -> Result<()> {
    ctx.paths.ensure_project()?;

    println!("{}", style(VersionInfo::current().banner()).dim());

    if init_mode {
        return init(ctx).await;
    }

    if !tasks.is_empty() {
        for task in tasks {
            run_task(task, ctx).await?;
        }
        return Ok(());
    }

    menu(ctx).await
}

/// Interactive menu, loops until "exit"
async fn menu(ctx: &Context) -> Result<()> {
    output::header("Welcome to the soundworks wizard");
    println!(
        "{}",
        style("You can exit the wizard at any moment with Ctrl+C or by choosing \"exit\"").dim()
    );
    output::kv("documentation", DOCUMENTATION_URL);
    output::kv("issues", ISSUES_URL);

    loop {
        let mut choices: Vec<Choice> = Task::all()
            .iter()
            .map(|task| Choice::titled(task.title(), task.id()))
            .collect();
        choices.push(Choice::titled("→ exit", EXIT_CHOICE));

        println!();
        let chosen = ctx
            .prompter
            .select(Question::select("What do you want to do?", choices))?;

        let Some(task) = Task::from_id(&chosen) else {
            return Ok(());
        };

        if let Err(err) = run_task(task, ctx).await {
            if is_cancelled(&err) {
                return Err(err);
            }
            output::error(&format!("{:#}", err));
        }
    }
}

/// Whether `err` comes from an interrupted prompt
pub fn is_cancelled(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<soundworks_core::Error>()
            .is_some_and(|e| e.is_cancelled())
            || cause
                .downcast_ref::<soundworks_projects::Error>()
                .is_some_and(|e| e.is_cancelled())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context as _;

    #[test]
    fn test_task_ids_round_trip() {
        for task in Task::all() {
            assert_eq!(Task::from_id(task.id()), Some(task));
        }
        assert_eq!(Task::from_id(EXIT_CHOICE), None);
    }

    #[test]
    fn test_cancelled_is_detected_through_context() {
        let err = Err::<(), _>(soundworks_core::Error::Cancelled)
            .context("Create client")
            .unwrap_err();
        assert!(is_cancelled(&err));

        let err = anyhow::Error::from(soundworks_projects::Error::Core(
            soundworks_core::Error::Cancelled,
        ));
        assert!(is_cancelled(&err));
    }

    #[test]
    fn test_other_errors_are_not_cancellations() {
        let err = anyhow::Error::from(soundworks_core::Error::missing_project_marker(".soundworks"));
        assert!(!is_cancelled(&err));
    }

    #[test]
    fn test_confirm_with_yes() {
        let ctx = Context {
            paths: ProjectPaths::new("/tmp/app"),
            templates_dir: None,
            assume_yes: true,
            prompter: TerminalPrompter,
            runner: SystemRunner::new(),
        };
        assert!(ctx.confirm("Confirm?").unwrap());
    }
}
