//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

use crate::commands::Task;

/// soundworks - create and maintain soundworks applications
///
/// Without a subcommand, runs the wizard on the project: the tasks given as
/// flags, or an interactive menu when no flag is given.
#[derive(Parser, Debug)]
#[command(name = "soundworks")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Project directory (defaults to the current directory)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub project_dir: Option<Utf8PathBuf>,

    /// Accept confirmations without asking
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Directory of additional application templates
    #[arg(long, global = true, env = "SOUNDWORKS_TEMPLATES_DIR", value_name = "DIR")]
    pub templates_dir: Option<Utf8PathBuf>,

    #[command(flatten)]
    pub tasks: TaskFlags,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new soundworks application
    Create(CreateArgs),

    /// Show version information
    Version(VersionArgs),
}

#[derive(Args, Debug, Default)]
pub struct TaskFlags {
    /// Create a new soundworks client
    #[arg(short = 'c', long)]
    pub create_client: bool,

    /// Install / uninstall soundworks plugins
    #[arg(short = 'p', long)]
    pub install_plugins: bool,

    /// Install / uninstall related libs
    #[arg(short = 'l', long)]
    pub install_libs: bool,

    /// Find documentation about plugins and related libs
    #[arg(short = 'f', long)]
    pub find_doc: bool,

    /// Get config informations about the application
    #[arg(short = 'i', long)]
    pub config_infos: bool,

    /// Create a new environment config file
    #[arg(short = 'e', long)]
    pub create_env: bool,

    /// Eject the launcher and default views from `@soundworks/helpers`
    #[arg(long)]
    pub eject_launcher: bool,

    /// Check and update the dependencies
    #[arg(short = 'd', long)]
    pub check_deps: bool,

    /// Upgrade config files to the current format
    #[arg(long)]
    pub upgrade_config: bool,

    /// Run the tasks following project creation
    #[arg(long, hide = true)]
    pub init: bool,
}

impl TaskFlags {
    /// Requested tasks, in execution order
    pub fn selected(&self) -> Vec<Task> {
        if self.init {
            return Task::init_sequence().to_vec();
        }

        let flags = [
            (self.create_client, Task::CreateClient),
            (self.install_plugins, Task::InstallPlugins),
            (self.install_libs, Task::InstallLibs),
            (self.find_doc, Task::FindDoc),
            (self.config_infos, Task::ConfigInfos),
            (self.create_env, Task::CreateEnv),
            (self.eject_launcher, Task::EjectLauncher),
            (self.check_deps, Task::CheckDeps),
            (self.upgrade_config, Task::UpgradeConfig),
        ];

        flags
            .into_iter()
            .filter(|(set, _)| *set)
            .map(|(_, task)| task)
            .collect()
    }
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Directory of the new application (prompted when omitted)
    pub dir: Option<String>,

    /// Application template to use
    #[arg(short, long)]
    pub template: Option<String>,

    /// Do not run `npm install` in the new application
    #[arg(long)]
    pub skip_install: bool,

    /// Do not run the init tasks (plugins, libs, first client)
    #[arg(long)]
    pub no_init: bool,
}

// Version command
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
