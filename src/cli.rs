//! Command-line argument definitions.
use clap::{Parser, Subcommand};

/// Top-level CLI entry point for the developer-tooling installer.
#[derive(Parser, Debug)]
#[command(
    name = "devtools-setup",
    about = "Install shared lint/format configs, git hooks and a Makefile into a project",
    version
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options shared by every subcommand.
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Preview changes without applying
    #[arg(short = 'd', long, global = true)]
    pub dry_run: bool,

    /// Target project root (defaults to the current directory)
    #[arg(long, global = true)]
    pub project: Option<std::path::PathBuf>,

    /// Override the resource bundle directory
    #[arg(long, global = true)]
    pub resources: Option<std::path::PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Install configs, git hooks, Makefile and templates into the project
    Install(InstallOpts),
    /// Create or inspect the project settings file
    Settings(SettingsOpts),
    /// Print a shell completion script
    Completions(CompletionsOpts),
    /// Print version information
    Version,
}

impl Command {
    /// Short name used for the per-command log file.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Install(_) => "install",
            Self::Settings(_) => "settings",
            Self::Completions(_) => "completions",
            Self::Version => "version",
        }
    }
}

/// Options for the `install` subcommand.
#[derive(Parser, Debug, Clone, Default)]
pub struct InstallOpts {
    /// Skip specific steps
    #[arg(long, value_delimiter = ',')]
    pub skip: Vec<String>,

    /// Run only specific steps
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,

    /// Do not copy the template directory
    #[arg(long)]
    pub no_templates: bool,
}

/// Options for the `settings` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct SettingsOpts {
    /// What to do with the settings file.
    #[command(subcommand)]
    pub action: SettingsAction,
}

/// Actions available under `settings`.
#[derive(Subcommand, Debug, Clone)]
pub enum SettingsAction {
    /// Write the default settings file into the project
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective settings as JSON
    Show,
}

/// Options for the `completions` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct CompletionsOpts {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_install() {
        let cli = Cli::parse_from(["devtools-setup", "install"]);
        assert!(matches!(cli.command, Command::Install(_)));
        assert!(!cli.global.dry_run);
    }

    #[test]
    fn parse_install_dry_run_short() {
        let cli = Cli::parse_from(["devtools-setup", "-d", "install"]);
        assert!(cli.global.dry_run);
    }

    #[test]
    fn parse_install_skip_steps() {
        let cli = Cli::parse_from(["devtools-setup", "install", "--skip", "hooks,templates"]);
        let Command::Install(opts) = cli.command else {
            panic!("expected Install command");
        };
        assert_eq!(opts.skip, vec!["hooks", "templates"]);
    }

    #[test]
    fn parse_install_only_steps() {
        let cli = Cli::parse_from(["devtools-setup", "install", "--only", "configs"]);
        let Command::Install(opts) = cli.command else {
            panic!("expected Install command");
        };
        assert_eq!(opts.only, vec!["configs"]);
    }

    #[test]
    fn parse_install_no_templates() {
        let cli = Cli::parse_from(["devtools-setup", "install", "--no-templates"]);
        let Command::Install(opts) = cli.command else {
            panic!("expected Install command");
        };
        assert!(opts.no_templates);
    }

    #[test]
    fn parse_project_override() {
        let cli = Cli::parse_from(["devtools-setup", "--project", "/tmp/app", "install"]);
        assert_eq!(cli.global.project, Some(std::path::PathBuf::from("/tmp/app")));
    }

    #[test]
    fn parse_resources_override() {
        let cli = Cli::parse_from(["devtools-setup", "--resources", "/opt/bundle", "install"]);
        assert_eq!(
            cli.global.resources,
            Some(std::path::PathBuf::from("/opt/bundle"))
        );
    }

    #[test]
    fn parse_settings_init_force() {
        let cli = Cli::parse_from(["devtools-setup", "settings", "init", "--force"]);
        let Command::Settings(opts) = cli.command else {
            panic!("expected Settings command");
        };
        assert!(matches!(opts.action, SettingsAction::Init { force: true }));
    }

    #[test]
    fn parse_settings_show() {
        let cli = Cli::parse_from(["devtools-setup", "settings", "show"]);
        let Command::Settings(opts) = cli.command else {
            panic!("expected Settings command");
        };
        assert!(matches!(opts.action, SettingsAction::Show));
    }

    #[test]
    fn parse_completions() {
        let cli = Cli::parse_from(["devtools-setup", "completions", "bash"]);
        assert!(matches!(cli.command, Command::Completions(_)));
    }

    #[test]
    fn parse_version() {
        let cli = Cli::parse_from(["devtools-setup", "version"]);
        assert!(matches!(cli.command, Command::Version));
        assert_eq!(cli.command.name(), "version");
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::parse_from(["devtools-setup", "-v", "install"]);
        assert!(cli.verbose);
    }
}
