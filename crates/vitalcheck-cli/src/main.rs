use clap::Parser;
use eyre::Result;
use vitalcheck_cli::cli::{Cli, Command};
use vitalcheck_cli::{commands, config, logging};
use vitalcheck_session::{AssessmentSession, FileStore};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init_tracing(cli.log_json);

    let config_path = config::config_path()?;
    let loaded = config::load_config(&config_path)?;

    if let Command::Config(args) = &cli.command {
        return commands::configure(&config_path, loaded, args, &mut std::io::stdout());
    }

    let settings = config::Settings::resolve(&loaded, cli.session_dir.as_deref(), |key| {
        std::env::var(key).ok()
    })?;
    tracing::debug!(
        session_dir = %settings.session_dir.display(),
        export_dir = %settings.export_dir.display(),
        "settings resolved"
    );

    let mut session = AssessmentSession::open(FileStore::new(&settings.session_dir))?;
    commands::run(&cli.command, &mut session, &settings, &mut std::io::stdout())
}
