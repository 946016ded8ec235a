use clap::Parser;
use roster::cli::{get_log_level, Cli, Session};
use roster::config::RosterConfig;
use roster::error::RosterError;
use std::io;
use tracing::{debug, error, trace};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(get_log_level(cli.verbose))
        .with_writer(io::stderr)
        .with_target(cli.verbose >= 2) // Show target module for -vv and above
        .with_line_number(cli.verbose >= 3)
        .init();

    debug!("roster started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args_os().collect::<Vec<_>>());

    if let Err(e) = run(&cli) {
        error!("Fatal error: {}", e);
        let exit_code = match e.downcast_ref::<RosterError>() {
            Some(roster_err) => {
                error!(
                    code = roster_err.code(),
                    kind = roster_err.description(),
                    "Session aborted"
                );
                eprintln!("Error: {}", roster_err.user_message());
                roster_err.exit_code()
            }
            None => {
                eprintln!("Error: {e}");
                1
            }
        };
        std::process::exit(exit_code);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config = RosterConfig::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    debug!(
        schema = %config.schema_path.display(),
        average = %config.average,
        "Starting session"
    );

    let stdin = io::stdin();
    let mut session = Session::new(&config, stdin.lock(), io::stdout(), io::stderr());

    if let Some(path) = &cli.load {
        session.load_file(path)?;
    }

    session.run()
}
