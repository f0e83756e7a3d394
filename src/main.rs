use anyhow::Result;
use clap::Parser;
use creditx::cli::{Cli, Commands};
use creditx::commands;
use creditx::core::Error;

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        let code = err
            .downcast_ref::<Error>()
            .map(Error::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Score {
            cibil,
            crif,
            equifax,
            experian,
            loan_type,
            format,
            output,
            config,
        } => commands::score::run(commands::score::ScoreConfig {
            cibil,
            crif,
            equifax,
            experian,
            loan_type,
            format,
            output,
            config,
        }),
        Commands::Profiles { format, config } => {
            commands::profiles::run(commands::profiles::ProfilesConfig { format, config })
        }
        Commands::Init { force } => commands::init::init_config(force),
    }
}
