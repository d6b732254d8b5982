mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tower_stats_store::StoreConfig;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = StoreConfig::new(cli.data);

    match cli.command {
        Commands::Add { file } => commands::add::run(config, file.as_deref()),
        Commands::Latest => commands::latest::run(config),
        Commands::List => commands::list::run(config),
        Commands::Show { index } => commands::show::run(config, index),
        Commands::Compare { first, second } => commands::compare::run(config, first, second),
        Commands::Fields { json } => commands::fields::run(json),
        Commands::Version => commands::version::run(),
    }
}
