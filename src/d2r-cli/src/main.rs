mod cli;
mod commands;
mod config;
mod dispatch;
mod memory;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::*;
use commands::configure::ConfigureArgs;

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "d2r=debug,d2r_cli=debug"
    } else {
        "d2r=info,d2r_cli=info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Configure {
            unit_table_offset,
            hover_offset,
            process,
            module,
            layout,
            show,
        } => {
            let args = ConfigureArgs {
                unit_table_offset,
                hover_offset,
                process,
                module,
                layout,
            };
            dispatch::dispatch_configure(args, show)?;
        }

        Commands::Memory { action } => {
            dispatch::dispatch_memory(action)?;
        }
    }

    Ok(())
}
