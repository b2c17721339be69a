use anyhow::Result;
use clap::{Parser, Subcommand};
use questfolio::cli;

/// questfolio - RPG-styled developer portfolio
#[derive(Parser)]
#[command(name = "questfolio")]
#[command(about = "Portfolio site with a contact form email relay", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Submit the contact form of a running server
    Contact {
        /// Base URL of the server
        #[arg(long, default_value = "http://localhost:3000")]
        url: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        subject: String,

        #[arg(long)]
        message: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = questfolio::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    questfolio::observability::init_observability(
        "questfolio",
        env!("CARGO_PKG_VERSION"),
        &config.logging,
    )?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
        Commands::Contact {
            url,
            name,
            email,
            subject,
            message,
        } => {
            cli::contact::send(cli::contact::ContactInput {
                url,
                name,
                email,
                subject,
                message,
            })
            .await
        }
    }
}
