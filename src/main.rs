use anyhow::Result;
use clap::{Parser, Subcommand};
use link_shortener::{config, server};
use tracing_subscriber::EnvFilter;

/// URL shortener with visit counting.
#[derive(Parser)]
#[command(name = "link-shortener")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address, overrides `LISTEN`
    #[arg(long, global = true)]
    listen: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve,

    /// Apply database migrations and exit
    Migrate,
}

fn init_tracing(config: &config::Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = config::load_from_env()?;
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
        config.validate()?;
    }

    init_tracing(&config);
    config.print_summary();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => server::run(config).await,
        Command::Migrate => {
            let pool = server::connect_database(&config).await?;
            server::migrate(&pool).await?;
            pool.close().await;
            Ok(())
        }
    }
}
