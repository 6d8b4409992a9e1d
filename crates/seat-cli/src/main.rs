use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "seat",
    about = "SeatGrid — exam seat allocation",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seat the configured groups with one strategy.
    ///
    /// Strategies: simple, min-chunk, lookahead, best-fit.
    ///
    /// Strategy and threshold are read from [allocation] in seat.toml;
    /// the flags below override them for this run.
    Allocate {
        /// Path to seat.toml
        #[arg(short, long, default_value = "seat.toml")]
        config: String,
        /// Override the configured strategy
        #[arg(short, long)]
        strategy: Option<String>,
        /// Override the minimum chunk size
        #[arg(short, long)]
        min_chunk: Option<i64>,
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// Run every strategy on the same input and compare the results
    Compare {
        #[arg(short, long, default_value = "seat.toml")]
        config: String,
        /// Use one threshold for all strategies instead of their presets
        #[arg(short, long)]
        min_chunk: Option<i64>,
    },
    /// Load a room table or catalog file and summarize it
    Catalog {
        /// Path to the room table (.csv) or catalog document (.toml, .json)
        #[arg(short, long)]
        path: String,
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// Generate a seat.toml scaffold
    Init {
        #[arg(short, long, default_value = ".")]
        path: String,
        /// Room table the scaffold should point at
        #[arg(long, default_value = "rooms.csv")]
        rooms: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("seat=info".parse()?)
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Allocate { config, strategy, min_chunk, format } => {
            commands::allocate::allocate(&config, strategy.as_deref(), min_chunk, &format)
        }
        Commands::Compare { config, min_chunk } => {
            commands::compare::compare(&config, min_chunk)
        }
        Commands::Catalog { path, format } => {
            commands::catalog::catalog(&path, &format)
        }
        Commands::Init { path, rooms } => {
            commands::init::init(&path, &rooms)
        }
    }
}
