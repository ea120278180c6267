use clap::{Parser, Subcommand};
use kexaudit_dh::{AnalyzerConfig, DhAnalyzer};

mod analyze;
mod batch;
mod groups;
mod hex;
mod report;

/// kexaudit: audit TLS key-exchange parameters.
#[derive(Parser)]
#[command(name = "kexaudit")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Minimum Miller-Rabin rounds for custom DH groups.
    #[arg(long, global = true, env = "KEXAUDIT_MIN_ROUNDS", default_value_t = kexaudit_bignum::MIN_ROUNDS)]
    min_rounds: usize,
    /// Seed for Miller-Rabin witnesses (reproducible runs).
    #[arg(long, global = true, env = "KEXAUDIT_SEED")]
    seed: Option<u64>,
    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze hex-encoded ServerDHParams (dh_p || dh_g || dh_Ys).
    Dh {
        /// Hex string of the parameters.
        params: String,
    },
    /// Decode hex-encoded ServerECDHParams.
    Ecdh {
        /// Hex string of the parameters.
        params: String,
    },
    /// Analyze a file of `dh:<hex>` / `ecdh:<hex>` lines, tracking key reuse.
    Batch {
        /// Input file (use - for stdin).
        file: String,
    },
    /// List the well-known DH groups.
    Groups,
}

impl Cli {
    fn analyzer(&self) -> DhAnalyzer {
        let mut builder = AnalyzerConfig::builder().min_rounds(self.min_rounds);
        if let Some(seed) = self.seed {
            builder = builder.witness_seed(seed);
        }
        DhAnalyzer::new(builder.build())
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let analyzer = cli.analyzer();

    let result = match &cli.command {
        Commands::Dh { params } => analyze::run_dh(&analyzer, params, cli.json),
        Commands::Ecdh { params } => analyze::run_ecdh(params, cli.json),
        Commands::Batch { file } => batch::run(&analyzer, file, cli.json),
        Commands::Groups => groups::run(cli.json),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
