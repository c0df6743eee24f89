use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use lcms_track::injection::SuccessPolicy;
use std::path::PathBuf;

mod batches;
mod config;
mod guard;
mod plan;
mod solvent;
mod validate;

pub use config::Config;

/// lcms-track - LC-MS method development calculations
#[derive(Parser)]
#[command(name = "lcms-track")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Load settings from a TOML config file
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Batch success policy.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PolicyArg {
    /// Flag of the last injection encountered
    LastSeen,
    /// Every injection must have succeeded
    AllSucceeded,
}

impl From<PolicyArg> for SuccessPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::LastSeen => SuccessPolicy::LastSeen,
            PolicyArg::AllSucceeded => SuccessPolicy::AllSucceeded,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate solvent usage for a batch run with a method
    Solvent {
        /// Method record (JSON object)
        #[arg(short, long, value_name = "FILE")]
        method: PathBuf,

        /// Number of injections in the batch
        #[arg(short, long)]
        batch_size: u32,

        /// Injection volume per injection (defaults to the method's)
        #[arg(short, long)]
        injection_volume: Option<f64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Group injection records into batches
    Batches {
        /// Injection records (JSON array)
        #[arg(short, long, value_name = "FILE")]
        injections: PathBuf,

        /// Method records (JSON array), used for solvent estimates
        #[arg(short, long, value_name = "FILE")]
        methods: Option<PathBuf>,

        /// Batch success policy (overrides the config file)
        #[arg(short, long, value_enum)]
        policy: Option<PolicyArg>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Report guard and analytical column wear for a column
    Guard {
        /// Guard column records (JSON array)
        #[arg(short, long, value_name = "FILE")]
        guards: PathBuf,

        /// Injection records (JSON array)
        #[arg(short, long, value_name = "FILE")]
        injections: PathBuf,

        /// Column identifier
        #[arg(short, long)]
        column: String,

        /// Estimated lifetime of the analytical column in injections
        #[arg(short, long)]
        estimated_lifetime: Option<u32>,
    },

    /// Allocate injection numbers for a new batch on a column
    Plan {
        /// Injection records (JSON array)
        #[arg(short, long, value_name = "FILE")]
        injections: PathBuf,

        /// Column identifier
        #[arg(short, long)]
        column: String,

        /// Method identifier
        #[arg(short, long)]
        method: String,

        /// Number of injections in the new batch
        #[arg(short, long)]
        size: u32,
    },

    /// Check a method's gradient table
    Validate {
        /// Method record (JSON object)
        #[arg(short, long, value_name = "FILE")]
        method: PathBuf,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Solvent {
            method,
            batch_size,
            injection_volume,
            json,
        } => solvent::run(method, batch_size, injection_volume, json),
        Commands::Batches {
            injections,
            methods,
            policy,
            json,
        } => {
            let policy = policy
                .map(SuccessPolicy::from)
                .or(config.batches.success_policy)
                .unwrap_or_default();
            batches::run(injections, methods, policy, json)
        }
        Commands::Guard {
            guards,
            injections,
            column,
            estimated_lifetime,
        } => guard::run(guards, injections, &column, estimated_lifetime, &config.lifetime),
        Commands::Plan {
            injections,
            column,
            method,
            size,
        } => plan::run(injections, &column, &method, size),
        Commands::Validate { method } => validate::run(method),
    }
}
