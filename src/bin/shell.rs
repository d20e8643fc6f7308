//! Congo Storage Shell Binary
//!
//! Runs the interactive menu on stdin/stdout.

use std::io;

use clap::Parser;
use congo_storage::shell::Session;
use congo_storage::{Config, DescriptionPolicy, StorageManager};
use tracing_subscriber::{fmt, EnvFilter};

/// Congo Storage
#[derive(Parser, Debug)]
#[command(name = "congo-storage")]
#[command(about = "Interactive inventory tracker")]
#[command(version)]
struct Args {
    /// Description index policy: overwrite | keep-all
    #[arg(short, long, default_value = "overwrite")]
    policy: DescriptionPolicy,

    /// Menu title
    #[arg(short, long, default_value = "Congo Storage Management")]
    title: String,

    /// Log filter used when RUST_LOG is unset
    #[arg(short, long, default_value = "warn")]
    log_filter: String,

    /// Expected item count, reserved up front in the id index
    #[arg(short, long, default_value = "0")]
    capacity: usize,
}

impl Args {
    /// Build config from args
    fn into_config(self) -> Config {
        Config::builder()
            .description_policy(self.policy)
            .initial_capacity(self.capacity)
            .title(self.title)
            .log_filter(self.log_filter)
            .build()
    }
}

fn main() {
    let config = Args::parse().into_config();

    // Initialize tracing/logging (stderr, so the menu on stdout stays clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    tracing::info!("Congo Storage v{}", congo_storage::VERSION);
    tracing::info!("Description policy: {}", config.description_policy);

    let mut manager = StorageManager::with_config(&config);

    let stdin = io::stdin();
    let mut session = Session::new(&mut manager, stdin.lock(), io::stdout(), io::stderr())
        .with_title(config.title.clone());

    if let Err(e) = session.run() {
        tracing::error!("Session error: {}", e);
        std::process::exit(1);
    }
}
