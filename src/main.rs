use clap::Parser;
use tracing_subscriber::EnvFilter;

use translate_cli::cli::{Args, ProcessTerminator, connect_google, run};
use translate_cli::config::ConfigManager;
use translate_cli::output::{self, OutputConfig};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    output::init(OutputConfig::detect(args.quiet));

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    run(
        args,
        || ConfigManager::new().load_or_default(),
        connect_google,
        &mut ProcessTerminator,
    )
    .await;
}
