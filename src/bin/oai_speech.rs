//! `oai-speech` binary.
//!
//! Usage:
//!   oai-speech                                List available models
//!   oai-speech speak <text> <path>            Synthesize speech into <path>

use oai_speech::cli::{self, Command};
use oai_speech::ClientConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = Command::parse(&args);

    if let Err(e) = cli::run(command, ClientConfig::from_env(), &mut std::io::stdout()).await {
        eprintln!("failed to write output: {e}");
    }
}
