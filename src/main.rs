// src/main.rs

use anyhow::Result;
use cellrun::cli::{self, CliArgs};

#[tokio::main]
async fn main() {
    let args = cli::parse();
    if let Err(err) = try_main(args).await {
        eprintln!("cellrun error: {err:?}");
        std::process::exit(1);
    }
}

async fn try_main(args: CliArgs) -> Result<()> {
    cellrun::logging::init_logging(args.log_level)?;
    cellrun::run(args).await
}
