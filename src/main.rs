// src/main.rs

use pkgstep::step::ExecutionResult;
use pkgstep::{cli, logging, run};

#[tokio::main]
async fn main() {
    match run_main().await {
        Ok(result) => {
            if !result.is_success() {
                eprintln!("{}", result.message);
            }
            std::process::exit(result.exit_code);
        }
        Err(err) => {
            eprintln!("pkgstep error: {err:?}");
            std::process::exit(1);
        }
    }
}

async fn run_main() -> pkgstep::errors::Result<ExecutionResult> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args).await
}
