//! voxd CLI entry point

use std::process::ExitCode;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    voxd::cli::app::run().await
}
