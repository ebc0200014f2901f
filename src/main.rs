use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    tagfinder::app::startup::startup().await
}
