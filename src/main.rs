use clap::Parser;
use log::debug;
use rouilleftp::config::Config;
use rouilleftp::core_cli::{self, Cli};
use rouilleftp::core_error::{report_error, FtpError};
use rouilleftp::core_log::init_logger;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Parse CLI arguments
    let args = Cli::parse();

    init_logger(args.verbose);

    // Load configuration from the TOML file
    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return report_error(&FtpError::InvalidArguments(format!("{:#}", e))),
    };
    let options = match config.client.session_options(args.verbose) {
        Ok(options) => options,
        Err(e) => return report_error(&e),
    };
    debug!("Running {:?} with {:?}", args.command, options);

    match core_cli::run(args.command, options).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_error(&e),
    }
}
