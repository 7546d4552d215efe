use registry_cleanup::cli::runner::{EXIT_FAILURE, usage_exit_code};
use registry_cleanup::Logger;
use registry_cleanup::cli::{Args, Runner};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = match Args::parse_args() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(usage_exit_code(e.kind()));
        }
    };

    let args = match args.from_env() {
        Ok(args) => args,
        Err(e) => {
            Logger::new(false).error(&e.to_string());
            return ExitCode::from(EXIT_FAILURE);
        }
    };
    let output = args.logger();

    let config = match args.to_config() {
        Ok(config) => config,
        Err(e) => {
            output.error(&e.to_string());
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    match Runner::new(config, output.clone()).run().await {
        Ok(status) => ExitCode::from(status.exit_code()),
        Err(e) => {
            output.error(&e.to_string());
            if e.is_read_error() {
                output.warning("Run aborted while reading the registry; nothing was deleted");
            }
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
