use sandbox_fmt::app;
use sandbox_fmt::cli::{self, Cli};
use sandbox_fmt::error::EXIT_FAILURE;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = match Cli::from_args() {
        Ok(cli) => cli,
        Err(e) => {
            // help/version text goes to stdout, usage errors to stderr
            let _ = e.print();
            std::process::exit(cli::usage_exit_code(&e));
        }
    };
    let config = match cli.into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(EXIT_FAILURE);
        }
    };
    app::init_logging(config.log_level)?;

    let code = app::run(config).await;
    std::process::exit(code)
}
