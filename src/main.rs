// src/main.rs

use runall::{cli, logging, run};

#[tokio::main]
async fn main() {
    let args = cli::parse();

    let code = match run_main(args).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Unknown error occurred.");
            eprintln!("{err:?}");
            1
        }
    };

    std::process::exit(code);
}

async fn run_main(args: cli::CliArgs) -> anyhow::Result<i32> {
    logging::init_logging(args.log_level)?;
    run(args).await
}
