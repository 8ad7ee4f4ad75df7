use clap::Parser;
use investlens::cli::commands::Cli;
use investlens::cli::run::run_command;
use investlens::InvestLens;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let lens = match InvestLens::new() {
        Ok(lens) => lens,
        Err(e) => {
            eprintln!("Error initializing InvestLens: {e}");
            std::process::exit(1);
        }
    };
    log::info!("using backend {}", lens.coordinator().backend_url());

    match run_command(&lens, cli.command, cli.json).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
