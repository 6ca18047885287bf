use clap::Parser;
use dotenvy::dotenv;

use collegiate::console::{self, Cli};
use collegiate::logging::init_console_logging;

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_console_logging();

    let cli = Cli::parse();

    if let Err(err) = console::run(cli).await {
        eprintln!("\n❌ {err}");
        std::process::exit(1);
    }
}
