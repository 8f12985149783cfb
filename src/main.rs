use clap::Parser;
use log::error;
use thumbs_up::commands::{self, Cli};

#[tokio::main]
async fn main() {
    // Initialize logging
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(why) = commands::handle_command(cli).await {
        error!("Error: {}", why);
        std::process::exit(1);
    }
}
