mod game_service;
mod server_config;
mod web_server;

use clap::Parser;
use common::{log, logger};
use game_service::GameService;

#[derive(Parser)]
#[command(name = "tictactoe_server")]
struct Args {
    /// Path to the YAML config file.
    #[arg(long, default_value = server_config::DEFAULT_CONFIG_FILE)]
    config: String,

    /// Overrides the bind address from the config file.
    #[arg(long)]
    bind: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Server".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = server_config::get_config_manager(&args.config);
    let mut config = config_manager.get_config()?;
    if let Some(bind) = args.bind {
        config.bind_address = bind;
    }

    log!("Starting game server with bind address {}", config.bind_address);

    let service = GameService::new();
    web_server::run_web_server(service, &config.bind_address).await?;

    Ok(())
}
