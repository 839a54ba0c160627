mod client_config;
mod game_ui;
mod http_client;
mod state;

use clap::Parser;
use eframe::egui;
use tokio::sync::mpsc;

use common::{Mark, log, logger};

use game_ui::GameApp;
use http_client::http_client_task;
use state::SharedState;

#[derive(Parser)]
#[command(name = "tictactoe_client")]
struct Args {
    /// Path to the YAML config file.
    #[arg(long, default_value = client_config::DEFAULT_CONFIG_FILE)]
    config: String,

    /// Overrides the server address from the config file.
    #[arg(long)]
    server: Option<String>,

    /// Overrides the mark from the config file: X or O.
    #[arg(long)]
    player: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn parse_player(raw: &str) -> Result<Mark, String> {
    match raw {
        "X" | "x" => Ok(Mark::X),
        "O" | "o" => Ok(Mark::O),
        other => Err(format!("--player must be X or O, got '{}'", other)),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = client_config::get_config_manager(&args.config);
    let mut config = config_manager.get_config()?;
    if let Some(server) = args.server {
        config.server_address = server;
    }
    if let Some(player) = args.player {
        config.mark = parse_player(&player)?;
    }
    let player = config.mark;

    log!(
        "Starting client as {:?} against {}",
        player,
        config.server_address
    );

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let server_address = config.server_address.clone();
    let poll_interval = std::time::Duration::from_millis(config.poll_interval_ms);
    let shared_state_clone = shared_state.clone();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("Failed to create client runtime");
        rt.block_on(http_client_task(
            server_address,
            player,
            poll_interval,
            shared_state_clone,
            command_rx,
        ));
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([340.0, 400.0])
            .with_title(format!("Tic-Tac-Toe - {:?}", player)),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe Client",
        options,
        Box::new(move |_cc| Ok(Box::new(GameApp::new(player, shared_state, command_tx)))),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_player_accepts_both_cases() {
        assert_eq!(parse_player("X").unwrap(), Mark::X);
        assert_eq!(parse_player("o").unwrap(), Mark::O);
    }

    #[test]
    fn test_parse_player_rejects_anything_else() {
        assert!(parse_player("Empty").is_err());
        assert!(parse_player("1").is_err());
    }
}
