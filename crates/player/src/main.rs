//! Escapade Player - composition root binary.

use std::sync::Arc;

use tokio::io::AsyncBufReadExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use escapade_player::application::dto::ControlMsg;
use escapade_player::console;
use escapade_player::infrastructure::http_client::HttpApiAdapter;
use escapade_player::infrastructure::platform::{FileStorageProvider, SystemTimeProvider};
use escapade_player::GameController;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "escapade_player=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_url =
        std::env::var("ESCAPADE_API_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());
    tracing::info!(%base_url, "starting Escapade player");

    let raw_api = Arc::new(HttpApiAdapter::new(&base_url));
    let storage = Arc::new(FileStorageProvider::new());
    let time = Arc::new(SystemTimeProvider);

    let (controller, receiver) = GameController::new(raw_api, storage, time);
    let sender = controller.sender();
    let bus = controller.bus();
    bus.subscribe(|event| {
        if let Some(line) = console::render_event(&event) {
            println!("{line}");
        }
    })
    .await;

    let runtime = tokio::spawn(controller.run(receiver));

    println!("Escapade - type `help` for commands.");
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        match console::parse_line(&line) {
            console::Command::Quit => break,
            console::Command::Help => println!("{}", console::HELP),
            console::Command::Themes => println!("{}", console::render_catalog()),
            console::Command::Intent(intent) => {
                if sender.send(ControlMsg::Intent(intent)).is_err() {
                    break;
                }
            }
            console::Command::Unknown(message) => println!("{message}"),
            console::Command::Empty => {}
        }
    }

    runtime.abort();
    Ok(())
}
