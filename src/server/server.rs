mod error;
use error::ServerError;

use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use log::info;
use tokio::sync::Mutex;

use piggy::bot::{Bot, MessageEvent, MessageOutcome};
use piggy::config::AppConfig;
use piggy::{JsonStore, ProgressCard};

const SERVER_CONFIG: &str = "resources/server.toml";

/// One bot context behind a mutex. The platform glue may deliver
/// events concurrently, and load-mutate-save must not interleave.
type SharedBot = Arc<Mutex<Bot<JsonStore>>>;

async fn index() -> &'static str {
    concat!("piggy ", env!("CARGO_PKG_VERSION"))
}

async fn balance(State(bot): State<SharedBot>) -> Result<Json<ProgressCard>, ServerError> {
    let bot = bot.lock().await;
    return Ok(Json(bot.balance()?));
}

async fn message(
    State(bot): State<SharedBot>,
    Json(event): Json<MessageEvent>,
) -> Result<Json<MessageOutcome>, ServerError> {
    let bot = bot.lock().await;
    return Ok(Json(bot.handle_message(&event)?));
}

// Restricted to the goal's owner by the command-routing collaborator;
// the endpoint itself resets unconditionally.
async fn reset(State(bot): State<SharedBot>) -> Result<Json<ProgressCard>, ServerError> {
    let bot = bot.lock().await;
    return Ok(Json(bot.reset()?));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config =
        AppConfig::read(SERVER_CONFIG).with_context(|| "failed to read app configuration")?;

    let bind = config.server.bind;
    let goal_name = config.goal.name.clone();
    let bot = Bot::new(JsonStore::new(&config.storage.ledger), config.goal);
    let shared: SharedBot = Arc::new(Mutex::new(bot));

    let app = Router::new()
        .route("/", get(index))
        .route("/balance", get(balance))
        .route("/message", post(message))
        .route("/reset", post(reset))
        .with_state(shared);

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {}", bind))?;
    info!("ready: tracking \"{}\" on {}", goal_name, bind);
    axum::serve(listener, app).await?;

    return Ok(());
}
