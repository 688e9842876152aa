//! The "Transfers Web Service's" entry point.

use std::env;
use std::sync::Arc;
use tokio::sync::Mutex;
use transfers_common::errors::CANNOT_SEED_TRANSFERS_MSG;
use transfers_web_service::handlers;
use transfers_web_service::registry::TransferRegistry;
use warp::Filter;

/// The "Transfers Web Service's" entry point.
#[tokio::main]
async fn main() {
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "transfers=info");
    }
    pretty_env_logger::init();

    let log = warp::log("transfers");

    let registry = match TransferRegistry::seeded() {
        Ok(registry) => Arc::new(Mutex::new(registry)),
        Err(err) => {
            log::error!("{}: {:?}", CANNOT_SEED_TRANSFERS_MSG, err);
            return;
        }
    };
    let registry_state = warp::any().map(move || registry.clone());

    let last = warp::path!("partiel1" / "api" / "bankTransfer" / "last")
        .and(warp::get())
        .and(registry_state.clone())
        .and_then(handlers::last);

    let all = warp::path!("partiel1" / "api" / "bankTransfer" / "all")
        .and(warp::get())
        .and(registry_state.clone())
        .and_then(handlers::all);

    let routes = last.or(all).with(log);

    // Start up the server
    warp::serve(routes).run(([127, 0, 0, 1], 8081)).await;
}
