//! Handler functions

use crate::registry::TransferRegistry;
use std::convert::Infallible;
use std::sync::Arc;
use tokio::sync::Mutex;
use warp::Reply;

/// The `last` handler
///
/// Responds with a JSON array of 0 or 1 transfers: the one with the
/// most recent request date, if the registry holds any.
///
/// GET /partiel1/api/bankTransfer/last
pub async fn last(registry: Arc<Mutex<TransferRegistry>>) -> Result<impl Reply, Infallible> {
    log::debug!("last");
    let transfers = registry.lock().await.last();
    Ok(warp::reply::json(&transfers))
}

/// The `all` handler
///
/// Responds with a JSON array of all registered transfers.
///
/// GET /partiel1/api/bankTransfer/all
pub async fn all(registry: Arc<Mutex<TransferRegistry>>) -> Result<impl Reply, Infallible> {
    log::debug!("all");
    let transfers = registry.lock().await.all();
    Ok(warp::reply::json(&transfers))
}
