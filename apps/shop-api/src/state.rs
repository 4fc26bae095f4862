//! Shared state for the shop API.

use mongodb::{Client, Database};

use crate::config::Config;

/// State handed to every route group at wiring time.
///
/// Cloning is cheap: the MongoDB handles share one connection pool and the
/// config is plain data. Route groups pull what they need out of this at
/// startup (repositories get `db`, gateways get the service URLs from
/// `config`) rather than carrying the whole state per request.
#[derive(Clone)]
pub struct AppState {
    /// Configuration loaded from the environment at startup
    pub config: Config,
    /// Client handle, kept for readiness pings
    pub mongo_client: Client,
    /// Database holding the user and cart collections
    pub db: Database,
}
