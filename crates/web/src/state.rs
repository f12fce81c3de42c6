use std::sync::Arc;

use axum::extract::FromRef;
use storage::Database;

use crate::features::auth::services::TokenExchange;

/// Shared handler state. Handlers extract the part they need.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub auth: Arc<TokenExchange>,
}

impl AppState {
    pub fn new(db: Database, auth: TokenExchange) -> Self {
        Self {
            db,
            auth: Arc::new(auth),
        }
    }
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for Arc<TokenExchange> {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}
