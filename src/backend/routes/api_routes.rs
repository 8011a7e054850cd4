/**
 * Authentication Routes
 *
 * - `POST /register` - Create an account
 * - `POST /login` - Exchange credentials for a bearer token
 *
 * Both routes are public.
 */

use axum::{routing::post, Router};

use crate::backend::auth::{login, register};
use crate::backend::server::state::AppState;

/// Add the authentication routes to `router`
pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/register", post(register))
        .route("/login", post(login))
}
