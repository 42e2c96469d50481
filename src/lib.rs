use std::sync::Arc;

pub mod account;
pub mod config;
pub mod error;
pub mod extract;
pub mod handler;
pub mod jwt_auth;
pub mod model;
pub mod notes;
pub mod request;
pub mod response;
pub mod route;
pub mod store;

pub use config::Config;
pub use error::AppError;
pub use route::create_router;

pub struct AppState {
    pub store: Arc<dyn store::Store>,
    pub config: Config,
}
