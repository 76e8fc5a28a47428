pub mod config;
pub mod error;
pub mod handlers;
pub mod request_gate;
pub mod router;
pub mod state;
pub mod upload_decoder;

pub use config::{Environment, Settings};
pub use error::{ApiError, ErrorResponse};
pub use router::create_router;
pub use state::AppState;
