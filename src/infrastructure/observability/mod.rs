mod init_tracing;
mod prompt_sanitizer;
mod request_id;
mod tracing_config;

pub use init_tracing::init_tracing;
pub use prompt_sanitizer::sanitize_prompt;
pub use request_id::{
    ANONYMOUS_CALLER, REQUEST_ID_HEADER, RequestId, request_id_middleware, span_caller_id,
};
pub use tracing_config::TracingConfig;
