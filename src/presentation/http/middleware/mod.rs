// src/presentation/http/middleware/mod.rs
//! Cross-cutting request handling, listed in chain order.
mod default_errors;
mod json_headers;
mod recover;
mod request_context;
mod request_logger;

pub use default_errors::{no_method, no_route};
pub use json_headers::force_json;
pub use recover::recover;
pub use request_context::{REQUEST_ID_HEADER, persist_context};
pub use request_logger::{RequestLoggerLayer, request_logger};
