//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, routing)
//!     → request.rs (request ID, query parameters)
//!     → handlers.rs (info or relay)
//!     → response.rs (JSON bodies, error mapping)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{RelayParams, UuidRequestId, URL_PARAM, X_REQUEST_ID};
pub use response::{ApiError, InfoResponse, INFO_MESSAGE};
pub use server::RelayServer;
