//! Outbound relay subsystem.
//!
//! # Data Flow
//! ```text
//! url query parameter (raw string)
//!     → client.rs (parse, open transient client, GET, read full body)
//!     → RelayResult { status, content }
//!     → http layer serializes it as JSON
//! ```
//!
//! # Design Decisions
//! - One client per relay; nothing is pooled or cached across requests
//! - No timeout and no retries: a failure is terminal for that request
//! - Upstream status is carried as data, never as this service's status

pub mod client;
pub mod types;

pub use client::relay_get;
pub use types::{RelayError, RelayResult};
