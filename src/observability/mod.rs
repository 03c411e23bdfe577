//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! http + relay layers produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (relay counters and latency histogram)
//!
//! Consumers:
//!     → stdout (fmt subscriber)
//!     → Prometheus scrape endpoint (only when enabled)
//! ```

pub mod logging;
pub mod metrics;
