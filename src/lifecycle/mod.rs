//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Entry point:
//!     Build config → Create RelayServer → Bind listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     Signal received → drain(grace) → server stops accepting → in-flight
//!     requests finish (or grace elapses) → exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → trigger graceful shutdown
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::{DrainGuard, Shutdown, ShutdownSignal};
pub use signals::wait_for_signal;
