//! Process lifecycle: startup ordering and graceful shutdown.

pub mod shutdown;

pub use shutdown::{listen_for_ctrl_c, Shutdown};
