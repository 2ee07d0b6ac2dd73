//! Outbound transport subsystem.

pub mod client;

pub use client::build_client;
