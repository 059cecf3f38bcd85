//! Shared models and configuration for the `watchr` workspace.
//!
//! Nothing in this crate performs I/O beyond printing; the engines live in
//! `watchr-core` and the terminal surface in the `watchr` binary.

pub mod config;
pub mod error;
pub mod network;

mod macros;
