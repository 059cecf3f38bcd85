//! Engines for the `watchr` binary: the reachability scanner and the
//! ffmpeg-backed stream recorder. No terminal output happens here beyond
//! `tracing` diagnostics; the CLI crate owns the operator surface.

pub mod recorder;
pub mod scanner;
