//! Runtime configuration for the scan and record engines.
//!
//! Range, port, credentials, and the stream path all live here as
//! documented defaults, so both engines can be driven against arbitrary
//! setups without source edits.

use std::net::Ipv4Addr;
use std::path::PathBuf;
use std::time::Duration;

use crate::network::range::Ipv4Range;

/// Settings for the reachability scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Host range to probe. Defaults to the usable hosts of 192.168.1.0/24.
    pub range: Ipv4Range,
    /// TCP port tested on every host. Defaults to 8554 (RTSP).
    pub port: u16,
    /// Per-probe connect timeout. Defaults to 500 ms.
    pub timeout: Duration,
    /// Upper bound on probes in flight at once. Defaults to 100.
    pub workers: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            range: Ipv4Range::new(
                Ipv4Addr::new(192, 168, 1, 1),
                Ipv4Addr::new(192, 168, 1, 254),
            ),
            port: 8554,
            timeout: Duration::from_millis(500),
            workers: 100,
        }
    }
}

/// How the camera's stream is addressed.
#[derive(Debug, Clone)]
pub struct StreamConfig {
    /// Username embedded in the stream URL. Defaults to "admin".
    pub username: String,
    /// Password embedded in the stream URL. Defaults to "admin".
    pub password: String,
    /// RTSP port on the camera. Defaults to 8554.
    pub port: u16,
    /// Stream path appended to the camera address.
    /// Defaults to "/Streaming/Channels/101".
    pub path: String,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            username: String::from("admin"),
            password: String::from("admin"),
            port: 8554,
            path: String::from("/Streaming/Channels/101"),
        }
    }
}

/// How a capture is written out.
#[derive(Debug, Clone)]
pub struct RecordConfig {
    /// Directory recordings land in, created recursively when missing.
    /// Defaults to "output".
    pub output_dir: PathBuf,
    /// Capture length in minutes. Defaults to 5.
    pub duration_minutes: u32,
    /// Whether ffmpeg also opens a live display window while saving.
    /// Defaults to on.
    pub display: bool,
    /// Executable to delegate the capture to. Defaults to "ffmpeg" on the
    /// PATH; overridable for tests and non-standard installs.
    pub ffmpeg_program: String,
}

impl Default for RecordConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            duration_minutes: 5,
            display: true,
            ffmpeg_program: String::from("ffmpeg"),
        }
    }
}
