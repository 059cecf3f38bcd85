pub mod discover;
pub mod record;

use std::path::PathBuf;

use clap::Parser;
use watchr_common::network::range::Ipv4Range;
use watchr_common::network::target::Target;

#[derive(Parser)]
#[command(name = "watchr")]
#[command(about = "Find RTSP cameras on the network and record their streams.")]
#[command(version)]
pub struct CommandLine {
    /// Camera address to record, or 'all' to scan and pick interactively
    #[arg(long, default_value = "all")]
    pub ip: Target,

    /// CIDR block scanned in discovery mode
    #[arg(long, default_value = "192.168.1.0/24")]
    pub range: Ipv4Range,

    /// RTSP port, used both for probing and for the stream URL
    #[arg(long, default_value_t = 8554)]
    pub port: u16,

    /// Directory recordings are written into (created if missing)
    #[arg(long, default_value = "output")]
    pub output_dir: PathBuf,

    /// Recording duration in minutes
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    pub duration: u32,

    /// Username embedded in the stream URL
    #[arg(long, default_value = "admin")]
    pub username: String,

    /// Password embedded in the stream URL
    #[arg(long, default_value = "admin")]
    pub password: String,

    /// Stream path appended to the camera address
    #[arg(long, default_value = "/Streaming/Channels/101")]
    pub stream_path: String,

    /// Record without opening the live display window
    #[arg(long)]
    pub no_display: bool,

    /// Skip the startup banner
    #[arg(long)]
    pub no_banner: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
