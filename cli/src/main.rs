mod commands;
mod terminal;

use commands::{CommandLine, discover, record};
use terminal::{logging, print};
use watchr_common::config::{RecordConfig, ScanConfig, StreamConfig};
use watchr_common::network::target::Target;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();
    print::banner(commands.no_banner);

    let scan_cfg = ScanConfig {
        range: commands.range,
        port: commands.port,
        ..ScanConfig::default()
    };
    let stream_cfg = StreamConfig {
        username: commands.username.clone(),
        password: commands.password.clone(),
        port: commands.port,
        path: commands.stream_path.clone(),
    };
    let record_cfg = RecordConfig {
        output_dir: commands.output_dir.clone(),
        duration_minutes: commands.duration,
        display: !commands.no_display,
        ..RecordConfig::default()
    };

    match commands.ip {
        Target::Discover => {
            print::header("scanning for cameras");
            discover::discover(&scan_cfg, stream_cfg, record_cfg).await
        }
        Target::Host { target_addr } => {
            print::header("recording");
            let status = record::record(target_addr, stream_cfg, record_cfg).await?;
            print::end_of_program();
            // Direct-address mode adopts the media process's exit code.
            std::process::exit(status.code().unwrap_or(0));
        }
    }
}
