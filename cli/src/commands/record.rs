use std::net::Ipv4Addr;
use std::process::ExitStatus;

use watchr_common::config::{RecordConfig, StreamConfig};
use watchr_common::{info, success, warn};
use watchr_core::recorder::RecordJob;

/// Runs one recording to completion and reports how it went. The exit
/// status comes back to the caller untouched; deciding what a nonzero
/// exit means is the entry flow's business.
pub async fn record(
    target: Ipv4Addr,
    stream_cfg: StreamConfig,
    record_cfg: RecordConfig,
) -> anyhow::Result<ExitStatus> {
    let job = RecordJob::new(target, stream_cfg, record_cfg);

    if job.record.display {
        info!(
            "Saving stream to {} and displaying...",
            job.output_path().display()
        );
    } else {
        info!("Saving stream to {}...", job.output_path().display());
    }

    let status: ExitStatus = job.run().await?;

    if status.success() {
        success!("Stream saved to {}", job.output_path().display());
    } else {
        warn!("ffmpeg exited with {status}");
    }

    Ok(status)
}
