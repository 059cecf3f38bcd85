use std::net::Ipv4Addr;
use std::time::Instant;

use colored::*;

use crate::terminal::{print, prompt, spinner};
use watchr_common::config::{RecordConfig, ScanConfig, StreamConfig};
use watchr_core::scanner::{self, ProgressFn};

use super::record;

pub async fn discover(
    scan_cfg: &ScanConfig,
    stream_cfg: StreamConfig,
    record_cfg: RecordConfig,
) -> anyhow::Result<()> {
    print::print_status(format!(
        "Probing {} addresses on port {}",
        scan_cfg.range.len(),
        scan_cfg.port
    ));

    spinner::get_spinner().set_message("Scanning network for cameras...");
    let start_time: Instant = Instant::now();

    let on_host_found: ProgressFn = Box::new(spinner::report_scan_progress);
    let cameras: Vec<Ipv4Addr> = scanner::perform_discovery(scan_cfg, Some(on_host_found)).await?;

    spinner::finish();

    if cameras.is_empty() {
        print::header("zero cameras detected");
        print::no_results();
        return Ok(());
    }

    print::header("available cameras");
    for (idx, addr) in cameras.iter().enumerate() {
        print::numbered_line(idx + 1, &addr.to_string());
    }

    print_summary(cameras.len(), start_time.elapsed().as_secs_f64());

    let selection: usize =
        prompt::read_selection("Select a camera to record (enter the number)")?;
    let target: Ipv4Addr = scanner::pick(&cameras, selection)?;

    record::record(target, stream_cfg, record_cfg).await?;
    print::end_of_program();
    Ok(())
}

fn print_summary(camera_count: usize, elapsed_secs: f64) {
    let unit: &str = if camera_count == 1 { "camera" } else { "cameras" };
    let count: ColoredString = format!("{camera_count} {unit}").bold().green();
    let total_time: ColoredString = format!("{elapsed_secs:.2}s").bold().yellow();

    print::fat_separator();
    print::centerln(&format!("Scan complete: {count} found in {total_time}"));
}
