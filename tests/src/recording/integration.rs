#![cfg(test)]
use std::net::Ipv4Addr;
use std::path::PathBuf;

use watchr_common::config::{RecordConfig, StreamConfig};
use watchr_core::recorder::RecordJob;

fn scratch_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("watchr-it-{}-{name}", std::process::id()))
}

fn stub_job(program: &str, output_dir: PathBuf) -> RecordJob {
    RecordJob::new(
        Ipv4Addr::new(10, 0, 0, 5),
        StreamConfig::default(),
        RecordConfig {
            output_dir,
            duration_minutes: 1,
            ffmpeg_program: String::from(program),
            ..RecordConfig::default()
        },
    )
}

#[cfg(unix)]
#[tokio::test]
async fn run_creates_the_output_directory_and_reports_success() {
    let dir = scratch_dir("create");
    let _ = std::fs::remove_dir_all(&dir);

    // `true` ignores the ffmpeg argument list and exits zero.
    let job = stub_job("true", dir.join("nested").join("out"));
    let status = job.run().await.unwrap();

    assert!(status.success());
    assert!(job.record.output_dir.is_dir());

    let _ = std::fs::remove_dir_all(&dir);
}

#[cfg(unix)]
#[tokio::test]
async fn a_nonzero_child_exit_is_a_status_not_an_error() {
    let dir = scratch_dir("nonzero");
    let job = stub_job("false", dir.clone());

    let status = job.run().await.unwrap();
    assert!(!status.success());

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn a_missing_executable_surfaces_as_a_spawn_error() {
    let dir = scratch_dir("missing");
    let job = stub_job("watchr-definitely-not-installed", dir.clone());

    let err = job.run().await.unwrap_err();
    assert!(
        err.to_string()
            .contains("watchr-definitely-not-installed")
    );

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn reruns_with_the_same_inputs_target_the_same_file() {
    let dir = scratch_dir("deterministic");
    let first = stub_job("true", dir.clone());
    let second = stub_job("true", dir);

    assert_eq!(first.output_path(), second.output_path());
}
