#![cfg(test)]
use std::net::Ipv4Addr;
use std::time::Duration;

use tokio::net::TcpListener;
use watchr_common::config::ScanConfig;
use watchr_common::network::range::Ipv4Range;
use watchr_core::scanner;

fn loopback_config(last_octet_end: u8, port: u16) -> ScanConfig {
    ScanConfig {
        range: Ipv4Range::new(
            Ipv4Addr::new(127, 0, 0, 1),
            Ipv4Addr::new(127, 0, 0, last_octet_end),
        ),
        port,
        timeout: Duration::from_millis(500),
        workers: 16,
    }
}

/// A listener's backlog accepts connects without any accept() calls, so a
/// bound socket is enough to look like a camera to the scanner.
#[tokio::test]
async fn discovery_finds_a_loopback_listener() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port: u16 = listener.local_addr().unwrap().port();

    let cfg = loopback_config(1, port);
    let cameras = scanner::perform_discovery(&cfg, None).await.unwrap();

    assert_eq!(cameras, vec![Ipv4Addr::new(127, 0, 0, 1)]);
}

#[tokio::test]
async fn discovery_of_a_dead_range_is_empty_not_an_error() {
    // Grab a free port, then release it so nothing listens there.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port: u16 = listener.local_addr().unwrap().port();
    drop(listener);

    let cfg = loopback_config(3, port);
    let cameras = scanner::perform_discovery(&cfg, None).await.unwrap();

    assert!(cameras.is_empty());
}

#[tokio::test]
#[cfg(target_os = "linux")]
async fn discovery_preserves_range_order_across_listeners() {
    // Linux exposes the whole 127.0.0.0/8, so distinct loopback addresses
    // can share one port.
    let first = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port: u16 = first.local_addr().unwrap().port();
    let second = TcpListener::bind((Ipv4Addr::new(127, 0, 0, 2), port))
        .await
        .unwrap();
    let fourth = TcpListener::bind((Ipv4Addr::new(127, 0, 0, 4), port))
        .await
        .unwrap();

    let cfg = loopback_config(5, port);
    let cameras = scanner::perform_discovery(&cfg, None).await.unwrap();

    assert_eq!(
        cameras,
        vec![
            Ipv4Addr::new(127, 0, 0, 1),
            Ipv4Addr::new(127, 0, 0, 2),
            Ipv4Addr::new(127, 0, 0, 4),
        ]
    );

    drop((first, second, fourth));
}
