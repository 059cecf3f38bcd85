//! Concurrent reachability scanning over an address range.
//!
//! Every host in the range becomes one probe task on the runtime, with
//! admission bounded by a semaphore so total scan time stays near one
//! timeout period per batch instead of one per host. Probes share no
//! state; results are aggregated only after all tasks have joined and are
//! then normalized back to the range's enumeration order, since the
//! operator selects by position in the printed menu.

mod probe;

pub use probe::{ProbeOutcome, UnreachableCause, tcp_probe};

use std::future::Future;
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::trace;

use watchr_common::config::ScanConfig;
use watchr_common::error::SelectionError;

/// Callback fed the running count of reachable hosts, for progress output.
pub type ProgressFn = Box<dyn Fn(usize) + Send + Sync>;

/// Probes every host in the configured range and returns the reachable
/// subset, ordered by the range's ascending enumeration.
///
/// An empty result is a valid outcome, not an error. Individual probe
/// failures never surface here; an unreachable host is simply absent.
pub async fn perform_discovery(
    cfg: &ScanConfig,
    on_host_found: Option<ProgressFn>,
) -> anyhow::Result<Vec<Ipv4Addr>> {
    let port: u16 = cfg.port;
    let probe_timeout = cfg.timeout;

    scan_with_prober(cfg, on_host_found, move |addr| {
        probe::tcp_probe(addr, port, probe_timeout)
    })
    .await
}

/// The scan loop, generic over the probe function so tests can substitute
/// arbitrary reachability behavior.
pub async fn scan_with_prober<F, Fut>(
    cfg: &ScanConfig,
    on_host_found: Option<ProgressFn>,
    prober: F,
) -> anyhow::Result<Vec<Ipv4Addr>>
where
    F: Fn(Ipv4Addr) -> Fut + Clone + Send + 'static,
    Fut: Future<Output = ProbeOutcome> + Send,
{
    let semaphore = Arc::new(Semaphore::new(cfg.workers.max(1)));
    let found_count = Arc::new(AtomicUsize::new(0));
    let callback: Option<Arc<dyn Fn(usize) + Send + Sync>> = on_host_found.map(Arc::from);

    let mut tasks: JoinSet<(usize, Ipv4Addr, ProbeOutcome)> = JoinSet::new();

    for (idx, addr) in cfg.range.to_iter().enumerate() {
        let semaphore = semaphore.clone();
        let prober = prober.clone();
        let found_count = found_count.clone();
        let callback = callback.clone();

        tasks.spawn(async move {
            // The permit is held for the probe's whole lifetime; that is
            // what bounds the pool.
            let _permit = semaphore.acquire_owned().await.ok();
            let outcome = prober(addr).await;

            match outcome {
                ProbeOutcome::Reachable => {
                    let count = found_count.fetch_add(1, Ordering::Relaxed) + 1;
                    if let Some(cb) = &callback {
                        cb(count);
                    }
                }
                ProbeOutcome::Unreachable(cause) => {
                    trace!("{addr}: {cause:?}");
                }
            }

            (idx, addr, outcome)
        });
    }

    let mut reachable: Vec<(usize, Ipv4Addr)> = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        let (idx, addr, outcome) = joined?;
        if outcome.is_reachable() {
            reachable.push((idx, addr));
        }
    }

    // Completion order is arbitrary; the menu numbering must follow the
    // range's enumeration order.
    reachable.sort_unstable_by_key(|(idx, _)| *idx);
    Ok(reachable.into_iter().map(|(_, addr)| addr).collect())
}

/// Resolves the operator's 1-based menu selection against the discovered
/// list.
pub fn pick(hosts: &[Ipv4Addr], selection: usize) -> Result<Ipv4Addr, SelectionError> {
    if hosts.is_empty() {
        return Err(SelectionError::Empty);
    }
    if selection == 0 || selection > hosts.len() {
        return Err(SelectionError::OutOfRange {
            index: selection,
            len: hosts.len(),
        });
    }
    Ok(hosts[selection - 1])
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
