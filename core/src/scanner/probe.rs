use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use tokio::net::TcpStream;
use tokio::time::timeout;

/// Why a host is absent from the scan results. Never shown to the
/// operator; kept for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnreachableCause {
    /// No answer within the probe timeout.
    TimedOut,
    /// The connect attempt failed outright (refused, unreachable, ...).
    Rejected,
}

/// Classification of a single reachability probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    Reachable,
    Unreachable(UnreachableCause),
}

impl ProbeOutcome {
    pub fn is_reachable(self) -> bool {
        matches!(self, ProbeOutcome::Reachable)
    }
}

/// Attempts one TCP connection within `probe_timeout`.
///
/// Every failure mode collapses into an [`UnreachableCause`]; nothing
/// propagates and nothing is retried. The socket is dropped as soon as the
/// connect attempt resolves.
pub async fn tcp_probe(addr: Ipv4Addr, port: u16, probe_timeout: Duration) -> ProbeOutcome {
    let socket_addr: SocketAddr = SocketAddr::new(IpAddr::V4(addr), port);

    match timeout(probe_timeout, TcpStream::connect(socket_addr)).await {
        Ok(Ok(_stream)) => ProbeOutcome::Reachable,
        Ok(Err(_refused)) => ProbeOutcome::Unreachable(UnreachableCause::Rejected),
        Err(_elapsed) => ProbeOutcome::Unreachable(UnreachableCause::TimedOut),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
