//! # Address Range Model
//!
//! A contiguous block of IPv4 host addresses, usually obtained from CIDR
//! notation. Iteration order is always ascending numeric order; the scan
//! results and the operator's numbered menu both depend on it.

use std::net::Ipv4Addr;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv4Range {
    pub start_addr: Ipv4Addr,
    pub end_addr: Ipv4Addr,
}

impl Ipv4Range {
    pub fn new(start_addr: Ipv4Addr, end_addr: Ipv4Addr) -> Self {
        Self {
            start_addr,
            end_addr,
        }
    }

    /// Ascending iterator over every address in the range, inclusive.
    pub fn to_iter(&self) -> impl Iterator<Item = Ipv4Addr> {
        let start: u32 = self.start_addr.into();
        let end: u32 = self.end_addr.into();
        (start..=end).map(Ipv4Addr::from)
    }

    pub fn len(&self) -> usize {
        let start: u32 = self.start_addr.into();
        let end: u32 = self.end_addr.into();
        if start > end {
            return 0;
        }
        (end - start) as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        self.start_addr > self.end_addr
    }
}

/// Converts a CIDR block into its probe-able host range.
///
/// The network and broadcast addresses are excluded, matching how cameras
/// are actually addressable. `/31` and `/32` keep every address since
/// there is nothing to exclude.
pub fn cidr_hosts(ip: Ipv4Addr, prefix: u8) -> anyhow::Result<Ipv4Range> {
    let network = ipnetwork::Ipv4Network::new(ip, prefix)?;
    let start = network.network();
    let end = network.broadcast();

    if prefix >= 31 {
        return Ok(Ipv4Range::new(start, end));
    }

    let first = u32::from(start).saturating_add(1);
    let last = u32::from(end).saturating_sub(1);
    Ok(Ipv4Range::new(Ipv4Addr::from(first), Ipv4Addr::from(last)))
}

impl FromStr for Ipv4Range {
    type Err = String;

    /// Parses CIDR notation like "192.168.1.0/24" into the host range.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((ip_str, prefix_str)) = s.split_once('/') else {
            return Err(format!(
                "expected CIDR notation (e.g. 192.168.1.0/24), got '{s}'"
            ));
        };

        let ipv4_addr = ip_str
            .parse::<Ipv4Addr>()
            .map_err(|e| format!("Invalid IP in CIDR '{ip_str}': {e}"))?;

        let prefix = prefix_str
            .parse::<u8>()
            .map_err(|e| format!("Invalid prefix in CIDR '{prefix_str}': {e}"))?;

        cidr_hosts(ipv4_addr, prefix).map_err(|e| e.to_string())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cidr_24_keeps_the_254_usable_hosts() {
        let range: Ipv4Range = "192.168.1.0/24".parse().unwrap();
        assert_eq!(range.start_addr, Ipv4Addr::new(192, 168, 1, 1));
        assert_eq!(range.end_addr, Ipv4Addr::new(192, 168, 1, 254));
        assert_eq!(range.len(), 254);
    }

    #[test]
    fn cidr_30_keeps_two_hosts() {
        let range: Ipv4Range = "10.0.0.0/30".parse().unwrap();
        assert_eq!(range.start_addr, Ipv4Addr::new(10, 0, 0, 1));
        assert_eq!(range.end_addr, Ipv4Addr::new(10, 0, 0, 2));
    }

    #[test]
    fn tiny_prefixes_skip_the_exclusion() {
        let range: Ipv4Range = "10.0.0.0/31".parse().unwrap();
        assert_eq!(range.len(), 2);

        let range: Ipv4Range = "10.0.0.7/32".parse().unwrap();
        assert_eq!(range.start_addr, range.end_addr);
        assert_eq!(range.len(), 1);
    }

    #[test]
    fn iteration_is_ascending_and_duplicate_free() {
        let range: Ipv4Range = "172.16.4.0/29".parse().unwrap();
        let hosts: Vec<Ipv4Addr> = range.to_iter().collect();

        assert_eq!(hosts.len(), range.len());
        let mut sorted = hosts.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(hosts, sorted);
    }

    #[test]
    fn rejects_malformed_cidr() {
        assert!("not-a-cidr".parse::<Ipv4Range>().is_err());
        assert!("192.168.1.0".parse::<Ipv4Range>().is_err());
        assert!("192.168.1.0/33".parse::<Ipv4Range>().is_err());
        assert!("192.168.1.256/24".parse::<Ipv4Range>().is_err());
    }
}
