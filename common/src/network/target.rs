//! # Recording Target Model
//!
//! The operator's address selector: either a literal camera address, or
//! the `all` sentinel meaning "scan the range and let me pick".

use std::net::Ipv4Addr;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Scan the configured range and prompt for a camera.
    Discover,
    /// Record this camera directly, skipping discovery.
    Host { target_addr: Ipv4Addr },
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Target::Discover);
        }

        s.parse::<Ipv4Addr>()
            .map(|target_addr| Target::Host { target_addr })
            .map_err(|_| format!("invalid target: '{s}' is neither an IPv4 address nor 'all'"))
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
    fn parses_the_discover_sentinel_case_insensitively() {
        assert!(matches!(Target::from_str("all"), Ok(Target::Discover)));
        assert!(matches!(Target::from_str("ALL"), Ok(Target::Discover)));
    }

    #[test]
    fn parses_a_literal_host() {
        assert_eq!(
            Target::from_str("192.168.1.64"),
            Ok(Target::Host {
                target_addr: Ipv4Addr::new(192, 168, 1, 64)
            })
        );
    }

    #[test]
    fn rejects_everything_else() {
        assert!(Target::from_str("not-an-ip").is_err());
        assert!(Target::from_str("192.168.1").is_err());
        assert!(Target::from_str("::1").is_err());
        assert!(Target::from_str("").is_err());
    }
}
