// cargo watch -x 'fmt' -x 'run -- 192.168.34.27/24'

//! IPv4 subnet calculator library.
//!
//! Parses a CIDR string and derives the subnet characteristics printed by
//! the `ipcalc` binary: netmask, wildcard, network and broadcast
//! addresses, usable host range and host count.

pub mod models;
pub mod output;

pub use models::{CidrParseError, Ipv4Cidr, SubnetReport};

/// Parse a CIDR string and compute its subnet report.
///
/// # Examples
/// ```
/// let report = ipcalc::analyze("192.168.34.27/24").unwrap();
/// assert_eq!(report.network.to_string(), "192.168.34.0");
/// assert_eq!(report.host_count, 256);
/// ```
pub fn analyze(cidr: &str) -> Result<SubnetReport, CidrParseError> {
    let cidr: Ipv4Cidr = cidr.parse()?;
    log::debug!("parsed {cidr}, network {network}", network = cidr.network());
    Ok(SubnetReport::new(&cidr))
}
