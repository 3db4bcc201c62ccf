//! Subnet report data model.

use super::Ipv4Cidr;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Everything the calculator derives from one CIDR, assembled once and
/// never mutated afterwards.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetReport {
    /// The input address exactly as parsed, host bits included.
    pub addr: Ipv4Addr,
    /// Prefix length in bits.
    pub prefix_len: u8,
    /// Subnet mask.
    pub netmask: Ipv4Addr,
    /// Wildcard mask (complement of the netmask).
    pub wildcard: Ipv4Addr,
    /// Network address (host bits cleared).
    pub network: Ipv4Addr,
    /// First usable host address.
    pub host_min: Ipv4Addr,
    /// Last usable host address.
    pub host_max: Ipv4Addr,
    /// Broadcast address (host bits set).
    pub broadcast: Ipv4Addr,
    /// Number of addresses in the block, `2^(32 - prefix_len)`.
    pub host_count: u64,
}

impl SubnetReport {
    /// Assemble the report for a parsed CIDR.
    pub fn new(cidr: &Ipv4Cidr) -> SubnetReport {
        let (host_min, host_max) = cidr.host_range();
        SubnetReport {
            addr: cidr.addr(),
            prefix_len: cidr.prefix_len(),
            netmask: cidr.netmask(),
            wildcard: cidr.wildcard(),
            network: cidr.network(),
            host_min,
            host_max,
            broadcast: cidr.broadcast(),
            host_count: cidr.host_count(),
        }
    }
}
