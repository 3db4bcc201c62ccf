//! Domain models for the subnet calculator.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Ipv4Cidr`] - validated IPv4 address and prefix length pair
//! - [`SubnetReport`] - subnet characteristics derived from one CIDR

mod ipv4;
mod report;

// Re-export public types
pub use ipv4::{mask_for_prefix, CidrParseError, Ipv4Cidr, MAX_PREFIX_LEN};
pub use report::SubnetReport;
