//! IPv4 address and CIDR notation utilities.
//!
//! Provides the [`Ipv4Cidr`] struct for a validated address and prefix
//! length pair, along with the mask arithmetic behind the subnet report.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_PREFIX_LEN: u8 = 32;

lazy_static! {
    // Octets and prefix are digit runs without leading zeros. Range checks
    // happen numerically so out-of-range values get their own error.
    static ref CIDR_RE: Regex = Regex::new(
        r"^(0|[1-9][0-9]{0,2})\.(0|[1-9][0-9]{0,2})\.(0|[1-9][0-9]{0,2})\.(0|[1-9][0-9]{0,2})/(0|[1-9][0-9]{0,2})$"
    )
    .expect("Invalid Regex?");
}

/// Error returned when a CIDR string fails validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CidrParseError {
    /// Input does not have the `a.b.c.d/len` shape.
    Malformed(String),
    /// An octet value is outside 0-255.
    OctetOutOfRange(u32),
    /// The prefix length is outside 0-32.
    PrefixOutOfRange(u32),
}

impl fmt::Display for CidrParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CidrParseError::Malformed(input) => write!(f, "invalid CIDR address: {input}"),
            CidrParseError::OctetOutOfRange(octet) => {
                write!(f, "IPv4 octet {octet} out of range (0-255)")
            }
            CidrParseError::PrefixOutOfRange(prefix) => {
                write!(f, "prefix length {prefix} out of range (0-{MAX_PREFIX_LEN})")
            }
        }
    }
}

impl Error for CidrParseError {}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ipcalc::models::mask_for_prefix;
/// assert_eq!(mask_for_prefix(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn mask_for_prefix(prefix_len: u8) -> Result<u32, CidrParseError> {
    if prefix_len > MAX_PREFIX_LEN {
        Err(CidrParseError::PrefixOutOfRange(u32::from(prefix_len)))
    } else {
        Ok(mask_bits(prefix_len))
    }
}

/// Mask with the top `prefix_len` bits set. Callers guarantee
/// `prefix_len <= 32`, so the shift stays in range.
fn mask_bits(prefix_len: u8) -> u32 {
    let right_len = MAX_PREFIX_LEN - prefix_len;
    let all_bits = u32::MAX as u64;

    ((all_bits >> right_len) << right_len) as u32
}

/// A validated IPv4 address and prefix length pair.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Ipv4Cidr {
    addr: Ipv4Addr,
    prefix_len: u8,
}

impl Ipv4Cidr {
    /// Create a new [`Ipv4Cidr`], rejecting prefix lengths over 32.
    pub fn new(addr: Ipv4Addr, prefix_len: u8) -> Result<Ipv4Cidr, CidrParseError> {
        if prefix_len > MAX_PREFIX_LEN {
            return Err(CidrParseError::PrefixOutOfRange(u32::from(prefix_len)));
        }
        Ok(Ipv4Cidr { addr, prefix_len })
    }

    /// The address exactly as given, host bits included.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// Number of leading one-bits in the subnet mask.
    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// Subnet mask as raw bits.
    pub fn netmask_bits(&self) -> u32 {
        mask_bits(self.prefix_len)
    }

    /// Subnet mask: the top `prefix_len` bits set.
    pub fn netmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.netmask_bits())
    }

    /// Wildcard mask, the bitwise complement of the netmask.
    pub fn wildcard(&self) -> Ipv4Addr {
        Ipv4Addr::from(!self.netmask_bits())
    }

    /// Network address: the input address with all host bits cleared.
    pub fn network(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & self.netmask_bits())
    }

    /// Broadcast address: the network address with all host bits set.
    pub fn broadcast(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.network()) | !self.netmask_bits())
    }

    /// First and last usable host addresses.
    ///
    /// A `/31` is a point-to-point link where both addresses are usable
    /// (RFC 3021) and a `/32` is a single host route, so neither steps
    /// outside the block. Every other prefix gets the range strictly
    /// between network and broadcast.
    pub fn host_range(&self) -> (Ipv4Addr, Ipv4Addr) {
        match self.prefix_len {
            32 => (self.network(), self.network()),
            31 => (self.network(), self.broadcast()),
            _ => (
                Ipv4Addr::from(u32::from(self.network()) + 1),
                Ipv4Addr::from(u32::from(self.broadcast()) - 1),
            ),
        }
    }

    /// Number of addresses in the block, `2^(32 - prefix_len)`.
    ///
    /// Widened to `u64` so a `/0` reports 4294967296 instead of wrapping
    /// a 32-bit counter to zero.
    pub fn host_count(&self) -> u64 {
        u64::from(!self.netmask_bits()) + 1
    }
}

impl FromStr for Ipv4Cidr {
    type Err = CidrParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        fn capture_u32(caps: &Captures<'_>, ind: usize, input: &str) -> Result<u32, CidrParseError> {
            caps.get(ind)
                .map(|m| m.as_str().parse::<u32>())
                .ok_or_else(|| CidrParseError::Malformed(input.to_string()))?
                .map_err(|_| CidrParseError::Malformed(input.to_string()))
        }

        let caps = CIDR_RE
            .captures(s)
            .ok_or_else(|| CidrParseError::Malformed(s.to_string()))?;

        let mut octets = [0u8; 4];
        for (i, octet) in octets.iter_mut().enumerate() {
            let value = capture_u32(&caps, i + 1, s)?;
            if value > 255 {
                return Err(CidrParseError::OctetOutOfRange(value));
            }
            *octet = value as u8;
        }

        let prefix_len = capture_u32(&caps, 5, s)?;
        if prefix_len > u32::from(MAX_PREFIX_LEN) {
            return Err(CidrParseError::PrefixOutOfRange(prefix_len));
        }

        Ipv4Cidr::new(Ipv4Addr::from(octets), prefix_len as u8)
    }
}

impl fmt::Display for Ipv4Cidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix_len)
    }
}

impl Serialize for Ipv4Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.prefix_len);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Ipv4Cidr {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4Cidr::from_str(&s).map_err(de::Error::custom)
    }
}
