//! IPv4 address and CIDR notation utilities.
//!
//! Provides the [`Ipv4`] struct for representing an IPv4 network (address plus
//! prefix length), along with the subnet calculations the allocator relies on:
//! masks, broadcast addresses, overlap tests and lazy enumeration of equally
//! sized sub-blocks.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;
use thiserror::Error;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Errors raised by CIDR parsing and arithmetic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CidrError {
    #[error("Network length /{0} is too long")]
    LengthTooLong(u8),
    #[error("Invalid address/mask '{0}'")]
    Format(String),
    #[error("Invalid address '{0}'")]
    Address(String),
    #[error("Invalid prefix length '{0}'")]
    PrefixLength(String),
    #[error("Invalid netmask '{0}'")]
    Netmask(String),
    #[error("{0} has host bits set")]
    HostBitsSet(String),
    #[error("Network /{from} can only be cut to a smaller size, not /{to}")]
    CutTooLarge { from: u8, to: u8 },
}

/// Mask bits for a prefix length, clamped to [`MAX_LENGTH`].
fn mask_bits(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len.min(MAX_LENGTH);
    let all_bits = u32::MAX as u64;
    ((all_bits >> right_len) << right_len) as u32
}

/// Prefix length of a dotted netmask such as `255.255.252.0`.
///
/// The mask must be contiguous ones followed by zeros.
fn netmask_len(mask: &str) -> Result<u8, CidrError> {
    let bits: u32 = mask
        .parse::<Ipv4Addr>()
        .map_err(|_| CidrError::Netmask(mask.to_string()))?
        .into();
    let len = bits.leading_ones() as u8;
    if mask_bits(len) != bits {
        return Err(CidrError::Netmask(mask.to_string()));
    }
    Ok(len)
}

/// Number of addresses in a block with the given prefix length.
pub fn block_size(len: u8) -> u64 {
    1u64 << (MAX_LENGTH - len.min(MAX_LENGTH))
}

/// Calculate the minimum mask for an IP address based on trailing zeros.
///
/// `0.0.0.0` is aligned to every mask and returns 0.
pub fn lo_mask(ip: Ipv4Addr) -> u8 {
    let trailing_zeros = u32::from(ip).trailing_zeros() as u8;
    MAX_LENGTH - trailing_zeros
}

/// Number of usable host addresses in a subnet.
///
/// /31 and /32 are point-to-point / host routes and have no network or
/// broadcast address to reserve.
pub fn num_hosts(len: u8) -> Result<u64, CidrError> {
    match len {
        l if l > MAX_LENGTH => Err(CidrError::LengthTooLong(l)),
        31 | 32 => Ok(block_size(len)),
        _ => Ok(block_size(len) - 2),
    }
}

/// IPv4 network with CIDR notation support.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(de::Error::custom)
    }
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    ///
    /// The part after the slash is a decimal prefix length or a dotted
    /// netmask (`10.0.0.0/255.255.0.0`). Host bits are kept as given; use
    /// [`Ipv4::network`] for a strict parse.
    pub fn new(addr_cidr: &str) -> Result<Ipv4, CidrError> {
        let addr_cidr = addr_cidr.trim();
        let (addr, mask) = addr_cidr
            .split_once('/')
            .ok_or_else(|| CidrError::Format(addr_cidr.to_string()))?;
        let addr: Ipv4Addr = addr
            .parse()
            .map_err(|_| CidrError::Address(addr.to_string()))?;
        let mask: u8 = if mask.contains('.') {
            netmask_len(mask)?
        } else if !mask.is_empty() && mask.bytes().all(|b| b.is_ascii_digit()) {
            mask.parse()
                .map_err(|_| CidrError::PrefixLength(mask.to_string()))?
        } else {
            return Err(CidrError::PrefixLength(mask.to_string()));
        };
        if mask > MAX_LENGTH {
            return Err(CidrError::LengthTooLong(mask));
        }
        Ok(Ipv4 { addr, mask })
    }

    /// Parse a network in CIDR notation, rejecting addresses with host bits set.
    pub fn network(addr_cidr: &str) -> Result<Ipv4, CidrError> {
        let ipv4 = Ipv4::new(addr_cidr)?;
        if !ipv4.is_network() {
            return Err(CidrError::HostBitsSet(ipv4.to_string()));
        }
        Ok(ipv4)
    }

    /// True when the address is the canonical network address (host bits zero).
    pub fn is_network(&self) -> bool {
        self.addr == self.lo()
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & mask_bits(self.mask))
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) | !mask_bits(self.mask))
    }

    /// Dotted-quad subnet mask, e.g. `255.255.255.0` for a /24.
    ///
    /// # Examples
    /// ```
    /// use subnet_assign::models::Ipv4;
    /// let net = Ipv4::network("10.0.0.0/22").unwrap();
    /// assert_eq!(net.netmask().to_string(), "255.255.252.0");
    /// ```
    pub fn netmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(mask_bits(self.mask))
    }

    /// Number of addresses in this subnet.
    pub fn size(&self) -> u64 {
        block_size(self.mask)
    }

    /// True when `other` lies entirely inside this network.
    pub fn contains_subnet(&self, other: &Ipv4) -> bool {
        self.lo() <= other.lo() && other.hi() <= self.hi()
    }

    /// True when the two address ranges share at least one address.
    pub fn overlaps(&self, other: &Ipv4) -> bool {
        self.lo() <= other.hi() && other.lo() <= self.hi()
    }

    /// Enumerate every sub-block with prefix length `new_mask`, in ascending
    /// address order. Blocks are produced lazily.
    pub fn subnets(&self, new_mask: u8) -> Result<Subnets, CidrError> {
        if new_mask > MAX_LENGTH {
            return Err(CidrError::LengthTooLong(new_mask));
        }
        if new_mask < self.mask {
            return Err(CidrError::CutTooLarge {
                from: self.mask,
                to: new_mask,
            });
        }
        let start = u32::from(self.lo()) as u64;
        Ok(Subnets {
            next: start,
            end: start + self.size(),
            mask: new_mask,
        })
    }
}

impl FromStr for Ipv4 {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4::network(s)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

/// Lazy iterator over the equally sized sub-blocks of a network.
///
/// Addresses are tracked as u64 so the block after `255.255.255.255` does not
/// overflow.
#[derive(Debug, Clone)]
pub struct Subnets {
    next: u64,
    end: u64,
    mask: u8,
}

impl Subnets {
    /// Advance so the next block yielded starts after `addr`.
    pub fn skip_past(&mut self, addr: Ipv4Addr) {
        let size = block_size(self.mask);
        let after = u32::from(addr) as u64 + 1;
        let aligned = after.div_ceil(size) * size;
        self.next = self.next.max(aligned);
    }
}

impl Iterator for Subnets {
    type Item = Ipv4;

    fn next(&mut self) -> Option<Ipv4> {
        if self.next >= self.end {
            return None;
        }
        let subnet = Ipv4 {
            addr: Ipv4Addr::from(self.next as u32),
            mask: self.mask,
        };
        self.next += block_size(self.mask);
        Some(subnet)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end.saturating_sub(self.next) / block_size(self.mask)) as usize;
        (remaining, Some(remaining))
    }
}
