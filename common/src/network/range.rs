use std::net::Ipv4Addr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    #[error("start address {start} is greater than end address {end}")]
    Inverted { start: Ipv4Addr, end: Ipv4Addr },
}

/// A closed interval of IPv4 addresses, `start_addr..=end_addr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv4Range {
    pub start_addr: Ipv4Addr,
    pub end_addr: Ipv4Addr,
}

impl Ipv4Range {
    pub fn new(start_addr: Ipv4Addr, end_addr: Ipv4Addr) -> Result<Self, RangeError> {
        if u32::from(start_addr) > u32::from(end_addr) {
            return Err(RangeError::Inverted {
                start: start_addr,
                end: end_addr,
            });
        }
        Ok(Self {
            start_addr,
            end_addr,
        })
    }

    /// Every address of the range in ascending order, `end_addr` included exactly once.
    pub fn to_iter(&self) -> impl Iterator<Item = Ipv4Addr> + Send + 'static {
        let start: u32 = self.start_addr.into();
        let end: u32 = self.end_addr.into();
        (start..=end).map(Ipv4Addr::from)
    }

    /// Number of addresses in the range. `u64` because `0.0.0.0-255.255.255.255` holds 2^32.
    pub fn len(&self) -> u64 {
        u64::from(u32::from(self.end_addr)) - u64::from(u32::from(self.start_addr)) + 1
    }

    /// Construction guarantees at least one address.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        let addr: u32 = addr.into();
        u32::from(self.start_addr) <= addr && addr <= u32::from(self.end_addr)
    }

    /// Offset of `addr` from the start of the range; negative below it.
    pub fn distance_of(&self, addr: Ipv4Addr) -> i64 {
        i64::from(u32::from(addr)) - i64::from(u32::from(self.start_addr))
    }
}
