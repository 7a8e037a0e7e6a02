//! # Addresses used in the network

use core::default::Default;
use core::str::FromStr;

use crate::Error;

/// Broadcast to all devices
pub const BROADCAST_ALL: u16 = 0xffff;
/// Broadcast to devices with the receiver on when idle
pub const BROADCAST_RX_ON_WHEN_IDLE: u16 = 0xfffd;
/// Broadcast to routers and the coordinator
pub const BROADCAST_ROUTERS: u16 = 0xfffc;
/// Broadcast to low power routers
pub const BROADCAST_LOW_POWER_ROUTERS: u16 = 0xfffb;
/// Lowest broadcast address, 0xfff8 to 0xfffa are reserved
const BROADCAST_MIN: u16 = 0xfff8;

/// 16-bit short address
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ShortAddress(u16);

impl ShortAddress {
    /// Short address from its numeric value
    pub fn new(value: u16) -> Self {
        Self(value)
    }

    /// Address of a device profile request sent to every device with the
    /// receiver on
    pub fn rx_on_when_idle() -> Self {
        Self(BROADCAST_RX_ON_WHEN_IDLE)
    }

    /// True for the broadcast range 0xfff8 to 0xffff
    pub fn is_broadcast(self) -> bool {
        self.0 >= BROADCAST_MIN
    }
}

impl From<u16> for ShortAddress {
    fn from(value: u16) -> Self {
        ShortAddress(value)
    }
}

impl From<ShortAddress> for u16 {
    fn from(value: ShortAddress) -> Self {
        value.0
    }
}

impl PartialEq<u16> for ShortAddress {
    fn eq(&self, other: &u16) -> bool {
        self.0 == *other
    }
}

impl Default for ShortAddress {
    fn default() -> Self {
        Self(0xffffu16)
    }
}

impl core::fmt::Display for ShortAddress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "0x{:04x}", self.0)
    }
}

/// 16-bit network address
pub type NetworkAddress = ShortAddress;
/// 16-bit personal area network (PAN) identifier
pub type PanIdentifier = ShortAddress;
/// 16-bit group identifier
pub type GroupIdentifier = ShortAddress;

/// Extended IEEE address size
pub const EXTENDED_ADDRESS_SIZE: usize = 8;
/// Extended IEEE address, broadcast address
pub const EXTENDED_ADDRESS_BROADCAST: u64 = 0xffff_ffff_ffff_ffffu64;

/// 64-bit extended IEEE address (EUI64)
///
/// Written as text as `0x` followed by 16 lower case hexadecimal digits,
/// most significant digit first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExtendedAddress(u64);

impl ExtendedAddress {
    /// Extended address from its numeric value
    pub fn new(address: u64) -> Self {
        Self(address)
    }

    /// All ones, the broadcast extended address
    pub fn broadcast() -> Self {
        Self(EXTENDED_ADDRESS_BROADCAST)
    }

    /// True for the broadcast extended address
    pub fn is_broadcast(self) -> bool {
        self.0 == EXTENDED_ADDRESS_BROADCAST
    }
}

impl From<u64> for ExtendedAddress {
    fn from(value: u64) -> Self {
        ExtendedAddress(value)
    }
}

impl From<ExtendedAddress> for u64 {
    fn from(value: ExtendedAddress) -> Self {
        value.0
    }
}

impl PartialEq<u64> for ExtendedAddress {
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}

impl Default for ExtendedAddress {
    fn default() -> Self {
        Self(0xffff_ffff_ffff_ffffu64)
    }
}

impl FromStr for ExtendedAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or(Error::InvalidAddress)?;
        if digits.len() != 2 * EXTENDED_ADDRESS_SIZE
            || !digits.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return Err(Error::InvalidAddress);
        }
        u64::from_str_radix(digits, 16)
            .map(ExtendedAddress)
            .map_err(|_| Error::InvalidAddress)
    }
}

impl core::fmt::Display for ExtendedAddress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "0x{:016x}", self.0)
    }
}

/// 64-bit extended personal area network (PAN) identifier
pub type ExtendedPanIdentifier = ExtendedAddress;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_address() {
        let a_zero = ShortAddress(0);
        assert_eq!(format!("{}", a_zero), "0x0000");
        assert_eq!(a_zero, 0u16);
        let a = ShortAddress::from(0x4581);
        assert_eq!(format!("{}", a), "0x4581");
        assert_eq!(u16::from(a), 0x4581);
        assert!(!a.is_broadcast());
        assert!(ShortAddress::rx_on_when_idle().is_broadcast());
        assert!(ShortAddress::new(BROADCAST_ALL).is_broadcast());
        assert!(ShortAddress::new(BROADCAST_ROUTERS).is_broadcast());
        assert!(!ShortAddress::new(0xfff7).is_broadcast());
    }

    #[test]
    fn extended_address_text() {
        let a: ExtendedAddress = "0xfe34ac2385ff8311".parse().unwrap();
        assert_eq!(a, 0xfe34_ac23_85ff_8311);
        assert_eq!(format!("{}", a), "0xfe34ac2385ff8311");
        let a = ExtendedAddress::from(0x0000_0000_0000_00ab);
        assert_eq!(format!("{}", a), "0x00000000000000ab");
        let a: ExtendedAddress = "0x00124B0012345678".parse().unwrap();
        assert_eq!(a, 0x0012_4b00_1234_5678);
    }

    #[test]
    fn extended_address_malformed() {
        for text in [
            "",
            "0x",
            "fe34ac2385ff8311",
            "0xfe34ac2385ff831",
            "0xfe34ac2385ff83110",
            "0xfe34ac2385ff83g1",
            "0x+e34ac2385ff8311",
        ] {
            assert_eq!(
                text.parse::<ExtendedAddress>(),
                Err(Error::InvalidAddress),
                "{}",
                text
            );
        }
    }
}
