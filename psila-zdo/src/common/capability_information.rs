//! # Device capability information

use core::convert::From;

const CAPABILITY_ALTERNATE_PAN_COORDINATOR: u8 = 0x01;
const CAPABILITY_ROUTER_CAPABLE: u8 = 0x02;
const CAPABILITY_MAINS_POWER: u8 = 0x04;
const CAPABILITY_IDLE_RECEIVE: u8 = 0x08;
const CAPABILITY_RESERVED_1: u8 = 0x10;
const CAPABILITY_RESERVED_2: u8 = 0x20;
const CAPABILITY_FRAME_PROTECTION: u8 = 0x40;
const CAPABILITY_ALLOCATE_ADDRESS: u8 = 0x80;

/// MAC layer capability information
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CapabilityInformation {
    /// Device is capable of acting as a PAN coordinator
    pub alternate_pan_coordinator: bool,
    /// The device can act as a router
    pub router_capable: bool,
    /// Device is connected to a mains power source or not
    pub mains_power: bool,
    /// Receive is enabled while idle
    pub idle_receive: bool,
    /// Reserved bit 4
    pub reserved_1: bool,
    /// Reserved bit 5
    pub reserved_2: bool,
    /// Frames are cryptographically protected
    pub frame_protection: bool,
    /// Device wish to have an short address allocated by the coordinator
    pub allocate_address: bool,
}

impl From<u8> for CapabilityInformation {
    /// Create `CapabilityInformation` from a byte
    fn from(byte: u8) -> Self {
        Self {
            alternate_pan_coordinator: byte & CAPABILITY_ALTERNATE_PAN_COORDINATOR
                == CAPABILITY_ALTERNATE_PAN_COORDINATOR,
            router_capable: byte & CAPABILITY_ROUTER_CAPABLE == CAPABILITY_ROUTER_CAPABLE,
            mains_power: byte & CAPABILITY_MAINS_POWER == CAPABILITY_MAINS_POWER,
            idle_receive: byte & CAPABILITY_IDLE_RECEIVE == CAPABILITY_IDLE_RECEIVE,
            reserved_1: byte & CAPABILITY_RESERVED_1 == CAPABILITY_RESERVED_1,
            reserved_2: byte & CAPABILITY_RESERVED_2 == CAPABILITY_RESERVED_2,
            frame_protection: byte & CAPABILITY_FRAME_PROTECTION == CAPABILITY_FRAME_PROTECTION,
            allocate_address: byte & CAPABILITY_ALLOCATE_ADDRESS == CAPABILITY_ALLOCATE_ADDRESS,
        }
    }
}

impl From<CapabilityInformation> for u8 {
    /// Create a byte from `CapabilityInformation`
    fn from(ci: CapabilityInformation) -> Self {
        let mut byte = 0u8;
        for (set, bit) in [
            (ci.alternate_pan_coordinator, CAPABILITY_ALTERNATE_PAN_COORDINATOR),
            (ci.router_capable, CAPABILITY_ROUTER_CAPABLE),
            (ci.mains_power, CAPABILITY_MAINS_POWER),
            (ci.idle_receive, CAPABILITY_IDLE_RECEIVE),
            (ci.reserved_1, CAPABILITY_RESERVED_1),
            (ci.reserved_2, CAPABILITY_RESERVED_2),
            (ci.frame_protection, CAPABILITY_FRAME_PROTECTION),
            (ci.allocate_address, CAPABILITY_ALLOCATE_ADDRESS),
        ] {
            if set {
                byte |= bit;
            }
        }
        byte
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_information_from_u8() {
        let ci = CapabilityInformation::from(0);
        assert_eq!(ci, CapabilityInformation::default());

        let ci = CapabilityInformation::from(0x8e);
        assert!(!ci.alternate_pan_coordinator);
        assert!(ci.router_capable);
        assert!(ci.mains_power);
        assert!(ci.idle_receive);
        assert!(!ci.reserved_1);
        assert!(!ci.reserved_2);
        assert!(!ci.frame_protection);
        assert!(ci.allocate_address);

        let ci = CapabilityInformation::from(0x31);
        assert!(ci.alternate_pan_coordinator);
        assert!(ci.reserved_1);
        assert!(ci.reserved_2);
        assert!(!ci.router_capable);
    }

    #[test]
    fn capability_information_to_u8() {
        for byte in 0..=255u8 {
            assert_eq!(u8::from(CapabilityInformation::from(byte)), byte);
        }
        let ci = CapabilityInformation {
            mains_power: true,
            idle_receive: true,
            allocate_address: true,
            ..CapabilityInformation::default()
        };
        assert_eq!(u8::from(ci), 0x8c);
    }
}
