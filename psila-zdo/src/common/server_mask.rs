//! # Server mask
//!
//! Server capabilities of a node, carried in the node descriptor and in
//! system server discovery.

use core::convert::From;

const SERVER_PRIMARY_TRUST_CENTER: u16 = 0x0001;
const SERVER_BACKUP_TRUST_CENTER: u16 = 0x0002;
const SERVER_PRIMARY_BINDING_TABLE_CACHE: u16 = 0x0004;
const SERVER_BACKUP_BINDING_TABLE_CACHE: u16 = 0x0008;
const SERVER_PRIMARY_DISCOVERY_CACHE: u16 = 0x0010;
const SERVER_BACKUP_DISCOVERY_CACHE: u16 = 0x0020;
const SERVER_NETWORK_MANAGER: u16 = 0x0040;
const SERVER_RESERVED_1: u16 = 0x0080;
const SERVER_RESERVED_2: u16 = 0x0100;
const STACK_COMPLIANCE_REVISION_SHIFT: u16 = 9;
const STACK_COMPLIANCE_REVISION_MASK: u16 = 0x7f;

/// Stack compliance revision from which nodes report fragmentation support
pub const REVISION_FRAGMENTATION_SUPPORT: u8 = 23;

/// Server mask
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ServerMask {
    /// Primary trust center
    pub primary_trust_center: bool,
    /// Backup trust center
    pub backup_trust_center: bool,
    /// Deprecated
    pub primary_binding_table_cache: bool,
    /// Deprecated
    pub backup_binding_table_cache: bool,
    /// Deprecated
    pub primary_discovery_cache: bool,
    /// Deprecated
    pub backup_discovery_cache: bool,
    /// Network manager
    pub network_manager: bool,
    /// Reserved bit 7
    pub reserved_1: bool,
    /// Reserved bit 8
    pub reserved_2: bool,
    /// Zigbee core revision the stack implements, 7 bits
    pub stack_compliance_revision: u8,
}

impl From<u16> for ServerMask {
    fn from(value: u16) -> Self {
        let bit = |mask: u16| value & mask == mask;
        Self {
            primary_trust_center: bit(SERVER_PRIMARY_TRUST_CENTER),
            backup_trust_center: bit(SERVER_BACKUP_TRUST_CENTER),
            primary_binding_table_cache: bit(SERVER_PRIMARY_BINDING_TABLE_CACHE),
            backup_binding_table_cache: bit(SERVER_BACKUP_BINDING_TABLE_CACHE),
            primary_discovery_cache: bit(SERVER_PRIMARY_DISCOVERY_CACHE),
            backup_discovery_cache: bit(SERVER_BACKUP_DISCOVERY_CACHE),
            network_manager: bit(SERVER_NETWORK_MANAGER),
            reserved_1: bit(SERVER_RESERVED_1),
            reserved_2: bit(SERVER_RESERVED_2),
            stack_compliance_revision: ((value >> STACK_COMPLIANCE_REVISION_SHIFT)
                & STACK_COMPLIANCE_REVISION_MASK) as u8,
        }
    }
}

impl From<ServerMask> for u16 {
    fn from(mask: ServerMask) -> Self {
        let mut value = (u16::from(mask.stack_compliance_revision)
            & STACK_COMPLIANCE_REVISION_MASK)
            << STACK_COMPLIANCE_REVISION_SHIFT;
        for (set, bit) in [
            (mask.primary_trust_center, SERVER_PRIMARY_TRUST_CENTER),
            (mask.backup_trust_center, SERVER_BACKUP_TRUST_CENTER),
            (mask.primary_binding_table_cache, SERVER_PRIMARY_BINDING_TABLE_CACHE),
            (mask.backup_binding_table_cache, SERVER_BACKUP_BINDING_TABLE_CACHE),
            (mask.primary_discovery_cache, SERVER_PRIMARY_DISCOVERY_CACHE),
            (mask.backup_discovery_cache, SERVER_BACKUP_DISCOVERY_CACHE),
            (mask.network_manager, SERVER_NETWORK_MANAGER),
            (mask.reserved_1, SERVER_RESERVED_1),
            (mask.reserved_2, SERVER_RESERVED_2),
        ] {
            if set {
                value |= bit;
            }
        }
        value
    }
}

impl ServerMask {
    /// The node reports fragmentation support in its node descriptor
    pub fn reports_fragmentation(&self) -> bool {
        self.stack_compliance_revision >= REVISION_FRAGMENTATION_SUPPORT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_mask_from_u16() {
        // revision 22, network manager, primary trust center
        let mask = ServerMask::from(0x2c41);
        assert!(mask.primary_trust_center);
        assert!(!mask.backup_trust_center);
        assert!(mask.network_manager);
        assert!(!mask.reserved_1);
        assert_eq!(mask.stack_compliance_revision, 22);
        assert!(!mask.reports_fragmentation());

        let mask = ServerMask::from(0x2e00);
        assert_eq!(mask.stack_compliance_revision, 23);
        assert!(mask.reports_fragmentation());
    }

    #[test]
    fn server_mask_to_u16() {
        for value in [0x0000u16, 0x2c41, 0xffff, 0x2e3f, 0x0180] {
            assert_eq!(u16::from(ServerMask::from(value)), value);
        }
    }
}
