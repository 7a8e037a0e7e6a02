use core::convert::TryFrom;

use byteorder::ByteOrder;

use crate::common::address::NetworkAddress;
use crate::cursor::Cursor;
use crate::pack::Pack;
use crate::Error;

extended_enum!(
    /// Route status
    RouteStatus, u8,
    /// Route is active
    Active => 0x00,
    /// Route discovery is underway
    DiscoveryUnderway => 0x01,
    /// Route discovery failed
    DiscoveryFailed => 0x02,
    /// Route is inactive
    Inactive => 0x03,
    /// Route validation is underway
    ValidationUnderway => 0x04,
);

const STATUS_MASK: u8 = 0x07;
const MEMORY_CONSTRAINED: u8 = 0x08;
const MANY_TO_ONE: u8 = 0x10;
const ROUTE_RECORD_REQUIRED: u8 = 0x20;

/// Packed size of a routing table entry
pub const ROUTING_TABLE_ENTRY_SIZE: usize = 5;

// 2.4.4.4.3 Mgmt_Rtg_rsp RoutingTableList
/// Routing table entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoutingTableEntry {
    /// Destination network address
    pub destination: NetworkAddress,
    /// Raw route status, see [`RoutingTableEntry::route_status`]
    pub status: u8,
    /// Destination is memory constrained
    pub memory_constrained: bool,
    /// Destination is a many-to-one concentrator
    pub many_to_one: bool,
    /// A route record must be sent before data
    pub route_record_required: bool,
    /// Next hop network address
    pub next_hop: NetworkAddress,
}

impl RoutingTableEntry {
    /// Route status, `None` for reserved values
    pub fn route_status(&self) -> Option<RouteStatus> {
        RouteStatus::try_from(self.status).ok()
    }
}

impl Pack for RoutingTableEntry {
    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        let mut value = self.status & STATUS_MASK;
        if self.memory_constrained {
            value |= MEMORY_CONSTRAINED;
        }
        if self.many_to_one {
            value |= MANY_TO_ONE;
        }
        if self.route_record_required {
            value |= ROUTE_RECORD_REQUIRED;
        }
        cursor.write_short_address(self.destination)?;
        cursor.write_u8(value)?;
        cursor.write_short_address(self.next_hop)
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let destination = cursor.read_short_address()?;
        let value = cursor.read_u8()?;
        let next_hop = cursor.read_short_address()?;
        Ok(Self {
            destination,
            status: value & STATUS_MASK,
            memory_constrained: value & MEMORY_CONSTRAINED == MEMORY_CONSTRAINED,
            many_to_one: value & MANY_TO_ONE == MANY_TO_ONE,
            route_record_required: value & ROUTE_RECORD_REQUIRED == ROUTE_RECORD_REQUIRED,
            next_hop,
        })
    }
}

// 2.4.4.4.3 Mgmt_Rtg_rsp
/// Routing table response
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ManagementRoutingTableResponse {
    /// Number of entries in the remote routing table
    pub entries_total: u8,
    /// Index of the first entry in the list
    pub start_index: u8,
    pub entries: Vec<RoutingTableEntry>,
}

impl Pack for ManagementRoutingTableResponse {
    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_u8(self.entries_total)?;
        cursor.write_u8(self.start_index)?;
        cursor.write_count(self.entries.len())?;
        self.entries.iter().try_for_each(|entry| entry.pack(cursor))
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let entries_total = cursor.read_u8()?;
        let start_index = cursor.read_u8()?;
        let count = cursor.read_u8()? as usize;
        if !cursor.has_at_least(count * ROUTING_TABLE_ENTRY_SIZE) {
            return Err(Error::WrongNumberOfBytes);
        }
        let entries = (0..count)
            .map(|_| RoutingTableEntry::unpack(cursor))
            .collect::<Result<Vec<_>, Error>>()?;
        Ok(Self {
            entries_total,
            start_index,
            entries,
        })
    }
}
