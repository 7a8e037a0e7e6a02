//! Neighbor table, as reported by the link quality indicator response

use core::convert::TryFrom;

use byteorder::ByteOrder;

use crate::common::address::{ExtendedAddress, ExtendedPanIdentifier, NetworkAddress};
use crate::cursor::Cursor;
use crate::pack::Pack;
use crate::Error;

extended_enum!(
    /// Neighbor device type
    DeviceType, u8,
    /// ZigBee coordinator
    Coordinator => 0x00,
    /// ZigBee router
    Router => 0x01,
    /// ZigBee end device
    EndDevice => 0x02,
    /// Unknown device type
    Unknown => 0x03,
);

extended_enum!(
    /// Receiver state when idle
    RxOnWhenIdle, u8,
    /// Receiver is off when idle
    Off => 0x00,
    /// Receiver is on when idle
    On => 0x01,
    /// Unknown
    Unknown => 0x02;
    /// Reserved value 3
    Reserved
);

extended_enum!(
    /// Relationship between the neighbor and the reporting device
    Relationship, u8,
    /// Neighbor is the parent
    Parent => 0x00,
    /// Neighbor is a child
    Child => 0x01,
    /// Neighbor is a sibling
    Sibling => 0x02,
    /// None of the above
    NoneOfAbove => 0x03,
    /// Neighbor was a child
    PreviousChild => 0x04;
    /// Reserved values 5 to 7
    Reserved
);

extended_enum!(
    /// Neighbor accepts join requests
    PermitJoining, u8,
    /// Not accepting join requests
    No => 0x00,
    /// Accepting join requests
    Yes => 0x01,
    /// Unknown
    Unknown => 0x02;
    /// Reserved value 3
    Reserved
);

/// Packed size of a neighbor table entry
pub const NEIGHBOR_SIZE: usize = 22;

const DEVICE_TYPE_MASK: u8 = 0x03;
const RX_ON_WHEN_IDLE_SHIFT: u8 = 2;
const RX_ON_WHEN_IDLE_MASK: u8 = 0x03;
const RELATIONSHIP_SHIFT: u8 = 4;
const RELATIONSHIP_MASK: u8 = 0x07;
const RESERVED_1_SHIFT: u8 = 7;
const PERMIT_JOINING_MASK: u8 = 0x03;
const RESERVED_2_SHIFT: u8 = 2;

// 2.4.4.4.2 Mgmt_Lqi_rsp NeighborTableList
/// Neighbor table entry
///
/// Reserved values and bits are kept as received.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighbor {
    /// Extended PAN identifier of the neighbor's network
    pub extended_pan_identifier: ExtendedPanIdentifier,
    /// Extended (IEEE) address of the neighbor
    pub extended_address: ExtendedAddress,
    /// Network address of the neighbor
    pub network_address: NetworkAddress,
    /// Coordinator, router or end device
    pub device_type: DeviceType,
    /// Receiver state while idle
    pub rx_on_when_idle: RxOnWhenIdle,
    /// Relation to the reporting device
    pub relationship: Relationship,
    /// Reserved bit 7 of the device type byte
    pub reserved_1: bool,
    /// Whether the neighbor accepts join requests
    pub permit_joining: PermitJoining,
    /// Reserved bits 2 to 7 of the permit joining byte, shifted down
    pub reserved_2: u8,
    /// Tree depth of the neighbor
    pub depth: u8,
    /// Link quality
    pub link_quality: u8,
}

impl Pack for Neighbor {
    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_address(self.extended_pan_identifier)?;
        cursor.write_address(self.extended_address)?;
        cursor.write_short_address(self.network_address)?;
        let mut value = (u8::from(self.device_type) & DEVICE_TYPE_MASK)
            | (u8::from(self.rx_on_when_idle) & RX_ON_WHEN_IDLE_MASK) << RX_ON_WHEN_IDLE_SHIFT
            | (u8::from(self.relationship) & RELATIONSHIP_MASK) << RELATIONSHIP_SHIFT;
        if self.reserved_1 {
            value |= 1 << RESERVED_1_SHIFT;
        }
        cursor.write_u8(value)?;
        cursor.write_u8(
            (u8::from(self.permit_joining) & PERMIT_JOINING_MASK)
                | self.reserved_2 << RESERVED_2_SHIFT,
        )?;
        cursor.write_u8(self.depth)?;
        cursor.write_u8(self.link_quality)
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let extended_pan_identifier = cursor.read_address()?;
        let extended_address = cursor.read_address()?;
        let network_address = cursor.read_short_address()?;
        let value = cursor.read_u8()?;
        let permit = cursor.read_u8()?;
        let depth = cursor.read_u8()?;
        let link_quality = cursor.read_u8()?;
        Ok(Self {
            extended_pan_identifier,
            extended_address,
            network_address,
            // Two bits, every value has a variant
            device_type: DeviceType::try_from(value & DEVICE_TYPE_MASK)?,
            rx_on_when_idle: RxOnWhenIdle::from(
                (value >> RX_ON_WHEN_IDLE_SHIFT) & RX_ON_WHEN_IDLE_MASK,
            ),
            relationship: Relationship::from((value >> RELATIONSHIP_SHIFT) & RELATIONSHIP_MASK),
            reserved_1: value >> RESERVED_1_SHIFT == 1,
            permit_joining: PermitJoining::from(permit & PERMIT_JOINING_MASK),
            reserved_2: permit >> RESERVED_2_SHIFT,
            depth,
            link_quality,
        })
    }
}

// 2.4.4.4.2 Mgmt_Lqi_rsp
/// Link quality indicator response
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ManagementLinkQualityIndicatorResponse {
    /// Number of entries in the remote neighbor table
    pub neighbors_total: u8,
    /// Index of the first entry in the list
    pub start_index: u8,
    pub neighbors: Vec<Neighbor>,
}

impl Pack for ManagementLinkQualityIndicatorResponse {
    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_u8(self.neighbors_total)?;
        cursor.write_u8(self.start_index)?;
        cursor.write_count(self.neighbors.len())?;
        self.neighbors
            .iter()
            .try_for_each(|neighbor| neighbor.pack(cursor))
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let neighbors_total = cursor.read_u8()?;
        let start_index = cursor.read_u8()?;
        let count = cursor.read_u8()? as usize;
        if !cursor.has_at_least(count * NEIGHBOR_SIZE) {
            return Err(Error::WrongNumberOfBytes);
        }
        let neighbors = (0..count)
            .map(|_| Neighbor::unpack(cursor))
            .collect::<Result<Vec<_>, Error>>()?;
        Ok(Self {
            neighbors_total,
            start_index,
            neighbors,
        })
    }
}
