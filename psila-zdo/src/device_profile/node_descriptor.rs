//! Node descriptor and its request and response

use byteorder::ByteOrder;

use crate::common::address::NetworkAddress;
use crate::common::capability_information::CapabilityInformation;
use crate::common::server_mask::ServerMask;
use crate::cursor::Cursor;
use crate::device_profile::tlv::{
    read_tlvs, write_global, write_tlvs, FragmentationParameters, GlobalTag, Tlv, TlvValue,
};
use crate::pack::Pack;
use crate::Error;

/// Size of a packed node descriptor
pub const NODE_DESCRIPTOR_SIZE: usize = 13;

const LOGICAL_TYPE_MASK: u8 = 0b0000_0111;
const COMPLEX_DESCRIPTOR_AVAILABLE: u8 = 0b0000_1000;
const USER_DESCRIPTOR_AVAILABLE: u8 = 0b0001_0000;
const FRAGMENTATION_SUPPORTED: u8 = 0b0010_0000;
const RESERVED_SHIFT: u8 = 6;
const APS_FLAGS_MASK: u8 = 0b0000_0111;
const FREQUENCY_BAND_MASK: u8 = 0b1111_1000;

extended_enum!(
    /// Logical device type
    LogicalType, u8,
    /// Zigbee coordinator
    Coordinator => 0x00,
    /// Zigbee router
    Router => 0x01,
    /// Zigbee end device
    EndDevice => 0x02;
    /// Reserved values 3 to 7
    Reserved
);

bitflags! {
    /// Frequency bands, at their position in the descriptor byte
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct FrequencyBands: u8 {
        const BAND_868_MHZ = 0x08;
        const BAND_902_MHZ = 0x20;
        const BAND_2400_MHZ = 0x40;
        const BAND_EUROPEAN_SUB_GHZ = 0x80;
    }
}

bitflags! {
    /// Descriptor capabilities
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DescriptorCapability: u8 {
        const EXTENDED_ACTIVE_ENDPOINT_LIST = 0x01;
        const EXTENDED_SIMPLE_DESCRIPTOR_LIST = 0x02;
    }
}

// 2.3.2.3 Node Descriptor
/// Node descriptor
///
/// Fragmentation support is only reported by nodes with a stack compliance
/// revision of 23 or higher, for other nodes it is `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeDescriptor {
    /// Coordinator, router or end device
    pub logical_type: LogicalType,
    /// Deprecated
    pub complex_descriptor_available: bool,
    /// Deprecated
    pub user_descriptor_available: bool,
    /// Fragmentation support, only from revision 23 on
    pub fragmentation_supported: Option<bool>,
    /// Reserved bits 6 and 7 of the first byte
    pub reserved: u8,
    /// Unused APS flags, 3 bits
    pub aps_flags: u8,
    /// Supported frequency bands
    pub frequency_bands: FrequencyBands,
    /// MAC capability flags
    pub mac_capability: CapabilityInformation,
    /// Manufacturer code
    pub manufacturer_code: u16,
    /// Maximum network frame payload
    pub maximum_buffer_size: u8,
    /// Maximum incoming application transfer size
    pub maximum_incoming_transfer_size: u16,
    /// Server roles and stack compliance revision
    pub server_mask: ServerMask,
    /// Maximum outgoing application transfer size
    pub maximum_outgoing_transfer_size: u16,
    /// Extended descriptor lists available
    pub descriptor_capability: DescriptorCapability,
}

impl Pack for NodeDescriptor {
    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        let mut byte = u8::from(self.logical_type) & LOGICAL_TYPE_MASK;
        if self.complex_descriptor_available {
            byte |= COMPLEX_DESCRIPTOR_AVAILABLE;
        }
        if self.user_descriptor_available {
            byte |= USER_DESCRIPTOR_AVAILABLE;
        }
        if self.fragmentation_supported == Some(true) {
            byte |= FRAGMENTATION_SUPPORTED;
        }
        byte |= (self.reserved & 0b11) << RESERVED_SHIFT;
        cursor.write_u8(byte)?;
        cursor.write_u8(
            self.aps_flags & APS_FLAGS_MASK | self.frequency_bands.bits() & FREQUENCY_BAND_MASK,
        )?;
        cursor.write_u8(self.mac_capability.into())?;
        cursor.write_u16(self.manufacturer_code)?;
        cursor.write_u8(self.maximum_buffer_size)?;
        cursor.write_u16(self.maximum_incoming_transfer_size)?;
        cursor.write_u16(self.server_mask.into())?;
        cursor.write_u16(self.maximum_outgoing_transfer_size)?;
        cursor.write_u8(self.descriptor_capability.bits())
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        if !cursor.has_at_least(NODE_DESCRIPTOR_SIZE) {
            return Err(Error::WrongNumberOfBytes);
        }
        let byte = cursor.read_u8()?;
        let logical_type = LogicalType::from(byte & LOGICAL_TYPE_MASK);
        let bands = cursor.read_u8()?;
        let mac_capability = CapabilityInformation::from(cursor.read_u8()?);
        let manufacturer_code = cursor.read_u16()?;
        let maximum_buffer_size = cursor.read_u8()?;
        let maximum_incoming_transfer_size = cursor.read_u16()?;
        let server_mask = ServerMask::from(cursor.read_u16()?);
        let maximum_outgoing_transfer_size = cursor.read_u16()?;
        let descriptor_capability = DescriptorCapability::from_bits_retain(cursor.read_u8()?);
        let fragmentation_supported = if server_mask.reports_fragmentation() {
            Some(byte & FRAGMENTATION_SUPPORTED == FRAGMENTATION_SUPPORTED)
        } else {
            None
        };
        Ok(Self {
            logical_type,
            complex_descriptor_available: byte & COMPLEX_DESCRIPTOR_AVAILABLE
                == COMPLEX_DESCRIPTOR_AVAILABLE,
            user_descriptor_available: byte & USER_DESCRIPTOR_AVAILABLE
                == USER_DESCRIPTOR_AVAILABLE,
            fragmentation_supported,
            reserved: byte >> RESERVED_SHIFT,
            aps_flags: bands & APS_FLAGS_MASK,
            frequency_bands: FrequencyBands::from_bits_retain(bands & FREQUENCY_BAND_MASK),
            mac_capability,
            manufacturer_code,
            maximum_buffer_size,
            maximum_incoming_transfer_size,
            server_mask,
            maximum_outgoing_transfer_size,
            descriptor_capability,
        })
    }
}

// 2.4.3.1.3 Node_Desc_req
/// Node descriptor request
/// Requests the node descriptor for a remote device
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeDescriptorRequest {
    /// Network address of the device
    pub address: NetworkAddress,
    /// Fragmentation parameters of the requesting node
    pub fragmentation: Option<FragmentationParameters>,
}

impl Pack for NodeDescriptorRequest {
    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_short_address(self.address)?;
        if let Some(ref fragmentation) = self.fragmentation {
            write_global(cursor, GlobalTag::FragmentationParameters, fragmentation)?;
        }
        Ok(())
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let address = cursor.read_short_address()?;
        let fragmentation = read_tlvs(cursor, None, false)?
            .into_iter()
            .find_map(|tlv| match tlv.value {
                TlvValue::FragmentationParameters(value) => Some(value),
                _ => None,
            });
        Ok(Self {
            address,
            fragmentation,
        })
    }
}

// 2.4.4.2.3 Node_Desc_rsp
/// Node descriptor response
/// Response to a node descriptor request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeDescriptorResponse {
    /// Network address of the device
    pub address: NetworkAddress,
    /// Node descriptor of the device
    pub descriptor: NodeDescriptor,
    /// Trailing global TLVs
    pub tlvs: Vec<Tlv>,
}

impl Pack for NodeDescriptorResponse {
    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_short_address(self.address)?;
        self.descriptor.pack(cursor)?;
        write_tlvs(cursor, &self.tlvs)
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let address = cursor.read_short_address()?;
        let descriptor = NodeDescriptor::unpack(cursor)?;
        let tlvs = read_tlvs(cursor, None, false)?;
        Ok(Self {
            address,
            descriptor,
            tlvs,
        })
    }
}
