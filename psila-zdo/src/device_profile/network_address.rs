use core::convert::TryFrom;

use byteorder::ByteOrder;

use crate::common::address::{ExtendedAddress, NetworkAddress};
use crate::cursor::Cursor;
use crate::pack::Pack;
use crate::Error;

extended_enum!(
    /// Address request type
    RequestType, u8,
    /// Only the address of the device itself
    SingleDevice => 0x00,
    /// The address of the device and its associated devices
    Extended => 0x01,
);

// 2.4.3.1.1 NWK_addr_req
/// Network address request
/// Requests the network address for a remote device
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkAddressRequest {
    /// Extended address to look up
    pub address: ExtendedAddress,
    /// Single device or extended response
    pub request_type: RequestType,
    /// First associated device to list
    pub start_index: u8,
}

impl Pack for NetworkAddressRequest {
    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_address(self.address)?;
        cursor.write_u8(self.request_type.into())?;
        cursor.write_u8(self.start_index)
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let address = cursor.read_address()?;
        let request_type = RequestType::try_from(cursor.read_u8()?)?;
        let start_index = cursor.read_u8()?;
        Ok(Self {
            address,
            request_type,
            start_index,
        })
    }
}

// 2.4.3.1.2 IEEE_addr_req
/// Extended (IEEE) address request
/// Requests the extended address for a remote device
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtendedAddressRequest {
    /// Network address to look up
    pub address: NetworkAddress,
    /// Single device or extended response
    pub request_type: RequestType,
    /// First associated device to list
    pub start_index: u8,
}

impl Pack for ExtendedAddressRequest {
    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_short_address(self.address)?;
        cursor.write_u8(self.request_type.into())?;
        cursor.write_u8(self.start_index)
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let address = cursor.read_short_address()?;
        let request_type = RequestType::try_from(cursor.read_u8()?)?;
        let start_index = cursor.read_u8()?;
        Ok(Self {
            address,
            request_type,
            start_index,
        })
    }
}

/// Devices associated with the responding device
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssociatedDevices {
    /// Index of the first device in the list
    pub start_index: u8,
    /// Network addresses of the associated devices
    pub devices: Vec<NetworkAddress>,
}

// 2.4.4.2.1 NWK_addr_rsp, 2.4.4.2.2 IEEE_addr_rsp
/// Network and IEEE address response
///
/// A single device response has no associated device list at all, not even
/// an empty count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddressResponse {
    /// Extended address of the remote device
    pub extended_address: ExtendedAddress,
    /// Network address of the remote device
    pub network_address: NetworkAddress,
    /// Associated devices, only in an extended response
    pub associated: Option<AssociatedDevices>,
}

impl AddressResponse {
    /// Response without an associated device list
    pub fn single_device_response(
        extended_address: ExtendedAddress,
        network_address: NetworkAddress,
    ) -> Self {
        Self {
            extended_address,
            network_address,
            associated: None,
        }
    }

    /// True when the response lists associated devices
    pub fn is_extended(&self) -> bool {
        self.associated.is_some()
    }

    /// Associated devices, empty for a single device response
    pub fn devices(&self) -> &[NetworkAddress] {
        match self.associated {
            Some(ref associated) => &associated.devices,
            None => &[],
        }
    }
}

impl Pack for AddressResponse {
    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_address(self.extended_address)?;
        cursor.write_short_address(self.network_address)?;
        if let Some(ref associated) = self.associated {
            cursor.write_count(associated.devices.len())?;
            cursor.write_u8(associated.start_index)?;
            cursor.write_list_short_address(&associated.devices)?;
        }
        Ok(())
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let extended_address = cursor.read_address()?;
        let network_address = cursor.read_short_address()?;
        let associated = if cursor.is_more() {
            let count = cursor.read_u8()? as usize;
            let start_index = cursor.read_u8()?;
            let devices = cursor.read_list_short_address(count)?;
            Some(AssociatedDevices {
                start_index,
                devices,
            })
        } else {
            None
        };
        Ok(Self {
            extended_address,
            network_address,
            associated,
        })
    }
}
