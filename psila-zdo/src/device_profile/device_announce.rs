use byteorder::ByteOrder;

use crate::cursor::Cursor;
use crate::pack::Pack;
use crate::Error;
use crate::{CapabilityInformation, ExtendedAddress, NetworkAddress};

// 2.4.3.1.11 Device_annce
/// Device Announce
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceAnnounce {
    /// Network address of the device
    pub network_address: NetworkAddress,
    /// Extended (IEEE) address of the device
    pub extended_address: ExtendedAddress,
    /// Device capabilities
    pub capability: CapabilityInformation,
}

impl Pack for DeviceAnnounce {
    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_short_address(self.network_address)?;
        cursor.write_address(self.extended_address)?;
        cursor.write_u8(self.capability.into())
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let network_address = cursor.read_short_address()?;
        let extended_address = cursor.read_address()?;
        let capability = CapabilityInformation::from(cursor.read_u8()?);
        Ok(Self {
            network_address,
            extended_address,
            capability,
        })
    }
}

// 2.4.3.1.12 Parent_annce, 2.4.4.2.12 Parent_annce_rsp
/// Parent announce
///
/// The end devices held by a router, used both as announcement and as the
/// answer listing the children the receiver holds as well.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParentAnnounce {
    /// Extended addresses of the children
    pub children: Vec<ExtendedAddress>,
}

impl Pack for ParentAnnounce {
    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_count(self.children.len())?;
        cursor.write_list_address(&self.children)
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let count = cursor.read_u8()? as usize;
        Ok(Self {
            children: cursor.read_list_address(count)?,
        })
    }
}
