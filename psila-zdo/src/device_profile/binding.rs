use byteorder::ByteOrder;

use crate::common::address::{ExtendedAddress, GroupIdentifier};
use crate::cursor::Cursor;
use crate::pack::Pack;
use crate::Error;

const ADDRESS_MODE_GROUP: u8 = 0x01;
const ADDRESS_MODE_EXTENDED: u8 = 0x03;

/// Destination of a binding
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindTarget {
    /// Bound to a group, address mode 0x01
    Group(GroupIdentifier),
    /// Bound to a device endpoint, address mode 0x03
    Extended {
        address: ExtendedAddress,
        endpoint: u8,
    },
}

impl BindTarget {
    /// Address mode octet preceding the target
    pub fn address_mode(&self) -> u8 {
        match self {
            BindTarget::Group(_) => ADDRESS_MODE_GROUP,
            BindTarget::Extended { .. } => ADDRESS_MODE_EXTENDED,
        }
    }

    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_u8(self.address_mode())?;
        match *self {
            BindTarget::Group(group) => cursor.write_short_address(group),
            BindTarget::Extended { address, endpoint } => {
                cursor.write_address(address)?;
                cursor.write_u8(endpoint)
            }
        }
    }

    /// Read the target following `mode`, `None` for an unsupported mode
    ///
    /// Nothing is consumed for an unsupported mode.
    fn unpack<T, B>(mode: u8, cursor: &mut Cursor<T, B>) -> Result<Option<Self>, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        match mode {
            ADDRESS_MODE_GROUP => Ok(Some(BindTarget::Group(cursor.read_short_address()?))),
            ADDRESS_MODE_EXTENDED => {
                let address = cursor.read_address()?;
                let endpoint = cursor.read_u8()?;
                Ok(Some(BindTarget::Extended { address, endpoint }))
            }
            _ => Ok(None),
        }
    }
}

// 2.4.3.2.2 Bind_req, 2.4.3.2.3 Unbind_req, 2.4.4.4.4 Mgmt_Bind_rsp BindingTableList
/// Binding table entry
///
/// Carried by bind and unbind requests and listed in the binding table
/// response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Binding {
    /// Extended address of the source device
    pub source: ExtendedAddress,
    /// Source endpoint
    pub source_endpoint: u8,
    /// Bound cluster
    pub cluster: u16,
    /// Group or device the binding points at
    pub target: BindTarget,
}

impl Pack for Binding {
    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_address(self.source)?;
        cursor.write_u8(self.source_endpoint)?;
        cursor.write_u16(self.cluster)?;
        self.target.pack(cursor)
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let source = cursor.read_address()?;
        let source_endpoint = cursor.read_u8()?;
        let cluster = cursor.read_u16()?;
        let mode = cursor.read_u8()?;
        let target = BindTarget::unpack(mode, cursor)?.ok_or(Error::UnsupportedAddressMode(mode))?;
        Ok(Self {
            source,
            source_endpoint,
            cluster,
            target,
        })
    }
}

// 2.4.4.4.4 Mgmt_Bind_rsp
/// Binding table response
///
/// Entries with an address mode other than group or extended are dropped
/// when unpacking. The mode octet is the last thing read for such an entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ManagementBindingTableResponse {
    /// Number of entries in the remote table
    pub total: u8,
    /// Index of the first entry in the list
    pub start_index: u8,
    pub entries: Vec<Binding>,
}

impl Pack for ManagementBindingTableResponse {
    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_u8(self.total)?;
        cursor.write_u8(self.start_index)?;
        cursor.write_count(self.entries.len())?;
        self.entries.iter().try_for_each(|entry| entry.pack(cursor))
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let total = cursor.read_u8()?;
        let start_index = cursor.read_u8()?;
        let count = cursor.read_u8()? as usize;
        let mut entries = Vec::with_capacity(count);
        for _ in 0..count {
            let source = cursor.read_address()?;
            let source_endpoint = cursor.read_u8()?;
            let cluster = cursor.read_u16()?;
            let mode = cursor.read_u8()?;
            match BindTarget::unpack(mode, cursor)? {
                Some(target) => entries.push(Binding {
                    source,
                    source_endpoint,
                    cluster,
                    target,
                }),
                None => log::debug!("Dropping binding entry with address mode {:02x}", mode),
            }
        }
        Ok(Self {
            total,
            start_index,
            entries,
        })
    }
}
