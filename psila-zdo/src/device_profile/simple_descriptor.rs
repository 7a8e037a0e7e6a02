use byteorder::ByteOrder;

use crate::common::address::NetworkAddress;
use crate::cursor::Cursor;
use crate::pack::Pack;
use crate::Error;

// 2.3.2.5 Simple Descriptor
/// Simple descriptor for a node endpoint
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimpleDescriptor {
    /// Endpoint number, 1 to 254
    pub endpoint: u8,
    /// Application profile identifier
    pub profile: u16,
    /// Application device identifier
    pub device: u16,
    /// Application device version, 4 bits
    pub device_version: u8,
    /// Server clusters implemented by the device
    pub input_clusters: Vec<u16>,
    /// Client clusters implemented by the device
    pub output_clusters: Vec<u16>,
}

impl SimpleDescriptor {
    /// Number of bytes the packed descriptor occupies
    pub fn packed_len(&self) -> usize {
        8 + (self.input_clusters.len() + self.output_clusters.len()) * 2
    }
}

impl Pack for SimpleDescriptor {
    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_u8(self.endpoint)?;
        cursor.write_u16(self.profile)?;
        cursor.write_u16(self.device)?;
        cursor.write_u8(self.device_version)?;
        cursor.write_count(self.input_clusters.len())?;
        cursor.write_list_u16(&self.input_clusters)?;
        cursor.write_count(self.output_clusters.len())?;
        cursor.write_list_u16(&self.output_clusters)
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let endpoint = cursor.read_u8()?;
        let profile = cursor.read_u16()?;
        let device = cursor.read_u16()?;
        let device_version = cursor.read_u8()?;
        let count = cursor.read_u8()? as usize;
        let input_clusters = cursor.read_list_u16(count)?;
        let count = cursor.read_u8()? as usize;
        let output_clusters = cursor.read_list_u16(count)?;
        Ok(Self {
            endpoint,
            profile,
            device,
            device_version,
            input_clusters,
            output_clusters,
        })
    }
}

// 2.4.3.1.5 Simple_Desc_req
/// Simple descriptor request
/// Requests the simple descriptor for a remote device endpoint
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimpleDescriptorRequest {
    /// Network address of the device
    pub address: NetworkAddress,
    /// Endpoint to describe
    pub endpoint: u8,
}

impl Pack for SimpleDescriptorRequest {
    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_short_address(self.address)?;
        cursor.write_u8(self.endpoint)
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let address = cursor.read_short_address()?;
        let endpoint = cursor.read_u8()?;
        Ok(Self { address, endpoint })
    }
}

// 2.4.4.2.5 Simple_Desc_rsp
/// Simple descriptor response
/// Response to a simple descriptor request
///
/// The length byte in front of the descriptor is computed when packing. When
/// unpacking it bounds the descriptor, bytes it declares beyond the
/// descriptor are skipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimpleDescriptorResponse {
    /// Network address of the device the descriptor belongs to
    pub address: NetworkAddress,
    /// Descriptor of the requested endpoint
    pub descriptor: SimpleDescriptor,
}

impl Pack for SimpleDescriptorResponse {
    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_short_address(self.address)?;
        cursor.write_count(self.descriptor.packed_len())?;
        self.descriptor.pack(cursor)
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let address = cursor.read_short_address()?;
        let length = cursor.read_u8()? as usize;
        let mut inner = Cursor::<&[u8], B>::new(cursor.read_bytes(length)?, 0);
        let descriptor = SimpleDescriptor::unpack(&mut inner)?;
        if inner.is_more() {
            log::debug!("Skipping {} bytes after simple descriptor", inner.remaining());
        }
        Ok(Self {
            address,
            descriptor,
        })
    }
}
