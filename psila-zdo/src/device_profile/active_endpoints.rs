use byteorder::ByteOrder;

use crate::common::address::NetworkAddress;
use crate::cursor::Cursor;
use crate::pack::Pack;
use crate::Error;

// 2.4.3.1.6 Active_EP_req
/// Active endpoint request
/// Requests the active endpoints for a remote device
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveEndpointRequest {
    /// Network address of the device
    pub address: NetworkAddress,
}

impl Pack for ActiveEndpointRequest {
    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_short_address(self.address)
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        Ok(Self {
            address: cursor.read_short_address()?,
        })
    }
}

// 2.4.4.2.6 Active_EP_rsp
/// Active endpoint response
/// Response to a active endpoint request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveEndpointResponse {
    /// Network address of the device
    pub address: NetworkAddress,
    /// Active endpoints
    pub endpoints: Vec<u8>,
}

impl Pack for ActiveEndpointResponse {
    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_short_address(self.address)?;
        cursor.write_count(self.endpoints.len())?;
        cursor.write_bytes(&self.endpoints, self.endpoints.len())
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let address = cursor.read_short_address()?;
        let count = cursor.read_u8()? as usize;
        let endpoints = cursor.read_list_u8(count)?;
        Ok(Self { address, endpoints })
    }
}
