use byteorder::ByteOrder;

use crate::common::address::NetworkAddress;
use crate::cursor::Cursor;
use crate::pack::Pack;
use crate::Error;

// 2.4.3.1.7 Match_Desc_req
/// Match descriptor request
/// Find devices with endpoints matching the profile and clusters
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchDescriptorRequest {
    /// Network address of interest, or a broadcast
    pub address: NetworkAddress,
    /// Profile to match
    pub profile: u16,
    /// Input clusters to match
    pub input_clusters: Vec<u16>,
    /// Output clusters to match
    pub output_clusters: Vec<u16>,
}

impl Pack for MatchDescriptorRequest {
    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_short_address(self.address)?;
        cursor.write_u16(self.profile)?;
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
        let address = cursor.read_short_address()?;
        let profile = cursor.read_u16()?;
        let count = cursor.read_u8()? as usize;
        let input_clusters = cursor.read_list_u16(count)?;
        let count = cursor.read_u8()? as usize;
        let output_clusters = cursor.read_list_u16(count)?;
        Ok(Self {
            address,
            profile,
            input_clusters,
            output_clusters,
        })
    }
}

// 2.4.4.2.7 Match_Desc_rsp
/// Match descriptor response
/// Response to a match descriptor request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchDescriptorResponse {
    /// Network address of the device
    pub address: NetworkAddress,
    /// Matching endpoints
    pub endpoints: Vec<u8>,
}

impl Pack for MatchDescriptorResponse {
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
