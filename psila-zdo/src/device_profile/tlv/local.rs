//! Local TLV values, tags 0 to 63
//!
//! The meaning of a local tag depends on the message carrying it. Requests
//! place their single local TLV at tag 0, responses name their tags through a
//! [`LocalTlvReaders`](super::LocalTlvReaders) table.

use byteorder::ByteOrder;

use crate::common::address::{ExtendedAddress, NetworkAddress, EXTENDED_ADDRESS_SIZE};
use crate::cursor::Cursor;
use crate::device_profile::Status;
use crate::pack::PackTlv;
use crate::Error;

/// Curve25519 public point size
pub const PUBLIC_POINT_SIZE: usize = 32;
/// APS frame counter challenge size
pub const CHALLENGE_SIZE: usize = 8;
/// Message integrity code size
pub const MIC_SIZE: usize = 8;

fn check_length(expected: usize, length: usize) -> Result<(), Error> {
    if expected > length {
        Err(Error::WrongNumberOfBytes)
    } else {
        Ok(())
    }
}

/// List of extended addresses
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Eui64List {
    /// Addresses in the list
    pub addresses: Vec<ExtendedAddress>,
}

impl PackTlv for Eui64List {
    const MINIMUM_LENGTH: usize = 1;

    fn packed_len(&self) -> usize {
        1 + self.addresses.len() * EXTENDED_ADDRESS_SIZE
    }

    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_count(self.addresses.len())?;
        cursor.write_list_address(&self.addresses)
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>, length: usize) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let count = cursor.read_u8()? as usize;
        check_length(1 + count * EXTENDED_ADDRESS_SIZE, length)?;
        Ok(Self {
            addresses: cursor.read_list_address(count)?,
        })
    }
}

/// Beacon survey configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BeaconSurveyConfiguration {
    /// Channel page and channel masks to scan
    pub scan_channels: Vec<u32>,
    /// Bit 0 set for an enhanced active scan
    pub configuration: u8,
}

impl PackTlv for BeaconSurveyConfiguration {
    const MINIMUM_LENGTH: usize = 2;

    fn packed_len(&self) -> usize {
        2 + self.scan_channels.len() * 4
    }

    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_count(self.scan_channels.len())?;
        cursor.write_list_u32(&self.scan_channels)?;
        cursor.write_u8(self.configuration)
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>, length: usize) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let count = cursor.read_u8()? as usize;
        check_length(2 + count * 4, length)?;
        let scan_channels = cursor.read_list_u32(count)?;
        let configuration = cursor.read_u8()?;
        Ok(Self {
            scan_channels,
            configuration,
        })
    }
}

/// Curve25519 public point of a device
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Curve25519PublicPoint {
    /// Device owning the point
    pub device: ExtendedAddress,
    /// Public point
    pub public_point: [u8; PUBLIC_POINT_SIZE],
}

impl PackTlv for Curve25519PublicPoint {
    const MINIMUM_LENGTH: usize = EXTENDED_ADDRESS_SIZE + PUBLIC_POINT_SIZE;

    fn packed_len(&self) -> usize {
        Self::MINIMUM_LENGTH
    }

    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_address(self.device)?;
        cursor.write_bytes(&self.public_point, PUBLIC_POINT_SIZE)
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>, _length: usize) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let device = cursor.read_address()?;
        let public_point = cursor.read_array()?;
        Ok(Self {
            device,
            public_point,
        })
    }
}

/// Identifier of the authentication token to retrieve
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthenticationTokenId {
    /// Global tag of the token, usually the symmetric passphrase
    pub tag_id: u8,
}

impl PackTlv for AuthenticationTokenId {
    const MINIMUM_LENGTH: usize = 1;

    fn packed_len(&self) -> usize {
        1
    }

    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_u8(self.tag_id)
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>, _length: usize) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        Ok(Self {
            tag_id: cursor.read_u8()?,
        })
    }
}

/// Extended address of the device in question
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetIeeeAddress {
    /// Extended address
    pub address: ExtendedAddress,
}

impl PackTlv for TargetIeeeAddress {
    const MINIMUM_LENGTH: usize = EXTENDED_ADDRESS_SIZE;

    fn packed_len(&self) -> usize {
        EXTENDED_ADDRESS_SIZE
    }

    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_address(self.address)
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>, _length: usize) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        Ok(Self {
            address: cursor.read_address()?,
        })
    }
}

/// Selected key negotiation method
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectedKeyNegotiationMethod {
    /// One of the key negotiation protocol bits
    pub protocol: u8,
    /// One of the pre-shared secret bits
    pub secret: u8,
    /// Device the method applies to
    pub device: ExtendedAddress,
}

impl PackTlv for SelectedKeyNegotiationMethod {
    const MINIMUM_LENGTH: usize = 2 + EXTENDED_ADDRESS_SIZE;

    fn packed_len(&self) -> usize {
        Self::MINIMUM_LENGTH
    }

    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_u8(self.protocol)?;
        cursor.write_u8(self.secret)?;
        cursor.write_address(self.device)
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>, _length: usize) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let protocol = cursor.read_u8()?;
        let secret = cursor.read_u8()?;
        let device = cursor.read_address()?;
        Ok(Self {
            protocol,
            secret,
            device,
        })
    }
}

/// APS frame counter challenge
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApsFrameCounterChallenge {
    /// Device sending the challenge
    pub sender: ExtendedAddress,
    /// Random challenge
    pub challenge: [u8; CHALLENGE_SIZE],
}

impl PackTlv for ApsFrameCounterChallenge {
    const MINIMUM_LENGTH: usize = EXTENDED_ADDRESS_SIZE + CHALLENGE_SIZE;

    fn packed_len(&self) -> usize {
        Self::MINIMUM_LENGTH
    }

    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_address(self.sender)?;
        cursor.write_bytes(&self.challenge, CHALLENGE_SIZE)
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>, _length: usize) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let sender = cursor.read_address()?;
        let challenge = cursor.read_array()?;
        Ok(Self { sender, challenge })
    }
}

/// List of TLV tag identifiers
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TlvIdList {
    /// Tag identifiers
    pub tag_ids: Vec<u8>,
}

impl PackTlv for TlvIdList {
    const MINIMUM_LENGTH: usize = 1;

    fn packed_len(&self) -> usize {
        1 + self.tag_ids.len()
    }

    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_count(self.tag_ids.len())?;
        cursor.write_bytes(&self.tag_ids, self.tag_ids.len())
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>, length: usize) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let count = cursor.read_u8()? as usize;
        check_length(1 + count, length)?;
        Ok(Self {
            tag_ids: cursor.read_list_u8(count)?,
        })
    }
}

/// Beacon survey results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BeaconSurveyResults {
    /// Beacons received
    pub total_beacons: u8,
    /// Beacons from the device's own network
    pub on_network_beacons: u8,
    /// Beacons from potential parents
    pub potential_parent_beacons: u8,
    /// Beacons from other networks
    pub other_network_beacons: u8,
}

impl PackTlv for BeaconSurveyResults {
    const MINIMUM_LENGTH: usize = 4;

    fn packed_len(&self) -> usize {
        4
    }

    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_u8(self.total_beacons)?;
        cursor.write_u8(self.on_network_beacons)?;
        cursor.write_u8(self.potential_parent_beacons)?;
        cursor.write_u8(self.other_network_beacons)
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>, _length: usize) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        Ok(Self {
            total_beacons: cursor.read_u8()?,
            on_network_beacons: cursor.read_u8()?,
            potential_parent_beacons: cursor.read_u8()?,
            other_network_beacons: cursor.read_u8()?,
        })
    }
}

/// Potential parent found during a beacon survey
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PotentialParent {
    /// Network address of the parent
    pub network_address: NetworkAddress,
    /// Link quality of the beacon
    pub link_quality: u8,
}

/// Potential parents
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PotentialParents {
    /// Network address of the current parent
    pub current_parent: NetworkAddress,
    /// Link quality of the current parent
    pub current_parent_link_quality: u8,
    /// Other parents, strongest first
    pub parents: Vec<PotentialParent>,
}

impl PackTlv for PotentialParents {
    const MINIMUM_LENGTH: usize = 4;

    fn packed_len(&self) -> usize {
        4 + self.parents.len() * 3
    }

    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_u16(self.current_parent.into())?;
        cursor.write_u8(self.current_parent_link_quality)?;
        cursor.write_count(self.parents.len())?;
        for parent in self.parents.iter() {
            cursor.write_u16(parent.network_address.into())?;
            cursor.write_u8(parent.link_quality)?;
        }
        Ok(())
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>, length: usize) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let current_parent = NetworkAddress::new(cursor.read_u16()?);
        let current_parent_link_quality = cursor.read_u8()?;
        let count = cursor.read_u8()? as usize;
        check_length(4 + count * 3, length)?;
        let mut parents = Vec::with_capacity(count);
        for _ in 0..count {
            let network_address = NetworkAddress::new(cursor.read_u16()?);
            let link_quality = cursor.read_u8()?;
            parents.push(PotentialParent {
                network_address,
                link_quality,
            });
        }
        Ok(Self {
            current_parent,
            current_parent_link_quality,
            parents,
        })
    }
}

/// Authentication level of a device
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeviceAuthenticationLevel {
    /// Device the level applies to
    pub remote_node: ExtendedAddress,
    /// How the device joined the network
    pub initial_join_method: u8,
    /// Type of the link key in use
    pub active_link_key_type: u8,
}

impl PackTlv for DeviceAuthenticationLevel {
    const MINIMUM_LENGTH: usize = EXTENDED_ADDRESS_SIZE + 2;

    fn packed_len(&self) -> usize {
        Self::MINIMUM_LENGTH
    }

    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_address(self.remote_node)?;
        cursor.write_u8(self.initial_join_method)?;
        cursor.write_u8(self.active_link_key_type)
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>, _length: usize) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let remote_node = cursor.read_address()?;
        let initial_join_method = cursor.read_u8()?;
        let active_link_key_type = cursor.read_u8()?;
        Ok(Self {
            remote_node,
            initial_join_method,
            active_link_key_type,
        })
    }
}

/// Processing status of one TLV in a set configuration request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TlvProcessingStatus {
    /// Tag identifier of the processed TLV
    pub tag_id: u8,
    /// Outcome of processing it
    pub status: Status,
}

/// Processing status of the TLVs in a set configuration request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessingStatus {
    /// One entry per processed TLV
    pub statuses: Vec<TlvProcessingStatus>,
}

impl PackTlv for ProcessingStatus {
    const MINIMUM_LENGTH: usize = 1;

    fn packed_len(&self) -> usize {
        1 + self.statuses.len() * 2
    }

    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_count(self.statuses.len())?;
        for entry in self.statuses.iter() {
            cursor.write_u8(entry.tag_id)?;
            cursor.write_u8(entry.status.into())?;
        }
        Ok(())
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>, length: usize) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let count = cursor.read_u8()? as usize;
        check_length(1 + count * 2, length)?;
        let mut statuses = Vec::with_capacity(count);
        for _ in 0..count {
            let tag_id = cursor.read_u8()?;
            let status = Status::from(cursor.read_u8()?);
            statuses.push(TlvProcessingStatus { tag_id, status });
        }
        Ok(Self { statuses })
    }
}

/// Answer to an APS frame counter challenge
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApsFrameCounterResponse {
    /// Device answering the challenge
    pub responder: ExtendedAddress,
    /// The challenge as received
    pub challenge: [u8; CHALLENGE_SIZE],
    /// Outgoing APS frame counter of the responder
    pub frame_counter: u32,
    /// Security frame counter of the challenge frame
    pub challenge_frame_counter: u32,
    /// Message integrity code
    pub mic: [u8; MIC_SIZE],
}

impl PackTlv for ApsFrameCounterResponse {
    const MINIMUM_LENGTH: usize = EXTENDED_ADDRESS_SIZE + CHALLENGE_SIZE + 8 + MIC_SIZE;

    fn packed_len(&self) -> usize {
        Self::MINIMUM_LENGTH
    }

    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_address(self.responder)?;
        cursor.write_bytes(&self.challenge, CHALLENGE_SIZE)?;
        cursor.write_u32(self.frame_counter)?;
        cursor.write_u32(self.challenge_frame_counter)?;
        cursor.write_bytes(&self.mic, MIC_SIZE)
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>, _length: usize) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        Ok(Self {
            responder: cursor.read_address()?,
            challenge: cursor.read_array()?,
            frame_counter: cursor.read_u32()?,
            challenge_frame_counter: cursor.read_u32()?,
            mic: cursor.read_array()?,
        })
    }
}
