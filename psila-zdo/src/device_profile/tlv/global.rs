//! Global TLV values, tags 64 and up
//!
//! Global tags have the same meaning in every message they appear in.

use byteorder::ByteOrder;

use crate::common::address::{ExtendedAddress, NetworkAddress, PanIdentifier};
use crate::cursor::Cursor;
use crate::device_profile::tlv::{read_tlvs, write_tlvs, Tlv, TLV_HEADER_SIZE};
use crate::pack::PackTlv;
use crate::Error;

/// Symmetric passphrase size
pub const PASSPHRASE_SIZE: usize = 16;

bitflags! {
    /// Key negotiation protocols
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct KeyNegotiationProtocols: u8 {
        /// Zigbee 3.0 mechanism, key request
        const STATIC_KEY_REQUEST = 0x01;
        /// SPEKE using Curve25519 with hash AES-MMO-128
        const SPEKE_CURVE25519_AES_MMO_128 = 0x02;
        /// SPEKE using Curve25519 with hash SHA-256
        const SPEKE_CURVE25519_SHA_256 = 0x04;
    }
}

bitflags! {
    /// Pre-shared secrets
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PreSharedSecrets: u8 {
        const SYMMETRIC_AUTHENTICATION_TOKEN = 0x01;
        const INSTALL_CODE_KEY = 0x02;
        const PASSCODE_KEY = 0x04;
        const BASIC_ACCESS_KEY = 0x08;
        const ADMINISTRATIVE_ACCESS_KEY = 0x10;
    }
}

bitflags! {
    /// Router information bitmap
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct RouterInformationFlags: u16 {
        const HUB_CONNECTIVITY = 0x0001;
        const UPTIME = 0x0002;
        const PREFERRED_PARENT = 0x0004;
        const BATTERY_BACKUP = 0x0008;
        const ENHANCED_BEACON_REQUEST_SUPPORT = 0x0010;
        const MAC_DATA_POLL_KEEPALIVE_SUPPORT = 0x0020;
        const END_DEVICE_KEEPALIVE_SUPPORT = 0x0040;
        const POWER_NEGOTIATION_SUPPORT = 0x0080;
    }
}

bitflags! {
    /// Configuration parameters
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ConfigurationFlags: u16 {
        /// apsZdoRestrictedMode
        const RESTRICTED_MODE = 0x0001;
        /// requireLinkKeyEncryptionForApsTransportKey
        const REQUIRE_LINK_KEY_ENCRYPTION = 0x0002;
        /// nwkLeaveRequestAllowed
        const LEAVE_REQUEST_ALLOWED = 0x0004;
    }
}

/// Manufacturer specific data
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManufacturerSpecific {
    /// Manufacturer code
    pub manufacturer: u16,
    /// Manufacturer defined bytes
    pub data: Vec<u8>,
}

impl PackTlv for ManufacturerSpecific {
    const MINIMUM_LENGTH: usize = 2;

    fn packed_len(&self) -> usize {
        2 + self.data.len()
    }

    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_u16(self.manufacturer)?;
        cursor.write_bytes(&self.data, self.data.len())
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>, length: usize) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let manufacturer = cursor.read_u16()?;
        let data = cursor.read_list_u8(length - 2)?;
        Ok(Self { manufacturer, data })
    }
}

/// Supported key negotiation methods
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SupportedKeyNegotiationMethods {
    /// Supported key negotiation protocols
    pub protocols: KeyNegotiationProtocols,
    /// Supported pre-shared secrets
    pub secrets: PreSharedSecrets,
    /// Source device, absent for the local device
    pub source: Option<ExtendedAddress>,
}

impl PackTlv for SupportedKeyNegotiationMethods {
    const MINIMUM_LENGTH: usize = 2;

    fn packed_len(&self) -> usize {
        if self.source.is_some() {
            10
        } else {
            2
        }
    }

    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_u8(self.protocols.bits())?;
        cursor.write_u8(self.secrets.bits())?;
        if let Some(source) = self.source {
            cursor.write_address(source)?;
        }
        Ok(())
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>, length: usize) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let protocols = KeyNegotiationProtocols::from_bits_retain(cursor.read_u8()?);
        let secrets = PreSharedSecrets::from_bits_retain(cursor.read_u8()?);
        let source = if length >= 10 {
            Some(cursor.read_address()?)
        } else {
            None
        };
        Ok(Self {
            protocols,
            secrets,
            source,
        })
    }
}

/// PAN identifier conflict report
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanIdConflictReport {
    /// nwkPanIdConflictCount
    pub conflict_count: u16,
}

impl PackTlv for PanIdConflictReport {
    const MINIMUM_LENGTH: usize = 2;

    fn packed_len(&self) -> usize {
        2
    }

    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_u16(self.conflict_count)
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>, _length: usize) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        Ok(Self {
            conflict_count: cursor.read_u16()?,
        })
    }
}

/// PAN identifier to use after the next change
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NextPanIdChange {
    /// New PAN identifier
    pub pan_identifier: PanIdentifier,
}

impl PackTlv for NextPanIdChange {
    const MINIMUM_LENGTH: usize = 2;

    fn packed_len(&self) -> usize {
        2
    }

    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_u16(self.pan_identifier.into())
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>, _length: usize) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        Ok(Self {
            pan_identifier: PanIdentifier::new(cursor.read_u16()?),
        })
    }
}

/// Channel to use after the next change, page and channel bitmap
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NextChannelChange {
    /// Page in bits 27 to 31, channel bitmap in bits 0 to 26
    pub channel: u32,
}

impl PackTlv for NextChannelChange {
    const MINIMUM_LENGTH: usize = 4;

    fn packed_len(&self) -> usize {
        4
    }

    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_u32(self.channel)
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>, _length: usize) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        Ok(Self {
            channel: cursor.read_u32()?,
        })
    }
}

/// Symmetric passphrase
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SymmetricPassphrase {
    /// Passphrase bytes
    pub passphrase: [u8; PASSPHRASE_SIZE],
}

impl PackTlv for SymmetricPassphrase {
    const MINIMUM_LENGTH: usize = PASSPHRASE_SIZE;

    fn packed_len(&self) -> usize {
        PASSPHRASE_SIZE
    }

    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_bytes(&self.passphrase, PASSPHRASE_SIZE)
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>, _length: usize) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        Ok(Self {
            passphrase: cursor.read_array()?,
        })
    }
}

/// Router information
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouterInformation {
    /// Router capabilities
    pub flags: RouterInformationFlags,
}

impl PackTlv for RouterInformation {
    const MINIMUM_LENGTH: usize = 2;

    fn packed_len(&self) -> usize {
        2
    }

    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_u16(self.flags.bits())
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>, _length: usize) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        Ok(Self {
            flags: RouterInformationFlags::from_bits_retain(cursor.read_u16()?),
        })
    }
}

/// Fragmentation parameters
///
/// The value is 2, 3 or 5 bytes long depending on which optional fields are
/// present. A maximum incoming transfer unit without options is written with
/// options set to zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FragmentationParameters {
    /// Node the parameters apply to
    pub network_address: NetworkAddress,
    /// Fragmentation options
    pub options: Option<u8>,
    /// Largest transfer unit the node accepts
    pub max_incoming_transfer_unit: Option<u16>,
}

impl FragmentationParameters {
    /// Parameters with only the node identifier
    pub fn new(network_address: NetworkAddress) -> Self {
        Self {
            network_address,
            options: None,
            max_incoming_transfer_unit: None,
        }
    }
}

impl PackTlv for FragmentationParameters {
    const MINIMUM_LENGTH: usize = 2;

    fn packed_len(&self) -> usize {
        match (self.options, self.max_incoming_transfer_unit) {
            (_, Some(_)) => 5,
            (Some(_), None) => 3,
            (None, None) => 2,
        }
    }

    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_u16(self.network_address.into())?;
        if self.options.is_some() || self.max_incoming_transfer_unit.is_some() {
            cursor.write_u8(self.options.unwrap_or(0))?;
        }
        if let Some(unit) = self.max_incoming_transfer_unit {
            cursor.write_u16(unit)?;
        }
        Ok(())
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>, length: usize) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let network_address = NetworkAddress::new(cursor.read_u16()?);
        let options = if length >= 3 {
            Some(cursor.read_u8()?)
        } else {
            None
        };
        let max_incoming_transfer_unit = if length >= 5 {
            Some(cursor.read_u16()?)
        } else {
            None
        };
        Ok(Self {
            network_address,
            options,
            max_incoming_transfer_unit,
        })
    }
}

/// TLVs carried inside a joiner or beacon appendix encapsulation
///
/// The inner stream may not hold another encapsulation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Encapsulation {
    /// Inner TLVs
    pub tlvs: Vec<Tlv>,
}

impl PackTlv for Encapsulation {
    const MINIMUM_LENGTH: usize = TLV_HEADER_SIZE;

    fn packed_len(&self) -> usize {
        self.tlvs
            .iter()
            .map(|tlv| TLV_HEADER_SIZE + tlv.value.packed_len())
            .sum()
    }

    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        write_tlvs(cursor, &self.tlvs)
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>, length: usize) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        if !cursor.has_at_least(length) {
            return Err(Error::WrongNumberOfBytes);
        }
        let start = cursor.position();
        let tlvs = {
            let data = &cursor.get_ref().as_ref()[start..start + length];
            let mut inner = Cursor::<&[u8], B>::new(data, 0);
            read_tlvs(&mut inner, None, true)?
        };
        cursor.set_position(start + length);
        Ok(Self { tlvs })
    }
}

/// Configuration parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfigurationParameters {
    /// Configuration flags
    pub flags: ConfigurationFlags,
}

impl PackTlv for ConfigurationParameters {
    const MINIMUM_LENGTH: usize = 2;

    fn packed_len(&self) -> usize {
        2
    }

    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_u16(self.flags.bits())
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>, _length: usize) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        Ok(Self {
            flags: ConfigurationFlags::from_bits_retain(cursor.read_u16()?),
        })
    }
}

/// Device capability extension
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceCapabilityExtension {
    /// Capability extension bytes
    pub data: Vec<u8>,
}

impl PackTlv for DeviceCapabilityExtension {
    const MINIMUM_LENGTH: usize = 2;

    fn packed_len(&self) -> usize {
        self.data.len()
    }

    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_bytes(&self.data, self.data.len())
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>, length: usize) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        Ok(Self {
            data: cursor.read_list_u8(length)?,
        })
    }
}
