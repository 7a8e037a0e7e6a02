//! Security requests carrying more than a single local TLV, and the local
//! TLV tables of the security responses

use byteorder::ByteOrder;

use crate::cursor::Cursor;
use crate::device_profile::tlv::{
    read_tlvs, write_global, write_local, ConfigurationParameters, FragmentationParameters,
    GlobalTag, LocalTlvKind, LocalTlvReaders, NextChannelChange, NextPanIdChange,
    SelectedKeyNegotiationMethod, TlvValue,
};
use crate::pack::Pack;
use crate::Error;

/// Local TLVs of the start key negotiation response
pub const START_KEY_NEGOTIATION_TLVS: &LocalTlvReaders =
    &[(0x00, LocalTlvKind::Curve25519PublicPoint)];
/// Local TLVs of the get authentication level response
pub const GET_AUTHENTICATION_LEVEL_TLVS: &LocalTlvReaders =
    &[(0x00, LocalTlvKind::DeviceAuthenticationLevel)];
/// Local TLVs of the set configuration response
pub const SET_CONFIGURATION_TLVS: &LocalTlvReaders = &[(0x00, LocalTlvKind::ProcessingStatus)];
/// Local TLVs of the challenge response
pub const CHALLENGE_TLVS: &LocalTlvReaders = &[(0x00, LocalTlvKind::ApsFrameCounterResponse)];

const START_KEY_UPDATE_TLVS: &LocalTlvReaders =
    &[(0x00, LocalTlvKind::SelectedKeyNegotiationMethod)];

// 2.4.3.4.4 Security_Set_Configuration_req
/// Set configuration request
///
/// All three global TLVs are required.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SecuritySetConfigurationRequest {
    /// PAN identifier to move to
    pub next_pan_id: NextPanIdChange,
    /// Channel to move to
    pub next_channel: NextChannelChange,
    /// Security configuration flags
    pub configuration: ConfigurationParameters,
}

impl Pack for SecuritySetConfigurationRequest {
    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        write_global(cursor, GlobalTag::NextPanIdChange, &self.next_pan_id)?;
        write_global(cursor, GlobalTag::NextChannelChange, &self.next_channel)?;
        write_global(cursor, GlobalTag::ConfigurationParameters, &self.configuration)
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let mut next_pan_id = None;
        let mut next_channel = None;
        let mut configuration = None;
        for tlv in read_tlvs(cursor, None, false)? {
            match tlv.value {
                TlvValue::NextPanIdChange(value) => next_pan_id = Some(value),
                TlvValue::NextChannelChange(value) => next_channel = Some(value),
                TlvValue::ConfigurationParameters(value) => configuration = Some(value),
                _ => (),
            }
        }
        Ok(Self {
            next_pan_id: next_pan_id
                .ok_or_else(|| Error::MissingTlv(GlobalTag::NextPanIdChange.into()))?,
            next_channel: next_channel
                .ok_or_else(|| Error::MissingTlv(GlobalTag::NextChannelChange.into()))?,
            configuration: configuration
                .ok_or_else(|| Error::MissingTlv(GlobalTag::ConfigurationParameters.into()))?,
        })
    }
}

// 2.4.3.4.6 Security_Start_Key_Update_req
/// Start key update request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SecurityStartKeyUpdateRequest {
    /// Key negotiation method to use
    pub method: SelectedKeyNegotiationMethod,
    /// Fragmentation parameters of the requesting node
    pub fragmentation: FragmentationParameters,
}

impl Pack for SecurityStartKeyUpdateRequest {
    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        write_local(cursor, 0x00, &self.method)?;
        write_global(cursor, GlobalTag::FragmentationParameters, &self.fragmentation)
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let mut method = None;
        let mut fragmentation = None;
        for tlv in read_tlvs(cursor, Some(START_KEY_UPDATE_TLVS), false)? {
            match tlv.value {
                TlvValue::SelectedKeyNegotiationMethod(value) => method = Some(value),
                TlvValue::FragmentationParameters(value) => fragmentation = Some(value),
                _ => (),
            }
        }
        Ok(Self {
            method: method.ok_or(Error::MissingTlv(0x00))?,
            fragmentation: fragmentation
                .ok_or_else(|| Error::MissingTlv(GlobalTag::FragmentationParameters.into()))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::address::{ExtendedAddress, NetworkAddress, PanIdentifier};
    use crate::device_profile::tlv::ConfigurationFlags;
    use byteorder::{BigEndian, LittleEndian};

    fn set_configuration() -> SecuritySetConfigurationRequest {
        SecuritySetConfigurationRequest {
            next_pan_id: NextPanIdChange {
                pan_identifier: PanIdentifier::new(0x1a62),
            },
            next_channel: NextChannelChange {
                channel: 0x0000_0800,
            },
            configuration: ConfigurationParameters {
                flags: ConfigurationFlags::LEAVE_REQUEST_ALLOWED,
            },
        }
    }

    #[test]
    fn pack_set_configuration() {
        let request = set_configuration();
        let mut cursor = Cursor::<_, LittleEndian>::new([0u8; 32], 0);
        request.pack(&mut cursor).unwrap();
        assert_eq!(
            cursor.written(),
            [
                0x43, 0x01, 0x62, 0x1a, 0x44, 0x03, 0x00, 0x08, 0x00, 0x00, 0x4b, 0x01, 0x04,
                0x00
            ]
        );
        let data = cursor.written().to_vec();
        let mut cursor = Cursor::<_, LittleEndian>::new(&data[..], 0);
        assert_eq!(
            SecuritySetConfigurationRequest::unpack(&mut cursor).unwrap(),
            request
        );
    }

    #[test]
    fn set_configuration_missing_tlv() {
        let data = [0x43, 0x01, 0x62, 0x1a, 0x4b, 0x01, 0x04, 0x00];
        let mut cursor = Cursor::<_, LittleEndian>::new(&data[..], 0);
        assert_eq!(
            SecuritySetConfigurationRequest::unpack(&mut cursor),
            Err(Error::MissingTlv(0x44))
        );
    }

    #[test]
    fn start_key_update() {
        let request = SecurityStartKeyUpdateRequest {
            method: SelectedKeyNegotiationMethod {
                protocol: 0x02,
                secret: 0x01,
                device: ExtendedAddress::new(0x0011_2233_4455_6677),
            },
            fragmentation: FragmentationParameters {
                network_address: NetworkAddress::new(0x0000),
                options: Some(0x01),
                max_incoming_transfer_unit: Some(0x0052),
            },
        };
        let mut cursor = Cursor::<_, BigEndian>::new([0u8; 32], 0);
        request.pack(&mut cursor).unwrap();
        assert_eq!(
            cursor.written(),
            [
                0x00, 0x09, 0x02, 0x01, 0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x47,
                0x04, 0x00, 0x00, 0x01, 0x00, 0x52
            ]
        );
        let data = cursor.written().to_vec();
        let mut cursor = Cursor::<_, BigEndian>::new(&data[..], 0);
        assert_eq!(
            SecurityStartKeyUpdateRequest::unpack(&mut cursor).unwrap(),
            request
        );
    }

    #[test]
    fn start_key_update_missing_method() {
        let data = [0x47, 0x01, 0x00, 0x00];
        let mut cursor = Cursor::<_, LittleEndian>::new(&data[..], 0);
        assert_eq!(
            SecurityStartKeyUpdateRequest::unpack(&mut cursor),
            Err(Error::MissingTlv(0x00))
        );
    }
}
