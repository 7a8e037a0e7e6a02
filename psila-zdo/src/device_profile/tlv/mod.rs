//! # Type-length-value (TLV) records
//!
//! A TLV stream is a run of records filling a byte range, there is no
//! terminator. Each record is a tag byte, a length byte holding the value
//! length minus one and the value.
//!
//! Tags below 64 are local, their meaning is given by the enclosing message
//! through a [`LocalTlvReaders`] table. Tags from 64 and up are global.

mod global;
mod local;

pub use global::{
    ConfigurationFlags, ConfigurationParameters, DeviceCapabilityExtension, Encapsulation,
    FragmentationParameters, KeyNegotiationProtocols, ManufacturerSpecific, NextChannelChange,
    NextPanIdChange, PanIdConflictReport, PreSharedSecrets, RouterInformation,
    RouterInformationFlags, SupportedKeyNegotiationMethods, SymmetricPassphrase,
    PASSPHRASE_SIZE,
};
pub use local::{
    ApsFrameCounterChallenge, ApsFrameCounterResponse, AuthenticationTokenId,
    BeaconSurveyConfiguration, BeaconSurveyResults, Curve25519PublicPoint,
    DeviceAuthenticationLevel, Eui64List, PotentialParent, PotentialParents, ProcessingStatus,
    SelectedKeyNegotiationMethod, TargetIeeeAddress, TlvIdList, TlvProcessingStatus,
    CHALLENGE_SIZE, MIC_SIZE, PUBLIC_POINT_SIZE,
};

use core::convert::TryFrom;

use byteorder::ByteOrder;

use crate::cursor::Cursor;
use crate::pack::PackTlv;
use crate::Error;

/// Size of the tag and length header
pub const TLV_HEADER_SIZE: usize = 2;
/// Largest value length, the length byte holds the length minus one
pub const TLV_MAX_LENGTH: usize = 256;
/// Lowest global tag identifier
pub const GLOBAL_TAG_MIN: u8 = 64;

extended_enum!(
    /// Global TLV tags
    GlobalTag, u8,
    ManufacturerSpecific => 64,
    SupportedKeyNegotiationMethods => 65,
    PanIdConflictReport => 66,
    NextPanIdChange => 67,
    NextChannelChange => 68,
    SymmetricPassphrase => 69,
    RouterInformation => 70,
    FragmentationParameters => 71,
    JoinerEncapsulation => 72,
    BeaconAppendixEncapsulation => 73,
    ConfigurationParameters => 75,
    DeviceCapabilityExtension => 76,
);

impl GlobalTag {
    /// The tag may occur more than once in a stream
    pub fn is_repeatable(self) -> bool {
        self == GlobalTag::ManufacturerSpecific
    }

    /// The value is a nested TLV stream
    pub fn is_encapsulation(self) -> bool {
        matches!(
            self,
            GlobalTag::JoinerEncapsulation | GlobalTag::BeaconAppendixEncapsulation
        )
    }
}

/// The tag identifier is in the local range
pub fn is_local_tag(tag_id: u8) -> bool {
    tag_id < GLOBAL_TAG_MIN
}

macro_rules! tlv_values {
    (@tag $tag:ident) => { Some(GlobalTag::$tag) };
    (@tag) => { None };
    ($($(#[$doc:meta])* $variant:ident($shape:ty) $(=> $tag:ident)?),+ $(,)?) => {
        /// TLV value, the shape is given by the tag
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub enum TlvValue {
            $(
                $(#[$doc])*
                $variant($shape),
            )+
        }

        impl TlvValue {
            /// The global tag of the value, `None` for local values
            pub fn global_tag(&self) -> Option<GlobalTag> {
                match self {
                    $( TlvValue::$variant(_) => tlv_values!(@tag $($tag)?), )+
                }
            }

            /// Number of bytes the value occupies
            pub fn packed_len(&self) -> usize {
                match self {
                    $( TlvValue::$variant(v) => v.packed_len(), )+
                }
            }

            /// Serialise the value, without header
            pub fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
            where
                T: AsRef<[u8]> + AsMut<[u8]>,
                B: ByteOrder,
            {
                match self {
                    $( TlvValue::$variant(v) => v.pack(cursor), )+
                }
            }
        }
    };
}

tlv_values!(
    ManufacturerSpecific(ManufacturerSpecific) => ManufacturerSpecific,
    SupportedKeyNegotiationMethods(SupportedKeyNegotiationMethods) => SupportedKeyNegotiationMethods,
    PanIdConflictReport(PanIdConflictReport) => PanIdConflictReport,
    NextPanIdChange(NextPanIdChange) => NextPanIdChange,
    NextChannelChange(NextChannelChange) => NextChannelChange,
    SymmetricPassphrase(SymmetricPassphrase) => SymmetricPassphrase,
    RouterInformation(RouterInformation) => RouterInformation,
    FragmentationParameters(FragmentationParameters) => FragmentationParameters,
    /// Joiner encapsulation, nested stream
    JoinerEncapsulation(Encapsulation) => JoinerEncapsulation,
    /// Beacon appendix encapsulation, nested stream
    BeaconAppendixEncapsulation(Encapsulation) => BeaconAppendixEncapsulation,
    ConfigurationParameters(ConfigurationParameters) => ConfigurationParameters,
    DeviceCapabilityExtension(DeviceCapabilityExtension) => DeviceCapabilityExtension,
    Eui64List(Eui64List),
    BeaconSurveyConfiguration(BeaconSurveyConfiguration),
    Curve25519PublicPoint(Curve25519PublicPoint),
    AuthenticationTokenId(AuthenticationTokenId),
    TargetIeeeAddress(TargetIeeeAddress),
    SelectedKeyNegotiationMethod(SelectedKeyNegotiationMethod),
    ApsFrameCounterChallenge(ApsFrameCounterChallenge),
    TlvIdList(TlvIdList),
    BeaconSurveyResults(BeaconSurveyResults),
    PotentialParents(PotentialParents),
    DeviceAuthenticationLevel(DeviceAuthenticationLevel),
    ProcessingStatus(ProcessingStatus),
    ApsFrameCounterResponse(ApsFrameCounterResponse),
);

/// Local value shapes a message can name in its reader table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocalTlvKind {
    Eui64List,
    BeaconSurveyConfiguration,
    Curve25519PublicPoint,
    AuthenticationTokenId,
    TargetIeeeAddress,
    SelectedKeyNegotiationMethod,
    ApsFrameCounterChallenge,
    TlvIdList,
    BeaconSurveyResults,
    PotentialParents,
    DeviceAuthenticationLevel,
    ProcessingStatus,
    ApsFrameCounterResponse,
}

impl LocalTlvKind {
    fn read<T, B>(self, tag_id: u8, cursor: &mut Cursor<T, B>, length: usize) -> Result<TlvValue, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let value = match self {
            LocalTlvKind::Eui64List => TlvValue::Eui64List(unpack_value(tag_id, cursor, length)?),
            LocalTlvKind::BeaconSurveyConfiguration => {
                TlvValue::BeaconSurveyConfiguration(unpack_value(tag_id, cursor, length)?)
            }
            LocalTlvKind::Curve25519PublicPoint => {
                TlvValue::Curve25519PublicPoint(unpack_value(tag_id, cursor, length)?)
            }
            LocalTlvKind::AuthenticationTokenId => {
                TlvValue::AuthenticationTokenId(unpack_value(tag_id, cursor, length)?)
            }
            LocalTlvKind::TargetIeeeAddress => {
                TlvValue::TargetIeeeAddress(unpack_value(tag_id, cursor, length)?)
            }
            LocalTlvKind::SelectedKeyNegotiationMethod => {
                TlvValue::SelectedKeyNegotiationMethod(unpack_value(tag_id, cursor, length)?)
            }
            LocalTlvKind::ApsFrameCounterChallenge => {
                TlvValue::ApsFrameCounterChallenge(unpack_value(tag_id, cursor, length)?)
            }
            LocalTlvKind::TlvIdList => TlvValue::TlvIdList(unpack_value(tag_id, cursor, length)?),
            LocalTlvKind::BeaconSurveyResults => {
                TlvValue::BeaconSurveyResults(unpack_value(tag_id, cursor, length)?)
            }
            LocalTlvKind::PotentialParents => {
                TlvValue::PotentialParents(unpack_value(tag_id, cursor, length)?)
            }
            LocalTlvKind::DeviceAuthenticationLevel => {
                TlvValue::DeviceAuthenticationLevel(unpack_value(tag_id, cursor, length)?)
            }
            LocalTlvKind::ProcessingStatus => {
                TlvValue::ProcessingStatus(unpack_value(tag_id, cursor, length)?)
            }
            LocalTlvKind::ApsFrameCounterResponse => {
                TlvValue::ApsFrameCounterResponse(unpack_value(tag_id, cursor, length)?)
            }
        };
        Ok(value)
    }
}

/// Local tag to value shape table of a message
pub type LocalTlvReaders = [(u8, LocalTlvKind)];

/// One TLV record
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tlv {
    /// Tag identifier
    pub tag_id: u8,
    /// Value length, 1 to 256
    pub length: usize,
    /// Decoded value
    pub value: TlvValue,
}

impl Tlv {
    /// Record for `value` under `tag_id`
    pub fn new(tag_id: u8, value: TlvValue) -> Self {
        let length = value.packed_len();
        Self {
            tag_id,
            length,
            value,
        }
    }

    /// Record for a global value under its own tag
    pub fn global(value: TlvValue) -> Result<Self, Error> {
        let tag = value.global_tag().ok_or(Error::InvalidValue)?;
        Ok(Self::new(tag.into(), value))
    }

    /// The tag is a global tag
    pub fn is_global(&self) -> bool {
        !is_local_tag(self.tag_id)
    }
}

fn unpack_value<V, T, B>(tag_id: u8, cursor: &mut Cursor<T, B>, length: usize) -> Result<V, Error>
where
    V: PackTlv,
    T: AsRef<[u8]>,
    B: ByteOrder,
{
    if length < V::MINIMUM_LENGTH {
        return Err(Error::InvalidTlvLength {
            tag_id,
            length,
            minimum: V::MINIMUM_LENGTH,
        });
    }
    V::unpack(cursor, length)
}

fn read_global<T, B>(tag: GlobalTag, cursor: &mut Cursor<T, B>, length: usize) -> Result<TlvValue, Error>
where
    T: AsRef<[u8]>,
    B: ByteOrder,
{
    let tag_id = u8::from(tag);
    let value = match tag {
        GlobalTag::ManufacturerSpecific => {
            TlvValue::ManufacturerSpecific(unpack_value(tag_id, cursor, length)?)
        }
        GlobalTag::SupportedKeyNegotiationMethods => {
            TlvValue::SupportedKeyNegotiationMethods(unpack_value(tag_id, cursor, length)?)
        }
        GlobalTag::PanIdConflictReport => {
            TlvValue::PanIdConflictReport(unpack_value(tag_id, cursor, length)?)
        }
        GlobalTag::NextPanIdChange => {
            TlvValue::NextPanIdChange(unpack_value(tag_id, cursor, length)?)
        }
        GlobalTag::NextChannelChange => {
            TlvValue::NextChannelChange(unpack_value(tag_id, cursor, length)?)
        }
        GlobalTag::SymmetricPassphrase => {
            TlvValue::SymmetricPassphrase(unpack_value(tag_id, cursor, length)?)
        }
        GlobalTag::RouterInformation => {
            TlvValue::RouterInformation(unpack_value(tag_id, cursor, length)?)
        }
        GlobalTag::FragmentationParameters => {
            TlvValue::FragmentationParameters(unpack_value(tag_id, cursor, length)?)
        }
        GlobalTag::JoinerEncapsulation => {
            TlvValue::JoinerEncapsulation(unpack_value(tag_id, cursor, length)?)
        }
        GlobalTag::BeaconAppendixEncapsulation => {
            TlvValue::BeaconAppendixEncapsulation(unpack_value(tag_id, cursor, length)?)
        }
        GlobalTag::ConfigurationParameters => {
            TlvValue::ConfigurationParameters(unpack_value(tag_id, cursor, length)?)
        }
        GlobalTag::DeviceCapabilityExtension => {
            TlvValue::DeviceCapabilityExtension(unpack_value(tag_id, cursor, length)?)
        }
    };
    Ok(value)
}

/// Read TLV records until the cursor is exhausted
///
/// Local tags are looked up in `local`, tags without a reader are skipped.
/// Unknown global tags are skipped as well. After each record the cursor is
/// placed at the end given by the record length, whatever the value reader
/// consumed.
pub fn read_tlvs<T, B>(
    cursor: &mut Cursor<T, B>,
    local: Option<&LocalTlvReaders>,
    encapsulated: bool,
) -> Result<Vec<Tlv>, Error>
where
    T: AsRef<[u8]>,
    B: ByteOrder,
{
    let mut seen = [false; 256];
    let mut tlvs = Vec::new();
    while cursor.is_more() {
        let tag_id = cursor.read_u8()?;
        let global = GlobalTag::try_from(tag_id).ok();
        let repeatable = global.map_or(false, GlobalTag::is_repeatable);
        if seen[tag_id as usize] && !repeatable {
            return Err(Error::DuplicateTag(tag_id));
        }
        seen[tag_id as usize] = true;
        if encapsulated && global.map_or(false, GlobalTag::is_encapsulation) {
            return Err(Error::NestedEncapsulation(tag_id));
        }
        let length = cursor.read_u8()? as usize + 1;
        if !cursor.has_at_least(length) {
            return Err(Error::TruncatedTlv { tag_id, length });
        }
        let start = cursor.position();
        let end = start + length;
        let value = {
            let data = &cursor.get_ref().as_ref()[start..end];
            let mut value_cursor = Cursor::<&[u8], B>::new(data, 0);
            if is_local_tag(tag_id) {
                let kind = local.and_then(|readers| {
                    readers
                        .iter()
                        .find(|(id, _)| *id == tag_id)
                        .map(|(_, kind)| *kind)
                });
                match kind {
                    Some(kind) => Some(kind.read(tag_id, &mut value_cursor, length)?),
                    None => {
                        log::debug!("Skipping local TLV, tag {} length {}", tag_id, length);
                        None
                    }
                }
            } else {
                match global {
                    Some(tag) => Some(read_global(tag, &mut value_cursor, length)?),
                    None => {
                        log::debug!("Skipping global TLV, tag {} length {}", tag_id, length);
                        None
                    }
                }
            }
        };
        cursor.set_position(end);
        if let Some(value) = value {
            tlvs.push(Tlv {
                tag_id,
                length,
                value,
            });
        }
    }
    Ok(tlvs)
}

fn write_header<T, B>(cursor: &mut Cursor<T, B>, tag_id: u8, length: usize) -> Result<(), Error>
where
    T: AsRef<[u8]> + AsMut<[u8]>,
    B: ByteOrder,
{
    if length == 0 || length > TLV_MAX_LENGTH {
        return Err(Error::InvalidTlvLength {
            tag_id,
            length,
            minimum: 1,
        });
    }
    cursor.write_u8(tag_id)?;
    cursor.write_u8((length - 1) as u8)
}

/// Write one TLV record
///
/// A global value must be written under its own tag, a local value under a
/// local tag.
pub fn write_tlv<T, B>(cursor: &mut Cursor<T, B>, tlv: &Tlv) -> Result<(), Error>
where
    T: AsRef<[u8]> + AsMut<[u8]>,
    B: ByteOrder,
{
    let valid = match tlv.value.global_tag() {
        Some(tag) => tlv.tag_id == u8::from(tag),
        None => is_local_tag(tlv.tag_id),
    };
    if !valid {
        return Err(Error::InvalidValue);
    }
    write_header(cursor, tlv.tag_id, tlv.value.packed_len())?;
    tlv.value.pack(cursor)
}

/// Write TLV records in order
pub fn write_tlvs<T, B>(cursor: &mut Cursor<T, B>, tlvs: &[Tlv]) -> Result<(), Error>
where
    T: AsRef<[u8]> + AsMut<[u8]>,
    B: ByteOrder,
{
    tlvs.iter().try_for_each(|tlv| write_tlv(cursor, tlv))
}

/// Write one global value under `tag`
pub fn write_global<V, T, B>(cursor: &mut Cursor<T, B>, tag: GlobalTag, value: &V) -> Result<(), Error>
where
    V: PackTlv,
    T: AsRef<[u8]> + AsMut<[u8]>,
    B: ByteOrder,
{
    write_header(cursor, tag.into(), value.packed_len())?;
    value.pack(cursor)
}

/// Write one local value under `tag_id`
pub fn write_local<V, T, B>(cursor: &mut Cursor<T, B>, tag_id: u8, value: &V) -> Result<(), Error>
where
    V: PackTlv,
    T: AsRef<[u8]> + AsMut<[u8]>,
    B: ByteOrder,
{
    if !is_local_tag(tag_id) {
        return Err(Error::InvalidValue);
    }
    write_header(cursor, tag_id, value.packed_len())?;
    value.pack(cursor)
}

/// Read one record that must carry `tag_id` and a value of shape `V`
///
/// Used for messages with a fixed record layout, such as requests carrying a
/// single local TLV.
pub fn read_expected<V, T, B>(cursor: &mut Cursor<T, B>, tag_id: u8) -> Result<V, Error>
where
    V: PackTlv,
    T: AsRef<[u8]>,
    B: ByteOrder,
{
    if !cursor.is_more() {
        return Err(Error::MissingTlv(tag_id));
    }
    let found = cursor.read_u8()?;
    if found != tag_id {
        return Err(Error::MissingTlv(tag_id));
    }
    let length = cursor.read_u8()? as usize + 1;
    if !cursor.has_at_least(length) {
        return Err(Error::TruncatedTlv { tag_id, length });
    }
    let start = cursor.position();
    let value = {
        let data = &cursor.get_ref().as_ref()[start..start + length];
        let mut value_cursor = Cursor::<&[u8], B>::new(data, 0);
        unpack_value(tag_id, &mut value_cursor, length)?
    };
    cursor.set_position(start + length);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::address::{ExtendedAddress, NetworkAddress, PanIdentifier};
    use byteorder::LittleEndian;

    const BEACON_SURVEY: &LocalTlvReaders = &[
        (0x01, LocalTlvKind::BeaconSurveyResults),
        (0x02, LocalTlvKind::PotentialParents),
    ];

    fn read(data: &[u8], local: Option<&LocalTlvReaders>) -> Result<Vec<Tlv>, Error> {
        let mut cursor = Cursor::<_, LittleEndian>::new(data, 0);
        read_tlvs(&mut cursor, local, false)
    }

    #[test]
    fn read_empty_stream() {
        assert_eq!(read(&[], None), Ok(vec![]));
    }

    #[test]
    fn read_local_with_table() {
        let data = [0x01, 0x03, 0x0a, 0x05, 0x03, 0x02];
        let tlvs = read(&data, Some(BEACON_SURVEY)).unwrap();
        assert_eq!(tlvs.len(), 1);
        assert_eq!(tlvs[0].tag_id, 0x01);
        assert_eq!(tlvs[0].length, 4);
        assert_eq!(
            tlvs[0].value,
            TlvValue::BeaconSurveyResults(BeaconSurveyResults {
                total_beacons: 0x0a,
                on_network_beacons: 0x05,
                potential_parent_beacons: 0x03,
                other_network_beacons: 0x02,
            })
        );
    }

    #[test]
    fn skip_local_without_table() {
        let data = [0x01, 0x03, 0x0a, 0x05, 0x03, 0x02, 0x42, 0x01, 0x07, 0x00];
        let tlvs = read(&data, None).unwrap();
        assert_eq!(tlvs.len(), 1);
        assert_eq!(
            tlvs[0].value,
            TlvValue::PanIdConflictReport(PanIdConflictReport { conflict_count: 7 })
        );
    }

    #[test]
    fn skip_unknown_global() {
        let data = [0x4a, 0x00, 0xff, 0x4d, 0x02, 0x01, 0x02, 0x03];
        assert_eq!(read(&data, None), Ok(vec![]));
    }

    #[test]
    fn reject_duplicate() {
        let data = [0x42, 0x01, 0x07, 0x00, 0x42, 0x01, 0x08, 0x00];
        assert_eq!(read(&data, None), Err(Error::DuplicateTag(0x42)));
        // Skipped tags count as well
        let data = [0x3f, 0x00, 0x00, 0x3f, 0x00, 0x00];
        assert_eq!(read(&data, None), Err(Error::DuplicateTag(0x3f)));
    }

    #[test]
    fn repeat_manufacturer_specific() {
        let data = [0x40, 0x02, 0x49, 0x10, 0x01, 0x40, 0x01, 0x49, 0x10];
        let tlvs = read(&data, None).unwrap();
        assert_eq!(tlvs.len(), 2);
        assert_eq!(tlvs[0].length, 3);
        assert_eq!(tlvs[1].length, 2);
    }

    #[test]
    fn reject_truncated() {
        let data = [0x42, 0x03, 0x07, 0x00];
        assert_eq!(
            read(&data, None),
            Err(Error::TruncatedTlv {
                tag_id: 0x42,
                length: 4
            })
        );
    }

    #[test]
    fn reject_short_value() {
        let data = [0x44, 0x01, 0x0b, 0x00];
        assert_eq!(
            read(&data, None),
            Err(Error::InvalidTlvLength {
                tag_id: 0x44,
                length: 2,
                minimum: 4
            })
        );
    }

    #[test]
    fn resynchronise_after_long_value() {
        // Pan identifier conflict report declares 4 bytes, the reader uses 2
        let data = [0x42, 0x03, 0x07, 0x00, 0xaa, 0xbb, 0x43, 0x01, 0x34, 0x12];
        let tlvs = read(&data, None).unwrap();
        assert_eq!(tlvs.len(), 2);
        assert_eq!(tlvs[0].length, 4);
        assert_eq!(
            tlvs[1].value,
            TlvValue::NextPanIdChange(NextPanIdChange {
                pan_identifier: PanIdentifier::new(0x1234)
            })
        );
    }

    #[test]
    fn read_encapsulation() {
        let data = [0x48, 0x03, 0x47, 0x01, 0x34, 0x12];
        let tlvs = read(&data, None).unwrap();
        let expected = Encapsulation {
            tlvs: vec![Tlv::new(
                0x47,
                TlvValue::FragmentationParameters(FragmentationParameters::new(NetworkAddress::new(0x1234))),
            )],
        };
        assert_eq!(tlvs[0].value, TlvValue::JoinerEncapsulation(expected));
    }

    #[test]
    fn reject_nested_encapsulation() {
        let data = [0x48, 0x03, 0x49, 0x01, 0x42, 0x00];
        assert_eq!(read(&data, None), Err(Error::NestedEncapsulation(0x49)));
    }

    #[test]
    fn write_and_read() {
        let tlvs = vec![
            Tlv::global(TlvValue::NextChannelChange(NextChannelChange {
                channel: 0x0000_0800,
            }))
            .unwrap(),
            Tlv::new(
                0x02,
                TlvValue::PotentialParents(PotentialParents {
                    current_parent: NetworkAddress::new(0x0000),
                    current_parent_link_quality: 0xff,
                    parents: vec![],
                }),
            ),
        ];
        let mut cursor = Cursor::<_, LittleEndian>::new([0u8; 32], 0);
        write_tlvs(&mut cursor, &tlvs).unwrap();
        assert_eq!(
            cursor.written(),
            [0x44, 0x03, 0x00, 0x08, 0x00, 0x00, 0x02, 0x03, 0x00, 0x00, 0xff, 0x00]
        );
        let data = cursor.written().to_vec();
        assert_eq!(read(&data, Some(BEACON_SURVEY)), Ok(tlvs));
    }

    #[test]
    fn write_under_wrong_tag() {
        let mut cursor = Cursor::<_, LittleEndian>::new([0u8; 32], 0);
        let tlv = Tlv::new(
            0x43,
            TlvValue::PanIdConflictReport(PanIdConflictReport { conflict_count: 1 }),
        );
        assert_eq!(write_tlv(&mut cursor, &tlv), Err(Error::InvalidValue));
        let tlv = Tlv::new(
            0x50,
            TlvValue::TargetIeeeAddress(TargetIeeeAddress {
                address: ExtendedAddress::new(0x1),
            }),
        );
        assert_eq!(write_tlv(&mut cursor, &tlv), Err(Error::InvalidValue));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn write_value_too_long() {
        let mut cursor = Cursor::<_, LittleEndian>::new([0u8; 300], 0);
        let value = ManufacturerSpecific {
            manufacturer: 0x1049,
            data: vec![0u8; 255],
        };
        assert_eq!(
            write_global(&mut cursor, GlobalTag::ManufacturerSpecific, &value),
            Err(Error::InvalidTlvLength {
                tag_id: 64,
                length: 257,
                minimum: 1
            })
        );
    }

    #[test]
    fn read_expected_record() {
        let data = [0x00, 0x00, 0x07];
        let mut cursor = Cursor::<_, LittleEndian>::new(&data[..], 0);
        let value: AuthenticationTokenId = read_expected(&mut cursor, 0).unwrap();
        assert_eq!(value.tag_id, 0x07);
        assert_eq!(cursor.position(), 3);
        let mut cursor = Cursor::<_, LittleEndian>::new(&data[..], 0);
        assert_eq!(
            read_expected::<NextPanIdChange, _, _>(&mut cursor, 67),
            Err(Error::MissingTlv(67))
        );
    }
}
