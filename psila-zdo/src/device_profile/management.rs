//! Network management requests and their responses
//!
//! Table requests (link quality, routing, binding, joining list) carry only a
//! start index and are represented directly by the request enumeration.

use byteorder::ByteOrder;

use crate::common::address::{ExtendedAddress, NetworkAddress};
use crate::cursor::Cursor;
use crate::device_profile::tlv::{read_tlvs, write_tlvs, LocalTlvKind, LocalTlvReaders, Tlv};
use crate::pack::Pack;
use crate::Error;

bitflags! {
    /// Leave request options
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct LeaveFlags: u8 {
        /// Remove the children of the device as well
        const REMOVE_CHILDREN = 0x40;
        /// Rejoin after leaving
        const REJOIN = 0x80;
    }
}

// 2.4.3.3.5 Mgmt_Leave_req
/// Leave request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManagementLeaveRequest {
    /// Device to leave, all zeros for the receiving device
    pub address: ExtendedAddress,
    /// Leave options
    pub flags: LeaveFlags,
}

impl Pack for ManagementLeaveRequest {
    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_address(self.address)?;
        cursor.write_u8(self.flags.bits())
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let address = cursor.read_address()?;
        let flags = LeaveFlags::from_bits_truncate(cursor.read_u8()?);
        Ok(Self { address, flags })
    }
}

// 2.4.3.3.7 Mgmt_Permit_Joining_req
/// Permit joining request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManagementPermitJoiningRequest {
    /// Time in seconds to permit joining, 0xff for forever
    pub duration: u8,
    /// Deprecated, set to 1
    pub trust_center_significance: u8,
    /// Global TLVs appended to the request
    pub tlvs: Vec<Tlv>,
}

impl Pack for ManagementPermitJoiningRequest {
    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_u8(self.duration)?;
        cursor.write_u8(self.trust_center_significance)?;
        write_tlvs(cursor, &self.tlvs)
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let duration = cursor.read_u8()?;
        let trust_center_significance = cursor.read_u8()?;
        let tlvs = read_tlvs(cursor, None, false)?;
        Ok(Self {
            duration,
            trust_center_significance,
            tlvs,
        })
    }
}

/// Scan duration requesting a channel change
pub const DURATION_CHANGE_CHANNEL: u8 = 0xfe;
/// Scan duration requesting a change of channel mask and network manager
pub const DURATION_CHANGE_MANAGER: u8 = 0xff;
/// Longest energy scan duration
pub const DURATION_SCAN_MAX: u8 = 0x05;

/// Scan duration and the fields it brings along
///
/// `count` is present for a scan (duration up to 5), `update_id` for a
/// channel change (0xfe) or manager change (0xff), `manager` only for a
/// manager change. Fields supplied for a duration which does not use them are
/// not written. A field the duration requires but which is missing makes
/// packing fail with `InvalidValue`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NetworkUpdateParameters {
    /// Scan duration, or 0xfe/0xff for a channel or manager change
    pub duration: u8,
    /// Number of energy scans
    pub count: Option<u8>,
    /// Network update identifier
    pub update_id: Option<u8>,
    /// New network manager
    pub manager: Option<NetworkAddress>,
}

impl NetworkUpdateParameters {
    fn has_count(&self) -> bool {
        self.duration <= DURATION_SCAN_MAX
    }

    fn has_update_id(&self) -> bool {
        self.duration == DURATION_CHANGE_CHANNEL || self.duration == DURATION_CHANGE_MANAGER
    }

    fn has_manager(&self) -> bool {
        self.duration == DURATION_CHANGE_MANAGER
    }

    /// Only the fields the duration calls for
    pub fn normalized(&self) -> Self {
        Self {
            duration: self.duration,
            count: self.count.filter(|_| self.has_count()),
            update_id: self.update_id.filter(|_| self.has_update_id()),
            manager: self.manager.filter(|_| self.has_manager()),
        }
    }
}

impl Pack for NetworkUpdateParameters {
    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_u8(self.duration)?;
        if self.has_count() {
            cursor.write_u8(self.count.ok_or(Error::InvalidValue)?)?;
        }
        if self.has_update_id() {
            cursor.write_u8(self.update_id.ok_or(Error::InvalidValue)?)?;
        }
        if self.has_manager() {
            cursor.write_short_address(self.manager.ok_or(Error::InvalidValue)?)?;
        }
        Ok(())
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let mut parameters = Self {
            duration: cursor.read_u8()?,
            ..Self::default()
        };
        if parameters.has_count() {
            parameters.count = Some(cursor.read_u8()?);
        }
        if parameters.has_update_id() {
            parameters.update_id = Some(cursor.read_u8()?);
        }
        if parameters.has_manager() {
            parameters.manager = Some(cursor.read_short_address()?);
        }
        Ok(parameters)
    }
}

// 2.4.3.3.9 Mgmt_NWK_Update_req
/// Network update request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManagementNetworkUpdateRequest {
    /// Channels to scan or change to
    pub channel_mask: u32,
    /// Duration and its fields
    pub update: NetworkUpdateParameters,
}

impl Pack for ManagementNetworkUpdateRequest {
    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_u32(self.channel_mask)?;
        self.update.pack(cursor)
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let channel_mask = cursor.read_u32()?;
        let update = NetworkUpdateParameters::unpack(cursor)?;
        Ok(Self {
            channel_mask,
            update,
        })
    }
}

// 2.4.3.3.12 Mgmt_NWK_Enhanced_Update_req
/// Enhanced network update request, channel pages instead of a single mask
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManagementNetworkEnhancedUpdateRequest {
    /// Channel page in bits 27 to 31, channel mask in bits 0 to 26
    pub channel_pages: Vec<u32>,
    /// Duration and its fields
    pub update: NetworkUpdateParameters,
}

impl Pack for ManagementNetworkEnhancedUpdateRequest {
    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_count(self.channel_pages.len())?;
        cursor.write_list_u32(&self.channel_pages)?;
        self.update.pack(cursor)
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let count = cursor.read_u8()? as usize;
        let channel_pages = cursor.read_list_u32(count)?;
        let update = NetworkUpdateParameters::unpack(cursor)?;
        Ok(Self {
            channel_pages,
            update,
        })
    }
}

// 2.4.4.4.9 Mgmt_NWK_Update_notify
/// Energy scan result, answer to both network update requests
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NetworkUpdateNotify {
    /// Channels that were scanned
    pub scanned_channels: u32,
    /// Transmissions since the last report
    pub total_transmissions: u16,
    /// Failed transmissions since the last report
    pub transmission_failures: u16,
    /// Energy measured per scanned channel
    pub energy_values: Vec<u8>,
}

impl Pack for NetworkUpdateNotify {
    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_u32(self.scanned_channels)?;
        cursor.write_u16(self.total_transmissions)?;
        cursor.write_u16(self.transmission_failures)?;
        cursor.write_count(self.energy_values.len())?;
        cursor.write_bytes(&self.energy_values, self.energy_values.len())
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let scanned_channels = cursor.read_u32()?;
        let total_transmissions = cursor.read_u16()?;
        let transmission_failures = cursor.read_u16()?;
        let count = cursor.read_u8()? as usize;
        let energy_values = cursor.read_list_u8(count)?;
        Ok(Self {
            scanned_channels,
            total_transmissions,
            transmission_failures,
            energy_values,
        })
    }
}

/// A page of the IEEE joining list
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JoiningListPage {
    /// Index of the first address in the page
    pub start_index: u8,
    /// Addresses in the page
    pub addresses: Vec<ExtendedAddress>,
}

// 2.4.4.4.11 Mgmt_NWK_IEEE_Joining_List_rsp
/// IEEE joining list response
///
/// The page is only present when the list is not empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IeeeJoiningListResponse {
    /// Update identifier of the list
    pub update_id: u8,
    /// Joining policy of the remote device
    pub policy: u8,
    /// Number of addresses in the remote list
    pub total: u8,
    /// Addresses, absent for an empty list
    pub page: Option<JoiningListPage>,
}

impl Pack for IeeeJoiningListResponse {
    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_u8(self.update_id)?;
        cursor.write_u8(self.policy)?;
        cursor.write_u8(self.total)?;
        if self.total > 0 {
            let page = self.page.as_ref().ok_or(Error::InvalidValue)?;
            cursor.write_u8(page.start_index)?;
            cursor.write_count(page.addresses.len())?;
            cursor.write_list_address(&page.addresses)?;
        }
        Ok(())
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let update_id = cursor.read_u8()?;
        let policy = cursor.read_u8()?;
        let total = cursor.read_u8()?;
        let page = if total > 0 {
            let start_index = cursor.read_u8()?;
            let count = cursor.read_u8()? as usize;
            let addresses = cursor.read_list_address(count)?;
            Some(JoiningListPage {
                start_index,
                addresses,
            })
        } else {
            None
        };
        Ok(Self {
            update_id,
            policy,
            total,
            page,
        })
    }
}

// 2.4.4.4.12 Mgmt_NWK_Unsolicited_Enhanced_Update_notify
/// Link quality report sent by a router without being asked
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnsolicitedEnhancedUpdateNotify {
    /// Page and channel in use
    pub channel_in_use: u32,
    /// Transmissions in the period
    pub tx_total: u16,
    /// Failed transmissions in the period
    pub tx_failures: u16,
    /// Retried transmissions in the period
    pub tx_retries: u16,
    /// Period in minutes the counters cover
    pub period: u8,
}

impl Pack for UnsolicitedEnhancedUpdateNotify {
    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_u32(self.channel_in_use)?;
        cursor.write_u16(self.tx_total)?;
        cursor.write_u16(self.tx_failures)?;
        cursor.write_u16(self.tx_retries)?;
        cursor.write_u8(self.period)
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        Ok(Self {
            channel_in_use: cursor.read_u32()?,
            tx_total: cursor.read_u16()?,
            tx_failures: cursor.read_u16()?,
            tx_retries: cursor.read_u16()?,
            period: cursor.read_u8()?,
        })
    }
}

/// Local TLVs of the beacon survey response
pub const BEACON_SURVEY_TLVS: &LocalTlvReaders = &[
    (0x01, LocalTlvKind::BeaconSurveyResults),
    (0x02, LocalTlvKind::PotentialParents),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device_profile::tlv::{FragmentationParameters, TlvValue};
    use byteorder::{BigEndian, LittleEndian};

    #[test]
    fn pack_leave_request() {
        let request = ManagementLeaveRequest {
            address: ExtendedAddress::new(0x0011_2233_4455_6677),
            flags: LeaveFlags::REJOIN,
        };
        let mut cursor = Cursor::<_, LittleEndian>::new([0u8; 16], 0);
        request.pack(&mut cursor).unwrap();
        assert_eq!(
            cursor.written(),
            [0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11, 0x00, 0x80]
        );
        let data = cursor.written().to_vec();
        let mut cursor = Cursor::<_, LittleEndian>::new(&data[..], 0);
        assert_eq!(ManagementLeaveRequest::unpack(&mut cursor).unwrap(), request);
    }

    #[test]
    fn permit_joining_with_tlvs() {
        let request = ManagementPermitJoiningRequest {
            duration: 0xfe,
            trust_center_significance: 0x01,
            tlvs: vec![Tlv::global(TlvValue::FragmentationParameters(
                FragmentationParameters::new(NetworkAddress::new(0x0000)),
            ))
            .unwrap()],
        };
        let mut cursor = Cursor::<_, LittleEndian>::new([0u8; 16], 0);
        request.pack(&mut cursor).unwrap();
        assert_eq!(cursor.written(), [0xfe, 0x01, 0x47, 0x01, 0x00, 0x00]);
        let data = cursor.written().to_vec();
        let mut cursor = Cursor::<_, LittleEndian>::new(&data[..], 0);
        assert_eq!(
            ManagementPermitJoiningRequest::unpack(&mut cursor).unwrap(),
            request
        );
    }

    #[test]
    fn network_update_scan() {
        let request = ManagementNetworkUpdateRequest {
            channel_mask: 0x07fff800,
            update: NetworkUpdateParameters {
                duration: 0x02,
                count: Some(0x01),
                update_id: Some(0x10),
                manager: Some(NetworkAddress::new(0x0000)),
            },
        };
        let mut cursor = Cursor::<_, LittleEndian>::new([0u8; 16], 0);
        request.pack(&mut cursor).unwrap();
        assert_eq!(cursor.written(), [0x00, 0xf8, 0xff, 0x07, 0x02, 0x01]);
        let data = cursor.written().to_vec();
        let mut cursor = Cursor::<_, LittleEndian>::new(&data[..], 0);
        let decoded = ManagementNetworkUpdateRequest::unpack(&mut cursor).unwrap();
        assert_eq!(decoded.update, request.update.normalized());
        assert_eq!(decoded.update.update_id, None);
    }

    #[test]
    fn network_update_change_manager() {
        let request = ManagementNetworkUpdateRequest {
            channel_mask: 0x0000_0800,
            update: NetworkUpdateParameters {
                duration: DURATION_CHANGE_MANAGER,
                count: None,
                update_id: Some(0x03),
                manager: Some(NetworkAddress::new(0x1234)),
            },
        };
        let mut cursor = Cursor::<_, BigEndian>::new([0u8; 16], 0);
        request.pack(&mut cursor).unwrap();
        assert_eq!(
            cursor.written(),
            [0x00, 0x00, 0x08, 0x00, 0xff, 0x03, 0x12, 0x34]
        );
    }

    #[test]
    fn network_update_missing_field() {
        let request = ManagementNetworkUpdateRequest {
            channel_mask: 0x0000_0800,
            update: NetworkUpdateParameters {
                duration: DURATION_CHANGE_CHANNEL,
                ..NetworkUpdateParameters::default()
            },
        };
        let mut cursor = Cursor::<_, LittleEndian>::new([0u8; 16], 0);
        assert_eq!(request.pack(&mut cursor), Err(Error::InvalidValue));

        let update = NetworkUpdateParameters {
            duration: 0x03,
            ..NetworkUpdateParameters::default()
        };
        let mut cursor = Cursor::<_, LittleEndian>::new([0u8; 16], 0);
        assert_eq!(update.pack(&mut cursor), Err(Error::InvalidValue));
    }

    #[test]
    fn enhanced_network_update() {
        let request = ManagementNetworkEnhancedUpdateRequest {
            channel_pages: vec![0x0000_0800, 0x0800_0001],
            update: NetworkUpdateParameters {
                duration: DURATION_CHANGE_CHANNEL,
                update_id: Some(0x07),
                ..NetworkUpdateParameters::default()
            },
        };
        let mut cursor = Cursor::<_, LittleEndian>::new([0u8; 16], 0);
        request.pack(&mut cursor).unwrap();
        assert_eq!(
            cursor.written(),
            [0x02, 0x00, 0x08, 0x00, 0x00, 0x01, 0x00, 0x00, 0x08, 0xfe, 0x07]
        );
        let data = cursor.written().to_vec();
        let mut cursor = Cursor::<_, LittleEndian>::new(&data[..], 0);
        assert_eq!(
            ManagementNetworkEnhancedUpdateRequest::unpack(&mut cursor).unwrap(),
            request
        );
    }

    #[test]
    fn unpack_update_notify() {
        let data = [
            0x00, 0xf8, 0xff, 0x07, 0x10, 0x00, 0x02, 0x00, 0x03, 0x55, 0x66, 0x77,
        ];
        let mut cursor = Cursor::<_, LittleEndian>::new(&data[..], 0);
        let notify = NetworkUpdateNotify::unpack(&mut cursor).unwrap();
        assert_eq!(notify.scanned_channels, 0x07ff_f800);
        assert_eq!(notify.total_transmissions, 16);
        assert_eq!(notify.transmission_failures, 2);
        assert_eq!(notify.energy_values, [0x55, 0x66, 0x77]);
    }

    #[test]
    fn joining_list() {
        let data = [0x01, 0x02, 0x00];
        let mut cursor = Cursor::<_, LittleEndian>::new(&data[..], 0);
        let response = IeeeJoiningListResponse::unpack(&mut cursor).unwrap();
        assert_eq!(response.total, 0);
        assert_eq!(response.page, None);

        let data = [
            0x01, 0x02, 0x05, 0x04, 0x01, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11, 0x00,
        ];
        let mut cursor = Cursor::<_, LittleEndian>::new(&data[..], 0);
        let response = IeeeJoiningListResponse::unpack(&mut cursor).unwrap();
        assert_eq!(response.update_id, 1);
        assert_eq!(response.policy, 2);
        assert_eq!(response.total, 5);
        let page = response.page.as_ref().unwrap();
        assert_eq!(page.start_index, 4);
        assert_eq!(page.addresses, [ExtendedAddress::new(0x0011_2233_4455_6677)]);

        let mut cursor = Cursor::<_, LittleEndian>::new([0u8; 16], 0);
        response.pack(&mut cursor).unwrap();
        assert_eq!(cursor.written(), data);
    }

    #[test]
    fn unsolicited_notify() {
        let data = [
            0x00, 0x08, 0x00, 0x00, 0x64, 0x00, 0x05, 0x00, 0x0a, 0x00, 0x3c,
        ];
        let mut cursor = Cursor::<_, LittleEndian>::new(&data[..], 0);
        let notify = UnsolicitedEnhancedUpdateNotify::unpack(&mut cursor).unwrap();
        assert_eq!(notify.channel_in_use, 0x0800);
        assert_eq!(notify.tx_total, 100);
        assert_eq!(notify.tx_failures, 5);
        assert_eq!(notify.tx_retries, 10);
        assert_eq!(notify.period, 60);
    }
}
