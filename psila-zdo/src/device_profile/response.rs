use byteorder::ByteOrder;

use crate::common::server_mask::ServerMask;
use crate::cursor::Cursor;
use crate::device_profile::tlv::{read_tlvs, write_tlvs, LocalTlvReaders, Tlv};
use crate::device_profile::{
    ActiveEndpointResponse, AddressResponse, ClusterIdentifier, DeviceAnnounce,
    IeeeJoiningListResponse, ManagementBindingTableResponse,
    ManagementLinkQualityIndicatorResponse, ManagementRoutingTableResponse,
    MatchDescriptorResponse, NetworkUpdateNotify, NodeDescriptorResponse, ParentAnnounce,
    PowerDescriptorResponse, SimpleDescriptorResponse, Status, UnsolicitedEnhancedUpdateNotify,
    BEACON_SURVEY_TLVS, CHALLENGE_TLVS, GET_AUTHENTICATION_LEVEL_TLVS, MAX_MESSAGE_SIZE,
    SET_CONFIGURATION_TLVS, START_KEY_NEGOTIATION_TLVS,
};
use crate::error::StatusError;
use crate::pack::Pack;
use crate::Error;

/// Payload of a successful response
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResponsePayload {
    NetworkAddress(AddressResponse),
    ExtendedAddress(AddressResponse),
    NodeDescriptor(NodeDescriptorResponse),
    PowerDescriptor(PowerDescriptorResponse),
    SimpleDescriptor(SimpleDescriptorResponse),
    ActiveEndpoint(ActiveEndpointResponse),
    MatchDescriptor(MatchDescriptorResponse),
    DeviceAnnounce(DeviceAnnounce),
    SystemServerDiscovery(ServerMask),
    ParentAnnounce(ParentAnnounce),
    ManagementLinkQualityIndicator(ManagementLinkQualityIndicatorResponse),
    ManagementRoutingTable(ManagementRoutingTableResponse),
    ManagementBindingTable(ManagementBindingTableResponse),
    ManagementNetworkUpdate(NetworkUpdateNotify),
    ManagementNetworkEnhancedUpdate(NetworkUpdateNotify),
    ManagementNetworkIeeeJoiningList(IeeeJoiningListResponse),
    ManagementNetworkUnsolicitedEnhancedUpdateNotify(UnsolicitedEnhancedUpdateNotify),
    /// TLV stream of the beacon survey and security responses
    Tlvs(Vec<Tlv>),
}

impl ResponsePayload {
    /// The payload may be carried by a response on `cluster`
    pub fn belongs_to(&self, cluster: ClusterIdentifier) -> bool {
        use ClusterIdentifier as C;
        match self {
            ResponsePayload::NetworkAddress(_) => cluster == C::NetworkAddressResponse,
            ResponsePayload::ExtendedAddress(_) => cluster == C::ExtendedAddressResponse,
            ResponsePayload::NodeDescriptor(_) => cluster == C::NodeDescriptorResponse,
            ResponsePayload::PowerDescriptor(_) => cluster == C::PowerDescriptorResponse,
            ResponsePayload::SimpleDescriptor(_) => cluster == C::SimpleDescriptorResponse,
            ResponsePayload::ActiveEndpoint(_) => cluster == C::ActiveEndpointResponse,
            ResponsePayload::MatchDescriptor(_) => cluster == C::MatchDescriptorResponse,
            ResponsePayload::DeviceAnnounce(_) => cluster == C::DeviceAnnounce,
            ResponsePayload::SystemServerDiscovery(_) => {
                cluster == C::SystemServerDiscoveryResponse
            }
            ResponsePayload::ParentAnnounce(_) => cluster == C::ParentAnnounceResponse,
            ResponsePayload::ManagementLinkQualityIndicator(_) => {
                cluster == C::ManagementLinkQualityIndicatorResponse
            }
            ResponsePayload::ManagementRoutingTable(_) => {
                cluster == C::ManagementRoutingTableResponse
            }
            ResponsePayload::ManagementBindingTable(_) => {
                cluster == C::ManagementBindingTableResponse
            }
            ResponsePayload::ManagementNetworkUpdate(_) => {
                cluster == C::ManagementNetworkUpdateResponse
            }
            ResponsePayload::ManagementNetworkEnhancedUpdate(_) => {
                cluster == C::ManagementNetworkEnhancedUpdateResponse
            }
            ResponsePayload::ManagementNetworkIeeeJoiningList(_) => {
                cluster == C::ManagementNetworkIeeeJoiningListResponse
            }
            ResponsePayload::ManagementNetworkUnsolicitedEnhancedUpdateNotify(_) => {
                cluster == C::ManagementNetworkUnsolicitedEnhancedUpdateNotify
            }
            ResponsePayload::Tlvs(_) => carries_tlvs(cluster),
        }
    }

    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        match self {
            ResponsePayload::NetworkAddress(p) | ResponsePayload::ExtendedAddress(p) => {
                p.pack(cursor)
            }
            ResponsePayload::NodeDescriptor(p) => p.pack(cursor),
            ResponsePayload::PowerDescriptor(p) => p.pack(cursor),
            ResponsePayload::SimpleDescriptor(p) => p.pack(cursor),
            ResponsePayload::ActiveEndpoint(p) => p.pack(cursor),
            ResponsePayload::MatchDescriptor(p) => p.pack(cursor),
            ResponsePayload::DeviceAnnounce(p) => p.pack(cursor),
            ResponsePayload::SystemServerDiscovery(mask) => cursor.write_u16((*mask).into()),
            ResponsePayload::ParentAnnounce(p) => p.pack(cursor),
            ResponsePayload::ManagementLinkQualityIndicator(p) => p.pack(cursor),
            ResponsePayload::ManagementRoutingTable(p) => p.pack(cursor),
            ResponsePayload::ManagementBindingTable(p) => p.pack(cursor),
            ResponsePayload::ManagementNetworkUpdate(p)
            | ResponsePayload::ManagementNetworkEnhancedUpdate(p) => p.pack(cursor),
            ResponsePayload::ManagementNetworkIeeeJoiningList(p) => p.pack(cursor),
            ResponsePayload::ManagementNetworkUnsolicitedEnhancedUpdateNotify(p) => {
                p.pack(cursor)
            }
            ResponsePayload::Tlvs(tlvs) => write_tlvs(cursor, tlvs),
        }
    }

    fn unpack<T, B>(cluster: ClusterIdentifier, cursor: &mut Cursor<T, B>) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        use ClusterIdentifier as C;
        let payload = match cluster {
            C::NetworkAddressResponse => {
                ResponsePayload::NetworkAddress(AddressResponse::unpack(cursor)?)
            }
            C::ExtendedAddressResponse => {
                ResponsePayload::ExtendedAddress(AddressResponse::unpack(cursor)?)
            }
            C::NodeDescriptorResponse => {
                ResponsePayload::NodeDescriptor(NodeDescriptorResponse::unpack(cursor)?)
            }
            C::PowerDescriptorResponse => {
                ResponsePayload::PowerDescriptor(PowerDescriptorResponse::unpack(cursor)?)
            }
            C::SimpleDescriptorResponse => {
                ResponsePayload::SimpleDescriptor(SimpleDescriptorResponse::unpack(cursor)?)
            }
            C::ActiveEndpointResponse => {
                ResponsePayload::ActiveEndpoint(ActiveEndpointResponse::unpack(cursor)?)
            }
            C::MatchDescriptorResponse => {
                ResponsePayload::MatchDescriptor(MatchDescriptorResponse::unpack(cursor)?)
            }
            C::DeviceAnnounce => ResponsePayload::DeviceAnnounce(DeviceAnnounce::unpack(cursor)?),
            C::SystemServerDiscoveryResponse => {
                ResponsePayload::SystemServerDiscovery(ServerMask::from(cursor.read_u16()?))
            }
            C::ParentAnnounceResponse => {
                ResponsePayload::ParentAnnounce(ParentAnnounce::unpack(cursor)?)
            }
            C::ManagementLinkQualityIndicatorResponse => {
                ResponsePayload::ManagementLinkQualityIndicator(
                    ManagementLinkQualityIndicatorResponse::unpack(cursor)?,
                )
            }
            C::ManagementRoutingTableResponse => ResponsePayload::ManagementRoutingTable(
                ManagementRoutingTableResponse::unpack(cursor)?,
            ),
            C::ManagementBindingTableResponse => ResponsePayload::ManagementBindingTable(
                ManagementBindingTableResponse::unpack(cursor)?,
            ),
            C::ManagementNetworkUpdateResponse => {
                ResponsePayload::ManagementNetworkUpdate(NetworkUpdateNotify::unpack(cursor)?)
            }
            C::ManagementNetworkEnhancedUpdateResponse => {
                ResponsePayload::ManagementNetworkEnhancedUpdate(NetworkUpdateNotify::unpack(
                    cursor,
                )?)
            }
            C::ManagementNetworkIeeeJoiningListResponse => {
                ResponsePayload::ManagementNetworkIeeeJoiningList(IeeeJoiningListResponse::unpack(
                    cursor,
                )?)
            }
            C::ManagementNetworkUnsolicitedEnhancedUpdateNotify => {
                ResponsePayload::ManagementNetworkUnsolicitedEnhancedUpdateNotify(
                    UnsolicitedEnhancedUpdateNotify::unpack(cursor)?,
                )
            }
            _ if carries_tlvs(cluster) => {
                ResponsePayload::Tlvs(read_tlvs(cursor, local_tlv_readers(cluster), false)?)
            }
            _ => return Err(Error::UnknownClusterIdentifier(cluster.into())),
        };
        Ok(payload)
    }
}

/// Local TLV table of the responses that define local tags
pub fn local_tlv_readers(cluster: ClusterIdentifier) -> Option<&'static LocalTlvReaders> {
    match cluster {
        ClusterIdentifier::ManagementNetworkBeaconSurveyResponse => Some(BEACON_SURVEY_TLVS),
        ClusterIdentifier::SecurityStartKeyNegotiationResponse => Some(START_KEY_NEGOTIATION_TLVS),
        ClusterIdentifier::SecurityGetAuthenticationLevelResponse => {
            Some(GET_AUTHENTICATION_LEVEL_TLVS)
        }
        ClusterIdentifier::SecuritySetConfigurationResponse => Some(SET_CONFIGURATION_TLVS),
        ClusterIdentifier::SecurityChallengeResponse => Some(CHALLENGE_TLVS),
        _ => None,
    }
}

fn carries_tlvs(cluster: ClusterIdentifier) -> bool {
    matches!(
        cluster,
        ClusterIdentifier::ManagementNetworkBeaconSurveyResponse
            | ClusterIdentifier::SecurityStartKeyNegotiationResponse
            | ClusterIdentifier::SecurityRetrieveAuthenticationTokenResponse
            | ClusterIdentifier::SecurityGetAuthenticationLevelResponse
            | ClusterIdentifier::SecuritySetConfigurationResponse
            | ClusterIdentifier::SecurityGetConfigurationResponse
            | ClusterIdentifier::SecurityChallengeResponse
    )
}

/// Responses carrying only a status
fn has_payload(cluster: ClusterIdentifier) -> bool {
    !matches!(
        cluster,
        ClusterIdentifier::BindResponse
            | ClusterIdentifier::UnbindResponse
            | ClusterIdentifier::ClearAllBindingsResponse
            | ClusterIdentifier::ManagementLeaveResponse
            | ClusterIdentifier::ManagementPermitJoiningResponse
            | ClusterIdentifier::SecurityStartKeyUpdateResponse
            | ClusterIdentifier::SecurityDecommissionResponse
    )
}

/// Device profile response
///
/// The payload is only present when the status is `Success` and the cluster
/// carries one. A failure reported by the remote device is a status, not an
/// error; use [`Response::check`] to turn it into one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    /// Cluster the response belongs to
    pub cluster: ClusterIdentifier,
    /// Status reported by the remote device
    pub status: Status,
    /// Payload, only present on success
    pub payload: Option<ResponsePayload>,
}

impl Response {
    /// Successful response with `payload`
    pub fn success(cluster: ClusterIdentifier, payload: Option<ResponsePayload>) -> Self {
        Self {
            cluster,
            status: Status::Success,
            payload,
        }
    }

    /// Response reporting `status` without payload
    pub fn failure(cluster: ClusterIdentifier, status: Status) -> Self {
        Self {
            cluster,
            status,
            payload: None,
        }
    }

    /// The response, or the status as an error when it is not `Success`
    pub fn check(&self) -> Result<&Self, StatusError> {
        if self.status.is_success() {
            Ok(self)
        } else {
            Err(StatusError::from(self.status))
        }
    }
}

fn is_response_cluster(cluster: ClusterIdentifier) -> bool {
    cluster.is_response() || cluster == ClusterIdentifier::DeviceAnnounce
}

/// Encode a response
///
/// The payload must belong to the cluster, and is only written for a
/// successful status on a cluster carrying one.
pub fn build_response<B: ByteOrder>(response: &Response, with_sequence: bool) -> Result<Vec<u8>, Error> {
    let cluster = response.cluster;
    if !is_response_cluster(cluster) {
        return Err(Error::UnknownClusterIdentifier(cluster.into()));
    }
    let mut cursor = Cursor::<[u8; MAX_MESSAGE_SIZE], B>::new(
        [0u8; MAX_MESSAGE_SIZE],
        if with_sequence { 1 } else { 0 },
    );
    if cluster != ClusterIdentifier::DeviceAnnounce {
        cursor.write_u8(response.status.into())?;
    }
    let expects_payload = response.status.is_success() && has_payload(cluster);
    match response.payload {
        Some(ref payload) if expects_payload && payload.belongs_to(cluster) => {
            payload.pack(&mut cursor)?
        }
        None if !expects_payload => (),
        _ => return Err(Error::InvalidValue),
    }
    log::trace!(
        "Built {} response, status {}, {} bytes",
        cluster.name(),
        response.status,
        cursor.position()
    );
    Ok(cursor.written().to_vec())
}

/// Decode a response received for `cluster_identifier`
///
/// With `with_sequence` the first byte is the transaction sequence number and
/// is skipped. The device announcement has no status byte and is reported as
/// successful.
pub fn read_response<B: ByteOrder>(
    cluster_identifier: u16,
    data: &[u8],
    with_sequence: bool,
) -> Result<Response, Error> {
    let cluster = ClusterIdentifier::from_u16(cluster_identifier)?;
    if !is_response_cluster(cluster) {
        return Err(Error::UnknownClusterIdentifier(cluster_identifier));
    }
    let mut cursor = Cursor::<&[u8], B>::new(data, if with_sequence { 1 } else { 0 });
    let status = if cluster == ClusterIdentifier::DeviceAnnounce {
        Status::Success
    } else {
        Status::from(cursor.read_u8()?)
    };
    let payload = if status.is_success() && has_payload(cluster) {
        Some(ResponsePayload::unpack(cluster, &mut cursor)?)
    } else {
        None
    };
    log::trace!("Read {} response, status {}", cluster.name(), status);
    Ok(Response {
        cluster,
        status,
        payload,
    })
}
