use byteorder::ByteOrder;

use crate::common::server_mask::ServerMask;
use crate::cursor::Cursor;
use crate::device_profile::tlv::{
    read_expected, write_local, ApsFrameCounterChallenge, AuthenticationTokenId,
    BeaconSurveyConfiguration, Curve25519PublicPoint, Eui64List, TargetIeeeAddress, TlvIdList,
};
use crate::device_profile::{
    ActiveEndpointRequest, Binding, ClusterIdentifier, DeviceAnnounce, ExtendedAddressRequest,
    ManagementLeaveRequest, ManagementNetworkEnhancedUpdateRequest,
    ManagementNetworkUpdateRequest, ManagementPermitJoiningRequest, MatchDescriptorRequest,
    NetworkAddressRequest, NodeDescriptorRequest, ParentAnnounce, PowerDescriptorRequest,
    SecuritySetConfigurationRequest, SecurityStartKeyUpdateRequest, SimpleDescriptorRequest,
    MAX_MESSAGE_SIZE,
};
use crate::pack::Pack;
use crate::Error;

/// Tag of the single local TLV carried by a request
const REQUEST_TLV_TAG: u8 = 0x00;

/// Device profile request
///
/// Table requests carry the start index only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    NetworkAddress(NetworkAddressRequest),
    ExtendedAddress(ExtendedAddressRequest),
    NodeDescriptor(NodeDescriptorRequest),
    PowerDescriptor(PowerDescriptorRequest),
    SimpleDescriptor(SimpleDescriptorRequest),
    ActiveEndpoint(ActiveEndpointRequest),
    MatchDescriptor(MatchDescriptorRequest),
    DeviceAnnounce(DeviceAnnounce),
    SystemServerDiscovery(ServerMask),
    ParentAnnounce(ParentAnnounce),
    Bind(Binding),
    Unbind(Binding),
    ClearAllBindings(Eui64List),
    ManagementLinkQualityIndicator(u8),
    ManagementRoutingTable(u8),
    ManagementBindingTable(u8),
    ManagementLeave(ManagementLeaveRequest),
    ManagementPermitJoining(ManagementPermitJoiningRequest),
    ManagementNetworkUpdate(ManagementNetworkUpdateRequest),
    ManagementNetworkEnhancedUpdate(ManagementNetworkEnhancedUpdateRequest),
    ManagementNetworkIeeeJoiningList(u8),
    ManagementNetworkBeaconSurvey(BeaconSurveyConfiguration),
    SecurityStartKeyNegotiation(Curve25519PublicPoint),
    SecurityRetrieveAuthenticationToken(AuthenticationTokenId),
    SecurityGetAuthenticationLevel(TargetIeeeAddress),
    SecuritySetConfiguration(SecuritySetConfigurationRequest),
    SecurityGetConfiguration(TlvIdList),
    SecurityStartKeyUpdate(SecurityStartKeyUpdateRequest),
    SecurityDecommission(Eui64List),
    SecurityChallenge(ApsFrameCounterChallenge),
}

impl Request {
    /// Cluster the request is sent on
    pub fn cluster_identifier(&self) -> ClusterIdentifier {
        match self {
            Request::NetworkAddress(_) => ClusterIdentifier::NetworkAddressRequest,
            Request::ExtendedAddress(_) => ClusterIdentifier::ExtendedAddressRequest,
            Request::NodeDescriptor(_) => ClusterIdentifier::NodeDescriptorRequest,
            Request::PowerDescriptor(_) => ClusterIdentifier::PowerDescriptorRequest,
            Request::SimpleDescriptor(_) => ClusterIdentifier::SimpleDescriptorRequest,
            Request::ActiveEndpoint(_) => ClusterIdentifier::ActiveEndpointRequest,
            Request::MatchDescriptor(_) => ClusterIdentifier::MatchDescriptorRequest,
            Request::DeviceAnnounce(_) => ClusterIdentifier::DeviceAnnounce,
            Request::SystemServerDiscovery(_) => ClusterIdentifier::SystemServerDiscoveryRequest,
            Request::ParentAnnounce(_) => ClusterIdentifier::ParentAnnounce,
            Request::Bind(_) => ClusterIdentifier::BindRequest,
            Request::Unbind(_) => ClusterIdentifier::UnbindRequest,
            Request::ClearAllBindings(_) => ClusterIdentifier::ClearAllBindingsRequest,
            Request::ManagementLinkQualityIndicator(_) => {
                ClusterIdentifier::ManagementLinkQualityIndicatorRequest
            }
            Request::ManagementRoutingTable(_) => ClusterIdentifier::ManagementRoutingTableRequest,
            Request::ManagementBindingTable(_) => ClusterIdentifier::ManagementBindingTableRequest,
            Request::ManagementLeave(_) => ClusterIdentifier::ManagementLeaveRequest,
            Request::ManagementPermitJoining(_) => {
                ClusterIdentifier::ManagementPermitJoiningRequest
            }
            Request::ManagementNetworkUpdate(_) => {
                ClusterIdentifier::ManagementNetworkUpdateRequest
            }
            Request::ManagementNetworkEnhancedUpdate(_) => {
                ClusterIdentifier::ManagementNetworkEnhancedUpdateRequest
            }
            Request::ManagementNetworkIeeeJoiningList(_) => {
                ClusterIdentifier::ManagementNetworkIeeeJoiningListRequest
            }
            Request::ManagementNetworkBeaconSurvey(_) => {
                ClusterIdentifier::ManagementNetworkBeaconSurveyRequest
            }
            Request::SecurityStartKeyNegotiation(_) => {
                ClusterIdentifier::SecurityStartKeyNegotiationRequest
            }
            Request::SecurityRetrieveAuthenticationToken(_) => {
                ClusterIdentifier::SecurityRetrieveAuthenticationTokenRequest
            }
            Request::SecurityGetAuthenticationLevel(_) => {
                ClusterIdentifier::SecurityGetAuthenticationLevelRequest
            }
            Request::SecuritySetConfiguration(_) => {
                ClusterIdentifier::SecuritySetConfigurationRequest
            }
            Request::SecurityGetConfiguration(_) => {
                ClusterIdentifier::SecurityGetConfigurationRequest
            }
            Request::SecurityStartKeyUpdate(_) => ClusterIdentifier::SecurityStartKeyUpdateRequest,
            Request::SecurityDecommission(_) => ClusterIdentifier::SecurityDecommissionRequest,
            Request::SecurityChallenge(_) => ClusterIdentifier::SecurityChallengeRequest,
        }
    }

    /// Serialise the request payload
    pub fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        match self {
            Request::NetworkAddress(r) => r.pack(cursor),
            Request::ExtendedAddress(r) => r.pack(cursor),
            Request::NodeDescriptor(r) => r.pack(cursor),
            Request::PowerDescriptor(r) => r.pack(cursor),
            Request::SimpleDescriptor(r) => r.pack(cursor),
            Request::ActiveEndpoint(r) => r.pack(cursor),
            Request::MatchDescriptor(r) => r.pack(cursor),
            Request::DeviceAnnounce(r) => r.pack(cursor),
            Request::SystemServerDiscovery(mask) => cursor.write_u16((*mask).into()),
            Request::ParentAnnounce(r) => r.pack(cursor),
            Request::Bind(r) | Request::Unbind(r) => r.pack(cursor),
            Request::ClearAllBindings(v) | Request::SecurityDecommission(v) => {
                write_local(cursor, REQUEST_TLV_TAG, v)
            }
            Request::ManagementLinkQualityIndicator(start_index)
            | Request::ManagementRoutingTable(start_index)
            | Request::ManagementBindingTable(start_index)
            | Request::ManagementNetworkIeeeJoiningList(start_index) => {
                cursor.write_u8(*start_index)
            }
            Request::ManagementLeave(r) => r.pack(cursor),
            Request::ManagementPermitJoining(r) => r.pack(cursor),
            Request::ManagementNetworkUpdate(r) => r.pack(cursor),
            Request::ManagementNetworkEnhancedUpdate(r) => r.pack(cursor),
            Request::ManagementNetworkBeaconSurvey(v) => write_local(cursor, REQUEST_TLV_TAG, v),
            Request::SecurityStartKeyNegotiation(v) => write_local(cursor, REQUEST_TLV_TAG, v),
            Request::SecurityRetrieveAuthenticationToken(v) => {
                write_local(cursor, REQUEST_TLV_TAG, v)
            }
            Request::SecurityGetAuthenticationLevel(v) => write_local(cursor, REQUEST_TLV_TAG, v),
            Request::SecuritySetConfiguration(r) => r.pack(cursor),
            Request::SecurityGetConfiguration(v) => write_local(cursor, REQUEST_TLV_TAG, v),
            Request::SecurityStartKeyUpdate(r) => r.pack(cursor),
            Request::SecurityChallenge(v) => write_local(cursor, REQUEST_TLV_TAG, v),
        }
    }

    /// De-serialise the payload of a request sent on `cluster`
    pub fn unpack<T, B>(cluster: ClusterIdentifier, cursor: &mut Cursor<T, B>) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let request = match cluster {
            ClusterIdentifier::NetworkAddressRequest => {
                Request::NetworkAddress(NetworkAddressRequest::unpack(cursor)?)
            }
            ClusterIdentifier::ExtendedAddressRequest => {
                Request::ExtendedAddress(ExtendedAddressRequest::unpack(cursor)?)
            }
            ClusterIdentifier::NodeDescriptorRequest => {
                Request::NodeDescriptor(NodeDescriptorRequest::unpack(cursor)?)
            }
            ClusterIdentifier::PowerDescriptorRequest => {
                Request::PowerDescriptor(PowerDescriptorRequest::unpack(cursor)?)
            }
            ClusterIdentifier::SimpleDescriptorRequest => {
                Request::SimpleDescriptor(SimpleDescriptorRequest::unpack(cursor)?)
            }
            ClusterIdentifier::ActiveEndpointRequest => {
                Request::ActiveEndpoint(ActiveEndpointRequest::unpack(cursor)?)
            }
            ClusterIdentifier::MatchDescriptorRequest => {
                Request::MatchDescriptor(MatchDescriptorRequest::unpack(cursor)?)
            }
            ClusterIdentifier::DeviceAnnounce => {
                Request::DeviceAnnounce(DeviceAnnounce::unpack(cursor)?)
            }
            ClusterIdentifier::SystemServerDiscoveryRequest => {
                Request::SystemServerDiscovery(ServerMask::from(cursor.read_u16()?))
            }
            ClusterIdentifier::ParentAnnounce => {
                Request::ParentAnnounce(ParentAnnounce::unpack(cursor)?)
            }
            ClusterIdentifier::BindRequest => Request::Bind(Binding::unpack(cursor)?),
            ClusterIdentifier::UnbindRequest => Request::Unbind(Binding::unpack(cursor)?),
            ClusterIdentifier::ClearAllBindingsRequest => {
                Request::ClearAllBindings(read_expected(cursor, REQUEST_TLV_TAG)?)
            }
            ClusterIdentifier::ManagementLinkQualityIndicatorRequest => {
                Request::ManagementLinkQualityIndicator(cursor.read_u8()?)
            }
            ClusterIdentifier::ManagementRoutingTableRequest => {
                Request::ManagementRoutingTable(cursor.read_u8()?)
            }
            ClusterIdentifier::ManagementBindingTableRequest => {
                Request::ManagementBindingTable(cursor.read_u8()?)
            }
            ClusterIdentifier::ManagementLeaveRequest => {
                Request::ManagementLeave(ManagementLeaveRequest::unpack(cursor)?)
            }
            ClusterIdentifier::ManagementPermitJoiningRequest => {
                Request::ManagementPermitJoining(ManagementPermitJoiningRequest::unpack(cursor)?)
            }
            ClusterIdentifier::ManagementNetworkUpdateRequest => {
                Request::ManagementNetworkUpdate(ManagementNetworkUpdateRequest::unpack(cursor)?)
            }
            ClusterIdentifier::ManagementNetworkEnhancedUpdateRequest => {
                Request::ManagementNetworkEnhancedUpdate(
                    ManagementNetworkEnhancedUpdateRequest::unpack(cursor)?,
                )
            }
            ClusterIdentifier::ManagementNetworkIeeeJoiningListRequest => {
                Request::ManagementNetworkIeeeJoiningList(cursor.read_u8()?)
            }
            ClusterIdentifier::ManagementNetworkBeaconSurveyRequest => {
                Request::ManagementNetworkBeaconSurvey(read_expected(cursor, REQUEST_TLV_TAG)?)
            }
            ClusterIdentifier::SecurityStartKeyNegotiationRequest => {
                Request::SecurityStartKeyNegotiation(read_expected(cursor, REQUEST_TLV_TAG)?)
            }
            ClusterIdentifier::SecurityRetrieveAuthenticationTokenRequest => {
                Request::SecurityRetrieveAuthenticationToken(read_expected(cursor, REQUEST_TLV_TAG)?)
            }
            ClusterIdentifier::SecurityGetAuthenticationLevelRequest => {
                Request::SecurityGetAuthenticationLevel(read_expected(cursor, REQUEST_TLV_TAG)?)
            }
            ClusterIdentifier::SecuritySetConfigurationRequest => {
                Request::SecuritySetConfiguration(SecuritySetConfigurationRequest::unpack(cursor)?)
            }
            ClusterIdentifier::SecurityGetConfigurationRequest => {
                Request::SecurityGetConfiguration(read_expected(cursor, REQUEST_TLV_TAG)?)
            }
            ClusterIdentifier::SecurityStartKeyUpdateRequest => {
                Request::SecurityStartKeyUpdate(SecurityStartKeyUpdateRequest::unpack(cursor)?)
            }
            ClusterIdentifier::SecurityDecommissionRequest => {
                Request::SecurityDecommission(read_expected(cursor, REQUEST_TLV_TAG)?)
            }
            ClusterIdentifier::SecurityChallengeRequest => {
                Request::SecurityChallenge(read_expected(cursor, REQUEST_TLV_TAG)?)
            }
            _ => return Err(Error::UnknownClusterIdentifier(cluster.into())),
        };
        Ok(request)
    }
}

/// Encode a request
///
/// With `with_sequence` the message starts with a zero byte, reserved for the
/// transaction sequence number.
pub fn build_request<B: ByteOrder>(request: &Request, with_sequence: bool) -> Result<Vec<u8>, Error> {
    let mut cursor = Cursor::<[u8; MAX_MESSAGE_SIZE], B>::new(
        [0u8; MAX_MESSAGE_SIZE],
        if with_sequence { 1 } else { 0 },
    );
    request.pack(&mut cursor)?;
    log::trace!(
        "Built {} request, {} bytes",
        request.cluster_identifier().name(),
        cursor.position()
    );
    Ok(cursor.written().to_vec())
}

/// Decode a request received for `cluster_identifier`
///
/// With `with_sequence` the first byte is the transaction sequence number and
/// is skipped.
pub fn read_request<B: ByteOrder>(
    cluster_identifier: u16,
    data: &[u8],
    with_sequence: bool,
) -> Result<Request, Error> {
    let cluster = ClusterIdentifier::from_u16(cluster_identifier)?;
    if cluster.is_response() {
        return Err(Error::UnknownClusterIdentifier(cluster_identifier));
    }
    let mut cursor = Cursor::<&[u8], B>::new(data, if with_sequence { 1 } else { 0 });
    let request = Request::unpack(cluster, &mut cursor)?;
    log::trace!("Read {} request", cluster.name());
    Ok(request)
}
