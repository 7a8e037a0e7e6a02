//! # Device Profile (ZDP)
//!
//! Requests are encoded with [`build_request`] and decoded with
//! [`read_request`], responses with [`build_response`] and [`read_response`].
//! [`Codec`] bundles the byte order and the transaction sequence choice of an
//! adapter.

mod active_endpoints;
mod binding;
mod device_announce;
pub mod link_quality;
mod management;
mod match_descriptor;
mod network_address;
pub mod node_descriptor;
pub mod power_descriptor;
mod request;
mod response;
mod routing;
mod security;
mod simple_descriptor;
mod status;
pub mod tlv;

pub use active_endpoints::{ActiveEndpointRequest, ActiveEndpointResponse};
pub use binding::{BindTarget, Binding, ManagementBindingTableResponse};
pub use device_announce::{DeviceAnnounce, ParentAnnounce};
pub use link_quality::{ManagementLinkQualityIndicatorResponse, Neighbor};
pub use management::{
    IeeeJoiningListResponse, JoiningListPage, LeaveFlags, ManagementLeaveRequest,
    ManagementNetworkEnhancedUpdateRequest, ManagementNetworkUpdateRequest,
    ManagementPermitJoiningRequest, NetworkUpdateNotify, NetworkUpdateParameters,
    UnsolicitedEnhancedUpdateNotify, BEACON_SURVEY_TLVS,
};
pub use match_descriptor::{MatchDescriptorRequest, MatchDescriptorResponse};
pub use network_address::{
    AddressResponse, AssociatedDevices, ExtendedAddressRequest, NetworkAddressRequest, RequestType,
};
pub use node_descriptor::{NodeDescriptor, NodeDescriptorRequest, NodeDescriptorResponse};
pub use power_descriptor::{NodePowerDescriptor, PowerDescriptorRequest, PowerDescriptorResponse};
pub use request::{build_request, read_request, Request};
pub use response::{build_response, local_tlv_readers, read_response, Response, ResponsePayload};
pub use routing::{ManagementRoutingTableResponse, RoutingTableEntry, RouteStatus};
pub use security::{
    SecuritySetConfigurationRequest, SecurityStartKeyUpdateRequest, CHALLENGE_TLVS,
    GET_AUTHENTICATION_LEVEL_TLVS, SET_CONFIGURATION_TLVS, START_KEY_NEGOTIATION_TLVS,
};
pub use simple_descriptor::{SimpleDescriptor, SimpleDescriptorRequest, SimpleDescriptorResponse};
pub use status::Status;

use core::marker::PhantomData;

use byteorder::{ByteOrder, LittleEndian};

use crate::Error;

/// Response cluster identifiers have this bit set
pub const RESPONSE: u16 = 0x8000;

/// Largest encoded message
pub const MAX_MESSAGE_SIZE: usize = 255;

// 2.4.2 Device Profile Overview
extended_enum!(
    /// Device profile cluster identifiers
    ClusterIdentifier, u16,
    /// Request the network address of another device
    NetworkAddressRequest => 0x0000,
    /// Request the extended (IEEE) address of another device
    ExtendedAddressRequest => 0x0001,
    /// Request the node descriptor of another device
    NodeDescriptorRequest => 0x0002,
    /// Request the power descriptor of another device
    PowerDescriptorRequest => 0x0003,
    /// Request the simple descriptor of another device
    SimpleDescriptorRequest => 0x0004,
    /// Request the active endpoints of another device
    ActiveEndpointRequest => 0x0005,
    /// Find other devices that match the criteria
    MatchDescriptorRequest => 0x0006,
    /// Device announcement notification
    DeviceAnnounce => 0x0013,
    SystemServerDiscoveryRequest => 0x0015,
    /// Parent announcement of the end devices it holds
    ParentAnnounce => 0x001f,
    BindRequest => 0x0021,
    UnbindRequest => 0x0022,
    ClearAllBindingsRequest => 0x002b,
    /// Management link quality indicator (LQI) request
    ManagementLinkQualityIndicatorRequest => 0x0031,
    ManagementRoutingTableRequest => 0x0032,
    ManagementBindingTableRequest => 0x0033,
    ManagementLeaveRequest => 0x0034,
    ManagementPermitJoiningRequest => 0x0036,
    ManagementNetworkUpdateRequest => 0x0038,
    ManagementNetworkEnhancedUpdateRequest => 0x0039,
    ManagementNetworkIeeeJoiningListRequest => 0x003a,
    ManagementNetworkBeaconSurveyRequest => 0x003c,
    SecurityStartKeyNegotiationRequest => 0x0040,
    SecurityRetrieveAuthenticationTokenRequest => 0x0041,
    SecurityGetAuthenticationLevelRequest => 0x0042,
    SecuritySetConfigurationRequest => 0x0043,
    SecurityGetConfigurationRequest => 0x0044,
    SecurityStartKeyUpdateRequest => 0x0045,
    SecurityDecommissionRequest => 0x0046,
    SecurityChallengeRequest => 0x0047,
    NetworkAddressResponse => 0x8000,
    ExtendedAddressResponse => 0x8001,
    NodeDescriptorResponse => 0x8002,
    PowerDescriptorResponse => 0x8003,
    SimpleDescriptorResponse => 0x8004,
    ActiveEndpointResponse => 0x8005,
    MatchDescriptorResponse => 0x8006,
    SystemServerDiscoveryResponse => 0x8015,
    ParentAnnounceResponse => 0x801f,
    BindResponse => 0x8021,
    UnbindResponse => 0x8022,
    ClearAllBindingsResponse => 0x802b,
    ManagementLinkQualityIndicatorResponse => 0x8031,
    ManagementRoutingTableResponse => 0x8032,
    ManagementBindingTableResponse => 0x8033,
    ManagementLeaveResponse => 0x8034,
    ManagementPermitJoiningResponse => 0x8036,
    /// Also known as the network update notification
    ManagementNetworkUpdateResponse => 0x8038,
    ManagementNetworkEnhancedUpdateResponse => 0x8039,
    ManagementNetworkIeeeJoiningListResponse => 0x803a,
    /// Sent without a request when the channel conditions change
    ManagementNetworkUnsolicitedEnhancedUpdateNotify => 0x803b,
    ManagementNetworkBeaconSurveyResponse => 0x803c,
    SecurityStartKeyNegotiationResponse => 0x8040,
    SecurityRetrieveAuthenticationTokenResponse => 0x8041,
    SecurityGetAuthenticationLevelResponse => 0x8042,
    SecuritySetConfigurationResponse => 0x8043,
    SecurityGetConfigurationResponse => 0x8044,
    SecurityStartKeyUpdateResponse => 0x8045,
    SecurityDecommissionResponse => 0x8046,
    SecurityChallengeResponse => 0x8047,
);

impl ClusterIdentifier {
    /// Look up a cluster, unknown identifiers are reported with their value
    pub fn from_u16(value: u16) -> Result<Self, Error> {
        use core::convert::TryFrom;
        Self::try_from(value).map_err(|_| Error::UnknownClusterIdentifier(value))
    }

    /// The identifier has the response bit set
    pub fn is_response(self) -> bool {
        u16::from(self) & RESPONSE == RESPONSE
    }

    /// The response cluster answering this request, if there is one
    pub fn response(self) -> Option<ClusterIdentifier> {
        if self.is_response() {
            return None;
        }
        Self::from_u16(u16::from(self) | RESPONSE).ok()
    }

    /// The request cluster this response answers, if there is one
    pub fn request(self) -> Option<ClusterIdentifier> {
        if !self.is_response() {
            return None;
        }
        Self::from_u16(u16::from(self) & !RESPONSE).ok()
    }
}

/// Encoder and decoder settings of an adapter
///
/// `B` selects the byte order of 16-bit, 32-bit and address fields. When
/// `with_sequence` is set, encoded messages start with a zeroed transaction
/// sequence byte and decoded messages are expected to start with one.
#[derive(Clone, Copy, Debug)]
pub struct Codec<B = LittleEndian> {
    with_sequence: bool,
    order: PhantomData<B>,
}

impl<B: ByteOrder> Codec<B> {
    /// Codec without transaction sequence byte
    pub fn new() -> Self {
        Self {
            with_sequence: false,
            order: PhantomData,
        }
    }

    /// Set if messages carry a transaction sequence byte
    pub fn with_sequence(mut self, with_sequence: bool) -> Self {
        self.with_sequence = with_sequence;
        self
    }

    /// Messages carry a transaction sequence byte
    pub fn has_sequence(&self) -> bool {
        self.with_sequence
    }

    /// Encode a request
    pub fn build_request(&self, request: &Request) -> Result<Vec<u8>, Error> {
        build_request::<B>(request, self.with_sequence)
    }

    /// Decode a request received for `cluster_identifier`
    pub fn read_request(&self, cluster_identifier: u16, data: &[u8]) -> Result<Request, Error> {
        read_request::<B>(cluster_identifier, data, self.with_sequence)
    }

    /// Encode a response
    pub fn build_response(&self, response: &Response) -> Result<Vec<u8>, Error> {
        build_response::<B>(response, self.with_sequence)
    }

    /// Decode a response received for `cluster_identifier`
    pub fn read_response(&self, cluster_identifier: u16, data: &[u8]) -> Result<Response, Error> {
        read_response::<B>(cluster_identifier, data, self.with_sequence)
    }
}

impl<B: ByteOrder> Default for Codec<B> {
    fn default() -> Self {
        Self::new()
    }
}
