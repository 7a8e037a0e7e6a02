use proptest::prelude::*;

use psila_zdo::device_profile::link_quality::{
    DeviceType, PermitJoining, Relationship, RxOnWhenIdle,
};
use psila_zdo::device_profile::node_descriptor::{
    DescriptorCapability, FrequencyBands, LogicalType,
};
use psila_zdo::device_profile::power_descriptor::NodePowerDescriptor;
use psila_zdo::device_profile::tlv::{
    ApsFrameCounterChallenge, ApsFrameCounterResponse, AuthenticationTokenId,
    BeaconSurveyConfiguration, BeaconSurveyResults, ConfigurationFlags, ConfigurationParameters,
    Curve25519PublicPoint, DeviceAuthenticationLevel, Eui64List, FragmentationParameters,
    NextChannelChange, NextPanIdChange, PotentialParent, PotentialParents, SelectedKeyNegotiationMethod,
    SymmetricPassphrase, TargetIeeeAddress, Tlv, TlvIdList, TlvValue,
};
use psila_zdo::device_profile::{
    ActiveEndpointRequest, ActiveEndpointResponse, AddressResponse, AssociatedDevices, BindTarget,
    Binding, DeviceAnnounce, ExtendedAddressRequest, IeeeJoiningListResponse, JoiningListPage,
    LeaveFlags, ManagementBindingTableResponse, ManagementLeaveRequest,
    ManagementLinkQualityIndicatorResponse, ManagementNetworkEnhancedUpdateRequest,
    ManagementNetworkUpdateRequest, ManagementPermitJoiningRequest,
    ManagementRoutingTableResponse, MatchDescriptorRequest, MatchDescriptorResponse, Neighbor,
    NetworkAddressRequest, NetworkUpdateNotify, NetworkUpdateParameters, NodeDescriptor,
    NodeDescriptorRequest, NodeDescriptorResponse, ParentAnnounce, PowerDescriptorRequest,
    PowerDescriptorResponse, RequestType, RoutingTableEntry, SecuritySetConfigurationRequest,
    SecurityStartKeyUpdateRequest, SimpleDescriptor, SimpleDescriptorRequest,
    SimpleDescriptorResponse, UnsolicitedEnhancedUpdateNotify,
};
use psila_zdo::{
    build_request, build_response, read_request, read_response, BigEndian, CapabilityInformation,
    ClusterIdentifier, Codec, Error, ExtendedAddress, LittleEndian, NetworkAddress, PanIdentifier,
    Request, Response, ResponsePayload, ServerMask, Status,
};

const RESPONSE_CLUSTERS: [u16; 30] = [
    0x8000, 0x8001, 0x8002, 0x8003, 0x8004, 0x8005, 0x8006, 0x8015, 0x801f, 0x8021, 0x8022,
    0x802b, 0x8031, 0x8032, 0x8033, 0x8034, 0x8036, 0x8038, 0x8039, 0x803a, 0x803b, 0x803c,
    0x8040, 0x8041, 0x8042, 0x8043, 0x8044, 0x8045, 0x8046, 0x8047,
];

fn address(value: u64) -> ExtendedAddress {
    ExtendedAddress::new(value)
}

fn node(value: u16) -> NetworkAddress {
    NetworkAddress::new(value)
}

fn binding(target: BindTarget) -> Binding {
    Binding {
        source: address(0x0011_2233_4455_6677),
        source_endpoint: 0x01,
        cluster: 0x0006,
        target,
    }
}

fn requests() -> Vec<Request> {
    vec![
        Request::NetworkAddress(NetworkAddressRequest {
            address: address(0x0011_2233_4455_6677),
            request_type: RequestType::Extended,
            start_index: 3,
        }),
        Request::ExtendedAddress(ExtendedAddressRequest {
            address: node(0x1234),
            request_type: RequestType::SingleDevice,
            start_index: 0,
        }),
        Request::NodeDescriptor(NodeDescriptorRequest {
            address: node(0x0000),
            fragmentation: None,
        }),
        Request::NodeDescriptor(NodeDescriptorRequest {
            address: node(0x0000),
            fragmentation: Some(FragmentationParameters {
                network_address: node(0x0000),
                options: Some(0x01),
                max_incoming_transfer_unit: Some(0x0052),
            }),
        }),
        Request::PowerDescriptor(PowerDescriptorRequest { address: node(0x4321) }),
        Request::SimpleDescriptor(SimpleDescriptorRequest {
            address: node(0x4321),
            endpoint: 0x0b,
        }),
        Request::ActiveEndpoint(ActiveEndpointRequest { address: node(0xfffd) }),
        Request::MatchDescriptor(MatchDescriptorRequest {
            address: node(0xfffd),
            profile: 0x0104,
            input_clusters: vec![0x0006, 0x0008],
            output_clusters: vec![],
        }),
        Request::DeviceAnnounce(DeviceAnnounce {
            network_address: node(0x6a6a),
            extended_address: address(0x000f_ff00_001f_e9c1),
            capability: CapabilityInformation::from(0x8e),
        }),
        Request::SystemServerDiscovery(ServerMask::from(0x2e41)),
        Request::ParentAnnounce(ParentAnnounce {
            children: vec![address(1), address(2)],
        }),
        Request::Bind(binding(BindTarget::Group(node(0x0001)))),
        Request::Unbind(binding(BindTarget::Extended {
            address: address(0x8899_aabb_ccdd_eeff),
            endpoint: 0x01,
        })),
        Request::ClearAllBindings(Eui64List {
            addresses: vec![address(0x0011_2233_4455_6677)],
        }),
        Request::ManagementLinkQualityIndicator(0),
        Request::ManagementRoutingTable(10),
        Request::ManagementBindingTable(20),
        Request::ManagementLeave(ManagementLeaveRequest {
            address: address(0),
            flags: LeaveFlags::REJOIN,
        }),
        Request::ManagementPermitJoining(ManagementPermitJoiningRequest {
            duration: 0xfe,
            trust_center_significance: 0x01,
            tlvs: vec![],
        }),
        Request::ManagementNetworkUpdate(ManagementNetworkUpdateRequest {
            channel_mask: 0x07ff_f800,
            update: NetworkUpdateParameters {
                duration: 0x05,
                count: Some(0x03),
                update_id: None,
                manager: None,
            },
        }),
        Request::ManagementNetworkEnhancedUpdate(ManagementNetworkEnhancedUpdateRequest {
            channel_pages: vec![0x0000_0800],
            update: NetworkUpdateParameters {
                duration: 0xff,
                count: None,
                update_id: Some(0x02),
                manager: Some(node(0x0000)),
            },
        }),
        Request::ManagementNetworkIeeeJoiningList(0),
        Request::ManagementNetworkBeaconSurvey(BeaconSurveyConfiguration {
            scan_channels: vec![0x07ff_f800],
            configuration: 0x01,
        }),
        Request::SecurityStartKeyNegotiation(Curve25519PublicPoint {
            device: address(0x0011_2233_4455_6677),
            public_point: [0x5a; 32],
        }),
        Request::SecurityRetrieveAuthenticationToken(AuthenticationTokenId { tag_id: 0x45 }),
        Request::SecurityGetAuthenticationLevel(TargetIeeeAddress {
            address: address(0x0011_2233_4455_6677),
        }),
        Request::SecuritySetConfiguration(SecuritySetConfigurationRequest {
            next_pan_id: NextPanIdChange {
                pan_identifier: PanIdentifier::new(0x1a62),
            },
            next_channel: NextChannelChange {
                channel: 0x0000_0800,
            },
            configuration: ConfigurationParameters {
                flags: ConfigurationFlags::RESTRICTED_MODE,
            },
        }),
        Request::SecurityGetConfiguration(TlvIdList {
            tag_ids: vec![0x43, 0x44, 0x4b],
        }),
        Request::SecurityStartKeyUpdate(SecurityStartKeyUpdateRequest {
            method: SelectedKeyNegotiationMethod {
                protocol: 0x02,
                secret: 0x01,
                device: address(0x0011_2233_4455_6677),
            },
            fragmentation: FragmentationParameters::new(node(0x0000)),
        }),
        Request::SecurityDecommission(Eui64List {
            addresses: vec![address(3), address(4)],
        }),
        Request::SecurityChallenge(ApsFrameCounterChallenge {
            sender: address(0x0011_2233_4455_6677),
            challenge: [1, 2, 3, 4, 5, 6, 7, 8],
        }),
    ]
}

fn node_descriptor() -> NodeDescriptor {
    NodeDescriptor {
        logical_type: LogicalType::Router,
        complex_descriptor_available: false,
        user_descriptor_available: false,
        fragmentation_supported: Some(true),
        reserved: 0,
        aps_flags: 0,
        frequency_bands: FrequencyBands::BAND_2400_MHZ,
        mac_capability: CapabilityInformation::from(0x8e),
        manufacturer_code: 0x1049,
        maximum_buffer_size: 0x52,
        maximum_incoming_transfer_size: 0x0052,
        server_mask: ServerMask {
            network_manager: true,
            stack_compliance_revision: 23,
            ..ServerMask::default()
        },
        maximum_outgoing_transfer_size: 0x0052,
        descriptor_capability: DescriptorCapability::empty(),
    }
}

fn responses() -> Vec<Response> {
    use ClusterIdentifier as C;
    vec![
        Response::success(
            C::NetworkAddressResponse,
            Some(ResponsePayload::NetworkAddress(
                AddressResponse::single_device_response(address(0x0011_2233_4455_6677), node(1)),
            )),
        ),
        Response::success(
            C::ExtendedAddressResponse,
            Some(ResponsePayload::ExtendedAddress(AddressResponse {
                extended_address: address(0x0011_2233_4455_6677),
                network_address: node(0x0000),
                associated: Some(AssociatedDevices {
                    start_index: 0,
                    devices: vec![node(0x1234), node(0x5678)],
                }),
            })),
        ),
        Response::success(
            C::NodeDescriptorResponse,
            Some(ResponsePayload::NodeDescriptor(NodeDescriptorResponse {
                address: node(0x0000),
                descriptor: node_descriptor(),
                tlvs: vec![Tlv::global(TlvValue::FragmentationParameters(
                    FragmentationParameters::new(node(0x0000)),
                ))
                .unwrap()],
            })),
        ),
        Response::success(
            C::PowerDescriptorResponse,
            Some(ResponsePayload::PowerDescriptor(PowerDescriptorResponse {
                address: node(0x6a6a),
                descriptor: NodePowerDescriptor::default(),
            })),
        ),
        Response::success(
            C::SimpleDescriptorResponse,
            Some(ResponsePayload::SimpleDescriptor(SimpleDescriptorResponse {
                address: node(0x6a6a),
                descriptor: SimpleDescriptor {
                    endpoint: 1,
                    profile: 0x0104,
                    device: 0x0100,
                    device_version: 1,
                    input_clusters: vec![0x0000, 0x0006],
                    output_clusters: vec![0x0019],
                },
            })),
        ),
        Response::success(
            C::ActiveEndpointResponse,
            Some(ResponsePayload::ActiveEndpoint(ActiveEndpointResponse {
                address: node(0x6a6a),
                endpoints: vec![1, 2, 242],
            })),
        ),
        Response::success(
            C::MatchDescriptorResponse,
            Some(ResponsePayload::MatchDescriptor(MatchDescriptorResponse {
                address: node(0x6a6a),
                endpoints: vec![],
            })),
        ),
        Response::success(
            C::DeviceAnnounce,
            Some(ResponsePayload::DeviceAnnounce(DeviceAnnounce {
                network_address: node(0x6a6a),
                extended_address: address(0x000f_ff00_001f_e9c1),
                capability: CapabilityInformation::from(0x80),
            })),
        ),
        Response::success(
            C::SystemServerDiscoveryResponse,
            Some(ResponsePayload::SystemServerDiscovery(ServerMask::from(0x0041))),
        ),
        Response::success(
            C::ParentAnnounceResponse,
            Some(ResponsePayload::ParentAnnounce(ParentAnnounce {
                children: vec![address(5)],
            })),
        ),
        Response::success(
            C::ManagementLinkQualityIndicatorResponse,
            Some(ResponsePayload::ManagementLinkQualityIndicator(
                ManagementLinkQualityIndicatorResponse {
                    neighbors_total: 1,
                    start_index: 0,
                    neighbors: vec![Neighbor {
                        extended_pan_identifier: address(0xdddd_dddd_dddd_dddd),
                        extended_address: address(0x000d_6fff_fe21_ae85),
                        network_address: node(0xc07b),
                        device_type: DeviceType::EndDevice,
                        rx_on_when_idle: RxOnWhenIdle::Off,
                        relationship: Relationship::Child,
                        reserved_1: false,
                        permit_joining: PermitJoining::No,
                        reserved_2: 0,
                        depth: 1,
                        link_quality: 0xa0,
                    }],
                },
            )),
        ),
        Response::success(
            C::ManagementRoutingTableResponse,
            Some(ResponsePayload::ManagementRoutingTable(
                ManagementRoutingTableResponse {
                    entries_total: 1,
                    start_index: 0,
                    entries: vec![RoutingTableEntry {
                        destination: node(0x1234),
                        status: 0,
                        memory_constrained: false,
                        many_to_one: true,
                        route_record_required: true,
                        next_hop: node(0x5678),
                    }],
                },
            )),
        ),
        Response::success(
            C::ManagementBindingTableResponse,
            Some(ResponsePayload::ManagementBindingTable(
                ManagementBindingTableResponse {
                    total: 2,
                    start_index: 0,
                    entries: vec![
                        binding(BindTarget::Group(node(0x0001))),
                        binding(BindTarget::Extended {
                            address: address(0x8899_aabb_ccdd_eeff),
                            endpoint: 0x01,
                        }),
                    ],
                },
            )),
        ),
        Response::success(C::BindResponse, None),
        Response::failure(C::ManagementLeaveResponse, Status::NotAuthorized),
        Response::success(
            C::ManagementNetworkUpdateResponse,
            Some(ResponsePayload::ManagementNetworkUpdate(NetworkUpdateNotify {
                scanned_channels: 0x07ff_f800,
                total_transmissions: 10,
                transmission_failures: 1,
                energy_values: vec![0x10; 16],
            })),
        ),
        Response::success(
            C::ManagementNetworkEnhancedUpdateResponse,
            Some(ResponsePayload::ManagementNetworkEnhancedUpdate(
                NetworkUpdateNotify::default(),
            )),
        ),
        Response::success(
            C::ManagementNetworkIeeeJoiningListResponse,
            Some(ResponsePayload::ManagementNetworkIeeeJoiningList(
                IeeeJoiningListResponse {
                    update_id: 1,
                    policy: 0,
                    total: 1,
                    page: Some(JoiningListPage {
                        start_index: 0,
                        addresses: vec![address(6)],
                    }),
                },
            )),
        ),
        Response::success(
            C::ManagementNetworkUnsolicitedEnhancedUpdateNotify,
            Some(
                ResponsePayload::ManagementNetworkUnsolicitedEnhancedUpdateNotify(
                    UnsolicitedEnhancedUpdateNotify {
                        channel_in_use: 0x0800,
                        tx_total: 100,
                        tx_failures: 2,
                        tx_retries: 7,
                        period: 60,
                    },
                ),
            ),
        ),
        Response::success(
            C::ManagementNetworkBeaconSurveyResponse,
            Some(ResponsePayload::Tlvs(vec![
                Tlv::new(
                    0x01,
                    TlvValue::BeaconSurveyResults(BeaconSurveyResults {
                        total_beacons: 3,
                        on_network_beacons: 2,
                        potential_parent_beacons: 2,
                        other_network_beacons: 1,
                    }),
                ),
                Tlv::new(
                    0x02,
                    TlvValue::PotentialParents(PotentialParents {
                        current_parent: node(0x0000),
                        current_parent_link_quality: 0xff,
                        parents: vec![PotentialParent {
                            network_address: node(0x1234),
                            link_quality: 0x80,
                        }],
                    }),
                ),
            ])),
        ),
        Response::success(
            C::SecurityStartKeyNegotiationResponse,
            Some(ResponsePayload::Tlvs(vec![Tlv::new(
                0x00,
                TlvValue::Curve25519PublicPoint(Curve25519PublicPoint {
                    device: address(7),
                    public_point: [0xa5; 32],
                }),
            )])),
        ),
        Response::success(
            C::SecurityRetrieveAuthenticationTokenResponse,
            Some(ResponsePayload::Tlvs(vec![Tlv::global(
                TlvValue::SymmetricPassphrase(SymmetricPassphrase {
                    passphrase: [0x11; 16],
                }),
            )
            .unwrap()])),
        ),
        Response::success(
            C::SecurityGetAuthenticationLevelResponse,
            Some(ResponsePayload::Tlvs(vec![Tlv::new(
                0x00,
                TlvValue::DeviceAuthenticationLevel(DeviceAuthenticationLevel {
                    remote_node: address(8),
                    initial_join_method: 1,
                    active_link_key_type: 4,
                }),
            )])),
        ),
        Response::success(
            C::SecurityChallengeResponse,
            Some(ResponsePayload::Tlvs(vec![Tlv::new(
                0x00,
                TlvValue::ApsFrameCounterResponse(ApsFrameCounterResponse {
                    responder: address(9),
                    challenge: [1, 2, 3, 4, 5, 6, 7, 8],
                    frame_counter: 0x0102_0304,
                    challenge_frame_counter: 0x0506_0708,
                    mic: [0xee; 8],
                }),
            )])),
        ),
    ]
}

#[test]
fn request_round_trip() {
    for request in requests() {
        let cluster = u16::from(request.cluster_identifier());
        for with_sequence in [false, true] {
            let data = build_request::<LittleEndian>(&request, with_sequence).unwrap();
            assert_eq!(
                read_request::<LittleEndian>(cluster, &data, with_sequence).unwrap(),
                request
            );
            let data = build_request::<BigEndian>(&request, with_sequence).unwrap();
            assert_eq!(
                read_request::<BigEndian>(cluster, &data, with_sequence).unwrap(),
                request
            );
        }
    }
}

#[test]
fn response_round_trip() {
    for response in responses() {
        let cluster = u16::from(response.cluster);
        let codec = Codec::<LittleEndian>::new().with_sequence(true);
        let data = codec.build_response(&response).unwrap();
        assert_eq!(codec.read_response(cluster, &data).unwrap(), response);
        let codec = Codec::<BigEndian>::new();
        let data = codec.build_response(&response).unwrap();
        assert_eq!(codec.read_response(cluster, &data).unwrap(), response);
    }
}

#[test]
fn network_address_request_scenario() {
    let request = Request::NetworkAddress(NetworkAddressRequest {
        address: "0xfe34ac2385ff8311".parse().unwrap(),
        request_type: RequestType::SingleDevice,
        start_index: 1,
    });
    assert_eq!(
        build_request::<LittleEndian>(&request, true).unwrap(),
        [0x00, 0x11, 0x83, 0xff, 0x85, 0x23, 0xac, 0x34, 0xfe, 0x00, 0x01]
    );
    assert_eq!(
        build_request::<BigEndian>(&request, true).unwrap(),
        [0x00, 0xfe, 0x34, 0xac, 0x23, 0x85, 0xff, 0x83, 0x11, 0x00, 0x01]
    );
}

#[test]
fn binding_table_scenario() {
    let data = [
        0x00, // status
        0x02, 0x00, 0x02, // total, start index, count
        0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11, 0x00, 0x01, 0x06, 0x00, 0x02,
        0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11, 0x00, 0x01, 0x06, 0x00, 0x01, 0x34, 0x12,
    ];
    let response = read_response::<LittleEndian>(0x8033, &data, false).unwrap();
    assert_eq!(response.status, Status::Success);
    match response.payload {
        Some(ResponsePayload::ManagementBindingTable(table)) => {
            assert_eq!(table.total, 2);
            assert_eq!(table.entries, [binding(BindTarget::Group(node(0x1234)))]);
        }
        other => panic!("Unexpected payload {:?}", other),
    }
}

#[test]
fn build_rejects_invalid_update() {
    let request = Request::ManagementNetworkUpdate(ManagementNetworkUpdateRequest {
        channel_mask: 0x0000_0800,
        update: NetworkUpdateParameters {
            duration: 0xff,
            count: None,
            update_id: Some(1),
            manager: None,
        },
    });
    assert_eq!(
        build_request::<LittleEndian>(&request, false),
        Err(Error::InvalidValue)
    );
}

proptest! {
    #[test]
    fn failure_status_without_payload(index in 0usize..RESPONSE_CLUSTERS.len(), status in 1u8..=255) {
        let response = read_response::<LittleEndian>(RESPONSE_CLUSTERS[index], &[status], false).unwrap();
        prop_assert_eq!(u8::from(response.status), status);
        prop_assert_eq!(&response.payload, &None);
        prop_assert!(response.check().is_err());
        let encoded = build_response::<LittleEndian>(&response, false).unwrap();
        prop_assert_eq!(encoded, vec![status]);
    }

    #[test]
    fn byte_order_swaps_wide_fields_only(
        extended in any::<u64>(),
        start_index in any::<u8>(),
        point in any::<[u8; 32]>(),
        channel_mask in any::<u32>(),
        manager in any::<u16>(),
    ) {
        let request = Request::NetworkAddress(NetworkAddressRequest {
            address: address(extended),
            request_type: RequestType::Extended,
            start_index,
        });
        let little = build_request::<LittleEndian>(&request, false).unwrap();
        let big = build_request::<BigEndian>(&request, false).unwrap();
        let mut swapped = little[..8].to_vec();
        swapped.reverse();
        prop_assert_eq!(&big[..8], &swapped[..]);
        prop_assert_eq!(&big[8..], &little[8..]);

        let request = Request::SecurityStartKeyNegotiation(Curve25519PublicPoint {
            device: address(extended),
            public_point: point,
        });
        let little = build_request::<LittleEndian>(&request, false).unwrap();
        let big = build_request::<BigEndian>(&request, false).unwrap();
        prop_assert_eq!(&big[..2], &little[..2]);
        let mut swapped = little[2..10].to_vec();
        swapped.reverse();
        prop_assert_eq!(&big[2..10], &swapped[..]);
        prop_assert_eq!(&big[10..], &point[..]);
        prop_assert_eq!(&little[10..], &point[..]);

        let request = Request::ManagementNetworkUpdate(ManagementNetworkUpdateRequest {
            channel_mask,
            update: NetworkUpdateParameters {
                duration: 0xff,
                count: None,
                update_id: Some(start_index),
                manager: Some(node(manager)),
            },
        });
        let little = build_request::<LittleEndian>(&request, false).unwrap();
        let big = build_request::<BigEndian>(&request, false).unwrap();
        prop_assert_eq!(&little[..4], &channel_mask.to_le_bytes()[..]);
        prop_assert_eq!(&big[..4], &channel_mask.to_be_bytes()[..]);
        prop_assert_eq!(&big[4..6], &little[4..6]);
        prop_assert_eq!(&little[6..], &manager.to_le_bytes()[..]);
        prop_assert_eq!(&big[6..], &manager.to_be_bytes()[..]);
    }

    #[test]
    fn truncated_requests_fail(cut in 0usize..10) {
        let request = Request::NetworkAddress(NetworkAddressRequest {
            address: address(0x0011_2233_4455_6677),
            request_type: RequestType::SingleDevice,
            start_index: 0,
        });
        let data = build_request::<LittleEndian>(&request, false).unwrap();
        prop_assert_eq!(
            read_request::<LittleEndian>(0x0000, &data[..cut], false),
            Err(Error::WrongNumberOfBytes)
        );
    }
}
