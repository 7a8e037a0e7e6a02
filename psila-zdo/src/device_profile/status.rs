use core::fmt;

// 2.4.5 ZDP Enumeration Description
extended_enum!(
    /// Response status codes
    ///
    /// Device profile codes, network layer codes and the MAC layer codes the
    /// network layer passes through.
    Status, u8,
    /// Request succeeded
    Success => 0x00,
    /// The supplied request type was invalid
    InvalidRequestType => 0x80,
    /// The requested device cannot be found
    DeviceNotFound => 0x81,
    /// The provided endpoint is invalid (0x00 or 0xff)
    InvalidEndpoint => 0x82,
    /// Endpoint is not described by a simple descriptor
    NotActive => 0x83,
    /// The requested optional feature is not supported by this device
    NotSupported => 0x84,
    /// The request timed out
    Timeout => 0x85,
    /// Bind request was unsuccessful because the requested cluster was not found
    NoMatch => 0x86,
    /// Failed to unbind because lack of binding entries
    NoEntry => 0x88,
    /// The child descriptor is not available to the parent
    NoDescriptor => 0x89,
    /// The device do not have sufficient storage to support the request
    InsufficientSpace => 0x8a,
    /// The device could not complete the operation at this time
    NotPermitted => 0x8b,
    /// The device could not complete the operation since the table is full
    TableFull => 0x8c,
    /// The device was not authorised to complete the operation
    NotAuthorized => 0x8d,
    /// The device could not complete the operation because the device binding table is full
    DeviceBindingTableFull => 0x8e,
    /// The index is outside the table
    InvalidIndex => 0x8f,
    /// The response would be too large for one frame
    FrameTooLarge => 0x90,
    /// The requested key negotiation method is not accepted
    BadKeyNegotiationMethod => 0x91,
    /// The request could not be handled at this time, try again later
    TemporaryFailure => 0x92,
    NetworkInvalidParameter => 0xc1,
    NetworkInvalidRequest => 0xc2,
    NetworkNotPermitted => 0xc3,
    NetworkStartupFailure => 0xc4,
    NetworkAlreadyPresent => 0xc5,
    NetworkSyncFailure => 0xc6,
    NetworkNeighborTableFull => 0xc7,
    NetworkUnknownDevice => 0xc8,
    NetworkUnsupportedAttribute => 0xc9,
    NetworkNoNetworks => 0xca,
    NetworkMaxFrameCounter => 0xcc,
    NetworkNoKey => 0xcd,
    NetworkBadCcmOutput => 0xce,
    NetworkRouteDiscoveryFailed => 0xd0,
    NetworkRouteError => 0xd1,
    NetworkBroadcastTableFull => 0xd2,
    NetworkFrameNotBuffered => 0xd3,
    NetworkInvalidInterface => 0xd5,
    MacBeaconLoss => 0xe0,
    MacChannelAccessFailure => 0xe1,
    MacDenied => 0xe2,
    MacDisableTransceiverFailure => 0xe3,
    MacFailedSecurityCheck => 0xe4,
    MacFrameTooLong => 0xe5,
    MacInvalidGts => 0xe6,
    MacInvalidHandle => 0xe7,
    MacInvalidParameter => 0xe8,
    MacNoAcknowledgement => 0xe9,
    MacNoBeacon => 0xea,
    MacNoData => 0xeb,
    MacNoShortAddress => 0xec,
    MacOutOfCap => 0xed,
    MacPanIdConflict => 0xee,
    MacRealignment => 0xef,
    MacTransactionExpired => 0xf0,
    MacTransactionOverflow => 0xf1,
    MacTxActive => 0xf2,
    MacUnavailableKey => 0xf3,
    MacInvalidAddress => 0xf4;
    /// Code without a symbolic name, kept as received
    Unknown
);

impl Status {
    /// The status is success
    pub fn is_success(self) -> bool {
        self == Status::Success
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Success
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:02x})", self.name(), u8::from(*self))
    }
}
