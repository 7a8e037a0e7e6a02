//! # Psila ZDO - Z**bee device object messages
//!
//! This crate reads and writes the device profile (ZDP) messages used for
//! network management: address lookup, descriptors, bindings, tables, key
//! negotiation and configuration.
//!
//! Only the message payload is handled. Transport framing and deciding what
//! to do with a response is left to the caller.
//!

#![warn(missing_docs)]

#[macro_use]
extern crate bitflags;

#[macro_use]
mod utils;

pub mod common;
pub mod cursor;
pub mod device_profile; // ZDP
pub mod error;
pub mod pack;

pub use byteorder::{BigEndian, LittleEndian};

pub use common::address::{
    ExtendedAddress, ExtendedPanIdentifier, GroupIdentifier, NetworkAddress, PanIdentifier,
    ShortAddress,
};
pub use common::capability_information::CapabilityInformation;
pub use common::server_mask::ServerMask;
pub use cursor::Cursor;
pub use device_profile::{
    build_request, build_response, read_request, read_response, ClusterIdentifier, Codec,
    Request, Response, ResponsePayload, Status,
};
pub use error::{Error, StatusError};
