//! # Error handling
//!
//! [`Error`] covers messages that cannot be encoded or decoded. A peer
//! answering with a failure status is not an error at this level, the status
//! is returned as data. [`StatusError`] is there for callers that require a
//! successful status.

use crate::device_profile::Status;

/// Errors
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Not enough space for the operation
    #[error("not enough space in buffer")]
    NotEnoughSpace,
    /// Wrong number of bytes provided to the operation
    #[error("wrong number of bytes")]
    WrongNumberOfBytes,
    /// The value provided is invalid
    #[error("invalid value")]
    InvalidValue,
    /// The extended address string is not `0x` followed by 16 hex digits
    #[error("invalid extended address")]
    InvalidAddress,
    /// The cluster identifier is unknown, or not valid for the operation
    #[error("unknown cluster identifier 0x{0:04x}")]
    UnknownClusterIdentifier(u16),
    /// The binding address mode is not group (0x01) or extended (0x03)
    #[error("unsupported address mode 0x{0:02x}")]
    UnsupportedAddressMode(u8),
    /// A TLV tag occurred more than once in a stream
    #[error("duplicate TLV tag {0}")]
    DuplicateTag(u8),
    /// An encapsulation TLV was found inside an encapsulation TLV
    #[error("invalid nested encapsulation for TLV tag {0}")]
    NestedEncapsulation(u8),
    /// The TLV declares more bytes than are available
    #[error("truncated TLV, tag {tag_id} declares {length} bytes")]
    TruncatedTlv {
        /// Tag identifier
        tag_id: u8,
        /// Declared value length
        length: usize,
    },
    /// The TLV length is outside what the tag allows
    #[error("invalid length {length} for TLV tag {tag_id}, expected at least {minimum}")]
    InvalidTlvLength {
        /// Tag identifier
        tag_id: u8,
        /// Value length
        length: usize,
        /// Smallest valid value length
        minimum: usize,
    },
    /// A TLV required by the message is missing
    #[error("missing TLV tag {0}")]
    MissingTlv(u8),
}

/// A response carried a status other than success
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("ZDO status {status}")]
pub struct StatusError {
    /// The reported status
    pub status: Status,
}

impl From<Status> for StatusError {
    fn from(status: Status) -> Self {
        Self { status }
    }
}
