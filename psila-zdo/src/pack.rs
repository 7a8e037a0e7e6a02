//! # Traits for handling packing and unpacking
//!
//! These traits handles packing and unpacking of data through a [`Cursor`]

use byteorder::ByteOrder;

use crate::cursor::Cursor;
use crate::Error;

/// Packing of self-delimiting data
pub trait Pack: Sized {
    /// Serialise at the cursor position, returning if there was an error
    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder;
    /// De-serialise from the cursor position, returning object or error
    fn unpack<T, B>(cursor: &mut Cursor<T, B>) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder;
}

/// Packing of TLV values, where the length is given by the TLV header
pub trait PackTlv: Sized {
    /// Smallest valid value length
    const MINIMUM_LENGTH: usize;
    /// Number of bytes the value occupies
    fn packed_len(&self) -> usize;
    /// Serialise the value at the cursor position
    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder;
    /// De-serialise a value of `length` bytes from the cursor position
    fn unpack<T, B>(cursor: &mut Cursor<T, B>, length: usize) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder;
}
