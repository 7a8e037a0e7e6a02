//! # Position tracked byte cursor
//!
//! The cursor reads and writes the primitive wire types used by the device
//! profile. The byte order of 16-bit, 32-bit and extended address fields is
//! chosen with the `B` type parameter, little endian unless stated otherwise.
//! Single bytes and raw byte runs are not affected by the byte order.

use core::marker::PhantomData;

use byteorder::{ByteOrder, LittleEndian};

use crate::common::address::{ExtendedAddress, ShortAddress, EXTENDED_ADDRESS_SIZE};
use crate::Error;

/// Cursor over a byte buffer
///
/// Reads are available for any `T: AsRef<[u8]>`, writes when `T` also
/// implements `AsMut<[u8]>`.
#[derive(Clone, Debug)]
pub struct Cursor<T, B = LittleEndian> {
    inner: T,
    position: usize,
    order: PhantomData<B>,
}

impl<T, B> Cursor<T, B> {
    /// Create a cursor starting at `position`
    pub fn new(inner: T, position: usize) -> Self {
        Self {
            inner,
            position,
            order: PhantomData,
        }
    }

    /// Current position
    pub fn position(&self) -> usize {
        self.position
    }

    /// Move to an absolute position
    pub fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    /// Reference to the underlying buffer
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Consume the cursor, returning the underlying buffer
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: AsRef<[u8]>, B: ByteOrder> Cursor<T, B> {
    /// Total size of the underlying buffer
    pub fn len(&self) -> usize {
        self.inner.as_ref().len()
    }

    /// The underlying buffer is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of bytes after the current position
    pub fn remaining(&self) -> usize {
        self.len().saturating_sub(self.position)
    }

    /// There is at least one byte after the current position
    pub fn is_more(&self) -> bool {
        self.remaining() > 0
    }

    /// There are at least `count` bytes after the current position
    pub fn has_at_least(&self, count: usize) -> bool {
        self.remaining() >= count
    }

    /// Bytes written or consumed so far
    pub fn written(&self) -> &[u8] {
        let end = self.position.min(self.len());
        &self.inner.as_ref()[..end]
    }

    /// Byte at an absolute position, the cursor does not move
    pub fn get_byte(&self, position: usize) -> Result<u8, Error> {
        self.inner
            .as_ref()
            .get(position)
            .copied()
            .ok_or(Error::WrongNumberOfBytes)
    }

    fn take(&mut self, count: usize) -> Result<&[u8], Error> {
        if !self.has_at_least(count) {
            return Err(Error::WrongNumberOfBytes);
        }
        let start = self.position;
        self.position += count;
        Ok(&self.inner.as_ref()[start..start + count])
    }

    /// Read one byte
    pub fn read_u8(&mut self) -> Result<u8, Error> {
        Ok(self.take(1)?[0])
    }

    /// Read a 16-bit integer
    pub fn read_u16(&mut self) -> Result<u16, Error> {
        Ok(B::read_u16(self.take(2)?))
    }

    /// Read a 32-bit integer
    pub fn read_u32(&mut self) -> Result<u32, Error> {
        Ok(B::read_u32(self.take(4)?))
    }

    /// Read a run of `count` bytes
    pub fn read_bytes(&mut self, count: usize) -> Result<&[u8], Error> {
        self.take(count)
    }

    /// Read a fixed size run of bytes
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        let mut array = [0u8; N];
        array.copy_from_slice(self.take(N)?);
        Ok(array)
    }

    /// Read a 64-bit extended address
    pub fn read_address(&mut self) -> Result<ExtendedAddress, Error> {
        let value = B::read_u64(self.take(EXTENDED_ADDRESS_SIZE)?);
        Ok(ExtendedAddress::new(value))
    }

    /// Read a 16-bit short address
    pub fn read_short_address(&mut self) -> Result<ShortAddress, Error> {
        Ok(ShortAddress::new(self.read_u16()?))
    }

    /// Read `count` short addresses
    pub fn read_list_short_address(&mut self, count: usize) -> Result<Vec<ShortAddress>, Error> {
        (0..count).map(|_| self.read_short_address()).collect()
    }

    /// Read `count` bytes into a vector
    pub fn read_list_u8(&mut self, count: usize) -> Result<Vec<u8>, Error> {
        Ok(self.take(count)?.to_vec())
    }

    /// Read `count` 16-bit integers
    pub fn read_list_u16(&mut self, count: usize) -> Result<Vec<u16>, Error> {
        (0..count).map(|_| self.read_u16()).collect()
    }

    /// Read `count` 32-bit integers
    pub fn read_list_u32(&mut self, count: usize) -> Result<Vec<u32>, Error> {
        (0..count).map(|_| self.read_u32()).collect()
    }

    /// Read `count` extended addresses
    pub fn read_list_address(&mut self, count: usize) -> Result<Vec<ExtendedAddress>, Error> {
        (0..count).map(|_| self.read_address()).collect()
    }
}

impl<T: AsRef<[u8]> + AsMut<[u8]>, B: ByteOrder> Cursor<T, B> {
    /// Overwrite the byte at an absolute position, the cursor does not move
    pub fn set_byte(&mut self, position: usize, value: u8) -> Result<(), Error> {
        match self.inner.as_mut().get_mut(position) {
            Some(byte) => {
                *byte = value;
                Ok(())
            }
            None => Err(Error::NotEnoughSpace),
        }
    }

    fn reserve(&mut self, count: usize) -> Result<&mut [u8], Error> {
        if !self.has_at_least(count) {
            return Err(Error::NotEnoughSpace);
        }
        let start = self.position;
        self.position += count;
        Ok(&mut self.inner.as_mut()[start..start + count])
    }

    /// Write one byte
    pub fn write_u8(&mut self, value: u8) -> Result<(), Error> {
        self.reserve(1)?[0] = value;
        Ok(())
    }

    /// Write a 16-bit integer
    pub fn write_u16(&mut self, value: u16) -> Result<(), Error> {
        B::write_u16(self.reserve(2)?, value);
        Ok(())
    }

    /// Write a 32-bit integer
    pub fn write_u32(&mut self, value: u32) -> Result<(), Error> {
        B::write_u32(self.reserve(4)?, value);
        Ok(())
    }

    /// Write a run of bytes, which must be exactly `expected` bytes long
    pub fn write_bytes(&mut self, values: &[u8], expected: usize) -> Result<(), Error> {
        if values.len() != expected {
            return Err(Error::WrongNumberOfBytes);
        }
        self.reserve(expected)?.copy_from_slice(values);
        Ok(())
    }

    /// Write a 64-bit extended address
    pub fn write_address(&mut self, address: ExtendedAddress) -> Result<(), Error> {
        B::write_u64(self.reserve(EXTENDED_ADDRESS_SIZE)?, address.into());
        Ok(())
    }

    /// Write a 16-bit short address
    pub fn write_short_address(&mut self, address: ShortAddress) -> Result<(), Error> {
        self.write_u16(address.into())
    }

    /// Write a list of short addresses, without count
    pub fn write_list_short_address(&mut self, values: &[ShortAddress]) -> Result<(), Error> {
        values
            .iter()
            .try_for_each(|value| self.write_short_address(*value))
    }

    /// Write a list of 16-bit integers, without count
    pub fn write_list_u16(&mut self, values: &[u16]) -> Result<(), Error> {
        values.iter().try_for_each(|value| self.write_u16(*value))
    }

    /// Write a list of 32-bit integers, without count
    pub fn write_list_u32(&mut self, values: &[u32]) -> Result<(), Error> {
        values.iter().try_for_each(|value| self.write_u32(*value))
    }

    /// Write a list of extended addresses, without count
    pub fn write_list_address(&mut self, values: &[ExtendedAddress]) -> Result<(), Error> {
        values
            .iter()
            .try_for_each(|value| self.write_address(*value))
    }

    /// Write the length of a list as a single byte
    pub fn write_count(&mut self, count: usize) -> Result<(), Error> {
        let count = u8::try_from(count).map_err(|_| Error::InvalidValue)?;
        self.write_u8(count)
    }
}
