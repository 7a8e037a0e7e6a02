//! Node power descriptor and its request and response

use core::convert::TryFrom;

use byteorder::ByteOrder;

use crate::common::address::NetworkAddress;
use crate::cursor::Cursor;
use crate::pack::Pack;
use crate::Error;

extended_enum!(
    /// Node power mode
    PowerMode, u8,
    /// Always on
    OnWhenIdle => 0x00,
    /// Will periodically wake up
    Periodically => 0x01,
    /// Will wake up when stimulated (button or similar)
    WhenStimulated => 0x02,
);

extended_enum!(
    /// Power level for power source
    PowerLevel, u8,
    /// Power level critical
    Critical => 0x00,
    /// Power level 33%
    Level33Percent => 0x04,
    /// Power level 66%
    Level66Percent => 0x08,
    /// Power level 100%
    Level100Percent => 0x0c,
);

bitflags! {
    /// Power sources
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PowerSources: u8 {
        /// Constant (mains) power
        const MAINS_POWER = 0x01;
        /// Rechargeable battery power
        const RECHARGEABLE_BATTERY = 0x02;
        /// Disposable battery power
        const DISPOSABLE_BATTERY = 0x04;
    }
}

// 2.3.2.4 Node Power Descriptor
/// Power descriptor for a node
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodePowerDescriptor {
    /// Current power mode
    pub mode: PowerMode,
    /// Power sources the node has
    pub available_sources: PowerSources,
    /// Power source in use
    pub current_sources: PowerSources,
    /// Level of the current source
    pub level: PowerLevel,
}

impl Default for NodePowerDescriptor {
    fn default() -> Self {
        Self {
            mode: PowerMode::OnWhenIdle,
            available_sources: PowerSources::MAINS_POWER,
            current_sources: PowerSources::MAINS_POWER,
            level: PowerLevel::Level100Percent,
        }
    }
}

impl Pack for NodePowerDescriptor {
    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_u8(u8::from(self.mode) & 0x0f | (self.available_sources.bits() & 0x0f) << 4)?;
        cursor.write_u8(self.current_sources.bits() & 0x0f | (u8::from(self.level) & 0x0f) << 4)
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let first = cursor.read_u8()?;
        let second = cursor.read_u8()?;
        Ok(Self {
            mode: PowerMode::try_from(first & 0x0f)?,
            available_sources: PowerSources::from_bits_retain(first >> 4),
            current_sources: PowerSources::from_bits_retain(second & 0x0f),
            level: PowerLevel::try_from(second >> 4)?,
        })
    }
}

// 2.4.3.1.4 Power_Desc_req
/// Power descriptor request
/// Requests the power descriptor for a remote device
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PowerDescriptorRequest {
    /// Network address of the device
    pub address: NetworkAddress,
}

impl Pack for PowerDescriptorRequest {
    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_short_address(self.address)
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        Ok(Self {
            address: cursor.read_short_address()?,
        })
    }
}

// 2.4.4.2.4 Power_Desc_rsp
/// Power descriptor response
/// Response to a power descriptor request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PowerDescriptorResponse {
    /// Network address of the device
    pub address: NetworkAddress,
    /// Power descriptor of the device
    pub descriptor: NodePowerDescriptor,
}

impl Pack for PowerDescriptorResponse {
    fn pack<T, B>(&self, cursor: &mut Cursor<T, B>) -> Result<(), Error>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
        B: ByteOrder,
    {
        cursor.write_short_address(self.address)?;
        self.descriptor.pack(cursor)
    }

    fn unpack<T, B>(cursor: &mut Cursor<T, B>) -> Result<Self, Error>
    where
        T: AsRef<[u8]>,
        B: ByteOrder,
    {
        let address = cursor.read_short_address()?;
        let descriptor = NodePowerDescriptor::unpack(cursor)?;
        Ok(Self {
            address,
            descriptor,
        })
    }
}
