//! AMT22 absolute encoder over SPI.
//!
//! Every response word carries two check bits: bit 15 (K1) is odd parity
//! over the odd data bits, bit 14 (K0) odd parity over the even data bits.
//! The encoder needs a short gap between bytes, which is expressed as a
//! `DelayNs` operation inside the SPI transaction.

use embedded_hal::spi::{Mode, Operation, SpiDevice, MODE_1};

use crate::error::SensorError;

use super::{PositionSensor, TurnCounter};

/// SPI mode the encoders are wired for (MSB first).
pub const ENCODER_SPI_MODE: Mode = MODE_1;

/// Gap between bytes of one exchange.
const BYTE_GAP_NS: u32 = 3_000;

const NOP: u8 = 0x00;
const READ_TURNS: u8 = 0xA0;

const DATA_MASK: u16 = 0x3FFF;

/// Encoder resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// 4096 counts per revolution.
    Bits12,
    /// 16384 counts per revolution.
    Bits14,
}

impl Resolution {
    /// Counts per revolution.
    pub const fn encoder_max(self) -> u16 {
        match self {
            Resolution::Bits12 => 4096,
            Resolution::Bits14 => 16384,
        }
    }

    fn scale(self, data: u16) -> u16 {
        match self {
            Resolution::Bits12 => data >> 2,
            Resolution::Bits14 => data,
        }
    }
}

/// Verify the check bits of a response word and return its 14 data bits.
///
/// # Errors
///
/// Returns `SensorError::Checksum` with the raw word if either check bit is wrong.
pub fn decode_word(word: u16) -> Result<u16, SensorError> {
    let data = word & DATA_MASK;
    let odd = (data & 0x2AAA).count_ones() % 2;
    let even = (data & 0x1555).count_ones() % 2;
    let k1 = (word >> 15) as u32 & 1;
    let k0 = (word >> 14) as u32 & 1;

    if k1 == odd ^ 1 && k0 == even ^ 1 {
        Ok(data)
    } else {
        Err(SensorError::Checksum(word))
    }
}

/// Single-turn AMT22.
pub struct Amt22<SPI> {
    spi: SPI,
    resolution: Resolution,
}

impl<SPI: SpiDevice> Amt22<SPI> {
    /// Create a driver on an SPI device configured with [`ENCODER_SPI_MODE`].
    pub fn new(spi: SPI, resolution: Resolution) -> Self {
        Self { spi, resolution }
    }

    /// Release the SPI device.
    pub fn release(self) -> SPI {
        self.spi
    }

    fn exchange2(&mut self, command: [u8; 2]) -> Result<[u8; 2], SensorError> {
        let [mut a, mut b] = command.map(|byte| [byte]);
        self.spi
            .transaction(&mut [
                Operation::TransferInPlace(&mut a),
                Operation::DelayNs(BYTE_GAP_NS),
                Operation::TransferInPlace(&mut b),
            ])
            .map_err(|_| SensorError::Bus)?;
        Ok([a[0], b[0]])
    }

    fn exchange4(&mut self, command: [u8; 4]) -> Result<[u8; 4], SensorError> {
        let [mut a, mut b, mut c, mut d] = command.map(|byte| [byte]);
        self.spi
            .transaction(&mut [
                Operation::TransferInPlace(&mut a),
                Operation::DelayNs(BYTE_GAP_NS),
                Operation::TransferInPlace(&mut b),
                Operation::DelayNs(BYTE_GAP_NS),
                Operation::TransferInPlace(&mut c),
                Operation::DelayNs(BYTE_GAP_NS),
                Operation::TransferInPlace(&mut d),
            ])
            .map_err(|_| SensorError::Bus)?;
        Ok([a[0], b[0], c[0], d[0]])
    }
}

impl<SPI: SpiDevice> PositionSensor for Amt22<SPI> {
    type Error = SensorError;

    fn read_position(&mut self) -> Result<u16, SensorError> {
        let [hi, lo] = self.exchange2([NOP, NOP])?;
        let data = decode_word(u16::from_be_bytes([hi, lo]))?;
        Ok(self.resolution.scale(data))
    }
}

/// Multi-turn AMT22 (adds a signed 14-bit turn counter).
pub struct Amt22MultiTurn<SPI> {
    inner: Amt22<SPI>,
}

impl<SPI: SpiDevice> Amt22MultiTurn<SPI> {
    /// Create a driver on an SPI device configured with [`ENCODER_SPI_MODE`].
    pub fn new(spi: SPI, resolution: Resolution) -> Self {
        Self {
            inner: Amt22::new(spi, resolution),
        }
    }

    /// Release the SPI device.
    pub fn release(self) -> SPI {
        self.inner.release()
    }

    /// Read position and turn count in one exchange.
    pub fn read_position_and_turns(&mut self) -> Result<(u16, i32), SensorError> {
        let [p_hi, p_lo, t_hi, t_lo] = self.inner.exchange4([NOP, READ_TURNS, NOP, NOP])?;
        let position = decode_word(u16::from_be_bytes([p_hi, p_lo]))?;
        let turns = decode_word(u16::from_be_bytes([t_hi, t_lo]))?;
        // sign-extend the 14-bit two's complement counter
        let turns = ((turns << 2) as i16 >> 2) as i32;
        Ok((self.inner.resolution.scale(position), turns))
    }
}

impl<SPI: SpiDevice> PositionSensor for Amt22MultiTurn<SPI> {
    type Error = SensorError;

    fn read_position(&mut self) -> Result<u16, SensorError> {
        self.inner.read_position()
    }
}

impl<SPI: SpiDevice> TurnCounter for Amt22MultiTurn<SPI> {
    fn read_turn_count(&mut self) -> Result<i32, SensorError> {
        self.read_position_and_turns().map(|(_, turns)| turns)
    }
}
