use crate::bits;
use crate::config::{CrcConfig, Variant};
use crate::error::ChecksumError;
use crate::Result;

/// How [`Crc16::update_text`] turns characters into bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// One byte per character; the text must be pure ASCII.
    Ascii,
    /// Two bytes per UTF-16 code unit, most significant byte first.
    Utf16Be,
}

/// Incremental 16-bit CRC accumulator.
///
/// An engine is built from a [`CrcConfig`] (or a [`Variant`] preset), fed
/// bytes through the update methods, and read with [`Crc16::digest`]. Reading
/// the digest does not consume or reset the engine; each logical stream gets
/// its own instance.
#[derive(Debug, Clone)]
pub struct Crc16 {
    table: [u16; 256],
    state: u16,
    reflect_in: bool,
    reflect_out: bool,
    final_xor: u16,
}

impl Crc16 {
    pub fn new(config: CrcConfig) -> Self {
        Self {
            table: build_table(config.polynomial),
            state: config.initial_value,
            reflect_in: config.reflect_in,
            reflect_out: config.reflect_out,
            final_xor: config.final_xor,
        }
    }

    pub fn with_variant(variant: Variant) -> Self {
        Self::new(variant.config())
    }

    /// Folds `data` into the running register.
    pub fn update(&mut self, data: &[u8]) {
        for &byte in data {
            let adjusted = if self.reflect_in {
                byte
            } else {
                bits::reverse_u8(byte)
            };
            let idx = (self.state ^ adjusted as u16) & 0xFF;
            self.state = (self.state >> 8) ^ self.table[idx as usize];
        }
    }

    /// Folds `data[offset..offset + length]` into the running register.
    ///
    /// Fails when the range falls outside the buffer; the register is left
    /// untouched on failure. A zero-length range is a no-op.
    pub fn update_range(&mut self, data: &[u8], offset: usize, length: usize) -> Result<()> {
        let slice = offset
            .checked_add(length)
            .and_then(|end| data.get(offset..end))
            .ok_or_else(|| ChecksumError::RangeOutOfBounds {
                offset,
                length,
                available: data.len(),
            })?;
        self.update(slice);
        Ok(())
    }

    /// Folds the encoded bytes of `text` into the running register.
    ///
    /// With [`TextEncoding::Ascii`] the text must be pure ASCII; nothing is
    /// folded when it is not.
    pub fn update_text(&mut self, text: &str, encoding: TextEncoding) -> Result<()> {
        match encoding {
            TextEncoding::Ascii => {
                if !text.is_ascii() {
                    return Err(ChecksumError::InvalidInput(
                        "text is not representable in ASCII".to_string(),
                    ));
                }
                self.update(text.as_bytes());
            }
            TextEncoding::Utf16Be => {
                for unit in text.encode_utf16() {
                    self.update(&unit.to_be_bytes());
                }
            }
        }
        Ok(())
    }

    /// Current digest.
    ///
    /// Pure: repeated calls without intervening updates return the same
    /// value, and further updates may follow.
    pub fn digest(&self) -> u16 {
        let register = if self.reflect_out {
            self.state
        } else {
            bits::reverse_u16(self.state)
        };
        register ^ self.final_xor
    }

    /// One-shot IEEE 802.3 digest of `data`.
    pub fn checksum(data: &[u8]) -> u16 {
        let mut crc = Crc16::with_variant(Variant::Ieee);
        crc.update(data);
        crc.digest()
    }

    /// One-shot IEEE 802.3 digest of `data[offset..offset + length]`.
    pub fn checksum_range(data: &[u8], offset: usize, length: usize) -> Result<u16> {
        let mut crc = Crc16::with_variant(Variant::Ieee);
        crc.update_range(data, offset, length)?;
        Ok(crc.digest())
    }

    /// One-shot IEEE 802.3 digest of encoded text.
    pub fn checksum_text(text: &str, encoding: TextEncoding) -> Result<u16> {
        let mut crc = Crc16::with_variant(Variant::Ieee);
        crc.update_text(text, encoding)?;
        Ok(crc.digest())
    }
}

impl Default for Crc16 {
    fn default() -> Self {
        Self::with_variant(Variant::Ieee)
    }
}

/// Builds the 256-entry lookup table for a right-shifting byte-at-a-time
/// update. The polynomial is bit-reversed once so reflected and
/// non-reflected variants share one table form; the reflect settings are
/// applied to input bytes and the final register instead.
fn build_table(polynomial: u16) -> [u16; 256] {
    let reflected = bits::reverse_u16(polynomial);
    let mut table = [0u16; 256];

    for (i, entry) in table.iter_mut().enumerate() {
        let mut value = i as u16;
        for _ in 0..8 {
            if value & 1 == 1 {
                value = (value >> 1) ^ reflected;
            } else {
                value >>= 1;
            }
        }
        *entry = value;
    }

    table
}
