use std::fmt;
use std::str::FromStr;

use crate::error::ChecksumError;

/// Parameters defining a 16-bit CRC algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrcConfig {
    pub polynomial: u16,
    pub initial_value: u16,
    pub reflect_in: bool,
    pub reflect_out: bool,
    pub final_xor: u16,
}

/// Named standard CRC-16 parameter sets.
///
/// | Name       | Poly   | Init   | RefIn | RefOut | XorOut | Check  |
/// |------------|--------|--------|-------|--------|--------|--------|
/// | ARC        | 0x8005 | 0x0000 | true  | true   | 0x0000 | 0xBB3D |
/// | CCITT      | 0x1021 | 0xFFFF | false | false  | 0x0000 | 0x29B1 |
/// | IEEE 802.3 | 0x8005 | 0x0000 | true  | true   | 0x0000 | 0xBB3D |
/// | Kermit     | 0x1021 | 0x0000 | true  | true   | 0x0000 | 0x2189 |
/// | X-25       | 0x1021 | 0xFFFF | true  | true   | 0xFFFF | 0x906E |
/// | X-Modem    | 0x8408 | 0x0000 | true  | true   | 0x0000 | 0x0C73 |
/// | Z-Modem    | 0x1021 | 0x0000 | false | false  | 0x0000 | 0x31C3 |
///
/// `Check` is the digest of the ASCII bytes `"123456789"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Arc,
    Ccitt,
    Ieee,
    Kermit,
    X25,
    Xmodem,
    Zmodem,
}

impl Variant {
    /// Every catalog entry, in listing order.
    pub const ALL: [Variant; 7] = [
        Variant::Arc,
        Variant::Ccitt,
        Variant::Ieee,
        Variant::Kermit,
        Variant::X25,
        Variant::Xmodem,
        Variant::Zmodem,
    ];

    /// Resolves the variant to its parameter set.
    pub fn config(self) -> CrcConfig {
        match self {
            Variant::Arc | Variant::Ieee => CrcConfig {
                polynomial: 0x8005,
                initial_value: 0x0000,
                reflect_in: true,
                reflect_out: true,
                final_xor: 0x0000,
            },
            Variant::Ccitt => CrcConfig {
                polynomial: 0x1021,
                initial_value: 0xFFFF,
                reflect_in: false,
                reflect_out: false,
                final_xor: 0x0000,
            },
            Variant::Kermit => CrcConfig {
                polynomial: 0x1021,
                initial_value: 0x0000,
                reflect_in: true,
                reflect_out: true,
                final_xor: 0x0000,
            },
            Variant::X25 => CrcConfig {
                polynomial: 0x1021,
                initial_value: 0xFFFF,
                reflect_in: true,
                reflect_out: true,
                final_xor: 0xFFFF,
            },
            Variant::Xmodem => CrcConfig {
                polynomial: 0x8408,
                initial_value: 0x0000,
                reflect_in: true,
                reflect_out: true,
                final_xor: 0x0000,
            },
            Variant::Zmodem => CrcConfig {
                polynomial: 0x1021,
                initial_value: 0x0000,
                reflect_in: false,
                reflect_out: false,
                final_xor: 0x0000,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Arc => "arc",
            Variant::Ccitt => "ccitt",
            Variant::Ieee => "ieee",
            Variant::Kermit => "kermit",
            Variant::X25 => "x25",
            Variant::Xmodem => "xmodem",
            Variant::Zmodem => "zmodem",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = ChecksumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "arc" => Ok(Variant::Arc),
            "ccitt" => Ok(Variant::Ccitt),
            "ieee" => Ok(Variant::Ieee),
            "kermit" => Ok(Variant::Kermit),
            "x25" | "x-25" => Ok(Variant::X25),
            "xmodem" | "x-modem" => Ok(Variant::Xmodem),
            "zmodem" | "z-modem" => Ok(Variant::Zmodem),
            other => Err(ChecksumError::InvalidInput(format!(
                "unknown variant: {other}"
            ))),
        }
    }
}
