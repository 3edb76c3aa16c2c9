//! Stellar strkey validation for ed25519 public keys.
//!
//! A public-key strkey is 56 characters of RFC 4648 base32 (no padding)
//! encoding: 1 version byte, 32 key bytes, 2 checksum bytes
//! (CRC16-XModem over version + key, little-endian).

use thiserror::Error;

/// Version byte for ed25519 public keys; encodes to a leading `G`.
const VERSION_ED25519_PUBLIC: u8 = 6 << 3;

const ENCODED_LEN: usize = 56;
const PAYLOAD_LEN: usize = 35;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StrkeyError {
    #[error("strkey must be {ENCODED_LEN} characters, got {0}")]
    Length(usize),
    #[error("invalid base32 character '{0}'")]
    Alphabet(char),
    #[error("checksum mismatch")]
    Checksum,
    #[error("version byte {0:#04x} is not an ed25519 public key")]
    Version(u8),
}

/// Decode and validate a public-key strkey, returning the raw key bytes.
pub fn decode_public_key(input: &str) -> Result<[u8; 32], StrkeyError> {
    if input.len() != ENCODED_LEN {
        return Err(StrkeyError::Length(input.len()));
    }

    let payload = base32_decode(input)?;
    debug_assert_eq!(payload.len(), PAYLOAD_LEN);

    let checksum = u16::from_le_bytes([payload[33], payload[34]]);
    if crc16_xmodem(&payload[..33]) != checksum {
        return Err(StrkeyError::Checksum);
    }

    if payload[0] != VERSION_ED25519_PUBLIC {
        return Err(StrkeyError::Version(payload[0]));
    }

    let mut key = [0_u8; 32];
    key.copy_from_slice(&payload[1..33]);
    Ok(key)
}

/// Cheap validity check used to fail fast before any network round-trip.
pub fn is_valid_public_key(input: &str) -> bool {
    decode_public_key(input).is_ok()
}

fn base32_decode(input: &str) -> Result<Vec<u8>, StrkeyError> {
    let mut buffer: u32 = 0;
    let mut bits = 0;
    let mut output = Vec::with_capacity(input.len() * 5 / 8);

    for ch in input.chars() {
        let value = match ch {
            'A'..='Z' => ch as u32 - 'A' as u32,
            '2'..='7' => ch as u32 - '2' as u32 + 26,
            _ => return Err(StrkeyError::Alphabet(ch)),
        };
        buffer = (buffer << 5) | value;
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            output.push((buffer >> bits) as u8);
        }
    }

    Ok(output)
}

fn crc16_xmodem(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;
    for &byte in data {
        crc ^= u16::from(byte) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ 0x1021;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}
