//! CCSDS CRC-16 checksum library.
//! Provides the checksum itself (bit-serial and table-driven) and a
//! hexadecimal string decoder for feeding it.

pub mod crc;
pub mod hex;
