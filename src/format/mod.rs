//! Formatting utilities for SNMP values.
//!
//! The [`hex`] module provides the hexadecimal encoding and decoding used by
//! the value decoder and by log fields.
//!
//! ```
//! use mimosa_snmp::format::hex;
//!
//! assert_eq!(hex::encode(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
//! assert_eq!(hex::decode("4d696d6f7361").unwrap(), b"Mimosa");
//! ```

pub mod hex;
