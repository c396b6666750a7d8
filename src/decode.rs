//! Value decoder.
//!
//! Pure functions that turn raw [`Value`]s into application values. Nothing
//! here fails: a value that cannot be decoded comes back as `None` (or the
//! caller's default), and the caller decides whether that matters.
//!
//! Octet strings are handled the way the protocol's text form presents them:
//! printable strings are taken as text, anything else is hex, and hex text
//! (`0x...`) is decoded back to ASCII.

use std::net::Ipv4Addr;

use crate::format::hex;
use crate::value::{Value, is_printable};

const HEX_MARKER: &str = "0x";

/// Decode a scalar in its protocol text form.
///
/// Hex text (`0x` followed by hex digits) is decoded as ASCII and trimmed;
/// anything else is returned unchanged. Hex text that is not valid hex, or
/// that does not decode to ASCII, gives `None`.
///
/// ```
/// use mimosa_snmp::decode::decode_scalar;
///
/// assert_eq!(decode_scalar("0x4d696d6f73610a").as_deref(), Some("Mimosa"));
/// assert_eq!(decode_scalar("2.5.4").as_deref(), Some("2.5.4"));
/// assert_eq!(decode_scalar("0xzz"), None);
/// ```
pub fn decode_scalar(raw: &str) -> Option<String> {
    match raw.strip_prefix(HEX_MARKER) {
        Some(payload) => {
            let bytes = hex::decode(payload)
                .inspect_err(|e| {
                    tracing::debug!(target: "mimosa_snmp::decode", { snmp.raw = raw, error = %e }, "hex-like value is not hex");
                })
                .ok()?;
            ascii_text(&bytes)
        }
        None => Some(raw.to_owned()),
    }
}

/// Decode a raw value to text.
///
/// Returns `None` for exceptions and NULL (the device returned nothing) and
/// for octet strings that are not ASCII.
///
/// ```
/// use mimosa_snmp::Value;
/// use mimosa_snmp::decode::decode_value;
///
/// assert_eq!(decode_value(&Value::from("B5-Lab")).as_deref(), Some("B5-Lab"));
/// assert_eq!(decode_value(&Value::from("B5-Lab\r\n")).as_deref(), Some("B5-Lab"));
/// assert_eq!(decode_value(&Value::Integer(2)).as_deref(), Some("2"));
/// assert_eq!(decode_value(&Value::NoSuchInstance), None);
/// ```
pub fn decode_value(value: &Value) -> Option<String> {
    if !value.is_available() {
        return None;
    }
    match value {
        Value::OctetString(data) if is_printable(data) => {
            // printable ASCII is valid UTF-8
            decode_scalar(std::str::from_utf8(data).ok()?)
        }
        Value::OctetString(data) => {
            let text = ascii_text(data);
            if text.is_none() {
                tracing::debug!(target: "mimosa_snmp::decode", { snmp.bytes = %hex::Bytes(data) }, "octet string is not ASCII");
            }
            text
        }
        other => Some(other.to_string()),
    }
}

fn ascii_text(bytes: &[u8]) -> Option<String> {
    if !bytes.is_ascii() {
        return None;
    }
    // ASCII is valid UTF-8
    let text = std::str::from_utf8(bytes).ok()?;
    Some(text.trim().to_owned())
}

/// Format a hardware address carried in protocol text form.
///
/// For hex text the marker and the first octet pair are skipped and the
/// remaining pairs are joined with colons. Any other text is treated as a raw
/// byte sequence: each character's ordinal becomes two hex digits.
///
/// ```
/// use mimosa_snmp::decode::hardware_address_from_text;
///
/// assert_eq!(hardware_address_from_text("0x0A1B2C3D4E5F"), "1b:2c:3d:4e:5f");
/// assert_eq!(hardware_address_from_text("AB"), "41:42");
/// assert_eq!(hardware_address_from_text(""), "");
/// ```
pub fn hardware_address_from_text(raw: &str) -> String {
    match raw.strip_prefix(HEX_MARKER) {
        Some(payload) => payload
            .as_bytes()
            .chunks(2)
            .skip(1)
            .map(|pair| String::from_utf8_lossy(pair).to_ascii_lowercase())
            .collect::<Vec<_>>()
            .join(":"),
        None => raw
            .chars()
            .map(|c| format!("{:02x}", c as u32))
            .collect::<Vec<_>>()
            .join(":"),
    }
}

/// Decode a hardware address to colon-separated lowercase hex octets.
///
/// Binary octet strings are formatted octet by octet. Octet strings holding
/// hex text go through [`hardware_address_from_text`]. Anything unavailable
/// or of another type gives an empty string.
///
/// ```
/// use mimosa_snmp::Value;
/// use mimosa_snmp::decode::decode_hardware_address;
///
/// let mac = Value::from(&[0x00u8, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e][..]);
/// assert_eq!(decode_hardware_address(&mac), "00:1a:2b:3c:4d:5e");
/// assert_eq!(decode_hardware_address(&Value::NoSuchInstance), "");
/// ```
pub fn decode_hardware_address(value: &Value) -> String {
    if !value.is_available() {
        return String::new();
    }
    match value {
        Value::OctetString(data) if is_printable(data) && data.starts_with(HEX_MARKER.as_bytes()) => {
            hardware_address_from_text(&String::from_utf8_lossy(data))
        }
        Value::OctetString(data) | Value::Opaque(data) => data
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<Vec<_>>()
            .join(":"),
        _ => String::new(),
    }
}

fn number(value: &Value) -> Option<f64> {
    if let Some(v) = value.as_i32() {
        return Some(f64::from(v));
    }
    if let Some(v) = value.as_u64() {
        return Some(v as f64);
    }
    decode_value(value)?.trim().parse().ok()
}

/// Interpret a bits-per-second count as megabits per second.
///
/// A missing or non-numeric value gives `default`.
///
/// ```
/// use mimosa_snmp::Value;
/// use mimosa_snmp::decode::to_float_mbps;
///
/// assert_eq!(to_float_mbps(Some(&Value::Gauge32(1_000_000_000)), 0.0), 1000.0);
/// assert_eq!(to_float_mbps(None, 0.0), 0.0);
/// ```
pub fn to_float_mbps(raw: Option<&Value>, default: f64) -> f64 {
    raw.and_then(number)
        .map(|bps| bps / 1_000_000.0)
        .unwrap_or(default)
}

/// Interpret a value as an integer.
///
/// A missing or non-numeric value gives `default`.
///
/// ```
/// use mimosa_snmp::Value;
/// use mimosa_snmp::decode::to_int;
///
/// assert_eq!(to_int(Some(&Value::Integer(1500)), 0), 1500);
/// assert_eq!(to_int(Some(&Value::from("1500")), 0), 1500);
/// assert_eq!(to_int(Some(&Value::from("jumbo")), 0), 0);
/// ```
pub fn to_int(raw: Option<&Value>, default: i64) -> i64 {
    let Some(value) = raw else {
        return default;
    };
    if let Some(v) = value.as_i32() {
        return i64::from(v);
    }
    if let Some(v) = value.as_u64() {
        return i64::try_from(v).unwrap_or(default);
    }
    decode_value(value)
        .and_then(|text| text.trim().parse().ok())
        .unwrap_or(default)
}

/// Whether a status column holds the "up"/"enabled" code `1`.
pub fn is_status_one(raw: Option<&Value>) -> bool {
    raw.and_then(decode_value).is_some_and(|code| code == "1")
}

/// Prefix length for an IPv4 mask.
///
/// Accepts a netmask (`255.255.255.0`) or a host mask (`0.0.0.255`); any
/// other bit pattern gives `None`.
///
/// ```
/// use std::net::Ipv4Addr;
/// use mimosa_snmp::decode::prefix_length;
///
/// assert_eq!(prefix_length(Ipv4Addr::new(255, 255, 255, 0)), Some(24));
/// assert_eq!(prefix_length(Ipv4Addr::new(0, 0, 0, 255)), Some(24));
/// assert_eq!(prefix_length(Ipv4Addr::new(255, 0, 255, 0)), None);
/// ```
pub fn prefix_length(mask: Ipv4Addr) -> Option<u8> {
    let bits = u32::from(mask);
    if bits.leading_ones() + bits.trailing_zeros() == 32 {
        return Some(bits.leading_ones() as u8);
    }
    if bits.leading_zeros() + bits.trailing_ones() == 32 {
        return Some(bits.leading_zeros() as u8);
    }
    None
}
