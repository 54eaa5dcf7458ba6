use crate::{
    Result,
    constants::{DEVICE_ID_BYTE_LENGTH, DEVICE_ID_HEX_LENGTH},
    error::Error,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Device identifier (store-native 12-byte id, 24 hex characters).
///
/// The identifier is always held in normalized lowercase hex form. Parsing
/// rejects anything that is not exactly [`DEVICE_ID_HEX_LENGTH`] hex digits,
/// which lets request handlers refuse malformed ids before any store access.
///
/// # Examples
///
/// ```
/// use handset_core::DeviceId;
///
/// let id: DeviceId = "5F1A2B3C4D5E6F7081920A1B".parse().unwrap();
/// assert_eq!(id.as_str(), "5f1a2b3c4d5e6f7081920a1b");
///
/// assert!("not-an-id".parse::<DeviceId>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeviceId(String);

impl DeviceId {
    /// Parse and validate a device identifier.
    ///
    /// # Errors
    /// Returns `Error::InvalidDeviceId` if the input is not exactly 24 hex digits.
    pub fn parse(id: &str) -> Result<Self> {
        if id.len() != DEVICE_ID_HEX_LENGTH || !id.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidDeviceId(id.to_string()));
        }
        Ok(DeviceId(id.to_ascii_lowercase()))
    }

    /// Build an identifier from the raw 12 bytes produced by the store.
    #[must_use]
    pub fn from_bytes(bytes: [u8; DEVICE_ID_BYTE_LENGTH]) -> Self {
        let hex = bytes.iter().map(|b| format!("{b:02x}")).collect();
        DeviceId(hex)
    }

    /// Decode the identifier back into its raw 12 bytes.
    ///
    /// Every constructor guarantees 24 hex digits, so each pair decodes.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; DEVICE_ID_BYTE_LENGTH] {
        let mut bytes = [0u8; DEVICE_ID_BYTE_LENGTH];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let pair = &self.0[i * 2..i * 2 + 2];
            let decoded = u8::from_str_radix(pair, 16);
            debug_assert!(decoded.is_ok(), "non-hex pair {pair:?} in device id");
            *byte = decoded.unwrap_or_default();
        }
        bytes
    }

    /// Get the identifier as a hex string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for DeviceId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DeviceId::parse(s)
    }
}

impl Serialize for DeviceId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DeviceId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DeviceId::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("5f1a2b3c4d5e6f7081920a1b", "5f1a2b3c4d5e6f7081920a1b")]
    #[case("5F1A2B3C4D5E6F7081920A1B", "5f1a2b3c4d5e6f7081920a1b")]
    #[case("000000000000000000000000", "000000000000000000000000")]
    fn test_device_id_valid(#[case] input: &str, #[case] expected: &str) {
        let id: DeviceId = input.parse().unwrap();
        assert_eq!(id.as_str(), expected);
    }

    #[rstest]
    #[case("not-an-id")]
    #[case("")]
    #[case("5f1a2b3c4d5e6f7081920a1")] // 23 chars
    #[case("5f1a2b3c4d5e6f7081920a1b0")] // 25 chars
    #[case("5f1a2b3c4d5e6f7081920a1g")] // non-hex
    #[case("５f1a2b3c4d5e6f7081920a1")] // multi-byte
    fn test_device_id_invalid(#[case] input: &str) {
        let result: Result<DeviceId> = input.parse();
        assert_eq!(result, Err(Error::InvalidDeviceId(input.to_string())));
    }

    #[test]
    fn test_device_id_bytes() {
        let bytes = [0x5f, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e, 0x6f, 0x70, 0x81, 0x92, 0x0a, 0x1b];
        let id = DeviceId::from_bytes(bytes);
        assert_eq!(id.as_str(), "5f1a2b3c4d5e6f7081920a1b");
        assert_eq!(id.to_bytes(), bytes);
    }

    #[test]
    fn test_parsed_id_decodes_every_pair() {
        let id = DeviceId::parse("FFEEDDCCBBAA998877665544").unwrap();
        let bytes = id.to_bytes();
        assert_eq!(bytes[0], 0xff);
        assert_eq!(bytes[11], 0x44);
        assert_eq!(DeviceId::from_bytes(bytes), id);
    }

    #[test]
    fn test_device_id_serde() {
        let id = DeviceId::parse("5f1a2b3c4d5e6f7081920a1b").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"5f1a2b3c4d5e6f7081920a1b\"");

        let bad: std::result::Result<DeviceId, _> = serde_json::from_str("\"xyz\"");
        assert!(bad.is_err());
    }
}
