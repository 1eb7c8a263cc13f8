// MAC address normalization
//
// Resource keys in the client-oper YANG model are MAC addresses in lowercase
// colon-separated form. Input is accepted in any of the common notations
// (colon, dash, Cisco dotted, bare hex) and canonicalized before it reaches
// a request path.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// MAC address in canonical form: six lowercase hex byte-pairs joined by
/// colons (`aa:bb:cc:dd:ee:ff`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MacAddr(String);

impl MacAddr {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for MacAddr {
    type Err = Error;

    /// Strip `:`, `-` and `.` separators, lowercase, and require exactly
    /// twelve hex characters. Anything else is a validation error carrying
    /// the stripped input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stripped: String = s
            .chars()
            .filter(|c| !matches!(c, ':' | '-' | '.'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        if stripped.len() != 12 {
            return Err(Error::InvalidMacLength {
                len: stripped.len(),
                input: stripped,
            });
        }
        if let Some(ch) = stripped.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(Error::InvalidMacChar { input: stripped, ch });
        }

        let canonical = stripped
            .chars()
            .collect::<Vec<_>>()
            .chunks(2)
            .map(|pair| pair.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join(":");

        Ok(Self(canonical))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_hex() {
        let mac: MacAddr = "aabbccddeeff".parse().unwrap();
        assert_eq!(mac.as_str(), "aa:bb:cc:dd:ee:ff");
    }

    #[test]
    fn parses_colon_separated() {
        let mac: MacAddr = "aa:bb:cc:dd:ee:ff".parse().unwrap();
        assert_eq!(mac.as_str(), "aa:bb:cc:dd:ee:ff");
    }

    #[test]
    fn parses_dash_separated() {
        let mac: MacAddr = "aa-bb-cc-dd-ee-ff".parse().unwrap();
        assert_eq!(mac.as_str(), "aa:bb:cc:dd:ee:ff");
    }

    #[test]
    fn parses_cisco_dotted() {
        let mac: MacAddr = "aabb.ccdd.eeff".parse().unwrap();
        assert_eq!(mac.as_str(), "aa:bb:cc:dd:ee:ff");
    }

    #[test]
    fn normalizes_case() {
        let mac: MacAddr = "AA:BB:CC:DD:EE:FF".parse().unwrap();
        assert_eq!(mac.as_str(), "aa:bb:cc:dd:ee:ff");
    }

    #[test]
    fn mixed_separators_and_case() {
        let mac: MacAddr = "AA-bb.CC:dd-EE.ff".parse().unwrap();
        assert_eq!(mac.to_string(), "aa:bb:cc:dd:ee:ff");
    }

    #[test]
    fn rejects_short_input() {
        let err = "aa:bb:cc".parse::<MacAddr>().unwrap_err();
        assert!(matches!(err, Error::InvalidMacLength { len: 6, .. }));
    }

    #[test]
    fn rejects_long_input() {
        let err = "aa:bb:cc:dd:ee:ff:00".parse::<MacAddr>().unwrap_err();
        assert!(matches!(err, Error::InvalidMacLength { len: 14, .. }));
    }

    #[test]
    fn rejects_empty_input() {
        let err = "".parse::<MacAddr>().unwrap_err();
        assert!(matches!(err, Error::InvalidMacLength { len: 0, .. }));
    }

    #[test]
    fn rejects_non_hex_character() {
        let err = "aa:bb:cc:dd:ee:fg".parse::<MacAddr>().unwrap_err();
        assert!(matches!(err, Error::InvalidMacChar { ch: 'g', .. }));
    }

    #[test]
    fn validation_errors_are_flagged() {
        let err = "zz".parse::<MacAddr>().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn serde_roundtrip_is_transparent() {
        let mac: MacAddr = "AABB.CCDD.EEFF".parse().unwrap();
        let json = serde_json::to_string(&mac).unwrap();
        assert_eq!(json, "\"aa:bb:cc:dd:ee:ff\"");
        let back: MacAddr = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mac);
    }
}
