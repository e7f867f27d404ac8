use crate::error::{PpolicyError, PpolicyResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Object identifier in dotted-decimal form (e.g. "1.3.6.1.4.1.42.2.27.8.5.1")
///
/// LDAP controls are identified by an OID carried as a string. The type
/// validates the dotted-decimal syntax on construction so downstream code
/// can compare and store identifiers without re-checking them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Oid(String);

impl Oid {
    /// Parse an OID from its dotted-decimal string form.
    ///
    /// # Arguments
    ///
    /// * `s` - String representation, at least two dot-separated decimal arcs
    ///
    /// # Returns
    ///
    /// Returns `Ok(Oid)` if parsing succeeds, `Err(PpolicyError)` otherwise.
    pub fn from_string(s: &str) -> PpolicyResult<Self> {
        let arcs: Vec<&str> = s.split('.').collect();
        if arcs.len() < 2 {
            return Err(PpolicyError::InvalidOid(format!(
                "OID must have at least 2 arcs: {}",
                s
            )));
        }
        for arc in &arcs {
            if arc.is_empty() || !arc.bytes().all(|b| b.is_ascii_digit()) {
                return Err(PpolicyError::InvalidOid(format!(
                    "OID arc is not a decimal number: {:?} in {}",
                    arc, s
                )));
            }
        }
        Ok(Self(s.to_string()))
    }

    /// Get the OID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Oid {
    type Err = PpolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl PartialEq<str> for Oid {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Oid {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Response control returned by a directory server
///
/// A control is the triple of control type OID, criticality flag and the
/// control-specific raw value. The value bytes are kept opaque here;
/// control-specific decoders interpret them.
///
/// The criticality flag belongs to the request/response exchange and has no
/// influence on how the value is decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseControl {
    oid: Oid,
    critical: bool,
    #[serde(with = "serde_bytes")]
    value: Vec<u8>,
}

impl ResponseControl {
    /// Create a new response control from its three parts.
    pub fn new(oid: Oid, critical: bool, value: Vec<u8>) -> Self {
        Self {
            oid,
            critical,
            value,
        }
    }

    /// The control type OID.
    pub fn oid(&self) -> &Oid {
        &self.oid
    }

    /// Whether the server marked the control critical.
    pub fn is_critical(&self) -> bool {
        self.critical
    }

    /// The raw control value bytes.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Consume the control and return its parts.
    pub fn into_parts(self) -> (Oid, bool, Vec<u8>) {
        (self.oid, self.critical, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oid_from_string() {
        let oid = Oid::from_string("1.3.6.1.4.1.42.2.27.8.5.1").unwrap();
        assert_eq!(oid.as_str(), "1.3.6.1.4.1.42.2.27.8.5.1");
        assert_eq!(oid.to_string(), "1.3.6.1.4.1.42.2.27.8.5.1");
    }

    #[test]
    fn test_oid_rejects_invalid() {
        assert!(Oid::from_string("").is_err());
        assert!(Oid::from_string("1").is_err());
        assert!(Oid::from_string("1..2").is_err());
        assert!(Oid::from_string("1.3.a").is_err());
        assert!(Oid::from_string("1.3.").is_err());
    }

    #[test]
    fn test_oid_from_str_trait() {
        let oid: Oid = "2.16.840.1.113730.3.4.2".parse().unwrap();
        assert_eq!(oid, "2.16.840.1.113730.3.4.2");
    }

    #[test]
    fn test_response_control_parts() {
        let oid = Oid::from_string("1.2.3").unwrap();
        let ctrl = ResponseControl::new(oid.clone(), true, vec![0x30, 0x00]);
        assert_eq!(ctrl.oid(), &oid);
        assert!(ctrl.is_critical());
        assert_eq!(ctrl.value(), &[0x30, 0x00]);

        let (o, c, v) = ctrl.into_parts();
        assert_eq!(o, oid);
        assert!(c);
        assert_eq!(v, vec![0x30, 0x00]);
    }
}
