//! Password policy response control
//!
//! The Password Policy for LDAP Directories Internet-Draft (09) defines a
//! response control a server attaches to bind/modify results to report
//! password policy state. The control value is the BER encoding of:
//!
//! ```text
//! PasswordPolicyResponseValue ::= SEQUENCE {
//!    warning [0] CHOICE {
//!       timeBeforeExpiration [0] INTEGER (0 .. maxInt),
//!       graceAuthNsRemaining [1] INTEGER (0 .. maxInt) } OPTIONAL,
//!    error   [1] ENUMERATED {
//!       passwordExpired             (0),
//!       accountLocked               (1),
//!       changeAfterReset            (2),
//!       passwordModNotAllowed       (3),
//!       mustSupplyOldPassword       (4),
//!       insufficientPasswordQuality (5),
//!       passwordTooShort            (6),
//!       passwordTooYoung            (7),
//!       passwordInHistory           (8) } OPTIONAL }
//! ```
//!
//! [`PasswordPolicyValue`] decodes and encodes this value;
//! [`PasswordPolicyResponse`] pairs the decoded value with the control
//! triple (OID, criticality, raw bytes) it came from.

use ppolicy_asn1::ber::{BerClass, BerNode, BerReader, BerWriter};
use ppolicy_core::{Oid, PpolicyError, PpolicyResult, ResponseControl};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Control type OID of the password policy response control
pub const PASSWORD_POLICY_RESPONSE_OID: &str = "1.3.6.1.4.1.42.2.27.8.5.1";

/// Context tag of the warning CHOICE inside the response value
const TAG_WARNING: u32 = 0;
/// Context tag of the error ENUMERATED inside the response value
const TAG_ERROR: u32 = 1;
/// Context tag of the timeBeforeExpiration CHOICE arm
const TAG_TIME_BEFORE_EXPIRATION: u32 = 0;
/// Context tag of the graceAuthNsRemaining CHOICE arm
const TAG_GRACE_AUTHNS_REMAINING: u32 = 1;

/// The warning CHOICE of the response value
///
/// The encoding carries at most one of the two alternatives, so the type is
/// an enum rather than a pair of optional fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyWarning {
    /// Seconds until the password expires
    TimeBeforeExpiration(i64),
    /// Grace authentications left after password expiry
    GraceAuthNsRemaining(i64),
}

/// Named policy error codes from the Internet-Draft enumeration
///
/// Servers may encode values outside this enumeration; those are kept
/// numerically (see [`PasswordPolicyValue::error_code`]) and simply have no
/// named counterpart here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyError {
    PasswordExpired = 0,
    AccountLocked = 1,
    ChangeAfterReset = 2,
    PasswordModNotAllowed = 3,
    MustSupplyOldPassword = 4,
    InsufficientPasswordQuality = 5,
    PasswordTooShort = 6,
    PasswordTooYoung = 7,
    PasswordInHistory = 8,
}

impl PolicyError {
    /// Map an encoded error code to its named value.
    ///
    /// Returns `None` for codes outside the declared enumeration.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(PolicyError::PasswordExpired),
            1 => Some(PolicyError::AccountLocked),
            2 => Some(PolicyError::ChangeAfterReset),
            3 => Some(PolicyError::PasswordModNotAllowed),
            4 => Some(PolicyError::MustSupplyOldPassword),
            5 => Some(PolicyError::InsufficientPasswordQuality),
            6 => Some(PolicyError::PasswordTooShort),
            7 => Some(PolicyError::PasswordTooYoung),
            8 => Some(PolicyError::PasswordInHistory),
            _ => None,
        }
    }

    /// The encoded code value.
    pub fn code(self) -> i64 {
        self as i64
    }

    /// Human-readable description of the error.
    pub fn text(self) -> &'static str {
        match self {
            PolicyError::PasswordExpired => "Password expired",
            PolicyError::AccountLocked => "Account locked",
            PolicyError::ChangeAfterReset => "Password must be changed",
            PolicyError::PasswordModNotAllowed => "Policy prevents password modification",
            PolicyError::MustSupplyOldPassword => {
                "Policy requires old password in order to change password"
            }
            PolicyError::InsufficientPasswordQuality => "Password fails quality checks",
            PolicyError::PasswordTooShort => "Password is too short for policy",
            PolicyError::PasswordTooYoung => "Password has been changed too recently",
            PolicyError::PasswordInHistory => "New password is in list of old passwords",
        }
    }
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Human-readable description of an optional error code.
///
/// Total over all inputs: absent codes and codes outside the declared
/// enumeration yield `"Unknown error code"`.
pub fn error_text(code: Option<i64>) -> &'static str {
    match code.and_then(PolicyError::from_code) {
        Some(error) => error.text(),
        None => "Unknown error code",
    }
}

/// Decoded PasswordPolicyResponseValue
///
/// Both fields are optional; an empty SEQUENCE is a valid response carrying
/// no notable state. Absence is `None`, never a sentinel — a warning of zero
/// seconds is distinct from no warning at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PasswordPolicyValue {
    warning: Option<PolicyWarning>,
    error_code: Option<i64>,
}

impl PasswordPolicyValue {
    /// Build a value from its parts.
    pub fn new(warning: Option<PolicyWarning>, error_code: Option<i64>) -> Self {
        Self {
            warning,
            error_code,
        }
    }

    /// Decode a PasswordPolicyResponseValue from raw control value bytes.
    ///
    /// # Decoding Process
    /// 1. Parse the buffer; the root element must be a SEQUENCE.
    /// 2. Each child must be context-tagged: tag 0 wraps the warning CHOICE
    ///    arm (itself a context-tagged element whose content octets are the
    ///    INTEGER value), tag 1 carries the error code content octets.
    /// 3. A repeated warning or error element overwrites the earlier one;
    ///    decoded fields reflect sequence order.
    ///
    /// # Error Handling
    /// Returns an error if:
    /// - The buffer is empty, unparseable or the root is not a SEQUENCE
    /// - A child element is not context-tagged
    /// - An outer tag is not 0 or 1, or a warning arm tag is not 0 or 1
    /// - INTEGER/ENUMERATED content is empty or truncated
    pub fn decode(data: &[u8]) -> PpolicyResult<Self> {
        let root =
            BerNode::parse(data).map_err(|e| PpolicyError::MalformedRoot(e.to_string()))?;
        let children = root.children().ok_or_else(|| {
            PpolicyError::MalformedRoot("expecting SEQUENCE root".to_string())
        })?;
        log::trace!("password policy control value = {:?}", root);

        let mut value = Self::default();
        for element in children {
            if element.class() != BerClass::ContextSpecific {
                return Err(PpolicyError::UntaggedElement);
            }
            match element.tag_number() {
                TAG_WARNING => {
                    value.warning = Some(Self::decode_warning(element)?);
                }
                TAG_ERROR => {
                    let content = element.octets().ok_or_else(|| {
                        PpolicyError::PrimitiveDecodeFailure(
                            "constructed error element".to_string(),
                        )
                    })?;
                    let code = BerReader::integer_content(content)
                        .map_err(|e| PpolicyError::PrimitiveDecodeFailure(e.to_string()))?;
                    log::trace!("password policy error {}", code);
                    value.error_code = Some(code);
                }
                other => return Err(PpolicyError::InvalidElementTag(other)),
            }
        }
        Ok(value)
    }

    /// Decode the warning CHOICE arm nested inside a `[0]` element.
    fn decode_warning(element: &BerNode) -> PpolicyResult<PolicyWarning> {
        let content = element.octets().ok_or_else(|| {
            PpolicyError::PrimitiveDecodeFailure("constructed warning element".to_string())
        })?;
        let arm = BerNode::parse(content)
            .map_err(|e| PpolicyError::PrimitiveDecodeFailure(e.to_string()))?;

        let arm_tag = arm.tag_number();
        if arm.class() != BerClass::ContextSpecific {
            return Err(PpolicyError::InvalidWarningTag(arm_tag));
        }
        match arm_tag {
            TAG_TIME_BEFORE_EXPIRATION | TAG_GRACE_AUTHNS_REMAINING => {
                let octets = arm.octets().ok_or_else(|| {
                    PpolicyError::PrimitiveDecodeFailure(
                        "constructed warning arm".to_string(),
                    )
                })?;
                let seconds = BerReader::integer_content(octets)
                    .map_err(|e| PpolicyError::PrimitiveDecodeFailure(e.to_string()))?;
                log::trace!("password policy warning [{}] {}", arm_tag, seconds);
                if arm_tag == TAG_TIME_BEFORE_EXPIRATION {
                    Ok(PolicyWarning::TimeBeforeExpiration(seconds))
                } else {
                    Ok(PolicyWarning::GraceAuthNsRemaining(seconds))
                }
            }
            other => Err(PpolicyError::InvalidWarningTag(other)),
        }
    }

    /// Encode the value back to control value bytes.
    ///
    /// The warning is written as a context `[0]` constructed element wrapping
    /// the context-tagged CHOICE arm; the error as a context `[1]` primitive
    /// element. An empty value encodes as an empty SEQUENCE.
    pub fn encode(&self) -> PpolicyResult<Vec<u8>> {
        let mut fields = BerWriter::new();

        if let Some(warning) = self.warning {
            let (arm_tag, seconds) = match warning {
                PolicyWarning::TimeBeforeExpiration(n) => (TAG_TIME_BEFORE_EXPIRATION, n),
                PolicyWarning::GraceAuthNsRemaining(n) => (TAG_GRACE_AUTHNS_REMAINING, n),
            };
            let mut arm = BerWriter::new();
            arm.write_context(arm_tag, &BerWriter::integer_content(seconds), false)?;
            fields.write_context(TAG_WARNING, arm.as_bytes(), true)?;
        }

        if let Some(code) = self.error_code {
            fields.write_context(TAG_ERROR, &BerWriter::integer_content(code), false)?;
        }

        let mut writer = BerWriter::new();
        writer.write_sequence(fields.as_bytes())?;
        Ok(writer.into_bytes())
    }

    /// The warning CHOICE, if one was encoded.
    pub fn warning(&self) -> Option<PolicyWarning> {
        self.warning
    }

    /// Seconds until password expiry, if a time warning was encoded.
    pub fn time_before_expiration(&self) -> Option<i64> {
        match self.warning {
            Some(PolicyWarning::TimeBeforeExpiration(n)) => Some(n),
            _ => None,
        }
    }

    /// Remaining grace authentications, if a grace warning was encoded.
    pub fn grace_auth_ns_remaining(&self) -> Option<i64> {
        match self.warning {
            Some(PolicyWarning::GraceAuthNsRemaining(n)) => Some(n),
            _ => None,
        }
    }

    /// The raw error code, if an error was encoded.
    pub fn error_code(&self) -> Option<i64> {
        self.error_code
    }

    /// The named error, if the encoded code is in the declared enumeration.
    pub fn error(&self) -> Option<PolicyError> {
        self.error_code.and_then(PolicyError::from_code)
    }

    pub fn has_time_warning(&self) -> bool {
        matches!(self.warning, Some(PolicyWarning::TimeBeforeExpiration(_)))
    }

    pub fn has_grace_warning(&self) -> bool {
        matches!(self.warning, Some(PolicyWarning::GraceAuthNsRemaining(_)))
    }

    pub fn has_error(&self) -> bool {
        self.error_code.is_some()
    }

    /// Human-readable description of the error field.
    pub fn error_text(&self) -> &'static str {
        error_text(self.error_code)
    }
}

/// Password policy response control
///
/// Pairs the control triple received from the server with its decoded value.
/// Constructed once per response control and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasswordPolicyResponse {
    control: ResponseControl,
    value: PasswordPolicyValue,
}

impl PasswordPolicyResponse {
    /// Decode a response control's value and keep the control alongside it.
    pub fn from_control(control: ResponseControl) -> PpolicyResult<Self> {
        let value = PasswordPolicyValue::decode(control.value())?;
        Ok(Self { control, value })
    }

    /// Decode from the control's three parts.
    pub fn decode(oid: Oid, critical: bool, value: &[u8]) -> PpolicyResult<Self> {
        Self::from_control(ResponseControl::new(oid, critical, value.to_vec()))
    }

    /// Find and decode the password policy response in a control set.
    ///
    /// Scans for the well-known OID; a matching control that fails to decode
    /// is logged and skipped, so a malformed extension never aborts the
    /// surrounding operation.
    pub fn find_in(controls: &[ResponseControl]) -> Option<Self> {
        controls
            .iter()
            .filter(|control| *control.oid() == PASSWORD_POLICY_RESPONSE_OID)
            .find_map(|control| match Self::from_control(control.clone()) {
                Ok(response) => Some(response),
                Err(e) => {
                    log::warn!("Undecodable password policy response control: {}", e);
                    None
                }
            })
    }

    /// The decoded response value.
    pub fn value(&self) -> &PasswordPolicyValue {
        &self.value
    }

    /// The control type OID.
    pub fn oid(&self) -> &Oid {
        self.control.oid()
    }

    /// Whether the server marked the control critical.
    pub fn is_critical(&self) -> bool {
        self.control.is_critical()
    }

    /// The raw control value bytes as received.
    pub fn raw_value(&self) -> &[u8] {
        self.control.value()
    }

    /// Seconds until password expiry, if a time warning was encoded.
    pub fn time_before_expiration(&self) -> Option<i64> {
        self.value.time_before_expiration()
    }

    /// Remaining grace authentications, if a grace warning was encoded.
    pub fn grace_auth_ns_remaining(&self) -> Option<i64> {
        self.value.grace_auth_ns_remaining()
    }

    /// The raw error code, if an error was encoded.
    pub fn error_code(&self) -> Option<i64> {
        self.value.error_code()
    }

    /// The named error, if the encoded code is in the declared enumeration.
    pub fn error(&self) -> Option<PolicyError> {
        self.value.error()
    }

    pub fn has_time_warning(&self) -> bool {
        self.value.has_time_warning()
    }

    pub fn has_grace_warning(&self) -> bool {
        self.value.has_grace_warning()
    }

    pub fn has_error(&self) -> bool {
        self.value.has_error()
    }

    /// Human-readable description of the error field.
    pub fn error_text(&self) -> &'static str {
        self.value.error_text()
    }
}

impl fmt::Display for PasswordPolicyResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        match self.value.warning() {
            Some(PolicyWarning::GraceAuthNsRemaining(n)) => {
                parts.push(format!("Grace logins remaining: {}", n));
            }
            Some(PolicyWarning::TimeBeforeExpiration(n)) => {
                parts.push(format!("Time to password expiry: {} seconds", n));
            }
            None => {}
        }
        if let Some(code) = self.value.error_code() {
            parts.push(format!(
                "Password policy error code: {} ({})",
                code,
                self.value.error_text()
            ));
        }
        if parts.is_empty() {
            f.write_str("No password policy state")
        } else {
            f.write_str(&parts.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oid() -> Oid {
        Oid::from_string(PASSWORD_POLICY_RESPONSE_OID).unwrap()
    }

    fn time_warning_value(seconds: i64) -> Vec<u8> {
        PasswordPolicyValue::new(Some(PolicyWarning::TimeBeforeExpiration(seconds)), None)
            .encode()
            .unwrap()
    }

    fn grace_warning_value(count: i64) -> Vec<u8> {
        PasswordPolicyValue::new(Some(PolicyWarning::GraceAuthNsRemaining(count)), None)
            .encode()
            .unwrap()
    }

    #[test]
    fn test_decode_empty_sequence() {
        let value = PasswordPolicyValue::decode(&[0x30, 0x00]).unwrap();
        assert!(!value.has_time_warning());
        assert!(!value.has_grace_warning());
        assert!(!value.has_error());
        assert_eq!(value.time_before_expiration(), None);
        assert_eq!(value.grace_auth_ns_remaining(), None);
        assert_eq!(value.error_code(), None);
    }

    #[test]
    fn test_decode_time_warning_wire_sample() {
        // SEQUENCE { [0] { [0] 3600 } }
        let data = [0x30, 0x06, 0xA0, 0x04, 0x80, 0x02, 0x0E, 0x10];
        let value = PasswordPolicyValue::decode(&data).unwrap();
        assert!(value.has_time_warning());
        assert!(!value.has_grace_warning());
        assert!(!value.has_error());
        assert_eq!(value.time_before_expiration(), Some(3600));
    }

    #[test]
    fn test_decode_grace_warning_wire_sample() {
        // SEQUENCE { [0] { [1] 2 } }
        let data = [0x30, 0x05, 0xA0, 0x03, 0x81, 0x01, 0x02];
        let value = PasswordPolicyValue::decode(&data).unwrap();
        assert!(value.has_grace_warning());
        assert!(!value.has_time_warning());
        assert_eq!(value.grace_auth_ns_remaining(), Some(2));
    }

    #[test]
    fn test_decode_error_wire_sample() {
        // SEQUENCE { [1] 1 }
        let data = [0x30, 0x03, 0x81, 0x01, 0x01];
        let value = PasswordPolicyValue::decode(&data).unwrap();
        assert!(value.has_error());
        assert_eq!(value.error_code(), Some(1));
        assert_eq!(value.error(), Some(PolicyError::AccountLocked));
        assert_eq!(value.error_text(), "Account locked");
    }

    #[test]
    fn test_decode_warning_and_error() {
        // SEQUENCE { [0] { [1] 2 }, [1] 0 }
        let data = [0x30, 0x08, 0xA0, 0x03, 0x81, 0x01, 0x02, 0x81, 0x01, 0x00];
        let value = PasswordPolicyValue::decode(&data).unwrap();
        assert_eq!(value.grace_auth_ns_remaining(), Some(2));
        assert_eq!(value.error(), Some(PolicyError::PasswordExpired));
    }

    #[test]
    fn test_zero_warning_distinct_from_absent() {
        let value = PasswordPolicyValue::decode(&time_warning_value(0)).unwrap();
        assert!(value.has_time_warning());
        assert_eq!(value.time_before_expiration(), Some(0));
    }

    #[test]
    fn test_time_warning_values_round_trip() {
        for seconds in [0i64, 1, 127, 128, 3600, 86400, i64::from(u32::MAX)] {
            let value = PasswordPolicyValue::decode(&time_warning_value(seconds)).unwrap();
            assert!(value.has_time_warning());
            assert!(!value.has_grace_warning());
            assert_eq!(value.time_before_expiration(), Some(seconds));
        }
    }

    #[test]
    fn test_grace_warning_values_round_trip() {
        for count in [0i64, 1, 5, 255, 1000] {
            let value = PasswordPolicyValue::decode(&grace_warning_value(count)).unwrap();
            assert!(value.has_grace_warning());
            assert!(!value.has_time_warning());
            assert_eq!(value.grace_auth_ns_remaining(), Some(count));
        }
    }

    #[test]
    fn test_all_error_codes_round_trip() {
        for code in 0..=8 {
            let encoded = PasswordPolicyValue::new(None, Some(code)).encode().unwrap();
            let value = PasswordPolicyValue::decode(&encoded).unwrap();
            assert!(value.has_error());
            assert_eq!(value.error_code(), Some(code));
            assert_eq!(value.error_text(), PolicyError::from_code(code).unwrap().text());
        }
    }

    #[test]
    fn test_structural_round_trip() {
        let samples = [
            PasswordPolicyValue::default(),
            PasswordPolicyValue::new(Some(PolicyWarning::TimeBeforeExpiration(3600)), None),
            PasswordPolicyValue::new(Some(PolicyWarning::GraceAuthNsRemaining(3)), Some(0)),
            PasswordPolicyValue::new(None, Some(8)),
        ];
        for sample in samples {
            let decoded = PasswordPolicyValue::decode(&sample.encode().unwrap()).unwrap();
            assert_eq!(decoded, sample);
        }
    }

    #[test]
    fn test_empty_buffer_is_malformed_root() {
        assert!(matches!(
            PasswordPolicyValue::decode(&[]),
            Err(PpolicyError::MalformedRoot(_))
        ));
    }

    #[test]
    fn test_non_sequence_root_is_malformed_root() {
        // bare INTEGER 5
        assert!(matches!(
            PasswordPolicyValue::decode(&[0x02, 0x01, 0x05]),
            Err(PpolicyError::MalformedRoot(_))
        ));
    }

    #[test]
    fn test_untagged_child_rejected() {
        // SEQUENCE { INTEGER 5 }
        assert!(matches!(
            PasswordPolicyValue::decode(&[0x30, 0x03, 0x02, 0x01, 0x05]),
            Err(PpolicyError::UntaggedElement)
        ));
    }

    #[test]
    fn test_invalid_element_tag_rejected() {
        // SEQUENCE { [2] 0 }
        assert!(matches!(
            PasswordPolicyValue::decode(&[0x30, 0x03, 0x82, 0x01, 0x00]),
            Err(PpolicyError::InvalidElementTag(2))
        ));
    }

    #[test]
    fn test_invalid_warning_tag_rejected() {
        // SEQUENCE { [0] { [2] 5 } }
        assert!(matches!(
            PasswordPolicyValue::decode(&[0x30, 0x05, 0xA0, 0x03, 0x82, 0x01, 0x05]),
            Err(PpolicyError::InvalidWarningTag(2))
        ));
    }

    #[test]
    fn test_truncated_warning_content_rejected() {
        // warning wraps an empty payload; no CHOICE arm to parse
        assert!(matches!(
            PasswordPolicyValue::decode(&[0x30, 0x02, 0xA0, 0x00]),
            Err(PpolicyError::PrimitiveDecodeFailure(_))
        ));
    }

    #[test]
    fn test_empty_error_content_rejected() {
        // SEQUENCE { [1] with zero-length content }
        assert!(matches!(
            PasswordPolicyValue::decode(&[0x30, 0x02, 0x81, 0x00]),
            Err(PpolicyError::PrimitiveDecodeFailure(_))
        ));
    }

    #[test]
    fn test_out_of_range_error_code_kept_numerically() {
        let encoded = PasswordPolicyValue::new(None, Some(20)).encode().unwrap();
        let value = PasswordPolicyValue::decode(&encoded).unwrap();
        assert!(value.has_error());
        assert_eq!(value.error_code(), Some(20));
        assert_eq!(value.error(), None);
        assert_eq!(value.error_text(), "Unknown error code");
    }

    #[test]
    fn test_duplicate_error_last_wins() {
        // SEQUENCE { [1] 3, [1] 6 }
        let data = [0x30, 0x06, 0x81, 0x01, 0x03, 0x81, 0x01, 0x06];
        let value = PasswordPolicyValue::decode(&data).unwrap();
        assert_eq!(value.error_code(), Some(6));
    }

    #[test]
    fn test_second_warning_overwrites_first() {
        // SEQUENCE { [0] { [0] 3600 }, [0] { [1] 2 } }
        let data = [
            0x30, 0x0B, 0xA0, 0x04, 0x80, 0x02, 0x0E, 0x10, 0xA0, 0x03, 0x81, 0x01, 0x02,
        ];
        let value = PasswordPolicyValue::decode(&data).unwrap();
        assert!(value.has_grace_warning());
        assert!(!value.has_time_warning());
        assert_eq!(value.grace_auth_ns_remaining(), Some(2));
    }

    #[test]
    fn test_error_text_table() {
        let table = [
            (0, "Password expired"),
            (1, "Account locked"),
            (2, "Password must be changed"),
            (3, "Policy prevents password modification"),
            (4, "Policy requires old password in order to change password"),
            (5, "Password fails quality checks"),
            (6, "Password is too short for policy"),
            (7, "Password has been changed too recently"),
            (8, "New password is in list of old passwords"),
        ];
        for (code, text) in table {
            assert_eq!(error_text(Some(code)), text);
            assert_eq!(PolicyError::from_code(code).unwrap().code(), code);
        }
        assert_eq!(error_text(None), "Unknown error code");
        assert_eq!(error_text(Some(99)), "Unknown error code");
        assert_eq!(error_text(Some(-1)), "Unknown error code");
    }

    #[test]
    fn test_response_from_control() {
        let control = ResponseControl::new(oid(), false, time_warning_value(3600));
        let response = PasswordPolicyResponse::from_control(control).unwrap();
        assert_eq!(response.oid(), &oid());
        assert!(!response.is_critical());
        assert_eq!(response.time_before_expiration(), Some(3600));
        assert!(response.has_time_warning());
        assert!(!response.has_grace_warning());
        assert!(!response.has_error());
        assert_eq!(response.raw_value(), &time_warning_value(3600)[..]);
    }

    #[test]
    fn test_response_decode_parts() {
        let response =
            PasswordPolicyResponse::decode(oid(), true, &[0x30, 0x03, 0x81, 0x01, 0x01])
                .unwrap();
        assert!(response.is_critical());
        assert_eq!(response.error(), Some(PolicyError::AccountLocked));
        assert_eq!(response.error_text(), "Account locked");
    }

    #[test]
    fn test_find_in_empty_set() {
        assert!(PasswordPolicyResponse::find_in(&[]).is_none());
    }

    #[test]
    fn test_find_in_picks_matching_oid() {
        let other = ResponseControl::new(
            Oid::from_string("2.16.840.1.113730.3.4.2").unwrap(),
            false,
            vec![],
        );
        let ppolicy = ResponseControl::new(oid(), false, grace_warning_value(1));
        let response = PasswordPolicyResponse::find_in(&[other, ppolicy]).unwrap();
        assert_eq!(response.grace_auth_ns_remaining(), Some(1));
    }

    #[test]
    fn test_find_in_skips_undecodable() {
        let broken = ResponseControl::new(oid(), false, vec![0x02, 0x01, 0x05]);
        let good = ResponseControl::new(oid(), false, time_warning_value(60));
        let response = PasswordPolicyResponse::find_in(&[broken, good]).unwrap();
        assert_eq!(response.time_before_expiration(), Some(60));
    }

    #[test]
    fn test_display_summary() {
        let grace = PasswordPolicyResponse::decode(oid(), false, &grace_warning_value(2))
            .unwrap();
        assert_eq!(grace.to_string(), "Grace logins remaining: 2");

        let time = PasswordPolicyResponse::decode(oid(), false, &time_warning_value(3600))
            .unwrap();
        assert_eq!(time.to_string(), "Time to password expiry: 3600 seconds");

        let error = PasswordPolicyResponse::decode(oid(), false, &[0x30, 0x03, 0x81, 0x01, 0x01])
            .unwrap();
        assert_eq!(
            error.to_string(),
            "Password policy error code: 1 (Account locked)"
        );

        let empty = PasswordPolicyResponse::decode(oid(), false, &[0x30, 0x00]).unwrap();
        assert_eq!(empty.to_string(), "No password policy state");
    }
}
