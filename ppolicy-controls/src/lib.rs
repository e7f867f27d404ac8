//! LDAP response control decoders
//!
//! This crate interprets control-specific value bytes returned by a
//! directory server. Currently it implements the password policy response
//! control from the Password Policy for LDAP Directories Internet-Draft
//! (OID 1.3.6.1.4.1.42.2.27.8.5.1).

pub mod password_policy;

pub use password_policy::{
    error_text, PasswordPolicyResponse, PasswordPolicyValue, PolicyError, PolicyWarning,
    PASSWORD_POLICY_RESPONSE_OID,
};
