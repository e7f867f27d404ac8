//! ppolicy_rs - LDAP password policy response control library
//!
//! This library decodes the password policy response control defined in the
//! Password Policy for LDAP Directories Internet-Draft (09), exposing expiry
//! warnings, remaining grace authentications and policy error codes as typed
//! fields.
//!
//! # Architecture
//!
//! The library is organized as a workspace with multiple crates:
//!
//! - `ppolicy-core`: Core types and error handling
//! - `ppolicy-asn1`: Generic BER reader/writer and node tree
//! - `ppolicy-controls`: Control-specific decoders
//!
//! # Usage
//!
//! ```no_run
//! use ppolicy::controls::PasswordPolicyResponse;
//! use ppolicy::ResponseControl;
//!
//! # fn example(controls: &[ResponseControl]) {
//! if let Some(response) = PasswordPolicyResponse::find_in(controls) {
//!     if let Some(seconds) = response.time_before_expiration() {
//!         println!("Time to password expiry: {} seconds", seconds);
//!     }
//! }
//! # }
//! ```

// Re-export core types
pub use ppolicy_core::{Oid, PpolicyError, PpolicyResult, ResponseControl};

// Re-export the BER layer
pub mod asn1 {
    pub use ppolicy_asn1::*;
}

// Re-export control decoders
pub mod controls {
    pub use ppolicy_controls::*;
}
