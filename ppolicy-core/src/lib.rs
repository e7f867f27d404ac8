//! Core types and utilities for the LDAP password policy control
//!
//! This crate provides the fundamental types shared by the rest of the
//! workspace: the central error type, the validated OID string type, and
//! the response-control record handed back by a directory server.

pub mod control;
pub mod error;

pub use control::{Oid, ResponseControl};
pub use error::{PpolicyError, PpolicyResult};
