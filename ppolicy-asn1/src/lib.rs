//! Generic BER processing for LDAP control values
//!
//! This crate provides the BER (Basic Encoding Rules) layer consumed by the
//! control decoders: a TLV reader and writer, and a typed node tree that
//! exposes one parsed element as a tagged value.
//!
//! Control-specific grammars are not known at this layer. A control decoder
//! parses its value bytes into a [`ber::BerNode`] and walks the tree against
//! its own fixed schema.

pub mod ber;

pub use ber::{BerClass, BerLength, BerNode, BerReader, BerTag, BerValue, BerWriter};
