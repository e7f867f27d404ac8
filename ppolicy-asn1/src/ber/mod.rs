//! BER (Basic Encoding Rules) reader and writer
//!
//! Every BER value is a TLV (Tag-Length-Value) triplet:
//!
//! ```text
//! [Tag] [Length] [Value]
//! ```
//!
//! The tag byte carries the class (universal, application, context-specific,
//! private), a constructed/primitive flag and the tag number:
//!
//! ```text
//! Bits: 8 7 6 5 4 3 2 1
//!       C C P T T T T T
//! ```
//!
//! Lengths use the definite short form (one byte, 0-127) or the definite
//! long form (length-of-length byte followed by big-endian length bytes).
//! Indefinite lengths do not occur in LDAP control values and are rejected.
//!
//! The reader exposes parsed elements as a [`BerNode`] tree: universal
//! SEQUENCEs become lists of child nodes, universal INTEGER/ENUMERATED
//! become numbers, and everything else — including context-tagged elements —
//! keeps its content octets opaque so that the consumer can re-parse them
//! against its own grammar.

pub mod node;
pub mod reader;
pub mod types;
pub mod writer;

pub use node::{BerNode, BerValue};
pub use reader::BerReader;
pub use types::{BerClass, BerLength, BerTag};
pub use writer::BerWriter;
