//! BER writer
//!
//! Builds BER TLV triplets into an owned buffer. Used by servers emitting
//! control values and by tests constructing wire samples.

use crate::ber::types::{
    BerLength, BerTag, TAG_ENUMERATED, TAG_INTEGER, TAG_OCTET_STRING, TAG_SEQUENCE,
};
use ppolicy_core::PpolicyResult;

/// BER writer accumulating TLV triplets
pub struct BerWriter {
    buffer: Vec<u8>,
}

impl BerWriter {
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Write one TLV triplet.
    pub fn write_tlv(&mut self, tag: &BerTag, content: &[u8]) -> PpolicyResult<()> {
        self.buffer.extend_from_slice(&tag.encode());
        self.buffer
            .extend_from_slice(&BerLength::new(content.len()).encode());
        self.buffer.extend_from_slice(content);
        Ok(())
    }

    /// Write a universal INTEGER.
    pub fn write_integer(&mut self, value: i64) -> PpolicyResult<()> {
        let tag = BerTag::universal(false, TAG_INTEGER);
        let content = Self::integer_content(value);
        self.write_tlv(&tag, &content)
    }

    /// Write a universal ENUMERATED.
    pub fn write_enumerated(&mut self, value: i64) -> PpolicyResult<()> {
        let tag = BerTag::universal(false, TAG_ENUMERATED);
        let content = Self::integer_content(value);
        self.write_tlv(&tag, &content)
    }

    /// Write a universal OCTET STRING.
    pub fn write_octet_string(&mut self, content: &[u8]) -> PpolicyResult<()> {
        let tag = BerTag::universal(false, TAG_OCTET_STRING);
        self.write_tlv(&tag, content)
    }

    /// Write a universal SEQUENCE around already-encoded element TLVs.
    pub fn write_sequence(&mut self, elements: &[u8]) -> PpolicyResult<()> {
        let tag = BerTag::universal(true, TAG_SEQUENCE);
        self.write_tlv(&tag, elements)
    }

    /// Write a context-specific element around already-encoded content.
    pub fn write_context(
        &mut self,
        number: u32,
        content: &[u8],
        constructed: bool,
    ) -> PpolicyResult<()> {
        let tag = BerTag::context(constructed, number);
        self.write_tlv(&tag, content)
    }

    /// Minimal two's-complement content octets for an integer value.
    ///
    /// Implicitly tagged INTEGER/ENUMERATED fields carry these octets
    /// directly under the context tag, without a universal header.
    pub fn integer_content(value: i64) -> Vec<u8> {
        let mut bytes = value.to_be_bytes().to_vec();
        // strip redundant leading bytes, keeping the sign bit intact
        while bytes.len() > 1 {
            if bytes[0] == 0x00 && (bytes[1] & 0x80) == 0 {
                bytes.remove(0);
            } else if bytes[0] == 0xFF && (bytes[1] & 0x80) != 0 {
                bytes.remove(0);
            } else {
                break;
            }
        }
        bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for BerWriter {
    fn default() -> Self {
        Self::new()
    }
}
