//! BER reader
//!
//! Reads TLV triplets from a byte buffer and builds [`BerNode`] trees.
//! The reader keeps a position pointer so several elements can be read
//! from the same buffer in sequence.

use crate::ber::node::{BerNode, BerValue};
use crate::ber::types::{BerLength, BerTag, TAG_ENUMERATED, TAG_INTEGER};
use ppolicy_core::{PpolicyError, PpolicyResult};

/// Position-tracked reader over a BER-encoded buffer
pub struct BerReader<'a> {
    buffer: &'a [u8],
    position: usize,
}

impl<'a> BerReader<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    /// Current position in the buffer.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of bytes left to read.
    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.position)
    }

    /// Whether any bytes are left to read.
    pub fn has_remaining(&self) -> bool {
        self.position < self.buffer.len()
    }

    fn read_bytes(&mut self, count: usize) -> PpolicyResult<&'a [u8]> {
        if self.position + count > self.buffer.len() {
            return Err(PpolicyError::Decoding(format!(
                "Buffer exhausted: need {} bytes, have {}",
                count,
                self.buffer.len() - self.position
            )));
        }
        let start = self.position;
        self.position += count;
        Ok(&self.buffer[start..start + count])
    }

    /// Read one TLV triplet.
    ///
    /// # Returns
    ///
    /// Returns `Ok((tag, content, total_bytes_consumed))` if successful.
    pub fn read_tlv(&mut self) -> PpolicyResult<(BerTag, &'a [u8], usize)> {
        let start = self.position;

        let (tag, tag_bytes) = BerTag::decode(&self.buffer[self.position..])?;
        self.position += tag_bytes;

        let (length, length_bytes) = BerLength::decode(&self.buffer[self.position..])?;
        self.position += length_bytes;

        let content = self.read_bytes(length.value())?;
        Ok((tag, content, self.position - start))
    }

    /// Read one element as a typed node.
    ///
    /// Universal SEQUENCEs are parsed into child nodes, universal
    /// INTEGER/ENUMERATED into numbers; all other elements keep their
    /// content octets opaque. See [`BerNode`].
    pub fn read_node(&mut self) -> PpolicyResult<BerNode> {
        let (tag, content, _) = self.read_tlv()?;

        if tag.is_sequence() {
            let mut children = Vec::new();
            let mut inner = BerReader::new(content);
            while inner.has_remaining() {
                children.push(inner.read_node()?);
            }
            return Ok(BerNode::new(tag, BerValue::Constructed(children)));
        }

        let value = if tag.class() == crate::ber::types::BerClass::Universal
            && !tag.is_constructed()
            && tag.number() == TAG_INTEGER
        {
            BerValue::Integer(Self::integer_content(content)?)
        } else if tag.class() == crate::ber::types::BerClass::Universal
            && !tag.is_constructed()
            && tag.number() == TAG_ENUMERATED
        {
            BerValue::Enumerated(Self::integer_content(content)?)
        } else {
            BerValue::Octets(content.to_vec())
        };
        Ok(BerNode::new(tag, value))
    }

    /// Decode INTEGER/ENUMERATED content octets (big-endian two's complement).
    ///
    /// # Errors
    ///
    /// Returns an error for empty content or more than 8 bytes.
    pub fn integer_content(bytes: &[u8]) -> PpolicyResult<i64> {
        if bytes.is_empty() {
            return Err(PpolicyError::Decoding(
                "Empty integer content".to_string(),
            ));
        }
        if bytes.len() > 8 {
            return Err(PpolicyError::Decoding(format!(
                "Integer content too large: {} bytes",
                bytes.len()
            )));
        }

        let mut value = 0i64;
        for &byte in bytes {
            value = (value << 8) | byte as i64;
        }
        // sign extend
        if (bytes[0] & 0x80) != 0 {
            let shift = 64 - bytes.len() * 8;
            value = (value << shift) >> shift;
        }
        Ok(value)
    }
}
