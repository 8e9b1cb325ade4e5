//! Strict parsing of canonical RLP into [`Item`] trees.

use crate::{DecodeError, Item, RlpConfig, header::Header};

/// Decodes the item at the start of `buf`.
///
/// In strict mode the item must span the whole buffer; otherwise trailing bytes after the first
/// complete item are discarded. Canonicality rules inside the item are enforced either way.
pub fn decode(buf: &[u8], strict: bool) -> Result<Item, DecodeError> {
    Decoder::new().strict(strict).decode(buf)
}

/// Decodes the first item of `buf`, returning it together with the unparsed remainder.
pub fn decode_prefix(buf: &[u8]) -> Result<(Item, &[u8]), DecodeError> {
    Decoder::new().decode_prefix(buf)
}

/// A configured RLP decoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoder {
    strict: bool,
    max_depth: Option<usize>,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    /// Creates a strict decoder without a depth limit.
    ///
    /// Nesting is still bounded by the input, since every list level takes at least one prefix
    /// byte.
    pub const fn new() -> Self {
        Self { strict: true, max_depth: None }
    }

    /// Sets whether trailing bytes after the top-level item are rejected.
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Sets the maximum list nesting depth, `None` for unbounded.
    ///
    /// Decoding recurses once per list level, so untrusted input should be decoded with a limit
    /// that fits the caller's stack.
    pub const fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Returns `true` if trailing bytes are rejected.
    pub const fn is_strict(&self) -> bool {
        self.strict
    }

    /// Decodes the item at the start of `buf` according to this decoder's strictness.
    pub fn decode(&self, buf: &[u8]) -> Result<Item, DecodeError> {
        trace!(len = buf.len(), strict = self.strict, "decoding rlp");
        let (item, rest) = self.decode_prefix(buf)?;
        if !rest.is_empty() {
            let offset = buf.len() - rest.len();
            if self.strict {
                trace!(offset, remaining = rest.len(), "rejecting trailing bytes");
                return Err(DecodeError::TrailingBytes { offset, remaining: rest.len() });
            }
            debug!(offset, remaining = rest.len(), "discarding trailing bytes");
        }
        Ok(item)
    }

    /// Decodes the first item of `buf`, returning it together with the unparsed remainder.
    ///
    /// Strictness does not apply here: the remainder is returned as-is.
    pub fn decode_prefix<'a>(&self, buf: &'a [u8]) -> Result<(Item, &'a [u8]), DecodeError> {
        let (item, end) = self.decode_item(buf, 0, buf.len(), 0)?;
        Ok((item, &buf[end..]))
    }

    /// Decodes the item at `pos` within `pos..end`, returning it and the offset just past it.
    fn decode_item(
        &self,
        input: &[u8],
        pos: usize,
        end: usize,
        depth: usize,
    ) -> Result<(Item, usize), DecodeError> {
        let (header, start) = Header::decode_at(input, pos, end)?;
        // the header guarantees the payload fits within `start..end`
        let payload_end = start + header.payload_length;

        if !header.list {
            return Ok((Item::Atom(input[start..payload_end].to_vec()), payload_end));
        }

        if let Some(max_depth) = self.max_depth
            && depth >= max_depth
        {
            return Err(DecodeError::DepthLimitExceeded { offset: pos, max_depth });
        }

        let mut items = Vec::new();
        let mut cursor = start;
        while cursor < payload_end {
            let (item, next) = self.decode_item(input, cursor, payload_end, depth + 1)?;
            items.push(item);
            cursor = next;
        }
        Ok((Item::List(items), payload_end))
    }
}

impl From<&RlpConfig> for Decoder {
    fn from(config: &RlpConfig) -> Self {
        Self::new().strict(config.strict).max_depth(config.max_depth)
    }
}
