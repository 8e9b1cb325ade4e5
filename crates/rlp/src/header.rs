//! The length-prefix framing shared by the encoder and the decoder.

use crate::DecodeError;
use bytes::BufMut;

/// Prefix of the empty string, and the base of short string prefixes.
pub const EMPTY_STRING_CODE: u8 = 0x80;

/// Prefix of the empty list, and the base of short list prefixes.
pub const EMPTY_LIST_CODE: u8 = 0xC0;

/// Base of long string prefixes: `0xB7 + length of the length`.
pub const LONG_STRING_CODE: u8 = 0xB7;

/// Base of long list prefixes: `0xF7 + length of the length`.
pub const LONG_LIST_CODE: u8 = 0xF7;

/// Largest payload that is framed with a single prefix byte.
pub const MAX_SHORT_PAYLOAD: usize = 55;

/// The header of an RLP item.
///
/// A single byte in `0x00..=0x7F` is its own encoding and has no header on the wire; decoding
/// it yields a string header with a payload length of 1 that starts at the prefix byte itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Header {
    /// True if list, false otherwise.
    pub list: bool,
    /// Length of the payload in bytes.
    pub payload_length: usize,
}

impl Header {
    /// Creates a string header.
    pub const fn string(payload_length: usize) -> Self {
        Self { list: false, payload_length }
    }

    /// Creates a list header.
    pub const fn list(payload_length: usize) -> Self {
        Self { list: true, payload_length }
    }

    /// Decodes an RLP header from the given buffer, advancing it to the start of the payload.
    ///
    /// A single byte below `0x80` is its own payload, so the buffer is not advanced for it. On
    /// success the declared payload is guaranteed to fit in the remaining buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is too short or the header is not canonical.
    pub fn decode(buf: &mut &[u8]) -> Result<Self, DecodeError> {
        let (header, payload_start) = Self::decode_at(buf, 0, buf.len())?;
        *buf = &buf[payload_start..];
        Ok(header)
    }

    /// Decodes the header of the item starting at `pos`, where `end` bounds the enclosing
    /// region: `input.len()` at the top level, or the end of the enclosing list's payload.
    ///
    /// Returns the header and the offset at which its payload starts. The declared payload is
    /// guaranteed to fit within `pos..end`. Callers must uphold `pos <= end <= input.len()`.
    pub(crate) fn decode_at(
        input: &[u8],
        pos: usize,
        end: usize,
    ) -> Result<(Self, usize), DecodeError> {
        debug_assert!(pos <= end && end <= input.len());
        let region = &input[pos..end];
        let Some(&prefix) = region.first() else {
            return Err(overrun(input, pos, end, 1));
        };

        let (header, payload_start) = match prefix {
            0x00..=0x7F => return Ok((Self::string(1), pos)),

            EMPTY_STRING_CODE..=LONG_STRING_CODE => {
                let payload_length = (prefix - EMPTY_STRING_CODE) as usize;
                if payload_length == 1
                    && let Some(&byte) = region.get(1)
                    && byte < EMPTY_STRING_CODE
                {
                    return Err(DecodeError::NonCanonicalSingleByte { offset: pos, byte });
                }
                (Self::string(payload_length), pos + 1)
            }

            0xB8..=0xBF => {
                let (payload_length, start) =
                    decode_long_length(input, pos, end, prefix - LONG_STRING_CODE)?;
                (Self::string(payload_length), start)
            }

            EMPTY_LIST_CODE..=LONG_LIST_CODE => {
                (Self::list((prefix - EMPTY_LIST_CODE) as usize), pos + 1)
            }

            0xF8..=0xFF => {
                let (payload_length, start) =
                    decode_long_length(input, pos, end, prefix - LONG_LIST_CODE)?;
                (Self::list(payload_length), start)
            }
        };

        if header.payload_length > end - payload_start {
            let needed = (payload_start - pos).saturating_add(header.payload_length);
            return Err(overrun(input, pos, end, needed));
        }

        Ok((header, payload_start))
    }

    /// Encodes the header into the `out` buffer.
    pub fn encode(&self, out: &mut dyn BufMut) {
        if self.payload_length <= MAX_SHORT_PAYLOAD {
            let code = if self.list { EMPTY_LIST_CODE } else { EMPTY_STRING_CODE };
            out.put_u8(code + self.payload_length as u8);
        } else {
            let len_be = self.payload_length.to_be_bytes();
            let len_be = &len_be[self.payload_length.leading_zeros() as usize / 8..];
            let code = if self.list { LONG_LIST_CODE } else { LONG_STRING_CODE };
            out.put_u8(code + len_be.len() as u8);
            out.put_slice(len_be);
        }
    }

    /// Returns the length of the encoded header.
    pub const fn length(&self) -> usize {
        length_of_length(self.payload_length)
    }

    /// Returns the total length of the encoded header and payload.
    pub const fn length_with_payload(&self) -> usize {
        self.length() + self.payload_length
    }
}

/// Returns the number of bytes a header takes for a payload of the given length.
pub const fn length_of_length(payload_length: usize) -> usize {
    if payload_length <= MAX_SHORT_PAYLOAD {
        1
    } else {
        1 + size_of::<usize>() - payload_length.leading_zeros() as usize / 8
    }
}

/// Reads the big-endian length that follows a long-form prefix at `pos`.
///
/// Returns the length and the offset of the first payload byte.
fn decode_long_length(
    input: &[u8],
    pos: usize,
    end: usize,
    len_of_len: u8,
) -> Result<(usize, usize), DecodeError> {
    let len_of_len = len_of_len as usize;
    let start = pos + 1;
    let Some(len_bytes) = input[..end].get(start..start + len_of_len) else {
        return Err(overrun(input, pos, end, 1 + len_of_len));
    };

    // `len_of_len` is in 1..=8, so `len_bytes` is never empty
    if len_bytes[0] == 0 {
        return Err(DecodeError::LeadingZero { offset: start });
    }
    if len_of_len > size_of::<usize>() {
        return Err(DecodeError::Overflow { offset: start });
    }

    let length = len_bytes.iter().fold(0usize, |acc, &byte| (acc << 8) | byte as usize);
    if length <= MAX_SHORT_PAYLOAD {
        return Err(DecodeError::NonCanonicalSize { offset: pos, length });
    }

    Ok((length, start + len_of_len))
}

/// Builds the error for an item at `pos` that needs more than the `pos..end` region holds.
fn overrun(input: &[u8], pos: usize, end: usize, needed: usize) -> DecodeError {
    let remaining = end - pos;
    if end < input.len() {
        DecodeError::ListPayloadOverrun { offset: pos, needed, available: remaining }
    } else {
        DecodeError::InputTooShort { offset: pos, needed, remaining }
    }
}
