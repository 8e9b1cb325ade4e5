//! Error types returned by the codec.

/// RLP result type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Any error the codec can return.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The caller passed a value of the wrong shape.
    #[error(transparent)]
    Type(#[from] TypeError),
    /// A dynamic value could not be classified as an atom or a list.
    #[error(transparent)]
    Encode(#[from] EncodeError),
    /// The input bytes are not a canonical RLP encoding.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Raised before any byte-level work when the input to a decode entry point is not a byte
/// sequence.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    /// Expected a byte sequence.
    #[error("expected a byte sequence, found {found}")]
    ExpectedBytes {
        /// Kind of value that was found instead
        found: &'static str,
    },
}

/// Errors that can occur when converting a dynamic value into an [`Item`](crate::Item).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// The value is neither a byte sequence nor a list of encodable values.
    #[error("cannot encode value: {kind} at `{path}`")]
    Unencodable {
        /// Kind of the rejected value, e.g. `number` or `text`
        kind: &'static str,
        /// Location of the rejected value inside the input, `/` for the root
        path: String,
    },
}

/// Canonicality and truncation violations found while decoding.
///
/// Every variant records the offset into the input at which the violation was detected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The input ended before a declared length was satisfied.
    #[error("input too short at offset {offset}: needed {needed} bytes, {remaining} remaining")]
    InputTooShort { offset: usize, needed: usize, remaining: usize },
    /// A list child declares more bytes than its enclosing list's payload holds.
    #[error(
        "item at offset {offset} overruns its list payload: needed {needed} bytes, {available} available"
    )]
    ListPayloadOverrun { offset: usize, needed: usize, available: usize },
    /// A long-form length has a leading zero byte.
    #[error("leading zero in length at offset {offset}")]
    LeadingZero { offset: usize },
    /// A long-form length was used for a payload shorter than 56 bytes.
    #[error("non-canonical size at offset {offset}: long form used for length {length}")]
    NonCanonicalSize { offset: usize, length: usize },
    /// A single byte below `0x80` was wrapped in a length-1 string prefix.
    #[error("non-canonical single byte {byte:#04x} at offset {offset}")]
    NonCanonicalSingleByte { offset: usize, byte: u8 },
    /// A declared length does not fit in `usize`.
    #[error("length at offset {offset} overflows")]
    Overflow { offset: usize },
    /// Lists are nested deeper than the decoder allows.
    #[error("list at offset {offset} exceeds the maximum nesting depth of {max_depth}")]
    DepthLimitExceeded { offset: usize, max_depth: usize },
    /// Bytes remain after the top-level item in strict mode.
    #[error("{remaining} trailing bytes after the item ending at offset {offset}")]
    TrailingBytes { offset: usize, remaining: usize },
}

impl DecodeError {
    /// Returns the input offset at which the error was detected.
    pub const fn offset(&self) -> usize {
        match *self {
            Self::InputTooShort { offset, .. }
            | Self::ListPayloadOverrun { offset, .. }
            | Self::LeadingZero { offset }
            | Self::NonCanonicalSize { offset, .. }
            | Self::NonCanonicalSingleByte { offset, .. }
            | Self::Overflow { offset }
            | Self::DepthLimitExceeded { offset, .. }
            | Self::TrailingBytes { offset, .. } => offset,
        }
    }

    /// Returns `true` if the input was cut short.
    pub const fn is_truncation(&self) -> bool {
        matches!(self, Self::InputTooShort { .. })
    }

    /// Returns `true` if the item itself was valid but followed by unconsumed bytes.
    pub const fn is_trailing(&self) -> bool {
        matches!(self, Self::TrailingBytes { .. })
    }
}
