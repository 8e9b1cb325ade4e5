//! Canonical encoding of [`Item`] trees.

use crate::{
    Item,
    header::{EMPTY_STRING_CODE, Header},
};
use bytes::BufMut;

/// Encodes `item` into a freshly allocated buffer of exactly [`Item::length`] bytes.
pub fn encode(item: &Item) -> Vec<u8> {
    let mut payload_lengths = Vec::new();
    let length = item.collect_payload_lengths(&mut payload_lengths);
    let mut out = Vec::with_capacity(length);
    item.encode_with(&mut out, &payload_lengths, &mut 0);
    out
}

impl Item {
    /// Appends the canonical encoding of this item to `out`.
    ///
    /// Every node is visited twice: once to size the list payloads, once to write them.
    pub fn encode(&self, out: &mut dyn BufMut) {
        let mut payload_lengths = Vec::new();
        self.collect_payload_lengths(&mut payload_lengths);
        self.encode_with(out, &payload_lengths, &mut 0);
    }

    /// Returns the length of the encoding, including the header.
    pub fn length(&self) -> usize {
        match self {
            Self::Atom(data) => atom_length(data),
            Self::List(items) => {
                Header::list(items.iter().map(Self::length).sum()).length_with_payload()
            }
        }
    }

    /// Records the payload length of every list in pre-order and returns the encoded length.
    fn collect_payload_lengths(&self, payload_lengths: &mut Vec<usize>) -> usize {
        match self {
            Self::Atom(data) => atom_length(data),
            Self::List(items) => {
                let slot = payload_lengths.len();
                payload_lengths.push(0);
                let payload_length =
                    items.iter().map(|item| item.collect_payload_lengths(payload_lengths)).sum();
                payload_lengths[slot] = payload_length;
                Header::list(payload_length).length_with_payload()
            }
        }
    }

    /// Writes the encoding, taking list payload lengths from `payload_lengths` in pre-order.
    fn encode_with(&self, out: &mut dyn BufMut, payload_lengths: &[usize], next: &mut usize) {
        match self {
            Self::Atom(data) => {
                if let [byte] = data.as_slice()
                    && *byte < EMPTY_STRING_CODE
                {
                    out.put_u8(*byte);
                } else {
                    Header::string(data.len()).encode(out);
                    out.put_slice(data);
                }
            }
            Self::List(items) => {
                Header::list(payload_lengths[*next]).encode(out);
                *next += 1;
                for item in items {
                    item.encode_with(out, payload_lengths, next);
                }
            }
        }
    }
}

const fn atom_length(data: &[u8]) -> usize {
    match data {
        [byte] if *byte < EMPTY_STRING_CODE => 1,
        _ => Header::string(data.len()).length_with_payload(),
    }
}
