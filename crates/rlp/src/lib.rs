//! # foundry-rlp
//!
//! Canonical Recursive Length Prefix (RLP) encoding and decoding of untyped item trees.
//!
//! An [`Item`] is either an atom (an opaque byte string) or a list of items. [`encode()`] always
//! produces the unique canonical encoding, and [`decode()`] rejects anything that is not one:
//! truncated input, non-minimal lengths, wrapped single bytes and, in strict mode, trailing
//! bytes.
//!
//! ```
//! use foundry_rlp::{Item, decode, encode};
//!
//! let item = Item::List(vec![b"dog".into(), b"god".into(), b"cat".into()]);
//! let encoded = encode(&item);
//! assert_eq!(encoded, b"\xcc\x83dog\x83god\x83cat");
//! assert_eq!(decode(&encoded, true).unwrap(), item);
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate tracing;

mod config;
pub use config::RlpConfig;

mod decode;
pub use decode::{Decoder, decode, decode_prefix};

mod encode;
pub use encode::encode;

mod error;
pub use error::{DecodeError, EncodeError, Error, Result, TypeError};

pub mod header;
pub use header::Header;

mod item;
pub use item::Item;

mod value;
pub use value::{decode_value, encode_value};
