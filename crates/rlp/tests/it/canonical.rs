//! Known vectors for canonical encodings and for inputs that must be rejected.

use alloy_primitives::hex;
use foundry_rlp::{DecodeError, Error, Item, TypeError, decode, decode_value, encode, encode_value};
use serde_json::json;
use similar_asserts::assert_eq;

fn atom(data: &[u8]) -> Item {
    Item::Atom(data.to_vec())
}

/// Header of mainnet block 400000.
fn block_400000_header() -> Item {
    Item::List(vec![
        atom(&hex!("1e77d8f1267348b516ebc4f4da1e2aa59f85f0cbd853949500ffac8bfc38ba14")),
        atom(&hex!("1dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d49347")),
        atom(&hex!("2a65aca4d5fc5b5c859090a6c34d164135398226")),
        atom(&hex!("0b5e4386680f43c224c5c037efc0b645c8e1c3f6b30da0eec07272b4e6f8cd89")),
        atom(&hex!("56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421")),
        atom(&hex!("56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421")),
        atom(&[0u8; 256]),
        atom(&hex!("057a418a7c3e")),
        atom(&hex!("061a80")),
        atom(&hex!("2fefd8")),
        atom(&[]),
        atom(&hex!("5622efdc")),
        atom(&hex!("d583010202844765746885676f312e35856c696e7578")),
        atom(&hex!("3fbea7af642a4e20cd93a945a1f5e23bd72fc5261153e09102cf718980aeff38")),
        atom(&hex!("6af23caae95692ef")),
    ])
}

#[test]
fn round_trips_known_items() {
    let cases = [
        (atom(b""), hex!("80").to_vec()),
        (atom(b"asdf"), hex!("8461736466").to_vec()),
        (atom(b"fds89032#$@%"), hex!("8c666473383930333223244025").to_vec()),
        (atom(b"dfsa"), hex!("8464667361").to_vec()),
        (Item::List(vec![atom(b"dfsa"), atom(b"")]), hex!("c6846466736180").to_vec()),
        (Item::empty_list(), hex!("c0").to_vec()),
        (
            Item::List(vec![
                atom(b"fdsa"),
                Item::List(vec![atom(b"dfs"), Item::List(vec![atom(b"jfdkl")])]),
            ]),
            hex!("d18466647361cb83646673c6856a66646b6c").to_vec(),
        ),
    ];
    for (item, expected) in cases {
        let encoded = encode(&item);
        assert_eq!(encoded, expected, "{item}");
        assert_eq!(decode(&encoded, true).unwrap(), item);
    }
}

#[test]
fn round_trips_block_header() {
    let header = block_400000_header();
    let encoded = encode(&header);
    assert_eq!(encoded.len(), 534);
    assert_eq!(encoded[..4], hex!("f90213a0"));
    assert_eq!(decode(&encoded, true).unwrap(), header);
}

#[test]
fn decodes_special_cases() {
    assert_eq!(decode(&hex!("c0"), true).unwrap(), Item::empty_list());
    assert_eq!(
        decode(&hex!("cc83646f6783676f6483636174"), true).unwrap(),
        Item::List(vec![atom(b"dog"), atom(b"god"), atom(b"cat")])
    );
    assert_eq!(
        decode(&hex!("c6827a77c10401"), true).unwrap(),
        Item::List(vec![atom(b"zw"), Item::List(vec![atom(&[0x04])]), atom(&[0x01])])
    );
}

#[test]
fn encodes_special_cases() {
    assert_eq!(encode(&Item::empty_list()), [0xC0]);
    assert_eq!(
        encode(&Item::List(vec![atom(b"dog"), atom(b"god"), atom(b"cat")])),
        hex!("cc83646f6783676f6483636174")
    );
    assert_eq!(
        encode(&Item::List(vec![atom(b"zw"), Item::List(vec![atom(&[0x04])]), atom(&[0x01])])),
        hex!("c6827a77c10401")
    );
}

#[test]
fn rejects_invalid_deserializations() {
    let cases: [(&[u8], DecodeError); 9] = [
        (&hex!("c000"), DecodeError::TrailingBytes { offset: 1, remaining: 1 }),
        (&hex!("b8056d6f6f7365"), DecodeError::NonCanonicalSize { offset: 0, length: 5 }),
        (
            &hex!("cc83646f6783676f648363617400"),
            DecodeError::TrailingBytes { offset: 13, remaining: 1 },
        ),
        (&hex!("83646f6700"), DecodeError::TrailingBytes { offset: 4, remaining: 1 }),
        (b"", DecodeError::InputTooShort { offset: 0, needed: 1, remaining: 0 }),
        (b"\x83do", DecodeError::InputTooShort { offset: 0, needed: 4, remaining: 3 }),
        (b"\xb8\x00", DecodeError::LeadingZero { offset: 1 }),
        (b"\xb9\x00\x00", DecodeError::LeadingZero { offset: 1 }),
        (b"\xba\x00\x02\xff\xff", DecodeError::LeadingZero { offset: 1 }),
    ];
    for (input, expected) in cases {
        assert_eq!(decode(input, true), Err(expected), "{}", hex::encode(input));
    }
}

#[test]
fn nonstrict_deserializations() {
    assert_eq!(decode(&hex!("c000"), false).unwrap(), Item::empty_list());
    assert_eq!(
        decode(&hex!("cc83646f6783676f648363617400"), false).unwrap(),
        Item::List(vec![atom(b"dog"), atom(b"god"), atom(b"cat")])
    );
    assert_eq!(decode(&hex!("83646f6700"), false).unwrap(), atom(b"dog"));
}

#[test]
fn rejects_invalid_serializations() {
    for value in [json!(0), json!(32), json!(["asdf", ["fdsa", [5]]]), json!("str")] {
        let err = encode_value(&value).unwrap_err();
        assert!(matches!(err, Error::Encode(_)), "{value}");
        assert!(err.to_string().starts_with("cannot encode value"), "{err}");
    }
}

#[test]
fn decode_rejects_wrong_input_types() {
    for value in [json!(null), json!("asdf")] {
        assert!(matches!(
            decode_value(&value, true),
            Err(Error::Type(TypeError::ExpectedBytes { .. }))
        ));
    }
}

#[test]
fn rejects_non_canonical_single_bytes() {
    for byte in 0..0x80u8 {
        assert_eq!(
            decode(&[0x81, byte], true),
            Err(DecodeError::NonCanonicalSingleByte { offset: 0, byte })
        );
        assert_eq!(decode(&[byte], true), Ok(atom(&[byte])));
    }
    assert_eq!(decode(&[0x81, 0x80], true), Ok(atom(&[0x80])));
}

#[test]
fn rejects_long_form_for_short_payloads() {
    // a 3 byte list in long form
    assert_eq!(
        decode(&hex!("f803c0c0c0"), true),
        Err(DecodeError::NonCanonicalSize { offset: 0, length: 3 })
    );
    // 55 bytes is the largest short payload
    let mut long = vec![0xB8, 55];
    long.extend([0xFF; 55]);
    assert_eq!(
        decode(&long, true),
        Err(DecodeError::NonCanonicalSize { offset: 0, length: 55 })
    );
}

#[test]
fn rejects_huge_declared_lengths_without_allocating() {
    // claims a payload of 2^32 - 1 bytes
    let input = hex!("bbffffffff00");
    let err = decode(&input, false).unwrap_err();
    assert!(err.is_truncation(), "{err}");

    let input = hex!("fbffffffffc0");
    assert!(decode(&input, false).unwrap_err().is_truncation());
}
