use alloy_primitives::hex;
use serde::{Deserialize, Deserializer, Serialize, Serializer, ser::SerializeSeq};
use std::fmt::{self, Display, Formatter, Write};

/// Arbitrary nested data
///
/// `Item::List(vec![])` is equivalent to `[]`,
/// `Item::List(vec![Item::Atom(vec![])])` is equivalent to `[""]`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Item {
    /// An opaque byte string.
    Atom(Vec<u8>),
    /// An ordered sequence of items.
    List(Vec<Self>),
}

impl Item {
    /// Returns the empty list.
    pub const fn empty_list() -> Self {
        Self::List(Vec::new())
    }

    /// Returns `true` if this is a list.
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Returns the bytes of an atom, `None` for lists.
    pub fn as_atom(&self) -> Option<&[u8]> {
        match self {
            Self::Atom(data) => Some(data),
            Self::List(_) => None,
        }
    }

    /// Returns the children of a list, `None` for atoms.
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::Atom(_) => None,
            Self::List(items) => Some(items),
        }
    }

    /// Consumes the item, returning the bytes of an atom.
    pub fn into_atom(self) -> Option<Vec<u8>> {
        match self {
            Self::Atom(data) => Some(data),
            Self::List(_) => None,
        }
    }

    /// Consumes the item, returning the children of a list.
    pub fn into_list(self) -> Option<Vec<Self>> {
        match self {
            Self::Atom(_) => None,
            Self::List(items) => Some(items),
        }
    }

    /// Returns the nesting depth: 0 for atoms, 1 for a list of atoms and so on.
    pub fn depth(&self) -> usize {
        match self {
            Self::Atom(_) => 0,
            Self::List(items) => 1 + items.iter().map(Self::depth).max().unwrap_or(0),
        }
    }
}

impl FromIterator<Self> for Item {
    fn from_iter<T: IntoIterator<Item = Self>>(iter: T) -> Self {
        Self::List(iter.into_iter().collect())
    }
}

impl From<Vec<u8>> for Item {
    fn from(data: Vec<u8>) -> Self {
        Self::Atom(data)
    }
}

impl From<&[u8]> for Item {
    fn from(data: &[u8]) -> Self {
        Self::Atom(data.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Item {
    fn from(data: &[u8; N]) -> Self {
        Self::Atom(data.to_vec())
    }
}

impl From<Vec<Self>> for Item {
    fn from(items: Vec<Self>) -> Self {
        Self::List(items)
    }
}

// Display as hex values
impl Display for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atom(data) => {
                write!(f, "\"{}\"", hex::encode_prefixed(data))?;
            }
            Self::List(items) => {
                f.write_char('[')?;
                let mut iter = items.iter().peekable();
                while let Some(item) = iter.next() {
                    write!(f, "{item}")?;
                    if iter.peek().is_some() {
                        f.write_char(',')?;
                    }
                }
                f.write_char(']')?;
            }
        };
        Ok(())
    }
}

/// Serializes atoms as `0x`-prefixed hex strings and lists as sequences.
impl Serialize for Item {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Atom(data) => serializer.serialize_str(&hex::encode_prefixed(data)),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Item {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(serde::de::Error::custom)
    }
}
