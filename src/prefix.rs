//! Key prefix normalization.
//!
//! A prefix may be given as a string, an integer, or a symbol-like token.
//! Every variant has exactly one canonical string form; the prefix stored by
//! a [`PrefixedCache`](crate::PrefixedCache) is that form followed by a
//! literal `-`.
//!
//! ## Example Usage
//!
//! ```
//! use prefixkit::prefix::{KeyPrefix, Symbol};
//!
//! assert_eq!(KeyPrefix::from("pr").normalize(), "pr-");
//! assert_eq!(KeyPrefix::from(123).normalize(), "123-");
//! assert_eq!(KeyPrefix::from(Symbol::new("pr")).normalize(), "pr-");
//! ```

use std::borrow::Cow;
use std::fmt;

/// Separator appended after the canonical prefix.
pub const PREFIX_SEPARATOR: char = '-';

/// A symbol-like token, e.g. an enumerated store or namespace name.
///
/// Displays as its bare name, without any sigil.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(Cow<'static, str>);

impl Symbol {
    /// Creates a symbol from a static name.
    pub const fn new(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Returns the symbol name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Symbol {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Accepted prefix inputs.
///
/// `UInt` holds only values above `i64::MAX`; smaller integers are `Int`.
/// Serialized, a `Token` becomes a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(from = "RawPrefix", into = "RawPrefix")
)]
pub enum KeyPrefix {
    Str(String),
    Int(i64),
    UInt(u64),
    Token(Symbol),
}

impl KeyPrefix {
    /// Canonical string form followed by [`PREFIX_SEPARATOR`].
    pub fn normalize(&self) -> String {
        let mut out = self.to_string();
        out.push(PREFIX_SEPARATOR);
        out
    }
}

impl fmt::Display for KeyPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyPrefix::Str(s) => f.write_str(s),
            KeyPrefix::Int(i) => write!(f, "{i}"),
            KeyPrefix::UInt(u) => write!(f, "{u}"),
            KeyPrefix::Token(sym) => write!(f, "{sym}"),
        }
    }
}

impl From<&str> for KeyPrefix {
    fn from(value: &str) -> Self {
        KeyPrefix::Str(value.to_owned())
    }
}

impl From<String> for KeyPrefix {
    fn from(value: String) -> Self {
        KeyPrefix::Str(value)
    }
}

impl From<&String> for KeyPrefix {
    fn from(value: &String) -> Self {
        KeyPrefix::Str(value.clone())
    }
}

impl From<Symbol> for KeyPrefix {
    fn from(value: Symbol) -> Self {
        KeyPrefix::Token(value)
    }
}

/// Integers that fit `i64` become `Int`; larger unsigned values become
/// `UInt`. Anything wider than both keeps its decimal form as `Str`.
macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for KeyPrefix {
            fn from(value: $t) -> Self {
                if let Ok(i) = i64::try_from(value) {
                    KeyPrefix::Int(i)
                } else if let Ok(u) = u64::try_from(value) {
                    KeyPrefix::UInt(u)
                } else {
                    KeyPrefix::Str(value.to_string())
                }
            }
        })*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<KeyPrefix> for String {
    fn from(value: KeyPrefix) -> Self {
        value.to_string()
    }
}

/// Wire form used in configuration files: a number or a string.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
enum RawPrefix {
    Int(i64),
    UInt(u64),
    Str(String),
}

#[cfg(feature = "serde")]
impl From<RawPrefix> for KeyPrefix {
    fn from(raw: RawPrefix) -> Self {
        match raw {
            RawPrefix::Int(i) => KeyPrefix::Int(i),
            RawPrefix::UInt(u) => KeyPrefix::from(u),
            RawPrefix::Str(s) => KeyPrefix::Str(s),
        }
    }
}

#[cfg(feature = "serde")]
impl From<KeyPrefix> for RawPrefix {
    fn from(prefix: KeyPrefix) -> Self {
        match prefix {
            KeyPrefix::Str(s) => RawPrefix::Str(s),
            KeyPrefix::Int(i) => RawPrefix::Int(i),
            KeyPrefix::UInt(u) => RawPrefix::UInt(u),
            KeyPrefix::Token(sym) => RawPrefix::Str(sym.to_string()),
        }
    }
}
