//! Input alphabet and keyed input elements.

use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};

/// Trait for input symbols accepted by a Mealy machine.
///
/// Symbols come from a small discrete alphabet. They are compared for
/// equality when resolving transitions and displayed when rendering.
/// The trait is implemented for the primitive integer types, `bool` and `char`.
pub trait Symbol:
    Copy + PartialEq + Debug + Display + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
}

/// One element of a keyed input sequence.
///
/// The `key` is an opaque order key (a timestamp, an index, anything the
/// caller wants echoed back in the histories). It never takes part in
/// transition resolution. A `symbol` of `None` is treated like any other
/// unmapped symbol: the active node loops on itself without output.
#[derive(Clone, Debug, PartialEq)]
pub struct Input<K, I> {
    pub key: K,
    pub symbol: Option<I>,
}

impl<K, I: Symbol> Input<K, I> {
    pub fn new(key: K, symbol: I) -> Self {
        Self {
            key,
            symbol: Some(symbol),
        }
    }

    /// An element carrying no symbol.
    pub fn idle(key: K) -> Self {
        Self { key, symbol: None }
    }
}

macro_rules! impl_symbol {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Symbol for $ty {}

            impl<K> From<(K, $ty)> for Input<K, $ty> {
                fn from((key, symbol): (K, $ty)) -> Self {
                    Input::new(key, symbol)
                }
            }

            impl<K> From<(K, Option<$ty>)> for Input<K, $ty> {
                fn from((key, symbol): (K, Option<$ty>)) -> Self {
                    Input { key, symbol }
                }
            }
        )*
    };
}

impl_symbol!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, bool, char);
