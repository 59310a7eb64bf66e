use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::ffi::OsString;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use crate::maybe::Maybe;

/// Conversion of a raw value into a container.
///
/// This decides which variant an input maps to:
/// - a `Maybe` is returned unchanged, so containers never nest through this path,
/// - `Option::None` is the absence sentinel and becomes `Nothing`,
/// - any other value becomes `Just` that value.
///
/// `Maybe::map` and `Maybe::or_else` both route their results through this trait, which is
/// what makes them flatten.
pub trait IntoMaybe {
    /// The payload type of the resulting container.
    type Item;

    fn into_maybe(self) -> Maybe<Self::Item>;
}

impl<T> IntoMaybe for Maybe<T> {
    type Item = T;

    #[inline(always)]
    fn into_maybe(self) -> Maybe<T> {
        self
    }
}

impl<T> IntoMaybe for Option<T> {
    type Item = T;

    #[inline(always)]
    fn into_maybe(self) -> Maybe<T> {
        match self {
            Some(value) => Maybe::Just(value),
            None => Maybe::Nothing,
        }
    }
}

#[macro_export]
/// Implements `IntoMaybe` for plain payload types, which always map to `Just`.
/// Rust has no way to say "every type except `Maybe` and `Option`", so types opt in one by one.
/// Scalars, strings, references, smart pointers, arrays, tuples and the std collections are
/// covered by this crate. Other types use this macro.
macro_rules! impl_into_maybe {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::IntoMaybe for $ty {
                type Item = $ty;

                #[inline(always)]
                fn into_maybe(self) -> $crate::Maybe<$ty> {
                    $crate::Maybe::Just(self)
                }
            }
        )*
    };
}

impl_into_maybe!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    Duration,
    Ordering,
    OsString,
    PathBuf,
);

/// Implements `IntoMaybe` for generic payload types. Each entry is `[generics] type`.
macro_rules! impl_into_maybe_generic {
    ($([$($gen:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($gen)*> IntoMaybe for $ty {
                type Item = $ty;

                #[inline(always)]
                fn into_maybe(self) -> Maybe<$ty> {
                    Maybe::Just(self)
                }
            }
        )*
    };
}

impl_into_maybe_generic!(
    ['a, T: ?Sized] &'a T,
    ['a, T: ?Sized] &'a mut T,
    ['a, B: ?Sized + ToOwned] Cow<'a, B>,
    [T: ?Sized] Box<T>,
    [T: ?Sized] Rc<T>,
    [T: ?Sized] Arc<T>,
    [T, const N: usize] [T; N],
    [T] Vec<T>,
    [T] VecDeque<T>,
    [T] LinkedList<T>,
    [T] BinaryHeap<T>,
    [T] BTreeSet<T>,
    [K, V] BTreeMap<K, V>,
    [T, S] HashSet<T, S>,
    [K, V, S] HashMap<K, V, S>,
);

/// Implements `IntoMaybe` for tuples of every arity up to the longest identifier list.
macro_rules! impl_into_maybe_tuple {
    ($head:ident $(, $tail:ident)*) => {
        impl<$head $(, $tail)*> IntoMaybe for ($head, $($tail,)*) {
            type Item = ($head, $($tail,)*);

            #[inline(always)]
            fn into_maybe(self) -> Maybe<Self::Item> {
                Maybe::Just(self)
            }
        }

        impl_into_maybe_tuple!($($tail),*);
    };
    () => {};
}

impl_into_maybe_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);

/// Builds a container from a value: `None` gives `Nothing`, a container is returned as-is,
/// anything else is wrapped in `Just`.
///
/// Idempotent: `from(from(x)) == from(x)`.
#[inline(always)]
pub fn from<V: IntoMaybe>(value: V) -> Maybe<V::Item> {
    value.into_maybe()
}
