use std::fmt;

use crate::error::EmptyError;
use crate::into_maybe::IntoMaybe;

// `Nothing` carries no data, so pointer-like payloads keep their niche and the container costs nothing.
static_assertions::assert_eq_size!(Maybe<Box<u8>>, Box<u8>);
static_assertions::assert_eq_size!(Maybe<&'static str>, &'static str);
static_assertions::assert_impl_all!(Maybe<String>: Send, Sync);

/// An immutable optional value.
///
/// `Nothing` is a unit variant: every `Nothing` is the same value, so comparing two of them is
/// always `true` and producing one never allocates.
///
/// Every combinator is a `match` over the two variants. `Nothing` is absorbing under `filter`,
/// `map` and `for_each`; the only ways back to `Just` are `or_else`/`or_else_with` or building a
/// fresh container.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    /// A present value.
    Just(T),
    /// No value.
    Nothing,
}

impl<T> Maybe<T> {
    /// The empty container.
    pub const NOTHING: Self = Maybe::Nothing;

    /// Wraps `value` unconditionally.
    ///
    /// Unlike `from`, this never inspects the value: `just(None)` holds a `None`, and
    /// `just(just(x))` holds a container.
    #[inline(always)]
    pub const fn just(value: T) -> Self {
        Maybe::Just(value)
    }

    /// Returns whether this holds no value.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Maybe::Nothing)
    }

    /// Returns whether this holds a value. Always the complement of `is_empty`.
    #[inline(always)]
    pub const fn non_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Keeps the value only if `predicate` accepts it.
    /// The predicate is never called on `Nothing`.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Just(value) if predicate(&value) => Maybe::Just(value),
            _ => Maybe::Nothing,
        }
    }

    /// Applies `f` to the value and builds a container from its result.
    ///
    /// The result goes through `IntoMaybe`, so a function returning a container (or an `Option`)
    /// does not produce a nested container: `just(x).map(|x| just(x))` is `just(x)`.
    /// `f` is never called on `Nothing`.
    ///
    /// The result type must implement `IntoMaybe`. Std payloads (scalars, strings, tuples,
    /// arrays, collections, smart pointers) already do. Other types opt in with
    /// [`impl_into_maybe!`](crate::impl_into_maybe), or `f` returns `just(..)` explicitly.
    #[inline]
    pub fn map<R, F>(self, f: F) -> Maybe<R::Item>
    where
        F: FnOnce(T) -> R,
        R: IntoMaybe,
    {
        match self {
            Maybe::Just(value) => f(value).into_maybe(),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Calls `f` on the value, if any, and returns the container unchanged.
    #[inline]
    pub fn for_each<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Maybe::Just(ref value) = self {
            f(value);
        }
        self
    }

    /// Returns the value, or `EmptyError` on `Nothing`.
    #[inline]
    pub fn get(self) -> Result<T, EmptyError> {
        self.get_or_throw(EmptyError)
    }

    /// Returns the value, or `fallback` on `Nothing`.
    #[inline]
    pub fn get_or_else(self, fallback: T) -> T {
        match self {
            Maybe::Just(value) => value,
            Maybe::Nothing => fallback,
        }
    }

    /// Returns the value, or the result of `fallback` on `Nothing`.
    /// `fallback` is only called when there is no value.
    #[inline]
    pub fn get_or_else_with<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Just(value) => value,
            Maybe::Nothing => fallback(),
        }
    }

    /// Returns the value, or `err` exactly as given on `Nothing`.
    #[inline]
    pub fn get_or_throw<E>(self, err: E) -> Result<T, E> {
        match self {
            Maybe::Just(value) => Ok(value),
            Maybe::Nothing => Err(err),
        }
    }

    /// Returns `self` if it holds a value, otherwise builds a container from `fallback`.
    ///
    /// The fallback goes through `IntoMaybe`, so an absent fallback (`None`, `Nothing`) still
    /// yields `Nothing`. As with `map`, the fallback type must implement `IntoMaybe`.
    #[inline]
    pub fn or_else<V>(self, fallback: V) -> Self
    where
        V: IntoMaybe<Item = T>,
    {
        match self {
            Maybe::Just(_) => self,
            Maybe::Nothing => fallback.into_maybe(),
        }
    }

    /// Like `or_else`, with the fallback produced on demand.
    #[inline]
    pub fn or_else_with<V, F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> V,
        V: IntoMaybe<Item = T>,
    {
        match self {
            Maybe::Just(_) => self,
            Maybe::Nothing => fallback().into_maybe(),
        }
    }

    #[inline(always)]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Just(value) => Maybe::Just(value),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    #[inline(always)]
    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Just(value) => Some(value),
            Maybe::Nothing => None,
        }
    }

    /// Returns the value, or an `anyhow` error carrying `context` on `Nothing`.
    pub fn context<C>(self, context: C) -> anyhow::Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        use anyhow::Context as _;
        self.into_option().context(context)
    }
}

/// Wraps `value` unconditionally. See `Maybe::just`.
#[inline(always)]
pub const fn just<T>(value: T) -> Maybe<T> {
    Maybe::Just(value)
}

/// The empty container.
#[inline(always)]
pub const fn nothing<T>() -> Maybe<T> {
    Maybe::Nothing
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::Nothing
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        value.into_maybe()
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

/// `Just(v)` prints as `v`, `Nothing` prints as the empty string.
impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maybe::Just(value) => fmt::Display::fmt(value, f),
            Maybe::Nothing => Ok(()),
        }
    }
}
