use log::trace;
use maybe_core::{IntoMaybe, Maybe};
use std::sync::Arc;

use crate::convert::{NumberLike, ObjectLike, StringLike};
use crate::value::{DynMaybe, Value};

/// The empty container. A constant: there is exactly one, and using it never allocates.
pub const NOTHING: DynMaybe = Maybe::Nothing;

/// `undefined` and `null` are the absence sentinels, a container value is unwrapped so that
/// containers never nest, and everything else is present.
impl IntoMaybe for Value {
    type Item = Value;

    fn into_maybe(self) -> DynMaybe {
        match self {
            Value::Undefined | Value::Null => NOTHING,
            Value::Maybe(maybe) => Arc::unwrap_or_clone(maybe),
            value => Maybe::Just(value),
        }
    }
}

/// Builds a container from any value.
///
/// `undefined` and `null` give `NOTHING`, a container is returned as-is, anything else (`false`,
/// `0`, `""` included) is present. Idempotent: `from(from(x)) == from(x)`.
pub fn from(value: impl Into<Value>) -> DynMaybe {
    value.into().into_maybe()
}

/// Wraps a value unconditionally: `just(Value::Null)` holds `null`, and `just(container)` holds
/// the container itself.
pub fn just(value: impl Into<Value>) -> DynMaybe {
    Maybe::Just(value.into())
}

/// Builds a container with a caller-defined notion of emptiness.
///
/// If `is_empty` accepts the value the result is `NOTHING`. Otherwise a container value is
/// returned as-is and anything else is present, `null` and `undefined` included.
pub fn from_with<P>(value: impl Into<Value>, is_empty: P) -> DynMaybe
where
    P: FnOnce(&Value) -> bool,
{
    let value = value.into();
    if is_empty(&value) {
        return NOTHING;
    }

    match value {
        Value::Maybe(maybe) => Arc::unwrap_or_clone(maybe),
        value => Maybe::Just(value),
    }
}

/// Like `from_with`, treating values strictly equal to `sentinel` as empty.
///
/// Strict equality never matches `NaN`, so `from_unless(NaN, NaN)` holds `NaN`.
pub fn from_unless(value: impl Into<Value>, sentinel: impl Into<Value>) -> DynMaybe {
    let sentinel = sentinel.into();
    from_with(value, |value| value.strict_eq(&sentinel))
}

/// Present only for a non-empty string, boxed or not.
pub fn string(value: impl Into<Value>) -> Maybe<Arc<str>> {
    let value: Value = value.into();
    classify::<StringLike>("string", &value).map(StringLike::into_inner)
}

/// Present only for a finite number, boxed or not. `NaN`, infinities and big integers are absent.
pub fn number(value: impl Into<Value>) -> Maybe<f64> {
    let value: Value = value.into();
    classify::<NumberLike>("number", &value).map(NumberLike::value)
}

/// Present only for a structured value: an object, an array, or a container.
///
/// Goes through `from`, so a container comes back as that same container rather than wrapped:
/// `object(just(0))` is `just(0)`. Primitives, boxed primitives and functions are absent.
pub fn object(value: impl Into<Value>) -> DynMaybe {
    let value: Value = value.into();
    classify::<ObjectLike>("object", &value).map(Value::from)
}

/// Returns whether `value` is a container.
#[inline(always)]
pub fn is_instance(value: &Value) -> bool {
    value.is_maybe()
}

fn classify<C>(kind: &str, value: &Value) -> Maybe<C>
where
    C: for<'a> TryFrom<&'a Value, Error = anyhow::Error>,
{
    match C::try_from(value) {
        Ok(classified) => Maybe::Just(classified),
        Err(err) => {
            trace!("{kind}({value:?}) is nothing: {err}");
            Maybe::Nothing
        }
    }
}
