use std::fmt;

/// Unwrapping a `Nothing`.
///
/// This is the only way any operation on a container can fail: `Maybe::get` returns it when
/// there is no value to hand out. Callers wanting their own error use `Maybe::get_or_throw`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptyError;

impl fmt::Display for EmptyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("trying to get the value of an empty `Maybe`")
    }
}

impl std::error::Error for EmptyError {}
