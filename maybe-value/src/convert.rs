use anyhow::{bail, Error};
use std::sync::Arc;

use crate::value::{DynMaybe, Object, Value};

// The classifications behind `string`, `number` and `object`. Each one unboxes first, then either
// accepts the value or explains why it was rejected.

/// A non-empty string primitive.
#[derive(Debug, Clone)]
pub enum StringLike {
    String(Arc<str>),
    /// A string that was unboxed from its object form.
    Unboxed(Arc<str>),
}

impl StringLike {
    pub fn into_inner(self) -> Arc<str> {
        match self {
            StringLike::String(string) | StringLike::Unboxed(string) => string,
        }
    }
}

impl TryFrom<&Value> for StringLike {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let string = match value {
            Value::String(string) => StringLike::String(Arc::clone(string)),
            Value::Boxed(inner) => match &**inner {
                Value::String(string) => StringLike::Unboxed(Arc::clone(string)),
                inner => bail!("boxed `{}` is not a string", inner.type_of()),
            },
            value => bail!("`{}` is not a string", value.type_of()),
        };

        match string {
            StringLike::String(ref s) | StringLike::Unboxed(ref s) if s.is_empty() => bail!("string is empty"),
            string => Ok(string),
        }
    }
}

/// A finite number primitive: neither `NaN` nor an infinity.
#[derive(Debug, Clone, Copy)]
pub enum NumberLike {
    Number(f64),
    /// A number that was unboxed from its object form.
    Unboxed(f64),
}

impl NumberLike {
    pub fn value(self) -> f64 {
        match self {
            NumberLike::Number(value) | NumberLike::Unboxed(value) => value,
        }
    }
}

impl TryFrom<&Value> for NumberLike {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let number = match value {
            Value::Number(number) => NumberLike::Number(*number),
            Value::Boxed(inner) => match &**inner {
                Value::Number(number) => NumberLike::Unboxed(*number),
                inner => bail!("boxed `{}` is not a number", inner.type_of()),
            },
            value => bail!("`{}` is not a number", value.type_of()),
        };

        if !number.value().is_finite() {
            bail!("number `{}` is not finite", Value::Number(number.value()));
        }
        Ok(number)
    }
}

/// A structured, non-primitive value.
#[derive(Debug, Clone)]
pub enum ObjectLike {
    Array(Arc<Vec<Value>>),
    Object(Arc<Object>),
    Maybe(Arc<DynMaybe>),
}

impl TryFrom<&Value> for ObjectLike {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(values) => Ok(ObjectLike::Array(Arc::clone(values))),
            Value::Object(properties) => Ok(ObjectLike::Object(Arc::clone(properties))),
            Value::Maybe(maybe) => Ok(ObjectLike::Maybe(Arc::clone(maybe))),
            Value::Boxed(inner) => bail!("boxed `{}` is a primitive", inner.type_of()),
            Value::Function(_) => bail!("functions are not plain objects"),
            value => bail!("`{}` is a primitive", value.type_of()),
        }
    }
}

impl From<ObjectLike> for Value {
    fn from(value: ObjectLike) -> Self {
        match value {
            ObjectLike::Array(values) => Value::Array(values),
            ObjectLike::Object(properties) => Value::Object(properties),
            ObjectLike::Maybe(maybe) => Value::Maybe(maybe),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejections_explain_themselves() {
        let err = StringLike::try_from(&Value::from(0)).unwrap_err();
        assert_eq!(err.to_string(), "`number` is not a string");

        let err = StringLike::try_from(&Value::from("")).unwrap_err();
        assert_eq!(err.to_string(), "string is empty");

        let err = NumberLike::try_from(&Value::new_boxed(Value::NAN)).unwrap_err();
        assert_eq!(err.to_string(), "number `NaN` is not finite");

        let err = ObjectLike::try_from(&Value::new_boxed(Value::from(true))).unwrap_err();
        assert_eq!(err.to_string(), "boxed `boolean` is a primitive");
    }

    #[test]
    fn unboxing_is_recorded() {
        let boxed = Value::new_boxed(Value::from("hello"));
        assert!(matches!(StringLike::try_from(&boxed), Ok(StringLike::Unboxed(_))));

        let boxed = Value::new_boxed(Value::from(2));
        assert!(matches!(NumberLike::try_from(&boxed), Ok(NumberLike::Unboxed(n)) if n == 2.0));
    }

    #[test]
    fn object_like_keeps_the_reference() {
        let array = Value::new_array([1, 2]);
        let object_like = ObjectLike::try_from(&array).unwrap();
        assert!(Value::from(object_like).ptr_eq(&array));
    }
}
