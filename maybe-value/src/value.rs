use crate::symbol::Symbol;
use indexmap::IndexMap;
use maybe_core::Maybe;
use num_bigint::BigInt;
use std::fmt;
use std::sync::Arc;

// Containers are shared freely between threads; nothing in a value is mutable once built.
static_assertions::assert_impl_all!(Value: Send, Sync, Clone);
static_assertions::assert_impl_all!(Maybe<Value>: Send, Sync, Clone);

/// A container over dynamic values.
pub type DynMaybe = Maybe<Value>;

/// The property map of an object value. Keeps insertion order, like JavaScript objects do.
pub type Object = IndexMap<String, Value>;

/// A native function value.
///
/// Functions are compared by identity: a clone is equal to its original, two separately built
/// functions never are.
#[derive(Clone)]
pub struct Function(Arc<dyn Fn(&[Value]) -> Value + Send + Sync>);

impl Function {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn call(&self, args: &[Value]) -> Value {
        (self.0)(args)
    }

    #[inline(always)]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Function(<native>)")
    }
}

/// Represents a dynamically typed value, modelled on JavaScript values.
///
/// Structured values (arrays, objects, boxes, functions and containers) are reference types:
/// cloning a `Value` clones the reference, and equality on them is identity.
#[derive(Debug, Clone)]
pub enum Value {
    /// The **undefined** value.
    Undefined,
    /// The **null** value.
    Null,
    /// A boolean value (**true** or **false**).
    Boolean(bool),
    /// A floating-point number, `NaN` and infinities included.
    Number(f64),
    /// A big integer value (arbitrarily big).
    BigInt(BigInt),
    /// A string value.
    String(Arc<str>),
    /// A unique symbol.
    Symbol(Symbol),
    /// An array of values.
    Array(Arc<Vec<Value>>),
    /// A plain object.
    Object(Arc<Object>),
    /// A primitive wrapped in its object form.
    ///
    /// Build it with [`Value::new_boxed`]. Code constructing the variant directly must only put a
    /// primitive other than `undefined` or `null` inside.
    Boxed(Arc<Value>),
    /// A callable value.
    Function(Function),
    /// A `Maybe` container held as a value.
    Maybe(Arc<DynMaybe>),
}

impl Value {
    /// The number `0`.
    pub const ZERO: Self = Value::Number(0.0);
    /// The number `NaN`.
    pub const NAN: Self = Value::Number(f64::NAN);

    /// Returns a new string value.
    #[inline(always)]
    pub fn new_string(value: &str) -> Self {
        Value::String(Arc::from(value))
    }

    /// Returns a new, unique symbol value.
    #[inline(always)]
    pub fn new_symbol(description: &str) -> Self {
        Value::Symbol(Symbol::new(Some(description)))
    }

    /// Returns a new array value.
    pub fn new_array<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::Array(Arc::new(values.into_iter().map(Into::into).collect()))
    }

    /// Returns a new object value with the given properties, in order.
    pub fn new_object<I, K, V>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Object(Arc::new(
            properties.into_iter().map(|(key, value)| (key.into(), value.into())).collect(),
        ))
    }

    /// Returns a new function value.
    pub fn new_function<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Value::Function(Function::new(f))
    }

    /// Boxes a primitive into its object form.
    ///
    /// Mirrors `Object(value)`: structured values come back unchanged, and `null`/`undefined`
    /// produce a fresh empty object.
    pub fn new_boxed(value: Value) -> Self {
        match value {
            Value::Undefined | Value::Null => Value::Object(Arc::new(Object::new())),
            value if value.is_primitive() => Value::Boxed(Arc::new(value)),
            value => value,
        }
    }

    // --------

    /// Returns whether this value is `undefined` or `null`.
    #[inline(always)]
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// Returns whether this value is a primitive, as opposed to a reference type.
    #[inline(always)]
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Value::Undefined
                | Value::Null
                | Value::Boolean(_)
                | Value::Number(_)
                | Value::BigInt(_)
                | Value::String(_)
                | Value::Symbol(_)
        )
    }

    /// Returns whether this value is a boxed primitive.
    #[inline(always)]
    pub fn is_boxed(&self) -> bool {
        matches!(self, Value::Boxed(_))
    }

    /// Returns whether this value is a `Maybe` container.
    #[inline(always)]
    pub fn is_maybe(&self) -> bool {
        matches!(self, Value::Maybe(_))
    }

    /// Returns the primitive inside a boxed value, or the value itself for anything else.
    #[inline(always)]
    pub fn unboxed(&self) -> &Value {
        match self {
            Value::Boxed(inner) => &**inner,
            value => value,
        }
    }

    /// The JavaScript `typeof` tag of this value.
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::BigInt(_) => "bigint",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Function(_) => "function",
            Value::Null | Value::Array(_) | Value::Object(_) | Value::Boxed(_) | Value::Maybe(_) => "object",
        }
    }

    // ----------------

    /// Returns this value as a boolean, if such is its type.
    #[inline(always)]
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns this value as a number, if such is its type.
    #[inline(always)]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns this value as a string, if such is its type.
    #[inline(always)]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(&**value),
            _ => None,
        }
    }

    #[inline(always)]
    pub fn as_array(&self) -> Option<&Arc<Vec<Value>>> {
        match self {
            Value::Array(values) => Some(values),
            _ => None,
        }
    }

    #[inline(always)]
    pub fn as_object(&self) -> Option<&Arc<Object>> {
        match self {
            Value::Object(properties) => Some(properties),
            _ => None,
        }
    }

    #[inline(always)]
    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Returns this value as a container, if such is its type.
    #[inline(always)]
    pub fn as_maybe(&self) -> Option<&DynMaybe> {
        match self {
            Value::Maybe(maybe) => Some(&**maybe),
            _ => None,
        }
    }

    /// Returns whether both values are the very same reference.
    /// Always `false` for primitives, which have no identity.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Array(a), Value::Array(b)) => Arc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            (Value::Boxed(a), Value::Boxed(b)) => Arc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            (Value::Maybe(a), Value::Maybe(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Strict equality (`===`): like `==` on `Value`, except that `NaN` is unequal to everything,
    /// itself included.
    #[inline]
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            _ => self == other,
        }
    }
}

/// SameValueZero: primitives by value (`NaN` equals itself, `-0` equals `0`), reference types
/// by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            _ => self.ptr_eq(other),
        }
    }
}

impl Eq for Value {}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Boolean(value) => write!(f, "{value}"),
            Value::Number(value) => fmt_number(*value, f),
            Value::BigInt(value) => write!(f, "{value}"),
            Value::String(value) => f.write_str(value),
            Value::Symbol(symbol) => write!(f, "{symbol}"),
            Value::Array(values) => {
                for (idx, value) in values.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(",")?;
                    }
                    if !value.is_nullish() {
                        write!(f, "{value}")?;
                    }
                }
                Ok(())
            }
            Value::Object(_) => f.write_str("[object Object]"),
            Value::Boxed(inner) => write!(f, "{inner}"),
            Value::Function(_) => f.write_str("function () { [native code] }"),
            Value::Maybe(maybe) => write!(f, "{maybe}"),
        }
    }
}

/// Prints a number the way `String(number)` does.
fn fmt_number(value: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("NaN");
    }
    if value.is_infinite() {
        return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if value == 0.0 {
        // also catches `-0`
        return f.write_str("0");
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return write!(f, "{value}");
    }

    let exponential = format!("{value:e}");
    match exponential.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => write!(f, "{mantissa}e+{exponent}"),
        _ => f.write_str(&exponential),
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Undefined
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(value.into())
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value.into())
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(value.into())
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::BigInt(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::new_string(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(Arc::from(value))
    }
}

impl From<Arc<str>> for Value {
    fn from(value: Arc<str>) -> Self {
        Value::String(value)
    }
}

impl From<Symbol> for Value {
    fn from(value: Symbol) -> Self {
        Value::Symbol(value)
    }
}

impl From<Function> for Value {
    fn from(value: Function) -> Self {
        Value::Function(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(Arc::new(value))
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(Arc::new(value))
    }
}

impl From<DynMaybe> for Value {
    fn from(value: DynMaybe) -> Self {
        Value::Maybe(Arc::new(value))
    }
}

/// `None` is `null`.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
