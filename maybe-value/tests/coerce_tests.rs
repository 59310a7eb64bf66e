use maybe_value::{from, from_unless, from_with, is_instance, just, number, object, string, Maybe, Object, Value, NOTHING};
use num_bigint::BigInt;
use rstest::rstest;
use std::sync::Arc;

fn arrow() -> Value {
    Value::new_function(|_| Value::ZERO)
}

fn empty_object() -> Value {
    Value::from(Object::new())
}

fn boxed(value: impl Into<Value>) -> Value {
    Value::new_boxed(value.into())
}

// from

#[rstest]
#[case(Value::Undefined)]
#[case(Value::Null)]
fn from_nullish_is_nothing(#[case] value: Value) {
    let maybe = from(value);
    assert!(maybe.is_empty());
    assert_eq!(maybe, NOTHING);
}

#[rstest]
#[case(Value::from(true))]
#[case(Value::from(false))]
#[case(Value::ZERO)]
#[case(Value::NAN)]
#[case(Value::from(""))]
#[case(Value::new_symbol("desc"))]
#[case(arrow())]
#[case(Value::new_object([("a", 1)]))]
#[case(Value::new_array([1, 2, 3]))]
#[case(boxed(0))]
#[case(Value::from(BigInt::from(0)))]
fn from_anything_else_is_just(#[case] value: Value) {
    let maybe = from(value.clone());
    assert!(maybe.non_empty());
    assert_eq!(maybe.get().unwrap(), value);
}

#[test]
fn from_keeps_references() {
    let object = Value::new_object([("key", "value")]);
    assert!(from(object.clone()).get().unwrap().ptr_eq(&object));
}

#[test]
fn from_flattens_containers() {
    let just_zero = just(0);
    assert_eq!(from(just_zero.clone()), just_zero);
    assert_eq!(from(Value::from(just_zero.clone())), just_zero);
    assert_eq!(from(NOTHING), NOTHING);
    assert_eq!(from(from(from(1))), from(1));
}

#[test]
fn from_none_is_null() {
    assert_eq!(from(None::<i32>), NOTHING);
    assert_eq!(from(Some("x")).get().unwrap(), Value::from("x"));
}

// just

#[rstest]
#[case(Value::Undefined)]
#[case(Value::Null)]
#[case(Value::from(true))]
#[case(Value::from(false))]
#[case(Value::ZERO)]
#[case(Value::new_symbol("desc"))]
#[case(arrow())]
#[case(Value::from(""))]
#[case(Value::new_object([("a", 1)]))]
fn just_holds_anything(#[case] value: Value) {
    assert_eq!(just(value.clone()).get().unwrap(), value);
}

#[test]
fn just_nests_containers() {
    let just_zero = Value::from(just(0));
    let nested = just(just_zero.clone());

    assert!(nested.get().unwrap().ptr_eq(&just_zero));
    assert_eq!(just(NOTHING).get().unwrap().as_maybe(), Some(&NOTHING));
}

// custom emptiness

#[test]
fn from_unless_sentinel() {
    assert_eq!(from_unless(0, 0), NOTHING);
    assert_eq!(from_unless(Value::NAN, Value::NAN), just(Value::NAN));
    assert_eq!(from_unless(-0.0, 0), NOTHING);
    assert_eq!(from_unless("", ""), NOTHING);
    assert_eq!(from_unless(1, 0), just(1));
    assert_eq!(from_unless(Value::Null, 0).get().unwrap(), Value::Null);
}

#[test]
fn from_with_predicate() {
    assert_eq!(from_with(0, |value| *value == Value::ZERO), NOTHING);
    assert_eq!(from_with(Value::Null, |value| *value == Value::ZERO).get().unwrap(), Value::Null);
    assert_eq!(from_with(just(3), |_| false), just(3));
    assert_eq!(from_with(just(3), |_| true), NOTHING);
}

// string

#[rstest]
#[case(Value::Undefined)]
#[case(Value::Null)]
#[case(Value::from(true))]
#[case(Value::from(false))]
#[case(Value::ZERO)]
#[case(Value::new_symbol("description"))]
#[case(arrow())]
#[case(empty_object())]
#[case(Value::from(""))]
#[case(boxed(""))]
#[case(boxed(0))]
#[case(Value::from(just("hello")))]
fn string_rejects(#[case] value: Value) {
    assert_eq!(string(value), Maybe::NOTHING);
}

#[rstest]
#[case(Value::from("hello"))]
#[case(boxed("hello"))]
fn string_accepts(#[case] value: Value) {
    assert_eq!(string(value).get().as_deref(), Ok("hello"));
}

#[test]
fn string_keeps_the_primitive() {
    let hello: Arc<str> = Arc::from("hello");
    let result = string(Value::from(Arc::clone(&hello))).get().unwrap();
    assert!(Arc::ptr_eq(&result, &hello));
}

// number

#[rstest]
#[case(Value::Undefined)]
#[case(Value::Null)]
#[case(Value::from(true))]
#[case(Value::from(false))]
#[case(Value::new_symbol("description"))]
#[case(arrow())]
#[case(empty_object())]
#[case(Value::from(""))]
#[case(Value::from("0"))]
#[case(Value::NAN)]
#[case(Value::from(f64::INFINITY))]
#[case(Value::from(f64::NEG_INFINITY))]
#[case(boxed("0"))]
#[case(boxed(Value::NAN))]
#[case(Value::from(BigInt::from(1)))]
fn number_rejects(#[case] value: Value) {
    assert_eq!(number(value), Maybe::NOTHING);
}

#[rstest]
#[case(Value::ZERO, 0.0)]
#[case(boxed(0), 0.0)]
#[case(Value::from(-1.5), -1.5)]
#[case(Value::from(f64::MAX), f64::MAX)]
fn number_accepts(#[case] value: Value, #[case] expected: f64) {
    assert_eq!(number(value).get(), Ok(expected));
}

// object

#[rstest]
#[case(Value::Undefined)]
#[case(Value::Null)]
#[case(Value::from(true))]
#[case(Value::from(false))]
#[case(Value::ZERO)]
#[case(Value::new_symbol("description"))]
#[case(arrow())]
#[case(Value::from(""))]
#[case(boxed(""))]
#[case(boxed("hello"))]
#[case(boxed(Value::NAN))]
#[case(boxed(0))]
#[case(Value::from(BigInt::from(7)))]
fn object_rejects(#[case] value: Value) {
    assert_eq!(object(value), NOTHING);
}

#[test]
fn object_keeps_the_reference() {
    let obj = empty_object();
    assert!(object(obj.clone()).get().unwrap().ptr_eq(&obj));

    let array = Value::new_array([Value::Null]);
    assert!(object(array.clone()).get().unwrap().ptr_eq(&array));
}

#[test]
fn object_flattens_containers() {
    assert_eq!(object(just(0)).get().unwrap(), Value::ZERO);
    assert_eq!(object(NOTHING), NOTHING);
}

#[test]
fn boxing_nullish_makes_an_object() {
    assert!(object(boxed(Value::Null)).non_empty());
    assert!(object(boxed(Value::Undefined)).non_empty());
}

// is_instance

#[rstest]
#[case(Value::from(NOTHING), true)]
#[case(Value::from(just(0)), true)]
#[case(Value::from(from(Value::Null)), true)]
#[case(Value::Null, false)]
#[case(Value::from(42), false)]
#[case(Value::new_object([("empty", true)]), false)]
fn is_instance_checks_the_tag(#[case] value: Value, #[case] expected: bool) {
    assert_eq!(is_instance(&value), expected);
}
