use super::*;
use pretty_assertions::assert_eq;

fn answer(_args: &[Value]) -> EvalResult {
    Ok(Value::Number(42.0))
}

#[test]
fn test_number_display() {
    assert_eq!(Value::Number(3.0).to_string(), "3");
    assert_eq!(Value::Number(3.5).to_string(), "3.5");
    assert_eq!(Value::Number(-0.25).to_string(), "-0.25");
    assert_eq!(Value::Number(1e21).to_string(), "1000000000000000000000");
}

#[test]
fn test_display() {
    assert_eq!(Value::Nil.to_string(), "nil");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::string("raw \"text\"").to_string(), "raw \"text\"");
    let native = Value::native(NativeFunction::new("answer", 0, answer));
    assert_eq!(native.to_string(), "<native fn answer>");
}

#[test]
fn test_truthiness() {
    assert!(!Value::Nil.is_truthy());
    assert!(!Value::Bool(false).is_truthy());
    assert!(Value::Bool(true).is_truthy());
    assert!(Value::Number(0.0).is_truthy());
    assert!(Value::string("").is_truthy());
}

#[test]
fn test_equality_is_structural() {
    assert_eq!(Value::Nil, Value::Nil);
    assert_eq!(Value::Number(1.0), Value::Number(1.0));
    assert_eq!(Value::string("a"), Value::string("a"));
    assert_ne!(Value::Number(0.0), Value::Bool(false));
    assert_ne!(Value::Nil, Value::Bool(false));
    assert_ne!(Value::string("1"), Value::Number(1.0));
    assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
}

#[test]
fn test_callables_compare_by_identity() {
    let first = Value::native(NativeFunction::new("answer", 0, answer));
    let second = Value::native(NativeFunction::new("answer", 0, answer));
    assert_eq!(first, first.clone());
    assert_ne!(first, second);
}

#[test]
fn test_native_call() {
    let native = NativeFunction::new("answer", 0, answer);
    assert_eq!(native.arity(), 0);
    assert_eq!(native.call(&[]), Ok(Value::Number(42.0)));
}

#[test]
fn test_type_names() {
    assert_eq!(Value::Nil.type_name(), "nil");
    assert_eq!(Value::Number(1.0).type_name(), "number");
    assert_eq!(Value::string("s").type_name(), "string");
    assert_eq!(Value::Number(2.0).as_number(), Some(2.0));
    assert_eq!(Value::Nil.as_number(), None);
}
