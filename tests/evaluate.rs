use numtap::{ErrorKind, Language, Scope, Value, evaluate};
use pretty_assertions::assert_eq;

fn eval(src: &str) -> Value {
    let mut scope = Scope::new();
    evaluate(src, &mut scope, Language::En).unwrap_or_else(|e| panic!("{src:?} failed: {e}"))
}

fn magnitude(src: &str) -> f64 {
    eval(src).magnitude()
             .unwrap_or_else(|| panic!("{src:?} has no magnitude"))
}

fn failure_kind(src: &str) -> ErrorKind {
    let mut scope = Scope::new();
    match evaluate(src, &mut scope, Language::En) {
        Ok(value) => panic!("{src:?} succeeded with {value} but was expected to fail"),
        Err(e) => e.kind,
    }
}

#[test]
fn arithmetic_and_functions() {
    assert_eq!(eval("5 + 3"), Value::Number(8.0));
    assert_eq!(eval("sqrt(16)"), Value::Number(4.0));
    assert!((magnitude("sin(90 deg)") - 1.0).abs() < 1e-5);
}

#[test]
fn unit_conversions() {
    let meters = eval("2 km to meter");
    assert_eq!(meters.magnitude(), Some(2000.0));
    assert_eq!(meters.to_string(), "2000 meter");

    let fahrenheit = eval("25 degC to degF");
    assert!((fahrenheit.magnitude().unwrap() - 77.0).abs() < 0.1);
    assert_eq!(fahrenheit.to_string(), "77 degF");

    assert!((magnitude("2 liter to gallon") - 0.528_344).abs() < 0.01);
    assert!((magnitude("-40 degC to degF") + 40.0).abs() < 1e-9);
    assert!((magnitude("1 mile to km") - 1.609_344).abs() < 1e-9);
    assert!((magnitude("100 degF to degC") - 37.777_777_777_8).abs() < 1e-6);
    assert_eq!(eval("1.5 hours to min").to_string(), "90 min");
}

#[test]
fn special_cased_gallons_use_the_fixed_factor() {
    assert_eq!(eval("1 liter to gallon").to_string(), "0.264172 gallon");
    assert_eq!(eval("1 L to gallon").to_string(), "0.264172 gallon");
}

#[test]
fn invalid_conversions() {
    assert_eq!(failure_kind("2 km to second"), ErrorKind::ConversionError);
    assert_eq!(failure_kind("2 parsec to meter"), ErrorKind::ConversionError);
    assert_eq!(failure_kind("2 km to lightyear"), ErrorKind::ConversionError);
    assert_eq!(failure_kind("km to meter"), ErrorKind::ConversionError);
    assert_eq!(failure_kind("2 + 3 km to meter"), ErrorKind::ConversionError);
}

#[test]
fn non_finite_results_are_rejected() {
    assert_eq!(failure_kind("5 / 0"), ErrorKind::InfiniteResult);
    assert_eq!(failure_kind("-5 / 0"), ErrorKind::InfiniteResult);
    assert_eq!(failure_kind("log(0)"), ErrorKind::InfiniteResult);
    assert_eq!(failure_kind("0 / 0"), ErrorKind::InvalidOperation);
    assert_eq!(failure_kind("sqrt(-1)"), ErrorKind::InvalidOperation);
    assert_eq!(failure_kind("1 km / 0"), ErrorKind::InfiniteResult);
}

#[test]
fn undefined_symbol_carries_its_name() {
    let mut scope = Scope::new();
    let error = evaluate("one + 1", &mut scope, Language::En).unwrap_err();
    assert_eq!(error.kind, ErrorKind::UndefinedSymbol);
    assert_eq!(error.detail.as_deref(), Some("one"));
    assert_eq!(error.to_string(), "Undefined symbol: one");
}

#[test]
fn empty_input_is_a_syntax_error() {
    assert_eq!(failure_kind(""), ErrorKind::SyntaxError);
    assert_eq!(failure_kind("   "), ErrorKind::SyntaxError);
    assert_eq!(failure_kind(" ; ;"), ErrorKind::SyntaxError);
}

#[test]
fn evaluation_is_idempotent() {
    let mut scope = Scope::new();
    scope.set("k", Value::Number(7.0));

    let first = evaluate("k * 6", &mut scope, Language::En).unwrap();
    let second = evaluate("k * 6", &mut scope, Language::En).unwrap();
    assert_eq!(first, second);
    assert_eq!(scope.len(), 1);
}

#[test]
fn scope_persists_across_calls() {
    let mut scope = Scope::new();
    evaluate("x = 5", &mut scope, Language::En).unwrap();
    assert_eq!(evaluate("x + 3", &mut scope, Language::En).unwrap(),
               Value::Number(8.0));

    let mut fresh = Scope::new();
    let error = evaluate("x + 3", &mut fresh, Language::En).unwrap_err();
    assert_eq!(error.kind, ErrorKind::UndefinedSymbol);
}

#[test]
fn assignments_run_before_computations() {
    assert_eq!(eval("a + b; a = 1; b = 2"), Value::Number(3.0));
    assert_eq!(eval("x = 5; x + 3"), Value::Number(8.0));
}

#[test]
fn assignments_only_returns_the_last_value() {
    let mut scope = Scope::new();
    let value = evaluate("a = 2; b = 3", &mut scope, Language::En).unwrap();
    assert_eq!(value, Value::Number(3.0));
    assert_eq!(scope.get("a"), Some(&Value::Number(2.0)));
    assert_eq!(scope.get("b"), Some(&Value::Number(3.0)));
}

#[test]
fn last_computation_wins() {
    assert_eq!(eval("1 + 1; 2 + 2; 3 + 3"), Value::Number(6.0));
}

#[test]
fn first_failure_aborts_the_rest() {
    let mut scope = Scope::new();
    let error = evaluate("x = 5; one + 1; x + 1", &mut scope, Language::En).unwrap_err();
    assert_eq!(error.kind, ErrorKind::UndefinedSymbol);
    assert_eq!(scope.get("x"), Some(&Value::Number(5.0)));

    let error = evaluate("y = one; z = 2", &mut scope, Language::En).unwrap_err();
    assert_eq!(error.kind, ErrorKind::UndefinedSymbol);
    assert!(!scope.contains("y"));
    assert!(!scope.contains("z"));
}

#[test]
fn comparisons_are_not_assignments() {
    let mut scope = Scope::new();
    scope.set("x", Value::Number(1.0));
    assert_eq!(evaluate("x == 1", &mut scope, Language::En).unwrap(),
               Value::Bool(true));
    assert_eq!(evaluate("x >= 2", &mut scope, Language::En).unwrap(),
               Value::Bool(false));
    assert_eq!(scope.get("x"), Some(&Value::Number(1.0)));
}

#[test]
fn conversions_can_be_assigned() {
    let mut scope = Scope::new();
    let value = evaluate("d = 5 km to meter", &mut scope, Language::En).unwrap();
    assert_eq!(value.to_string(), "5000 meter");
    assert_eq!(evaluate("d / 1000", &mut scope, Language::En).unwrap().to_string(),
               "5 meter");

    let error = evaluate("pi = 5 km to meter", &mut scope, Language::En).unwrap_err();
    assert_eq!(error.kind, ErrorKind::SyntaxError);
}

#[test]
fn variables_shadow_units_and_are_case_sensitive() {
    assert_eq!(eval("m = 3; 2 m"), Value::Number(6.0));

    let mut scope = Scope::new();
    let error = evaluate("X = 1; x", &mut scope, Language::En).unwrap_err();
    assert_eq!(error.kind, ErrorKind::UndefinedSymbol);
}

#[test]
fn messages_follow_the_language() {
    let mut scope = Scope::new();
    let english = evaluate("5 / 0", &mut scope, Language::En).unwrap_err();
    let german = evaluate("5 / 0", &mut scope, Language::De).unwrap_err();
    let arabic = evaluate("5 / 0", &mut scope, Language::Ar).unwrap_err();

    assert_eq!(english.kind, german.kind);
    assert_eq!(english.kind, arabic.kind);
    assert_eq!(english.to_string(), "Result is infinite");
    assert_eq!(german.to_string(), "Ergebnis ist unendlich");
    assert_eq!(arabic.to_string(), "النتيجة لا نهائية");

    let fallback = evaluate("5 / 0", &mut scope, Language::from_code("xx")).unwrap_err();
    assert_eq!(fallback.to_string(), english.to_string());
}

#[test]
fn every_language_has_distinct_messages() {
    let mut scope = Scope::new();
    let messages: Vec<String> =
        Language::ALL.iter()
                     .map(|lang| evaluate("0 / 0", &mut scope, *lang).unwrap_err().message)
                     .collect();

    for (i, message) in messages.iter().enumerate() {
        assert!(messages[i + 1..].iter().all(|other| other != message),
                "duplicate message {message}");
    }
}

#[test]
fn non_finite_assignments_store_nothing() {
    assert_eq!(failure_kind("x = 0 / 0"), ErrorKind::InvalidOperation);
    assert_eq!(failure_kind("y = 5 / 0"), ErrorKind::InfiniteResult);

    let mut scope = Scope::new();
    assert!(evaluate("x = 0 / 0", &mut scope, Language::En).is_err());
    assert!(evaluate("y = 5 / 0; 1", &mut scope, Language::En).is_err());
    assert!(!scope.contains("x"));
    assert!(!scope.contains("y"));

    evaluate("x = 1", &mut scope, Language::En).unwrap();
    let error = evaluate("x = 1 / 0", &mut scope, Language::En).unwrap_err();
    assert_eq!(error.to_string(), "Result is infinite");
    assert_eq!(scope.get("x"), Some(&Value::Number(1.0)));
    assert_eq!(evaluate("x + 1", &mut scope, Language::En).unwrap(), Value::Number(2.0));
}

#[test]
fn conversion_left_of_equals_is_a_conversion_error() {
    assert_eq!(failure_kind("a to b = 3"), ErrorKind::ConversionError);
    assert_eq!(failure_kind("2 km to meter = 3"), ErrorKind::ConversionError);

    let mut scope = Scope::new();
    assert!(evaluate("a to b = 3", &mut scope, Language::En).is_err());
    assert!(scope.is_empty());
}
