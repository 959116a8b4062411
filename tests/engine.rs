use numtap::{ErrorKind, Language, Scope, evaluate};
use pretty_assertions::assert_eq;

fn assert_value(src: &str, expected: &str) {
    let mut scope = Scope::new();
    match evaluate(src, &mut scope, Language::En) {
        Ok(value) => assert_eq!(value.to_string(), expected, "input: {src}"),
        Err(e) => panic!("{src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) {
    let mut scope = Scope::new();
    match evaluate(src, &mut scope, Language::En) {
        Ok(value) => panic!("{src:?} succeeded with {value} but was expected to fail"),
        Err(e) => assert_eq!(e.kind, kind, "input: {src}, message: {e}"),
    }
}

#[test]
fn operator_precedence() {
    assert_value("1 + 2 * 3", "7");
    assert_value("(1 + 2) * 3", "9");
    assert_value("10 / 4", "2.5");
    assert_value("10 - 4 - 3", "3");
    assert_value("2 ^ 3 ^ 2", "512");
    assert_value("-2 ^ 2", "-4");
    assert_value("2 ^ -1", "0.5");
    assert_value("7 % 3", "1");
    assert_value("-7 % 3", "2");
}

#[test]
fn number_literals() {
    assert_value("42", "42");
    assert_value(".5 + 1e3", "1000.5");
    assert_value("2.5e-1", "0.25");
}

#[test]
fn implicit_multiplication() {
    assert_value("2(3 + 4)", "14");
    assert_value("x = 3; 2x", "6");
    assert_value("2 pi", "6.2831853071796");
    assert_value("3 * 2 kg", "6 kg");
}

#[test]
fn factorials() {
    assert_value("5!", "120");
    assert_value("0!", "1");
    assert_value("3!!", "720");
    assert_value("-4!", "-24");
    assert_value("factorial(6)", "720");
}

#[test]
fn builtin_functions() {
    assert_value("sqrt(16)", "4");
    assert_value("cbrt(27)", "3");
    assert_value("abs(-3)", "3");
    assert_value("sign(-42)", "-1");
    assert_value("sign(0)", "0");
    assert_value("exp(0)", "1");
    assert_value("log(8, 2)", "3");
    assert_value("log10(1000)", "3");
    assert_value("ln(e)", "1");
    assert_value("hypot(3, 4)", "5");
    assert_value("nthRoot(-8, 3)", "-2");
    assert_value("pow(2, 10)", "1024");
    assert_value("mod(-7, 3)", "2");
    assert_value("min(3, 1, 2)", "1");
    assert_value("max(3, 1, 2)", "3");
}

#[test]
fn rounding() {
    assert_value("round(3.7)", "4");
    assert_value("round(3.14159, 2)", "3.14");
    assert_value("floor(-2.5)", "-3");
    assert_value("ceil(2.1)", "3");
    assert_value("fix(-2.7)", "-2");
    assert_failure("round(2.5, 0.5)", ErrorKind::SyntaxError);
}

#[test]
fn trigonometry() {
    assert_value("sin(pi / 2)", "1");
    assert_value("cos(0)", "1");
    assert_value("sin(90 deg)", "1");
    assert_value("cos(180 deg)", "-1");
    assert_value("atan2(1, 1) * 4", "3.1415926535898");
    assert_failure("sin(3 m)", ErrorKind::SyntaxError);
}

#[test]
fn constants() {
    assert_value("pi", "3.1415926535898");
    assert_value("e", "2.718281828459");
    assert_value("tau / pi", "2");
}

#[test]
fn comparisons() {
    assert_value("0.1 + 0.2 == 0.3", "true");
    assert_value("3 > 5", "false");
    assert_value("2 <= 2", "true");
    assert_value("2 != 3", "true");
    assert_value("true == false", "false");
    assert_value("1 km > 999 m", "true");
}

#[test]
fn quantity_arithmetic() {
    assert_value("2 km + 500 m", "2.5 km");
    assert_value("2 km / 500 m", "4");
    assert_value("10 kg / 4", "2.5 kg");
    assert_value("-5 degC", "-5 degC");
    assert_value("abs(-3 m)", "3 m");
    assert_value("max(1 km, 900 m)", "1 km");
    assert_failure("1 km + 1 kg", ErrorKind::SyntaxError);
    assert_failure("2 m ^ 2", ErrorKind::SyntaxError);
}

#[test]
fn number_formatting() {
    assert_value("123456 * 2", "2.46912e+5");
    assert_value("1 / 4000", "2.5e-4");
    assert_value("2 ^ 0.5", "1.4142135623731");
    assert_value("1 / 3", "0.33333333333333");
}

#[test]
fn parse_errors_are_syntax_errors() {
    assert_failure("5 +", ErrorKind::SyntaxError);
    assert_failure("(1 + 2", ErrorKind::SyntaxError);
    assert_failure("* 3", ErrorKind::SyntaxError);
    assert_failure("5 $ 3", ErrorKind::SyntaxError);
    assert_failure("2 + 3 )", ErrorKind::SyntaxError);
    assert_failure("f(x = 2)", ErrorKind::SyntaxError);
}

#[test]
fn function_errors_are_syntax_errors() {
    assert_failure("frobnicate(1)", ErrorKind::SyntaxError);
    assert_failure("sqrt(1, 2)", ErrorKind::SyntaxError);
    assert_failure("sqrt(true)", ErrorKind::SyntaxError);
}

#[test]
fn reserved_names_cannot_be_assigned() {
    assert_failure("pi = 3", ErrorKind::SyntaxError);
    assert_failure("sqrt = 2", ErrorKind::SyntaxError);
    assert_value("radius = 2; pi radius ^ 2", "12.566370614359");
}

#[test]
fn unknown_variable_is_error() {
    assert_failure("one + 1", ErrorKind::UndefinedSymbol);
    assert_failure("y = x + 1", ErrorKind::UndefinedSymbol);
}

#[test]
fn deep_nesting_is_a_syntax_error() {
    let parens = 100_000;
    assert_failure(&format!("{}1{}", "(".repeat(parens), ")".repeat(parens)),
                   ErrorKind::SyntaxError);
    assert_failure(&format!("{}1{}", "(".repeat(300), ")".repeat(300)), ErrorKind::SyntaxError);
    assert_failure(&format!("{}1", "-".repeat(500)), ErrorKind::SyntaxError);
    assert_failure(&format!("{}2", "2^".repeat(400)), ErrorKind::SyntaxError);
    assert_failure(&format!("sqrt({}4{})", "abs(".repeat(200), ")".repeat(200)),
                   ErrorKind::SyntaxError);
}

#[test]
fn overlong_expressions_are_syntax_errors() {
    assert_failure(&format!("{}1", "1+".repeat(100_000)), ErrorKind::SyntaxError);
    assert_failure(&format!("x = {}1", "1*".repeat(2_000)), ErrorKind::SyntaxError);
}

#[test]
fn moderate_nesting_still_evaluates() {
    assert_value(&format!("{}7{}", "(".repeat(50), ")".repeat(50)), "7");
    assert_value(&format!("{}1", "1+".repeat(500)), "501");
    assert_value(&format!("{}16{}", "sqrt(".repeat(2), ")".repeat(2)), "2");
}
