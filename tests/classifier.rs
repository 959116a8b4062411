use numtap::{
    CalcError, ErrorKind, Language,
    calculator::classifier::{Classify, classify},
    error::{InterpreterError, ParseError, RuntimeError},
};
use pretty_assertions::assert_eq;

#[test]
fn known_patterns() {
    let error = classify("Error on line 1: Undefined symbol radius", Language::En);
    assert_eq!(error.kind, ErrorKind::UndefinedSymbol);
    assert_eq!(error.detail.as_deref(), Some("radius"));

    let error = classify("Error on line 1: Unexpected operator *", Language::En);
    assert_eq!(error.kind, ErrorKind::SyntaxError);
    assert_eq!(error.detail, None);
}

#[test]
fn unmatched_messages_fall_back_to_syntax_error() {
    for raw in ["", "Error on line 3: Parenthesis ) expected", "Units km and kg do not match", "???"] {
        assert_eq!(classify(raw, Language::En).kind, ErrorKind::SyntaxError, "raw: {raw}");
    }
}

#[test]
fn classified_errors_pass_through() {
    let infinite = CalcError::new(ErrorKind::InfiniteResult, Language::Fr);
    assert_eq!(infinite.clone().classify(Language::En), infinite);

    let owned = String::from("Error on line 1: Undefined symbol q");
    assert_eq!(owned.classify(Language::Es).to_string(), "Símbolo no definido: q");
}

#[test]
fn messages_are_localized() {
    let cases = [(Language::En, "Syntax error"),
                 (Language::Ar, "خطأ في الصياغة"),
                 (Language::Ru, "Синтаксическая ошибка"),
                 (Language::Fr, "Erreur de syntaxe"),
                 (Language::Es, "Error de sintaxis"),
                 (Language::De, "Syntaxfehler"),
                 (Language::Pt, "Erro de sintaxe")];

    for (lang, expected) in cases {
        let error = "Unexpected operator +".classify(lang);
        assert_eq!(error.kind, ErrorKind::SyntaxError);
        assert_eq!(error.message, expected);
    }
}

#[test]
fn language_codes() {
    assert_eq!(Language::from_code("en"), Language::En);
    assert_eq!(Language::from_code("RU"), Language::Ru);
    assert_eq!(Language::from_code("pt_BR"), Language::Pt);
    assert_eq!(Language::from_code(" de "), Language::De);
    assert_eq!(Language::from_code(""), Language::En);
    assert_eq!(Language::from_code("klingon"), Language::En);

    for lang in Language::ALL {
        assert_eq!(Language::from_code(lang.code()), lang);
    }
}

#[test]
fn unknown_language_uses_english_messages() {
    let lang = Language::from_code("zz");
    for kind in [ErrorKind::UndefinedSymbol,
                 ErrorKind::SyntaxError,
                 ErrorKind::InvalidOperation,
                 ErrorKind::InfiniteResult,
                 ErrorKind::ConversionError]
    {
        assert_eq!(lang.message(kind), Language::En.message(kind));
    }
}

#[test]
fn engine_errors_by_variant() {
    let nan = InterpreterError::from(RuntimeError::NotANumber { name: "x".to_string(),
                                                                line: 1, });
    assert_eq!(nan.classify(Language::En).kind, ErrorKind::InvalidOperation);

    let infinite = InterpreterError::from(RuntimeError::InfiniteValue { name: "x".to_string(),
                                                                        line: 1, });
    let error = infinite.classify(Language::De);
    assert_eq!(error.kind, ErrorKind::InfiniteResult);
    assert_eq!(error.to_string(), "Ergebnis ist unendlich");

    let deep = InterpreterError::from(ParseError::NestingTooDeep { line: 1 });
    assert_eq!(deep.classify(Language::En).kind, ErrorKind::SyntaxError);

    let undefined = InterpreterError::from(RuntimeError::UndefinedSymbol { name: "r".to_string(),
                                                                           line: 1, });
    assert_eq!(undefined.classify(Language::En).detail.as_deref(), Some("r"));
}
