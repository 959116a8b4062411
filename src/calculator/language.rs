use crate::error::ErrorKind;

/// The languages error messages can be shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// English.
    #[default]
    En,
    /// Arabic.
    Ar,
    /// Russian.
    Ru,
    /// French.
    Fr,
    /// Spanish.
    Es,
    /// German.
    De,
    /// Portuguese.
    Pt,
}

/// One message per error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub undefined_symbol:  &'static str,
    pub syntax_error:      &'static str,
    pub invalid_operation: &'static str,
    pub infinite_result:   &'static str,
    pub conversion_error:  &'static str,
}

const EN: Messages = Messages { undefined_symbol:  "Undefined symbol",
                                syntax_error:      "Syntax error",
                                invalid_operation: "Invalid operation (NaN)",
                                infinite_result:   "Result is infinite",
                                conversion_error:  "Unit conversion error", };

const AR: Messages = Messages { undefined_symbol:  "رمز غير معرف",
                                syntax_error:      "خطأ في الصياغة",
                                invalid_operation: "عملية غير صالحة (NaN)",
                                infinite_result:   "النتيجة لا نهائية",
                                conversion_error:  "خطأ في تحويل الوحدات", };

const RU: Messages = Messages { undefined_symbol:  "Неопределённый символ",
                                syntax_error:      "Синтаксическая ошибка",
                                invalid_operation: "Недопустимая операция (NaN)",
                                infinite_result:   "Результат бесконечен",
                                conversion_error:  "Ошибка преобразования единиц", };

const FR: Messages = Messages { undefined_symbol:  "Symbole non défini",
                                syntax_error:      "Erreur de syntaxe",
                                invalid_operation: "Opération invalide (NaN)",
                                infinite_result:   "Le résultat est infini",
                                conversion_error:  "Erreur de conversion d'unité", };

const ES: Messages = Messages { undefined_symbol:  "Símbolo no definido",
                                syntax_error:      "Error de sintaxis",
                                invalid_operation: "Operación no válida (NaN)",
                                infinite_result:   "El resultado es infinito",
                                conversion_error:  "Error de conversión de unidades", };

const DE: Messages = Messages { undefined_symbol:  "Undefiniertes Symbol",
                                syntax_error:      "Syntaxfehler",
                                invalid_operation: "Ungültige Operation (NaN)",
                                infinite_result:   "Ergebnis ist unendlich",
                                conversion_error:  "Fehler bei der Einheitenumrechnung", };

const PT: Messages = Messages { undefined_symbol:  "Símbolo indefinido",
                                syntax_error:      "Erro de sintaxe",
                                invalid_operation: "Operação inválida (NaN)",
                                infinite_result:   "O resultado é infinito",
                                conversion_error:  "Erro de conversão de unidades", };

impl Language {
    /// Every supported language, English first.
    pub const ALL: [Self; 7] = [Self::En, Self::Ar, Self::Ru, Self::Fr, Self::Es, Self::De, Self::Pt];

    /// Resolves a language code, falling back to English.
    ///
    /// Codes are matched case-insensitively and a region suffix such as
    /// `-BR` or `_CA` is ignored.
    ///
    /// # Example
    /// ```
    /// use numtap::Language;
    ///
    /// assert_eq!(Language::from_code("fr"), Language::Fr);
    /// assert_eq!(Language::from_code("pt-BR"), Language::Pt);
    /// assert_eq!(Language::from_code("xx"), Language::En);
    /// ```
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        let primary = code.trim().split(['-', '_']).next().unwrap_or_default();
        Self::ALL.into_iter()
                 .find(|lang| lang.code().eq_ignore_ascii_case(primary))
                 .unwrap_or_default()
    }

    /// The two-letter code of the language.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
            Self::Ru => "ru",
            Self::Fr => "fr",
            Self::Es => "es",
            Self::De => "de",
            Self::Pt => "pt",
        }
    }

    /// The message table of the language.
    #[must_use]
    pub const fn messages(self) -> &'static Messages {
        match self {
            Self::En => &EN,
            Self::Ar => &AR,
            Self::Ru => &RU,
            Self::Fr => &FR,
            Self::Es => &ES,
            Self::De => &DE,
            Self::Pt => &PT,
        }
    }

    /// The message for one error kind.
    ///
    /// # Example
    /// ```
    /// use numtap::{ErrorKind, Language};
    ///
    /// assert_eq!(Language::Es.message(ErrorKind::SyntaxError), "Error de sintaxis");
    /// ```
    #[must_use]
    pub const fn message(self, kind: ErrorKind) -> &'static str {
        let messages = self.messages();
        match kind {
            ErrorKind::UndefinedSymbol => messages.undefined_symbol,
            ErrorKind::SyntaxError => messages.syntax_error,
            ErrorKind::InvalidOperation => messages.invalid_operation,
            ErrorKind::InfiniteResult => messages.infinite_result,
            ErrorKind::ConversionError => messages.conversion_error,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
