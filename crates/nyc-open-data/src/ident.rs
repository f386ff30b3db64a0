//! Conversion of catalog display names into Python identifiers.
//!
//! Catalog names are free text ("311 Service Requests", "Borough / Block").
//! Generated model classes and fields need names that are valid Python
//! identifiers and do not shadow keywords or common builtins.

use crate::error::{NycError, Result};

/// Maximum number of characters kept from a display name.
pub const MAX_IDENTIFIER_LEN: usize = 50;

/// Words that may not be used as generated identifiers.
///
/// The Python keywords, builtin type names, and every name the generated
/// module binds or refers to. A field called `datetime` is assigned in the
/// class namespace before later annotations are evaluated, so it must not
/// match an annotation name.
pub const RESERVED_WORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield", // builtins and legacy deny-list
    "bool", "float", "form", "int", "register", "str", // generated module names
    "BaseModel", "DATASETS", "Dict", "Field", "List", "Optional", "Type", "datetime",
];

/// Turn an arbitrary display name into a valid, non-reserved identifier.
///
/// Non-alphanumeric characters (underscores included) are dropped and the
/// result is truncated to [`MAX_IDENTIFIER_LEN`] characters. If that is not
/// usable, a single leading underscore is tried before giving up.
///
/// # Example
///
/// ```
/// use nyc_open_data::sanitize_identifier;
///
/// assert_eq!(sanitize_identifier("Borough Name").unwrap(), "BoroughName");
/// assert_eq!(sanitize_identifier("311 Service Requests").unwrap(), "_311ServiceRequests");
/// assert_eq!(sanitize_identifier("class").unwrap(), "_class");
/// ```
pub fn sanitize_identifier(name: &str) -> Result<String> {
    let cleaned: String = name
        .chars()
        .filter(|c| c.is_alphanumeric())
        .take(MAX_IDENTIFIER_LEN)
        .collect();

    if is_usable(&cleaned) {
        return Ok(cleaned);
    }

    let prefixed = format!("_{}", cleaned);
    if is_usable(&prefixed) {
        return Ok(prefixed);
    }

    Err(NycError::Sanitization {
        name: name.to_string(),
        attempt: prefixed,
    })
}

/// Check whether a name is a syntactically valid Python identifier.
pub fn is_valid_identifier(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if first == '_' || unicode_ident::is_xid_start(first) => {
            chars.all(unicode_ident::is_xid_continue)
        }
        _ => false,
    }
}

/// Check whether a name is on the reserved list.
pub fn is_reserved(candidate: &str) -> bool {
    RESERVED_WORDS.contains(&candidate)
}

fn is_usable(candidate: &str) -> bool {
    is_valid_identifier(candidate) && !is_reserved(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_is_kept() {
        assert_eq!(sanitize_identifier("created_date").unwrap(), "createddate");
        assert_eq!(sanitize_identifier("Borough").unwrap(), "Borough");
    }

    #[test]
    fn test_punctuation_and_spaces_are_stripped() {
        assert_eq!(
            sanitize_identifier("Agency (Name) / Code").unwrap(),
            "AgencyNameCode"
        );
    }

    #[test]
    fn test_leading_digit_gets_underscore() {
        assert_eq!(
            sanitize_identifier("311 Service Requests").unwrap(),
            "_311ServiceRequests"
        );
    }

    #[test]
    fn test_reserved_word_gets_underscore() {
        assert_eq!(sanitize_identifier("class").unwrap(), "_class");
        assert_eq!(sanitize_identifier("None").unwrap(), "_None");
        assert_eq!(sanitize_identifier("str").unwrap(), "_str");
    }

    #[test]
    fn test_annotation_names_get_underscore() {
        assert_eq!(sanitize_identifier("datetime").unwrap(), "_datetime");
        assert_eq!(sanitize_identifier("float").unwrap(), "_float");
        assert_eq!(sanitize_identifier("Optional").unwrap(), "_Optional");
        assert_eq!(sanitize_identifier("Field").unwrap(), "_Field");
        assert_eq!(sanitize_identifier("BaseModel").unwrap(), "_BaseModel");
        // "date_time" strips to the reserved name
        assert_eq!(sanitize_identifier("date_time").unwrap(), "_datetime");
    }

    #[test]
    fn test_reserved_words_are_case_sensitive() {
        assert_eq!(sanitize_identifier("Class").unwrap(), "Class");
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        assert_eq!(sanitize_identifier("").unwrap(), "_");
        assert_eq!(sanitize_identifier("!@#$ %^&*").unwrap(), "_");
        assert_eq!(sanitize_identifier("___").unwrap(), "_");
    }

    #[test]
    fn test_truncates_after_stripping() {
        let name = format!("{} tail", "a".repeat(60));
        let ident = sanitize_identifier(&name).unwrap();
        assert_eq!(ident.chars().count(), MAX_IDENTIFIER_LEN);
        assert!(ident.chars().all(|c| c == 'a'));
    }

    #[test]
    fn test_truncated_digit_name_is_51_chars() {
        let name = "9".repeat(80);
        let ident = sanitize_identifier(&name).unwrap();
        assert_eq!(ident.chars().count(), MAX_IDENTIFIER_LEN + 1);
        assert!(ident.starts_with('_'));
    }

    #[test]
    fn test_unresolvable_name_fails() {
        // Superscript two is alphanumeric but never part of an identifier.
        let err = sanitize_identifier("²").unwrap_err();
        match err {
            NycError::Sanitization { name, attempt } => {
                assert_eq!(name, "²");
                assert_eq!(attempt, "_²");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unicode_letters_are_kept() {
        assert_eq!(sanitize_identifier("Año Fiscal").unwrap(), "AñoFiscal");
    }

    #[test]
    fn test_is_valid_identifier() {
        assert!(is_valid_identifier("_"));
        assert!(is_valid_identifier("abc123"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("1abc"));
        assert!(!is_valid_identifier("a-b"));
    }

    #[test]
    fn test_sanitize_is_deterministic() {
        for name in ["", "class", "311 Service Requests", "x y z"] {
            let first = sanitize_identifier(name).unwrap();
            let second = sanitize_identifier(name).unwrap();
            assert_eq!(first, second);
        }
    }
}
