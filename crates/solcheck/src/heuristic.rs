use std::sync::OnceLock;

use regex::Regex;

use crate::types::ValidationResult;

/// Substrings every contract must contain, checked in this order.
pub const REQUIRED_ELEMENTS: [&str; 3] = ["pragma solidity", "contract", "{"];

static FUNCTION_DECL: OnceLock<Regex> = OnceLock::new();

fn function_decl() -> &'static Regex {
    FUNCTION_DECL.get_or_init(|| Regex::new(r"function\s+\w+\s*\(").expect("static pattern"))
}

/// Textual plausibility check. Not a parser: braces inside comments or
/// strings are counted like any other.
pub fn basic_syntax_validation(code: &str) -> ValidationResult {
    if let Some(missing) = REQUIRED_ELEMENTS.iter().find(|e| !code.contains(*e)) {
        return ValidationResult::invalid(format!("Missing required element: {missing}"));
    }

    if code.matches('{').count() != code.matches('}').count() {
        return ValidationResult::invalid("Unbalanced braces");
    }

    if code.matches('(').count() != code.matches(')').count() {
        return ValidationResult::invalid("Unbalanced parentheses");
    }

    if !function_decl().is_match(code) {
        return ValidationResult::invalid("No function declarations found");
    }

    ValidationResult::valid("Basic syntax validation passed")
}
