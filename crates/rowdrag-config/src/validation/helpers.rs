//! Shared helpers used by the validators.

use crate::selector::Selector;

/// Push an error if `value` is not a supported selector. An empty value is
/// accepted only when `allow_empty` is set.
pub(crate) fn validate_selector(
    errors: &mut Vec<String>,
    name: &str,
    value: &str,
    allow_empty: bool,
) {
    if allow_empty && value.trim().is_empty() {
        return;
    }
    if let Err(e) = Selector::parse(value) {
        errors.push(format!("{name}: {e}"));
    }
}
