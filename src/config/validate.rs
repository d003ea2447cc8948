//! Search-term validation.
//! The term doubles as the destination folder name, so it must be usable as one
//! path component. Whitespace and case are kept exactly as typed.

use crate::errors::LocatorError;

/// Accept `term` unchanged or explain why it cannot be used.
pub fn validate_term(term: &str) -> Result<(), LocatorError> {
    let reason = if term.is_empty() {
        Some("term is empty")
    } else if term.contains(['/', '\\']) {
        Some("term contains a path separator")
    } else if term == "." || term == ".." {
        Some("term is a relative directory reference")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(LocatorError::InvalidTerm {
            term: term.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}
