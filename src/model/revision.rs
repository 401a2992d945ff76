//! Revision-letter handling for part identifiers.
//!
//! Engineering-change convention: a part identifier carries a trailing
//! uppercase revision letter (`161-00345A`), and a change to any child part
//! bumps the letter of every enclosing assembly (A→B→C…).

/// Bump the trailing revision letter of a part identifier.
///
/// If the final character is an ASCII uppercase letter below `Z`, it is
/// replaced with the next letter. Anything else (empty string, digit or
/// lowercase tail, or a `Z` that has nowhere to go) is returned unchanged.
/// There is no wraparound and no failure mode.
#[must_use]
pub fn increment_suffix(id: &str) -> String {
    match id.chars().last() {
        Some(last) if last.is_ascii_uppercase() && last != 'Z' => {
            let next = (last as u8 + 1) as char;
            let mut bumped = String::with_capacity(id.len());
            bumped.push_str(&id[..id.len() - 1]);
            bumped.push(next);
            bumped
        }
        _ => id.to_string(),
    }
}
