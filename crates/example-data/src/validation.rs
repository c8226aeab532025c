//! Reviewer display name rules.
//!
//! Generated reviewer names are shown next to every review, so they follow
//! the same shape as hand-registered usernames:
//!
//! - Between 3 and 30 characters
//! - ASCII letters, digits, spaces, hyphens, and underscores only
//! - No leading or trailing whitespace

/// Minimum allowed length for a display name.
pub const DISPLAY_NAME_MIN: usize = 3;

/// Maximum allowed length for a display name.
pub const DISPLAY_NAME_MAX: usize = 30;

/// Returns `true` when `name` is usable as a reviewer display name.
///
/// # Examples
///
/// ```
/// use example_data::is_valid_display_name;
///
/// assert!(is_valid_display_name("Ada Lovelace"));
/// assert!(is_valid_display_name("Marie-Claire"));
/// assert!(!is_valid_display_name("ab"));
/// assert!(!is_valid_display_name("O'Brien"));
/// assert!(!is_valid_display_name(" Ada"));
/// ```
#[must_use]
pub fn is_valid_display_name(name: &str) -> bool {
    let length = name.chars().count();
    if !(DISPLAY_NAME_MIN..=DISPLAY_NAME_MAX).contains(&length) {
        return false;
    }
    if name.trim() != name {
        return false;
    }
    name.chars().all(is_display_name_char)
}

const fn is_display_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_')
}

/// Replaces disallowed characters with underscores, trims surrounding
/// whitespace, and truncates to [`DISPLAY_NAME_MAX`] characters.
pub(crate) fn normalise_display_name(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| if is_display_name_char(c) { c } else { '_' })
        .take(DISPLAY_NAME_MAX)
        .collect();
    replaced.trim().to_owned()
}
