//! Shared slug predicates and slug derivation for domain entities.
//!
//! Slugs are trimmed, non-empty identifiers composed of lowercase ASCII
//! letters, digits, and hyphens.

/// Return `true` when `value` is a valid domain slug.
pub(crate) fn is_valid_slug(value: &str) -> bool {
    is_trimmed_non_empty(value) && has_allowed_slug_chars(value)
}

/// Derive a slug from a display title.
///
/// Latin accents are folded to their base letter, other non-alphanumeric
/// runs collapse into a single hyphen, and leading or trailing hyphens are
/// dropped. Returns `None` when nothing slug-worthy remains.
///
/// # Examples
/// ```
/// use game_catalogue::domain::slugify;
///
/// assert_eq!(slugify("Jeu vidéo 49").as_deref(), Some("jeu-video-49"));
/// assert_eq!(slugify("  Œuvre: Ça!  ").as_deref(), Some("oeuvre-ca"));
/// assert_eq!(slugify("???"), None);
/// ```
pub fn slugify(title: &str) -> Option<String> {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;
    for ch in title.chars() {
        let lower = ch.to_ascii_lowercase();
        let folded = if lower.is_ascii_alphanumeric() {
            None
        } else {
            fold_accent(ch)
        };
        if !lower.is_ascii_alphanumeric() && folded.is_none() {
            pending_hyphen = true;
            continue;
        }
        if pending_hyphen && !slug.is_empty() {
            slug.push('-');
        }
        pending_hyphen = false;
        match folded {
            Some(text) => slug.push_str(text),
            None => slug.push(lower),
        }
    }
    (!slug.is_empty()).then_some(slug)
}

fn is_trimmed_non_empty(value: &str) -> bool {
    !value.is_empty() && value.trim() == value
}

fn has_allowed_slug_chars(value: &str) -> bool {
    value
        .chars()
        .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
}

/// ASCII rendering of an accented Latin letter.
fn fold_accent(ch: char) -> Option<&'static str> {
    let folded = match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => "a",
        'æ' | 'Æ' => "ae",
        'ç' | 'Ç' => "c",
        'è' | 'é' | 'ê' | 'ë' | 'È' | 'É' | 'Ê' | 'Ë' => "e",
        'ì' | 'í' | 'î' | 'ï' | 'Ì' | 'Í' | 'Î' | 'Ï' => "i",
        'ñ' | 'Ñ' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => "o",
        'œ' | 'Œ' => "oe",
        'ß' => "ss",
        'ù' | 'ú' | 'û' | 'ü' | 'Ù' | 'Ú' | 'Û' | 'Ü' => "u",
        'ý' | 'ÿ' | 'Ý' | 'Ÿ' => "y",
        _ => return None,
    };
    Some(folded)
}
