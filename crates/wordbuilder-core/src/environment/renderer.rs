//! Natural-language rendering of environment structures.

use super::types::Slot;

/// First letters that take "an" for a feature bundle.
const VOWEL_LETTERS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Describe a valid slot sequence, e.g. "between a consonant and a vowel".
///
/// One pass over the slots fills two buffers: positional wording for the
/// focus marker goes into the intro, everything else into the body. Slots
/// contribute their own separators; nothing is inserted between them. A
/// single trailing `", "` left by a final feature bundle is stripped at the
/// very end, and no other whitespace cleanup happens.
pub(super) fn describe(slots: &[Slot]) -> String {
    let mut intro = String::new();
    let mut body = String::new();
    let last = slots.len().saturating_sub(1);

    for (i, slot) in slots.iter().enumerate() {
        match slot {
            Slot::Features(labels) => {
                // Empty bundles carry nothing to render; skip them silently.
                let Some(first) = labels.first() else { continue };
                body.push_str(article_for(first));
                for label in labels {
                    body.push_str(label);
                    body.push_str(", ");
                }
            }
            Slot::Focus => {
                // The first-position check wins when a lone focus marker is
                // both first and last.
                if i == 0 {
                    intro.push_str("before ");
                } else if i == last {
                    intro.push_str("after ");
                } else {
                    intro.push_str("between ");
                    body.push_str(" and ");
                }
            }
            // Bare category labels always take "a"; only feature bundles get
            // the vowel-sensitive article.
            Slot::Category(label) => {
                body.push_str("a ");
                body.push_str(label);
            }
        }
    }

    if body.ends_with(", ") {
        body.truncate(body.len() - 2);
    }
    format!("{intro}{body}")
}

/// Indefinite article for a bundle's first label: case-insensitive check of
/// the first character against `a, e, i, o, u`, nothing more.
fn article_for(label: &str) -> &'static str {
    let vowel_initial = label
        .chars()
        .next()
        .is_some_and(|c| VOWEL_LETTERS.contains(&c.to_ascii_lowercase()));
    if vowel_initial {
        "an "
    } else {
        "a "
    }
}
