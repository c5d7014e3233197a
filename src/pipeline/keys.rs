//! Output key naming.
//!
//! Every endpoint path maps to a flat camel-case key, e.g.
//! `/tag/get/all_by_group` becomes `tagByGroup`. The generated snapshot's
//! schema depends on this mapping, so each step below is load-bearing.

/// Derives the snapshot key for an endpoint path.
pub fn transform_path(path: &str) -> String {
    let stripped = path.replacen("/get/all", "", 1);
    let slashed = stripped.replace('_', "/");

    let joined = slashed
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join("_");

    let joined = joined.strip_prefix('_').unwrap_or(&joined);
    let key = joined.replace('_', "");

    lowercase_first(&key)
}

/// First character titlecased, the rest lowercased.
fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => {
            let mut out = titlecase(first);
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// Titlecase mapping. It differs from uppercase only for the Latin
/// digraphs and the Latin ligatures; everything else falls back to
/// `char::to_uppercase`.
// TODO: Greek letters with ypogegrammeni (U+1F80..U+1FFC) and the Armenian
// ligatures still go through the uppercase mapping.
fn titlecase(c: char) -> String {
    let mapped = match c {
        '\u{01C4}'..='\u{01C6}' => "\u{01C5}",
        '\u{01C7}'..='\u{01C9}' => "\u{01C8}",
        '\u{01CA}'..='\u{01CC}' => "\u{01CB}",
        '\u{01F1}'..='\u{01F3}' => "\u{01F2}",
        '\u{FB00}' => "Ff",
        '\u{FB01}' => "Fi",
        '\u{FB02}' => "Fl",
        '\u{FB03}' => "Ffi",
        '\u{FB04}' => "Ffl",
        '\u{FB05}' | '\u{FB06}' => "St",
        _ => return c.to_uppercase().collect(),
    };
    mapped.to_string()
}

fn lowercase_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
