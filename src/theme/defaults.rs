use super::roles::{
    FIELD, FOREGROUND, JAVADOC, JAVADOC_KEYWORD, JAVADOC_LINK, JAVADOC_TAG, METHOD,
    MULTI_LINE_COMMENT,
};
use super::ThemeEntries;

/// `(role, fallback_role)` pairs applied in order.
///
/// Order matters: a fallback role must be resolved by an earlier row (or be a
/// root that no row defaults) before any row reads it.
pub const DEFAULT_FALLBACKS: &[(&str, &str)] = &[
    (METHOD, FOREGROUND),
    (FIELD, FOREGROUND),
    (JAVADOC, MULTI_LINE_COMMENT),
    (JAVADOC_LINK, JAVADOC),
    (JAVADOC_TAG, JAVADOC),
    (JAVADOC_KEYWORD, JAVADOC),
];

/// Fill missing roles from [`DEFAULT_FALLBACKS`].
///
/// Roles already present are never touched. A role whose fallback is absent
/// stays absent.
pub fn apply_defaults(entries: &mut ThemeEntries) {
    apply_fallbacks(entries, DEFAULT_FALLBACKS);
}

/// Copying variant of [`apply_defaults`].
pub fn resolved(entries: &ThemeEntries) -> ThemeEntries {
    let mut entries = entries.clone();
    apply_defaults(&mut entries);
    entries
}

fn apply_fallbacks(entries: &mut ThemeEntries, table: &[(&str, &str)]) {
    for &(role, fallback) in table {
        if entries.contains_key(role) {
            continue;
        }
        if let Some(color) = entries.get(fallback).cloned() {
            entries.insert(role.to_string(), color);
        }
    }
}
