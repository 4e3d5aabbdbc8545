use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// `$$`, `$name` or `${name}`; names are ASCII identifiers.
static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$(?:(\$)|([_A-Za-z][_A-Za-z0-9]*)|\{([_A-Za-z][_A-Za-z0-9]*)\})")
        .expect("placeholder pattern is valid")
});

/// Substitutes `$name` and `${name}` placeholders found in `mapping`.
///
/// Unknown or malformed placeholders are left untouched and `$$` renders a
/// literal `$`, so detector cards containing unrelated dollar signs survive.
pub fn safe_substitute(template: &str, mapping: &BTreeMap<String, String>) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures<'_>| {
            if caps.get(1).is_some() {
                return "$".to_string();
            }
            caps.get(2)
                .or_else(|| caps.get(3))
                .and_then(|name| mapping.get(name.as_str()))
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
