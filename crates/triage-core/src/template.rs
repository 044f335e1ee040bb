//! Minimal `{name}` placeholder templating for response text.

/// Placeholders a response template may reference.
pub const PLACEHOLDERS: &[&str] = &["event", "location", "safety_measures", "contact"];

/// Names of every `{name}` placeholder in `template`, in order of appearance.
///
/// Only brace pairs enclosing a non-empty run of ASCII lowercase letters,
/// digits or underscores count as placeholders.
#[must_use]
pub fn placeholder_names(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        match after.find(['{', '}']) {
            Some(close) if after.as_bytes()[close] == b'}' => {
                let name = &after[..close];
                if is_placeholder_name(name) {
                    names.push(name);
                }
                rest = &after[close + 1..];
            }
            Some(next_open) => rest = &after[next_open..],
            None => break,
        }
    }
    names
}

/// Substitute `values` into `template` in a single pass.
///
/// Substituted text is never rescanned, so a value containing `{contact}`
/// stays literal. Placeholders without a value are left untouched.
#[must_use]
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (close, *value))
        });
        match value {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
}
