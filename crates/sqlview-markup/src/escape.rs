#![forbid(unsafe_code)]

//! HTML escaping for token text.
//!
//! Escaping is applied to every token regardless of its category, so nothing
//! from the source can open a tag, close an attribute, or start an entity.

use std::borrow::Cow;

fn entity(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// HTML-escape a string into the output buffer.
pub fn escape_into(out: &mut String, s: &str) {
    let mut last = 0;
    for (i, c) in s.char_indices() {
        if let Some(replacement) = entity(c) {
            out.push_str(&s[last..i]);
            out.push_str(replacement);
            last = i + c.len_utf8();
        }
    }
    out.push_str(&s[last..]);
}

/// HTML-escape a string, borrowing when nothing needs replacing.
pub fn escape(s: &str) -> Cow<'_, str> {
    if s.chars().any(|c| entity(c).is_some()) {
        let mut out = String::with_capacity(s.len() + 16);
        escape_into(&mut out, s);
        Cow::Owned(out)
    } else {
        Cow::Borrowed(s)
    }
}

/// Reverse [`escape`]. Entities it never produces are left untouched.
pub fn unescape(s: &str) -> String {
    const ENTITIES: [(&str, char); 5] = [
        ("&amp;", '&'),
        ("&lt;", '<'),
        ("&gt;", '>'),
        ("&quot;", '"'),
        ("&#39;", '\''),
    ];

    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        match ENTITIES.iter().find(|(name, _)| tail.starts_with(name)) {
            Some((name, c)) => {
                out.push(*c);
                rest = &tail[name.len()..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
