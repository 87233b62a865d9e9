//! Placeholder scanning and substitution
//!
//! A placeholder is `{name}` where `name` is one or more ASCII letters, digits
//! or underscores. `{{` and `}}` produce literal braces. Any other brace is
//! copied through unchanged, so templates may embed JSON examples.

use std::collections::HashMap;

/// A piece of a parsed template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text copied verbatim
    Literal(&'a str),
    /// Named substitution point
    Placeholder(&'a str),
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Split a template into literal text and placeholders
pub fn parse(template: &str) -> Vec<Segment<'_>> {
    let bytes = template.as_bytes();
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'{' | b'}' if bytes.get(i + 1) == Some(&bytes[i]) => {
                // Escaped brace: keep the first, drop the second
                segments.push(Segment::Literal(&template[literal_start..=i]));
                i += 2;
                literal_start = i;
            }
            b'{' => {
                let name_start = i + 1;
                let mut end = name_start;
                while end < bytes.len() && is_name_byte(bytes[end]) {
                    end += 1;
                }
                if end > name_start && bytes.get(end) == Some(&b'}') {
                    if literal_start < i {
                        segments.push(Segment::Literal(&template[literal_start..i]));
                    }
                    segments.push(Segment::Placeholder(&template[name_start..end]));
                    i = end + 1;
                    literal_start = i;
                } else {
                    i += 1;
                }
            }
            _ => i += 1,
        }
    }

    if literal_start < bytes.len() {
        segments.push(Segment::Literal(&template[literal_start..]));
    }
    segments
}

/// Distinct placeholder names in order of first appearance
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for segment in parse(template) {
        if let Segment::Placeholder(name) = segment {
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }
    names
}

/// Substitute every placeholder from `args`
///
/// Returns the name of the first placeholder without a value on failure.
pub(crate) fn render(template: &str, args: &HashMap<String, String>) -> Result<String, String> {
    let mut out = String::with_capacity(template.len());
    for segment in parse(template) {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Placeholder(name) => match args.get(name) {
                Some(value) => out.push_str(value),
                None => return Err(name.to_string()),
            },
        }
    }
    Ok(out)
}
