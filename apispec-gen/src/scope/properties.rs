//! Java-style `.properties` reader.
//!
//! Differs from `java.util.Properties` in one respect: the key ends at the first
//! unescaped `=` when the line has one, so scope names like `read:foo` need no escaping.

use std::collections::BTreeMap;

pub(super) fn parse(content: &str) -> Result<BTreeMap<String, String>, String> {
    let mut entries = BTreeMap::new();
    for (number, line) in logical_lines(content) {
        let (key, value) = split_entry(&line);
        let key = unescape(key).map_err(|e| format!("line {number}: {e}"))?;
        let value = unescape(value).map_err(|e| format!("line {number}: {e}"))?;
        entries.insert(key, value);
    }
    Ok(entries)
}

/// Join continued lines and drop blanks and comments. Each entry carries the 1-based
/// number of the physical line it starts on.
fn logical_lines(content: &str) -> Vec<(usize, String)> {
    let mut lines = Vec::new();
    let mut pending: Option<(usize, String)> = None;
    for (index, raw) in content.lines().enumerate() {
        let trimmed = raw.trim_start();
        let (number, mut line) = match pending.take() {
            Some(continued) => continued,
            None => {
                if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                    continue;
                }
                (index + 1, String::new())
            }
        };
        if ends_with_continuation(trimmed) {
            line.push_str(&trimmed[..trimmed.len() - 1]);
            pending = Some((number, line));
        } else {
            line.push_str(trimmed);
            lines.push((number, line));
        }
    }
    lines.extend(pending);
    lines
}

fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

fn split_entry(line: &str) -> (&str, &str) {
    let mut equals = None;
    let mut colon = None;
    let mut space = None;
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' if equals.is_none() => equals = Some(i),
            ':' if colon.is_none() => colon = Some(i),
            c if c.is_whitespace() && space.is_none() => space = Some(i),
            _ => {}
        }
    }
    match (equals.or(colon), space) {
        (Some(i), _) => (line[..i].trim_end(), line[i + 1..].trim_start()),
        (None, Some(i)) => (&line[..i], line[i..].trim_start()),
        (None, None) => (line, ""),
    }
}

fn unescape(raw: &str) -> Result<String, String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some('u') => {
                let unit = code_unit(&mut chars)?;
                let decoded = if (0xD800..=0xDBFF).contains(&unit) {
                    // Characters above U+FFFF come as a `\uXXXX\uXXXX` surrogate pair.
                    let low = match (chars.next(), chars.next()) {
                        (Some('\\'), Some('u')) => code_unit(&mut chars)?,
                        _ => return Err(format!("unpaired surrogate `\\u{unit:04X}`")),
                    };
                    char::decode_utf16([unit, low]).next().and_then(|c| c.ok())
                } else {
                    char::from_u32(u32::from(unit))
                };
                out.push(decoded.ok_or_else(|| format!("unpaired surrogate `\\u{unit:04X}`"))?);
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    Ok(out)
}

/// Read the four hex digits following `\u`.
fn code_unit(chars: &mut std::str::Chars) -> Result<u16, String> {
    let hex: String = chars.by_ref().take(4).collect();
    (hex.len() == 4 && hex.chars().all(|c| c.is_ascii_hexdigit()))
        .then(|| u16::from_str_radix(&hex, 16).ok())
        .flatten()
        .ok_or_else(|| format!("malformed \\uxxxx escape `\\u{hex}`"))
}
