//! printf-style value formatting for slider labels.
//!
//! Callers (including C code) pass formats such as `"%d"`, `"%.1f"` or
//! `"%.1f, %.1f"`. Only the conversions a slider can show are understood;
//! anything else is copied through verbatim.

use std::fmt::Write as _;

/// One parsed conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conv {
    Int,
    Float { precision: usize },
}

/// Render `value` through the first conversion in `fmt`.
///
/// Literal text around the conversion is kept, `%%` prints a percent sign,
/// and a format without any conversion is returned as-is.
pub fn format_value(fmt: &str, value: f64) -> String {
    let mut out   = String::with_capacity(fmt.len() + 8);
    let mut used  = false;
    let mut chars = fmt.char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }
        if let Some(&(_, '%')) = chars.peek() {
            chars.next();
            out.push('%');
            continue;
        }
        match parse_conv(&fmt[i + 1..]) {
            Some((conv, len)) if !used => {
                for _ in 0..len { chars.next(); }
                match conv {
                    Conv::Int                => { let _ = write!(out, "{}", value.round() as i64); }
                    Conv::Float { precision } => { let _ = write!(out, "{value:.precision$}"); }
                }
                used = true;
            }
            Some((_, len)) => {
                // Second conversion with no argument left; drop it.
                for _ in 0..len { chars.next(); }
            }
            None => out.push('%'),
        }
    }
    out
}

/// Split a two-value format such as `"%.1f, %.1f"` into one format per value.
///
/// The first half ends after the first conversion; the second half starts
/// after the separator. Formats with fewer than two conversions are used
/// for both halves.
pub fn split_pair(fmt: &str) -> (&str, &str) {
    let Some(first_end) = conversion_end(fmt) else { return (fmt, fmt) };
    let rest = fmt[first_end..].trim_start_matches(|c: char| c == ',' || c == ';' || c == '/' || c.is_whitespace());
    if conversion_end(rest).is_none() {
        return (fmt, fmt);
    }
    (&fmt[..first_end], rest)
}

/// Byte offset just past the first conversion.
fn conversion_end(fmt: &str) -> Option<usize> {
    let bytes = fmt.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if bytes.get(i + 1) == Some(&b'%') { i += 2; continue; }
            if let Some((_, len)) = parse_conv(&fmt[i + 1..]) {
                return Some(i + 1 + len);
            }
        }
        i += 1;
    }
    None
}

/// Number of decimals a float format displays (default 3, ints 0).
pub fn precision_of(fmt: &str) -> usize {
    let bytes = fmt.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'%' {
            if let Some((conv, _)) = parse_conv(&fmt[i + 1..]) {
                return match conv {
                    Conv::Int                 => 0,
                    Conv::Float { precision } => precision,
                };
            }
        }
    }
    3
}

/// Largest precision honoured; formats can come from C callers.
const MAX_PRECISION: usize = 32;

/// Parse flags/width/precision/conversion following a `%`.
/// Returns the conversion and the number of bytes consumed.
fn parse_conv(s: &str) -> Option<(Conv, usize)> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() && matches!(bytes[i], b'-' | b'+' | b' ' | b'#' | b'0') { i += 1; }
    while i < bytes.len() && bytes[i].is_ascii_digit() { i += 1; }

    let mut precision = None;
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() { i += 1; }
        let digits = &s[start..i];
        precision = Some(if digits.is_empty() {
            0
        } else {
            digits.parse::<usize>().map_or(MAX_PRECISION, |p| p.min(MAX_PRECISION))
        });
    }

    match bytes.get(i)? {
        b'd' | b'i' | b'u'         => Some((Conv::Int, i + 1)),
        b'f' | b'F' | b'g' | b'G'  => Some((Conv::Float { precision: precision.unwrap_or(6) }, i + 1)),
        _ => None,
    }
}
