use std::ops::Range;

use crate::common::ShortString;
use crate::error::Error;

// -----------------------------------------------------------------------

/// The field separators trailing some EMBL tokens (`P12345;`, `PRT;`).
const SEPARATORS: &[char] = &[';', ',', '.'];

// -----------------------------------------------------------------------

/// Split `line` on whitespace, skipping the marker token.
pub fn tokens_after_marker(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace().skip(1)
}

/// Remove a single trailing separator character from `token`, if any.
pub fn strip_separator(token: &str) -> &str {
    match token.chars().last() {
        Some(c) if SEPARATORS.contains(&c) => &token[..token.len() - c.len_utf8()],
        _ => token,
    }
}

/// Extract the trimmed text found in `range` of `line`.
///
/// Ranges extending past the end of the line are clipped, since header
/// lines of older records often omit their trailing fields. Ranges that
/// do not fall on character boundaries are reported as malformed.
pub fn fixed_column<'a>(
    line: &'a str,
    range: &Range<usize>,
    field: &'static str,
    line_number: usize,
) -> Result<&'a str, Error> {
    let end = range.end.min(line.len());
    if range.start >= end {
        return Ok("");
    }
    line.get(range.start..end)
        .map(str::trim)
        .ok_or_else(|| Error::malformed(field, line_number, line))
}

/// Parse a sequence length token.
pub fn parse_length(token: &str, line_number: usize) -> Result<usize, Error> {
    token
        .parse()
        .map_err(|_| Error::malformed("sequence length", line_number, token))
}

/// Append `text` to `buffer`, separating it from any previous content.
pub fn append_spaced(buffer: &mut String, text: &str) {
    if !buffer.is_empty() {
        buffer.push(' ');
    }
    buffer.push_str(text);
}

/// Collect whitespace-separated tokens into owned identifiers.
pub fn push_tokens<'a, I>(ids: &mut Vec<ShortString>, tokens: I)
where
    I: IntoIterator<Item = &'a str>,
{
    ids.extend(tokens.into_iter().map(ShortString::from));
}
