//! Geometry notation parser.
//!
//! Anchored, character-level parsing of `WIDTH? ('x' HEIGHT?)? MODIFIER?`,
//! where WIDTH/HEIGHT are decimal digit runs and MODIFIER is either an
//! anchor run ending in `#` (`^#`, `<#`) or a single flag from `<>@%^!`.
//! No dependencies; malformed input is a non-match, never an error.

use crate::geometry::Geometry;

/// Single-character modifier flags.
const FLAGS: &[char] = &['<', '>', '@', '%', '^', '!'];

/// Directional crop-anchor characters permitted before a trailing `#`.
const ANCHORS: &[char] = &['<', '>', '^', 'v'];

/// Parse outcome, distinguishing blank input from a grammar mismatch.
///
/// The public API collapses `Blank` and `Unmatched` to `None`; the
/// distinction exists for diagnostics and tests.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Outcome {
    Parsed(Geometry),
    Blank,
    Unmatched,
}

pub(crate) fn parse_geometry(text: &str) -> Outcome {
    let text = text.trim();
    if text.is_empty() {
        return Outcome::Blank;
    }

    let (dims, modifier) = split_modifier(text);
    let Some((width, height)) = parse_dimensions(dims) else {
        return Outcome::Unmatched;
    };

    let mut geometry = Geometry::new(width, height);
    if !modifier.is_empty() {
        geometry = geometry.modifier(modifier);
    }
    Outcome::Parsed(geometry)
}

/// Split a trailing modifier off, returning `(dimensions, modifier)`.
fn split_modifier(text: &str) -> (&str, &str) {
    if let Some(prefix) = text.strip_suffix('#') {
        // Anchor run ending in '#': walk back over the anchor characters.
        let dims_len = prefix.trim_end_matches(ANCHORS).len();
        return (&text[..dims_len], &text[dims_len..]);
    }
    match text.chars().last() {
        Some(flag) if FLAGS.contains(&flag) => {
            let split = text.len() - flag.len_utf8();
            (&text[..split], &text[split..])
        }
        _ => (text, ""),
    }
}

/// Parse `WIDTH? ('x' HEIGHT?)?`, requiring the whole input to be consumed.
/// Missing dimensions default to `0.0` ("unspecified").
fn parse_dimensions(dims: &str) -> Option<(f64, f64)> {
    let (width, rest) = take_digits(dims);
    let rest = rest.strip_prefix('x').unwrap_or(rest);
    let (height, rest) = take_digits(rest);
    if rest.is_empty() { Some((width, height)) } else { None }
}

/// Take a leading run of ASCII digits as a float; an empty run is `0.0`.
fn take_digits(s: &str) -> (f64, &str) {
    let end = s.bytes().take_while(|b| b.is_ascii_digit()).count();
    let (digits, rest) = s.split_at(end);
    if digits.is_empty() {
        (0.0, rest)
    } else {
        (digits.parse().unwrap_or(0.0), rest)
    }
}
