//! Natural ordering for cabinet names.
//!
//! Plain lexical ordering puts "Cabinet10" before "Cabinet2"; the initial
//! layout wants the numbering a human expects, so digit runs are compared as
//! integers and the surrounding text lexically.

use std::cmp::Ordering;

/// Compares two names naturally: embedded digit runs as integers, other
/// segments lexically, and on a full tie the name with fewer segments first.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a_parts = split_segments(a);
    let b_parts = split_segments(b);
    // Segments alternate text, digits, text, ... with the first always text
    // (possibly empty), so like kinds line up at like indices.
    for (i, (ap, bp)) in a_parts.iter().zip(b_parts.iter()).enumerate() {
        let ord = if i % 2 == 1 {
            cmp_digit_runs(ap, bp)
        } else {
            ap.cmp(bp)
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    a_parts.len().cmp(&b_parts.len())
}

/// Splits into alternating non-digit and digit segments, starting with a
/// (possibly empty) non-digit segment.
fn split_segments(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_digits = false;
    for (i, c) in s.char_indices() {
        if c.is_ascii_digit() != in_digits {
            parts.push(&s[start..i]);
            start = i;
            in_digits = !in_digits;
        }
    }
    parts.push(&s[start..]);
    parts
}

/// Compares two digit runs as integers without parsing, so arbitrarily long
/// runs cannot overflow: strip leading zeros, then longer run wins, then
/// lexical order decides.
fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
