// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Display formatting for roman numerals and chord symbols.
//!
//! Labels are rendered as HTML fragments: accidentals become the
//! musical flat and sharp glyphs and sevenths are superscripted.

use crate::error::Result;
use crate::music::Chord;

/// Glyph substitution applied to every formatted label
fn substitute_glyphs(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            'b' => out.push('♭'),
            '#' => out.push('♯'),
            '7' => out.push_str("<sup>7</sup>"),
            'ø' => out.push_str("<sup>ø</sup>"),
            _ => out.push(c),
        }
    }
    out
}

/// Format a raw `<numeral>/<key>` label.
///
/// A lowercase (minor) key after the slash is capitalised and suffixed
/// with "m", so `i/a` becomes `i/Am`.
pub fn format_roman_numeral(label: &str) -> String {
    let mut s = label.to_string();
    if let Some(slash) = s.find('/') {
        let key = &s[slash + 1..];
        if key.chars().next().is_some_and(|c| c.is_lowercase()) {
            let mut chars = key.chars();
            let mut renamed: String = chars.next().into_iter().flat_map(char::to_uppercase).collect();
            renamed.push_str(chars.as_str());
            renamed.push('m');
            s = format!("{}{}", &s[..=slash], renamed);
        }
    }
    substitute_glyphs(&s)
}

/// Format a raw chord symbol such as "CM", "Bm7b5" or "G#dim7".
///
/// At most one suffix rewrite applies, checked in order: a bare major
/// marker is dropped, an augmented minor seventh is written `+7`, a
/// major seventh becomes `maj7`, a flat five is superscripted and a
/// diminished seventh takes the degree glyph.
pub fn format_chord_symbol(symbol: &str) -> String {
    let chars: Vec<char> = symbol.chars().collect();
    let n = chars.len();
    let from_end = |i: usize| if i <= n { chars.get(n - i).copied() } else { None };
    let head = |i: usize| chars[..n.saturating_sub(i)].iter().collect::<String>();

    let rewritten = if from_end(1) == Some('M') {
        head(1)
    } else if from_end(1) == Some('+') && from_end(3) == Some('m') {
        format!("{}+{}", head(3), chars[n - 2])
    } else if from_end(2) == Some('M') {
        format!("{}maj{}", head(2), chars[n - 1])
    } else if symbol.ends_with("b5") {
        format!("{}<sup>(♭5)</sup>", head(2))
    } else if n >= 4 && chars[n - 4..n - 1].iter().collect::<String>() == "dim" {
        format!("{}°{}", head(4), chars[n - 1])
    } else {
        symbol.to_string()
    };

    substitute_glyphs(&rewritten)
}

/// Recognize and format the symbol of every chord.
///
/// Fails on the first chord the recognizer cannot name.
pub fn chord_symbols(chords: &[Chord]) -> Result<Vec<String>> {
    chords
        .iter()
        .map(|chord| chord.symbol().map(|s| format_chord_symbol(&s)))
        .collect()
}
