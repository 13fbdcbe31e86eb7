//! Five-row block glyphs for the clock and the score.

use super::*;

pub const GLYPH_ROWS: usize = 5;

const FILLED: &str = "█";

#[rustfmt::skip]
const DIGITS: [[&str; GLYPH_ROWS]; 10] = [
    ["#####", "##.##", "##.##", "##.##", "#####"],
    ["...##", "...##", "...##", "...##", "...##"],
    ["#####", "...##", "#####", "##...", "#####"],
    ["#####", "...##", "#####", "...##", "#####"],
    ["##.##", "##.##", "#####", "...##", "...##"],
    ["#####", "##...", "#####", "...##", "#####"],
    ["#####", "##...", "#####", "##.##", "#####"],
    ["#####", "...##", "...##", "...##", "...##"],
    ["#####", "##.##", "#####", "##.##", "#####"],
    ["#####", "##.##", "#####", "...##", "#####"],
];

#[rustfmt::skip]
const COLON: [&str; GLYPH_ROWS] = ["...", ".##", "...", ".##", "..."];

fn glyph(ch: char) -> Option<&'static [&'static str; GLYPH_ROWS]> {
    match ch {
        ':' => Some(&COLON),
        _ => ch.to_digit(10).map(|d| &DIGITS[d as usize]),
    }
}

/// Render digits and colons as block rows. Other characters are skipped.
pub fn block_rows(text: &str) -> Vec<String> {
    let mut rows = vec![String::new(); GLYPH_ROWS];
    for pattern in text.chars().filter_map(glyph) {
        for (row, line) in rows.iter_mut().zip(pattern.iter()) {
            if !row.is_empty() {
                row.push_str("  ");
            }
            for cell in line.chars() {
                row.push_str(if cell == '#' { FILLED } else { " " });
            }
        }
    }
    rows
}

pub fn block_lines(text: &str, style: Style) -> Vec<Line<'static>> {
    block_rows(text)
        .into_iter()
        .map(|row| Line::from(Span::styled(row, style)))
        .collect()
}
