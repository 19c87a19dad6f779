//! Plain-text bar chart.
//!
//! One column per key, scaled so the tallest key fills `rows` lines. The
//! active index is drawn with [`ACTIVE_GLYPH`] instead of [`BAR_GLYPH`].
//! A status line follows the chart.

use crate::driver::Frame;

pub const BAR_GLYPH: char = '#';
pub const ACTIVE_GLYPH: char = '@';

/// Render `frame` as `rows` chart lines plus one status line.
pub fn render(frame: &Frame<'_>, rows: usize) -> String {
    let peak = frame.keys.iter().copied().max().unwrap_or(0).max(1) as u64;
    let heights: Vec<usize> = frame
        .keys
        .iter()
        .map(|&key| scaled_height(key, peak, rows))
        .collect();

    let mut out = String::with_capacity((frame.keys.len() + 1) * (rows + 1) + 64);
    for row in (1..=rows).rev() {
        let line: String = heights
            .iter()
            .enumerate()
            .map(|(i, &height)| match (height >= row, i == frame.active_index) {
                (false, _) => ' ',
                (true, true) => ACTIVE_GLYPH,
                (true, false) => BAR_GLYPH,
            })
            .collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out.push_str(&status_line(frame));
    out.push('\n');
    out
}

/// "Bubble Sort | step 42 | sorting"
pub fn status_line(frame: &Frame<'_>) -> String {
    let state = if frame.sorted {
        "sorted"
    } else if frame.paused {
        "paused"
    } else {
        "sorting"
    };
    format!("{} | step {} | {}", frame.algorithm.label(), frame.steps, state)
}

/// Rows a key occupies; positive keys get at least one row.
fn scaled_height(key: i32, peak: u64, rows: usize) -> usize {
    if key <= 0 {
        return 0;
    }
    let scaled = (key as u64 * rows as u64).div_ceil(peak);
    scaled.min(rows as u64) as usize
}
