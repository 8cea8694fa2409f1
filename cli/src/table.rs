//! Box-drawn grid for the outcome table

use unicode_width::UnicodeWidthStr;

/// Render rows of cells as a grid, treating the first row as the header
///
/// Columns are padded to the widest cell measured in terminal columns, so
/// move names with wide or combining characters still line up.
pub fn render_grid(rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    if columns == 0 {
        return String::new();
    }

    let mut widths = vec![0usize; columns];
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(UnicodeWidthStr::width(cell.as_str()));
        }
    }

    let mut out = String::new();
    out.push_str(&rule(&widths, '╒', '═', '╤', '╕'));
    for (i, row) in rows.iter().enumerate() {
        out.push_str(&line(&widths, row));
        if i + 1 == rows.len() {
            out.push_str(&rule(&widths, '╘', '═', '╧', '╛'));
        } else if i == 0 {
            out.push_str(&rule(&widths, '╞', '═', '╪', '╡'));
        } else {
            out.push_str(&rule(&widths, '├', '─', '┼', '┤'));
        }
    }
    out
}

fn rule(widths: &[usize], left: char, fill: char, join: char, right: char) -> String {
    let segments: Vec<String> = widths
        .iter()
        .map(|w| fill.to_string().repeat(w + 2))
        .collect();
    format!("{}{}{}\n", left, segments.join(&join.to_string()), right)
}

fn line(widths: &[usize], row: &[String]) -> String {
    let cells: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(i, width)| {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            let pad = width - UnicodeWidthStr::width(cell);
            format!(" {}{} ", cell, " ".repeat(pad))
        })
        .collect();
    format!("│{}│\n", cells.join("│"))
}
