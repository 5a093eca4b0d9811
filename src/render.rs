use crate::{compare::ComparisonRow, footprint::Rect};

/// Column headers of the comparison table, in display order.
pub const TABLE_HEADERS: [&str; 6] = [
    "camera",
    "megapixel",
    "sensor type",
    "width x height",
    "pixel/mm²",
    "normalization",
];

/// Default footprint colors, cycled when there are more cameras than
/// entries.
pub const PALETTE: [[u8; 3]; 6] = [
    [230, 57, 70],
    [244, 162, 97],
    [233, 196, 106],
    [42, 157, 143],
    [38, 70, 83],
    [131, 56, 236],
];

/// A drawing surface for footprint rectangles.
///
/// The crate never draws anything itself; a caller brings whatever canvas
/// its windowing stack provides and adapts it to this trait.
pub trait Canvas {
    fn fill_rect(&mut self, rect: &Rect, color: [u8; 3]);
}

/// Draws the footprints back to front.
///
/// Footprints are laid down in reverse input order so the first, usually
/// largest, footprint ends up at the bottom of the stack and the later ones
/// stay visible on top of it. Colors are indexed by input position and cycle
/// through `colors`; with no colors to draw with, nothing is drawn.
pub fn draw_layered<C: Canvas>(canvas: &mut C, footprints: &[Rect], colors: &[[u8; 3]]) {
    if colors.is_empty() {
        return;
    }

    for (index, rect) in footprints.iter().enumerate().rev() {
        canvas.fill_rect(rect, colors[index % colors.len()]);
    }
}

/// Renders comparison rows as a GitHub flavored markdown table.
///
/// Cells are left aligned and padded to the widest entry of their column,
/// counting characters rather than bytes.
pub fn render_table(rows: &[ComparisonRow]) -> String {
    let cells: Vec<[String; 6]> = rows
        .iter()
        .map(|row| {
            [
                row.name.clone(),
                format!("{:.1}", row.resolution),
                row.format.clone(),
                row.dimensions.clone(),
                row.pixel_density.to_string(),
                row.normalized.clone(),
            ]
        })
        .collect();

    let mut widths: [usize; 6] = TABLE_HEADERS.map(|header| header.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut table = String::new();
    push_row(&mut table, &TABLE_HEADERS.map(String::from), &widths);

    table.push('|');
    for width in widths {
        table.push_str(&"-".repeat(width + 2));
        table.push('|');
    }
    table.push('\n');

    for row in &cells {
        push_row(&mut table, row, &widths);
    }

    table
}

fn push_row(table: &mut String, cells: &[String; 6], widths: &[usize; 6]) {
    table.push('|');
    for (cell, width) in cells.iter().zip(widths) {
        let padding = width - cell.chars().count();
        table.push(' ');
        table.push_str(cell);
        table.push_str(&" ".repeat(padding));
        table.push_str(" |");
    }
    table.push('\n');
}
