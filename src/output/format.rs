use comfy_table::{
    Attribute, Cell, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

pub(super) fn styled_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// Create a table with the standard preset, inner borders, and normalized header separator.
pub(super) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table
}

/// Comma-joined markers for a session row, e.g. "current, default".
pub(super) fn format_markers(current: bool, default: bool, active: bool) -> String {
    [(current, "current"), (default, "default"), (active, "active")]
        .iter()
        .filter(|(on, _)| *on)
        .map(|(_, name)| *name)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::format_markers;

    #[test]
    fn markers_join_in_fixed_order() {
        assert_eq!(format_markers(false, false, false), "");
        assert_eq!(format_markers(true, false, true), "current, active");
        assert_eq!(format_markers(true, true, true), "current, default, active");
    }

    #[test]
    fn styled_table_renders_header() {
        let mut table = super::create_styled_table();
        table.set_header(vec![super::header_cell("Session", false)]);
        table.add_row(vec![super::styled_cell("2025-26", None, true)]);
        let rendered = table.to_string();
        assert!(rendered.contains("Session"));
        assert!(rendered.contains("2025-26"));
        assert!(rendered.contains('├'));
    }
}
