use ratatui::layout::Constraint;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use taxi_dashboard_core::view::{TableRegion, TableRow};

pub const fn scroll_offset(
    total_rows: usize,
    max_visible_rows: usize,
    selected_index: usize,
) -> usize {
    if total_rows <= max_visible_rows {
        return 0;
    }

    if selected_index >= max_visible_rows {
        return selected_index.saturating_sub(max_visible_rows) + 1;
    }

    0
}

/// A bordered table for one region. Rows before `offset` are skipped; an
/// unloaded region shows a single "Loading..." row.
pub fn region_table<'a>(title: &'a str, region: &'a TableRegion, offset: usize) -> Table<'a> {
    let header = Row::new(
        region
            .headers()
            .iter()
            .map(|header| Cell::from(*header)),
    )
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row<'_>> = if region.is_loaded() {
        region
            .rows()
            .iter()
            .skip(offset)
            .map(|row| match row {
                TableRow::Cells(cells) => Row::new(cells.iter().map(|cell| Cell::from(cell.as_str()))),
                TableRow::Placeholder { text, .. } => {
                    Row::new([Cell::from(text.as_str())]).style(Style::default().fg(Color::Gray))
                }
            })
            .collect()
    } else {
        vec![Row::new([Cell::from("Loading...")]).style(Style::default().fg(Color::DarkGray))]
    };

    Table::new(rows, vec![Constraint::Fill(1); region.colspan().max(1)])
        .header(header)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
}
