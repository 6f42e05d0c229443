use crate::app::{App, SearchFocus};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};
use ratatui::Frame;
use taxi_dashboard_core::search::{SearchField, SearchMethod};
use taxi_dashboard_core::session::PAYMENT_PROMPT;

const NO_METHOD: &str = "Choose a search method";

pub fn render_search(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Search Trips")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let fields = app.session.search.visible_fields();
    let mut constraints = vec![Constraint::Length(3)];
    constraints.extend(fields.iter().map(|_| Constraint::Length(3)));
    constraints.push(Constraint::Length(3));
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let method = app
        .session
        .search
        .method()
        .map_or(NO_METHOD, SearchMethod::label);
    f.render_widget(
        input_box("Method", method, app.search_focus == SearchFocus::Method),
        rows[0],
    );

    for (index, field) in fields.iter().enumerate() {
        let value = field_value(app, *field);
        let focused = app.search_focus == SearchFocus::Field(*field);
        f.render_widget(input_box(field.label(), &value, focused), rows[index + 1]);
    }

    let submit_focused = app.search_focus == SearchFocus::Submit;
    let submit_style = if submit_focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    };
    f.render_widget(
        Paragraph::new(Span::styled(" Search ", submit_style))
            .block(Block::default().borders(Borders::ALL).border_style(submit_style)),
        Rect {
            width: rows[fields.len() + 1].width.min(12),
            ..rows[fields.len() + 1]
        },
    );

    if app.session.dropdown.is_open() {
        render_method_dropdown(app, f, rows[0]);
    }
}

fn field_value(app: &App, field: SearchField) -> String {
    if field == SearchField::PaymentType {
        let selected = app.session.payment_types.selected();
        return selected.map_or_else(
            || PAYMENT_PROMPT.to_string(),
            |option| format!("◀ {} ▶", option.label),
        );
    }
    app.session.search.field(field).to_string()
}

fn input_box<'a>(label: &'a str, value: &'a str, focused: bool) -> Paragraph<'a> {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let cursor = if focused { "█" } else { "" };

    Paragraph::new(TextLine::from(vec![
        Span::raw(value),
        Span::styled(cursor, Style::default().fg(Color::Yellow)),
    ]))
    .block(
        Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_style(border),
    )
}

/// Method choices drawn just below the method row.
fn render_method_dropdown(app: &App, f: &mut Frame<'_>, anchor: Rect) {
    let labels = std::iter::once(NO_METHOD).chain(SearchMethod::ALL.iter().map(|method| method.label()));
    let items: Vec<ListItem<'_>> = labels
        .enumerate()
        .map(|(index, label)| {
            let style = if index == app.method_index {
                Style::default()
                    .bg(Color::Rgb(0, 0, 238))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Span::styled(label, style))
        })
        .collect();

    let height = u16::try_from(items.len()).unwrap_or(u16::MAX).saturating_add(2);
    let area = Rect {
        x: anchor.x,
        y: anchor.y.saturating_add(anchor.height),
        width: anchor.width.min(30),
        height,
    }
    .intersection(f.area());

    f.render_widget(Clear, area);
    f.render_widget(
        List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        ),
        area,
    );
}
