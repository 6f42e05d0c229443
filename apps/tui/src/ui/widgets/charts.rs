use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph,
};
use ratatui::Frame;
use taxi_dashboard_core::charts::{ChartKind, ChartSpec, Series};
use taxi_dashboard_core::format;

fn chart_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

/// Draws `spec` with the widget matching its kind, or `empty` when there is
/// nothing to draw yet.
pub fn render_chart(f: &mut Frame<'_>, area: Rect, title: &str, spec: Option<&ChartSpec>, empty: &str) {
    let Some(spec) = spec.filter(|spec| !spec.is_empty()) else {
        let paragraph = Paragraph::new(empty)
            .block(chart_block(title))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, area);
        return;
    };

    match spec.kind {
        ChartKind::Bar => render_bars(f, area, title, spec),
        ChartKind::Line | ChartKind::Scatter => render_xy(f, area, title, spec),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn render_bars(f: &mut Frame<'_>, area: Rect, title: &str, spec: &ChartSpec) {
    let Series::Categorical { labels, values } = &spec.series else {
        return;
    };

    let bars: Vec<Bar<'_>> = labels
        .iter()
        .zip(values)
        .map(|(label, value)| {
            Bar::default()
                .value(value.max(0.0).round() as u64)
                .label(TextLine::from(label.as_str()))
                .style(Style::default().fg(Color::Cyan))
                .value_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        })
        .collect();

    let slots = u16::try_from(bars.len()).unwrap_or(u16::MAX).max(1);
    let bar_width = (area.width.saturating_sub(2) / slots).saturating_sub(1).max(1);

    let chart = BarChart::default()
        .block(chart_block(title))
        .data(BarGroup::default().bars(&bars))
        .bar_gap(1)
        .bar_width(bar_width);

    f.render_widget(chart, area);
}

fn render_xy(f: &mut Frame<'_>, area: Rect, title: &str, spec: &ChartSpec) {
    let points = xy_points(spec);
    let (x_bounds, y_bounds) = bounds(&points, spec.begin_at_zero);

    let graph_type = if spec.kind == ChartKind::Line {
        GraphType::Line
    } else {
        GraphType::Scatter
    };
    let dataset = Dataset::default()
        .name(spec.dataset_label.clone())
        .marker(Marker::Braille)
        .graph_type(graph_type)
        .style(Style::default().fg(Color::Yellow))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(chart_block(title))
        .x_axis(
            Axis::default()
                .title(spec.x_title.clone())
                .style(Style::default().fg(Color::Gray))
                .bounds(x_bounds)
                .labels(x_labels(spec, x_bounds)),
        )
        .y_axis(
            Axis::default()
                .title(spec.y_title.clone())
                .style(Style::default().fg(Color::Gray))
                .bounds(y_bounds)
                .labels([
                    Span::raw(format::locale_number(y_bounds[0])),
                    Span::styled(
                        format::locale_number(y_bounds[1]),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]),
        );

    f.render_widget(chart, area);
}

/// Categorical series are plotted against their index.
fn xy_points(spec: &ChartSpec) -> Vec<(f64, f64)> {
    match &spec.series {
        Series::Categorical { values, .. } => values
            .iter()
            .enumerate()
            .map(|(index, value)| (index as f64, *value))
            .collect(),
        Series::Points(points) => points.clone(),
    }
}

fn x_labels(spec: &ChartSpec, x_bounds: [f64; 2]) -> Vec<Span<'static>> {
    match &spec.series {
        Series::Categorical { labels, .. } => match (labels.first(), labels.last()) {
            (Some(first), Some(last)) => vec![Span::raw(first.clone()), Span::raw(last.clone())],
            _ => Vec::new(),
        },
        Series::Points(_) => vec![
            Span::raw(format::locale_number(x_bounds[0])),
            Span::raw(format::locale_number(x_bounds[1])),
        ],
    }
}

/// Data extent on both axes, widened so a single point still has a range.
pub fn bounds(points: &[(f64, f64)], begin_at_zero: bool) -> ([f64; 2], [f64; 2]) {
    let fold = |pick: fn(&(f64, f64)) -> f64| {
        points.iter().map(pick).fold(None, |range: Option<[f64; 2]>, value| {
            Some(range.map_or([value, value], |[low, high]| [low.min(value), high.max(value)]))
        })
    };

    let widen = |[low, high]: [f64; 2]| {
        if (high - low).abs() < f64::EPSILON {
            [low - 1.0, high + 1.0]
        } else {
            [low, high]
        }
    };

    let x = widen(fold(|point| point.0).unwrap_or([0.0, 1.0]));
    let mut y = fold(|point| point.1).unwrap_or([0.0, 1.0]);
    if begin_at_zero {
        y[0] = y[0].min(0.0);
    }

    (x, widen(y))
}
