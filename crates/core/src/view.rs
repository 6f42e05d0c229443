//! Render targets. Each region is written by exactly one fetcher.

use crate::animation::{CardKind, CounterTween};
use crate::format;
use crate::models::SummaryStats;

pub const UNAVAILABLE: &str = "Unavailable";
pub const PENDING: &str = "--";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    Cells(Vec<String>),
    Placeholder { text: String, colspan: usize },
}

/// A table body plus the placeholder used when a load comes back empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRegion {
    headers: Vec<&'static str>,
    placeholder: &'static str,
    rows: Vec<TableRow>,
    loaded: bool,
}

impl TableRegion {
    pub fn new(headers: &[&'static str], placeholder: &'static str) -> Self {
        Self {
            headers: headers.to_vec(),
            placeholder,
            rows: Vec::new(),
            loaded: false,
        }
    }

    pub fn headers(&self) -> &[&'static str] {
        &self.headers
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn colspan(&self) -> usize {
        self.headers.len()
    }

    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Replaces the body. An empty input leaves exactly one placeholder row.
    pub fn fill<I>(&mut self, rows: I)
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        self.rows = rows.into_iter().map(TableRow::Cells).collect();
        if self.rows.is_empty() {
            self.rows.push(TableRow::Placeholder {
                text: self.placeholder.to_string(),
                colspan: self.colspan(),
            });
        }
        self.loaded = true;
    }

    pub fn data_row_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| matches!(row, TableRow::Cells(_)))
            .count()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCard {
    pub kind: CardKind,
    pub text: String,
    tween: Option<CounterTween>,
}

impl SummaryCard {
    const fn pending(kind: CardKind) -> Self {
        Self {
            kind,
            text: String::new(),
            tween: None,
        }
    }

    pub const fn is_animating(&self) -> bool {
        self.tween.is_some()
    }
}

/// Summary cards. `load` writes the formatted values; `start_counters`
/// replaces them with the counting animation.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCards {
    cards: Vec<SummaryCard>,
    targets: Option<[f64; 5]>,
}

impl Default for SummaryCards {
    fn default() -> Self {
        Self {
            cards: CardKind::ALL.into_iter().map(SummaryCard::pending).collect(),
            targets: None,
        }
    }
}

impl SummaryCards {
    pub fn cards(&self) -> &[SummaryCard] {
        &self.cards
    }

    pub fn text(&self, kind: CardKind) -> &str {
        self.cards
            .iter()
            .find(|card| card.kind == kind)
            .map_or(PENDING, |card| {
                if card.text.is_empty() {
                    PENDING
                } else {
                    card.text.as_str()
                }
            })
    }

    pub fn load(&mut self, summary: &SummaryStats) {
        let values = [
            summary.total_trips.to_string(),
            format::fixed2(summary.avg_fare),
            format::fixed2(summary.avg_distance),
            format::fixed2(summary.avg_speed),
            format::fixed2(summary.avg_total_amount),
        ];

        // The counters read their targets back from the rounded text.
        let mut targets = [0.0; 5];
        for ((card, value), target) in self.cards.iter_mut().zip(values).zip(targets.iter_mut()) {
            *target = value.parse().unwrap_or_default();
            card.text = value;
            card.tween = None;
        }
        self.targets = Some(targets);
    }

    pub fn start_counters(&mut self, make: impl Fn(CardKind, f64) -> CounterTween) {
        let Some(targets) = self.targets else {
            return;
        };
        for (card, target) in self.cards.iter_mut().zip(targets) {
            card.tween = Some(make(card.kind, target));
            CounterTween::initial_text().clone_into(&mut card.text);
        }
    }

    /// Advances every running counter by one frame. Returns whether any is
    /// still running.
    pub fn tick(&mut self) -> bool {
        let mut running = false;
        for card in &mut self.cards {
            if let Some(tween) = card.tween.as_mut() {
                card.text = tween.advance();
                if tween.is_finished() {
                    card.tween = None;
                } else {
                    running = true;
                }
            }
        }
        running
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightsPanel {
    pub peak_hour: String,
    pub busiest_day: String,
    pub avg_daily_trips: String,
}

impl Default for InsightsPanel {
    fn default() -> Self {
        Self {
            peak_hour: PENDING.to_string(),
            busiest_day: PENDING.to_string(),
            avg_daily_trips: PENDING.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// A `<select>`: ordered options and the current choice.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectControl {
    options: Vec<SelectOption>,
    selected: usize,
}

impl SelectControl {
    pub fn replace(&mut self, options: Vec<SelectOption>) {
        self.options = options;
        self.selected = 0;
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn selected(&self) -> Option<&SelectOption> {
        self.options.get(self.selected)
    }

    pub const fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn select(&mut self, index: usize) -> Option<&SelectOption> {
        if index < self.options.len() {
            self.selected = index;
        }
        self.selected()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fill_leaves_single_placeholder_with_colspan() {
        let mut table = TableRegion::new(&["Zone", "Trips"], "No Top Pickups Data Available");
        table.fill(Vec::new());

        assert_eq!(
            table.rows(),
            &[TableRow::Placeholder {
                text: "No Top Pickups Data Available".to_string(),
                colspan: 2,
            }]
        );
        assert_eq!(table.data_row_count(), 0);
    }

    #[test]
    fn refill_replaces_previous_rows() {
        let mut table = TableRegion::new(&["Zone", "Trips"], "none");
        table.fill(vec![vec!["A".into(), "1".into()], vec!["B".into(), "2".into()]]);
        table.fill(vec![vec!["C".into(), "3".into()]]);

        assert_eq!(table.data_row_count(), 1);
    }

    #[test]
    fn summary_cards_show_formatted_fields() {
        let mut cards = SummaryCards::default();
        cards.load(&SummaryStats {
            total_trips: 7_654_321,
            avg_fare: 13.456,
            avg_distance: 2.5,
            avg_speed: 11.999,
            avg_total_amount: 19.2,
        });

        assert_eq!(cards.text(CardKind::TotalTrips), "7654321");
        assert_eq!(cards.text(CardKind::AvgFare), "13.46");
        assert_eq!(cards.text(CardKind::AvgDistance), "2.50");
        assert_eq!(cards.text(CardKind::AvgSpeed), "12.00");
        assert_eq!(cards.text(CardKind::TotalRevenue), "19.20");
    }

    #[test]
    fn counters_run_from_zero_to_decorated_value() {
        let mut cards = SummaryCards::default();
        cards.load(&SummaryStats {
            total_trips: 500,
            avg_fare: 10.0,
            avg_distance: 1.0,
            avg_speed: 5.0,
            avg_total_amount: 12.0,
        });
        cards.start_counters(CounterTween::new);
        assert_eq!(cards.text(CardKind::TotalTrips), "0");

        let mut frames = 0;
        while cards.tick() {
            frames += 1;
            assert!(frames < 1_000);
        }

        assert_eq!(cards.text(CardKind::TotalTrips), "500");
        assert_eq!(cards.text(CardKind::AvgFare), "$10.00");
        assert_eq!(cards.text(CardKind::AvgDistance), "1.00 miles");
        assert!(cards.cards().iter().all(|card| !card.is_animating()));
    }

    #[test]
    fn start_counters_before_load_is_a_no_op() {
        let mut cards = SummaryCards::default();
        cards.start_counters(CounterTween::new);
        assert!(!cards.tick());
        assert_eq!(cards.text(CardKind::AvgFare), PENDING);
    }

    #[test]
    fn select_ignores_out_of_range_index() {
        let mut control = SelectControl::default();
        control.replace(vec![
            SelectOption {
                value: String::new(),
                label: "Select Payment Method".into(),
            },
            SelectOption {
                value: "2".into(),
                label: "Cash".into(),
            },
        ]);

        assert_eq!(control.select(1).map(|o| o.label.as_str()), Some("Cash"));
        assert_eq!(control.select(9).map(|o| o.value.as_str()), Some("2"));
        assert_eq!(control.selected_index(), 1);
    }
}
