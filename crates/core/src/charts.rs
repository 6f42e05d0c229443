//! Chart descriptions. Hosts turn these into whatever chart widget they have.

use crate::models::{HourlyTripCount, TimeMetric, TimeMetricPoint, TripRecord};

pub const HOURS_PER_DAY: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
    Scatter,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Series {
    Categorical { labels: Vec<String>, values: Vec<f64> },
    Points(Vec<(f64, f64)>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub dataset_label: String,
    pub x_title: String,
    pub y_title: String,
    pub begin_at_zero: bool,
    pub series: Series,
}

impl ChartSpec {
    pub fn values(&self) -> Vec<f64> {
        match &self.series {
            Series::Categorical { values, .. } => values.clone(),
            Series::Points(points) => points.iter().map(|(_, y)| *y).collect(),
        }
    }

    pub fn len(&self) -> usize {
        match &self.series {
            Series::Categorical { values, .. } => values.len(),
            Series::Points(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Spreads the sparse per-hour counts over a full day, zero-filling gaps.
/// Labels outside `0..24` are dropped.
pub fn expand_hourly(sparse: &[HourlyTripCount]) -> [u64; HOURS_PER_DAY] {
    let mut hours = [0_u64; HOURS_PER_DAY];
    for entry in sparse {
        match hours.get_mut(usize::from(entry.time_label)) {
            Some(slot) => *slot = entry.trip_count,
            None => log::warn!("Ignoring out-of-range hour {}", entry.time_label),
        }
    }
    hours
}

pub fn hourly_chart(sparse: &[HourlyTripCount]) -> ChartSpec {
    let hours = expand_hourly(sparse);
    ChartSpec {
        kind: ChartKind::Bar,
        dataset_label: "Trips per Hour".to_string(),
        x_title: "Hour of Day".to_string(),
        y_title: "Number of Trips".to_string(),
        begin_at_zero: true,
        series: Series::Categorical {
            labels: (0..HOURS_PER_DAY).map(|hour| hour.to_string()).collect(),
            values: hours.iter().map(|count| *count as f64).collect(),
        },
    }
}

pub fn metric_chart(metric: TimeMetric, points: &[TimeMetricPoint]) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Line,
        dataset_label: metric.label().to_string(),
        x_title: "Date".to_string(),
        y_title: metric.label().to_string(),
        begin_at_zero: false,
        series: Series::Categorical {
            labels: points
                .iter()
                .map(|point| point.trip_date.format("%Y-%m-%d").to_string())
                .collect(),
            values: points.iter().map(|point| point.value).collect(),
        },
    }
}

/// Fare against distance for the rows of a search.
pub fn fare_distance_scatter(trips: &[TripRecord]) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Scatter,
        dataset_label: "Trips".to_string(),
        x_title: "Distance (mi)".to_string(),
        y_title: "Fare ($)".to_string(),
        begin_at_zero: true,
        series: Series::Points(
            trips
                .iter()
                .map(|trip| (trip.trip_distance, trip.fare_amount))
                .collect(),
        ),
    }
}
