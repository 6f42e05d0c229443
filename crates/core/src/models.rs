use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::de;

/// Headline aggregates for the summary cards.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SummaryStats {
    pub total_trips: u64,
    #[serde(deserialize_with = "de::number")]
    pub avg_fare: f64,
    #[serde(deserialize_with = "de::number")]
    pub avg_distance: f64,
    #[serde(deserialize_with = "de::number")]
    pub avg_speed: f64,
    #[serde(deserialize_with = "de::number")]
    pub avg_total_amount: f64,
}

/// One ranked zone from `/api/top-locations`. Rank is the position in the
/// server's sequence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LocationAggregate {
    pub zone: String,
    pub trip_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationKind {
    Pickup,
    Dropoff,
}

impl LocationKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pickup => "pickup",
            Self::Dropoff => "dropoff",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pickup => "Top Pickups",
            Self::Dropoff => "Top Drop offs",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BoroughFare {
    pub borough_name: String,
    #[serde(deserialize_with = "de::number")]
    pub avg_fare: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct PeakHour {
    pub peak_hour: u8,
}

/// `/api/peak-times` wraps the hour one level deeper than you would expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct PeakTimes {
    pub peak_hour: PeakHour,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WeekdayInsight {
    pub weekday: String,
    #[serde(deserialize_with = "de::number")]
    pub avg_daily_trips: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PaymentType {
    #[serde(deserialize_with = "de::identifier")]
    pub payment_type_id: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TimeMetricPoint {
    #[serde(deserialize_with = "de::date")]
    pub trip_date: NaiveDate,
    #[serde(deserialize_with = "de::number")]
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct HourlyTripCount {
    pub time_label: u8,
    pub trip_count: u64,
}

/// Row-level result of `/api/filter`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TripRecord {
    #[serde(deserialize_with = "de::identifier")]
    pub trip_id: String,
    pub pickup_datetime: String,
    #[serde(deserialize_with = "de::number")]
    pub fare_amount: f64,
    #[serde(deserialize_with = "de::number")]
    pub trip_distance: f64,
    pub passenger_count: Option<i64>,
}

/// Series offered by `/api/time-metrics`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeMetric {
    #[default]
    Revenue,
    Fare,
    Trips,
    Distance,
}

impl TimeMetric {
    pub const ALL: [Self; 4] = [Self::Revenue, Self::Fare, Self::Trips, Self::Distance];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Revenue => "revenue",
            Self::Fare => "fare",
            Self::Trips => "trips",
            Self::Distance => "distance",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Revenue => "Revenue",
            Self::Fare => "Average Fare",
            Self::Trips => "Trips",
            Self::Distance => "Average Distance",
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|metric| *metric == self).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_accepts_decimal_strings() -> Result<(), serde_json::Error> {
        let summary: SummaryStats = serde_json::from_str(
            r#"{"total_trips": 1204, "avg_fare": "13.4567", "avg_distance": 2.9,
                "avg_speed": "11.2", "avg_total_amount": "19.999"}"#,
        )?;

        assert_eq!(summary.total_trips, 1204);
        assert!((summary.avg_fare - 13.4567).abs() < 1e-9);
        assert!((summary.avg_total_amount - 19.999).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn peak_times_unwraps_nested_hour() -> Result<(), serde_json::Error> {
        let peak: PeakTimes = serde_json::from_str(r#"{"peak_hour": {"peak_hour": 18}}"#)?;
        assert_eq!(peak.peak_hour.peak_hour, 18);
        Ok(())
    }

    #[test]
    fn trip_record_tolerates_numeric_ids_and_missing_passengers() -> Result<(), serde_json::Error>
    {
        let trip: TripRecord = serde_json::from_str(
            r#"{"trip_id": 99, "pickup_datetime": "2024-01-03 08:15:00",
                "fare_amount": "12.5", "trip_distance": 3.25, "passenger_count": null}"#,
        )?;

        assert_eq!(trip.trip_id, "99");
        assert_eq!(trip.passenger_count, None);
        Ok(())
    }

    #[test]
    fn metric_point_parses_http_date() -> Result<(), serde_json::Error> {
        let point: TimeMetricPoint = serde_json::from_str(
            r#"{"trip_date": "Mon, 01 Jan 2024 00:00:00 GMT", "value": "1020.50"}"#,
        )?;
        assert_eq!(point.trip_date.to_string(), "2024-01-01");
        Ok(())
    }

    #[test]
    fn metric_index_round_trips() {
        for metric in TimeMetric::ALL {
            assert_eq!(TimeMetric::from_index(metric.index()), Some(metric));
        }
        assert_eq!(TimeMetric::from_index(TimeMetric::ALL.len()), None);
    }
}
