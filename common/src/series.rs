use chrono::TimeZone;

use crate::reading::Reading;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Level,
    Volume,
    Temperature,
    Purity,
}

impl Metric {
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Level => "Water Level",
            Metric::Volume => "Volume",
            Metric::Temperature => "Temperature",
            Metric::Purity => "Purity",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Level => "%",
            Metric::Volume => "L",
            Metric::Temperature => "°C",
            Metric::Purity => "%",
        }
    }
}

/// Timestamp rendering used for chart labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelFormat {
    TimeOfDay,
    CalendarDate,
}

impl LabelFormat {
    fn pattern(&self) -> &'static str {
        match self {
            LabelFormat::TimeOfDay => "%H:%M",
            LabelFormat::CalendarDate => "%d/%m/%Y",
        }
    }
}

/// Parallel chart arrays: one label and one point per reading, input order
/// preserved, no resampling.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeriesSet {
    pub labels: Vec<String>,
    pub level: Vec<f64>,
    pub volume: Vec<f64>,
    pub temperature: Vec<f64>,
    pub purity: Vec<f64>,
}

impl SeriesSet {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn values(&self, metric: Metric) -> &[f64] {
        match metric {
            Metric::Level => &self.level,
            Metric::Volume => &self.volume,
            Metric::Temperature => &self.temperature,
            Metric::Purity => &self.purity,
        }
    }
}

/// Projects readings into chart arrays, labelling timestamps in `tz`.
pub fn to_series<Tz: TimeZone>(readings: &[Reading], format: LabelFormat, tz: &Tz) -> SeriesSet
where
    Tz::Offset: std::fmt::Display,
{
    let mut set = SeriesSet::default();
    for r in readings {
        set.labels.push(
            r.timestamp
                .with_timezone(tz)
                .format(format.pattern())
                .to_string(),
        );
        set.level.push(r.level);
        set.volume.push(r.current_volume);
        set.temperature.push(r.temperature);
        set.purity.push(r.purity);
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn reading(ts: &str, level: f64) -> Reading {
        Reading {
            timestamp: ts.parse().unwrap(),
            level,
            current_volume: level * 10.0,
            total_volume: 1000.0,
            temperature: 20.0,
            purity: 90.0,
        }
    }

    #[test]
    fn preserves_order_and_length() {
        let readings = [
            reading("2024-06-15T08:30:00Z", 40.0),
            reading("2024-06-15T09:00:00Z", 45.0),
            reading("2024-06-14T09:00:00Z", 50.0), // out of order on purpose
        ];
        let set = to_series(&readings, LabelFormat::TimeOfDay, &Utc);
        assert_eq!(set.len(), readings.len());
        assert_eq!(set.labels.len(), set.level.len());
        assert_eq!(set.labels.len(), set.temperature.len());
        assert_eq!(set.labels.len(), set.volume.len());
        assert_eq!(set.labels.len(), set.purity.len());
        assert_eq!(set.level, vec![40.0, 45.0, 50.0]);
        assert_eq!(set.volume, vec![400.0, 450.0, 500.0]);
    }

    #[test]
    fn label_formats() {
        let readings = [reading("2024-06-15T08:30:00Z", 40.0)];
        let time = to_series(&readings, LabelFormat::TimeOfDay, &Utc);
        assert_eq!(time.labels[0], "08:30");
        let date = to_series(&readings, LabelFormat::CalendarDate, &Utc);
        assert_eq!(date.labels[0], "15/06/2024");
    }

    #[test]
    fn empty_input_yields_empty_set() {
        let set = to_series(&[], LabelFormat::CalendarDate, &Utc);
        assert!(set.is_empty());
        assert!(set.values(Metric::Level).is_empty());
    }

    #[test]
    fn values_selects_the_matching_column() {
        let readings = [reading("2024-06-15T08:30:00Z", 40.0)];
        let set = to_series(&readings, LabelFormat::TimeOfDay, &Utc);
        assert_eq!(set.values(Metric::Level), &[40.0]);
        assert_eq!(set.values(Metric::Volume), &[400.0]);
        assert_eq!(set.values(Metric::Temperature), &[20.0]);
        assert_eq!(set.values(Metric::Purity), &[90.0]);
    }
}
