// keep in sync with the external writer (pairing flow / device integration)
use chrono::{DateTime, Utc};

/// Key of the single localStorage entry holding the serialized reading list.
pub const STORAGE_KEY: &str = "waterData";

/// Envelope version this build understands. Newer versions decode best-effort.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    pub timestamp: DateTime<Utc>,
    pub level: f64, // percent
    #[serde(alias = "volume")]
    pub current_volume: f64, // L
    pub total_volume: f64, // L
    pub temperature: f64, // °C
    pub purity: f64, // percent
}

impl Reading {
    /// Synthetic all-zero reading shown while the store has no data yet.
    pub fn placeholder(now: DateTime<Utc>) -> Self {
        Self {
            timestamp: now,
            level: 0.0,
            current_volume: 0.0,
            total_volume: 1000.0,
            temperature: 0.0,
            purity: 0.0,
        }
    }
}

/// Outcome of decoding the persisted list. `Empty` and `Malformed` both
/// degrade to an empty dashboard; the caller picks the fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadResult {
    Ready(Vec<Reading>),
    Empty,
    Malformed,
}

/// Last element wins: insertion order is arrival order.
pub fn latest(readings: &[Reading]) -> Option<&Reading> {
    readings.last()
}

/// Decodes the stored value. Accepts the legacy bare array and the
/// `{"version", "readings"}` envelope; records that fail to deserialize
/// are logged and skipped instead of discarding the whole list.
pub fn decode_readings(raw: Option<&str>) -> LoadResult {
    let Some(raw) = raw else {
        return LoadResult::Empty;
    };

    let value: serde_json::Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("stored readings are not valid JSON: {e}");
            return LoadResult::Malformed;
        }
    };

    let records = match value {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Object(mut map) => {
            if let Some(version) = map.get("version").and_then(|v| v.as_u64()) {
                if version > SCHEMA_VERSION as u64 {
                    log::warn!("stored readings use schema v{version}, decoding best-effort");
                }
            }
            match map.remove("readings") {
                Some(serde_json::Value::Array(items)) => items,
                _ => {
                    log::warn!("stored readings envelope carries no reading list");
                    return LoadResult::Malformed;
                }
            }
        }
        _ => {
            log::warn!("stored readings have an unexpected top-level shape");
            return LoadResult::Malformed;
        }
    };

    let total = records.len();
    let mut readings = Vec::with_capacity(total);
    for record in records {
        match serde_json::from_value::<Reading>(record) {
            Ok(r) => readings.push(r),
            Err(e) => log::warn!("skipping malformed reading: {e}"),
        }
    }

    if readings.is_empty() {
        if total == 0 {
            LoadResult::Empty
        } else {
            LoadResult::Malformed
        }
    } else {
        LoadResult::Ready(readings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"timestamp": "2024-01-01T00:00:00Z", "level": 50, "currentVolume": 500,
         "totalVolume": 1000, "temperature": 20, "purity": 90}
    ]"#;

    #[test]
    fn decodes_bare_array() {
        let result = decode_readings(Some(SAMPLE));
        let LoadResult::Ready(readings) = result else {
            panic!("expected Ready, got {result:?}");
        };
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].level, 50.0);
        assert_eq!(readings[0].current_volume, 500.0);
        assert_eq!(readings[0].total_volume, 1000.0);
    }

    #[test]
    fn decodes_versioned_envelope() {
        let raw = format!(r#"{{"version": 1, "readings": {SAMPLE}}}"#);
        let LoadResult::Ready(readings) = decode_readings(Some(&raw)) else {
            panic!("envelope should decode");
        };
        assert_eq!(readings.len(), 1);
    }

    #[test]
    fn accepts_legacy_volume_key() {
        let raw = r#"[{"timestamp": "2024-01-01T00:00:00Z", "level": 10, "volume": 100,
                       "totalVolume": 1000, "temperature": 18, "purity": 95}]"#;
        let LoadResult::Ready(readings) = decode_readings(Some(raw)) else {
            panic!("legacy key should decode");
        };
        assert_eq!(readings[0].current_volume, 100.0);
    }

    #[test]
    fn absent_key_is_empty() {
        assert_eq!(decode_readings(None), LoadResult::Empty);
    }

    #[test]
    fn empty_list_is_empty() {
        assert_eq!(decode_readings(Some("[]")), LoadResult::Empty);
        assert_eq!(
            decode_readings(Some(r#"{"version": 1, "readings": []}"#)),
            LoadResult::Empty
        );
    }

    #[test]
    fn garbage_is_malformed() {
        assert_eq!(decode_readings(Some("not json")), LoadResult::Malformed);
        assert_eq!(decode_readings(Some("42")), LoadResult::Malformed);
        assert_eq!(decode_readings(Some(r#"{"foo": 1}"#)), LoadResult::Malformed);
    }

    #[test]
    fn bad_records_are_skipped() {
        let raw = r#"[
            {"timestamp": "2024-01-01T00:00:00Z", "level": 50, "currentVolume": 500,
             "totalVolume": 1000, "temperature": 20, "purity": 90},
            {"timestamp": "garbage", "level": 1}
        ]"#;
        let LoadResult::Ready(readings) = decode_readings(Some(raw)) else {
            panic!("good record should survive");
        };
        assert_eq!(readings.len(), 1);
    }

    #[test]
    fn only_bad_records_is_malformed() {
        let raw = r#"[{"timestamp": "garbage"}]"#;
        assert_eq!(decode_readings(Some(raw)), LoadResult::Malformed);
    }

    #[test]
    fn serializes_camel_case() {
        let reading = Reading {
            timestamp: "2024-01-01T00:00:00Z".parse().unwrap(),
            level: 50.0,
            current_volume: 500.0,
            total_volume: 1000.0,
            temperature: 20.0,
            purity: 90.0,
        };
        let json = serde_json::to_string(&reading).unwrap();
        assert!(json.contains("\"currentVolume\":500.0"));
        assert!(json.contains("\"totalVolume\":1000.0"));
    }

    #[test]
    fn placeholder_is_zeroed() {
        let p = Reading::placeholder(Utc::now());
        assert_eq!(p.level, 0.0);
        assert_eq!(p.current_volume, 0.0);
        assert_eq!(p.total_volume, 1000.0);
    }

    #[test]
    fn latest_is_last_inserted() {
        let LoadResult::Ready(mut readings) = decode_readings(Some(SAMPLE)) else {
            panic!();
        };
        let mut second = readings[0].clone();
        second.level = 60.0;
        readings.push(second);
        assert_eq!(latest(&readings).unwrap().level, 60.0);
        assert!(latest(&[]).is_none());
    }
}
