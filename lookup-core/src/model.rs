use serde::Deserialize;

use crate::error::LookupError;

/// The stored record the backend returns for an identifier: the user's
/// original request context plus the weather conditions captured for it.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherRecord {
    #[serde(rename = "user_request_data")]
    pub request: RequestContext,

    // The backend stores this under a key with a literal space in it.
    #[serde(rename = "weather data")]
    pub weather: WeatherReport,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RequestContext {
    pub date: String,
    pub location: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherReport {
    pub current: CurrentConditions,
    pub location: Place,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentConditions {
    pub temperature: f64,
    #[serde(default)]
    pub weather_icons: Vec<String>,
    #[serde(default)]
    pub weather_descriptions: Vec<String>,
    pub wind_speed: f64,
    pub humidity: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Place {
    pub name: String,
    pub country: String,
    pub localtime: String,
}

/// A success body arrives either as the record itself or as a sequence
/// wrapping it. Normalized into a single typed record at this boundary.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RecordPayload {
    One(Box<WeatherRecord>),
    Many(Vec<WeatherRecord>),
}

impl RecordPayload {
    /// Unwraps the sequence shape by taking its first element. An empty
    /// sequence is an error, never a silent no-op.
    pub fn into_record(self) -> Result<WeatherRecord, LookupError> {
        match self {
            RecordPayload::One(record) => Ok(*record),
            RecordPayload::Many(records) => {
                records.into_iter().next().ok_or(LookupError::EmptyBatch)
            }
        }
    }
}

/// Failure body shape; `detail` is optional.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_BODY: &str = r#"{
        "user_request_data": {"date": "2024-01-01", "location": "Paris", "notes": ""},
        "weather data": {
            "current": {
                "temperature": 12,
                "weather_icons": ["x.png"],
                "weather_descriptions": ["Cloudy"],
                "wind_speed": 10,
                "humidity": 70
            },
            "location": {"name": "Paris", "country": "France", "localtime": "2024-01-01 10:00"}
        }
    }"#;

    fn assert_example_record(record: &WeatherRecord) {
        assert_eq!(record.request.date, "2024-01-01");
        assert_eq!(record.request.location, "Paris");
        assert_eq!(record.request.notes, "");
        assert_eq!(record.weather.current.temperature, 12.0);
        assert_eq!(record.weather.current.weather_icons, vec!["x.png"]);
        assert_eq!(record.weather.current.weather_descriptions, vec!["Cloudy"]);
        assert_eq!(record.weather.current.wind_speed, 10.0);
        assert_eq!(record.weather.current.humidity, 70.0);
        assert_eq!(record.weather.location.name, "Paris");
        assert_eq!(record.weather.location.country, "France");
        assert_eq!(record.weather.location.localtime, "2024-01-01 10:00");
    }

    #[test]
    fn single_record_body_parses() {
        let payload: RecordPayload = serde_json::from_str(EXAMPLE_BODY).expect("must parse");
        let record = payload.into_record().expect("single record");
        assert_example_record(&record);
    }

    #[test]
    fn one_element_sequence_is_unwrapped() {
        let body = format!("[{EXAMPLE_BODY}]");
        let payload: RecordPayload = serde_json::from_str(&body).expect("must parse");
        let record = payload.into_record().expect("first element");
        assert_example_record(&record);
    }

    #[test]
    fn empty_sequence_is_an_error() {
        let payload: RecordPayload = serde_json::from_str("[]").expect("must parse");
        let err = payload.into_record().unwrap_err();
        assert!(matches!(err, LookupError::EmptyBatch));
    }

    #[test]
    fn missing_notes_defaults_to_empty() {
        let body = r#"{
            "user_request_data": {"date": "2024-01-01", "location": "Paris"},
            "weather data": {
                "current": {"temperature": 1, "wind_speed": 2, "humidity": 3},
                "location": {"name": "Paris", "country": "France", "localtime": "now"}
            }
        }"#;
        let record: WeatherRecord = serde_json::from_str(body).expect("must parse");
        assert_eq!(record.request.notes, "");
        assert!(record.weather.current.weather_icons.is_empty());
    }

    #[test]
    fn detail_field_is_optional() {
        let with: ErrorBody = serde_json::from_str(r#"{"detail": "X"}"#).expect("must parse");
        assert_eq!(with.detail.as_deref(), Some("X"));

        let without: ErrorBody = serde_json::from_str("{}").expect("must parse");
        assert!(without.detail.is_none());
    }
}
