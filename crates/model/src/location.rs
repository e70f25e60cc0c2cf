use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::{route::Waypoint, shuttle::ShuttleId};

/// One position report for a shuttle. Built fresh for every tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationUpdate {
    pub shuttle_id: ShuttleId,
    pub latitude: f64,
    pub longitude: f64,
    pub speed: f64,
    pub heading: f64,
    pub accuracy: f64,
}

impl LocationUpdate {
    pub fn at(
        shuttle_id: ShuttleId,
        position: &Waypoint,
        speed: f64,
        heading: f64,
        accuracy: f64,
    ) -> Self {
        Self {
            shuttle_id,
            latitude: position.latitude,
            longitude: position.longitude,
            speed,
            heading,
            accuracy,
        }
    }
}

/// Location record as stored by the tracking service.
///
/// Only the fields the simulators look at are typed. Everything else the
/// service sends, nested objects included, is kept in `extra` so the record
/// serializes back to what was received.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    pub id: Option<serde_json::Value>,
    pub shuttle_id: Option<ShuttleId>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub speed: Option<f64>,
    pub heading: Option<f64>,
    pub accuracy: Option<f64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

const TIMESTAMP_FIELDS: [&str; 3] = ["timestamp", "recordedAt", "createdAt"];

impl LocationRecord {
    /// Builds a record from any JSON object, falling back to an untyped
    /// record when the typed fields do not fit.
    pub fn from_json(value: serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Object(fields) => {
                match serde_json::from_value(serde_json::Value::Object(fields.clone())) {
                    Ok(record) => Some(record),
                    Err(_) => Some(Self {
                        extra: fields,
                        ..Default::default()
                    }),
                }
            }
            _ => None,
        }
    }

    /// When the position was recorded, in UTC. Offset timestamps are
    /// converted; timestamps without an offset are taken as they are.
    pub fn recorded_at(&self) -> Option<NaiveDateTime> {
        TIMESTAMP_FIELDS
            .iter()
            .filter_map(|field| self.extra.get(*field)?.as_str())
            .find_map(parse_timestamp)
    }
}

fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc3339(text)
        .map(|at| at.naive_utc())
        .or_else(|_| text.parse::<NaiveDateTime>())
        .ok()
}
