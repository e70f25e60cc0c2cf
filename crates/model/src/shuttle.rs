use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier the tracking service assigns to a shuttle.
///
/// The service is free to hand out numbers or strings; the value is passed
/// back exactly as it was received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShuttleId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ShuttleId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ShuttleId::Number(id) => write!(f, "{id}"),
            ShuttleId::Text(id) => write!(f, "{id}"),
        }
    }
}

impl From<i64> for ShuttleId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ShuttleId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShuttleStatus {
    Active,
    Inactive,
    Maintenance,
    #[serde(other)]
    Unknown,
}

impl ShuttleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Maintenance => "MAINTENANCE",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for ShuttleStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shuttle as listed by the tracking service. Fields the service adds
/// beyond these are ignored.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shuttle {
    pub id: ShuttleId,
    pub vehicle_number: Option<String>,
    pub route_name: Option<String>,
    pub capacity: Option<u32>,
    pub status: Option<ShuttleStatus>,
}

/// Query parameters for registering a new shuttle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewShuttle {
    pub vehicle_number: String,
    pub route_name: String,
    pub capacity: u32,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn shuttle_ids_keep_their_wire_form() {
        let numeric: ShuttleId = serde_json::from_value(json!(7)).unwrap();
        assert_eq!(numeric, ShuttleId::Number(7));
        assert_eq!(serde_json::to_value(&numeric).unwrap(), json!(7));

        let text: ShuttleId = serde_json::from_value(json!("a1b2")).unwrap();
        assert_eq!(text, ShuttleId::from("a1b2"));
        assert_eq!(text.to_string(), "a1b2");
    }

    #[test]
    fn listing_entry_ignores_unknown_fields() {
        let shuttle: Shuttle = serde_json::from_value(json!({
            "id": 3,
            "vehicleNumber": "GU-SHUTTLE-01",
            "routeName": "Guilan Campus Loop",
            "capacity": 24,
            "status": "ACTIVE",
            "lastSeen": "2024-05-01T08:00:00"
        }))
        .unwrap();
        assert_eq!(shuttle.id, ShuttleId::Number(3));
        assert_eq!(shuttle.vehicle_number.as_deref(), Some("GU-SHUTTLE-01"));
        assert_eq!(shuttle.status, Some(ShuttleStatus::Active));
    }

    #[test]
    fn unfamiliar_status_does_not_break_the_listing() {
        let shuttles: Vec<Shuttle> = serde_json::from_value(json!([
            { "id": 1, "vehicleNumber": "BUS-001", "status": "OUT_OF_SERVICE" },
            { "id": 2, "vehicleNumber": "BUS-002" }
        ]))
        .unwrap();
        assert_eq!(shuttles[0].status, Some(ShuttleStatus::Unknown));
        assert_eq!(shuttles[1].status, None);
    }
}
