use serde::{Deserialize, Serialize};

/// Registration body for a sensor on the IoT platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sensor {
    pub sensor_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub unit: String,
}

/// A sensor to seed, with the level its readings hover around.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorSpec {
    pub sensor: Sensor,
    pub base: f64,
    pub jitter: f64,
}

impl SensorSpec {
    pub fn new(
        sensor_id: &str,
        name: &str,
        kind: &str,
        location: &str,
        unit: &str,
        base: f64,
        jitter: f64,
    ) -> Self {
        Self {
            sensor: Sensor {
                sensor_id: sensor_id.to_owned(),
                name: name.to_owned(),
                kind: kind.to_owned(),
                location: location.to_owned(),
                unit: unit.to_owned(),
            },
            base,
            jitter,
        }
    }

    pub fn sensor_id(&self) -> &str {
        &self.sensor.sensor_id
    }

    /// Turns a uniform sample from `[-1, 1]` into a reading, rounded to two
    /// decimals.
    pub fn reading(&self, unit_offset: f64) -> SensorReading {
        let value = self.base + self.jitter * unit_offset.clamp(-1.0, 1.0);
        SensorReading {
            value: (value * 100.0).round() / 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub value: f64,
}

const CLASSROOM_A1: &str = "University of Guilan - Classroom A1";

/// Sensors installed around the University of Guilan campus.
pub fn campus_sensors() -> Vec<SensorSpec> {
    vec![
        SensorSpec::new(
            "gu-rasht-classroom-a1-temp",
            "Classroom A1 Temperature",
            "TEMPERATURE",
            CLASSROOM_A1,
            "C",
            22.5,
            0.6,
        ),
        SensorSpec::new(
            "gu-rasht-classroom-a1-humidity",
            "Classroom A1 Humidity",
            "HUMIDITY",
            CLASSROOM_A1,
            "%",
            48.0,
            3.0,
        ),
        SensorSpec::new(
            "gu-rasht-classroom-a1-co2",
            "Classroom A1 CO2",
            "CO2",
            CLASSROOM_A1,
            "ppm",
            620.0,
            80.0,
        ),
        SensorSpec::new(
            "gu-rasht-library-light",
            "Library Light",
            "LIGHT",
            "University of Guilan - Central Library",
            "lux",
            320.0,
            40.0,
        ),
        SensorSpec::new(
            "gu-rasht-lab-occupancy",
            "IoT Lab Occupancy",
            "OCCUPANCY",
            "University of Guilan - IoT Lab",
            "count",
            12.0,
            4.0,
        ),
    ]
}
