use std::{error, fmt};

use itertools::Itertools;
use utility::geo;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl Waypoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Compass bearing in degrees `[0, 360)` from this waypoint towards `other`.
    pub fn bearing_to(&self, other: &Waypoint) -> f64 {
        geo::initial_bearing(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }

    pub fn distance_km_to(&self, other: &Waypoint) -> f64 {
        geo::haversine_distance(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }
}

impl From<(f64, f64)> for Waypoint {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RouteError {
    Empty(String),
}

impl error::Error for RouteError {}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RouteError::Empty(name) => write!(f, "Route '{name}' has no waypoints."),
        }
    }
}

/// A closed loop of waypoints. The last waypoint connects back to the first.
///
/// The waypoints are fixed at construction time; a route never changes
/// while it is being driven.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    name: String,
    waypoints: Vec<Waypoint>,
}

impl Route {
    pub fn new<S, I, W>(name: S, waypoints: I) -> Result<Self, RouteError>
    where
        S: Into<String>,
        I: IntoIterator<Item = W>,
        W: Into<Waypoint>,
    {
        let name = name.into();
        let waypoints = waypoints.into_iter().map(Into::into).collect::<Vec<_>>();
        if waypoints.is_empty() {
            return Err(RouteError::Empty(name));
        }
        Ok(Self { name, waypoints })
    }

    /// Loop around the University of Guilan campus in Rasht.
    pub fn guilan_campus_loop() -> Self {
        Self {
            name: "Guilan Campus Loop".to_owned(),
            waypoints: GUILAN_CAMPUS_LOOP
                .iter()
                .copied()
                .map(Waypoint::from)
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// The waypoint following `index`, wrapping around at the end of the loop.
    pub fn next_of(&self, index: usize) -> &Waypoint {
        &self.waypoints[(index + 1) % self.waypoints.len()]
    }

    /// Every waypoint paired with its successor, including the closing
    /// segment from the last waypoint back to the first.
    pub fn segments(&self) -> impl Iterator<Item = (&Waypoint, &Waypoint)> + '_ {
        self.waypoints.iter().circular_tuple_windows::<(_, _)>()
    }

    pub fn lap_length_km(&self) -> f64 {
        self.segments()
            .map(|(from, to)| from.distance_km_to(to))
            .sum()
    }
}

const GUILAN_CAMPUS_LOOP: [(f64, f64); 10] = [
    (37.2800, 49.5950),
    (37.2808, 49.5985),
    (37.2820, 49.6015),
    (37.2835, 49.6040),
    (37.2850, 49.6020),
    (37.2858, 49.5990),
    (37.2840, 49.5965),
    (37.2820, 49.5945),
    (37.2805, 49.5935),
    (37.2795, 49.5940),
];
