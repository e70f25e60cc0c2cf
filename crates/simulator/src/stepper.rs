use campus_api::TrackingApi;
use model::{
    location::LocationUpdate,
    route::{Route, Waypoint},
    shuttle::ShuttleId,
};
use tokio::time::sleep;

use crate::config::DriveConfig;

/// One step along the route: where the shuttle is and where it is heading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub lap: u32,
    pub index: usize,
    pub position: Waypoint,
    pub heading: f64,
}

/// Walks a closed route waypoint by waypoint for a fixed number of laps.
///
/// The heading of every tick points from the current waypoint to the next
/// one, wrapping from the last waypoint back to the first. After
/// `route.len() * laps` ticks the stepper is exhausted.
#[derive(Debug, Clone)]
pub struct RouteStepper<'a> {
    route: &'a Route,
    laps: u32,
    lap: u32,
    index: usize,
}

impl<'a> RouteStepper<'a> {
    pub fn new(route: &'a Route, laps: u32) -> Self {
        Self {
            route,
            laps,
            lap: 0,
            index: 0,
        }
    }

    fn remaining(&self) -> usize {
        if self.lap >= self.laps {
            return 0;
        }
        (self.laps - self.lap) as usize * self.route.len() - self.index
    }
}

impl<'a> Iterator for RouteStepper<'a> {
    type Item = Tick;

    fn next(&mut self) -> Option<Self::Item> {
        if self.lap >= self.laps || self.route.is_empty() {
            return None;
        }

        let position = self.route.waypoints()[self.index];
        let heading = position.bearing_to(self.route.next_of(self.index));
        let tick = Tick {
            lap: self.lap,
            index: self.index,
            position,
            heading,
        };

        self.index = (self.index + 1) % self.route.len();
        if self.index == 0 {
            self.lap += 1;
        }
        Some(tick)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for RouteStepper<'a> {}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: usize,
    pub failed: usize,
}

/// Drives the shuttle around `route`, posting one location per tick and
/// pausing `drive.interval` after each. Rejected posts are logged and the
/// run carries on.
pub async fn run_route<T>(
    api: &T,
    shuttle_id: &ShuttleId,
    route: &Route,
    drive: &DriveConfig,
) -> RunSummary
where
    T: TrackingApi + ?Sized,
{
    let mut summary = RunSummary::default();

    for tick in RouteStepper::new(route, drive.laps) {
        let update = LocationUpdate::at(
            shuttle_id.clone(),
            &tick.position,
            drive.speed,
            tick.heading,
            drive.accuracy,
        );
        log::debug!(
            "Lap {} waypoint {}: ({}, {}) heading {:.1}.",
            tick.lap + 1,
            tick.index,
            tick.position.latitude,
            tick.position.longitude,
            tick.heading
        );

        summary.ticks += 1;
        if let Err(why) = api.post_location(&update).await {
            summary.failed += 1;
            log::warn!("Location update failed: {why}");
        }

        sleep(drive.interval).await;
    }

    summary
}
