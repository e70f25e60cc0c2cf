pub const EARTH_RADIUS_KM: f64 = 6371.0;

pub fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

pub fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}

pub fn haversine_distance(
    latitude_1: f64,
    longitude_1: f64,
    latitude_2: f64,
    longitude_2: f64,
) -> f64 {
    let lat1_rad = to_radians(latitude_1);
    let lon1_rad = to_radians(longitude_1);
    let lat2_rad = to_radians(latitude_2);
    let lon2_rad = to_radians(longitude_2);

    let dlat = lat2_rad - lat1_rad;
    let dlon = lon2_rad - lon1_rad;

    let a = (dlat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Initial great-circle bearing from the first point towards the second,
/// in degrees clockwise from true north within `[0, 360)`.
///
/// Identical points have no direction; `atan2(0, 0)` is `0` so the result
/// is `0` as well.
pub fn initial_bearing(
    latitude_1: f64,
    longitude_1: f64,
    latitude_2: f64,
    longitude_2: f64,
) -> f64 {
    let lat1_rad = to_radians(latitude_1);
    let lat2_rad = to_radians(latitude_2);
    let dlon = to_radians(longitude_2) - to_radians(longitude_1);

    let x = dlon.sin() * lat2_rad.cos();
    let y = lat1_rad.cos() * lat2_rad.sin()
        - lat1_rad.sin() * lat2_rad.cos() * dlon.cos();
    let theta = x.atan2(y);

    (to_degrees(theta) + 360.0) % 360.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn angle_between(a: f64, b: f64) -> f64 {
        let diff = (a - b).rem_euclid(360.0);
        diff.min(360.0 - diff)
    }

    #[test]
    fn bearing_between_campus_waypoints() {
        let bearing = initial_bearing(37.2800, 49.5950, 37.2808, 49.5985);
        assert!((bearing - 73.971_420_541_359_75).abs() < EPSILON);
    }

    #[test]
    fn bearing_of_identical_points_is_zero() {
        assert_eq!(initial_bearing(37.28, 49.595, 37.28, 49.595), 0.0);
        assert_eq!(initial_bearing(0.0, 0.0, 0.0, 0.0), 0.0);
        assert_eq!(initial_bearing(-33.9, -18.4, -33.9, -18.4), 0.0);
    }

    #[test]
    fn cardinal_directions() {
        assert!((initial_bearing(0.0, 0.0, 1.0, 0.0) - 0.0).abs() < EPSILON);
        assert!((initial_bearing(0.0, 0.0, 0.0, 1.0) - 90.0).abs() < EPSILON);
        assert!((initial_bearing(0.0, 0.0, -1.0, 0.0) - 180.0).abs() < EPSILON);
        assert!((initial_bearing(0.0, 0.0, 0.0, -1.0) - 270.0).abs() < EPSILON);
    }

    #[test]
    fn bearing_stays_within_compass_range() {
        let points = [
            (37.2800, 49.5950),
            (37.2858, 49.5990),
            (-45.0, 170.0),
            (89.9, -179.9),
            (-89.9, 0.0),
            (0.0, 180.0),
            (0.0, -180.0),
            (12.5, -0.000_000_1),
        ];
        for (lat_a, lon_a) in points {
            for (lat_b, lon_b) in points {
                let bearing = initial_bearing(lat_a, lon_a, lat_b, lon_b);
                assert!(
                    (0.0..360.0).contains(&bearing),
                    "bearing {bearing} out of range for ({lat_a}, {lon_a}) -> ({lat_b}, {lon_b})"
                );
            }
        }
    }

    #[test]
    fn reverse_bearing_differs_by_half_turn_on_short_segments() {
        let segments = [
            ((37.2800, 49.5950), (37.2808, 49.5985)),
            ((37.2835, 49.6040), (37.2850, 49.6020)),
            ((37.2805, 49.5935), (37.2795, 49.5940)),
        ];
        for ((lat_a, lon_a), (lat_b, lon_b)) in segments {
            let forward = initial_bearing(lat_a, lon_a, lat_b, lon_b);
            let backward = initial_bearing(lat_b, lon_b, lat_a, lon_a);
            assert!(angle_between(forward + 180.0, backward) < 0.01);
        }
    }

    #[test]
    fn haversine_of_one_degree_latitude() {
        let distance = haversine_distance(0.0, 0.0, 1.0, 0.0);
        assert!((distance - 111.194_926_644_558_73).abs() < 1e-6);
        assert_eq!(haversine_distance(37.28, 49.595, 37.28, 49.595), 0.0);
    }
}
