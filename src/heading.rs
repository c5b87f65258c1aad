//! Snapping to the nearest field-aligned heading.

/// Candidate headings in degrees, scanned in order. 360 stands in for 0 so
/// headings just under a full turn snap forwards instead of back to 270.
const CARDINALS: [f64; 5] = [0.0, 90.0, 180.0, 270.0, 360.0];

/// Wraps a heading in degrees into `[0, 360)`.
pub fn wrap_degrees(heading: f64) -> f64 {
    let wrapped = heading.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Converts between the odometry frame (counter-clockwise, 0 along +x) and
/// the field's compass frame (clockwise, 0 along +y). The mapping is its own
/// inverse.
pub fn compass_degrees(heading: f64) -> f64 {
    wrap_degrees(90.0 - heading)
}

/// The cardinal heading (0, 90, 180 or 270 degrees) closest to `heading`.
///
/// Ties resolve to the lower candidate, and non-finite headings snap to 0.
pub fn nearest_cardinal(heading: f64) -> f64 {
    let heading = wrap_degrees(heading);

    let (nearest, _) = CARDINALS
        .into_iter()
        .fold((0.0, 360.0), |(nearest, min_diff), cardinal| {
            let diff = (heading - cardinal).abs();
            if diff < min_diff {
                (cardinal, diff)
            } else {
                (nearest, min_diff)
            }
        });

    if nearest == 360.0 { 0.0 } else { nearest }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_into_one_turn() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(-90.0), 270.0);
        assert_eq!(wrap_degrees(725.0), 5.0);
        assert_eq!(wrap_degrees(-1e-20), 0.0);
    }

    #[test]
    fn snaps_to_closest_cardinal() {
        assert_eq!(nearest_cardinal(10.0), 0.0);
        assert_eq!(nearest_cardinal(80.0), 90.0);
        assert_eq!(nearest_cardinal(170.0), 180.0);
        assert_eq!(nearest_cardinal(260.0), 270.0);
        assert_eq!(nearest_cardinal(350.0), 0.0);
    }

    #[test]
    fn snaps_negative_and_multi_turn_headings() {
        assert_eq!(nearest_cardinal(-10.0), 0.0);
        assert_eq!(nearest_cardinal(-100.0), 270.0);
        assert_eq!(nearest_cardinal(450.0), 90.0);
    }

    #[test]
    fn ties_go_to_lower_candidate() {
        assert_eq!(nearest_cardinal(45.0), 0.0);
        assert_eq!(nearest_cardinal(135.0), 90.0);
        assert_eq!(nearest_cardinal(225.0), 180.0);
        assert_eq!(nearest_cardinal(315.0), 270.0);
    }

    #[test]
    fn compass_frame_grows_clockwise_from_plus_y() {
        assert_eq!(compass_degrees(90.0), 0.0);
        assert_eq!(compass_degrees(0.0), 90.0);
        // ten degrees right of the starting heading
        assert_eq!(compass_degrees(80.0), 10.0);
        assert_eq!(compass_degrees(100.0), 350.0);
        assert_eq!(compass_degrees(compass_degrees(37.5)), 37.5);
    }

    #[test]
    fn cardinals_are_the_same_in_either_frame() {
        for heading in [12.0, 80.0, 134.0, 200.0, 301.0] {
            assert_eq!(
                compass_degrees(nearest_cardinal(heading)),
                nearest_cardinal(compass_degrees(heading))
            );
        }
    }

    #[test]
    fn non_finite_snaps_to_zero() {
        assert_eq!(nearest_cardinal(f64::NAN), 0.0);
        assert_eq!(nearest_cardinal(f64::INFINITY), 0.0);
    }
}
