use lariat_components::body::standard_gravity;
use lariat_core::PlanePoint;
use serde::{Deserialize, Serialize};
use uom::si::f64::Time;

/// The position of a trial's target at a given simulation time.
///
/// The loop evaluates targets at discrete grid times only. Callers that
/// generate targets (randomly or otherwise) implement this trait or hand
/// over ready-made values; the simulation core never generates its own.
pub trait TargetPath {
    fn position_at(&self, time: Time) -> PlanePoint;
}

/// A target that falls freely from its release point.
///
/// The horizontal coordinate is constant; the height decreases as
/// `g·t²/2` from the release height, independent of the controlled body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FreeFallTarget {
    pub release: PlanePoint,
}

impl TargetPath for FreeFallTarget {
    fn position_at(&self, time: Time) -> PlanePoint {
        let drop = standard_gravity() * (time * time) * 0.5;
        PlanePoint::new(self.release.x, self.release.y + drop)
    }
}

/// A stationary target.
impl TargetPath for PlanePoint {
    fn position_at(&self, _time: Time) -> PlanePoint {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{length::meter, time::second};

    #[test]
    fn free_fall_target_drops_quadratically() {
        let target = FreeFallTarget {
            release: PlanePoint::from_si(60.0, 30.0),
        };

        let at_zero = target.position_at(Time::new::<second>(0.0));
        assert_relative_eq!(at_zero.y.get::<meter>(), 30.0);

        let at_two = target.position_at(Time::new::<second>(2.0));
        assert_relative_eq!(at_two.x.get::<meter>(), 60.0);
        assert_relative_eq!(at_two.y.get::<meter>(), 30.0 - 9.81 * 2.0);
    }

    #[test]
    fn stationary_target_ignores_time() {
        let target = PlanePoint::from_si(5.0, 7.0);
        assert_eq!(target.position_at(Time::new::<second>(100.0)), target);
    }
}
