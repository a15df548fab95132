//! Point-to-point kinematic motion.
//!
//! Each axis moves independently toward its destination by at most `pace`
//! pixels per tick and lands exactly on the destination when the remaining
//! distance is within one step. There is no slope term, so a destination that
//! differs on only one axis needs no special case.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

use crate::components::mapposition::MapPosition;

/// Destination and per-axis pace (max pixels per tick) of a moving entity.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Kinematic {
    pub destination: Vector2,
    pub pace: Vector2,
}

impl Kinematic {
    pub fn new(destination: Vector2, pace: Vector2) -> Self {
        let mut kinematic = Self {
            destination,
            pace: Vector2 { x: 0.0, y: 0.0 },
        };
        kinematic.set_pace(pace.x, pace.y);
        kinematic
    }

    /// An entity that never moves from `position`.
    pub fn parked_at(position: Vector2) -> Self {
        Self::new(position, Vector2 { x: 0.0, y: 0.0 })
    }

    pub fn set_destination(&mut self, x: f32, y: f32) {
        self.destination = Vector2 { x, y };
    }

    /// Negative paces are treated as zero.
    pub fn set_pace(&mut self, x: f32, y: f32) {
        self.pace = Vector2 {
            x: x.max(0.0),
            y: y.max(0.0),
        };
    }

    pub fn is_at_rest(&self, position: &MapPosition) -> bool {
        position.pos.x == self.destination.x && position.pos.y == self.destination.y
    }

    /// Move `position` one tick toward the destination.
    ///
    /// Returns whether the position changed.
    pub fn update_position(&self, position: &mut MapPosition) -> bool {
        if self.is_at_rest(position) {
            return false;
        }
        let x = step_axis(position.pos.x, self.destination.x, self.pace.x);
        let y = step_axis(position.pos.y, self.destination.y, self.pace.y);
        let moved = x != position.pos.x || y != position.pos.y;
        position.pos = Vector2 { x, y };
        moved
    }
}

/// One clamped step from `current` toward `target`.
fn step_axis(current: f32, target: f32, pace: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= pace {
        return target;
    }
    let next = current + delta.signum() * pace;
    // a step lost to f32 precision would never arrive
    if next == current && pace > 0.0 {
        return target;
    }
    // rounding must not carry us past the target
    if (target - next).signum() != delta.signum() {
        target
    } else {
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vector2 {
        Vector2 { x, y }
    }

    #[test]
    fn reaches_destination_in_ceil_ticks_and_stays() {
        let kin = Kinematic::new(v(600.0, 300.0), v(3.0, 3.0));
        let mut pos = MapPosition::new(400.0, 300.0);
        for tick in 1..=66 {
            kin.update_position(&mut pos);
            assert!(pos.pos.x < 600.0, "arrived early at tick {}", tick);
        }
        kin.update_position(&mut pos);
        assert_eq!(pos.pos, v(600.0, 300.0));
        assert!(kin.is_at_rest(&pos));
        for _ in 0..10 {
            assert!(!kin.update_position(&mut pos));
            assert_eq!(pos.pos, v(600.0, 300.0));
        }
    }

    #[test]
    fn vertical_only_motion_never_produces_nan() {
        let kin = Kinematic::new(v(100.0, 500.0), v(4.0, 7.0));
        let mut pos = MapPosition::new(100.0, 20.0);
        for _ in 0..200 {
            kin.update_position(&mut pos);
            assert!(!pos.pos.x.is_nan() && !pos.pos.y.is_nan());
            assert_eq!(pos.pos.x, 100.0);
        }
        assert_eq!(pos.pos, v(100.0, 500.0));
    }

    #[test]
    fn converges_without_overshoot_from_random_starts() {
        let mut rng = fastrand::Rng::with_seed(0x5eed);
        for _ in 0..500 {
            let mut pos = MapPosition::new(rng.f32() * 2000.0 - 1000.0, rng.f32() * 2000.0 - 1000.0);
            let dest = v(rng.f32() * 2000.0 - 1000.0, rng.f32() * 2000.0 - 1000.0);
            let kin = Kinematic::new(dest, v(0.5 + rng.f32() * 20.0, 0.5 + rng.f32() * 20.0));

            let mut prev_dx = (dest.x - pos.pos.x).abs();
            let mut prev_dy = (dest.y - pos.pos.y).abs();
            let side_x = (dest.x - pos.pos.x).signum();
            let side_y = (dest.y - pos.pos.y).signum();
            let mut ticks = 0;
            while !kin.is_at_rest(&pos) {
                kin.update_position(&mut pos);
                let dx = (dest.x - pos.pos.x).abs();
                let dy = (dest.y - pos.pos.y).abs();
                assert!(dx <= prev_dx && dy <= prev_dy);
                // never crosses to the other side of the destination
                assert!(dx == 0.0 || (dest.x - pos.pos.x).signum() == side_x);
                assert!(dy == 0.0 || (dest.y - pos.pos.y).signum() == side_y);
                prev_dx = dx;
                prev_dy = dy;
                ticks += 1;
                assert!(ticks < 5000, "did not converge");
            }
            assert_eq!(pos.pos, dest);
        }
    }

    #[test]
    fn zero_pace_axis_does_not_move() {
        let kin = Kinematic::new(v(10.0, 10.0), v(0.0, 2.0));
        let mut pos = MapPosition::new(0.0, 0.0);
        kin.update_position(&mut pos);
        assert_eq!(pos.pos, v(0.0, 2.0));
    }

    #[test]
    fn negative_pace_is_clamped() {
        let mut kin = Kinematic::parked_at(v(0.0, 0.0));
        kin.set_pace(-3.0, 2.0);
        assert_eq!(kin.pace, v(0.0, 2.0));
    }

    #[test]
    fn moves_left_and_up() {
        let kin = Kinematic::new(v(0.0, 0.0), v(5.0, 5.0));
        let mut pos = MapPosition::new(12.0, 7.0);
        kin.update_position(&mut pos);
        assert_eq!(pos.pos, v(7.0, 2.0));
        kin.update_position(&mut pos);
        assert_eq!(pos.pos, v(2.0, 0.0));
    }

    #[test]
    fn step_below_float_precision_still_arrives() {
        // 2^24: adjacent f32 values are 2 apart, so +0.5 rounds back
        let start = v(16_777_216.0, 5.0);
        let kin = Kinematic::new(v(16_777_300.0, 5.0), v(0.5, 0.0));
        let mut pos = MapPosition::new(start.x, start.y);
        assert!(kin.update_position(&mut pos));
        assert_eq!(pos.pos, v(16_777_300.0, 5.0));
        assert!(kin.is_at_rest(&pos));
    }
}
