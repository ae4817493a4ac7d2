//! A single circular cell: wandering motion and pairwise absorption.

use std::f64::consts::{PI, TAU};

use glam::DVec2;
use rand::Rng;

use crate::color::Color;

/// Total width of the random heading perturbation per tick (radians).
pub const WIGGLINESS: f64 = 0.2;

/// Distance scale of the pull toward the center of gravity.
///
/// The pull is `tanh(distance / WANDER_FROM_CENTER)`, so it is negligible
/// on a normal canvas and only saturates very far away.
pub const WANDER_FROM_CENTER: f64 = 60_000.0;

/// Wraps an angle into `[-π, π)`.
pub fn normalize_radians(theta: f64) -> f64 {
    ((theta + PI) % TAU + TAU) % TAU - PI
}

/// Which side of an interaction grew.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Absorber {
    /// The cell `interact_with` was called on.
    Receiver,
    /// The cell passed as the argument.
    Argument,
}

/// Outcome of [`Cell::interact_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interaction {
    /// At least one of the cells has radius 0.
    Inert,
    /// The cells do not touch.
    Apart,
    Absorbed { by: Absorber },
}

/// Read-only geometry handed to renderers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellShape {
    pub center: DVec2,
    pub radius: f64,
    pub color: Color,
}

impl CellShape {
    #[inline]
    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }
}

#[derive(Clone, Debug)]
pub struct Cell {
    center: DVec2,
    radius: f64,
    heading: f64,
    color: Color,
}

impl Cell {
    /// Creates a cell with a random heading.
    pub fn new(center: DVec2, radius: f64, color: Color, rng: &mut impl Rng) -> Self {
        let heading = rng.random_range(0.0..TAU);
        Self::with_heading(center, radius, heading, color)
    }

    pub fn with_heading(center: DVec2, radius: f64, heading: f64, color: Color) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            heading: normalize_radians(heading),
            color,
        }
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn heading(&self) -> f64 {
        self.heading
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// A cell with radius 0 never interacts again.
    #[inline]
    pub fn is_inert(&self) -> bool {
        self.radius == 0.0
    }

    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    pub fn shape(&self) -> CellShape {
        CellShape {
            center: self.center,
            radius: self.radius,
            color: self.color,
        }
    }

    /// Changes the radius by `amount`, never going below zero.
    pub fn grow(&mut self, amount: f64) {
        self.set_radius(self.radius + amount);
    }

    fn set_radius(&mut self, radius: f64) {
        self.radius = radius.max(0.0);
    }

    /// Advances one unit along the heading, then steers.
    ///
    /// The new heading is the old one plus a uniform wobble in
    /// `[-WIGGLINESS/2, WIGGLINESS/2)` plus the angular difference to the
    /// center of gravity, scaled by `tanh(distance / WANDER_FROM_CENTER)`.
    pub fn move_around(&mut self, center_of_gravity: DVec2, rng: &mut impl Rng) {
        self.center += DVec2::new(self.heading.cos(), self.heading.sin());

        let to_center = center_of_gravity - self.center;
        let dist_to_center = to_center.length();
        let angle_to_center = to_center.y.atan2(to_center.x);
        let turn_toward_center = normalize_radians(angle_to_center - self.heading);

        let wobble = (rng.random::<f64>() - 0.5) * WIGGLINESS;
        self.heading = normalize_radians(
            self.heading
                + wobble
                + turn_toward_center * (dist_to_center / WANDER_FROM_CENTER).tanh(),
        );
    }

    /// Signed overlap: `>= 0` means touching or overlapping.
    pub fn overlap_amount(&self, other: &Cell) -> f64 {
        self.radius + other.radius - self.center.distance(other.center)
    }

    /// Lets the larger of the two cells absorb the smaller one.
    ///
    /// Nothing happens if either cell is inert or the cells do not touch.
    /// On equal radii the argument cell is the one that grows.
    pub fn interact_with(&mut self, other: &mut Cell) -> Interaction {
        if self.is_inert() || other.is_inert() {
            return Interaction::Inert;
        }
        if self.overlap_amount(other) < 0.0 {
            return Interaction::Apart;
        }

        if self.radius > other.radius {
            self.absorb(other);
            Interaction::Absorbed {
                by: Absorber::Receiver,
            }
        } else {
            other.absorb(self);
            Interaction::Absorbed {
                by: Absorber::Argument,
            }
        }
    }

    /// Takes area from `other` until the two circles are tangent.
    ///
    /// Solves `r + r' = d` and `r² + r'² = r_self² + r_other²` for the
    /// larger root `r`. The loser's radius is clamped at zero, in which case
    /// area is no longer conserved.
    fn absorb(&mut self, other: &mut Cell) {
        let d = self.center.distance(other.center);
        let a = sqr(self.radius) + sqr(other.radius);
        // Only floating-point drift can push this below zero.
        let radicand = (2.0 * a - sqr(d)).max(0.0);
        let new_radius = (d + radicand.sqrt()) / 2.0;

        self.set_radius(new_radius);
        other.set_radius(d - new_radius);
    }
}

#[inline]
fn sqr(x: f64) -> f64 {
    x * x
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng};

    const EPS: f64 = 1e-9;

    fn cell_at(x: f64, y: f64, radius: f64) -> Cell {
        Cell::with_heading(DVec2::new(x, y), radius, 0.0, Color::rgb(255, 255, 255))
    }

    #[test]
    fn normalize_keeps_small_angles() {
        assert!(normalize_radians(0.0).abs() < EPS);
        assert!((normalize_radians(1.0) - 1.0).abs() < EPS);
        assert!((normalize_radians(-1.0) + 1.0).abs() < EPS);
    }

    #[test]
    fn normalize_wraps_full_turns() {
        assert!((normalize_radians(TAU + 0.5) - 0.5).abs() < EPS);
        assert!((normalize_radians(-TAU - 0.5) + 0.5).abs() < EPS);
        assert!((normalize_radians(3.0 * PI / 2.0) + PI / 2.0).abs() < EPS);
    }

    #[test]
    fn normalize_maps_pi_to_minus_pi() {
        assert_eq!(normalize_radians(PI), -PI);
    }

    #[test]
    fn grow_clamps_at_zero() {
        let mut c = cell_at(0.0, 0.0, 3.0);
        c.grow(0.5);
        assert_eq!(c.radius(), 3.5);
        c.grow(-100.0);
        assert_eq!(c.radius(), 0.0);
        assert!(c.is_inert());
    }

    #[test]
    fn grow_does_not_move_the_cell() {
        let mut c = cell_at(4.0, -2.0, 3.0);
        c.grow(2.0);
        assert_eq!(c.center(), DVec2::new(4.0, -2.0));
    }

    #[test]
    fn big_absorbs_small_and_small_is_clamped() {
        let mut big = cell_at(0.0, 0.0, 10.0);
        let mut small = cell_at(8.0, 0.0, 6.0);

        let outcome = small.interact_with(&mut big);

        assert_eq!(
            outcome,
            Interaction::Absorbed {
                by: Absorber::Argument
            }
        );
        let expected = (8.0 + 208.0_f64.sqrt()) / 2.0;
        assert!((big.radius() - expected).abs() < EPS);
        assert!((big.radius() - 11.2111).abs() < 1e-3);
        // 8 - 11.21 is negative, so the loser bottoms out at zero.
        assert_eq!(small.radius(), 0.0);
        // Positions never change on absorption.
        assert_eq!(big.center(), DVec2::ZERO);
        assert_eq!(small.center(), DVec2::new(8.0, 0.0));
    }

    #[test]
    fn distant_cells_do_not_interact() {
        let mut a = cell_at(0.0, 0.0, 5.0);
        let mut b = cell_at(20.0, 0.0, 5.0);

        assert_eq!(a.interact_with(&mut b), Interaction::Apart);
        assert_eq!(b.interact_with(&mut a), Interaction::Apart);
        assert_eq!(a.radius(), 5.0);
        assert_eq!(b.radius(), 5.0);
    }

    #[test]
    fn inert_cells_do_not_interact() {
        let mut a = cell_at(0.0, 0.0, 0.0);
        let mut b = cell_at(1.0, 0.0, 5.0);

        assert_eq!(a.interact_with(&mut b), Interaction::Inert);
        assert_eq!(b.interact_with(&mut a), Interaction::Inert);
        assert_eq!(a.radius(), 0.0);
        assert_eq!(b.radius(), 5.0);
    }

    #[test]
    fn touching_cells_still_interact() {
        let mut a = cell_at(0.0, 0.0, 4.0);
        let mut b = cell_at(7.0, 0.0, 3.0);

        let outcome = a.interact_with(&mut b);

        assert_eq!(
            outcome,
            Interaction::Absorbed {
                by: Absorber::Receiver
            }
        );
        // Already tangent with conserved area: the radii barely move.
        assert!((a.radius() - 4.0).abs() < EPS);
        assert!((b.radius() - 3.0).abs() < EPS);
    }

    #[test]
    fn equal_radii_let_the_argument_grow() {
        let mut receiver = cell_at(0.0, 0.0, 5.0);
        let mut argument = cell_at(6.0, 0.0, 5.0);

        let outcome = receiver.interact_with(&mut argument);

        assert_eq!(
            outcome,
            Interaction::Absorbed {
                by: Absorber::Argument
            }
        );
        assert!(argument.radius() > 5.0);
        assert!(receiver.radius() < 5.0);
    }

    #[test]
    fn larger_receiver_absorbs_argument() {
        let mut receiver = cell_at(0.0, 0.0, 6.0);
        let mut argument = cell_at(9.0, 0.0, 4.0);

        receiver.interact_with(&mut argument);

        assert!(receiver.radius() > 6.0);
        assert!(argument.radius() < 4.0);
        assert!((receiver.radius() + argument.radius() - 9.0).abs() < EPS);
        let area = receiver.radius().powi(2) + argument.radius().powi(2);
        assert!((area - 52.0).abs() < 1e-9);
    }

    #[test]
    fn coincident_centers_give_full_absorption() {
        let mut a = cell_at(3.0, 3.0, 4.0);
        let mut b = cell_at(3.0, 3.0, 3.0);

        a.interact_with(&mut b);

        // d = 0: r = sqrt(2a) / 2 and the loser is clamped to zero.
        assert!((a.radius() - (2.0 * 25.0_f64).sqrt() / 2.0).abs() < EPS);
        assert_eq!(b.radius(), 0.0);
    }

    #[test]
    fn move_advances_one_unit_along_heading() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut c = Cell::with_heading(DVec2::new(10.0, 10.0), 3.0, PI / 2.0, Color::rgb(0, 0, 0));

        c.move_around(DVec2::new(10.0, 10.0), &mut rng);

        assert!((c.center() - DVec2::new(10.0, 11.0)).length() < EPS);
    }

    #[test]
    fn far_away_cell_turns_toward_center_by_bounded_amount() {
        let mut rng = StdRng::seed_from_u64(3);
        let center_of_gravity = DVec2::new(0.0, 0.0);
        // Far beyond the wander scale, heading straight away from the center.
        let mut c = cell_at(200_000.0, 50_000.0, 3.0);

        c.move_around(center_of_gravity, &mut rng);

        let moved = DVec2::new(200_001.0, 50_000.0);
        assert!((c.center() - moved).length() < EPS);

        let to_center = center_of_gravity - moved;
        let turn = normalize_radians(to_center.y.atan2(to_center.x));
        let pull = turn * (to_center.length() / WANDER_FROM_CENTER).tanh();
        assert!(pull.abs() <= turn.abs());

        let deviation = normalize_radians(c.heading() - pull);
        assert!(
            deviation.abs() <= WIGGLINESS / 2.0 + EPS,
            "heading {} strayed {} from pull {}",
            c.heading(),
            deviation,
            pull
        );
    }

    #[test]
    fn nearby_cell_mostly_wobbles() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut c = cell_at(400.0, 400.0, 3.0);

        for _ in 0..50 {
            let before = c.heading();
            c.move_around(DVec2::new(410.0, 400.0), &mut rng);
            let change = normalize_radians(c.heading() - before);
            // tanh(d / 60000) is tiny here, so the wobble dominates.
            assert!(change.abs() <= WIGGLINESS / 2.0 + 1e-2);
        }
    }

    proptest! {
        #[test]
        fn prop_normalize_range_and_idempotence(theta in -1.0e4f64..1.0e4) {
            let n = normalize_radians(theta);
            prop_assert!((-PI..PI).contains(&n) || (n - PI).abs() < 1e-12, "out of range: {}", n);
            let nn = normalize_radians(n);
            prop_assert!(normalize_radians(nn - n).abs() < 1e-9, "not idempotent: {} vs {}", n, nn);
        }

        #[test]
        fn prop_grow_never_goes_negative(start in 0.0f64..50.0, amount in -1.0e6f64..1.0e3) {
            let mut c = cell_at(0.0, 0.0, start);
            c.grow(amount);
            prop_assert!(c.radius() >= 0.0);
        }

        #[test]
        fn prop_absorption_conserves_area_and_leaves_tangent(
            r1 in 0.5f64..50.0,
            r2 in 0.5f64..50.0,
            t in 0.0f64..=1.0,
        ) {
            // Distances where the loser keeps a non-negative radius: sqrt(a) <= d <= r1 + r2.
            let a = r1 * r1 + r2 * r2;
            let d = a.sqrt() + t * (r1 + r2 - a.sqrt());
            let mut c1 = cell_at(0.0, 0.0, r1);
            let mut c2 = cell_at(d, 0.0, r2);

            c1.interact_with(&mut c2);

            let (n1, n2) = (c1.radius(), c2.radius());
            prop_assert!((n1 + n2 - d).abs() < 1e-6);
            prop_assert!((n1 * n1 + n2 * n2 - a).abs() < 1e-6 * a.max(1.0));
        }

        #[test]
        fn prop_larger_cell_ends_up_larger(
            r_big in 1.0f64..50.0,
            shrink in 0.01f64..0.99,
            t in 0.0f64..1.0,
        ) {
            let r_small = r_big * shrink;
            let d = t * (r_big + r_small);
            let mut big = cell_at(0.0, 0.0, r_big);
            let mut small = cell_at(d, 0.0, r_small);

            small.interact_with(&mut big);

            prop_assert!(big.radius() >= small.radius());
            prop_assert!(small.radius() <= r_small + 1e-9);
        }
    }
}
