//! Conversion between the hex grid and 2D screen space: where a hex lands on
//! screen, where its corners are, and which hex a screen position picks.

use crate::{
    fractional::FractionalHex,
    hex::Hex,
    screen::{Point2, Vector2},
};
use nalgebra::Matrix2;
use std::f64::consts::TAU;

/// The geometric convention for drawing hexes: pointy-top or flat-top.
///
/// An orientation is a 2×2 forward matrix mapping (q, r) to unscaled screen
/// offsets, its inverse for the reverse mapping, and the angle of the first
/// corner, measured in sixths of a turn (0.5 = 30° for pointy, 0.0 for flat).
/// There are exactly two of these; use [Self::pointy] or [Self::flat].
#[derive(Clone, Debug, PartialEq)]
pub struct Orientation {
    forward: Matrix2<f64>,
    inverse: Matrix2<f64>,
    start_angle: f64,
}

impl Orientation {
    /// Pointy-top hexes: a vertex points up, rows of hexes run horizontally.
    pub fn pointy() -> Self {
        let sqrt3 = 3.0_f64.sqrt();
        Self {
            forward: Matrix2::new(
                sqrt3,
                sqrt3 / 2.0,
                0.0,
                3.0 / 2.0,
            ),
            inverse: Matrix2::new(
                sqrt3 / 3.0,
                -1.0 / 3.0,
                0.0,
                2.0 / 3.0,
            ),
            start_angle: 0.5,
        }
    }

    /// Flat-top hexes: an edge faces up, columns of hexes run vertically.
    pub fn flat() -> Self {
        let sqrt3 = 3.0_f64.sqrt();
        Self {
            forward: Matrix2::new(
                3.0 / 2.0,
                0.0,
                sqrt3 / 2.0,
                sqrt3,
            ),
            inverse: Matrix2::new(
                2.0 / 3.0,
                0.0,
                -1.0 / 3.0,
                sqrt3 / 3.0,
            ),
            start_angle: 0.0,
        }
    }

    /// Angle of corner 0, in sixths of a full turn
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }
}

/// Everything needed to pin the hex grid onto a screen: an [Orientation],
/// a per-axis pixel scale, and the screen position of the origin hex.
///
/// A layout is cheap to build and immutable after construction; to change the
/// scale or origin, build a new one.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub orientation: Orientation,
    /// Distance from a hex's center to its corners, per axis, in pixels.
    /// Unequal x/y stretch the grid.
    pub size: Vector2,
    /// Screen position of the center of hex (0, 0, 0)
    pub origin: Point2,
}

impl Layout {
    pub fn new(orientation: Orientation, size: Vector2, origin: Point2) -> Self {
        Self {
            orientation,
            size,
            origin,
        }
    }

    /// Get the screen position of the center of a hex.
    pub fn hex_to_screen(&self, hex: Hex) -> Point2 {
        let unscaled = self.orientation.forward
            * nalgebra::Vector2::new(hex.q() as f64, hex.r() as f64);
        self.origin
            + Vector2 {
                x: unscaled.x * self.size.x,
                y: unscaled.y * self.size.y,
            }
    }

    /// Get the offset from a hex's center to one of its corners. `corner`
    /// must be in `0..6`; corner 0 sits at the orientation's start angle and
    /// each subsequent corner is another 60° around the center. Unlike
    /// [Hex::direction], this does no index wrapping.
    pub fn corner_offset(&self, corner: usize) -> Vector2 {
        let angle =
            TAU * (self.orientation.start_angle + corner as f64) / 6.0;
        Vector2 {
            x: self.size.x * angle.cos(),
            y: self.size.y * angle.sin(),
        }
    }

    /// Get the screen positions of all six corners of a hex, in the fixed fan
    /// order described on [Self::corner_offset].
    pub fn polygon_corners(&self, hex: Hex) -> [Point2; 6] {
        let center = self.hex_to_screen(hex);
        let mut corners = [Point2::default(); 6];
        for (index, corner) in corners.iter_mut().enumerate() {
            *corner = center + self.corner_offset(index);
        }
        corners
    }

    /// Get the hex under a screen position. This is the picking/hit-testing
    /// half of the round trip: the inverse matrix maps the normalized screen
    /// offset to a [FractionalHex], which then rounds to the containing hex.
    /// For every hex, `screen_to_hex(hex_to_screen(hex)) == hex`.
    pub fn screen_to_hex(&self, point: Point2) -> Hex {
        let normalized = nalgebra::Vector2::new(
            (point.x - self.origin.x) / self.size.x,
            (point.y - self.origin.y) / self.size.y,
        );
        let axial = self.orientation.inverse * normalized;
        FractionalHex::new(axial.x, axial.y, -axial.x - axial.y).round()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_orientation_matrices_are_inverses() {
        for orientation in [Orientation::pointy(), Orientation::flat()] {
            let product = orientation.forward * orientation.inverse;
            let identity: Matrix2<f64> = Matrix2::identity();
            for index in 0..4usize {
                assert_approx_eq!(product[index], identity[index], 1e-12);
            }
        }
    }

    #[test]
    fn test_hex_to_screen_pointy() {
        let layout = Layout::new(
            Orientation::pointy(),
            Vector2 { x: 10.0, y: 10.0 },
            Point2 { x: 0.0, y: 0.0 },
        );
        let sqrt3 = 3.0_f64.sqrt();

        let origin = layout.hex_to_screen(Hex::ORIGIN);
        assert_approx_eq!(origin.x, 0.0);
        assert_approx_eq!(origin.y, 0.0);

        // One step east: a full hex width (sqrt(3) * size), no vertical move
        let east = layout.hex_to_screen(Hex::new_axial(1, 0));
        assert_approx_eq!(east.x, sqrt3 * 10.0);
        assert_approx_eq!(east.y, 0.0);

        // One step along +r: half a width over, 3/2 * size down
        let south_east = layout.hex_to_screen(Hex::new_axial(0, 1));
        assert_approx_eq!(south_east.x, sqrt3 / 2.0 * 10.0);
        assert_approx_eq!(south_east.y, 15.0);
    }

    #[test]
    fn test_hex_to_screen_respects_origin_and_size() {
        let layout = Layout::new(
            Orientation::flat(),
            Vector2 { x: 4.0, y: 7.0 },
            Point2 { x: 100.0, y: -50.0 },
        );

        let origin = layout.hex_to_screen(Hex::ORIGIN);
        assert_approx_eq!(origin.x, 100.0);
        assert_approx_eq!(origin.y, -50.0);

        // Flat orientation, one step along +q: 3/2 * size.x right and
        // sqrt(3)/2 * size.y down from the origin
        let hex = layout.hex_to_screen(Hex::new_axial(1, 0));
        assert_approx_eq!(hex.x, 100.0 + 6.0);
        assert_approx_eq!(hex.y, -50.0 + 3.0_f64.sqrt() / 2.0 * 7.0);
    }

    #[test]
    fn test_corner_offsets() {
        let pointy = Layout::new(
            Orientation::pointy(),
            Vector2 { x: 10.0, y: 10.0 },
            Point2 { x: 0.0, y: 0.0 },
        );
        // Pointy corner 0 is at 30°
        let corner = pointy.corner_offset(0);
        assert_approx_eq!(corner.x, 10.0 * (TAU / 12.0).cos());
        assert_approx_eq!(corner.y, 10.0 * (TAU / 12.0).sin());

        let flat = Layout::new(
            Orientation::flat(),
            Vector2 { x: 10.0, y: 10.0 },
            Point2 { x: 0.0, y: 0.0 },
        );
        // Flat corner 0 is at 0°: straight right of center
        let corner = flat.corner_offset(0);
        assert_approx_eq!(corner.x, 10.0);
        assert_approx_eq!(corner.y, 0.0);
    }
}
