//! Units for 2D screen space. Nothing in here knows about hexes; these are
//! the plain geometric values that [Layout](crate::Layout) converts to and
//! from.

use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, From, Into, Mul, MulAssign, Neg,
    Sub, SubAssign, Sum,
};
use serde::{Deserialize, Serialize};
use std::ops;

/// A point in 2D screen space. Hex coordinates have 3 components, screen
/// coordinates obviously only have 2. Which pixel a given hex lands on is
/// entirely determined by the [Layout](crate::Layout) doing the conversion;
/// the axis convention is the usual one for rendering surfaces: positive x
/// to the right, positive y downward.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Sum,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

/// A vector in 2D screen space, representing an offset between two [Point2]s.
/// Also used for per-axis scale factors (see
/// [Layout::size](crate::Layout::size)).
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Sum,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl ops::Add<Vector2> for Point2 {
    type Output = Point2;

    fn add(self, rhs: Vector2) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl ops::Sub<Vector2> for Point2 {
    type Output = Point2;

    fn sub(self, rhs: Vector2) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
