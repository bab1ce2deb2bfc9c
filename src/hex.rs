//! The cube coordinate system for hexagon grids. See this page for a full
//! description of how cube (and axial) coordinates work:
//! https://www.redblobgames.com/grids/hexagons/#coordinates-cube

use derive_more::Display;
use fnv::FnvBuildHasher;
use serde::{Deserialize, Serialize};
use std::{
    cmp,
    collections::{HashMap, HashSet},
    ops,
};
use strum::{EnumIter, IntoEnumIterator};
use thiserror::Error;

/// Error for a cube coordinate triple that doesn't fall on the hex plane.
/// This is the only error in the crate, and [Hex::new] is the only operation
/// that can produce it. Every other constructor derives the third axis
/// instead of accepting it, so they can't go wrong.
#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
#[error("invalid cube coordinates ({q}, {r}, {s}); axes must sum to zero")]
pub struct InvalidCoordinates {
    pub q: i32,
    pub r: i32,
    pub s: i32,
}

/// A cell in a hexagon grid, identified by its cube coordinates. Each hex has
/// a q, r, and s axis, and every valid hex satisfies `q + r + s == 0`.
///
/// This struct only needs to store q and r, since s can be derived as
/// necessary. Beyond saving a third of the memory, that makes the zero-sum
/// invariant impossible to break: any pair of axes describes a valid hex, so
/// arithmetic and deserialization never need to re-validate. The one place
/// raw cube input crosses the boundary is [Hex::new], which checks the triple
/// and rejects it with [InvalidCoordinates] if it's off the plane.
///
/// Hexes are plain values: cheap to copy, structurally comparable, and with
/// no identity beyond their coordinates.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.q()", "self.r()", "self.s()")]
pub struct Hex {
    q: i32,
    r: i32,
}

impl Hex {
    pub const ORIGIN: Self = Self::new_axial(0, 0);

    /// The six unit vectors pointing from a hex to its neighbors, one per
    /// side, in a fixed order starting east and going counter-clockwise
    /// (for pointy-top orientation).
    /// http://www.redblobgames.com/grids/hexagons/#neighbors
    pub const DIRECTIONS: [Self; 6] = [
        Self::new_axial(1, 0),  // (1, 0, -1)
        Self::new_axial(1, -1), // (1, -1, 0)
        Self::new_axial(0, -1), // (0, -1, 1)
        Self::new_axial(-1, 0), // (-1, 0, 1)
        Self::new_axial(-1, 1), // (-1, 1, 0)
        Self::new_axial(0, 1),  // (0, 1, -1)
    ];

    /// Construct a hex from a full cube coordinate triple. Returns an
    /// [InvalidCoordinates] error if `q + r + s != 0`.
    pub fn new(q: i32, r: i32, s: i32) -> anyhow::Result<Self> {
        if q + r + s != 0 {
            Err(InvalidCoordinates { q, r, s }.into())
        } else {
            Ok(Self::new_axial(q, r))
        }
    }

    /// Construct a hex from axial coordinates. Since q+r+s=0 for all hexes,
    /// s is derived from q & r and this can never fail.
    pub const fn new_axial(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    pub const fn q(&self) -> i32 {
        self.q
    }

    pub const fn r(&self) -> i32 {
        self.r
    }

    pub const fn s(&self) -> i32 {
        -(self.q + self.r)
    }

    /// Is this the hex at the center of the grid?
    pub fn is_origin(&self) -> bool {
        *self == Self::ORIGIN
    }

    /// Grid distance from this hex to the origin, i.e. the number of steps
    /// needed to walk there.
    pub fn length(&self) -> usize {
        // Two adjacent hex centers are always separated by two cube edges,
        // hence the divide by 2. The sum of |axes| is even for every valid
        // hex, so nothing is lost to truncation.
        ((self.q().abs() + self.r().abs() + self.s().abs()) / 2) as usize
    }

    /// Calculate the path distance between two hexes, meaning the number of
    /// hops it takes to get from one to the other. 0 if the hexes are equal,
    /// 1 if they're adjacent, and so on.
    /// https://www.redblobgames.com/grids/hexagons/#distances
    pub fn distance_to(self, other: Self) -> usize {
        (self - other).length()
    }

    /// Get the direction vector at the given index. The index is normalized
    /// into `[0, 6)` first, so any integer selects one of the six directions,
    /// with period 6 (including negative indexes).
    pub fn direction(index: i32) -> Self {
        // % is remainder, *not* modulus, so e.g. -1 % 6 == -1. Adding 6
        // before the second % shifts negatives into range.
        Self::DIRECTIONS[(((index % 6) + 6) % 6) as usize]
    }

    /// Get the hex adjacent to this one in the direction at the given index.
    /// See [Self::direction] for how the index is interpreted.
    pub fn neighbor(self, index: i32) -> Self {
        self + Self::direction(index)
    }

    /// Get an iterator of all the hexes directly adjacent to this one. The
    /// iterator will always contain exactly 6 values.
    pub fn neighbors(self) -> impl Iterator<Item = Self> {
        HexDirection::iter().map(move |dir| self + dir.offset())
    }

    /// Get an iterator of every hex within `radius` steps of the origin, in
    /// a hexagon pattern centered on it. Radius 0 yields just the origin,
    /// 1 yields 7 hexes, 2 yields 19, and so on (3r²+3r+1 in general).
    pub fn range(radius: u32) -> impl Iterator<Item = Self> {
        let rad = radius as i32;
        (-rad..=rad).flat_map(move |q| {
            // If we just did [-rad, rad] for r as well, we'd end up with a
            // diamond pattern instead of a hexagon
            // https://www.redblobgames.com/grids/hexagons/#range
            let r_min = cmp::max(-rad, -q - rad);
            let r_max = cmp::min(rad, -q + rad);
            (r_min..=r_max).map(move |r| Self::new_axial(q, r))
        })
    }
}

// Component-wise arithmetic. The sum/difference/multiple of valid hexes is
// always valid, so these stay on the axial fast path with no checks.

impl ops::Add for Hex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new_axial(self.q + rhs.q, self.r + rhs.r)
    }
}

impl ops::Sub for Hex {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new_axial(self.q - rhs.q, self.r - rhs.r)
    }
}

impl ops::Mul<i32> for Hex {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self::Output {
        Self::new_axial(self.q * rhs, self.r * rhs)
    }
}

impl ops::AddAssign for Hex {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl ops::SubAssign for Hex {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

// Interop boundary: build a hex from external 2D/3D vector-ish values by
// taking the first two lanes as (q, r). A third lane, if present, is ignored
// rather than validated, since s is always derivable.

impl From<(i32, i32)> for Hex {
    fn from((q, r): (i32, i32)) -> Self {
        Self::new_axial(q, r)
    }
}

impl From<[i32; 2]> for Hex {
    fn from([q, r]: [i32; 2]) -> Self {
        Self::new_axial(q, r)
    }
}

impl From<[i32; 3]> for Hex {
    fn from([q, r, _]: [i32; 3]) -> Self {
        Self::new_axial(q, r)
    }
}

impl From<nalgebra::Vector2<i32>> for Hex {
    fn from(v: nalgebra::Vector2<i32>) -> Self {
        Self::new_axial(v.x, v.y)
    }
}

impl From<nalgebra::Vector3<i32>> for Hex {
    fn from(v: nalgebra::Vector3<i32>) -> Self {
        Self::new_axial(v.x, v.y)
    }
}

/// A set of hexes
pub type HexSet = HashSet<Hex, FnvBuildHasher>;
/// A map of hexes to some `T`
pub type HexMap<T> = HashMap<Hex, T, FnvBuildHasher>;

/// The 6 directions in which hexes line up side-to-side, named for pointy-top
/// orientation. Variant order matches [Hex::DIRECTIONS], so
/// `dir.offset() == Hex::DIRECTIONS[dir as usize]`. Useful when you want to
/// iterate neighbors by name instead of juggling raw indexes.
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HexDirection {
    East,
    NorthEast,
    NorthWest,
    West,
    SouthWest,
    SouthEast,
}

impl HexDirection {
    /// Get the unit vector that would move a hex one step in this direction
    pub const fn offset(self) -> Hex {
        Hex::DIRECTIONS[self as usize]
    }
}
