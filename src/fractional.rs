//! Floating-point cube coordinates. These show up as the intermediate result
//! of geometric math (e.g. converting a screen position back into the grid)
//! before snapping to a concrete hex.

use crate::hex::Hex;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A cube coordinate with `f64` axes. Unlike [Hex], no invariant is enforced
/// here: floating error (or an arbitrary input point) can leave the value
/// slightly off the `q + r + s = 0` plane. [Self::round] snaps any such value
/// to the nearest valid hex.
#[derive(
    Copy, Clone, Debug, Default, Display, PartialEq, Serialize, Deserialize,
)]
#[display(fmt = "({}, {}, {})", q, r, s)]
pub struct FractionalHex {
    pub q: f64,
    pub r: f64,
    pub s: f64,
}

impl FractionalHex {
    pub const fn new(q: f64, r: f64, s: f64) -> Self {
        Self { q, r, s }
    }

    /// Round to the nearest valid [Hex].
    ///
    /// Rounding each axis independently can land off the zero-sum plane, so
    /// after rounding, the axis that moved furthest gets recomputed from the
    /// other two. When the errors tie, q yields to r and s, and r yields
    /// to s.
    /// https://www.redblobgames.com/grids/hexagons/#rounding
    pub fn round(self) -> Hex {
        let mut q = self.q.round();
        let mut r = self.r.round();
        let s = self.s.round();

        let q_diff = (q - self.q).abs();
        let r_diff = (r - self.r).abs();
        let s_diff = (s - self.s).abs();

        if q_diff > r_diff && q_diff > s_diff {
            q = -r - s;
        } else if r_diff > s_diff {
            r = -q - s;
        }
        // In the remaining case s is the axis to repair, and the axial
        // constructor re-derives it from q & r anyway
        Hex::new_axial(q as i32, r as i32)
    }
}

impl From<Hex> for FractionalHex {
    fn from(hex: Hex) -> Self {
        Self::new(hex.q() as f64, hex.r() as f64, hex.s() as f64)
    }
}
