//! Hexgrid is a small library for working with hexagon grids: cube/axial
//! coordinates, the arithmetic on them, and conversion to and from 2D screen
//! space for rendering and picking. The coordinate conventions follow the
//! Red Blob Games hexagon guide:
//! https://www.redblobgames.com/grids/hexagons/
//!
//! Drawing and input handling live with the consumer; this crate just
//! provides the pure values and math they need:
//!
//! ```
//! use hexgrid::{Hex, Layout, Orientation, Point2, Vector2};
//!
//! let layout = Layout::new(
//!     Orientation::pointy(),
//!     Vector2 { x: 10.0, y: 10.0 },
//!     Point2 { x: 400.0, y: 300.0 },
//! );
//!
//! let hex = Hex::new_axial(2, -1);
//! let center = layout.hex_to_screen(hex);
//! let corners = layout.polygon_corners(hex); // 6 points, ready to draw
//! assert_eq!(corners.len(), 6);
//!
//! // Picking is the exact inverse of placement
//! assert_eq!(layout.screen_to_hex(center), hex);
//! ```

mod fractional;
mod hex;
mod layout;
mod screen;

pub use crate::{
    fractional::FractionalHex,
    hex::{Hex, HexDirection, HexMap, HexSet, InvalidCoordinates},
    layout::{Layout, Orientation},
    screen::{Point2, Vector2},
};
