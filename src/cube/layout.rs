//! Flat sticker layout for external renderers.
//!
//! Renderers take the 54 stickers as one flat list: the Front block, the
//! Right block, then the Up, Left and Back blocks each re-indexed through a
//! fixed 9-cell permutation (their grids are stored rotated relative to the
//! renderer's template), then the Down block.
//!
//! A [`Palette`] maps the six labels to caller-chosen colours. Colours are
//! given in the order Front, Right, Up, Left, Back, Down.
//!
//! ```
//! use rust_cube::cube::{Cube, Palette};
//!
//! let palette = Palette::new(["green", "red", "white", "orange", "blue", "yellow"]);
//! let colours = palette.paint(&Cube::new().serialize());
//! assert_eq!(colours.len(), 54);
//! assert_eq!(colours[0], "green");
//! assert_eq!(colours[53], "yellow");
//! ```

use crate::core::Face;

use super::serialized::{SerializedCube, SerializedFace};

/// Number of stickers in the flat layout.
pub const STICKER_COUNT: usize = 54;

/// Cell order used for the Up, Left and Back blocks.
pub const ROTATED_BLOCK: [usize; 9] = [2, 5, 8, 1, 4, 7, 0, 3, 6];

/// Block order of the flat layout, which is also the palette order.
pub const LAYOUT_ORDER: [Face; 6] = [
    Face::Front,
    Face::Right,
    Face::Up,
    Face::Left,
    Face::Back,
    Face::Down,
];

fn block(grid: &SerializedFace, face: Face) -> [Face; 9] {
    match face {
        Face::Up | Face::Left | Face::Back => ROTATED_BLOCK.map(|cell| grid.cell(cell)),
        _ => grid.0,
    }
}

/// Flatten a snapshot into the renderer's 54-sticker order.
#[must_use]
pub fn sticker_layout(cube: &SerializedCube) -> [Face; STICKER_COUNT] {
    let mut out = [Face::Front; STICKER_COUNT];
    for (i, &face) in LAYOUT_ORDER.iter().enumerate() {
        out[i * 9..(i + 1) * 9].copy_from_slice(&block(cube.face(face), face));
    }
    out
}

/// Label → colour mapping for renderers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette<T> {
    colours: [T; 6],
}

impl<T: Clone> Palette<T> {
    /// Create a palette from colours in layout order (F, R, U, L, B, D).
    #[must_use]
    pub fn new(colours: [T; 6]) -> Self {
        Self { colours }
    }

    /// The colour assigned to `face`.
    #[must_use]
    pub fn colour(&self, face: Face) -> &T {
        let slot = match face {
            Face::Front => 0,
            Face::Right => 1,
            Face::Up => 2,
            Face::Left => 3,
            Face::Back => 4,
            Face::Down => 5,
        };
        &self.colours[slot]
    }

    /// Colour every sticker of the flat layout.
    #[must_use]
    pub fn paint(&self, cube: &SerializedCube) -> Vec<T> {
        sticker_layout(cube)
            .iter()
            .map(|&label| self.colour(label).clone())
            .collect()
    }
}
