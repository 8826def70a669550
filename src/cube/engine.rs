//! The rotation engine.
//!
//! `Cube` owns a `CubeState` and is the only thing allowed to mutate it.
//! Every mutation goes through [`Cube::turn`], which folds the requested
//! count into {-1, 0, 1, 2} and then applies one of two atomic transforms:
//!
//! - **Clockwise quarter**: the face's ring advances two positions and each
//!   neighbour strip receives the stickers of the strip before it in the
//!   adjacency table.
//! - **Counter-clockwise quarter**: the mirror image.
//!
//! A half turn is two clockwise quarters. No input makes a turn fail.
//!
//! ## Example
//!
//! ```
//! use rust_cube::cube::Cube;
//!
//! let mut cube = Cube::new();
//! cube.right(1).up(1).right(-1).up(-1);
//! assert!(!cube.is_solved());
//!
//! // The sexy move has order 6.
//! for _ in 0..5 {
//!     cube.right(1).up(1).right(-1).up(-1);
//! }
//! assert!(cube.is_solved());
//! ```

use tracing::debug;

use crate::core::{normalize_count, CubeRng, Face, Move, ScrambleConfig};

use super::adjacency::{neighbours, Strip};
use super::serialized::SerializedCube;
use super::state::CubeState;

/// Turn magnitudes a random scramble draws from.
const SCRAMBLE_COUNTS: [i32; 3] = [-1, 1, 2];

/// The mutation interface the solver drives.
///
/// The solver sees a cube only through these two operations: it turns a
/// face, then reads back the serialized grids.
pub trait RotationEngine {
    /// Turn `face` by `count` quarter turns (any integer; negative is
    /// counter-clockwise).
    fn turn(&mut self, face: Face, count: i32);

    /// Snapshot every face as a 3×3 grid.
    fn serialize(&self) -> SerializedCube;
}

/// A 3×3×3 cube.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cube {
    state: CubeState,
}

impl Cube {
    /// Create a solved cube.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: CubeState::solved(),
        }
    }

    /// Create a cube from an existing state.
    #[must_use]
    pub fn from_state(state: CubeState) -> Self {
        Self { state }
    }

    /// Return the cube to the solved state.
    pub fn reset(&mut self) {
        self.state = CubeState::solved();
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &CubeState {
        &self.state
    }

    /// Check if every face shows only its own label.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    /// Turn `face` by `count` quarter turns.
    pub fn turn(&mut self, face: Face, count: i32) {
        match normalize_count(count) {
            -1 => self.rotate_counter_clockwise(face),
            quarters => {
                for _ in 0..quarters {
                    self.rotate_clockwise(face);
                }
            }
        }
    }

    /// Apply a single move.
    pub fn apply(&mut self, mv: Move) -> &mut Self {
        self.turn(mv.face, mv.count);
        self
    }

    /// Apply a sequence of moves in order.
    pub fn apply_all<'a>(&mut self, moves: impl IntoIterator<Item = &'a Move>) -> &mut Self {
        for mv in moves {
            self.apply(*mv);
        }
        self
    }

    /// Snapshot every face as a 3×3 grid.
    #[must_use]
    pub fn serialize(&self) -> SerializedCube {
        SerializedCube::from_state(&self.state)
    }

    /// Apply `count` uniformly random turns using an entropy-seeded RNG.
    pub fn randomize(&mut self, count: usize) {
        let mut rng = CubeRng::from_entropy();
        self.randomize_with(&mut rng, count);
    }

    /// Apply a reproducible scramble.
    ///
    /// Returns the turns applied, in order.
    pub fn scramble(&mut self, config: &ScrambleConfig) -> Vec<Move> {
        let mut rng = CubeRng::new(config.seed);
        self.randomize_with(&mut rng, config.length)
    }

    /// Apply `count` random turns drawn from `rng`.
    ///
    /// Each turn picks a face uniformly and a magnitude uniformly from
    /// {-1, 1, 2}. Returns the turns applied, in order.
    pub fn randomize_with(&mut self, rng: &mut CubeRng, count: usize) -> Vec<Move> {
        let mut applied = Vec::with_capacity(count);
        for _ in 0..count {
            let face = Face::ALL[rng.gen_range_usize(0..Face::ALL.len())];
            let turns = SCRAMBLE_COUNTS[rng.gen_range_usize(0..SCRAMBLE_COUNTS.len())];
            let mv = Move::new(face, turns);
            self.apply(mv);
            applied.push(mv);
        }
        debug!(seed = rng.seed(), count, "randomized cube");
        applied
    }

    /// Turn the Front face.
    pub fn front(&mut self, count: i32) -> &mut Self {
        self.turn(Face::Front, count);
        self
    }

    /// Turn the Back face.
    pub fn back(&mut self, count: i32) -> &mut Self {
        self.turn(Face::Back, count);
        self
    }

    /// Turn the Right face.
    pub fn right(&mut self, count: i32) -> &mut Self {
        self.turn(Face::Right, count);
        self
    }

    /// Turn the Left face.
    pub fn left(&mut self, count: i32) -> &mut Self {
        self.turn(Face::Left, count);
        self
    }

    /// Turn the Up face.
    pub fn up(&mut self, count: i32) -> &mut Self {
        self.turn(Face::Up, count);
        self
    }

    /// Turn the Down face.
    pub fn down(&mut self, count: i32) -> &mut Self {
        self.turn(Face::Down, count);
        self
    }

    fn read_strip(&self, strip: &Strip) -> [Face; 3] {
        let ring = self.state.ring(strip.face);
        strip.ring.map(|pos| ring[pos])
    }

    fn write_strip(&mut self, strip: &Strip, stickers: [Face; 3]) {
        let ring = &mut self.state.rings[strip.face.index()];
        for (&pos, sticker) in strip.ring.iter().zip(stickers) {
            ring[pos] = sticker;
        }
    }

    fn rotate_clockwise(&mut self, face: Face) {
        self.state.rings[face.index()].rotate_right(2);

        let strips = neighbours(face);
        let saved = self.read_strip(&strips[3]);
        for i in (1..4).rev() {
            let moved = self.read_strip(&strips[i - 1]);
            self.write_strip(&strips[i], moved);
        }
        self.write_strip(&strips[0], saved);
    }

    fn rotate_counter_clockwise(&mut self, face: Face) {
        self.state.rings[face.index()].rotate_left(2);

        let strips = neighbours(face);
        let saved = self.read_strip(&strips[0]);
        for i in 0..3 {
            let moved = self.read_strip(&strips[i + 1]);
            self.write_strip(&strips[i], moved);
        }
        self.write_strip(&strips[3], saved);
    }
}

impl RotationEngine for Cube {
    fn turn(&mut self, face: Face, count: i32) {
        Cube::turn(self, face, count);
    }

    fn serialize(&self) -> SerializedCube {
        Cube::serialize(self)
    }
}
