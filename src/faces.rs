//! Where die faces come from.
//!
//! The engine never reaches for a global RNG. Each game owns a [`FaceSource`]; a seeded source
//! makes a whole game reproducible, and a scripted source replays a known sequence of faces.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::dice::DiceSet;
use crate::error::DiceError;

/// Produces die faces in `1..=6`.
pub trait FaceSource {
    fn next_face(&mut self) -> u8;
}

/// Uniform faces from ChaCha8. Remembers its seed so a game can be replayed.
#[derive(Clone, Debug)]
pub struct SeededFaces {
    inner: ChaCha8Rng,
    seed: u64,
}

/// Replays a fixed list of faces, wrapping around at the end.
#[derive(Clone, Debug)]
pub struct ScriptedFaces {
    faces: Vec<u8>,
    next: usize,
}

impl SeededFaces {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seeds from the thread RNG.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl FaceSource for SeededFaces {
    fn next_face(&mut self) -> u8 {
        self.inner.random_range(1..=DiceSet::NUM_FACES)
    }
}

impl ScriptedFaces {
    pub fn new<I: IntoIterator<Item = u8>>(faces: I) -> Result<Self, DiceError> {
        let faces: Vec<u8> = faces.into_iter().collect();
        if faces.is_empty() {
            return Err(DiceError::EmptyScript);
        }
        if let Some(&bad) = faces
            .iter()
            .find(|&&face| !(1..=DiceSet::NUM_FACES).contains(&face))
        {
            return Err(DiceError::FaceOutOfRange {
                max: DiceSet::NUM_FACES,
                got: bad,
            });
        }
        Ok(Self { faces, next: 0 })
    }

    /// How many faces have been handed out so far.
    pub fn consumed(&self) -> usize {
        self.next
    }
}

impl FaceSource for ScriptedFaces {
    fn next_face(&mut self) -> u8 {
        let face = self.faces[self.next % self.faces.len()];
        self.next += 1;
        face
    }
}

impl<S: FaceSource + ?Sized> FaceSource for &mut S {
    fn next_face(&mut self) -> u8 {
        (**self).next_face()
    }
}
