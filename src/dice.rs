use serde::Serialize;

use crate::error::{DiceError, OperationError};
use crate::faces::FaceSource;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct Die {
    value: u8,
    held: bool,
}

/// The five dice shared by every player, plus how many times they have been rolled this turn.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct DiceSet {
    dice: [Die; DiceSet::NUM_DICE],
    rolls_this_turn: u8,
    max_rolls: u8,
}

/// How many dice show each face. Index 0 is face 1.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FaceCounts([u8; DiceSet::NUM_FACES as usize]);

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct DiceSnapshot {
    pub values: [u8; DiceSet::NUM_DICE],
    pub held: [bool; DiceSet::NUM_DICE],
    pub rolls_this_turn: u8,
    pub rolls_remaining: u8,
}

impl Die {
    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn is_held(&self) -> bool {
        self.held
    }
}

impl DiceSet {
    pub const NUM_DICE: usize = 5;
    pub const NUM_FACES: u8 = 6;
    pub const DEFAULT_MAX_ROLLS: u8 = 3;

    /// Five freshly drawn dice with no rolls taken yet.
    pub fn new<S: FaceSource + ?Sized>(source: &mut S, max_rolls: u8) -> Self {
        let dice = std::array::from_fn(|_| Die {
            value: source.next_face(),
            held: false,
        });
        Self {
            dice,
            rolls_this_turn: 0,
            max_rolls,
        }
    }

    pub fn dice(&self) -> &[Die; Self::NUM_DICE] {
        &self.dice
    }

    pub fn values(&self) -> [u8; Self::NUM_DICE] {
        self.dice.map(|die| die.value)
    }

    pub fn total(&self) -> u32 {
        self.dice.iter().map(|die| die.value as u32).sum()
    }

    pub fn counts(&self) -> FaceCounts {
        let mut counts = [0u8; Self::NUM_FACES as usize];
        for die in &self.dice {
            counts[die.value as usize - 1] += 1;
        }
        FaceCounts(counts)
    }

    pub fn rolls_this_turn(&self) -> u8 {
        self.rolls_this_turn
    }

    pub fn max_rolls(&self) -> u8 {
        self.max_rolls
    }

    pub fn rolls_remaining(&self) -> u8 {
        self.max_rolls.saturating_sub(self.rolls_this_turn)
    }

    pub fn can_roll(&self) -> bool {
        self.rolls_this_turn < self.max_rolls
    }

    pub fn has_rolled(&self) -> bool {
        self.rolls_this_turn > 0
    }

    /// Rerolls every die that isn't held. Held dice keep their face but are released, so a hold
    /// only ever protects a die for a single roll.
    pub fn roll<S: FaceSource + ?Sized>(&mut self, source: &mut S) -> Result<(), OperationError> {
        if !self.can_roll() {
            return Err(OperationError::RollLimitReached {
                limit: self.max_rolls,
            });
        }
        for die in &mut self.dice {
            if die.held {
                die.held = false;
            } else {
                die.value = source.next_face();
            }
        }
        self.rolls_this_turn += 1;
        Ok(())
    }

    /// Flips the hold on one die and returns whether it is now held.
    pub fn toggle_hold(&mut self, index: usize) -> Result<bool, OperationError> {
        self.check_hold(index)?;
        let die = &mut self.dice[index];
        die.held = !die.held;
        Ok(die.held)
    }

    /// Holds every listed die. Either all indices are valid and held, or nothing changes.
    pub fn hold(&mut self, indices: &[usize]) -> Result<(), OperationError> {
        for &index in indices {
            self.check_hold(index)?;
        }
        for &index in indices {
            self.dice[index].held = true;
        }
        Ok(())
    }

    pub fn reset_for_new_turn(&mut self) {
        self.rolls_this_turn = 0;
        for die in &mut self.dice {
            die.held = false;
        }
    }

    pub fn snapshot(&self) -> DiceSnapshot {
        DiceSnapshot {
            values: self.values(),
            held: self.dice.map(|die| die.held),
            rolls_this_turn: self.rolls_this_turn,
            rolls_remaining: self.rolls_remaining(),
        }
    }

    fn check_hold(&self, index: usize) -> Result<(), OperationError> {
        if !self.has_rolled() {
            return Err(OperationError::NotRolledYet);
        }
        if index >= Self::NUM_DICE {
            return Err(OperationError::DieIndexOutOfRange { index });
        }
        Ok(())
    }
}

impl TryFrom<&[u8]> for DiceSet {
    type Error = DiceError;

    fn try_from(values: &[u8]) -> Result<Self, Self::Error> {
        if values.len() != Self::NUM_DICE {
            return Err(DiceError::WrongDiceCount {
                expected: Self::NUM_DICE,
                got: values.len(),
            });
        }
        if let Some(&bad) = values
            .iter()
            .find(|&&value| !(1..=Self::NUM_FACES).contains(&value))
        {
            return Err(DiceError::FaceOutOfRange {
                max: Self::NUM_FACES,
                got: bad,
            });
        }
        let dice = std::array::from_fn(|i| Die {
            value: values[i],
            held: false,
        });
        Ok(Self {
            dice,
            rolls_this_turn: 0,
            max_rolls: Self::DEFAULT_MAX_ROLLS,
        })
    }
}

impl TryFrom<[u8; DiceSet::NUM_DICE]> for DiceSet {
    type Error = DiceError;

    fn try_from(values: [u8; DiceSet::NUM_DICE]) -> Result<Self, Self::Error> {
        Self::try_from(&values[..])
    }
}

impl FaceCounts {
    /// Dice showing `face`; zero for anything outside `1..=6`.
    pub fn of(&self, face: u8) -> u8 {
        if (1..=DiceSet::NUM_FACES).contains(&face) {
            self.0[face as usize - 1]
        } else {
            0
        }
    }

    pub fn counts(&self) -> &[u8; DiceSet::NUM_FACES as usize] {
        &self.0
    }

    /// Size of the largest group of equal faces.
    pub fn max(&self) -> u8 {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// The non-zero counts, largest first. `[3, 2]` is a full house.
    pub fn shape(&self) -> Vec<u8> {
        let mut shape: Vec<u8> = self.0.iter().copied().filter(|&c| c > 0).collect();
        shape.sort_unstable_by(|a, b| b.cmp(a));
        shape
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::faces::ScriptedFaces;

    fn rolled(values: [u8; 5]) -> DiceSet {
        let mut dice = DiceSet::try_from(values).unwrap();
        dice.rolls_this_turn = 1;
        dice
    }

    #[test]
    fn new_draws_five_faces() {
        let mut source = ScriptedFaces::new([3, 1, 4, 1, 5]).unwrap();
        let dice = DiceSet::new(&mut source, 3);
        assert_eq!(dice.values(), [3, 1, 4, 1, 5]);
        assert_eq!(dice.rolls_this_turn(), 0);
        assert!(dice.dice().iter().all(|die| !die.is_held()));
    }

    #[test]
    fn queries() {
        let dice = DiceSet::try_from([2, 2, 5, 6, 2]).unwrap();
        assert_eq!(dice.total(), 17);
        assert_eq!(dice.counts().counts(), &[0, 3, 0, 0, 1, 1]);
        assert_eq!(dice.counts().of(2), 3);
        assert_eq!(dice.counts().of(7), 0);
        assert_eq!(dice.counts().max(), 3);
        assert_eq!(dice.counts().shape(), vec![3, 1, 1]);
    }

    #[test]
    fn from_values_validation() {
        assert_eq!(
            DiceSet::try_from(&[1u8, 2, 3][..]).unwrap_err(),
            DiceError::WrongDiceCount {
                expected: 5,
                got: 3
            }
        );
        assert_eq!(
            DiceSet::try_from([1, 2, 3, 4, 7]).unwrap_err(),
            DiceError::FaceOutOfRange { max: 6, got: 7 }
        );
        assert_eq!(
            DiceSet::try_from([0, 2, 3, 4, 5]).unwrap_err(),
            DiceError::FaceOutOfRange { max: 6, got: 0 }
        );
    }

    #[test]
    fn roll_replaces_unheld_dice() {
        let mut source = ScriptedFaces::new([6]).unwrap();
        let mut dice = DiceSet::try_from([1, 2, 3, 4, 5]).unwrap();
        dice.roll(&mut source).unwrap();
        assert_eq!(dice.values(), [6; 5]);
        assert_eq!(dice.rolls_this_turn(), 1);
        assert_eq!(dice.rolls_remaining(), 2);
    }

    #[test]
    fn held_die_survives_one_roll_then_releases() {
        let mut source = ScriptedFaces::new([4]).unwrap();
        let mut dice = DiceSet::try_from([1, 2, 3, 5, 6]).unwrap();
        dice.roll(&mut source).unwrap();
        let mut source = ScriptedFaces::new([1, 2, 3, 5]).unwrap();
        assert_eq!(dice.toggle_hold(0), Ok(true));
        dice.roll(&mut source).unwrap();
        assert_eq!(dice.values(), [4, 1, 2, 3, 5]);
        assert!(!dice.dice()[0].is_held());
        assert_eq!(source.consumed(), 4);
    }

    #[test]
    fn roll_limit() {
        let mut source = ScriptedFaces::new([1, 2, 3, 4, 5, 6]).unwrap();
        let mut dice = DiceSet::try_from([1, 1, 1, 1, 1]).unwrap();
        for _ in 0..3 {
            dice.roll(&mut source).unwrap();
        }
        let before = dice.values();
        assert_eq!(
            dice.roll(&mut source),
            Err(OperationError::RollLimitReached { limit: 3 })
        );
        assert_eq!(dice.values(), before);
        assert_eq!(dice.rolls_this_turn(), 3);
        assert!(!dice.can_roll());
    }

    #[test]
    fn hold_requires_a_roll() {
        let mut dice = DiceSet::try_from([1, 2, 3, 4, 5]).unwrap();
        assert_eq!(dice.toggle_hold(0), Err(OperationError::NotRolledYet));
        assert_eq!(dice.hold(&[0, 1]), Err(OperationError::NotRolledYet));
        assert!(dice.dice().iter().all(|die| !die.is_held()));
    }

    #[test]
    fn hold_index_out_of_range() {
        let mut dice = rolled([1, 2, 3, 4, 5]);
        assert_eq!(
            dice.toggle_hold(5),
            Err(OperationError::DieIndexOutOfRange { index: 5 })
        );
        assert_eq!(
            dice.hold(&[1, 9]),
            Err(OperationError::DieIndexOutOfRange { index: 9 })
        );
        assert!(!dice.dice()[1].is_held());
    }

    #[test]
    fn toggle_twice_releases() {
        let mut dice = rolled([1, 2, 3, 4, 5]);
        assert_eq!(dice.toggle_hold(2), Ok(true));
        assert_eq!(dice.toggle_hold(2), Ok(false));
        dice.hold(&[0, 4]).unwrap();
        assert_eq!(dice.snapshot().held, [true, false, false, false, true]);
    }

    #[test]
    fn reset_clears_rolls_and_holds() {
        let mut dice = rolled([1, 2, 3, 4, 5]);
        dice.hold(&[0, 1, 2]).unwrap();
        dice.reset_for_new_turn();
        assert_eq!(dice.rolls_this_turn(), 0);
        assert_eq!(dice.snapshot().held, [false; 5]);
        assert_eq!(dice.values(), [1, 2, 3, 4, 5]);
    }
}
