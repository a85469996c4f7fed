use enum_map::EnumMap;
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::dice::DiceSet;
use crate::error::GameError;
use crate::scoring::category_score;
use crate::types::{Category, ScoreSlot};

/// One player's thirteen slots. A slot is written at most once.
#[derive(Debug, Clone, Eq, PartialEq, Default, Hash)]
pub struct Scorecard {
    slots: EnumMap<Category, ScoreSlot>,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct ScorecardSnapshot {
    pub slots: EnumMap<Category, ScoreSlot>,
    pub upper_total: u32,
    pub bonus: u32,
    pub total: u32,
}

impl Scorecard {
    pub const BONUS_THRESHOLD: u32 = 63;
    pub const BONUS: u32 = 35;

    pub fn slots(&self) -> &EnumMap<Category, ScoreSlot> {
        &self.slots
    }

    pub fn slot(&self, category: Category) -> ScoreSlot {
        self.slots[category]
    }

    pub fn is_scored(&self, category: Category) -> bool {
        self.slots[category].is_scored()
    }

    /// What `dice` would score in `category`. Never touches the card.
    pub fn preview(&self, category: Category, dice: &DiceSet) -> u32 {
        category_score(category, dice)
    }

    /// Every open category with what `dice` would score there.
    pub fn previews(&self, dice: &DiceSet) -> Vec<(Category, u32)> {
        self.available()
            .map(|category| (category, category_score(category, dice)))
            .collect()
    }

    /// Records the score for `category`. A category that already holds a value, zero included,
    /// is rejected and the card is left unchanged.
    pub fn score(&mut self, category: Category, dice: &DiceSet) -> Result<u32, GameError> {
        if self.is_scored(category) {
            return Err(GameError::AlreadyScored { category });
        }
        let points = category_score(category, dice);
        self.slots[category] = ScoreSlot::Scored(points);
        Ok(points)
    }

    pub fn available(&self) -> impl Iterator<Item = Category> + '_ {
        Category::iter().filter(|&category| !self.is_scored(category))
    }

    pub fn upper_total(&self) -> u32 {
        self.slots
            .iter()
            .filter(|(category, _)| category.is_upper_section())
            .map(|(_, slot)| slot.points())
            .sum()
    }

    pub fn bonus(&self) -> u32 {
        if self.upper_total() >= Self::BONUS_THRESHOLD {
            Self::BONUS
        } else {
            0
        }
    }

    pub fn total(&self) -> u32 {
        self.slots.values().map(ScoreSlot::points).sum::<u32>() + self.bonus()
    }

    pub fn is_full(&self) -> bool {
        self.slots.values().all(ScoreSlot::is_scored)
    }

    pub fn snapshot(&self) -> ScorecardSnapshot {
        ScorecardSnapshot {
            slots: self.slots,
            upper_total: self.upper_total(),
            bonus: self.bonus(),
            total: self.total(),
        }
    }
}
