//! Per-category scoring. Everything here is a pure function of the dice.

use crate::dice::{DiceSet, FaceCounts};
use crate::types::Category;

pub const FULL_HOUSE_SCORE: u32 = 25;
pub const SMALL_STRAIGHT_SCORE: u32 = 30;
pub const LARGE_STRAIGHT_SCORE: u32 = 40;
pub const YAHTZEE_SCORE: u32 = 50;

/// Points `dice` would earn in `category`.
pub fn category_score(category: Category, dice: &DiceSet) -> u32 {
    let counts = dice.counts();
    match category {
        Category::Ones => upper(1, &counts),
        Category::Twos => upper(2, &counts),
        Category::Threes => upper(3, &counts),
        Category::Fours => upper(4, &counts),
        Category::Fives => upper(5, &counts),
        Category::Sixes => upper(6, &counts),
        Category::ThreeOfAKind => n_of_a_kind(3, &counts, dice.total()),
        Category::FourOfAKind => n_of_a_kind(4, &counts, dice.total()),
        Category::FullHouse => {
            if counts.shape() == [3, 2] {
                FULL_HOUSE_SCORE
            } else {
                0
            }
        }
        Category::SmallStraight => {
            if longest_run(&counts) >= 4 {
                SMALL_STRAIGHT_SCORE
            } else {
                0
            }
        }
        Category::LargeStraight => {
            if longest_run(&counts) >= 5 {
                LARGE_STRAIGHT_SCORE
            } else {
                0
            }
        }
        Category::Yahtzee => {
            if counts.max() as usize == DiceSet::NUM_DICE {
                YAHTZEE_SCORE
            } else {
                0
            }
        }
        Category::Chance => dice.total(),
    }
}

fn upper(face: u8, counts: &FaceCounts) -> u32 {
    face as u32 * counts.of(face) as u32
}

fn n_of_a_kind(n: u8, counts: &FaceCounts, total: u32) -> u32 {
    if counts.max() >= n { total } else { 0 }
}

/// Length of the longest run of consecutive faces present at least once.
fn longest_run(counts: &FaceCounts) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for &count in counts.counts() {
        if count > 0 {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}
