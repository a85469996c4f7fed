use std::fmt;

use enum_map::Enum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The thirteen scoring categories. Order follows a printed scorecard: the upper section first,
/// then the lower section.
#[derive(
    Debug,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Hash,
    Enum,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    #[strum(to_string = "ones", serialize = "aces", serialize = "1")]
    Ones,
    #[strum(to_string = "twos", serialize = "2")]
    Twos,
    #[strum(to_string = "threes", serialize = "3")]
    Threes,
    #[strum(to_string = "fours", serialize = "4")]
    Fours,
    #[strum(to_string = "fives", serialize = "5")]
    Fives,
    #[strum(to_string = "sixes", serialize = "6")]
    Sixes,
    #[strum(to_string = "three-of-a-kind", serialize = "3x")]
    ThreeOfAKind,
    #[strum(to_string = "four-of-a-kind", serialize = "4x")]
    FourOfAKind,
    #[strum(to_string = "full-house", serialize = "fh")]
    FullHouse,
    #[strum(to_string = "small-straight", serialize = "ss")]
    SmallStraight,
    #[strum(to_string = "large-straight", serialize = "ls")]
    LargeStraight,
    #[strum(to_string = "yahtzee", serialize = "y")]
    Yahtzee,
    #[strum(to_string = "chance", serialize = "c")]
    Chance,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Upper,
    Lower,
}

/// What a single scorecard slot holds. A slot scored at zero is still scored.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreSlot {
    #[default]
    Unscored,
    Scored(u32),
}

impl Category {
    pub const COUNT: usize = 13;

    pub fn section(&self) -> Section {
        if self.is_upper_section() {
            Section::Upper
        } else {
            Section::Lower
        }
    }

    pub fn is_upper_section(&self) -> bool {
        matches!(
            self,
            Category::Ones
                | Category::Twos
                | Category::Threes
                | Category::Fours
                | Category::Fives
                | Category::Sixes
        )
    }

    pub fn is_lower_section(&self) -> bool {
        !self.is_upper_section()
    }

    /// The face an upper-section category counts, or `None` for the lower section.
    pub fn face(&self) -> Option<u8> {
        match self {
            Category::Ones => Some(1),
            Category::Twos => Some(2),
            Category::Threes => Some(3),
            Category::Fours => Some(4),
            Category::Fives => Some(5),
            Category::Sixes => Some(6),
            _ => None,
        }
    }
}

impl ScoreSlot {
    pub fn is_scored(&self) -> bool {
        matches!(self, ScoreSlot::Scored(_))
    }

    pub fn value(&self) -> Option<u32> {
        match self {
            ScoreSlot::Unscored => None,
            ScoreSlot::Scored(points) => Some(*points),
        }
    }

    /// Points this slot contributes to a total; an unscored slot contributes nothing.
    pub fn points(&self) -> u32 {
        self.value().unwrap_or(0)
    }
}

/// Unscored slots render blank so they can't be mistaken for a scored zero.
impl fmt::Display for ScoreSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreSlot::Unscored => Ok(()),
            ScoreSlot::Scored(points) => write!(f, "{points}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn thirteen_categories() {
        assert_eq!(Category::iter().count(), Category::COUNT);
        assert_eq!(Category::iter().filter(Category::is_upper_section).count(), 6);
        assert_eq!(Category::iter().filter(Category::is_lower_section).count(), 7);
    }

    #[test]
    fn upper_faces() {
        let faces: Vec<u8> = Category::iter().filter_map(|c| c.face()).collect();
        assert_eq!(faces, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(Category::Chance.face(), None);
        assert_eq!(Category::Sixes.section(), Section::Upper);
        assert_eq!(Category::FullHouse.section(), Section::Lower);
    }

    #[test]
    fn parse_short_codes_and_names() {
        let cases = [
            ("ones", Category::Ones),
            ("Aces", Category::Ones),
            ("6", Category::Sixes),
            ("3x", Category::ThreeOfAKind),
            ("4X", Category::FourOfAKind),
            ("fh", Category::FullHouse),
            ("ss", Category::SmallStraight),
            ("large-straight", Category::LargeStraight),
            ("y", Category::Yahtzee),
            ("c", Category::Chance),
        ];
        for (raw, expected) in cases {
            assert_eq!(Category::from_str(raw), Ok(expected), "parsing {raw}");
        }
        assert!(Category::from_str("pair").is_err());
    }

    #[test]
    fn display_uses_long_names() {
        assert_eq!(Category::ThreeOfAKind.to_string(), "three-of-a-kind");
        assert_eq!(Category::Ones.to_string(), "ones");
        for category in Category::iter() {
            assert_eq!(Category::from_str(&category.to_string()), Ok(category));
        }
    }

    #[test]
    fn scored_zero_is_not_unscored() {
        let zero = ScoreSlot::Scored(0);
        assert!(zero.is_scored());
        assert!(!ScoreSlot::Unscored.is_scored());
        assert_ne!(zero, ScoreSlot::Unscored);
        assert_eq!(zero.points(), ScoreSlot::Unscored.points());
        assert_eq!(zero.value(), Some(0));
        assert_eq!(ScoreSlot::Unscored.value(), None);
    }

    #[test]
    fn unscored_displays_blank() {
        assert_eq!(ScoreSlot::Unscored.to_string(), "");
        assert_eq!(ScoreSlot::Scored(0).to_string(), "0");
        assert_eq!(ScoreSlot::Scored(25).to_string(), "25");
    }
}
