use crate::scorecard::Scorecard;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Player {
    name: String,
    scorecard: Scorecard,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scorecard: Scorecard::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scorecard(&self) -> &Scorecard {
        &self.scorecard
    }

    /// Only the game writes to a scorecard, and only for the player whose turn it is.
    pub(crate) fn scorecard_mut(&mut self) -> &mut Scorecard {
        &mut self.scorecard
    }

    pub fn total(&self) -> u32 {
        self.scorecard.total()
    }
}
