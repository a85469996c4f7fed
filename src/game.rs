//! Turn order, the per-turn state machine and the end of the game.
//!
//! A turn runs `AwaitingRoll -> MidTurn -> TurnComplete`, and `advance_turn` hands the dice to
//! the next player. Once every scorecard is full, `advance_turn` moves the game to `GameOver`
//! and from then on it only answers queries.

use std::collections::HashSet;

use serde::Serialize;

use crate::config::GameConfig;
use crate::dice::{DiceSet, DiceSnapshot};
use crate::error::{ConfigurationError, GameError, OperationError};
use crate::faces::{FaceSource, SeededFaces};
use crate::player::Player;
use crate::scorecard::ScorecardSnapshot;
use crate::types::Category;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TurnPhase {
    /// The current player has not rolled yet.
    AwaitingRoll,
    /// At least one roll taken, nothing scored.
    MidTurn,
    /// A score was entered; waiting for `advance_turn`.
    TurnComplete,
    GameOver,
}

/// Everyone sharing the highest total. More than one player means a draw.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Winners<'a> {
    pub players: Vec<&'a Player>,
    pub score: u32,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub scorecard: ScorecardSnapshot,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub players: Vec<PlayerSnapshot>,
    pub current_player: String,
    pub dice: DiceSnapshot,
    pub phase: TurnPhase,
}

/// One match from the first roll to the final score.
#[derive(Debug, Clone)]
pub struct Game<S = SeededFaces> {
    players: Vec<Player>,
    dice: DiceSet,
    current: usize,
    scored_this_turn: bool,
    over: bool,
    source: S,
}

/// Starts a game with the default rules and entropy-seeded dice.
pub fn new_game<I, N>(player_names: I) -> Result<Game, GameError>
where
    I: IntoIterator<Item = N>,
    N: Into<String>,
{
    Game::new(player_names)
}

impl Game<SeededFaces> {
    pub fn new<I, N>(player_names: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        Self::with_config(player_names, &GameConfig::default())
    }

    /// Uses `config.seed` when set, otherwise seeds from entropy.
    pub fn with_config<I, N>(player_names: I, config: &GameConfig) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        let source = match config.seed {
            Some(seed) => SeededFaces::new(seed),
            None => SeededFaces::from_entropy(),
        };
        Self::with_source(player_names, config, source)
    }

    pub fn seed(&self) -> u64 {
        self.source.seed()
    }
}

impl<S: FaceSource> Game<S> {
    pub fn with_source<I, N>(
        player_names: I,
        config: &GameConfig,
        mut source: S,
    ) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        config.validate()?;
        let names: Vec<String> = player_names.into_iter().map(Into::into).collect();
        validate_names(&names, config.effective_min_players())
            .inspect_err(|e| log::warn!("{}", e))?;
        let dice = DiceSet::new(&mut source, config.rolls_per_turn);
        log::info!("new game: {}", names.join(", "));
        Ok(Self {
            players: names.into_iter().map(Player::new).collect(),
            dice,
            current: 0,
            scored_this_turn: false,
            over: false,
            source,
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|player| player.name() == name)
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn current_player_index(&self) -> usize {
        self.current
    }

    pub fn dice(&self) -> &DiceSet {
        &self.dice
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn phase(&self) -> TurnPhase {
        if self.over {
            TurnPhase::GameOver
        } else if self.scored_this_turn {
            TurnPhase::TurnComplete
        } else if self.dice.has_rolled() {
            TurnPhase::MidTurn
        } else {
            TurnPhase::AwaitingRoll
        }
    }

    pub fn rolls_remaining(&self) -> u8 {
        match self.phase() {
            TurnPhase::AwaitingRoll | TurnPhase::MidTurn => self.dice.rolls_remaining(),
            TurnPhase::TurnComplete | TurnPhase::GameOver => 0,
        }
    }

    pub fn can_roll(&self) -> bool {
        self.rolls_remaining() > 0
    }

    pub fn roll(&mut self) -> Result<(), GameError> {
        self.ensure_turn_open()
            .and_then(|()| self.dice.roll(&mut self.source).map_err(GameError::from))
            .inspect_err(|e| log::warn!("roll rejected: {}", e))?;
        log::debug!(
            "{} rolled {:?} ({}/{})",
            self.current_player().name(),
            self.dice.values(),
            self.dice.rolls_this_turn(),
            self.dice.max_rolls()
        );
        Ok(())
    }

    /// Returns whether the die is held after the toggle.
    pub fn toggle_hold(&mut self, index: usize) -> Result<bool, GameError> {
        let held = self
            .ensure_turn_open()
            .and_then(|()| self.dice.toggle_hold(index).map_err(GameError::from))
            .inspect_err(|e| log::warn!("hold rejected: {}", e))?;
        log::debug!("die {} held: {}", index, held);
        Ok(held)
    }

    pub fn hold(&mut self, indices: &[usize]) -> Result<(), GameError> {
        self.ensure_turn_open()
            .and_then(|()| self.dice.hold(indices).map_err(GameError::from))
            .inspect_err(|e| log::warn!("hold rejected: {}", e))?;
        log::debug!("dice {:?} held", indices);
        Ok(())
    }

    /// What the current dice would score in `category`, without recording anything.
    pub fn preview_score(&self, category: Category) -> Result<u32, GameError> {
        if self.over {
            return Err(OperationError::GameOver.into());
        }
        if !self.dice.has_rolled() {
            return Err(OperationError::NotRolledYet.into());
        }
        Ok(self.current_player().scorecard().preview(category, &self.dice))
    }

    /// Enters the current dice into `category` on the current player's card.
    pub fn commit_score(&mut self, category: Category) -> Result<u32, GameError> {
        let points = self
            .try_commit(category)
            .inspect_err(|e| log::warn!("score rejected: {}", e))?;
        log::debug!(
            "{} scored {} in {}",
            self.current_player().name(),
            points,
            category
        );
        Ok(points)
    }

    /// Like [`Game::commit_score`], but only if it is `player_name`'s turn.
    pub fn commit_score_as(
        &mut self,
        player_name: &str,
        category: Category,
    ) -> Result<u32, GameError> {
        let index = self
            .players
            .iter()
            .position(|player| player.name() == player_name);
        let check = match index {
            None => Err(OperationError::UnknownPlayer {
                name: player_name.to_string(),
            }),
            Some(index) if index != self.current => Err(OperationError::NotCurrentPlayer {
                name: player_name.to_string(),
            }),
            Some(_) => Ok(()),
        };
        check
            .map_err(GameError::from)
            .inspect_err(|e| log::warn!("score rejected: {}", e))?;
        self.commit_score(category)
    }

    /// Ends the current turn, scored or not. Passes the dice to the next player with an open
    /// category, or ends the game once every card is full. Does nothing after the game is over.
    pub fn advance_turn(&mut self) {
        if self.over {
            return;
        }
        self.dice.reset_for_new_turn();
        self.scored_this_turn = false;
        if self.players.iter().all(|player| player.scorecard().is_full()) {
            self.over = true;
            let winners = self.winners();
            log::info!(
                "game over: {} with {}",
                winners
                    .players
                    .iter()
                    .map(|player| player.name())
                    .collect::<Vec<_>>()
                    .join(", "),
                winners.score
            );
            return;
        }
        loop {
            self.current = (self.current + 1) % self.players.len();
            if !self.current_player().scorecard().is_full() {
                break;
            }
        }
        log::info!("turn passes to {}", self.current_player().name());
    }

    /// Highest total and everyone who reached it. Only final once the game is over.
    pub fn winners(&self) -> Winners<'_> {
        let score = self
            .players
            .iter()
            .map(Player::total)
            .max()
            .unwrap_or(0);
        Winners {
            players: self
                .players
                .iter()
                .filter(|player| player.total() == score)
                .collect(),
            score,
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            players: self
                .players
                .iter()
                .map(|player| PlayerSnapshot {
                    name: player.name().to_string(),
                    scorecard: player.scorecard().snapshot(),
                })
                .collect(),
            current_player: self.current_player().name().to_string(),
            dice: self.dice.snapshot(),
            phase: self.phase(),
        }
    }

    fn ensure_turn_open(&self) -> Result<(), GameError> {
        if self.over {
            return Err(OperationError::GameOver.into());
        }
        if self.scored_this_turn {
            return Err(OperationError::TurnAlreadyScored.into());
        }
        Ok(())
    }

    fn try_commit(&mut self, category: Category) -> Result<u32, GameError> {
        self.ensure_turn_open()?;
        if !self.dice.has_rolled() {
            return Err(OperationError::NotRolledYet.into());
        }
        let points = self.players[self.current]
            .scorecard_mut()
            .score(category, &self.dice)?;
        self.scored_this_turn = true;
        Ok(points)
    }
}

impl Winners<'_> {
    pub fn is_draw(&self) -> bool {
        self.players.len() > 1
    }
}

fn validate_names(names: &[String], min_players: usize) -> Result<(), ConfigurationError> {
    if names.len() < min_players {
        return Err(ConfigurationError::TooFewPlayers {
            min: min_players,
            got: names.len(),
        });
    }
    let mut seen = HashSet::new();
    for name in names {
        if name.trim().is_empty() {
            return Err(ConfigurationError::EmptyName);
        }
        if !seen.insert(name.as_str()) {
            return Err(ConfigurationError::DuplicateName(name.clone()));
        }
    }
    Ok(())
}
