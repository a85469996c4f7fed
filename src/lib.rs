//! Rules engine for a turn-based, five-dice scoring game.
//!
//! A [`Game`] owns the players, the shared [`DiceSet`] and the turn order. Callers roll, hold
//! dice between rolls, then commit the current dice to one [`Category`] on the current player's
//! [`Scorecard`] before advancing the turn. Every rejected request comes back as a
//! [`GameError`] and leaves the game as it was.
//!
//! ```
//! use yahtzee_engine::{Category, GameConfig, Game};
//!
//! let mut game = Game::with_config(["ann", "bob"], &GameConfig::default().with_seed(7))?;
//! game.roll()?;
//! game.toggle_hold(0)?;
//! game.roll()?;
//! let preview = game.preview_score(Category::Chance)?;
//! assert_eq!(game.commit_score(Category::Chance)?, preview);
//! game.advance_turn();
//! assert_eq!(game.current_player().name(), "bob");
//! # Ok::<(), yahtzee_engine::GameError>(())
//! ```

pub mod config;
pub mod dice;
pub mod error;
pub mod faces;
pub mod game;
pub mod player;
pub mod scorecard;
pub mod scoring;
pub mod types;

pub use config::{ConfigError, GameConfig};
pub use dice::{DiceSet, DiceSnapshot, Die, FaceCounts};
pub use error::{ConfigurationError, DiceError, GameError, OperationError};
pub use faces::{FaceSource, ScriptedFaces, SeededFaces};
pub use game::{Game, GameSnapshot, PlayerSnapshot, TurnPhase, Winners, new_game};
pub use player::Player;
pub use scorecard::{Scorecard, ScorecardSnapshot};
pub use scoring::category_score;
pub use types::{Category, ScoreSlot, Section};
