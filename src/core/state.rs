//! Core domain: game state definitions for the match flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    /// Loading and validating content.
    #[default]
    Boot,
    /// Deploy menu: starting-weapon selection.
    Deploy,
    /// In the trench.
    Run,
    /// End screen after the player goes down.
    Dead,
}
