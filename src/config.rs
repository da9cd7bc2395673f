//! Session configuration: who controls each side and which search it uses

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::Mark;
use crate::error::{EngineError, Result};
use crate::search::Algorithm;

/// Who picks the moves for a side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Control {
    #[default]
    Human,
    Ai,
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Control::Human => "human",
            Control::Ai => "ai",
        })
    }
}

impl FromStr for Control {
    type Err = EngineError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Control::Human),
            "ai" | "computer" => Ok(Control::Ai),
            other => Err(EngineError::invalid_input(format!(
                "unknown control '{other}' (expected 'human' or 'ai')"
            ))),
        }
    }
}

/// Game mode, derived from the two controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    HumanVsHuman,
    HumanVsAi,
    AiVsAi,
}

impl GameMode {
    pub fn from_controls(x: Control, o: Control) -> Self {
        match (x, o) {
            (Control::Human, Control::Human) => GameMode::HumanVsHuman,
            (Control::Ai, Control::Ai) => GameMode::AiVsAi,
            _ => GameMode::HumanVsAi,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameMode::HumanVsHuman => "human-vs-human",
            GameMode::HumanVsAi => "human-vs-ai",
            GameMode::AiVsAi => "ai-vs-ai",
        })
    }
}

impl FromStr for GameMode {
    type Err = EngineError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human-vs-human" => Ok(GameMode::HumanVsHuman),
            "human-vs-ai" => Ok(GameMode::HumanVsAi),
            "ai-vs-ai" => Ok(GameMode::AiVsAi),
            other => Err(EngineError::invalid_input(format!(
                "invalid game mode '{other}'"
            ))),
        }
    }
}

/// Configuration of one side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub control: Control,
    /// Search used when this side is AI-controlled
    pub algorithm: Algorithm,
}

/// Configuration of both sides.
///
/// Defaults: both sides human, X searches with alpha-beta and O with minimax.
/// Missing fields in a config file fall back to these defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub x: PlayerConfig,
    pub o: PlayerConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            x: PlayerConfig {
                control: Control::Human,
                algorithm: Algorithm::AlphaBeta,
            },
            o: PlayerConfig {
                control: Control::Human,
                algorithm: Algorithm::Minimax,
            },
        }
    }
}

impl SessionConfig {
    /// Load from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| EngineError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&contents).map_err(|e| EngineError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Apply the controls of a mode preset. AI-vs-AI also puts both sides
    /// on alpha-beta.
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        match mode {
            GameMode::HumanVsHuman => {
                self.x.control = Control::Human;
                self.o.control = Control::Human;
            }
            GameMode::HumanVsAi => {
                self.x.control = Control::Human;
                self.o.control = Control::Ai;
            }
            GameMode::AiVsAi => {
                self.x = PlayerConfig {
                    control: Control::Ai,
                    algorithm: Algorithm::AlphaBeta,
                };
                self.o = PlayerConfig {
                    control: Control::Ai,
                    algorithm: Algorithm::AlphaBeta,
                };
            }
        }
        self
    }

    pub fn player(&self, mark: Mark) -> &PlayerConfig {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }

    pub fn player_mut(&mut self, mark: Mark) -> &mut PlayerConfig {
        match mark {
            Mark::X => &mut self.x,
            Mark::O => &mut self.o,
        }
    }

    pub fn mode(&self) -> GameMode {
        GameMode::from_controls(self.x.control, self.o.control)
    }
}
