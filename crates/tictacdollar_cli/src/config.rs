//! Match configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tictacdollar::{ContestantSetup, Difficulty, GameMode, MatchSetup, Side, Tuning, TuningPreset};
use tracing::{debug, info, instrument};

/// Who controls the sides, as written in a config file.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ModeKind {
    /// Two humans at one keyboard.
    #[default]
    Pvp,
    /// One side is played by the advisor; see `computer_side`.
    Computer,
    /// The advisor plays both sides.
    Autoplay,
}

/// Display pauses the front end inserts between engine calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Delays {
    /// Pause before a computer move, in milliseconds.
    #[serde(default = "default_think_ms")]
    think_ms: u64,

    /// How long a scoring connection stays highlighted, in milliseconds.
    #[serde(default = "default_highlight_ms")]
    highlight_ms: u64,

    /// Pause between a tie and its resolution, in milliseconds.
    #[serde(default = "default_tie_ms")]
    tie_ms: u64,
}

fn default_think_ms() -> u64 {
    1000
}

fn default_highlight_ms() -> u64 {
    1500
}

fn default_tie_ms() -> u64 {
    2000
}

impl Delays {
    /// Pauses in milliseconds: computer thinking, highlight, tie.
    pub const fn new(think_ms: u64, highlight_ms: u64, tie_ms: u64) -> Self {
        Self {
            think_ms,
            highlight_ms,
            tie_ms,
        }
    }

    /// No pauses at all, for unattended play.
    pub const fn zero() -> Self {
        Self::new(0, 0, 0)
    }

    /// Pause before a computer move.
    pub fn think(&self) -> Duration {
        Duration::from_millis(self.think_ms)
    }

    /// Highlight display time.
    pub fn highlight(&self) -> Duration {
        Duration::from_millis(self.highlight_ms)
    }

    /// Pause before resolving a tie.
    pub fn tie(&self) -> Duration {
        Duration::from_millis(self.tie_ms)
    }
}

impl Default for Delays {
    fn default() -> Self {
        Self {
            think_ms: default_think_ms(),
            highlight_ms: default_highlight_ms(),
            tie_ms: default_tie_ms(),
        }
    }
}

/// Configuration for a match.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Name of the first side.
    #[serde(default = "default_first_name")]
    first_name: String,

    /// Marker of the first side.
    #[serde(default = "default_first_marker")]
    first_marker: String,

    /// Name of the second side.
    #[serde(default = "default_second_name")]
    second_name: String,

    /// Marker of the second side.
    #[serde(default = "default_second_marker")]
    second_marker: String,

    /// Difficulty tier.
    #[serde(default)]
    difficulty: Difficulty,

    /// Who controls the sides.
    #[serde(default)]
    mode: ModeKind,

    /// Side played by the advisor in `computer` mode.
    #[serde(default = "default_computer_side")]
    computer_side: Side,

    /// Tuning table.
    #[serde(default)]
    tuning: TuningPreset,

    /// Front-end pauses.
    #[serde(default)]
    delays: Delays,

    /// Seed for every random choice; fresh entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Moves after which an unattended match is abandoned.
    #[serde(default = "default_max_moves")]
    max_moves: u32,
}

fn default_first_name() -> String {
    "Dog".to_string()
}

fn default_first_marker() -> String {
    "D".to_string()
}

fn default_second_name() -> String {
    "Cat".to_string()
}

fn default_second_marker() -> String {
    "C".to_string()
}

fn default_computer_side() -> Side {
    Side::Second
}

fn default_max_moves() -> u32 {
    5000
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            first_name: default_first_name(),
            first_marker: default_first_marker(),
            second_name: default_second_name(),
            second_marker: default_second_marker(),
            difficulty: Difficulty::default(),
            mode: ModeKind::default(),
            computer_side: default_computer_side(),
            tuning: TuningPreset::default(),
            delays: Delays::default(),
            seed: None,
            max_moves: default_max_moves(),
        }
    }
}

impl MatchConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(difficulty = %config.difficulty, mode = %config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text and validates it.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Renders the configuration as TOML.
    #[instrument(skip(self))]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to render config: {}", e)))
    }

    /// Checks the marker contract the engine relies on.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let first = self.first_marker.trim();
        let second = self.second_marker.trim();

        if first.is_empty() || second.is_empty() {
            return Err(ConfigError::new("Markers must not be empty".to_string()));
        }
        if first == second {
            return Err(ConfigError::new(format!("Markers must differ, both are {:?}", first)));
        }
        if self.max_moves == 0 {
            return Err(ConfigError::new("max_moves must be positive".to_string()));
        }
        Ok(())
    }

    /// Engine game mode.
    pub fn game_mode(&self) -> GameMode {
        match self.mode {
            ModeKind::Pvp => GameMode::HumanVsHuman,
            ModeKind::Computer => GameMode::VsComputer(self.computer_side),
            ModeKind::Autoplay => GameMode::ComputerVsComputer,
        }
    }

    /// Engine setup for a new match.
    pub fn setup(&self) -> MatchSetup {
        MatchSetup::new(
            ContestantSetup::new(self.first_name.trim(), self.first_marker.trim()),
            ContestantSetup::new(self.second_name.trim(), self.second_marker.trim()),
            self.difficulty,
            self.game_mode(),
        )
    }

    /// Tuning table in force.
    pub fn tuning_table(&self) -> Tuning {
        self.tuning.tuning()
    }

    /// Random source: seeded when a seed is configured.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Overrides the difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Overrides who controls the sides.
    pub fn with_mode(mut self, mode: ModeKind) -> Self {
        self.mode = mode;
        self
    }

    /// Overrides the computer-controlled side and switches to `computer` mode.
    pub fn with_computer_side(mut self, side: Side) -> Self {
        self.mode = ModeKind::Computer;
        self.computer_side = side;
        self
    }

    /// Overrides the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides the front-end pauses.
    pub fn with_delays(mut self, delays: Delays) -> Self {
        self.delays = delays;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
