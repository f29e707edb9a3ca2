use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Engine tunables. Defaults mirror the classic board: 6 columns, 10 rows,
/// spawn in column 2, one automatic drop per second.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub grid_width: usize,
    pub grid_height: usize,
    pub spawn_column: usize,
    pub drop_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 6,
            grid_height: 10,
            spawn_column: 2,
            drop_interval_ms: 1000,
        }
    }
}

impl GameConfig {
    /// Defaults with optional environment overrides.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let grid_width = env::var("NIHONGO_DROP_GRID_WIDTH")
            .map(|v| v.parse())
            .unwrap_or(Ok(defaults.grid_width))
            .context("NIHONGO_DROP_GRID_WIDTH must be a number")?;
        let grid_height = env::var("NIHONGO_DROP_GRID_HEIGHT")
            .map(|v| v.parse())
            .unwrap_or(Ok(defaults.grid_height))
            .context("NIHONGO_DROP_GRID_HEIGHT must be a number")?;
        let spawn_column = env::var("NIHONGO_DROP_SPAWN_COLUMN")
            .map(|v| v.parse())
            .unwrap_or(Ok(defaults.spawn_column))
            .context("NIHONGO_DROP_SPAWN_COLUMN must be a number")?;
        let drop_interval_ms = env::var("NIHONGO_DROP_INTERVAL_MS")
            .map(|v| v.parse())
            .unwrap_or(Ok(defaults.drop_interval_ms))
            .context("NIHONGO_DROP_INTERVAL_MS must be a number")?;

        Ok(Self {
            grid_width,
            grid_height,
            spawn_column,
            drop_interval_ms,
        })
    }
}
