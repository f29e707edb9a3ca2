use rand::Rng;

use crate::config::GameConfig;
use crate::data::Lexicon;
use crate::dictionary::Dictionary;
use crate::game::grid::Grid;
use crate::game::matcher::find_matches;
use crate::messages::{Command, Event};
use crate::models::{Block, GameMode, JlptLevel, WordEntry};
use crate::utils::kana::{is_pure_kanji, tokenize};

/// Orchestrates one game: spawn, drop, lock, match, clear, gravity, repeat.
/// Single-threaded and synchronous; every command and tick runs to completion
/// before the next one is accepted.
pub struct GameSession {
    config: GameConfig,
    lexicon: Lexicon,
    dictionary: Dictionary,
    grid: Grid,
    active: Option<Block>,
    mode: GameMode,
    /// Column the previous block locked in; the next block spawns there.
    last_column: usize,
    drop_counter: u64,
    running: bool,
    game_over: bool,
    events: Vec<Event>,
}

impl GameSession {
    pub fn new(config: GameConfig, lexicon: Lexicon, mode: GameMode, level: JlptLevel) -> Self {
        let dictionary = Dictionary::build(&lexicon, level);
        let grid = Grid::new(config.grid_width, config.grid_height);
        let last_column = config.spawn_column.min(config.grid_width.saturating_sub(1));
        Self {
            config,
            lexicon,
            dictionary,
            grid,
            active: None,
            mode,
            last_column,
            drop_counter: 0,
            running: false,
            game_over: false,
            events: Vec::new(),
        }
    }

    /// Session backed by the bundled JLPT word lists.
    pub fn with_builtin_words(config: GameConfig, mode: GameMode, level: JlptLevel) -> Self {
        Self::new(config, Lexicon::builtin().clone(), mode, level)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active_block(&self) -> Option<&Block> {
        self.active.as_ref()
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn level(&self) -> JlptLevel {
        self.dictionary.level()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Drain pending notifications. Each event is delivered exactly once.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn handle(&mut self, command: Command) {
        match command {
            Command::Start => self.start(),
            Command::Reset => self.reset(),
            Command::MoveTo { column } => self.move_to(column),
            Command::SoftDrop => self.soft_drop(),
            Command::HardDrop => self.hard_drop(),
            Command::SetMode { mode } => self.set_mode(mode),
            Command::SetLevel { level } => self.set_level(level),
        }
    }

    pub fn start(&mut self) {
        self.running = true;
        self.game_over = false;
        self.drop_counter = 0;
        self.events.push(Event::Started);
        self.spawn_block();
    }

    /// Fresh grid, no active block; dictionary and word lists stay cached.
    pub fn reset(&mut self) {
        self.grid = Grid::new(self.config.grid_width, self.config.grid_height);
        self.active = None;
        self.running = false;
        self.game_over = false;
        self.drop_counter = 0;
        self.events.clear();
    }

    /// Switch script mode. Rebuilds the dictionary and resets the grid.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.dictionary = Dictionary::build(&self.lexicon, self.dictionary.level());
        self.reset();
    }

    /// Switch proficiency level. The new dictionary fully replaces the old
    /// one; the cached word lists are not re-derived.
    pub fn set_level(&mut self, level: JlptLevel) {
        self.dictionary = Dictionary::build(&self.lexicon, level);
        self.reset();
    }

    /// Move the active block to `column` if that cell is in bounds and free.
    pub fn move_to(&mut self, column: usize) {
        if self.game_over {
            return;
        }
        let Some(y) = self.active.as_ref().map(|block| block.y) else {
            return;
        };
        if self.grid.is_valid(column, y) && self.grid.is_empty(column, y) {
            if let Some(block) = self.active.as_mut() {
                block.x = column;
            }
            self.events.push(Event::BlockMoved { column });
        }
    }

    /// Advance the active block one row, locking it on collision with the
    /// stack or the floor.
    pub fn soft_drop(&mut self) {
        if self.game_over {
            return;
        }
        let Some((x, next_y)) = self.active.as_ref().map(|block| (block.x, block.y + 1)) else {
            return;
        };
        if self.grid.is_empty(x, next_y) {
            if let Some(block) = self.active.as_mut() {
                block.y = next_y;
            }
        } else {
            self.lock_block();
        }
    }

    /// Drop the active block to its resting row and lock it immediately.
    pub fn hard_drop(&mut self) {
        if self.game_over || self.active.is_none() {
            return;
        }
        loop {
            let Some((x, y)) = self.active.as_ref().map(|block| (block.x, block.y)) else {
                return;
            };
            if !self.grid.is_empty(x, y + 1) {
                break;
            }
            if let Some(block) = self.active.as_mut() {
                block.y = y + 1;
            }
        }
        self.events.push(Event::BlockDropped);
        self.lock_block();
    }

    /// Advance the drop timer; the cadence itself comes from the collaborator
    /// driving the frame callback.
    pub fn tick(&mut self, elapsed_ms: u64) {
        if !self.running {
            return;
        }
        self.drop_counter += elapsed_ms;
        if self.drop_counter >= self.config.drop_interval_ms {
            self.drop_counter = 0;
            self.soft_drop();
        }
    }

    /// Commit the active block into the grid, clear any matched words, apply
    /// gravity, and spawn the next block.
    fn lock_block(&mut self) {
        let Some(block) = self.active.take() else {
            return;
        };
        self.last_column = block.x;
        self.grid.set(block.x, block.y, Some(block.token));

        let matches = find_matches(&self.grid, self.dictionary.view(self.mode));
        if !matches.is_empty() {
            tracing::info!(count = matches.len(), "words matched");
            for m in &matches {
                for cell in &m.cells {
                    self.grid.set(cell.x, cell.y, None);
                }
            }
            self.events.push(Event::WordsMatched { matches });
        }

        // Fill gaps regardless of whether anything cleared.
        self.grid.apply_gravity();

        self.spawn_block();
    }

    fn spawn_block(&mut self) {
        let mut rng = rand::rng();
        self.spawn_block_with(&mut rng);
    }

    fn spawn_block_with(&mut self, rng: &mut impl Rng) {
        let token = {
            let Some(entry) = self.pick_spawn_entry(rng) else {
                tracing::warn!("no words available to spawn; stopping session");
                self.running = false;
                return;
            };
            self.spawn_token(entry, rng)
        };

        let block = Block {
            x: self.last_column,
            y: 0,
            token,
        };

        // Spawn cell already occupied: the stack reached the top.
        if !self.grid.is_empty(block.x, block.y) {
            self.active = Some(block);
            self.game_over = true;
            self.running = false;
            tracing::info!("game over");
            self.events.push(Event::GameOver);
            return;
        }

        self.events.push(Event::BlockSpawned {
            block: block.clone(),
        });
        self.active = Some(block);
    }

    /// Pick a random word to spawn a token from. Kanji mode prefers entries
    /// whose compound form qualifies for matching (2+ pure-kanji characters)
    /// and falls back to the full pool when none exists, so a spawn always
    /// succeeds on a non-empty lexicon.
    fn pick_spawn_entry(&self, rng: &mut impl Rng) -> Option<&WordEntry> {
        let pool: Vec<&WordEntry> = self
            .lexicon
            .entries_up_to(self.dictionary.level())
            .map(|(_, entry)| entry)
            .collect();
        if pool.is_empty() {
            return None;
        }

        if self.mode == GameMode::Kanji {
            let candidates: Vec<&WordEntry> = pool
                .iter()
                .copied()
                .filter(|entry| {
                    entry.kanji.chars().count() >= 2 && is_pure_kanji(&entry.kanji)
                })
                .collect();
            if candidates.is_empty() {
                tracing::warn!(
                    level = ?self.dictionary.level(),
                    "no kanji-eligible words at this level; falling back to full pool"
                );
            } else {
                return Some(candidates[rng.random_range(0..candidates.len())]);
            }
        }

        Some(pool[rng.random_range(0..pool.len())])
    }

    fn spawn_token(&self, entry: &WordEntry, rng: &mut impl Rng) -> String {
        let text = match self.mode {
            GameMode::Hiragana => &entry.hiragana,
            GameMode::Kanji => &entry.kanji,
        };
        let tokens = tokenize(text);
        tokens[rng.random_range(0..tokens.len())].clone()
    }
}
