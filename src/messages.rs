use serde::{Deserialize, Serialize};

use crate::models::{Block, GameMode, JlptLevel, Match};

/// Commands a collaborator (input layer) sends into the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    Start,
    Reset,
    MoveTo { column: usize },
    SoftDrop,
    HardDrop,
    SetMode { mode: GameMode },
    SetLevel { level: JlptLevel },
}

/// Notifications the engine emits for collaborators (renderer, audio, score).
/// Drained once per tick via `GameSession::take_events`; never re-delivered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    Started,
    BlockSpawned { block: Block },
    BlockMoved { column: usize },
    BlockDropped,
    WordsMatched { matches: Vec<Match> },
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_wire_format() {
        let cmd: Command = serde_json::from_str(r#"{"type":"move_to","column":3}"#).unwrap();
        assert!(matches!(cmd, Command::MoveTo { column: 3 }));

        let cmd: Command = serde_json::from_str(r#"{"type":"set_level","level":"n3"}"#).unwrap();
        assert!(matches!(
            cmd,
            Command::SetLevel {
                level: JlptLevel::N3
            }
        ));
    }

    #[test]
    fn test_event_wire_format() {
        let json = serde_json::to_string(&Event::GameOver).unwrap();
        assert_eq!(json, r#"{"type":"game_over"}"#);
    }
}
