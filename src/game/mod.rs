pub mod grid;
pub mod matcher;
pub mod session;

pub use grid::Grid;
pub use matcher::find_matches;
pub use session::GameSession;
