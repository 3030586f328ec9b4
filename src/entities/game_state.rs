/// Top-level session states. Win/Loss are recorded as an [`Outcome`] at the
/// moment Playing terminates, just before the leaderboard is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    NameEntry,
    Playing,
    Leaderboard,
}

/// How the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
}
