use std::fmt;

/// Ceiling shared by the view/like/dislike counters.
///
/// Enforced by the record store, not checked by the catalog engine.
pub const MAX_COUNTER: u64 = 999_999_999_999;

/// The audience counters kept on every movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Counter {
    Views,
    Likes,
    Dislikes,
}

impl Counter {
    /// Lowercase name, also the SQLite column holding the counter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Views => "views",
            Self::Likes => "likes",
            Self::Dislikes => "dislikes",
        }
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
