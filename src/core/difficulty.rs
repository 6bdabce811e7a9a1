//! Round difficulty levels

/// How evil the engine plays
///
/// Hard always keeps the hardest word family. Easy and Medium periodically
/// settle for the second-hardest family, giving the guesser a break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    /// Second-hardest family on every even-numbered guess
    Easy,
    /// Second-hardest family on every fourth guess
    Medium,
    /// Always the hardest family
    Hard,
}

impl Difficulty {
    /// Create a difficulty from a name string
    ///
    /// Supported names: "easy", "medium", "hard".
    /// Defaults to Medium if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "easy" => Self::Easy,
            "hard" => Self::Hard,
            _ => Self::Medium,
        }
    }

    /// Lowercase display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}
