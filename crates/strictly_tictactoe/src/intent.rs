//! Intents sent from a view to the game controller.

use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Something the user asked for.
///
/// Views never mutate game state; they produce intents and hand them to
/// [`GameController::dispatch`](crate::GameController::dispatch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// A board cell was clicked.
    ClickCell(Position),
    /// A move-list entry was selected.
    JumpTo(usize),
    /// The move-list sort control was pressed.
    ToggleOrder,
}

/// Error parsing the textual form of an [`Intent`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid intent '{}': {}", input, reason)]
pub struct IntentParseError {
    /// The offending token.
    pub input: String,
    /// Why it was rejected.
    pub reason: &'static str,
}

impl IntentParseError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

/// Parses `c<0-8>` (click cell), `j<n>` (jump to move) or `s` (toggle order).
impl FromStr for Intent {
    type Err = IntentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let mut chars = token.chars();
        let Some(kind) = chars.next() else {
            return Err(IntentParseError::new(token, "empty intent"));
        };
        let arg = chars.as_str();

        match kind.to_ascii_lowercase() {
            'c' => {
                let index: usize = arg
                    .parse()
                    .map_err(|_| IntentParseError::new(token, "expected a cell number"))?;
                Position::from_index(index)
                    .map(Intent::ClickCell)
                    .ok_or_else(|| IntentParseError::new(token, "cell must be 0-8"))
            }
            'j' => arg
                .parse()
                .map(Intent::JumpTo)
                .map_err(|_| IntentParseError::new(token, "expected a move number")),
            's' if arg.is_empty() => Ok(Intent::ToggleOrder),
            _ => Err(IntentParseError::new(token, "expected c<cell>, j<move> or s")),
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::ClickCell(pos) => write!(f, "c{}", pos.to_index()),
            Intent::JumpTo(m) => write!(f, "j{}", m),
            Intent::ToggleOrder => write!(f, "s"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_each_kind() {
        assert_eq!("c4".parse::<Intent>(), Ok(Intent::ClickCell(Position::Center)));
        assert_eq!("J12".parse::<Intent>(), Ok(Intent::JumpTo(12)));
        assert_eq!(" s ".parse::<Intent>(), Ok(Intent::ToggleOrder));
    }

    #[test]
    fn test_parse_rejects_bad_tokens() {
        assert!("c9".parse::<Intent>().is_err());
        assert!("cx".parse::<Intent>().is_err());
        assert!("j".parse::<Intent>().is_err());
        assert!("sort".parse::<Intent>().is_err());
        let err = "".parse::<Intent>().unwrap_err();
        assert_eq!(err.reason, "empty intent");
    }

    #[test]
    fn test_display_matches_parse_syntax() {
        assert_eq!(Intent::ClickCell(Position::BottomRight).to_string(), "c8");
        assert_eq!(Intent::JumpTo(3).to_string(), "j3");
    }
}
