use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of an edge relative to the vertex that stores it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Out,
    In,
}

impl Direction {
    /// The direction the same edge has when stored on its other endpoint
    pub fn opposite(self) -> Self {
        match self {
            Self::Out => Self::In,
            Self::In => Self::Out,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Out => "OUT",
            Self::In => "IN",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involution() {
        assert_eq!(Direction::Out.opposite(), Direction::In);
        assert_eq!(Direction::In.opposite(), Direction::Out);
        assert_eq!(Direction::Out.opposite().opposite(), Direction::Out);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Direction::In).unwrap(), "\"in\"");
        let parsed: Direction = serde_json::from_str("\"out\"").unwrap();
        assert_eq!(parsed, Direction::Out);
    }
}
