//! Validated configuration shared by emitter and merger

use crate::error::{EdgeCopyError, ErrorCode, Result};
use crate::graph::Direction;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fully qualified name of the copy direction option
pub const DIRECTION_KEY: &str = "edgecopy.input.edge-copy.direction";

/// The copy direction as it appears on the configuration surface
///
/// `Both` is accepted by the parser so that it can be rejected with a
/// configuration error instead of a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionOption {
    #[default]
    Out,
    In,
    Both,
}

impl FromStr for DirectionOption {
    type Err = EdgeCopyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "out" => Ok(Self::Out),
            "in" => Ok(Self::In),
            "both" => Ok(Self::Both),
            other => Err(EdgeCopyError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                format!("{DIRECTION_KEY}: expected one of out, in, both; got '{other}'"),
            )),
        }
    }
}

impl fmt::Display for DirectionOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Out => "OUT",
            Self::In => "IN",
            Self::Both => "BOTH",
        })
    }
}

impl TryFrom<DirectionOption> for Direction {
    type Error = EdgeCopyError;

    fn try_from(option: DirectionOption) -> Result<Self> {
        match option {
            DirectionOption::Out => Ok(Direction::Out),
            DirectionOption::In => Ok(Direction::In),
            DirectionOption::Both => Err(EdgeCopyError::config_with_code(
                ErrorCode::CONFIG_UNSUPPORTED_DIRECTION,
                format!("{DIRECTION_KEY}: BOTH is not supported, use OUT or IN"),
            )),
        }
    }
}

/// Edge copy settings, validated once at construction
///
/// Holding an `EdgeCopyConfig` proves the direction is OUT or IN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeCopyConfig {
    direction: Direction,
}

impl EdgeCopyConfig {
    pub fn new(option: DirectionOption) -> Result<Self> {
        Ok(Self {
            direction: Direction::try_from(option)?,
        })
    }

    pub fn with_direction(direction: Direction) -> Self {
        Self { direction }
    }

    /// Direction of the edges read from input vertices
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Direction of the reciprocal edges written onto shell vertices
    pub fn reverse(&self) -> Direction {
        self.direction.opposite()
    }
}

impl Default for EdgeCopyConfig {
    fn default() -> Self {
        Self::with_direction(Direction::Out)
    }
}
