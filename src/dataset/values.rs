//! Small structured values that the API (and the CSV files) encode as text.
//!
//! Each one is parsed once at ingestion and written back in the same textual
//! form, so the files stay readable by anything that expects `"7-14"` or
//! `"31:02"`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Error for a composite value that does not have the expected shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueParseError {
    kind: &'static str,
    input: String,
}

impl fmt::Display for ValueParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} value '{}'", self.kind, self.input)
    }
}

impl std::error::Error for ValueParseError {}

/// Splits `"a-b"` (or `"a/b"`) into two non-negative numbers. A bare `"0"`
/// is the API's placeholder for a category with nothing in it and reads as `0-0`.
fn split_pair(input: &str, kind: &'static str) -> Result<(u32, u32), ValueParseError> {
    let err = || ValueParseError {
        kind,
        input: input.to_string(),
    };
    let trimmed = input.trim();
    if trimmed == "0" {
        return Ok((0, 0));
    }
    let (left, right) = trimmed.split_once(['-', '/']).ok_or_else(err)?;
    let left = left.trim().parse::<u32>().map_err(|_| err())?;
    let right = right.trim().parse::<u32>().map_err(|_| err())?;
    Ok((left, right))
}

/// Successes out of attempts: completions, third- and fourth-down conversions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MadeAttempted {
    pub made: u32,
    pub attempted: u32,
}

impl MadeAttempted {
    pub fn new(made: u32, attempted: u32) -> Self {
        Self { made, attempted }
    }
}

impl fmt::Display for MadeAttempted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.made, self.attempted)
    }
}

impl FromStr for MadeAttempted {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (made, attempted) = split_pair(s, "made-attempted")?;
        Ok(Self { made, attempted })
    }
}

/// Penalty count and the yardage it cost, reported by the API as `"6-55"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PenaltySummary {
    pub count: u32,
    pub yards: u32,
}

impl PenaltySummary {
    pub fn new(count: u32, yards: u32) -> Self {
        Self { count, yards }
    }
}

impl fmt::Display for PenaltySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.count, self.yards)
    }
}

impl FromStr for PenaltySummary {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (count, yards) = split_pair(s, "penalties-yards")?;
        Ok(Self { count, yards })
    }
}

/// Time of possession, `"MM:SS"` on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct PossessionTime {
    pub seconds: u32,
}

impl PossessionTime {
    pub fn from_seconds(seconds: u32) -> Self {
        Self { seconds }
    }
}

impl fmt::Display for PossessionTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.seconds / 60, self.seconds % 60)
    }
}

impl FromStr for PossessionTime {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ValueParseError {
            kind: "possession time",
            input: s.to_string(),
        };
        let trimmed = s.trim();
        if trimmed == "0" {
            return Ok(Self::default());
        }
        let (minutes, seconds) = trimmed.split_once(':').ok_or_else(err)?;
        let minutes = minutes.trim().parse::<u32>().map_err(|_| err())?;
        let seconds = seconds.trim().parse::<u32>().map_err(|_| err())?;
        if seconds >= 60 {
            return Err(err());
        }
        let seconds = minutes
            .checked_mul(60)
            .and_then(|total| total.checked_add(seconds))
            .ok_or_else(err)?;
        Ok(Self { seconds })
    }
}

/// Points per period, overtimes included, e.g. `[7,0,14,3]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineScores(pub Vec<i64>);

impl fmt::Display for LineScores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(i64::to_string).collect();
        write!(f, "[{}]", parts.join(","))
    }
}

impl FromStr for LineScores {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str::<Vec<i64>>(s.trim())
            .map(LineScores)
            .map_err(|_| ValueParseError {
                kind: "line scores",
                input: s.to_string(),
            })
    }
}

impl From<Vec<i64>> for LineScores {
    fn from(scores: Vec<i64>) -> Self {
        LineScores(scores)
    }
}

/// Implements text (de)serialization through `Display` / `FromStr`, which is
/// how these values appear in the CSV files.
macro_rules! text_serde {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.collect_str(self)
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    let text = String::deserialize(deserializer)?;
                    text.parse().map_err(D::Error::custom)
                }
            }
        )*
    };
}

text_serde!(MadeAttempted, PenaltySummary, PossessionTime, LineScores);
