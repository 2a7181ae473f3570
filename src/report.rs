//! Greeting and sum report, rendered as text or JSON

use crate::error::Result;
use crate::numbers::Numbers;
use serde::{Deserialize, Serialize};

/// Greeting printed when none is supplied
pub const DEFAULT_GREETING: &str = "Hello Go World!";

/// The two output lines as data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// First output line
    pub greeting: String,
    /// Accumulated total of the sequence
    pub sum: i64,
}

impl Report {
    /// Sum `numbers` and pair the total with `greeting`
    pub fn from_numbers(greeting: impl Into<String>, numbers: &Numbers) -> Result<Self> {
        Ok(Self {
            greeting: greeting.into(),
            sum: numbers.sum()?,
        })
    }

    /// Render as two newline-terminated lines
    pub fn render_text(&self) -> String {
        format!("{}\nSum: {}\n", self.greeting, self.sum)
    }

    /// Render as a single-line JSON object
    pub fn render_json(&self) -> Result<String> {
        let mut json = serde_json::to_string(self)?;
        json.push('\n');
        Ok(json)
    }
}

impl Default for Report {
    fn default() -> Self {
        Self {
            greeting: DEFAULT_GREETING.to_string(),
            sum: 15,
        }
    }
}
