//! Weekly goals as produced by the coaching AI.
//!
//! These documents are generated text, so every field is optional on the wire
//! and the declared target may arrive as a number or as free text.

use serde::{Deserialize, Deserializer, Serialize};

/// Coaching tier the AI assigned to the user for the week.
///
/// Tiers the tracker does not know deserialize as `Unknown`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE", from = "String")]
pub enum UserLevel {
    Survival,
    Stabilizing,
    Growing,
    Unknown,
}

impl From<String> for UserLevel {
    fn from(level: String) -> Self {
        match level.trim().to_uppercase().as_str() {
            "SURVIVAL" => Self::Survival,
            "STABILIZING" => Self::Stabilizing,
            "GROWING" => Self::Growing,
            _ => Self::Unknown,
        }
    }
}

/// Reads `null` as the field's default; `#[serde(default)]` only covers
/// missing keys.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Declared target of a goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum GoalTarget {
    Number(f64),
    Text(String),
}

impl GoalTarget {
    /// Numeric value of the target, if it is usable as a divisor.
    ///
    /// Text targets use their first numeric token, so `"5 lệnh"` and `"100%"`
    /// resolve to 5 and 100. Zero, negative and non-finite values yield `None`.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(text) => first_number(text)?,
        };

        (value.is_finite() && value > 0.0).then_some(value)
    }
}

fn first_number(text: &str) -> Option<f64> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let rest = &text[start..];
    let mut number = String::new();
    let mut seen_dot = false;
    let mut chars = rest.chars();

    while let Some(c) = chars.next() {
        match c {
            '0'..='9' => number.push(c),
            '.' | ',' if !seen_dot => {
                let following = chars.clone().take_while(char::is_ascii_digit).count();
                if following == 0 {
                    break;
                }
                // "1,000" groups thousands; "2,5" and "1.5" are decimals.
                if c == ',' && following == 3 {
                    continue;
                }
                if c == ',' && following > 3 {
                    break;
                }
                number.push('.');
                seen_dot = true;
            }
            _ => break,
        }
    }

    number.parse().ok()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WeeklyGoal {
    pub id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub metric: String,
    pub target: Option<GoalTarget>,
    #[serde(deserialize_with = "null_as_default")]
    pub daily_checkpoint: String,
    #[serde(deserialize_with = "null_as_default")]
    pub connection_to_last_week: String,
}

impl WeeklyGoal {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: GoalTarget) -> Self {
        self.target = Some(target);
        self
    }

    /// Text the classifier reads: the description, or the title when the
    /// description is blank.
    #[must_use]
    pub fn classification_text(&self) -> Option<&str> {
        [self.description.as_str(), self.title.as_str()]
            .into_iter()
            .find(|text| !text.trim().is_empty())
    }

    #[must_use]
    pub fn declared_target(&self) -> Option<f64> {
        self.target.as_ref().and_then(GoalTarget::value)
    }

    /// Explicit id, or `fallback` when the id is missing or blank.
    #[must_use]
    pub fn id_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .unwrap_or(fallback)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WeeklyGoals {
    #[serde(deserialize_with = "null_as_default")]
    pub week_number: u32,
    pub user_level: Option<UserLevel>,
    pub primary_goal: Option<WeeklyGoal>,
    pub secondary_goal: Option<WeeklyGoal>,
    #[serde(deserialize_with = "null_as_default")]
    pub rationale: String,
    #[serde(deserialize_with = "null_as_default")]
    pub success_definition: String,
}

impl WeeklyGoals {
    #[must_use]
    pub fn new(primary_goal: WeeklyGoal, secondary_goal: WeeklyGoal) -> Self {
        Self {
            primary_goal: Some(primary_goal),
            secondary_goal: Some(secondary_goal),
            ..Self::default()
        }
    }

    /// Both goals, or `None` if either is missing.
    #[must_use]
    pub fn pair(&self) -> Option<(&WeeklyGoal, &WeeklyGoal)> {
        self.primary_goal.as_ref().zip(self.secondary_goal.as_ref())
    }
}
