use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Activity severity classified from the report's free-form string
///
/// Anything other than `high`, `medium`, or `low` (compared case-insensitively
/// after trimming) is [`Severity::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
    Unknown,
}

impl Severity {
    pub fn classify(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("high") => Severity::High,
            Some("medium") => Severity::Medium,
            Some("low") => Severity::Low,
            _ => Severity::Unknown,
        }
    }

    /// Display rank: `high` first, unrecognized values after every known one
    pub fn rank(self) -> u8 {
        match self {
            Severity::High => 0,
            Severity::Medium => 1,
            Severity::Low => 2,
            Severity::Unknown => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
            Severity::Unknown => "unknown",
        }
    }

    /// CSS class token for severity badges
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::High => "severity-high",
            Severity::Medium => "severity-medium",
            Severity::Low => "severity-low",
            Severity::Unknown => "severity-unknown",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overall risk level of a report
///
/// Unrecognized or missing levels are [`RiskLevel::Unknown`], which maps to
/// the neutral `risk-unknown` class instead of an arbitrary token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Unknown,
}

impl RiskLevel {
    pub fn classify(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("low") => RiskLevel::Low,
            Some("medium") => RiskLevel::Medium,
            Some("high") => RiskLevel::High,
            _ => RiskLevel::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Unknown => "unknown",
        }
    }

    /// CSS class token, `risk-<level>`
    pub fn css_class(self) -> &'static str {
        match self {
            RiskLevel::Low => "risk-low",
            RiskLevel::Medium => "risk-medium",
            RiskLevel::High => "risk-high",
            RiskLevel::Unknown => "risk-unknown",
        }
    }

    fn ordinal(self) -> Option<u8> {
        match self {
            RiskLevel::Low => Some(0),
            RiskLevel::Medium => Some(1),
            RiskLevel::High => Some(2),
            RiskLevel::Unknown => None,
        }
    }

    /// Whether this level reaches `threshold`; an unknown level never does
    pub fn meets(self, threshold: RiskLevel) -> bool {
        match (self.ordinal(), threshold.ordinal()) {
            (Some(level), Some(min)) => level >= min,
            _ => false,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    /// Parses a threshold value; only the three known levels are accepted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match RiskLevel::classify(Some(s)) {
            RiskLevel::Unknown => Err(format!(
                "Invalid risk level: {}. Please specify 'low', 'medium' or 'high'",
                s
            )),
            level => Ok(level),
        }
    }
}
