use crate::unique::{frequency, presence};
use console::style;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Unique,
    Duplicated,
}

impl From<bool> for Verdict {
    fn from(unique: bool) -> Self {
        if unique { Self::Unique } else { Self::Duplicated }
    }
}

impl Verdict {
    /// Phrasing used in the diagnostic report line.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Unique => "contains unique characters",
            Self::Duplicated => "DOES NOT contain unique characters",
        }
    }
}

/// Outcome of auditing one input string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniquenessReport {
    pub input: String,
    pub verdict: Verdict,
    /// Characters occurring more than once, in code point order.
    pub repeated: Vec<char>,
}

impl UniquenessReport {
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string(self)
            .map_err(|e| anyhow::anyhow!("Failed to serialize report for {:?}: {e}", self.input))
    }
}

impl Display for UniquenessReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let line = format!("{} {}", self.input, self.verdict.description());
        match self.verdict {
            Verdict::Unique => write!(f, "{}", style(line).green()),
            Verdict::Duplicated => write!(f, "{}", style(line).red().bold()),
        }
    }
}

/// Audit `s` and describe the outcome.
///
/// Prefers the presence-table scan; input outside its 7-bit range falls
/// back to occurrence counting, which handles any alphabet.
pub fn audit(s: &str) -> UniquenessReport {
    let unique = match presence::has_unique_chars(s) {
        Ok(unique) => unique,
        Err(e) => {
            log::debug!("{e}; falling back to occurrence counting");
            frequency::has_unique_chars(s)
        }
    };

    let repeated = if unique {
        Vec::new()
    } else {
        let mut repeated: Vec<char> = frequency::char_frequencies(s)
            .into_iter()
            .filter(|&(_, count)| count > 1)
            .map(|(ch, _)| ch)
            .collect();
        repeated.sort_unstable();
        repeated
    };

    UniquenessReport {
        input: s.to_owned(),
        verdict: Verdict::from(unique),
        repeated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audit_flags_duplicates() {
        let report = audit("He1lo World");
        assert_eq!(report.verdict, Verdict::Duplicated);
        assert_eq!(report.repeated, vec!['l', 'o']);
    }

    #[test]
    fn audit_accepts_unique_input() {
        let report = audit("abcdefg");
        assert_eq!(report.verdict, Verdict::Unique);
        assert!(report.repeated.is_empty());
    }

    #[test]
    fn audit_falls_back_for_wide_alphabets() {
        // Out of presence-table range; still audited via counting
        assert_eq!(audit("日本語").verdict, Verdict::Unique);
        assert_eq!(audit("ねこねこ").verdict, Verdict::Duplicated);
    }

    #[test]
    fn verdict_descriptions_match_report_phrasing() {
        assert_eq!(Verdict::Unique.description(), "contains unique characters");
        assert_eq!(
            Verdict::Duplicated.description(),
            "DOES NOT contain unique characters"
        );
    }

    #[test]
    fn report_serializes_to_json() {
        let json = audit("ABCA123").to_json().unwrap();
        assert!(json.contains("\"verdict\":\"Duplicated\""));
        assert!(json.contains("\"repeated\":[\"A\"]"));
    }
}
