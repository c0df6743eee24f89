//! How a batch's success flag is derived from its members.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Rule for deriving a batch's success flag from its members.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuccessPolicy {
    /// The flag of the last record encountered while grouping.
    ///
    /// Depends on input order. With the usual newest-first listing this is
    /// the oldest injection of the batch.
    #[default]
    LastSeen,

    /// The batch succeeded only if every member succeeded.
    AllSucceeded,
}

impl SuccessPolicy {
    /// Fold one more member's outcome into the running flag
    pub(crate) fn merge(&self, current: bool, next: bool) -> bool {
        match self {
            SuccessPolicy::LastSeen => next,
            SuccessPolicy::AllSucceeded => current && next,
        }
    }

    /// Returns all available policy names.
    pub fn variants() -> &'static [&'static str] {
        &["last-seen", "all-succeeded"]
    }
}

impl fmt::Display for SuccessPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuccessPolicy::LastSeen => write!(f, "last-seen"),
            SuccessPolicy::AllSucceeded => write!(f, "all-succeeded"),
        }
    }
}

impl FromStr for SuccessPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "last-seen" | "lastseen" | "last" => Ok(SuccessPolicy::LastSeen),
            "all-succeeded" | "allsucceeded" | "all" => Ok(SuccessPolicy::AllSucceeded),
            _ => Err(format!(
                "Unknown success policy '{}'. Valid options: {}",
                s,
                SuccessPolicy::variants().join(", ")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_merge() {
        assert!(SuccessPolicy::LastSeen.merge(false, true));
        assert!(!SuccessPolicy::LastSeen.merge(true, false));
        assert!(!SuccessPolicy::AllSucceeded.merge(false, true));
        assert!(SuccessPolicy::AllSucceeded.merge(true, true));
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(SuccessPolicy::from_str("last-seen").unwrap(), SuccessPolicy::LastSeen);
        assert_eq!(SuccessPolicy::from_str("ALL").unwrap(), SuccessPolicy::AllSucceeded);
        assert!(SuccessPolicy::from_str("majority").is_err());
        assert_eq!(SuccessPolicy::AllSucceeded.to_string(), "all-succeeded");
    }
}
