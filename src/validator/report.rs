use std::fmt::{self, Write};

#[cfg(feature = "colorized_output")]
use console::style;

/// Severity of a check outcome, ordered from best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CheckStatus {
    /// Nothing to report
    Passed,
    /// Usable, but worth a look
    Warning,
    /// The stored gradient is wrong
    Failed,
}

impl CheckStatus {
    fn label(self) -> &'static str {
        match self {
            CheckStatus::Passed => "pass",
            CheckStatus::Warning => "warn",
            CheckStatus::Failed => "FAIL",
        }
    }
}

/// A named check and the steps or times it flagged
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationCheck {
    /// Name of the check
    pub name: &'static str,
    /// Worst outcome of the check
    pub status: CheckStatus,
    /// One entry per offending step, time or decoding error
    pub findings: Vec<String>,
}

impl ValidationCheck {
    pub(crate) fn passed(name: &'static str) -> Self {
        Self {
            name,
            status: CheckStatus::Passed,
            findings: Vec::new(),
        }
    }

    /// `severity` when anything was flagged, passed otherwise
    pub(crate) fn flagging(name: &'static str, severity: CheckStatus, findings: Vec<String>) -> Self {
        let status = if findings.is_empty() {
            CheckStatus::Passed
        } else {
            severity
        };
        Self {
            name,
            status,
            findings,
        }
    }
}

/// Diagnostics for one stored gradient.
///
/// Whether the gradient can feed a solvent estimate ([`is_usable`]) is kept
/// apart from the check tally: a gradient with a bad composition still
/// integrates, and an empty one passes every step check but yields nothing.
///
/// [`is_usable`]: ValidationReport::is_usable
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// What was validated (method name or file)
    pub subject: String,
    /// Steps the normalizer accepted; `None` when the gradient did not decode
    pub usable_steps: Option<usize>,
    /// Check results, in the order they ran
    pub checks: Vec<ValidationCheck>,
}

impl ValidationReport {
    /// Create an empty report for an undecoded gradient
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            usable_steps: None,
            checks: Vec::new(),
        }
    }

    /// Append a check result
    pub fn add_check(&mut self, check: ValidationCheck) {
        self.checks.push(check);
    }

    /// Look up a check by name
    pub fn check(&self, name: &str) -> Option<&ValidationCheck> {
        self.checks.iter().find(|c| c.name == name)
    }

    /// True when the gradient defines at least one interval to integrate
    pub fn is_usable(&self) -> bool {
        self.usable_steps.is_some_and(|n| n >= 2)
    }

    /// Worst status over all checks
    pub fn worst(&self) -> CheckStatus {
        self.checks
            .iter()
            .map(|c| c.status)
            .max()
            .unwrap_or(CheckStatus::Passed)
    }

    /// True when any check failed
    pub fn has_failures(&self) -> bool {
        self.worst() == CheckStatus::Failed
    }

    /// True when any check warned
    pub fn has_warnings(&self) -> bool {
        self.count(CheckStatus::Warning) > 0
    }

    /// Number of checks with the given status
    pub fn count(&self, status: CheckStatus) -> usize {
        self.checks.iter().filter(|c| c.status == status).count()
    }

    fn verdict(&self) -> String {
        match self.usable_steps {
            None => "gradient could not be decoded, no solvent estimate".to_string(),
            Some(0) => "no gradient data, solvent usage is zero".to_string(),
            Some(1) => "1 step, no interval to integrate, solvent usage is zero".to_string(),
            Some(n) => format!("{} steps, usable for solvent estimates", n),
        }
    }

    fn write_with(
        &self,
        out: &mut impl Write,
        paint: impl Fn(CheckStatus, &str) -> String,
    ) -> fmt::Result {
        writeln!(out, "{}: {}", self.subject, self.verdict())?;

        for check in &self.checks {
            writeln!(out, "  {} {}", paint(check.status, check.status.label()), check.name)?;
            for finding in &check.findings {
                writeln!(out, "         {}", finding)?;
            }
        }

        write!(
            out,
            "{} checks: {} passed, {} warnings, {} failed",
            self.checks.len(),
            self.count(CheckStatus::Passed),
            self.count(CheckStatus::Warning),
            self.count(CheckStatus::Failed)
        )
    }

    /// Render with status labels coloured (plain without `colorized_output`)
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            let mut out = String::new();
            let painted = self.write_with(&mut out, |status, label| match status {
                CheckStatus::Passed => style(label).green().to_string(),
                CheckStatus::Warning => style(label).yellow().to_string(),
                CheckStatus::Failed => style(label).red().bold().to_string(),
            });
            match painted {
                Ok(()) => out,
                Err(_) => self.to_string(),
            }
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            self.to_string()
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, |_, label| label.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_lists_each_finding() {
        let mut report = ValidationReport::new("Lipids RP");
        report.usable_steps = Some(3);
        report.add_check(ValidationCheck::passed("Flow rate"));
        report.add_check(ValidationCheck::flagging(
            "Composition",
            CheckStatus::Failed,
            vec!["A + B = 90 at 5 min".to_string(), "A + B = 110 at 8 min".to_string()],
        ));

        let text = report.to_string();
        assert!(text.starts_with("Lipids RP: 3 steps, usable for solvent estimates\n"));
        assert!(text.contains("  pass Flow rate\n"));
        assert!(text.contains("  FAIL Composition\n         A + B = 90 at 5 min\n         A + B = 110 at 8 min\n"));
        assert!(text.ends_with("2 checks: 1 passed, 0 warnings, 1 failed"));
    }

    #[test]
    fn test_usability_is_separate_from_tally() {
        let mut report = ValidationReport::new("Empty");
        report.usable_steps = Some(0);
        report.add_check(ValidationCheck::passed("Composition"));
        assert!(!report.has_failures());
        assert!(!report.is_usable());
        assert!(report.to_string().contains("no gradient data"));

        let undecoded = ValidationReport::new("Broken");
        assert!(!undecoded.is_usable());
        assert_eq!(undecoded.worst(), CheckStatus::Passed);
    }

    #[test]
    fn test_flagging_without_findings_passes() {
        let check = ValidationCheck::flagging("Time ordering", CheckStatus::Warning, Vec::new());
        assert_eq!(check.status, CheckStatus::Passed);
    }
}
