//! Per-source report lines and batch aggregation.
//!
//! Each source file is processed independently; a failure is recorded with
//! its label and error category and never aborts the remaining files. The
//! batch serializes to JSON for machine consumption and renders a one-line
//! human summary for stdout.

use crate::domain::{PhotonYield, YieldError};
use serde::Serialize;

/// `"<label>: <value, 4 dp> µmol/(Lm*s)"` with value in micromoles.
pub fn quantum_yield_line(label: &str, result: &PhotonYield) -> String {
    format!(
        "{label}: {:.4} µmol/(Lm*s)",
        result.micromol_per_lumen_second()
    )
}

/// `"<label>: <value, 2 dp> lm/W"`.
pub fn efficacy_line(label: &str, result: &PhotonYield) -> String {
    format!("{label}: {:.2} lm/W", result.lm_per_watt)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SourceOutcome {
    Ok {
        label: String,
        #[serde(rename = "yield")]
        result: PhotonYield,
    },
    Failed {
        label: String,
        #[serde(rename = "errorKind")]
        error_kind: String,
        message: String,
    },
}

impl SourceOutcome {
    pub fn label(&self) -> &str {
        match self {
            Self::Ok { label, .. } | Self::Failed { label, .. } => label,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchReport {
    pub outcomes: Vec<SourceOutcome>,
}

impl BatchReport {
    pub fn push_success(&mut self, label: impl Into<String>, result: PhotonYield) {
        self.outcomes.push(SourceOutcome::Ok {
            label: label.into(),
            result,
        });
    }

    pub fn push_failure(&mut self, label: impl Into<String>, error: &YieldError) {
        self.outcomes.push(SourceOutcome::Failed {
            label: label.into(),
            error_kind: error.category().to_string(),
            message: error.to_string(),
        });
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, SourceOutcome::Failed { .. }))
            .count()
    }

    pub fn has_failures(&self) -> bool {
        self.failed_count() > 0
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

pub fn render_human_summary(report: &BatchReport) -> String {
    let total = report.outcomes.len();
    let failed = report.failed_count();
    if failed == 0 {
        format!("Processed {total} source file(s).")
    } else {
        format!("Processed {total} source file(s), {failed} failed.")
    }
}

#[cfg(test)]
mod tests {
    use super::{BatchReport, SourceOutcome, efficacy_line, quantum_yield_line, render_human_summary};
    use crate::domain::{DegenerateCurveError, PhotonYield, YieldError};

    fn sample_yield() -> PhotonYield {
        PhotonYield {
            lm_per_watt: 243.128,
            mol_per_lumen_second: 1.9305e-8,
        }
    }

    #[test]
    fn report_lines_match_reference_formatting() {
        let result = sample_yield();
        assert_eq!(
            quantum_yield_line("CREE 2700K, 95CRI", &result),
            "CREE 2700K, 95CRI: 0.0193 µmol/(Lm*s)"
        );
        assert_eq!(
            efficacy_line("CREE 2700K, 95CRI", &result),
            "CREE 2700K, 95CRI: 243.13 lm/W"
        );
    }

    #[test]
    fn batch_tracks_failures_without_dropping_successes() {
        let mut report = BatchReport::default();
        report.push_success("good", sample_yield());
        report.push_failure(
            "bad",
            &YieldError::from(DegenerateCurveError::ZeroSpectralPower { integral: 0.0 }),
        );

        assert_eq!(report.outcomes.len(), 2);
        assert_eq!(report.failed_count(), 1);
        assert!(report.has_failures());
        assert_eq!(report.outcomes[0].label(), "good");
        assert_eq!(
            render_human_summary(&report),
            "Processed 2 source file(s), 1 failed."
        );
    }

    #[test]
    fn json_report_carries_status_and_error_kind() {
        let mut report = BatchReport::default();
        report.push_success("good", sample_yield());
        report.push_failure(
            "bad",
            &YieldError::from(DegenerateCurveError::ZeroParIntegral { integral: 0.0 }),
        );

        let json = report.to_json().expect("report should serialize");
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
        let outcomes = parsed["outcomes"].as_array().expect("outcomes array");
        assert_eq!(outcomes[0]["status"], "ok");
        assert!(outcomes[0]["yield"]["lmPerWatt"].is_f64());
        assert!(outcomes[0]["yield"]["molPerLumenSecond"].is_f64());
        assert_eq!(outcomes[1]["status"], "failed");
        assert_eq!(outcomes[1]["errorKind"], "degenerate-curve");
    }

    #[test]
    fn clean_batch_renders_plain_summary() {
        let mut report = BatchReport::default();
        report.push_success("only", sample_yield());
        assert!(!report.has_failures());
        assert_eq!(render_human_summary(&report), "Processed 1 source file(s).");
        assert!(matches!(report.outcomes[0], SourceOutcome::Ok { .. }));
    }
}
