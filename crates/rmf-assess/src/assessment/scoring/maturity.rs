use serde::{Deserialize, Serialize};

/// Ordinal maturity classification of a 0-5 average score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaturityLevel {
    Initial,
    Developing,
    Defined,
    Managed,
    Optimizing,
}

impl MaturityLevel {
    /// Five-way partition with inclusive upper bounds. Total over any `f64`:
    /// out-of-range inputs resolve to the nearest partition because the
    /// comparisons degrade gracefully.
    pub fn classify(avg_score: f64) -> Self {
        if avg_score <= 1.5 {
            MaturityLevel::Initial
        } else if avg_score <= 2.5 {
            MaturityLevel::Developing
        } else if avg_score <= 3.5 {
            MaturityLevel::Defined
        } else if avg_score <= 4.5 {
            MaturityLevel::Managed
        } else {
            MaturityLevel::Optimizing
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            MaturityLevel::Initial => "Initial",
            MaturityLevel::Developing => "Developing",
            MaturityLevel::Defined => "Defined",
            MaturityLevel::Managed => "Managed",
            MaturityLevel::Optimizing => "Optimizing",
        }
    }
}

/// Reference row served by the maturity-levels endpoint.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MaturityLevelInfo {
    pub level: MaturityLevel,
    pub score_band: &'static str,
    pub description: &'static str,
}

pub fn reference_levels() -> Vec<MaturityLevelInfo> {
    vec![
        MaturityLevelInfo {
            level: MaturityLevel::Initial,
            score_band: "0.0 - 1.5",
            description: "Ad hoc practices; AI risks handled reactively without documented processes.",
        },
        MaturityLevelInfo {
            level: MaturityLevel::Developing,
            score_band: "1.6 - 2.5",
            description: "Early practices emerging; some processes defined but inconsistently applied.",
        },
        MaturityLevelInfo {
            level: MaturityLevel::Defined,
            score_band: "2.6 - 3.5",
            description: "Documented, repeatable processes in place across most AI activities.",
        },
        MaturityLevelInfo {
            level: MaturityLevel::Managed,
            score_band: "3.6 - 4.5",
            description: "Processes measured and controlled; risk data drives decisions.",
        },
        MaturityLevelInfo {
            level: MaturityLevel::Optimizing,
            score_band: "4.6 - 5.0",
            description: "Continuous improvement; AI risk management embedded in organizational culture.",
        },
    ]
}
