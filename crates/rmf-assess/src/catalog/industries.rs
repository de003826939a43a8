use serde::Serialize;

/// Industry-specific guidance surfaced alongside assessment results.
#[derive(Debug, Clone, Serialize)]
pub struct IndustryProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub code: &'static str,
    pub regulations: Vec<&'static str>,
    pub description: &'static str,
    pub recommendations: Vec<IndustryRecommendation>,
}

/// One guidance entry, anchored to a framework function.
#[derive(Debug, Clone, Serialize)]
pub struct IndustryRecommendation {
    pub function: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

fn rec(
    function: &'static str,
    title: &'static str,
    detail: &'static str,
) -> IndustryRecommendation {
    IndustryRecommendation {
        function,
        title,
        detail,
    }
}

pub fn industry_profiles() -> Vec<IndustryProfile> {
    vec![
        IndustryProfile {
            id: "healthcare",
            name: "Healthcare & Life Sciences",
            code: "HLS",
            regulations: vec!["HIPAA", "FDA SaMD guidance", "EU AI Act (high-risk)"],
            description: "Clinical decision support, diagnostics, and patient-facing AI carry direct safety impact and strict privacy obligations.",
            recommendations: vec![
                rec("govern", "Clinical AI oversight board",
                    "Stand up a clinical governance body with medical, legal, and data science representation for every patient-impacting model."),
                rec("map", "Classify patient-impacting systems as high risk",
                    "Treat any system influencing diagnosis or treatment as high risk regardless of its technical simplicity."),
                rec("measure", "Validate against clinical baselines",
                    "Benchmark model performance against existing clinical practice across demographic subgroups before deployment."),
            ],
        },
        IndustryProfile {
            id: "financial_services",
            name: "Financial Services",
            code: "FIN",
            regulations: vec!["SR 11-7", "ECOA / Fair Lending", "GDPR", "EU AI Act"],
            description: "Credit, fraud, and trading models operate under mature model-risk regimes that AI governance must extend, not duplicate.",
            recommendations: vec![
                rec("govern", "Extend model risk management to AI",
                    "Fold AI-specific risks (drift, opacity, fairness) into the existing SR 11-7 model inventory and validation cycle."),
                rec("measure", "Adverse action explainability",
                    "Ensure credit decisions provide specific, accurate reason codes derived from the actual model behavior."),
                rec("manage", "Fair lending monitoring",
                    "Monitor approval and pricing outcomes for disparate impact on a fixed cadence with documented remediation triggers."),
            ],
        },
        IndustryProfile {
            id: "technology",
            name: "Technology & Software",
            code: "TEC",
            regulations: vec!["EU AI Act", "State privacy laws", "FTC Section 5"],
            description: "Product-embedded AI ships fast and at scale; governance must keep pace with continuous delivery.",
            recommendations: vec![
                rec("govern", "Embed review in the release train",
                    "Make AI risk review a stage in the standard release process rather than a separate committee queue."),
                rec("map", "Track downstream use",
                    "Document how customers can compose or repurpose AI features beyond the intended use cases."),
                rec("manage", "Kill-switch discipline",
                    "Every production model needs a tested rollback and degradation path reachable within minutes."),
            ],
        },
        IndustryProfile {
            id: "manufacturing",
            name: "Manufacturing & Industrial",
            code: "MFG",
            regulations: vec!["ISO/IEC 42001", "Machinery Directive", "OSHA"],
            description: "AI in physical processes couples model failures to safety and production incidents.",
            recommendations: vec![
                rec("map", "Safety-rated risk tiers",
                    "Align AI risk categorization with existing functional-safety classifications on the line."),
                rec("measure", "Environment drift monitoring",
                    "Monitor for sensor degradation and environmental drift, not just statistical model drift."),
                rec("manage", "Human-in-the-loop overrides",
                    "Keep physical override controls independent of the AI control path."),
            ],
        },
        IndustryProfile {
            id: "retail",
            name: "Retail & Consumer",
            code: "RTL",
            regulations: vec!["FTC Section 5", "State privacy laws", "GDPR"],
            description: "Personalization, pricing, and supply-chain AI shape consumer outcomes and attract fairness scrutiny.",
            recommendations: vec![
                rec("govern", "Pricing algorithm accountability",
                    "Assign a named owner for dynamic pricing behavior and document the bounds it may operate within."),
                rec("measure", "Recommendation audit trail",
                    "Retain enough decision context to reconstruct why a consumer saw a given price or offer."),
            ],
        },
        IndustryProfile {
            id: "government",
            name: "Government & Public Sector",
            code: "GOV",
            regulations: vec!["OMB M-24-10", "State AI acts", "Administrative procedure law"],
            description: "Public-sector AI decisions demand due process, transparency, and equity beyond commercial norms.",
            recommendations: vec![
                rec("govern", "Public AI use inventory",
                    "Publish and maintain a public inventory of AI systems that affect benefits, enforcement, or services."),
                rec("map", "Due process impact screening",
                    "Screen every use case for decisions that trigger notice, explanation, or appeal rights."),
                rec("manage", "Appeal and redress channels",
                    "Provide a human appeal path for any consequential automated determination."),
            ],
        },
        IndustryProfile {
            id: "education",
            name: "Education",
            code: "EDU",
            regulations: vec!["FERPA", "COPPA", "State student privacy laws"],
            description: "Learning analytics and automated assessment affect minors and long-term opportunity.",
            recommendations: vec![
                rec("map", "Student impact assessment",
                    "Assess proctoring, grading, and placement systems for differential impact across student populations."),
                rec("measure", "Accuracy across populations",
                    "Validate assessment models separately for English learners, students with disabilities, and other protected groups."),
            ],
        },
    ]
}
