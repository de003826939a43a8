use super::{FrameworkFunction, QuestionSpec};

pub(super) fn standard_functions() -> Vec<FrameworkFunction> {
    vec![
        FrameworkFunction {
            id: "govern",
            code: "GV",
            name: "Govern",
            color: "#002FA7",
        },
        FrameworkFunction {
            id: "map",
            code: "MP",
            name: "Map",
            color: "#0F172A",
        },
        FrameworkFunction {
            id: "measure",
            code: "MS",
            name: "Measure",
            color: "#16A34A",
        },
        FrameworkFunction {
            id: "manage",
            code: "MG",
            name: "Manage",
            color: "#DC2626",
        },
    ]
}

fn q(
    id: &'static str,
    function: &'static str,
    category: &'static str,
    category_name: &'static str,
    text: &'static str,
    weight: f64,
) -> QuestionSpec {
    QuestionSpec {
        id,
        function,
        category,
        category_name,
        text,
        weight,
    }
}

pub(super) fn standard_questions() -> Vec<QuestionSpec> {
    vec![
        // Govern
        q("gv1_q1", "govern", "GV.1", "AI Risk Management Policies",
            "A documented AI risk management policy defines risk tolerance, governance structure, and management procedures.", 2.0),
        q("gv1_q2", "govern", "GV.1", "AI Risk Management Policies",
            "AI policies are reviewed on a defined cadence and updated when systems or regulations change.", 1.0),
        q("gv1_q3", "govern", "GV.1", "AI Risk Management Policies",
            "AI risk management procedures are aligned with the laws and regulations that apply to our systems.", 1.0),
        q("gv2_q1", "govern", "GV.2", "Accountability Structures",
            "Roles and responsibilities for AI risk management are clearly assigned across the organization.", 2.0),
        q("gv2_q2", "govern", "GV.2", "Accountability Structures",
            "A senior leader or governance committee is accountable for AI risk decisions.", 1.0),
        q("gv2_q3", "govern", "GV.2", "Accountability Structures",
            "AI risk decisions are documented with audit trails and sign-off records.", 1.0),
        q("gv3_q1", "govern", "GV.3", "Workforce Diversity & AI Literacy",
            "Staff who build or operate AI systems receive role-based risk and ethics training.", 1.0),
        q("gv3_q2", "govern", "GV.3", "Workforce Diversity & AI Literacy",
            "AI teams include multidisciplinary perspectives beyond engineering, such as ethics, legal, and domain expertise.", 1.0),
        q("gv3_q3", "govern", "GV.3", "Workforce Diversity & AI Literacy",
            "AI literacy programs reach decision makers outside the technical teams.", 1.0),
        q("gv4_q1", "govern", "GV.4", "Organizational Commitments",
            "Responsible AI principles are published and endorsed by senior leadership.", 1.0),
        q("gv4_q2", "govern", "GV.4", "Organizational Commitments",
            "The organizational culture encourages raising AI risk concerns without penalty.", 1.0),
        q("gv5_q1", "govern", "GV.5", "Stakeholder Engagement",
            "External stakeholders have channels to provide input on our AI systems.", 1.0),
        q("gv5_q2", "govern", "GV.5", "Stakeholder Engagement",
            "Stakeholder feedback is tracked and incorporated into AI risk decisions.", 1.0),
        q("gv5_q3", "govern", "GV.5", "Stakeholder Engagement",
            "Engagement includes communities potentially affected by AI-driven outcomes.", 1.0),
        q("gv6_q1", "govern", "GV.6", "Oversight & Monitoring",
            "AI systems are subject to regular internal or third-party audits.", 2.0),
        q("gv6_q2", "govern", "GV.6", "Oversight & Monitoring",
            "A current inventory of AI systems in use is maintained, including purpose and responsible parties.", 1.0),
        q("gv6_q3", "govern", "GV.6", "Oversight & Monitoring",
            "Oversight findings feed back into policy updates and system changes.", 1.0),
        // Map
        q("mp1_q1", "map", "MP.1", "Context & Use Case Definition",
            "Each AI system's intended purpose and operational context are documented before deployment.", 2.0),
        q("mp1_q2", "map", "MP.1", "Context & Use Case Definition",
            "Known limitations and failure modes are recorded for each AI system.", 1.0),
        q("mp1_q3", "map", "MP.1", "Context & Use Case Definition",
            "User profiles and deployment environments are characterized for every AI use case.", 1.0),
        q("mp1_q4", "map", "MP.1", "Context & Use Case Definition",
            "Acceptable and unacceptable AI use cases are explicitly defined, including red lines.", 1.0),
        q("mp2_q1", "map", "MP.2", "AI System Categorization",
            "AI systems are classified by risk level using defined, repeatable criteria.", 2.0),
        q("mp2_q2", "map", "MP.2", "AI System Categorization",
            "Risk categorization considers potential impact to individuals and society, not only the business.", 1.0),
        q("mp2_q3", "map", "MP.2", "AI System Categorization",
            "Categorization is revisited when a system, its data, or its context changes.", 1.0),
        q("mp3_q1", "map", "MP.3", "Benefits & Costs Analysis",
            "Expected benefits of AI systems are weighed against potential harms before launch.", 1.0),
        q("mp3_q2", "map", "MP.3", "Benefits & Costs Analysis",
            "Cost-benefit analyses include social and environmental dimensions.", 1.0),
        q("mp3_q3", "map", "MP.3", "Benefits & Costs Analysis",
            "Go/no-go decisions reference a documented benefit-risk tradeoff.", 1.0),
        q("mp4_q1", "map", "MP.4", "Risk & Impact Identification",
            "Systematic impact assessments cover bias, privacy, data quality, and safety risks.", 2.0),
        q("mp4_q2", "map", "MP.4", "Risk & Impact Identification",
            "Adversarial threats such as data poisoning, evasion, and model manipulation are modeled.", 1.0),
        q("mp4_q3", "map", "MP.4", "Risk & Impact Identification",
            "Data provenance and quality risks are identified for each AI system.", 1.0),
        q("mp5_q1", "map", "MP.5", "Stakeholder Impact Assessment",
            "Stakeholders affected by each AI system are identified and mapped.", 1.0),
        q("mp5_q2", "map", "MP.5", "Stakeholder Impact Assessment",
            "Differential impacts on vulnerable populations are assessed.", 1.0),
        q("mp5_q3", "map", "MP.5", "Stakeholder Impact Assessment",
            "Impact findings are communicated to the decision makers accountable for the system.", 1.0),
        // Measure
        q("ms1_q1", "measure", "MS.1", "Metrics & Methodologies",
            "Trustworthiness metrics covering accuracy, robustness, fairness, and safety are defined.", 2.0),
        q("ms1_q2", "measure", "MS.1", "Metrics & Methodologies",
            "Measurement methodologies are documented and repeatable across teams.", 1.0),
        q("ms1_q3", "measure", "MS.1", "Metrics & Methodologies",
            "Performance baselines are recorded for deployed AI systems to enable trend analysis.", 1.0),
        q("ms1_q4", "measure", "MS.1", "Metrics & Methodologies",
            "Fairness metrics are selected appropriately for each use case and population.", 1.0),
        q("ms2_q1", "measure", "MS.2", "AI System Evaluation",
            "Formal testing, evaluation, verification, and validation processes are applied to AI systems.", 2.0),
        q("ms2_q2", "measure", "MS.2", "AI System Evaluation",
            "High-risk systems undergo adversarial or red-team testing.", 1.0),
        q("ms2_q3", "measure", "MS.2", "AI System Evaluation",
            "Evaluation results are documented and inform release decisions.", 1.0),
        q("ms2_q4", "measure", "MS.2", "AI System Evaluation",
            "Independent parties evaluate systems where the risk level warrants it.", 1.0),
        q("ms3_q1", "measure", "MS.3", "Transparency & Explainability",
            "AI-driven decisions can be explained to affected users at an appropriate level of detail.", 1.0),
        q("ms3_q2", "measure", "MS.3", "Transparency & Explainability",
            "Model cards, data sheets, or equivalent transparency documentation exist for AI systems.", 1.0),
        q("ms3_q3", "measure", "MS.3", "Transparency & Explainability",
            "Explainability techniques are deployed for high-impact automated decisions.", 1.0),
        q("ms4_q1", "measure", "MS.4", "Documentation & Monitoring",
            "Production AI systems are continuously monitored for performance, drift, and anomalies.", 2.0),
        q("ms4_q2", "measure", "MS.4", "Documentation & Monitoring",
            "Monitoring thresholds trigger alerts with defined response procedures.", 1.0),
        q("ms4_q3", "measure", "MS.4", "Documentation & Monitoring",
            "Monitoring records are retained to support audits and incident review.", 1.0),
        // Manage
        q("mg1_q1", "manage", "MG.1", "Risk Prioritization",
            "Identified AI risks are prioritized using likelihood and impact.", 2.0),
        q("mg1_q2", "manage", "MG.1", "Risk Prioritization",
            "Prioritization accounts for regulatory exposure and urgency.", 1.0),
        q("mg1_q3", "manage", "MG.1", "Risk Prioritization",
            "Risk priorities are reviewed on a defined schedule.", 1.0),
        q("mg1_q4", "manage", "MG.1", "Risk Prioritization",
            "Escalation criteria exist for risks that exceed predefined thresholds.", 1.0),
        q("mg2_q1", "manage", "MG.2", "Risk Treatment Strategies",
            "Documented treatment plans exist for identified AI risks, with owners and timelines.", 2.0),
        q("mg2_q2", "manage", "MG.2", "Risk Treatment Strategies",
            "An AI-specific incident response capability is established and exercised.", 1.0),
        q("mg2_q3", "manage", "MG.2", "Risk Treatment Strategies",
            "Residual risk is formally accepted by accountable owners.", 1.0),
        q("mg2_q4", "manage", "MG.2", "Risk Treatment Strategies",
            "The effectiveness of risk treatments is verified after implementation.", 1.0),
        q("mg3_q1", "manage", "MG.3", "Third-Party Risk Management",
            "Third-party AI components and services are risk-assessed before adoption.", 1.0),
        q("mg3_q2", "manage", "MG.3", "Third-Party Risk Management",
            "Vendor AI practices are monitored over the life of the engagement.", 1.0),
        q("mg3_q3", "manage", "MG.3", "Third-Party Risk Management",
            "Contracts define AI risk responsibilities with third parties.", 1.0),
        q("mg4_q1", "manage", "MG.4", "Deployment & Post-Deployment",
            "Pre-deployment reviews gate AI system launches with go/no-go criteria.", 2.0),
        q("mg4_q2", "manage", "MG.4", "Deployment & Post-Deployment",
            "Human override and intervention mechanisms exist for AI-driven decisions.", 1.0),
        q("mg4_q3", "manage", "MG.4", "Deployment & Post-Deployment",
            "Post-deployment changes are tracked and re-assessed for risk.", 1.0),
        q("mg4_q4", "manage", "MG.4", "Deployment & Post-Deployment",
            "Decommissioning procedures exist for retiring AI systems safely.", 1.0),
    ]
}
