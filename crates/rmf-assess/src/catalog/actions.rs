use super::{ActionTemplate, CategoryActions, Severity};

pub(super) fn standard_action_groups() -> Vec<CategoryActions> {
    vec![
        CategoryActions {
            function: "govern",
            category: "GV.1",
            category_name: "AI Risk Management Policies",
            actions: vec![
                ActionTemplate {
                    severity: Severity::Critical,
                    threshold: 2.0,
                    title: "Develop AI Risk Management Policy Framework",
                    description: "Create a comprehensive AI risk management policy that defines risk tolerance, governance structure, and management procedures, aligned with applicable regulations.",
                    timeline: "0-3 months",
                    resources: "Policy team, Legal, CISO office",
                },
                ActionTemplate {
                    severity: Severity::High,
                    threshold: 3.0,
                    title: "Establish Policy Review Cycle",
                    description: "Implement quarterly policy reviews and annual comprehensive updates. Assign policy ownership and track compliance.",
                    timeline: "1-2 months",
                    resources: "Governance team",
                },
            ],
        },
        CategoryActions {
            function: "govern",
            category: "GV.2",
            category_name: "Accountability Structures",
            actions: vec![
                ActionTemplate {
                    severity: Severity::Critical,
                    threshold: 2.0,
                    title: "Define AI Governance Roles and Responsibilities",
                    description: "Establish a RACI matrix for AI risk management. Designate a senior accountable leader and form an AI governance committee.",
                    timeline: "0-2 months",
                    resources: "Executive leadership, HR",
                },
                ActionTemplate {
                    severity: Severity::High,
                    threshold: 3.0,
                    title: "Implement Decision Documentation Process",
                    description: "Create standardized templates and workflows for documenting AI risk decisions, including audit trails and sign-off records.",
                    timeline: "1-3 months",
                    resources: "IT, Compliance team",
                },
            ],
        },
        CategoryActions {
            function: "govern",
            category: "GV.3",
            category_name: "Workforce Diversity & AI Literacy",
            actions: vec![
                ActionTemplate {
                    severity: Severity::High,
                    threshold: 2.0,
                    title: "Launch AI Risk Management Training Program",
                    description: "Develop role-based training covering AI ethics, bias awareness, risk identification, and responsible AI principles for all relevant staff.",
                    timeline: "1-3 months",
                    resources: "HR, Training department, External trainers",
                },
                ActionTemplate {
                    severity: Severity::Medium,
                    threshold: 3.0,
                    title: "Diversify AI Teams",
                    description: "Recruit multidisciplinary talent including ethicists, social scientists, and domain experts to complement technical AI teams.",
                    timeline: "3-6 months",
                    resources: "HR, Hiring managers",
                },
            ],
        },
        CategoryActions {
            function: "govern",
            category: "GV.4",
            category_name: "Organizational Commitments",
            actions: vec![ActionTemplate {
                severity: Severity::Medium,
                threshold: 2.0,
                title: "Publish Responsible AI Principles",
                description: "Develop and publish organizational responsible AI principles and commitments, endorsed by senior leadership.",
                timeline: "1-2 months",
                resources: "Leadership, Communications",
            }],
        },
        CategoryActions {
            function: "govern",
            category: "GV.5",
            category_name: "Stakeholder Engagement",
            actions: vec![ActionTemplate {
                severity: Severity::Medium,
                threshold: 2.0,
                title: "Establish Stakeholder Feedback Channels",
                description: "Create mechanisms for external stakeholders to provide input on AI systems, including feedback portals and advisory groups.",
                timeline: "2-4 months",
                resources: "Product management, Community relations",
            }],
        },
        CategoryActions {
            function: "govern",
            category: "GV.6",
            category_name: "Oversight & Monitoring",
            actions: vec![
                ActionTemplate {
                    severity: Severity::Critical,
                    threshold: 2.0,
                    title: "Implement AI System Audit Program",
                    description: "Establish regular audit cycles for AI systems covering compliance, performance, bias, and security, with internal and third-party auditors.",
                    timeline: "1-3 months",
                    resources: "Internal audit, External auditors",
                },
                ActionTemplate {
                    severity: Severity::High,
                    threshold: 3.0,
                    title: "Build AI System Registry",
                    description: "Create and maintain a comprehensive inventory of all AI systems in use, including purpose, risk level, data sources, and responsible parties.",
                    timeline: "1-2 months",
                    resources: "IT, Data governance",
                },
            ],
        },
        CategoryActions {
            function: "map",
            category: "MP.1",
            category_name: "Context & Use Case Definition",
            actions: vec![
                ActionTemplate {
                    severity: Severity::Critical,
                    threshold: 2.0,
                    title: "Document AI Use Cases and Boundaries",
                    description: "Create comprehensive documentation for each AI system including intended purpose, operational context, user profiles, and known limitations.",
                    timeline: "0-2 months",
                    resources: "Product teams, Data scientists",
                },
                ActionTemplate {
                    severity: Severity::High,
                    threshold: 3.0,
                    title: "Define Acceptable Use Criteria",
                    description: "Establish clear criteria for acceptable and unacceptable AI use cases, including red lines that must not be crossed.",
                    timeline: "1-2 months",
                    resources: "Ethics committee, Legal",
                },
            ],
        },
        CategoryActions {
            function: "map",
            category: "MP.2",
            category_name: "AI System Categorization",
            actions: vec![ActionTemplate {
                severity: Severity::Critical,
                threshold: 2.0,
                title: "Implement Risk Tiering Framework",
                description: "Develop and apply a risk classification system for all AI systems based on potential impact to individuals and society.",
                timeline: "1-2 months",
                resources: "Risk management, AI teams",
            }],
        },
        CategoryActions {
            function: "map",
            category: "MP.3",
            category_name: "Benefits & Costs Analysis",
            actions: vec![ActionTemplate {
                severity: Severity::Medium,
                threshold: 2.0,
                title: "Develop AI Cost-Benefit Analysis Template",
                description: "Create standardized templates for evaluating AI system benefits against risks, including social and environmental dimensions.",
                timeline: "1-2 months",
                resources: "Finance, Risk team",
            }],
        },
        CategoryActions {
            function: "map",
            category: "MP.4",
            category_name: "Risk & Impact Identification",
            actions: vec![
                ActionTemplate {
                    severity: Severity::Critical,
                    threshold: 2.0,
                    title: "Conduct Comprehensive AI Impact Assessments",
                    description: "Perform systematic impact assessments covering bias, data quality, adversarial risks, and societal impacts for all high-risk AI systems.",
                    timeline: "1-3 months",
                    resources: "Data science, Legal, Ethics",
                },
                ActionTemplate {
                    severity: Severity::High,
                    threshold: 3.0,
                    title: "Implement AI Threat Modeling",
                    description: "Conduct adversarial threat modeling for AI systems, including data poisoning, evasion attacks, and model manipulation scenarios.",
                    timeline: "2-4 months",
                    resources: "Security team, AI engineers",
                },
            ],
        },
        CategoryActions {
            function: "map",
            category: "MP.5",
            category_name: "Stakeholder Impact Assessment",
            actions: vec![ActionTemplate {
                severity: Severity::High,
                threshold: 2.0,
                title: "Map and Assess Stakeholder Impacts",
                description: "Identify all stakeholders affected by AI systems and assess differential impacts, with special attention to vulnerable populations.",
                timeline: "1-3 months",
                resources: "Product, DEI team, Community outreach",
            }],
        },
        CategoryActions {
            function: "measure",
            category: "MS.1",
            category_name: "Metrics & Methodologies",
            actions: vec![
                ActionTemplate {
                    severity: Severity::Critical,
                    threshold: 2.0,
                    title: "Define AI Trustworthiness Metrics",
                    description: "Establish KPIs for AI trustworthiness including accuracy, robustness, fairness, and safety metrics.",
                    timeline: "1-2 months",
                    resources: "Data science, Quality assurance",
                },
                ActionTemplate {
                    severity: Severity::High,
                    threshold: 3.0,
                    title: "Establish Performance Baselines",
                    description: "Document baseline measurements for all AI systems to enable trend analysis and drift detection.",
                    timeline: "1-2 months",
                    resources: "ML engineering",
                },
            ],
        },
        CategoryActions {
            function: "measure",
            category: "MS.2",
            category_name: "AI System Evaluation",
            actions: vec![
                ActionTemplate {
                    severity: Severity::Critical,
                    threshold: 2.0,
                    title: "Implement TEVV Program",
                    description: "Establish formal testing, evaluation, verification, and validation processes for AI systems with documented test plans and results.",
                    timeline: "2-4 months",
                    resources: "QA, ML engineering, External evaluators",
                },
                ActionTemplate {
                    severity: Severity::High,
                    threshold: 3.0,
                    title: "Conduct Red Team Testing",
                    description: "Implement adversarial red-teaming exercises for high-risk AI systems to test robustness and identify vulnerabilities.",
                    timeline: "2-3 months",
                    resources: "Security team, External red team",
                },
            ],
        },
        CategoryActions {
            function: "measure",
            category: "MS.3",
            category_name: "Transparency & Explainability",
            actions: vec![
                ActionTemplate {
                    severity: Severity::High,
                    threshold: 2.0,
                    title: "Implement Explainability Framework",
                    description: "Deploy explainability tooling and create user-appropriate explanations for AI-driven decisions.",
                    timeline: "2-4 months",
                    resources: "ML engineering, UX team",
                },
                ActionTemplate {
                    severity: Severity::Medium,
                    threshold: 3.0,
                    title: "Create Transparency Documentation",
                    description: "Develop model cards, data sheets, and transparency reports for all AI systems, tailored to different stakeholder audiences.",
                    timeline: "1-3 months",
                    resources: "Documentation team, Data science",
                },
            ],
        },
        CategoryActions {
            function: "measure",
            category: "MS.4",
            category_name: "Documentation & Monitoring",
            actions: vec![
                ActionTemplate {
                    severity: Severity::Critical,
                    threshold: 2.0,
                    title: "Deploy Continuous AI Monitoring",
                    description: "Implement real-time monitoring for AI model performance, data drift, and anomaly detection with alerting capabilities.",
                    timeline: "2-4 months",
                    resources: "MLOps, Infrastructure team",
                },
                ActionTemplate {
                    severity: Severity::High,
                    threshold: 3.0,
                    title: "Build Drift Detection Pipeline",
                    description: "Implement automated model drift detection with defined thresholds, alerts, and retraining triggers.",
                    timeline: "2-3 months",
                    resources: "ML engineering, DevOps",
                },
            ],
        },
        CategoryActions {
            function: "manage",
            category: "MG.1",
            category_name: "Risk Prioritization",
            actions: vec![
                ActionTemplate {
                    severity: Severity::Critical,
                    threshold: 2.0,
                    title: "Develop Risk Prioritization Framework",
                    description: "Create a systematic risk prioritization methodology incorporating likelihood, impact, urgency, and regulatory exposure factors.",
                    timeline: "1-2 months",
                    resources: "Risk management, Leadership",
                },
                ActionTemplate {
                    severity: Severity::High,
                    threshold: 3.0,
                    title: "Define Risk Escalation Procedures",
                    description: "Establish clear escalation criteria and procedures for when AI risks exceed predefined thresholds.",
                    timeline: "1-2 months",
                    resources: "Risk management, Executive team",
                },
            ],
        },
        CategoryActions {
            function: "manage",
            category: "MG.2",
            category_name: "Risk Treatment Strategies",
            actions: vec![
                ActionTemplate {
                    severity: Severity::Critical,
                    threshold: 2.0,
                    title: "Create AI Risk Treatment Plans",
                    description: "Develop documented treatment plans for identified AI risks including mitigations, timelines, responsible parties, and success criteria.",
                    timeline: "1-3 months",
                    resources: "Risk team, AI teams, Legal",
                },
                ActionTemplate {
                    severity: Severity::Critical,
                    threshold: 3.0,
                    title: "Build AI Incident Response Capability",
                    description: "Develop and test AI-specific incident response plans including detection, containment, remediation, and communication procedures.",
                    timeline: "2-4 months",
                    resources: "Security, Communications, Legal",
                },
            ],
        },
        CategoryActions {
            function: "manage",
            category: "MG.3",
            category_name: "Third-Party Risk Management",
            actions: vec![
                ActionTemplate {
                    severity: Severity::High,
                    threshold: 2.0,
                    title: "Implement Third-Party AI Risk Assessment",
                    description: "Develop vendor assessment questionnaires and due diligence processes for evaluating third-party AI components and services.",
                    timeline: "1-3 months",
                    resources: "Procurement, Security, Legal",
                },
                ActionTemplate {
                    severity: Severity::Medium,
                    threshold: 3.0,
                    title: "Establish Vendor Monitoring Program",
                    description: "Create ongoing monitoring processes for third-party AI providers, including performance tracking and periodic reassessments.",
                    timeline: "2-4 months",
                    resources: "Vendor management, IT",
                },
            ],
        },
        CategoryActions {
            function: "manage",
            category: "MG.4",
            category_name: "Deployment & Post-Deployment",
            actions: vec![
                ActionTemplate {
                    severity: Severity::Critical,
                    threshold: 2.0,
                    title: "Implement AI Deployment Gate Process",
                    description: "Create mandatory pre-deployment review checklists and approval workflows with defined go/no-go criteria for AI system launches.",
                    timeline: "1-2 months",
                    resources: "Product, Engineering, Risk team",
                },
                ActionTemplate {
                    severity: Severity::High,
                    threshold: 3.0,
                    title: "Build Human Override Capabilities",
                    description: "Design and implement human override and intervention mechanisms for AI-driven decisions, with clear escalation paths.",
                    timeline: "2-4 months",
                    resources: "Engineering, Operations",
                },
            ],
        },
    ]
}
