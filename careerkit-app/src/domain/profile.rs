use serde::{Deserialize, Serialize};

/// The organization is fixed for this deployment and not user-editable.
pub const ORGANIZATION: &str = "Tata Consultancy Services";

/// Selectable skills and the subtopics each one unlocks.
pub const SKILL_CATALOG: &[(&str, &[&str])] = &[
    (
        "SAP UI5 / Fiori",
        &[
            "Fiori Elements",
            "Smart Controls",
            "OData Binding",
            "Flexible Programming Model",
        ],
    ),
    (
        "CAPM (Node.js)",
        &["CDS Modeling", "Service Handlers", "Authorization", "Multitenancy"],
    ),
    (
        "SAP BTP / Cloud Foundry",
        &["Destinations", "XSUAA", "Connectivity", "Deployment"],
    ),
    (
        "OData / REST",
        &["Query Options", "Batch Requests", "Error Handling", "API Versioning"],
    ),
    (
        "JavaScript (ES2023)",
        &["Async/Await", "Modules", "Closures", "Promises"],
    ),
    (
        "MongoDB",
        &["Aggregation", "Indexing", "Schema Design", "Transactions"],
    ),
    (
        "Git / GitHub",
        &["Branching Strategy", "Code Review", "CI Pipelines", "Release Management"],
    ),
    (
        "GenAI / Prompt Engineering",
        &["Prompt Design", "RAG", "Evaluation", "Output Safety"],
    ),
];

macro_rules! labelled_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            pub fn from_label(label: &str) -> Option<Self> {
                match label {
                    $($label => Some($name::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

labelled_enum!(ExperienceBand {
    UpToTwo => "0-2 years",
    ThreeToFive => "3-5 years",
    SixToNine => "6-9 years",
    TenPlus => "10+ years",
});

labelled_enum!(JobLocation {
    Onsite => "Onsite",
    Hybrid => "Hybrid",
    Remote => "Remote",
});

labelled_enum!(Grade {
    SystemsEngineer => "Systems Engineer",
    ItAnalyst => "IT Analyst",
    AssistantConsultant => "Assistant Consultant",
    Consultant => "Consultant",
    SeniorConsultant => "Senior Consultant",
});

labelled_enum!(InterviewType {
    Technical => "Technical",
    Managerial => "Managerial",
    HrDiscussion => "HR Discussion",
});

labelled_enum!(CommunicationType {
    FaceToFace => "Face to Face",
    VideoCall => "Video Call",
    Telephonic => "Telephonic",
});

labelled_enum!(ManagerialFocus {
    Leadership => "Leadership",
    DeliveryOwnership => "Delivery Ownership",
    StakeholderManagement => "Stakeholder Management",
    TeamMentoring => "Team Mentoring",
});

labelled_enum!(QuestionStyle {
    ScenarioBased => "Scenario Based",
    Conceptual => "Conceptual",
    Mixed => "Mixed",
});

labelled_enum!(Tone {
    Formal => "Formal",
    Confident => "Confident",
    Friendly => "Friendly",
    Enthusiastic => "Enthusiastic",
});

labelled_enum!(FeedbackType {
    Constructive => "Constructive",
    Appreciative => "Appreciative",
    Balanced => "Balanced",
});

/// User-editable input record driving prompt personalization.
///
/// An empty `linkedin_url` means the field was left blank, which is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub employee_name: String,
    pub experience: ExperienceBand,
    pub organization: String,
    pub job_location: JobLocation,
    pub job_position: String,
    pub skills: Vec<String>,
    pub skill_subtopics: Vec<String>,
    pub grade: Grade,
    pub interview_type: InterviewType,
    pub communication_type: CommunicationType,
    pub managerial_focus: ManagerialFocus,
    pub question_style: QuestionStyle,
    pub tone: Tone,
    pub feedback_type: FeedbackType,
    pub linkedin_url: String,
}

impl Profile {
    /// Pre-filled demo values shown on first load.
    pub fn demo() -> Self {
        Self {
            employee_name: "Vinay Tiwari".to_string(),
            experience: ExperienceBand::TenPlus,
            organization: ORGANIZATION.to_string(),
            job_location: JobLocation::Hybrid,
            job_position: "Senior Software Developer".to_string(),
            skills: vec![
                "SAP UI5 / Fiori".to_string(),
                "CAPM (Node.js)".to_string(),
                "SAP BTP / Cloud Foundry".to_string(),
            ],
            skill_subtopics: vec!["Fiori Elements".to_string(), "CDS Modeling".to_string()],
            grade: Grade::AssistantConsultant,
            interview_type: InterviewType::Technical,
            communication_type: CommunicationType::VideoCall,
            managerial_focus: ManagerialFocus::DeliveryOwnership,
            question_style: QuestionStyle::ScenarioBased,
            tone: Tone::Confident,
            feedback_type: FeedbackType::Constructive,
            linkedin_url: "https://www.linkedin.com/in/vktiwari/".to_string(),
        }
    }

    /// Union of subtopics unlocked by the given skills, in catalog order.
    pub fn allowed_subtopics(skills: &[String]) -> Vec<&'static str> {
        SKILL_CATALOG
            .iter()
            .filter(|(skill, _)| skills.iter().any(|s| s == skill))
            .flat_map(|(_, subtopics)| subtopics.iter().copied())
            .collect()
    }

    /// Drops selected subtopics no longer covered by the selected skills,
    /// keeping `skill_subtopics` a subset of `allowed_subtopics(skills)`.
    pub fn prune_subtopics(&mut self) {
        let allowed = Self::allowed_subtopics(&self.skills);
        self.skill_subtopics.retain(|s| allowed.iter().any(|a| a == s));
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::demo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for tone in Tone::ALL {
            assert_eq!(Tone::from_label(tone.label()), Some(*tone));
        }
        assert_eq!(Grade::from_label("No Such Grade"), None);
    }

    #[test]
    fn allowed_subtopics_follow_selected_skills() {
        let skills = vec!["MongoDB".to_string()];
        let allowed = Profile::allowed_subtopics(&skills);
        assert!(allowed.contains(&"Aggregation"));
        assert!(!allowed.contains(&"Fiori Elements"));
    }

    #[test]
    fn prune_drops_orphaned_subtopics() {
        let mut profile = Profile::demo();
        profile.skill_subtopics = vec!["Fiori Elements".to_string(), "CDS Modeling".to_string()];
        profile.skills = vec!["CAPM (Node.js)".to_string()];
        profile.prune_subtopics();
        assert_eq!(profile.skill_subtopics, vec!["CDS Modeling".to_string()]);
    }

    #[test]
    fn demo_profile_satisfies_subtopic_invariant() {
        let profile = Profile::demo();
        let allowed = Profile::allowed_subtopics(&profile.skills);
        assert!(profile
            .skill_subtopics
            .iter()
            .all(|s| allowed.iter().any(|a| a == s)));
    }
}
