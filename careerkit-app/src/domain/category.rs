use serde::{Deserialize, Serialize};

/// The nine content deliverables the assistant can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    CoverLetter,
    ConfirmationEmail,
    FollowUpEmail,
    FeedbackEmail,
    MentorshipRequestEmail,
    ReferenceRequestEmail,
    RejectionFollowUpEmail,
    BehavioralQuestions,
    TechnicalQuestions,
}

impl Category {
    pub const ALL: &'static [Category] = &[
        Category::CoverLetter,
        Category::ConfirmationEmail,
        Category::FollowUpEmail,
        Category::FeedbackEmail,
        Category::MentorshipRequestEmail,
        Category::ReferenceRequestEmail,
        Category::RejectionFollowUpEmail,
        Category::BehavioralQuestions,
        Category::TechnicalQuestions,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::CoverLetter => "Cover Letter",
            Category::ConfirmationEmail => "Interview Confirmation Email",
            Category::FollowUpEmail => "Follow-Up Email After Interview",
            Category::FeedbackEmail => "Interview Feedback Email",
            Category::MentorshipRequestEmail => "Mentorship Request Email",
            Category::ReferenceRequestEmail => "Reference Request Email",
            Category::RejectionFollowUpEmail => "Rejection Follow-Up Email",
            Category::BehavioralQuestions => "Behavioral Interview Questions",
            Category::TechnicalQuestions => "Technical Interview Questions",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }

    /// Whether the deliverable is a numbered question list rather than
    /// a letter or email.
    pub fn is_question_list(&self) -> bool {
        matches!(
            self,
            Category::BehavioralQuestions | Category::TechnicalQuestions
        )
    }

    /// Lower-case file stem used for the plain-text download.
    pub fn slug(&self) -> String {
        self.label()
            .to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .collect::<String>()
            .split('-')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_unique_and_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(*category));
        }
        assert_eq!(Category::from_label("Unknown Kind"), None);
    }

    #[test]
    fn slug_is_filename_safe() {
        assert_eq!(
            Category::FollowUpEmail.slug(),
            "follow-up-email-after-interview"
        );
        for category in Category::ALL {
            assert!(category
                .slug()
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }
    }

    #[test]
    fn question_lists_are_flagged() {
        assert!(Category::BehavioralQuestions.is_question_list());
        assert!(Category::TechnicalQuestions.is_question_list());
        assert!(!Category::CoverLetter.is_question_list());
    }
}
