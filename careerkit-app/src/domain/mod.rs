mod category;
mod generation;
mod profile;
pub mod validation;

pub use category::Category;
pub use generation::{GenerationRequest, GenerationResult, RegenerationBudget, ResetState};
pub use profile::{
    CommunicationType, ExperienceBand, FeedbackType, Grade, InterviewType, JobLocation,
    ManagerialFocus, Profile, QuestionStyle, Tone, ORGANIZATION, SKILL_CATALOG,
};
