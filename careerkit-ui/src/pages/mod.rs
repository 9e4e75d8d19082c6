mod assistant;

pub use assistant::{AssistantPage, GenerateContentFn};
