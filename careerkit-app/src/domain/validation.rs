use super::Profile;
use std::collections::BTreeMap;

/// Form fields that carry a validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    EmployeeName,
    JobPosition,
    Skills,
    SkillSubtopics,
    LinkedinUrl,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::EmployeeName => "Name",
            Field::JobPosition => "Job position",
            Field::Skills => "Skills",
            Field::SkillSubtopics => "Skill subtopics",
            Field::LinkedinUrl => "LinkedIn URL",
        }
    }
}

/// A required scalar is invalid when its trimmed form is empty.
pub fn validate_required(field: Field, value: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(format!("{} is required", field.label()))
    } else {
        None
    }
}

/// A required list is invalid when joining its elements yields an empty string.
pub fn validate_required_list(field: Field, values: &[String]) -> Option<String> {
    if values.join("").trim().is_empty() {
        Some(format!("Select at least one {}", field.label().to_lowercase()))
    } else {
        None
    }
}

/// An empty LinkedIn field is valid; a non-empty one must parse as an
/// absolute http(s) URL.
pub fn validate_linkedin(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if is_valid_url(value) {
        None
    } else {
        Some("Enter a valid URL (https://...)".to_string())
    }
}

pub fn is_valid_url(value: &str) -> bool {
    match url::Url::parse(value) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some(),
        Err(_) => false,
    }
}

/// Validates every editable field, returning one message per invalid field.
/// The fixed organization and the enum-backed selectors cannot be invalid.
pub fn validate(profile: &Profile) -> BTreeMap<Field, String> {
    let mut errors = BTreeMap::new();

    if let Some(msg) = validate_required(Field::EmployeeName, &profile.employee_name) {
        errors.insert(Field::EmployeeName, msg);
    }
    if let Some(msg) = validate_required(Field::JobPosition, &profile.job_position) {
        errors.insert(Field::JobPosition, msg);
    }
    if let Some(msg) = validate_required_list(Field::Skills, &profile.skills) {
        errors.insert(Field::Skills, msg);
    }
    if let Some(msg) = validate_required_list(Field::SkillSubtopics, &profile.skill_subtopics) {
        errors.insert(Field::SkillSubtopics, msg);
    }
    if let Some(msg) = validate_linkedin(&profile.linkedin_url) {
        errors.insert(Field::LinkedinUrl, msg);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_required_fields_produce_messages() {
        assert!(validate_required(Field::EmployeeName, "").is_some());
        assert!(validate_required(Field::EmployeeName, "   ").is_some());
        assert!(validate_required(Field::EmployeeName, "Priya").is_none());
    }

    #[test]
    fn empty_lists_produce_messages() {
        assert!(validate_required_list(Field::Skills, &[]).is_some());
        assert!(validate_required_list(Field::Skills, &["".to_string()]).is_some());
        assert!(validate_required_list(Field::Skills, &["MongoDB".to_string()]).is_none());
    }

    #[test]
    fn url_validation() {
        assert!(is_valid_url("https://example.com"));
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url("ftp://example.com"));
    }

    #[test]
    fn blank_linkedin_is_valid() {
        assert!(validate_linkedin("").is_none());
        assert!(validate_linkedin("  ").is_none());
        assert!(validate_linkedin("not a url").is_some());
        assert!(validate_linkedin("https://www.linkedin.com/in/someone").is_none());
    }

    #[test]
    fn field_errors_are_independent() {
        let mut profile = Profile::demo();
        profile.employee_name.clear();
        profile.skills.clear();
        let errors = validate(&profile);
        assert!(errors.contains_key(&Field::EmployeeName));
        assert!(errors.contains_key(&Field::Skills));
        assert!(!errors.contains_key(&Field::JobPosition));
    }

    #[test]
    fn demo_profile_validates_clean() {
        assert!(validate(&Profile::demo()).is_empty());
    }
}
