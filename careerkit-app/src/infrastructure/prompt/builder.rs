use crate::domain::{Category, Profile};

const QUESTION_COUNT: u32 = 35;

/// Builds the single instruction string sent to the model for one
/// (category, profile) pair. Pure: identical inputs always produce the
/// identical string.
pub fn build_prompt(category: Category, profile: &Profile) -> String {
    let mut prompt = String::new();

    prompt.push_str(&category_body(category, profile));
    prompt.push_str("\n\n");
    prompt.push_str(&focus_clause(profile));
    prompt.push_str("\n\n");
    prompt.push_str(style_contract(category));

    let linkedin = profile.linkedin_url.trim();
    if !linkedin.is_empty() {
        prompt.push_str(&format!(
            "\n\nWhere a signature or profile reference fits naturally, mention the candidate's LinkedIn profile: {linkedin}."
        ));
    }

    prompt
}

/// Shared personalization clause embedded in every category's prompt.
fn focus_clause(profile: &Profile) -> String {
    let name = scrub(&profile.employee_name);
    let position = scrub(&profile.job_position);
    let skills = profile
        .skills
        .iter()
        .map(|s| scrub(s))
        .collect::<Vec<_>>()
        .join(", ");
    let subtopics = profile
        .skill_subtopics
        .iter()
        .map(|s| scrub(s))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Candidate focus: {name} has **{experience}** of experience and holds the \
**{grade}** grade at {organization}, targeting the position of **{position}** \
({location}). Core skills: **{skills}**. Priority subtopics: **{subtopics}**. \
The interaction is a **{interview}** interview held over **{communication}**, \
with managerial expectations centred on **{managerial}** and questions in the \
**{style}** style. Write in a **{tone}** tone and keep any feedback \
**{feedback}**.",
        name = name,
        experience = profile.experience.label(),
        grade = profile.grade.label(),
        organization = scrub(&profile.organization),
        position = position,
        location = profile.job_location.label(),
        skills = skills,
        subtopics = subtopics,
        interview = profile.interview_type.label(),
        communication = profile.communication_type.label(),
        managerial = profile.managerial_focus.label(),
        style = profile.question_style.label(),
        tone = profile.tone.label(),
        feedback = profile.feedback_type.label(),
    )
}

fn category_body(category: Category, profile: &Profile) -> String {
    let position = scrub(&profile.job_position);
    let organization = scrub(&profile.organization);

    match category {
        Category::CoverLetter => format!(
            "Write a complete cover letter for an internal application to the \
{position} position at {organization}."
        ),
        Category::ConfirmationEmail => format!(
            "Write an email confirming attendance at the upcoming {position} \
interview, acknowledging the proposed date and format."
        ),
        Category::FollowUpEmail => format!(
            "Write a follow-up email to be sent after the {position} interview, \
thanking the interviewers and reaffirming interest in the role."
        ),
        Category::FeedbackEmail => format!(
            "Write an email politely requesting feedback on the recent \
{position} interview."
        ),
        Category::MentorshipRequestEmail => format!(
            "Write an email to a senior colleague at {organization} requesting \
mentorship while preparing for the {position} interview."
        ),
        Category::ReferenceRequestEmail => format!(
            "Write an email asking a former manager to act as a reference for \
the {position} application."
        ),
        Category::RejectionFollowUpEmail => format!(
            "Write a gracious email responding to a rejection for the \
{position} position, asking to be considered for future openings."
        ),
        Category::BehavioralQuestions => format!(
            "Prepare a list of exactly {QUESTION_COUNT} behavioral interview \
questions with model answers for the {position} interview."
        ),
        Category::TechnicalQuestions => format!(
            "Prepare a list of exactly {QUESTION_COUNT} technical interview \
questions with model answers for the {position} interview, drawn from the \
candidate's core skills and priority subtopics."
        ),
    }
}

fn style_contract(category: Category) -> &'static str {
    if category.is_question_list() {
        "Format: begin with a short explanatory preamble, then number the items \
1 through 35, each as a question followed by a concise model answer. Use the \
numbered list only; never use bullet characters."
    } else {
        "Format: a greeting line, body paragraphs, and a closing line. Use plain \
paragraphs only; never use bullet characters."
    }
}

/// Strips control characters and markup that could smuggle instructions into
/// the prompt from free-text fields.
fn scrub(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control())
        .take(200)
        .collect::<String>()
        .replace("```", "")
        .replace('<', "")
        .replace('>', "")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_is_deterministic() {
        let profile = Profile::demo();
        for category in Category::ALL {
            let a = build_prompt(*category, &profile);
            let b = build_prompt(*category, &profile);
            assert_eq!(a, b);
            assert!(!a.is_empty());
        }
    }

    #[test]
    fn focus_clause_embeds_every_dimension() {
        let profile = Profile::demo();
        let prompt = build_prompt(Category::CoverLetter, &profile);
        assert!(prompt.contains("**10+ years**"));
        assert!(prompt.contains("**Assistant Consultant**"));
        assert!(prompt.contains("SAP UI5 / Fiori, CAPM (Node.js)"));
        assert!(prompt.contains("Fiori Elements, CDS Modeling"));
        assert!(prompt.contains("**Technical**"));
        assert!(prompt.contains("**Video Call**"));
        assert!(prompt.contains("**Delivery Ownership**"));
        assert!(prompt.contains("**Scenario Based**"));
        assert!(prompt.contains("**Confident**"));
        assert!(prompt.contains("**Constructive**"));
    }

    #[test]
    fn question_categories_demand_35_numbered_items() {
        let profile = Profile::demo();
        for category in [Category::BehavioralQuestions, Category::TechnicalQuestions] {
            let prompt = build_prompt(category, &profile);
            assert!(prompt.contains("exactly 35"));
            assert!(prompt.contains("numbered list only"));
        }
    }

    #[test]
    fn email_categories_forbid_bullets() {
        let prompt = build_prompt(Category::FollowUpEmail, &Profile::demo());
        assert!(prompt.contains("plain paragraphs only"));
        assert!(prompt.contains("never use bullet characters"));
    }

    #[test]
    fn linkedin_clause_is_optional() {
        let mut profile = Profile::demo();
        let with = build_prompt(Category::CoverLetter, &profile);
        assert!(with.contains(&profile.linkedin_url));

        profile.linkedin_url.clear();
        let without = build_prompt(Category::CoverLetter, &profile);
        assert!(!without.contains("LinkedIn"));
    }

    #[test]
    fn free_text_fields_are_scrubbed() {
        let mut profile = Profile::demo();
        profile.job_position = "Lead <script>Developer</script>\u{0007}".to_string();
        let prompt = build_prompt(Category::CoverLetter, &profile);
        assert!(!prompt.contains('<'));
        assert!(!prompt.contains('\u{0007}'));
        assert!(prompt.contains("Lead scriptDeveloper/script"));
    }
}
