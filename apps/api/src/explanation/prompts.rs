// Prompt constants for the text-generation boundary.
// Templates use `{placeholder}` markers filled in a single pass by `fill`.

pub const RATIONALE_SYSTEM: &str =
    "You are a career advisor who provides concise, personalized explanations.";

pub const RATIONALE_MAX_TOKENS: u32 = 200;

/// Replace: {title}, {description}, {interests}, {current_skills},
///          {desired_skills}, {sdg_names}
pub const RATIONALE_PROMPT_TEMPLATE: &str = r#"As a career advisor, explain why the career '{title}' ({description})
is a good match for someone with the following profile:

Interests: {interests}
Current Skills: {current_skills}
Skills they want to develop: {desired_skills}
Values (SDGs they care about): {sdg_names}

Identify specific connections between their profile and this career.
Keep your response to 3-4 sentences and focus on how this career aligns with their interests,
leverages their current skills, helps them develop their desired skills, and supports their values."#;

pub const PATHWAY_SYSTEM: &str =
    "You are a career education specialist who provides practical educational guidance.";

pub const PATHWAY_MAX_TOKENS: u32 = 700;

/// Replace: {title}
pub const PATHWAY_PROMPT_TEMPLATE: &str = r#"Provide detailed educational and career path information for someone interested in becoming a {title}.

Include the following sections:
1. School Subjects: List 5-7 specific high school or secondary school subjects that would be most beneficial for this career path.
2. Key Skills: List 7-9 specific technical and soft skills needed for success in this career.
3. Recommended Online Courses: Suggest 4-5 specific online courses or certifications (with platform names like Coursera, edX, etc.) that would help someone prepare for this career.
4. University Majors: List 4-6 specific university majors or degree programs that could lead to this career.

Format each section with bullet points for clarity. Be specific, practical, and focused on actionable educational paths."#;

pub fn rationale_prompt(
    title: &str,
    description: &str,
    interests: &[String],
    current_skills: &[String],
    desired_skills: &[String],
    sdg_names: &[&str],
) -> String {
    fill(
        RATIONALE_PROMPT_TEMPLATE,
        &[
            ("title", title),
            ("description", description),
            ("interests", interests.join(", ").as_str()),
            ("current_skills", current_skills.join(", ").as_str()),
            ("desired_skills", desired_skills.join(", ").as_str()),
            ("sdg_names", sdg_names.join(", ").as_str()),
        ],
    )
}

pub fn pathway_prompt(title: &str) -> String {
    fill(PATHWAY_PROMPT_TEMPLATE, &[("title", title)])
}

/// Substitutes `{key}` markers from `values`. Substituted text is never rescanned,
/// and braces that do not name a known key are copied through.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let hit = tail.find('}').and_then(|end| {
            values
                .iter()
                .find(|(key, _)| *key == &tail[1..end])
                .map(|(_, value)| (end, *value))
        });
        match hit {
            Some((end, value)) => {
                out.push_str(value);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rationale_prompt_fills_every_placeholder() {
        let prompt = rationale_prompt(
            "Hydrologist",
            "Studies the water cycle.",
            &["Chemistry".to_string(), "Geography".to_string()],
            &["Data analysis".to_string()],
            &["Coding".to_string()],
            &["Clean Water & Sanitation", "Climate Action"],
        );
        assert!(prompt.contains("'Hydrologist' (Studies the water cycle.)"));
        assert!(prompt.contains("Interests: Chemistry, Geography"));
        assert!(prompt.contains("Values (SDGs they care about): Clean Water & Sanitation, Climate Action"));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn test_placeholders_inside_catalog_text_are_left_alone() {
        let prompt = rationale_prompt(
            "Data {interests} Analyst",
            "Reads {sdg_names} and {unknown}",
            &["Economics".to_string()],
            &[],
            &[],
            &["Quality Education"],
        );
        assert!(prompt.contains("'Data {interests} Analyst' (Reads {sdg_names} and {unknown})"));
        assert!(prompt.contains("Interests: Economics"));
        assert!(prompt.contains("Values (SDGs they care about): Quality Education"));
    }

    #[test]
    fn test_fill_copies_unmatched_braces() {
        assert_eq!(fill("a { b } {x}", &[("x", "1")]), "a { b } 1");
        assert_eq!(fill("open {", &[]), "open {");
    }

    #[test]
    fn test_pathway_prompt_names_career() {
        let prompt = pathway_prompt("Doctor");
        assert!(prompt.contains("becoming a Doctor."));
        assert!(prompt.contains("4. University Majors"));
    }
}
