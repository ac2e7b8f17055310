//! Local templates used when the text-generation service is unavailable.
//! Deterministic: the same evidence always yields the same text.

use crate::catalog::models::CareerRecord;
use crate::explanation::RationaleRequest;

/// Generic subjects added to every pathway when the career's own tags don't cover them.
const CORE_SUBJECTS: &[&str] = &["Mathematics", "English Literature / Language Arts"];
const CORE_SKILLS: &[&str] = &["Teamwork", "Explaining ideas"];

/// One-sentence rationale from the first matching interest, current skill and SDG.
pub fn rationale(request: &RationaleRequest<'_>) -> String {
    let details = request.details;
    let mut clauses = Vec::new();

    if let Some(interest) = details.interest_matches.first() {
        clauses.push(format!("draws on your interest in {interest}"));
    }
    if let Some(skill) = details.skill_matches.current.first() {
        clauses.push(format!("puts your strength in {} to work", skill.to_lowercase()));
    }
    if let Some((id, name)) = request.matched_sdgs.first() {
        clauses.push(format!("contributes to SDG {id}: {name}"));
    }

    let title = &request.career.title;
    match clauses.as_slice() {
        [] => format!(
            "{title} connects with parts of your profile and is worth exploring further."
        ),
        [only] => format!("{title} {only}."),
        [first, second] => format!("{title} {first} and {second}."),
        [init @ .., last] => format!("{title} {}, and {last}.", init.join(", ")),
    }
}

/// Generic four-section educational pathway filled from the career's own tags.
pub fn pathway(career: &CareerRecord) -> String {
    let mut subjects: Vec<&str> = career.interests.iter().map(String::as_str).collect();
    for core in CORE_SUBJECTS {
        if !subjects.contains(core) {
            subjects.push(core);
        }
    }

    let mut skills: Vec<&str> = career.skills.iter().map(String::as_str).collect();
    for core in CORE_SKILLS {
        if !skills.contains(core) {
            skills.push(core);
        }
    }

    let fields: Vec<String> = career.interests.iter().map(|i| field_name(i)).collect();

    let mut out = format!("## Pathway to becoming a {}\n\n", career.title);
    out.push_str(&career.description);
    out.push_str("\n\n### 1. School Subjects\n");
    push_bullets(&mut out, subjects.iter().map(|s| s.to_string()));

    out.push_str("\n### 2. Key Skills\n");
    push_bullets(&mut out, skills.iter().map(|s| s.to_string()));

    out.push_str("\n### 3. Recommended Online Courses\n");
    push_bullets(
        &mut out,
        fields
            .iter()
            .map(|f| format!("An introductory {f} course on Coursera or edX"))
            .chain(std::iter::once(format!(
                "A career-orientation certificate for aspiring {}s on LinkedIn Learning",
                career.title
            ))),
    );

    out.push_str("\n### 4. University Majors\n");
    push_bullets(
        &mut out,
        fields
            .iter()
            .map(|f| f.to_string())
            .chain(std::iter::once(format!(
                "An interdisciplinary degree with electives relevant to {}",
                career.title
            ))),
    );

    out
}

fn push_bullets(out: &mut String, items: impl Iterator<Item = String>) {
    for item in items {
        out.push_str("- ");
        out.push_str(&item);
        out.push('\n');
    }
}

/// "Business Studies / Entrepreneurship" → "Business Studies",
/// "Engineering (General or Applied)" → "Engineering".
fn field_name(interest: &str) -> String {
    let head = interest.split(" / ").next().unwrap_or(interest);
    let head = head.split(" (").next().unwrap_or(head);
    head.trim().to_string()
}
