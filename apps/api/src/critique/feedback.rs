//! Renders a `ScoreReport` into the markdown feedback block shown to the
//! user. Presentation only; all numbers come from the scorer.

use crate::critique::scorer::ScoreReport;

/// Builds the feedback block for a report.
///
/// `raw_purpose` is the purpose string exactly as the user typed it; it is
/// title-cased for display while the report's category stays normalized.
pub fn render_feedback(report: &ScoreReport, raw_purpose: &str) -> String {
    let purpose_label = title_case(&raw_purpose.to_lowercase());
    let found_must = join_or_none(&report.found_must_have);
    let found_optional = join_or_none(&report.found_optional);
    let missing = join_or_none(&report.missing_must_have);
    let suggestions = suggestion_list(&report.missing_must_have);

    format!(
        "### Resume Purpose: `{purpose_label}`\n\
         **Resume Score:** **{score}/10** - {status}\n\
         \n\
         **Must-Have Keywords Found:** {found_must}\n\
         **Optional Keywords Found:** {found_optional}\n\
         **Missing Must-Haves:** {missing}\n\
         \n\
         ---\n\
         \n\
         **Suggestions:**\n\
         - Add missing keywords like: `{suggestions}`\n\
         - Use strong action verbs: `developed`, `led`, `researched`, `designed`\n\
         - Tailor your resume content to reflect your `{purpose_label}` objective\n",
        score = format_score(report.score),
        status = report.status.as_str(),
    )
}

/// Up to the first 3 missing must-have keywords, or "N/A" when none missing.
fn suggestion_list(missing: &[String]) -> String {
    if missing.is_empty() {
        return "N/A".to_string();
    }
    missing
        .iter()
        .take(3)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}

/// Formats a two-decimal score keeping at least one fractional digit,
/// so 2 renders as "2.0" and 2.33 as "2.33".
pub fn format_score(score: f64) -> String {
    let rendered = format!("{score:.2}");
    let trimmed = rendered.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{trimmed}0")
    } else {
        trimmed.to_string()
    }
}

/// Python-style title casing: first letter of each alphabetic run upper,
/// the rest lower.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut start_of_word = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if start_of_word {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            start_of_word = false;
        } else {
            out.push(c);
            start_of_word = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::critique::rubric::KeywordRubric;
    use crate::critique::scorer::score_resume;

    #[test]
    fn test_feedback_contains_score_and_status() {
        let rubric = KeywordRubric::standard();
        let report = score_resume("I did an internship project", "Internship", &rubric);
        let feedback = render_feedback(&report, "Internship");
        assert!(feedback.contains("**Resume Score:** **2.0/10** - Needs Improvement"));
        assert!(feedback.contains("### Resume Purpose: `Internship`"));
    }

    #[test]
    fn test_suggestions_take_first_three_missing() {
        let rubric = KeywordRubric::standard();
        let report = score_resume("", "internship", &rubric);
        let feedback = render_feedback(&report, "internship");
        assert!(feedback.contains("Add missing keywords like: `internship, project, learning`"));
    }

    #[test]
    fn test_suggestions_na_when_nothing_missing() {
        let rubric = KeywordRubric::standard();
        let text = "experience developed achieved managed python sql lead team";
        let report = score_resume(text, "job", &rubric);
        let feedback = render_feedback(&report, "job");
        assert!(feedback.contains("Add missing keywords like: `N/A`"));
    }

    #[test]
    fn test_empty_lists_render_as_none() {
        let rubric = KeywordRubric::standard();
        let report = score_resume("", "job", &rubric);
        let feedback = render_feedback(&report, "job");
        assert!(feedback.contains("**Must-Have Keywords Found:** None"));
        assert!(feedback.contains("**Optional Keywords Found:** None"));
    }

    #[test]
    fn test_purpose_is_title_cased_for_display() {
        let rubric = KeywordRubric::standard();
        let report = score_resume("", "i want a job", &rubric);
        let feedback = render_feedback(&report, "i want a job");
        assert!(feedback.contains("`I Want A Job`"));
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(2.0), "2.0");
        assert_eq!(format_score(7.0), "7.0");
        assert_eq!(format_score(2.33), "2.33");
        assert_eq!(format_score(2.5), "2.5");
        assert_eq!(format_score(10.0), "10.0");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("i want a job"), "I Want A Job");
        assert_eq!(title_case("higher studies"), "Higher Studies");
        assert_eq!(title_case(""), "");
    }
}
