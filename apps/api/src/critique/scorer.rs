//! Keyword-coverage scoring: pure, deterministic, no I/O.
//!
//! Matching is case-insensitive substring containment, deliberately not
//! word-boundary aware; the thresholds were tuned against that coarse
//! behavior, so a keyword inside a longer word counts as found.

use serde::{Deserialize, Serialize};

use crate::critique::rubric::{KeywordRubric, PurposeCategory};

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Qualitative tier for a score. Thresholds are inclusive lower bounds,
/// evaluated in descending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreStatus {
    Excellent,
    Good,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl ScoreStatus {
    pub fn for_score(score: f64) -> Self {
        if score >= 8.0 {
            ScoreStatus::Excellent
        } else if score >= 5.0 {
            ScoreStatus::Good
        } else {
            ScoreStatus::NeedsImprovement
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScoreStatus::Excellent => "Excellent",
            ScoreStatus::Good => "Good",
            ScoreStatus::NeedsImprovement => "Needs Improvement",
        }
    }
}

/// Full scoring report. Constructed fresh per call, immutable once returned.
/// Keyword lists preserve the rubric's declaration order and casing, not the
/// order of appearance in the text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub category: PurposeCategory,
    /// 0.0 to 10.0, two-decimal precision.
    pub score: f64,
    pub status: ScoreStatus,
    pub found_must_have: Vec<String>,
    pub found_optional: Vec<String>,
    pub missing_must_have: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

/// Scores resume text against the rubric for the stated purpose.
///
/// Never fails: empty text yields zero found keywords and empty purpose
/// falls through to the higher-studies category.
///
/// Formula: `min(10.0, round(found_must/must * 7.0
///                         + found_opt/max(opt, 1) * 3.0, 2))`
pub fn score_resume(text: &str, purpose: &str, rubric: &KeywordRubric) -> ScoreReport {
    let category = PurposeCategory::from_purpose(purpose);
    let keywords = rubric.for_category(category);
    let haystack = text.to_lowercase();

    let mut found_must_have = Vec::new();
    let mut missing_must_have = Vec::new();
    for keyword in &keywords.must_have {
        if haystack.contains(&keyword.to_lowercase()) {
            found_must_have.push(keyword.clone());
        } else {
            missing_must_have.push(keyword.clone());
        }
    }

    let found_optional: Vec<String> = keywords
        .optional
        .iter()
        .filter(|keyword| haystack.contains(&keyword.to_lowercase()))
        .cloned()
        .collect();

    let must_len = keywords.must_have.len() as f64;
    let optional_len = keywords.optional.len().max(1) as f64;
    let raw = (found_must_have.len() as f64 / must_len) * 7.0
        + (found_optional.len() as f64 / optional_len) * 3.0;
    let score = round2(raw).min(10.0);

    ScoreReport {
        category,
        score,
        status: ScoreStatus::for_score(score),
        found_must_have,
        found_optional,
        missing_must_have,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn rubric() -> KeywordRubric {
        KeywordRubric::standard()
    }

    #[test]
    fn test_internship_scenario_scores_two() {
        let report = score_resume("I did an internship project", "Internship", &rubric());
        assert_eq!(report.category, PurposeCategory::Internship);
        assert_eq!(
            report.found_must_have,
            vec!["internship".to_string(), "project".to_string()]
        );
        assert!(report.found_optional.is_empty());
        assert_eq!(report.score, 2.0);
        assert_eq!(report.status, ScoreStatus::NeedsImprovement);
    }

    #[test]
    fn test_job_all_must_haves_scores_seven() {
        let text = "experience developed achieved managed python sql lead team";
        let report = score_resume(text, "I want a Job", &rubric());
        assert_eq!(report.category, PurposeCategory::Job);
        assert_eq!(report.found_must_have.len(), 8);
        assert!(report.found_optional.is_empty());
        assert!(report.missing_must_have.is_empty());
        assert_eq!(report.score, 7.0);
        assert_eq!(report.status, ScoreStatus::Good);
    }

    #[test]
    fn test_empty_text_and_purpose_degrade_to_defaults() {
        let report = score_resume("", "", &rubric());
        assert_eq!(report.category, PurposeCategory::HigherStudies);
        assert!(report.found_must_have.is_empty());
        assert!(report.found_optional.is_empty());
        assert_eq!(report.missing_must_have.len(), 7);
        assert_eq!(report.score, 0.0);
        assert_eq!(report.status, ScoreStatus::NeedsImprovement);
    }

    #[test]
    fn test_full_coverage_scores_ten_exactly() {
        let r = rubric();
        let everything = {
            let k = r.for_category(PurposeCategory::Internship);
            let mut words: Vec<String> = k.must_have.clone();
            words.extend(k.optional.clone());
            words.join(" ")
        };
        let report = score_resume(&everything, "internship", &r);
        assert_eq!(report.score, 10.0);
        assert_eq!(report.status, ScoreStatus::Excellent);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let a = score_resume("python research paper", "masters abroad", &rubric());
        let b = score_resume("python research paper", "masters abroad", &rubric());
        assert_eq!(a, b);
    }

    #[test]
    fn test_adding_a_missing_must_have_never_decreases_score() {
        let r = rubric();
        let base = score_resume("I did an internship", "internship", &r);
        let more = score_resume("I did an internship project", "internship", &r);
        assert!(more.score >= base.score);
    }

    #[test]
    fn test_score_clamped_and_two_decimal() {
        let report = score_resume("internship", "internship", &rubric());
        // 1/7 * 7.0 = 1.0; also exercises the rounding path.
        assert_eq!(report.score, 1.0);
        assert!(report.score >= 0.0 && report.score <= 10.0);
        assert_eq!(report.score, round2(report.score));
    }

    #[test]
    fn test_substring_match_counts_inside_longer_words() {
        // "projects" contains "project"; not word-boundary aware by design.
        let report = score_resume("my projects", "internship", &rubric());
        assert_eq!(report.found_must_have, vec!["project".to_string()]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let report = score_resume("INTERNSHIP PROJECT", "internship", &rubric());
        assert_eq!(report.found_must_have.len(), 2);
    }

    #[test]
    fn test_found_lists_preserve_rubric_order_not_text_order() {
        // Text mentions python before internship; report order follows the
        // rubric declaration.
        let report = score_resume("python, then an internship", "internship", &rubric());
        assert_eq!(
            report.found_must_have,
            vec!["internship".to_string(), "python".to_string()]
        );
    }

    #[test]
    fn test_uppercase_rubric_keywords_match_lowercase_text() {
        // Higher-studies declares IEEE/GRE/TOEFL upper-case; matching is on
        // lower-cased forms, reports keep the declared casing.
        let report = score_resume("published at ieee, took the gre", "phd", &rubric());
        assert_eq!(
            report.found_optional,
            vec!["IEEE".to_string(), "GRE".to_string()]
        );
    }

    #[test]
    fn test_status_thresholds() {
        assert_eq!(ScoreStatus::for_score(8.0), ScoreStatus::Excellent);
        assert_eq!(ScoreStatus::for_score(7.99), ScoreStatus::Good);
        assert_eq!(ScoreStatus::for_score(5.0), ScoreStatus::Good);
        assert_eq!(ScoreStatus::for_score(4.99), ScoreStatus::NeedsImprovement);
        assert_eq!(ScoreStatus::for_score(0.0), ScoreStatus::NeedsImprovement);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(2.004), 2.0);
        assert_eq!(round2(2.336), 2.34);
        assert_eq!(round2(7.0), 7.0);
    }
}
