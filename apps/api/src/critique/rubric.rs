//! The fixed purpose-to-keyword rubric and the purpose classifier.
//!
//! The rubric is static configuration data: constructed once at process
//! start, held behind an `Arc` in app state, and never mutated afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Purpose categories
// ────────────────────────────────────────────────────────────────────────────

/// The three scoring categories a purpose string can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PurposeCategory {
    Internship,
    Job,
    HigherStudies,
}

impl PurposeCategory {
    /// Coarse substring classifier over the lower-cased purpose string:
    /// "intern" wins over "job", and anything else, including nonsense and
    /// the empty string, falls through to `HigherStudies`.
    ///
    /// The fallback is almost certainly drift from an English-like three-way
    /// choice in the original tool, but scoring behavior was tuned against
    /// it, so it is preserved rather than fixed.
    pub fn from_purpose(purpose: &str) -> Self {
        let purpose = purpose.to_lowercase();
        if purpose.contains("intern") {
            PurposeCategory::Internship
        } else if purpose.contains("job") {
            PurposeCategory::Job
        } else {
            PurposeCategory::HigherStudies
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PurposeCategory::Internship => "internship",
            PurposeCategory::Job => "job",
            PurposeCategory::HigherStudies => "higher-studies",
        }
    }
}

impl fmt::Display for PurposeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Keyword tables
// ────────────────────────────────────────────────────────────────────────────

const INTERNSHIP_MUST: &[&str] = &[
    "internship",
    "project",
    "learning",
    "teamwork",
    "academic",
    "java",
    "python",
];
const INTERNSHIP_OPTIONAL: &[&str] = &["problem-solving", "volunteer", "coursework", "btech", "gpa"];

const JOB_MUST: &[&str] = &[
    "experience",
    "developed",
    "achieved",
    "managed",
    "python",
    "sql",
    "lead",
    "team",
];
const JOB_OPTIONAL: &[&str] = &[
    "results",
    "deployed",
    "impact",
    "client",
    "communication",
    "soft skills",
];

const HIGHER_STUDIES_MUST: &[&str] = &[
    "research",
    "paper",
    "cgpa",
    "publication",
    "conference",
    "internship",
    "academic",
];
const HIGHER_STUDIES_OPTIONAL: &[&str] = &[
    "abstract",
    "IEEE",
    "technical",
    "scholarship",
    "GRE",
    "TOEFL",
];

/// The two keyword sets for one category. Declaration order is significant:
/// found/missing lists in reports preserve it.
#[derive(Debug, Clone)]
pub struct CategoryKeywords {
    /// Dominant, 7-point-weighted portion of the score.
    pub must_have: Vec<String>,
    /// Secondary, 3-point-weighted portion.
    pub optional: Vec<String>,
}

/// Fixed mapping from purpose category to keyword sets.
#[derive(Debug, Clone)]
pub struct KeywordRubric {
    internship: CategoryKeywords,
    job: CategoryKeywords,
    higher_studies: CategoryKeywords,
}

impl KeywordRubric {
    /// The standard rubric the scoring thresholds were tuned against.
    pub fn standard() -> Self {
        KeywordRubric {
            internship: keywords(INTERNSHIP_MUST, INTERNSHIP_OPTIONAL),
            job: keywords(JOB_MUST, JOB_OPTIONAL),
            higher_studies: keywords(HIGHER_STUDIES_MUST, HIGHER_STUDIES_OPTIONAL),
        }
    }

    pub fn for_category(&self, category: PurposeCategory) -> &CategoryKeywords {
        match category {
            PurposeCategory::Internship => &self.internship,
            PurposeCategory::Job => &self.job,
            PurposeCategory::HigherStudies => &self.higher_studies,
        }
    }
}

fn keywords(must_have: &[&str], optional: &[&str]) -> CategoryKeywords {
    CategoryKeywords {
        must_have: must_have.iter().map(|s| s.to_string()).collect(),
        optional: optional.iter().map(|s| s.to_string()).collect(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purpose_containing_intern_is_internship() {
        assert_eq!(
            PurposeCategory::from_purpose("Internship"),
            PurposeCategory::Internship
        );
        assert_eq!(
            PurposeCategory::from_purpose("summer INTERN role"),
            PurposeCategory::Internship
        );
    }

    #[test]
    fn test_purpose_containing_job_is_job() {
        assert_eq!(
            PurposeCategory::from_purpose("I want a Job"),
            PurposeCategory::Job
        );
    }

    #[test]
    fn test_intern_wins_over_job() {
        assert_eq!(
            PurposeCategory::from_purpose("internship or job"),
            PurposeCategory::Internship
        );
    }

    #[test]
    fn test_everything_else_falls_through_to_higher_studies() {
        assert_eq!(
            PurposeCategory::from_purpose("higher studies"),
            PurposeCategory::HigherStudies
        );
        assert_eq!(
            PurposeCategory::from_purpose("xyzzy"),
            PurposeCategory::HigherStudies
        );
        assert_eq!(
            PurposeCategory::from_purpose(""),
            PurposeCategory::HigherStudies
        );
    }

    #[test]
    fn test_standard_rubric_set_sizes() {
        let rubric = KeywordRubric::standard();
        assert_eq!(
            rubric
                .for_category(PurposeCategory::Internship)
                .must_have
                .len(),
            7
        );
        assert_eq!(
            rubric
                .for_category(PurposeCategory::Internship)
                .optional
                .len(),
            5
        );
        assert_eq!(rubric.for_category(PurposeCategory::Job).must_have.len(), 8);
        assert_eq!(rubric.for_category(PurposeCategory::Job).optional.len(), 6);
        assert_eq!(
            rubric
                .for_category(PurposeCategory::HigherStudies)
                .must_have
                .len(),
            7
        );
        assert_eq!(
            rubric
                .for_category(PurposeCategory::HigherStudies)
                .optional
                .len(),
            6
        );
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(PurposeCategory::HigherStudies.to_string(), "higher-studies");
        assert_eq!(PurposeCategory::Internship.as_str(), "internship");
    }
}
