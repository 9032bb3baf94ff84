use serde::{Deserialize, Serialize};

/// A flat resume record as collected by the form layer.
///
/// The form submits every field as a string, so an empty string means
/// "not provided"; the record mirrors that rather than wrapping each
/// field in `Option`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub linkedin: String,
    pub github: String,
    pub summary: String,
    pub education: String,
    pub experience: String,
    pub projects: String,
    pub certifications: String,
    pub skills: String,
    pub languages: String,
    pub hobbies: String,
}

impl ResumeRecord {
    /// Names of required identity fields that are empty.
    ///
    /// Validation is the caller's (form layer's) concern; the composer
    /// itself renders whatever it is given.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push("name");
        }
        if self.email.is_empty() {
            missing.push("email");
        }
        if self.phone.is_empty() {
            missing.push("phone");
        }
        missing
    }

    /// The canonical content fields in their fixed render order.
    pub fn content_fields(&self) -> [(&'static str, &str); 8] {
        [
            ("summary", self.summary.as_str()),
            ("education", self.education.as_str()),
            ("experience", self.experience.as_str()),
            ("projects", self.projects.as_str()),
            ("certifications", self.certifications.as_str()),
            ("skills", self.skills.as_str()),
            ("languages", self.languages.as_str()),
            ("hobbies", self.hobbies.as_str()),
        ]
    }
}

/// A user-defined extra section. Rendered only when both parts are non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomSection {
    pub title: String,
    pub body: String,
}
