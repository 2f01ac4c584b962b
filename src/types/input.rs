use serde::{Deserialize, Serialize};

/// Section texts produced by the segmentation collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sections {
    pub education: Option<String>,
    pub experience: Option<String>,
    pub skills: Option<String>,
    pub projects: Option<String>,
}

impl Sections {
    /// Blank sections count as absent.
    pub fn education(&self) -> Option<&str> {
        non_blank(self.education.as_deref())
    }

    pub fn experience(&self) -> Option<&str> {
        non_blank(self.experience.as_deref())
    }

    pub fn skills(&self) -> Option<&str> {
        non_blank(self.skills.as_deref())
    }

    pub fn projects(&self) -> Option<&str> {
        non_blank(self.projects.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ContactInfo {
    pub fn email(&self) -> Option<&str> {
        non_blank(self.email.as_deref())
    }

    pub fn phone(&self) -> Option<&str> {
        non_blank(self.phone.as_deref())
    }
}

/// Case-insensitively unique skills, first spelling wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SkillList(Vec<String>);

impl SkillList {
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = std::collections::HashSet::new();
        let mut unique = Vec::new();
        for skill in skills {
            let skill = skill.into();
            let key = normalize_skill(&skill);
            if !key.is_empty() && seen.insert(key) {
                unique.push(skill);
            }
        }
        Self(unique)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<'de> Deserialize<'de> for SkillList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::<String>::deserialize(deserializer).map(SkillList::new)
    }
}

fn normalize_skill(skill: &str) -> String {
    skill
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// One resume as delivered by the extraction collaborators.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreRequest {
    pub text: String,
    #[serde(default)]
    pub sections: Sections,
    #[serde(default)]
    pub skills: SkillList,
    #[serde(default)]
    pub contact: ContactInfo,
    #[serde(default)]
    pub parsing_errors: Vec<String>,
    #[serde(default)]
    pub job_description: Option<String>,
}

impl ScoreRequest {
    pub fn job_description(&self) -> Option<&str> {
        non_blank(self.job_description.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_list_dedupes_case_insensitively_keeping_first_casing() {
        let skills = SkillList::new(["Python", "Java", "python", "  JAVA ", "Machine  Learning", "machine learning", ""]);
        assert_eq!(
            skills.as_slice(),
            &["Python".to_string(), "Java".to_string(), "Machine  Learning".to_string()]
        );
        assert_eq!(skills.len(), 3);
    }

    #[test]
    fn request_defaults_missing_fields() {
        let request: ScoreRequest =
            serde_json::from_str(r#"{"text": "Jane Doe"}"#).expect("request should parse");
        assert_eq!(request.text, "Jane Doe");
        assert!(request.sections.education().is_none());
        assert_eq!(request.skills.len(), 0);
        assert!(request.contact.email().is_none());
        assert!(request.parsing_errors.is_empty());
        assert!(request.job_description().is_none());
    }

    #[test]
    fn blank_values_are_treated_as_absent() {
        let request: ScoreRequest = serde_json::from_str(
            r#"{
                "text": "x",
                "sections": {"education": "   ", "experience": "Engineer at Acme"},
                "contact": {"email": "", "phone": "+1 555 123 4567"},
                "job_description": "\n"
            }"#,
        )
        .expect("request should parse");

        assert!(request.sections.education().is_none());
        assert_eq!(request.sections.experience(), Some("Engineer at Acme"));
        assert!(request.contact.email().is_none());
        assert!(request.contact.phone().is_some());
        assert!(request.job_description().is_none());
    }

    #[test]
    fn deserialized_skills_are_deduplicated() {
        let request: ScoreRequest =
            serde_json::from_str(r#"{"text": "", "skills": ["Rust", "rust", "Go"]}"#)
                .expect("request should parse");
        assert_eq!(request.skills.as_slice(), &["Rust".to_string(), "Go".to_string()]);
    }
}
