use serde::Serialize;

/// The canonical structured resume.
///
/// Every recognized key is always present: normalization fills absent or
/// malformed fields with `""` or `[]`, so callers never see a missing field.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub summary: String,
    pub education: Vec<Education>,
    pub experience: Vec<Position>,
    pub internships: Vec<Position>,
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub languages: Vec<String>,
    pub certifications: Vec<Certification>,
    pub areas_of_interest: Vec<String>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub location: String,
    pub dates: String,
    pub gpa: String,
}

/// A job or internship. Shared by the `experience` and `internships` lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Position {
    pub company: String,
    pub role: String,
    pub location: String,
    pub dates: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Project {
    pub title: String,
    pub dates: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub year: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_default_record_serializes_every_key() {
        let value = serde_json::to_value(ResumeRecord::default()).unwrap();
        let obj = value.as_object().unwrap();
        for key in ["name", "title", "email", "phone", "linkedin", "github", "summary"] {
            assert_eq!(obj[key], json!(""), "{key} should default to empty string");
        }
        for key in [
            "education",
            "experience",
            "internships",
            "technicalSkills",
            "softSkills",
            "languages",
            "certifications",
            "areasOfInterest",
            "projects",
        ] {
            assert_eq!(obj[key], json!([]), "{key} should default to empty list");
        }
        assert_eq!(obj.len(), 16);
    }

    #[test]
    fn test_certification_year_serializes_as_null_when_unknown() {
        let cert = Certification {
            name: "AWS SAA".to_string(),
            issuer: "Amazon".to_string(),
            year: None,
        };
        let value = serde_json::to_value(cert).unwrap();
        assert_eq!(value["year"], Value::Null);
    }
}
