//! Profile record submitted by the profile form.
//!
//! Every field is optional on the wire. Missing fields and explicit `null`s
//! both collapse to empty values here, so the recommendation engine never has
//! to reason about absent data.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperienceItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub position: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub end_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub institution: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub degree: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub end_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// A developer profile as collected by the profile form.
///
/// Only `title` and `skills` drive template recommendation; the rest is
/// carried through so the same record can feed the portfolio renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bio: String,
    #[serde(default, deserialize_with = "skills_without_nulls")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub experience: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub availability: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub remote: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<ProjectItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub work_experience: Vec<WorkExperienceItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub education: Vec<EducationItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub social: SocialLinks,
}

impl ProfileRecord {
    /// Convenience constructor for the two fields the recommender reads.
    #[cfg(test)]
    pub fn with_title_and_skills<S: Into<String>>(title: &str, skills: Vec<S>) -> Self {
        ProfileRecord {
            title: title.to_string(),
            skills: skills.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    /// First `n` skills in submission order.
    pub fn top_skills(&self, n: usize) -> &[String] {
        &self.skills[..self.skills.len().min(n)]
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `null` entries in the skill list are dropped rather than rejecting the profile.
fn skills_without_nulls<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let skills = Option::<Vec<Option<String>>>::deserialize(deserializer)?;
    Ok(skills.unwrap_or_default().into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_deserializes_to_default() {
        let profile: ProfileRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(profile, ProfileRecord::default());
    }

    #[test]
    fn test_null_title_and_skills_become_empty() {
        let profile: ProfileRecord =
            serde_json::from_str(r#"{"title": null, "skills": null}"#).unwrap();
        assert_eq!(profile.title, "");
        assert!(profile.skills.is_empty());
    }

    #[test]
    fn test_null_skill_entries_are_dropped() {
        let profile: ProfileRecord =
            serde_json::from_str(r#"{"title": "Dev", "skills": ["Rust", null, "Go"]}"#)
                .unwrap();
        assert_eq!(profile.skills, vec!["Rust", "Go"]);
    }

    #[test]
    fn test_non_string_title_is_rejected() {
        let result = serde_json::from_str::<ProfileRecord>(r#"{"title": 42}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_camel_case_fields_deserialize() {
        let json = r#"{
            "firstName": "Sarah",
            "lastName": "Johnson",
            "title": "Senior Frontend Developer",
            "skills": ["React", "TypeScript"],
            "workExperience": [
                {"company": "Acme", "position": "Engineer", "startDate": "2020-01", "endDate": null}
            ],
            "social": {"github": "https://github.com/sarah"}
        }"#;

        let profile: ProfileRecord = serde_json::from_str(json).unwrap();
        assert_eq!(profile.full_name(), "Sarah Johnson");
        assert_eq!(profile.skills, vec!["React", "TypeScript"]);
        assert_eq!(profile.work_experience[0].start_date, "2020-01");
        assert_eq!(profile.work_experience[0].end_date, "");
        assert_eq!(
            profile.social.github.as_deref(),
            Some("https://github.com/sarah")
        );
        assert!(profile.social.email.is_none());
    }

    #[test]
    fn test_full_name_without_last_name() {
        let profile = ProfileRecord {
            first_name: "Prince".to_string(),
            ..Default::default()
        };
        assert_eq!(profile.full_name(), "Prince");
    }

    #[test]
    fn test_top_skills_caps_at_available() {
        let profile = ProfileRecord::with_title_and_skills("", vec!["Rust", "Go"]);
        assert_eq!(profile.top_skills(3), ["Rust", "Go"]);
        assert!(ProfileRecord::default().top_skills(3).is_empty());
    }
}
