//! Keyword signals — fixed, lower-cased keyword lists and the two matching
//! disciplines used against a profile.
//!
//! Broad categories (creative / technical / business) match by substring
//! against the title and every skill. Specialized categories match a single
//! skill exactly, so "pythonista" never counts as "python" there.

use crate::models::profile::ProfileRecord;

pub const CREATIVE_KEYWORDS: &[&str] = &[
    "design",
    "creative",
    "art",
    "graphic",
    "ui",
    "ux",
    "visual",
    "artist",
    "illustrator",
    "photographer",
    "video",
    "animation",
    "content creator",
];

pub const TECHNICAL_KEYWORDS: &[&str] = &[
    "developer",
    "engineer",
    "programmer",
    "coding",
    "software",
    "web",
    "data",
    "backend",
    "frontend",
    "fullstack",
    "devops",
    "tech",
    "it",
    "javascript",
    "python",
    "java",
    "c#",
    "react",
    "node",
    "angular",
];

pub const BUSINESS_KEYWORDS: &[&str] = &[
    "manager",
    "director",
    "executive",
    "ceo",
    "cto",
    "cfo",
    "founder",
    "business",
    "marketing",
    "sales",
    "product",
    "project",
    "consultant",
    "analyst",
    "strategist",
    "operations",
    "hr",
    "finance",
    "leadership",
];

pub const DATA_SCIENCE_SKILLS: &[&str] = &[
    "data science",
    "data analysis",
    "machine learning",
    "ai",
    "statistics",
    "python",
    "r",
    "tableau",
    "power bi",
];

pub const UX_UI_SKILLS: &[&str] = &[
    "ux",
    "ui",
    "user experience",
    "user interface",
    "figma",
    "sketch",
    "adobe xd",
    "design thinking",
];

pub const CONTENT_SKILLS: &[&str] = &[
    "content",
    "writing",
    "copywriting",
    "blogging",
    "journalism",
    "editing",
    "seo",
];

/// How a category's keywords are compared against a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Keyword appears anywhere inside the lower-cased title or any skill.
    Substring,
    /// A lower-cased skill equals the keyword. The title is not consulted.
    ExactSkill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategorySignal {
    Creative,
    Technical,
    Business,
    DataScience,
    UxUi,
    ContentCreator,
}

impl CategorySignal {
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            CategorySignal::Creative => CREATIVE_KEYWORDS,
            CategorySignal::Technical => TECHNICAL_KEYWORDS,
            CategorySignal::Business => BUSINESS_KEYWORDS,
            CategorySignal::DataScience => DATA_SCIENCE_SKILLS,
            CategorySignal::UxUi => UX_UI_SKILLS,
            CategorySignal::ContentCreator => CONTENT_SKILLS,
        }
    }

    pub fn match_mode(self) -> MatchMode {
        match self {
            CategorySignal::Creative | CategorySignal::Technical | CategorySignal::Business => {
                MatchMode::Substring
            }
            CategorySignal::DataScience | CategorySignal::UxUi | CategorySignal::ContentCreator => {
                MatchMode::ExactSkill
            }
        }
    }

    /// True when the profile carries this signal under the category's match mode.
    pub fn matches(self, profile: &ProfileRecord) -> bool {
        match self.match_mode() {
            MatchMode::Substring => mentions_any(profile, self.keywords()),
            MatchMode::ExactSkill => has_exact_skill(profile, self.keywords()),
        }
    }
}

/// Substring containment against the lower-cased title and each lower-cased skill.
pub fn mentions_any(profile: &ProfileRecord, keywords: &[&str]) -> bool {
    contains_any(&profile.title.to_lowercase(), keywords)
        || profile
            .skills
            .iter()
            .any(|skill| contains_any(&skill.to_lowercase(), keywords))
}

/// Exact, case-insensitive equality of at least one whole skill with a keyword.
pub fn has_exact_skill(profile: &ProfileRecord, keywords: &[&str]) -> bool {
    profile.skills.iter().any(|skill| {
        let skill = skill.to_lowercase();
        keywords.contains(&skill.as_str())
    })
}

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| haystack.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(title: &str, skills: &[&str]) -> ProfileRecord {
        ProfileRecord::with_title_and_skills(title, skills.to_vec())
    }

    #[test]
    fn test_keyword_lists_are_lowercase() {
        let all = [
            CREATIVE_KEYWORDS,
            TECHNICAL_KEYWORDS,
            BUSINESS_KEYWORDS,
            DATA_SCIENCE_SKILLS,
            UX_UI_SKILLS,
            CONTENT_SKILLS,
        ];
        for list in all {
            for keyword in list {
                assert_eq!(*keyword, keyword.to_lowercase(), "{keyword} must be lower-case");
            }
        }
    }

    #[test]
    fn test_creative_title_substring_is_case_insensitive() {
        assert!(CategorySignal::Creative.matches(&profile("Graphic DESIGNER", &[])));
    }

    #[test]
    fn test_creative_skill_substring() {
        assert!(CategorySignal::Creative.matches(&profile("", &["Motion Animation"])));
    }

    #[test]
    fn test_technical_title_match() {
        assert!(CategorySignal::Technical.matches(&profile("Backend Developer", &[])));
    }

    #[test]
    fn test_business_skill_match() {
        assert!(CategorySignal::Business.matches(&profile("", &["Product Strategy"])));
    }

    #[test]
    fn test_empty_profile_matches_nothing() {
        let empty = ProfileRecord::default();
        for signal in [
            CategorySignal::Creative,
            CategorySignal::Technical,
            CategorySignal::Business,
            CategorySignal::DataScience,
            CategorySignal::UxUi,
            CategorySignal::ContentCreator,
        ] {
            assert!(!signal.matches(&empty), "{signal:?} must not match an empty profile");
        }
    }

    #[test]
    fn test_exact_skill_rejects_substring() {
        let p = profile("", &["Pythonista"]);
        assert!(!CategorySignal::DataScience.matches(&p));
        // The same skill still counts under substring rules.
        assert!(CategorySignal::Technical.matches(&p));
    }

    #[test]
    fn test_exact_skill_is_case_insensitive() {
        assert!(CategorySignal::DataScience.matches(&profile("", &["TABLEAU"])));
        assert!(CategorySignal::UxUi.matches(&profile("", &["Adobe XD"])));
        assert!(CategorySignal::ContentCreator.matches(&profile("", &["SEO"])));
    }

    #[test]
    fn test_exact_skill_ignores_title() {
        assert!(!CategorySignal::DataScience.matches(&profile("python", &[])));
    }

    #[test]
    fn test_match_modes() {
        assert_eq!(CategorySignal::Creative.match_mode(), MatchMode::Substring);
        assert_eq!(CategorySignal::Business.match_mode(), MatchMode::Substring);
        assert_eq!(CategorySignal::UxUi.match_mode(), MatchMode::ExactSkill);
        assert_eq!(
            CategorySignal::ContentCreator.match_mode(),
            MatchMode::ExactSkill
        );
    }
}
