//! Template catalog — the static template definitions the engine picks from,
//! the fixed fallback list, and the browseable seed catalog.

use serde::{Deserialize, Serialize};

use crate::models::profile::ProfileRecord;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// Why a descriptor ended up in a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rationale {
    Baseline,
    CreativeMatch,
    CorporateFallback,
    TechnicalMatch,
    BusinessMatch,
    VersatileFallback,
    DataScienceSkill,
    UxUiSkill,
    ContentSkill,
    StaticDefault,
    Catalog,
}

/// Metadata for one selectable portfolio layout. Not the rendered page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDescriptor {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub color_scheme: String,
    pub layout: String,
    pub features: Vec<String>,
    pub preview_image: String,
    pub rationale: Rationale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateCategory {
    Minimal,
    Creative,
    Professional,
    Tech,
}

/// A browseable template as listed on the template gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub category: TemplateCategory,
    #[serde(flatten)]
    pub template: TemplateDescriptor,
}

// ────────────────────────────────────────────────────────────────────────────
// Static template definitions
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct TemplateSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub color_scheme: &'static str,
    pub layout: &'static str,
    pub features: &'static [&'static str],
    pub preview_image: &'static str,
}

impl TemplateSpec {
    pub fn to_descriptor(&self, id: u32, rationale: Rationale) -> TemplateDescriptor {
        TemplateDescriptor {
            id,
            name: self.name.to_string(),
            description: self.description.to_string(),
            color_scheme: self.color_scheme.to_string(),
            layout: self.layout.to_string(),
            features: self.features.iter().map(|f| f.to_string()).collect(),
            preview_image: self.preview_image.to_string(),
            rationale,
        }
    }
}

pub const CREATIVE_PORTFOLIO: TemplateSpec = TemplateSpec {
    name: "Creative Portfolio",
    description: "Bold and vibrant design for creative professionals",
    color_scheme: "Vibrant complementary colors with dynamic elements",
    layout: "Hero banner, Work showcase, Skills, About me, Contact",
    features: &[
        "Interactive project showcase",
        "Animated transitions",
        "Custom cursor",
        "Visual skill representation",
    ],
    preview_image: "/placeholder.svg?height=160&width=300&text=Creative+Portfolio",
};

pub const PROFESSIONAL_CORPORATE: TemplateSpec = TemplateSpec {
    name: "Professional Corporate",
    description: "Sophisticated and professional design for corporate environments",
    color_scheme: "Subtle blues and grays with professional accent colors",
    layout: "About, Experience, Skills, Education, Projects, Contact",
    features: &[
        "Timeline for experience",
        "Downloadable resume",
        "Testimonials carousel",
        "Professional contact form",
    ],
    preview_image: "/placeholder.svg?height=160&width=300&text=Professional+Corporate",
};

pub const TECH_INNOVATOR: TemplateSpec = TemplateSpec {
    name: "Tech Innovator",
    description: "Modern tech-focused design with code elements",
    color_scheme: "Dark mode with neon accents and code syntax highlighting",
    layout: "Terminal intro, Projects, Technical skills, GitHub stats, Contact",
    features: &[
        "Code snippet showcases",
        "GitHub integration",
        "Terminal-style intro",
        "Tech stack visualization",
    ],
    preview_image: "/placeholder.svg?height=160&width=300&text=Tech+Innovator",
};

pub const BUSINESS_PROFESSIONAL: TemplateSpec = TemplateSpec {
    name: "Business Professional",
    description: "Results-oriented design for business professionals",
    color_scheme: "Rich neutrals with gold accents",
    layout: "Executive summary, Achievements, Experience, Testimonials, Contact",
    features: &[
        "Metrics and results showcase",
        "Client testimonials",
        "Achievement timeline",
        "Professional headshot focus",
    ],
    preview_image: "/placeholder.svg?height=160&width=300&text=Business+Professional",
};

pub const VERSATILE_PORTFOLIO: TemplateSpec = TemplateSpec {
    name: "Versatile Portfolio",
    description: "Adaptable design suitable for various professions",
    color_scheme: "Customizable with preset themes",
    layout: "Flexible sections that can be reordered",
    features: &[
        "Customizable section order",
        "Multiple theme options",
        "Responsive design",
        "Social media integration",
    ],
    preview_image: "/placeholder.svg?height=160&width=300&text=Versatile+Portfolio",
};

pub const DATA_SCIENTIST_PORTFOLIO: TemplateSpec = TemplateSpec {
    name: "Data Scientist Portfolio",
    description: "Showcase your data projects and analytical skills",
    color_scheme: "Data visualization inspired colors with clean white space",
    layout: "Data projects, Visualizations, Technical skills, Research, Contact",
    features: &[
        "Interactive data visualizations",
        "Jupyter notebook integration",
        "Case study format for projects",
        "Research publication highlights",
    ],
    preview_image: "/placeholder.svg?height=160&width=300&text=Data+Scientist",
};

pub const UX_UI_DESIGNER_PORTFOLIO: TemplateSpec = TemplateSpec {
    name: "UX/UI Designer Portfolio",
    description: "Highlight your design process and user-centered solutions",
    color_scheme: "Clean with accessibility-focused color palette",
    layout: "Case studies, Design process, UI components, User research, Contact",
    features: &[
        "Case study storytelling",
        "Before/after comparisons",
        "Interactive prototypes",
        "User testing results",
    ],
    preview_image: "/placeholder.svg?height=160&width=300&text=UX/UI+Designer",
};

pub const CONTENT_CREATOR_PORTFOLIO: TemplateSpec = TemplateSpec {
    name: "Content Creator Portfolio",
    description: "Showcase your writing and content creation skills",
    color_scheme: "Typography-focused with readable contrast",
    layout: "Featured articles, Writing samples, Client work, Blog, Contact",
    features: &[
        "Article previews",
        "Content categories",
        "Reading time estimates",
        "Publication highlights",
    ],
    preview_image: "/placeholder.svg?height=160&width=300&text=Content+Creator",
};

// Static defaults double as the seed catalog.
const DEFAULT_MINIMALIST: TemplateSpec = TemplateSpec {
    name: "Modern Minimalist",
    description: "Clean, minimal design with focus on content and readability",
    color_scheme: "Monochromatic with accent colors",
    layout: "Header, Skills, Projects, Experience, Contact",
    features: &["Animated skill bars", "Project gallery", "Testimonials section"],
    preview_image: "/placeholder.svg?height=160&width=300&text=Template+1",
};

const DEFAULT_CREATIVE_BOLD: TemplateSpec = TemplateSpec {
    name: "Creative Bold",
    description: "Vibrant and eye-catching design for creative professionals",
    color_scheme: "Bold complementary colors",
    layout: "Hero banner, Work showcase, Skills, About me, Contact",
    features: &[
        "Interactive project showcase",
        "Animated transitions",
        "Custom cursor",
    ],
    preview_image: "/placeholder.svg?height=160&width=300&text=Template+2",
};

const DEFAULT_CORPORATE: TemplateSpec = TemplateSpec {
    name: "Professional Corporate",
    description: "Sophisticated and professional design for corporate environments",
    color_scheme: "Subtle blues and grays",
    layout: "About, Experience, Skills, Education, Projects, Contact",
    features: &[
        "Timeline for experience",
        "Downloadable resume",
        "Testimonials carousel",
    ],
    preview_image: "/placeholder.svg?height=160&width=300&text=Template+3",
};

const CATALOG_TECH: TemplateSpec = TemplateSpec {
    name: "Tech Innovator",
    description: "Modern tech-focused design with code elements",
    color_scheme: "Dark mode with neon accents",
    layout: "Terminal intro, Projects, Technical skills, GitHub stats, Contact",
    features: &[
        "Code snippet showcases",
        "GitHub integration",
        "Terminal-style intro",
    ],
    preview_image: "/placeholder.svg?height=160&width=300&text=Template+4",
};

// ────────────────────────────────────────────────────────────────────────────
// Builders
// ────────────────────────────────────────────────────────────────────────────

/// The always-present first recommendation, personalized with the profile's
/// title and its first three skills.
pub fn modern_minimalist(profile: &ProfileRecord, id: u32) -> TemplateDescriptor {
    TemplateDescriptor {
        id,
        name: "Modern Minimalist".to_string(),
        description: format!("Clean, minimal design perfect for {}", profile.title),
        color_scheme: "Monochromatic with subtle accent colors".to_string(),
        layout: "Header, Skills, Projects, Experience, Contact".to_string(),
        features: vec![
            "Animated skill bars".to_string(),
            "Project gallery".to_string(),
            "Testimonials section".to_string(),
            format!("Optimized for {} showcase", profile.top_skills(3).join(", ")),
        ],
        preview_image: "/placeholder.svg?height=160&width=300&text=Modern+Minimalist"
            .to_string(),
        rationale: Rationale::Baseline,
    }
}

/// Fixed list served when the engine cannot produce a recommendation.
pub fn default_templates() -> Vec<TemplateDescriptor> {
    [DEFAULT_MINIMALIST, DEFAULT_CREATIVE_BOLD, DEFAULT_CORPORATE]
        .iter()
        .zip(1..)
        .map(|(spec, id)| spec.to_descriptor(id, Rationale::StaticDefault))
        .collect()
}

pub fn seed_catalog() -> Vec<CatalogEntry> {
    [
        (DEFAULT_MINIMALIST, TemplateCategory::Minimal),
        (DEFAULT_CREATIVE_BOLD, TemplateCategory::Creative),
        (DEFAULT_CORPORATE, TemplateCategory::Professional),
        (CATALOG_TECH, TemplateCategory::Tech),
    ]
    .iter()
    .zip(1..)
    .map(|((spec, category), id)| CatalogEntry {
        category: *category,
        template: spec.to_descriptor(id, Rationale::Catalog),
    })
    .collect()
}
