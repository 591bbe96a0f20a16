use serde::{Deserialize, Serialize};

/// Size category of the hiring organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompanyScale {
    #[serde(rename = "Startup")]
    Startup,
    #[serde(rename = "Mid-Scale", alias = "Mid-scale", alias = "Midscale")]
    MidScale,
    #[serde(
        rename = "Multinational Corporation",
        alias = "Multinational",
        alias = "MNC"
    )]
    Multinational,
    #[serde(rename = "Small & Medium Enterprise", alias = "SME")]
    Sme,
}

impl CompanyScale {
    /// All scales, in filter display order.
    pub const ALL: [CompanyScale; 4] = [
        CompanyScale::Startup,
        CompanyScale::MidScale,
        CompanyScale::Multinational,
        CompanyScale::Sme,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CompanyScale::Startup => "Startup",
            CompanyScale::MidScale => "Mid-Scale",
            CompanyScale::Multinational => "Multinational Corporation",
            CompanyScale::Sme => "Small & Medium Enterprise",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            CompanyScale::Startup => "🚀",
            CompanyScale::MidScale => "🏢",
            CompanyScale::Multinational => "🌐",
            CompanyScale::Sme => "🏭",
        }
    }

    /// Parse a scale from its display label (the value used by the scale filter).
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

/// A single job posting as supplied by a data source. Never mutated after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub company: String,
    pub company_scale: CompanyScale,
    pub description: String,
    pub apply_link: String,
    /// Posting time in epoch milliseconds.
    pub date_posted: i64,
    pub location: String,
    pub country: String,
    pub industry: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_career_site: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}
