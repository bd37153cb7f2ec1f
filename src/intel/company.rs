//! Heuristic company classification
//!
//! Name lists and keyword tables are static; classification is substring
//! matching, nothing more.

use serde::Serialize;
use std::fmt;

/// Known enterprise companies.
const ENTERPRISE_COMPANIES: &[&str] = &[
    "Google",
    "Amazon",
    "Microsoft",
    "Apple",
    "Meta",
    "Facebook",
    "Netflix",
    "Adobe",
    "Oracle",
    "SAP",
    "IBM",
    "Salesforce",
    "Infosys",
    "TCS",
    "Wipro",
    "Cognizant",
    "Accenture",
    "Capgemini",
    "HCL",
    "Tech Mahindra",
    "LTI",
    "Mindtree",
    "Mphasis",
    "Dell",
    "HP",
    "Cisco",
    "Intel",
    "NVIDIA",
    "Qualcomm",
    "Goldman Sachs",
    "Morgan Stanley",
    "JP Morgan",
    "Citi",
    "HSBC",
    "Walmart",
    "Target",
    "Uber",
    "Airbnb",
    "LinkedIn",
];

/// Mid-size companies.
const MIDSIZE_COMPANIES: &[&str] = &[
    "Atlassian",
    "Shopify",
    "Stripe",
    "Twilio",
    "Snowflake",
    "Databricks",
    "Confluent",
    "MongoDB",
    "Redis",
    "Elastic",
    "Freshworks",
    "Zendesk",
    "Zoho",
    "Postman",
    "Razorpay",
];

/// Industry inference table, scanned in order; first hit wins.
const INDUSTRY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "FinTech",
        &["bank", "finance", "payment", "fintech", "trading", "capital", "investment"],
    ),
    (
        "E-Commerce",
        &["shop", "commerce", "retail", "marketplace", "store"],
    ),
    (
        "Healthcare",
        &["health", "medical", "pharma", "biotech", "hospital"],
    ),
    (
        "EdTech",
        &["education", "learning", "academy", "school", "university"],
    ),
    (
        "Enterprise Software",
        &["enterprise", "business", "solutions", "consulting"],
    ),
    (
        "Cloud & Infrastructure",
        &["cloud", "aws", "azure", "infrastructure", "devops"],
    ),
    ("AI/ML", &["ai", "machine learning", "data science", "analytics"]),
    ("Gaming", &["game", "gaming", "esports"]),
];

const DEFAULT_INDUSTRY: &str = "Technology Services";

/// Company size tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CompanySize {
    Enterprise,
    #[serde(rename = "Mid-size")]
    MidSize,
    Startup,
}

impl fmt::Display for CompanySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CompanySize::Enterprise => "Enterprise",
            CompanySize::MidSize => "Mid-size",
            CompanySize::Startup => "Startup",
        };
        write!(f, "{}", label)
    }
}

/// Typical hiring focus for a size tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HiringFocus {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub emphasis: &'static str,
}

/// Display triple for a size tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizeInfo {
    pub label: &'static str,
    pub range: &'static str,
    pub icon: &'static str,
}

/// Complete intel for a company/role pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyIntel {
    pub company_name: String,
    pub industry: &'static str,
    pub size: CompanySize,
    pub size_info: SizeInfo,
    pub hiring_focus: HiringFocus,
}

/// Categorize the company into a size tier. Enterprise list is checked
/// first, then mid-size; anything else (including no name) is a startup.
pub fn categorize_company_size(company_name: &str) -> CompanySize {
    let normalized = company_name.to_lowercase();
    let normalized = normalized.trim();
    if normalized.is_empty() {
        return CompanySize::Startup;
    }

    if ENTERPRISE_COMPANIES
        .iter()
        .any(|name| normalized.contains(&name.to_lowercase()))
    {
        return CompanySize::Enterprise;
    }
    if MIDSIZE_COMPANIES
        .iter()
        .any(|name| normalized.contains(&name.to_lowercase()))
    {
        return CompanySize::MidSize;
    }

    CompanySize::Startup
}

/// Infer an industry from the company name and role.
pub fn infer_industry(company_name: &str, role: &str) -> &'static str {
    let search_text = format!("{} {}", company_name, role).to_lowercase();

    for (industry, keywords) in INDUSTRY_KEYWORDS {
        if keywords.iter().any(|keyword| search_text.contains(keyword)) {
            return industry;
        }
    }

    DEFAULT_INDUSTRY
}

/// Hiring focus for a size tier.
pub fn hiring_focus(size: CompanySize) -> HiringFocus {
    match size {
        CompanySize::Enterprise => HiringFocus {
            primary: "Structured DSA + Core Fundamentals",
            secondary: "System design, behavioral, cultural fit",
            emphasis: "Strong focus on algorithmic problem solving and computer science fundamentals. Expect multiple rigorous coding rounds.",
        },
        CompanySize::MidSize => HiringFocus {
            primary: "Balanced DSA + Practical Skills",
            secondary: "Project experience, tech stack familiarity",
            emphasis: "Mix of algorithmic thinking and hands-on development skills. Portfolio and past projects matter.",
        },
        CompanySize::Startup => HiringFocus {
            primary: "Practical Problem Solving + Stack Depth",
            secondary: "Speed of execution, learning ability",
            emphasis: "Focus on getting things done. Real-world coding ability and tech stack expertise are highly valued.",
        },
    }
}

/// Display label/range/icon for a size tier.
pub fn size_info(size: CompanySize) -> SizeInfo {
    match size {
        CompanySize::Enterprise => SizeInfo {
            label: "Enterprise",
            range: "2000+ employees",
            icon: "🏢",
        },
        CompanySize::MidSize => SizeInfo {
            label: "Mid-size",
            range: "200-2000 employees",
            icon: "🏭",
        },
        CompanySize::Startup => SizeInfo {
            label: "Startup",
            range: "<200 employees",
            icon: "🚀",
        },
    }
}

/// Assemble the full intel object.
pub fn generate_company_intel(company_name: &str, role: &str) -> CompanyIntel {
    let size = categorize_company_size(company_name);

    CompanyIntel {
        company_name: if company_name.is_empty() {
            "Unknown".to_string()
        } else {
            company_name.to_string()
        },
        industry: infer_industry(company_name, role),
        size,
        size_info: size_info(size),
        hiring_focus: hiring_focus(size),
    }
}
