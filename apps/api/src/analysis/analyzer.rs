//! Job description analyzer: keyword rules that classify a posting's role and domain
//! and list the headline requirements it mentions.
//!
//! Pure and deterministic: the same text always yields the same `JobInsights`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shortest description accepted for analysis, in characters.
pub const MIN_DESCRIPTION_CHARS: usize = 50;

pub const FUNCTIONAL_ROLES: &[&str] = &[
    "Product Manager",
    "Program Manager",
    "Partnerships Manager",
    "Project Manager",
    "Marketing Manager",
    "Operations Manager",
];

pub const INDUSTRY_DOMAINS: &[&str] = &[
    "Education",
    "Fintech",
    "Healthcare",
    "E-commerce",
    "SaaS",
    "Consulting",
    "Technology",
    "Media",
];

const DEFAULT_ROLE: &str = "Operations Manager";
const DEFAULT_DOMAIN: &str = "Technology";

/// (trigger phrases, label). Checked top to bottom; first hit wins.
type Rule = (&'static [&'static str], &'static str);

const ROLE_RULES: &[Rule] = &[
    (&["product manager", "product management"], "Product Manager"),
    (&["program manager", "program management"], "Program Manager"),
    (&["partnership", "business development"], "Partnerships Manager"),
    (&["project manager", "project management"], "Project Manager"),
    (&["marketing"], "Marketing Manager"),
];

const DOMAIN_RULES: &[Rule] = &[
    (&["education", "learning", "school"], "Education"),
    (&["fintech", "financial", "payment"], "Fintech"),
    (&["healthcare", "medical", "health"], "Healthcare"),
    (&["ecommerce", "e-commerce", "retail"], "E-commerce"),
    (&["saas", "software as a service"], "SaaS"),
    (&["consulting"], "Consulting"),
    (&["media", "content"], "Media"),
];

/// Independent checks; every hit contributes its line once, in this order.
const REQUIREMENT_RULES: &[Rule] = &[
    (&["bachelor", "degree"], "Bachelor's degree required"),
    (&["5+ years", "5 years"], "5+ years of experience"),
    (&["agile", "scrum"], "Agile/Scrum experience"),
    (&["sql", "analytics"], "Data analysis skills"),
    (&["leadership", "team management"], "Leadership experience"),
];

/// Classification extracted from one job description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobInsights {
    pub extracted_role: String,
    pub extracted_domain: String,
    pub key_requirements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Job description must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },
}

/// Analyzes a raw job description. Rejects text under `MIN_DESCRIPTION_CHARS`.
pub fn analyze_job_description(text: &str) -> Result<JobInsights, AnalysisError> {
    let actual = text.chars().count();
    if actual < MIN_DESCRIPTION_CHARS {
        return Err(AnalysisError::TooShort {
            min: MIN_DESCRIPTION_CHARS,
            actual,
        });
    }

    let lowered = text.to_lowercase();

    Ok(JobInsights {
        extracted_role: first_match(&lowered, ROLE_RULES, DEFAULT_ROLE).to_string(),
        extracted_domain: first_match(&lowered, DOMAIN_RULES, DEFAULT_DOMAIN).to_string(),
        key_requirements: REQUIREMENT_RULES
            .iter()
            .filter(|(phrases, _)| mentions_any(&lowered, phrases))
            .map(|(_, line)| line.to_string())
            .collect(),
    })
}

fn first_match(text: &str, rules: &[Rule], default: &'static str) -> &'static str {
    rules
        .iter()
        .find(|(phrases, _)| mentions_any(text, phrases))
        .map(|(_, label)| *label)
        .unwrap_or(default)
}

fn mentions_any(text: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|p| text.contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PADDING: &str = " Join our growing team and help us build great things together.";

    fn analyze(text: &str) -> JobInsights {
        analyze_job_description(&format!("{text}{PADDING}")).unwrap()
    }

    #[test]
    fn test_reference_example() {
        let insights =
            analyze_job_description("We need a Program Manager with 5+ years and SaaS experience")
                .unwrap();
        assert_eq!(insights.extracted_role, "Program Manager");
        assert_eq!(insights.extracted_domain, "SaaS");
        assert!(insights
            .key_requirements
            .contains(&"5+ years of experience".to_string()));
        assert!(!insights
            .key_requirements
            .contains(&"Agile/Scrum experience".to_string()));
    }

    #[test]
    fn test_short_description_rejected() {
        let err = analyze_job_description("Product manager wanted").unwrap_err();
        assert_eq!(
            err,
            AnalysisError::TooShort {
                min: 50,
                actual: 22
            }
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 49 multi-byte characters is still too short.
        let text = "é".repeat(49);
        assert!(analyze_job_description(&text).is_err());
        let text = "é".repeat(50);
        assert!(analyze_job_description(&text).is_ok());
    }

    #[test]
    fn test_role_priority_program_before_marketing() {
        let insights = analyze("Marketing-savvy Program Manager for our launch calendar.");
        assert_eq!(insights.extracted_role, "Program Manager");
    }

    #[test]
    fn test_role_priority_product_first() {
        let insights = analyze("Product management role partnering with program management.");
        assert_eq!(insights.extracted_role, "Product Manager");
    }

    #[test]
    fn test_partnership_beats_project() {
        let insights = analyze("Own business development and project management for partners.");
        assert_eq!(insights.extracted_role, "Partnerships Manager");
    }

    #[test]
    fn test_role_is_case_insensitive() {
        let insights = analyze("SENIOR PROJECT MANAGER, infrastructure delivery.");
        assert_eq!(insights.extracted_role, "Project Manager");
    }

    #[test]
    fn test_role_defaults_to_operations() {
        let insights = analyze("Run the warehouse floor and keep shipments on schedule.");
        assert_eq!(insights.extracted_role, "Operations Manager");
    }

    #[test]
    fn test_domain_priority_education_before_health() {
        let insights = analyze("Health education startup building school programs.");
        assert_eq!(insights.extracted_domain, "Education");
    }

    #[test]
    fn test_domain_matches_substrings() {
        // "healthy" contains "health".
        let insights = analyze("Keep our pipeline healthy and our customers happy.");
        assert_eq!(insights.extracted_domain, "Healthcare");
    }

    #[test]
    fn test_domain_ecommerce_variants() {
        assert_eq!(
            analyze("Scale our e-commerce storefront.").extracted_domain,
            "E-commerce"
        );
        assert_eq!(
            analyze("Scale our retail storefront.").extracted_domain,
            "E-commerce"
        );
    }

    #[test]
    fn test_domain_defaults_to_technology() {
        let insights = analyze("Ship developer tools for cloud infrastructure engineers.");
        assert_eq!(insights.extracted_domain, "Technology");
    }

    #[test]
    fn test_requirements_follow_rule_order() {
        let insights = analyze(
            "Leadership required. SQL and analytics daily. Scrum ceremonies. \
             5 years in role. Bachelor degree.",
        );
        assert_eq!(
            insights.key_requirements,
            vec![
                "Bachelor's degree required",
                "5+ years of experience",
                "Agile/Scrum experience",
                "Data analysis skills",
                "Leadership experience",
            ]
        );
    }

    #[test]
    fn test_each_requirement_contributes_once() {
        let insights = analyze("Agile, agile, agile. Scrum and more scrum.");
        assert_eq!(insights.key_requirements, vec!["Agile/Scrum experience"]);
    }

    #[test]
    fn test_no_requirements_yields_empty_list() {
        let insights = analyze("Friendly office with snacks and a nice view.");
        assert!(insights.key_requirements.is_empty());
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let text = "Product Manager for fintech payments, 5+ years, agile teams, SQL.";
        assert_eq!(
            analyze_job_description(text).unwrap(),
            analyze_job_description(text).unwrap()
        );
    }

    #[test]
    fn test_every_extracted_label_is_in_vocabulary() {
        for text in [
            "Product manager for online learning in schools everywhere today.",
            "Anything at all with no keywords, just enough words to pass the minimum.",
        ] {
            let insights = analyze_job_description(text).unwrap();
            assert!(FUNCTIONAL_ROLES.contains(&insights.extracted_role.as_str()));
            assert!(INDUSTRY_DOMAINS.contains(&insights.extracted_domain.as_str()));
        }
    }
}
