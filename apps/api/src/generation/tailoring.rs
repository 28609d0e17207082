//! Tailored content: tagline, summary and experience pre-selection for a target role.
//!
//! Default: `TemplateTailor` (fixed lookup tables, exact case-sensitive role match).
//! Carried in `AppState` as `Arc<dyn ContentTailor>` so a different generator can be
//! dropped in without touching the handlers.

use serde::{Deserialize, Serialize};

use crate::models::resume::MasterResumeData;

const DEFAULT_TAGLINE: &str = "Experienced Professional";

const TAGLINES: &[(&str, &str)] = &[
    ("Product Manager", "Strategic Product Leader"),
    ("Program Manager", "Cross-Functional Program Expert"),
    ("Partnerships Manager", "Strategic Partnership Builder"),
    ("Project Manager", "Results-Driven Project Leader"),
    ("Marketing Manager", "Growth-Focused Marketing Leader"),
    ("Operations Manager", "Operational Excellence Driver"),
];

const SUMMARIES: &[(&str, &str)] = &[
    (
        "Product Manager",
        "Experienced product manager with a proven track record of driving product strategy \
         and execution. Skilled in market analysis, user research, and cross-functional \
         collaboration to deliver innovative solutions that drive business growth.",
    ),
    (
        "Program Manager",
        "Results-oriented program manager with expertise in managing complex, cross-functional \
         initiatives. Strong background in stakeholder management, process optimization, and \
         delivering strategic programs on time and within budget.",
    ),
    (
        "Partnerships Manager",
        "Strategic partnerships professional with experience building and managing key business \
         relationships. Proven ability to identify partnership opportunities, negotiate \
         agreements, and drive mutual value creation.",
    ),
];

/// Suggested content for a version targeting one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailoredContent {
    pub target_role: String,
    pub tagline: String,
    pub summary: String,
    /// Ids of master experiences tagged with the role, in master order.
    pub selected_experiences: Vec<String>,
}

pub trait ContentTailor: Send + Sync {
    fn tailor(&self, target_role: &str, master: &MasterResumeData) -> TailoredContent;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateTailor;

impl ContentTailor for TemplateTailor {
    fn tailor(&self, target_role: &str, master: &MasterResumeData) -> TailoredContent {
        TailoredContent {
            target_role: target_role.to_string(),
            tagline: tagline_for(target_role).to_string(),
            summary: summary_for(target_role),
            selected_experiences: master
                .experiences_tagged(target_role)
                .map(|e| e.id.clone())
                .collect(),
        }
    }
}

pub fn tagline_for(role: &str) -> &'static str {
    lookup(TAGLINES, role).unwrap_or(DEFAULT_TAGLINE)
}

pub fn summary_for(role: &str) -> String {
    match lookup(SUMMARIES, role) {
        Some(summary) => summary.to_string(),
        None => format!(
            "Experienced professional with a strong background in {} and a proven track record \
             of delivering results.",
            role.to_lowercase()
        ),
    }
}

fn lookup(table: &[(&str, &'static str)], role: &str) -> Option<&'static str> {
    table.iter().find(|(key, _)| *key == role).map(|(_, v)| *v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::WorkExperience;

    fn experience(id: &str, tags: &[&str]) -> WorkExperience {
        WorkExperience {
            id: id.to_string(),
            company: format!("{id} Inc"),
            position: "Manager".to_string(),
            start_date: "2019-01".to_string(),
            end_date: "2021-06".to_string(),
            description: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn master() -> MasterResumeData {
        MasterResumeData {
            work_experiences: vec![
                experience("a", &["Program Manager", "SaaS"]),
                experience("b", &["Product Manager"]),
                experience("c", &["Program Manager"]),
            ],
            ..MasterResumeData::default()
        }
    }

    #[test]
    fn test_known_role_uses_tables() {
        let content = TemplateTailor.tailor("Program Manager", &master());
        assert_eq!(content.tagline, "Cross-Functional Program Expert");
        assert!(content.summary.starts_with("Results-oriented program manager"));
        assert_eq!(content.selected_experiences, vec!["a", "c"]);
    }

    #[test]
    fn test_every_functional_role_has_a_tagline() {
        for role in crate::analysis::analyzer::FUNCTIONAL_ROLES {
            assert_ne!(tagline_for(role), DEFAULT_TAGLINE, "{role}");
        }
    }

    #[test]
    fn test_role_without_summary_template_gets_default() {
        let summary = summary_for("Marketing Manager");
        assert_eq!(
            summary,
            "Experienced professional with a strong background in marketing manager and a \
             proven track record of delivering results."
        );
        assert_eq!(tagline_for("Marketing Manager"), "Growth-Focused Marketing Leader");
    }

    #[test]
    fn test_unknown_role_defaults() {
        let content = TemplateTailor.tailor("Chief Wizard", &master());
        assert_eq!(content.tagline, "Experienced Professional");
        assert!(content.summary.contains("chief wizard"));
        assert!(content.selected_experiences.is_empty());
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let content = TemplateTailor.tailor("program manager", &master());
        assert_eq!(content.tagline, DEFAULT_TAGLINE);
        assert!(content.selected_experiences.is_empty());
    }

    #[test]
    fn test_preselection_matches_any_exact_tag() {
        let content = TemplateTailor.tailor("SaaS", &master());
        assert_eq!(content.selected_experiences, vec!["a"]);
    }
}
