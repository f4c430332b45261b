use std::collections::HashSet;

use super::{empty_state, html_escape, section_header, slugify, Section};
use crate::models::catalog;
use crate::models::portfolio::{PortfolioDocument, Skill, Skills as SkillLists};

pub struct Skills;

/// All skills across the four lists, first occurrence of each name wins.
pub fn unique_skills(skills: &SkillLists) -> Vec<&Skill> {
    let languages = skills.languages.as_deref().unwrap_or(&[]);
    let mut seen = HashSet::new();
    skills
        .frontend
        .iter()
        .chain(&skills.backend)
        .chain(&skills.tools)
        .chain(languages)
        .filter(|s| !s.name.trim().is_empty())
        .filter(|s| seen.insert(s.name.as_str()))
        .collect()
}

impl Section for Skills {
    fn id(&self) -> &'static str {
        "skills"
    }

    fn noun(&self) -> &'static str {
        "skills"
    }

    fn render_ready(&self, doc: &PortfolioDocument) -> String {
        let header = section_header("What I work with", "Skills & Technologies");
        let skills = unique_skills(&doc.skills);
        if skills.is_empty() {
            return format!("{}{}", header, empty_state("No skills to display."));
        }

        let mut html = format!("{}<div class=\"skills-grid\">", header);
        for skill in skills {
            let meta = catalog::tech_or_fallback(&skill.name);
            html.push_str(&format!(
                "<div class=\"item skill-card\" data-key=\"{name}\" data-testid=\"skill-{slug}\" style=\"--brand:{color}\"><img src=\"{logo}\" alt=\"{name} logo\" loading=\"lazy\"><span>{name}</span></div>",
                name = html_escape(&skill.name),
                slug = html_escape(&slugify(&skill.name)),
                color = meta.color,
                logo = html_escape(&meta.logo_url()),
            ));
        }
        html.push_str("</div>");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str) -> Skill {
        Skill {
            name: name.into(),
            level: Some(80.0),
        }
    }

    #[test]
    fn dedupes_across_lists_first_seen() {
        let lists = SkillLists {
            frontend: vec![skill("React"), skill("CSS")],
            backend: vec![skill("Go")],
            tools: vec![skill("React"), skill("Git")],
            languages: Some(vec![skill("Go"), skill("Rust")]),
        };
        let names: Vec<&str> = unique_skills(&lists).into_iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["React", "CSS", "Go", "Git", "Rust"]);
    }

    #[test]
    fn one_card_per_name() {
        let mut doc = PortfolioDocument::default();
        doc.skills.frontend = vec![skill("React")];
        doc.skills.tools = vec![skill("React"), skill("Cobol")];
        let html = Skills.render_ready(&doc);
        assert_eq!(html.matches("data-testid=\"skill-react\"").count(), 1);
        assert_eq!(html.matches("class=\"item skill-card\"").count(), 2);
        // unknown skill still gets the fallback logo
        assert!(html.contains("codepen-plain.svg"));
    }

    #[test]
    fn empty_skills() {
        let html = Skills.render_ready(&PortfolioDocument::default());
        assert!(html.contains("No skills to display."));
        assert!(!html.contains("skill-card"));
    }
}
