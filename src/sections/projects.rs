use super::{empty_state, html_escape, section_header, usable_url, Section};
use crate::models::catalog;
use crate::models::portfolio::{entry_key, PortfolioDocument, Project};

/// Featured projects only, in source order.
pub struct Projects;

impl Section for Projects {
    fn id(&self) -> &'static str {
        "projects"
    }

    fn noun(&self) -> &'static str {
        "projects"
    }

    fn render_ready(&self, doc: &PortfolioDocument) -> String {
        let header = section_header("My Work", "Featured Projects");
        let featured: Vec<&Project> = doc.featured_projects().collect();
        if featured.is_empty() {
            return format!("{}{}", header, empty_state("No featured projects to display."));
        }

        let mut html = format!("{}<div class=\"projects-grid\">", header);
        for (index, project) in featured.into_iter().enumerate() {
            html.push_str(&project_card(project, index));
        }
        html.push_str("</div>");
        html
    }
}

fn project_card(project: &Project, index: usize) -> String {
    let key = html_escape(&entry_key(project.id.as_ref(), index));

    let mut tech_html = String::new();
    for tech in project.technologies.iter().filter(|t| !t.trim().is_empty()) {
        let logo = catalog::tech(tech)
            .map(|meta| {
                format!(
                    "<img src=\"{}\" alt=\"{}\" loading=\"lazy\">",
                    html_escape(&meta.logo_url()),
                    html_escape(tech)
                )
            })
            .unwrap_or_default();
        tech_html.push_str(&format!(
            "<span class=\"tech-badge\" title=\"{name}\">{logo}<span>{name}</span></span>",
            name = html_escape(tech),
            logo = logo
        ));
    }

    let mut links = String::new();
    if let Some(demo) = usable_url(project.demo.as_deref()) {
        links.push_str(&format!(
            "<a class=\"btn\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" data-testid=\"button-live-demo-{}\">Live Demo</a>",
            html_escape(demo),
            key
        ));
    }
    if let Some(github) = usable_url(project.github.as_deref()) {
        links.push_str(&format!(
            "<a class=\"btn btn-outline\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" data-testid=\"button-github-{}\">GitHub</a>",
            html_escape(github),
            key
        ));
    }

    let image = match usable_url(Some(&project.image)) {
        Some(src) => format!(
            "<img class=\"project-image\" src=\"{}\" alt=\"{}\" loading=\"lazy\">",
            html_escape(src),
            html_escape(&project.title)
        ),
        None => String::new(),
    };

    format!(
        "<article class=\"item project-card\" data-key=\"{key}\" data-testid=\"card-project-{key}\">{image}<h3>{title}</h3><p>{description}</p><div class=\"tech-list\">{tech}</div><div class=\"project-links\">{links}</div></article>",
        key = key,
        image = image,
        title = html_escape(&project.title),
        description = html_escape(&project.description),
        tech = tech_html,
        links = links,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::portfolio::EntryId;

    fn project(id: i64, title: &str, featured: bool) -> Project {
        Project {
            id: Some(EntryId::Num(id)),
            title: title.into(),
            featured,
            ..Default::default()
        }
    }

    #[test]
    fn only_featured_in_order() {
        let mut doc = PortfolioDocument::default();
        doc.projects = vec![
            project(3, "Gamma", true),
            project(1, "Alpha", false),
            project(2, "Beta", true),
            project(4, "Delta", false),
        ];
        let html = Projects.render_ready(&doc);
        assert_eq!(html.matches("class=\"item project-card\"").count(), 2);
        assert!(!html.contains("Alpha"));
        assert!(!html.contains("Delta"));
        let gamma = html.find("data-key=\"3\"").unwrap();
        let beta = html.find("data-key=\"2\"").unwrap();
        assert!(gamma < beta);
    }

    #[test]
    fn no_featured_is_empty_state() {
        let mut doc = PortfolioDocument::default();
        doc.projects = vec![project(1, "Alpha", false)];
        let html = Projects.render_ready(&doc);
        assert!(html.contains("No featured projects to display."));
        assert!(!html.contains("project-card"));
    }

    #[test]
    fn links_and_logos() {
        let mut p = project(9, "Shop", true);
        p.technologies = vec!["React".into(), "Elm".into()];
        p.github = Some("https://github.com/x/shop".into());
        p.demo = Some("#".into());
        let html = project_card(&p, 0);
        assert!(html.contains("react-original.svg"));
        assert!(html.contains("<span>Elm</span>"));
        assert!(html.contains("data-testid=\"button-github-9\""));
        assert!(!html.contains("Live Demo"));
    }

    #[test]
    fn missing_id_keys_by_index() {
        let p = Project {
            title: "Untitled".into(),
            featured: true,
            ..Default::default()
        };
        assert!(project_card(&p, 4).contains("data-key=\"4\""));
    }
}
