use super::{html_escape, section_header, Section};
use crate::models::portfolio::PortfolioDocument;

pub struct About;

impl Section for About {
    fn id(&self) -> &'static str {
        "about"
    }

    fn noun(&self) -> &'static str {
        "about section"
    }

    fn render_ready(&self, doc: &PortfolioDocument) -> String {
        let about = &doc.about;
        let description = if about.description.trim().is_empty() {
            "<p class=\"empty-state\">No description available.</p>".to_string()
        } else {
            format!("<p class=\"about-description\">{}</p>", html_escape(&about.description))
        };

        let mut highlights = String::new();
        let items: Vec<&String> = about
            .highlights
            .iter()
            .filter(|h| !h.trim().is_empty())
            .collect();
        if !items.is_empty() {
            highlights.push_str("<div class=\"about-highlights\">");
            for (index, item) in items.iter().enumerate() {
                highlights.push_str(&format!(
                    "<div class=\"item highlight\" data-key=\"{}\">{}</div>",
                    index,
                    html_escape(item)
                ));
            }
            highlights.push_str("</div>");
        }

        format!(
            "{}<div class=\"about-body\">{}{}</div>",
            section_header("Get to know me", "About"),
            description,
            highlights
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_about() {
        let html = About.render_ready(&PortfolioDocument::default());
        assert!(html.contains("No description available."));
        assert!(!html.contains("data-key"));
    }

    #[test]
    fn highlights_in_order() {
        let mut doc = PortfolioDocument::default();
        doc.about.description = "I make things.".into();
        doc.about.highlights = vec!["First".into(), "".into(), "Second".into()];
        let html = About.render_ready(&doc);
        assert!(html.contains("I make things."));
        assert_eq!(html.matches("data-key=").count(), 2);
        assert!(html.find("First").unwrap() < html.find("Second").unwrap());
    }
}
