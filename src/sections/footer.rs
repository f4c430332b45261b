use chrono::Datelike;

use super::contact::social_links;
use super::{html_escape, usable_url, Section};
use crate::models::catalog;
use crate::models::portfolio::PortfolioDocument;

/// Page footer. `year` feeds the default copyright line.
pub struct Footer {
    pub year: i32,
}

impl Footer {
    pub fn current() -> Self {
        Footer {
            year: chrono::Utc::now().year(),
        }
    }
}

impl Section for Footer {
    fn id(&self) -> &'static str {
        "footer"
    }

    fn noun(&self) -> &'static str {
        "footer"
    }

    fn tag(&self) -> &'static str {
        "footer"
    }

    fn render_ready(&self, doc: &PortfolioDocument) -> String {
        let footer = doc.footer.as_ref();

        let copyright = footer
            .and_then(|f| f.copyright.as_deref())
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| {
                let name = doc.personal.name.trim();
                let name = if name.is_empty() { "Portfolio" } else { name };
                format!("© {} {}. All rights reserved.", self.year, name)
            });

        let socials = social_links(&doc.personal, catalog::FOOTER_SOCIALS);
        let socials_html = if socials.is_empty() {
            String::new()
        } else {
            format!("<div class=\"footer-social\">{}</div>", socials)
        };

        let mut links = String::new();
        for (index, link) in footer.map(|f| f.links.as_slice()).unwrap_or(&[]).iter().enumerate() {
            let Some(url) = usable_url(Some(&link.url)) else {
                continue;
            };
            links.push_str(&format!(
                "<a class=\"item\" data-key=\"{}\" href=\"{}\">{}</a>",
                index,
                html_escape(url),
                html_escape(&link.name)
            ));
        }
        let links_html = if links.is_empty() {
            String::new()
        } else {
            format!("<nav class=\"footer-links\">{}</nav>", links)
        };

        format!(
            "<div class=\"footer-inner\">{}<p class=\"copyright\">{}</p>{}</div>",
            socials_html,
            html_escape(&copyright),
            links_html
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::portfolio::{Footer as FooterData, FooterLink};

    #[test]
    fn default_copyright() {
        let mut doc = PortfolioDocument::default();
        let footer = Footer { year: 2031 };
        assert!(footer
            .render_ready(&doc)
            .contains("© 2031 Portfolio. All rights reserved."));

        doc.personal.name = "Ada Lovelace".into();
        assert!(footer
            .render_ready(&doc)
            .contains("© 2031 Ada Lovelace. All rights reserved."));
    }

    #[test]
    fn override_and_links() {
        let mut doc = PortfolioDocument::default();
        doc.footer = Some(FooterData {
            copyright: Some("Made by hand".into()),
            links: vec![
                FooterLink {
                    name: "Blog".into(),
                    url: "https://blog.example.com".into(),
                },
                FooterLink {
                    name: "Nowhere".into(),
                    url: "".into(),
                },
            ],
        });
        let html = Footer { year: 2031 }.render_ready(&doc);
        assert!(html.contains("Made by hand"));
        assert!(!html.contains("All rights reserved"));
        assert!(html.contains("href=\"https://blog.example.com\">Blog</a>"));
        assert!(!html.contains("Nowhere"));
    }
}
