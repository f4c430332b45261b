use super::{html_escape, usable_url, Section};
use crate::models::portfolio::PortfolioDocument;

const DEFAULT_TITLE: &str = "Full Stack Developer";
const DEFAULT_BIO: &str = "I build modern, efficient, and scalable web applications.";

/// Landing block, anchored at `home`.
pub struct Hero;

impl Section for Hero {
    fn id(&self) -> &'static str {
        "home"
    }

    fn noun(&self) -> &'static str {
        "hero section"
    }

    fn render_ready(&self, doc: &PortfolioDocument) -> String {
        let personal = &doc.personal;
        let first_name = personal.first_name().unwrap_or("Developer");
        let last_name = personal.last_name();
        let title = if personal.title.trim().is_empty() {
            DEFAULT_TITLE
        } else {
            personal.title.as_str()
        };
        let bio = if personal.bio.trim().is_empty() {
            DEFAULT_BIO
        } else {
            personal.bio.as_str()
        };

        let last_name_html = if last_name.is_empty() {
            String::new()
        } else {
            format!(" <span class=\"hero-last\">{}</span>", html_escape(&last_name))
        };

        let resume_html = match usable_url(Some(&personal.resume)) {
            Some(url) => format!(
                "<a class=\"btn btn-outline\" href=\"{}\" download data-testid=\"button-download-resume\">Download Resume</a>",
                html_escape(url)
            ),
            None => String::new(),
        };

        let avatar_html = match usable_url(Some(&personal.image)) {
            Some(src) => {
                let alt = if personal.name.trim().is_empty() {
                    "Developer".to_string()
                } else {
                    personal.name.clone()
                };
                format!(
                    "<div class=\"hero-avatar\"><img src=\"{}\" alt=\"{} - Portfolio\"></div>",
                    html_escape(src),
                    html_escape(&alt)
                )
            }
            None => String::new(),
        };

        format!(
            r##"<div class="hero-inner">
<div class="hero-copy">
<p class="hero-greeting">Hello, I'm</p>
<h1 class="hero-name"><span class="hero-first">{first}</span>{last}</h1>
<h2 class="hero-title">{title}</h2>
<p class="hero-bio">{bio}</p>
<div class="hero-actions"><a class="btn" href="#projects" data-nav="projects" data-testid="button-view-work">View My Work</a>{resume}</div>
</div>
{avatar}
</div>"##,
            first = html_escape(first_name),
            last = last_name_html,
            title = html_escape(title),
            bio = html_escape(bio),
            resume = resume_html,
            avatar = avatar_html,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_name_and_uses_defaults() {
        let mut doc = PortfolioDocument::default();
        doc.personal.name = "Ada King Lovelace".into();
        let html = Hero.render_ready(&doc);
        assert!(html.contains("<span class=\"hero-first\">Ada</span>"));
        assert!(html.contains("<span class=\"hero-last\">King Lovelace</span>"));
        assert!(html.contains(DEFAULT_TITLE));
        assert!(html.contains(DEFAULT_BIO));
        assert!(!html.contains("Download Resume"));
    }

    #[test]
    fn anonymous_document() {
        let html = Hero.render_ready(&PortfolioDocument::default());
        assert!(html.contains("<span class=\"hero-first\">Developer</span>"));
        assert!(!html.contains("hero-last"));
        assert!(!html.contains("hero-avatar"));
    }

    #[test]
    fn resume_and_avatar_when_present() {
        let mut doc = PortfolioDocument::default();
        doc.personal.name = "Ada".into();
        doc.personal.resume = "/files/cv.pdf".into();
        doc.personal.image = "/img/me.png".into();
        let html = Hero.render_ready(&doc);
        assert!(html.contains("href=\"/files/cv.pdf\" download"));
        assert!(html.contains("alt=\"Ada - Portfolio\""));
    }
}
