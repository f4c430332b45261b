use super::timeline::date_range;
use super::{bullet_list, empty_state, html_escape, section_header, Section};
use crate::models::portfolio::{entry_key, Education as Entry, PortfolioDocument};

pub struct Education;

impl Section for Education {
    fn id(&self) -> &'static str {
        "education"
    }

    fn noun(&self) -> &'static str {
        "education"
    }

    fn render_ready(&self, doc: &PortfolioDocument) -> String {
        let header = section_header("Academic Background", "Education");
        if doc.education.is_empty() {
            return format!("{}{}", header, empty_state("No education to display."));
        }

        let mut html = format!("{}<div class=\"timeline\">", header);
        for (index, entry) in doc.education.iter().enumerate() {
            html.push_str(&card(entry, index));
        }
        html.push_str("</div>");
        html
    }
}

fn card(entry: &Entry, index: usize) -> String {
    let key = html_escape(&entry_key(entry.id.as_ref(), index));
    let optional = |class: &str, text: &str| -> String {
        if text.trim().is_empty() {
            String::new()
        } else {
            format!("<span class=\"{}\">{}</span>", class, html_escape(text))
        }
    };
    let gpa = if entry.gpa.trim().is_empty() {
        String::new()
    } else {
        format!("<p class=\"gpa\">GPA: {}</p>", html_escape(&entry.gpa))
    };
    let description = if entry.description.trim().is_empty() {
        String::new()
    } else {
        format!("<p>{}</p>", html_escape(&entry.description))
    };

    format!(
        "<article class=\"item timeline-card\" data-key=\"{key}\" data-testid=\"education-{key}\"><div class=\"timeline-head\"><h3>{degree}</h3><span class=\"duration\">{duration}</span></div><div class=\"timeline-sub\">{institution}{location}</div>{gpa}{description}{achievements}</article>",
        key = key,
        degree = html_escape(&entry.degree),
        duration = html_escape(&date_range(&entry.start_date, entry.end_date.as_deref(), false)),
        institution = optional("org", &entry.institution),
        location = optional("location", &entry.location),
        gpa = gpa,
        description = description,
        achievements = bullet_list("achievements", &entry.achievements),
    )
}
