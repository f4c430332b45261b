use super::timeline::date_range;
use super::{bullet_list, empty_state, html_escape, section_header, Section};
use crate::models::portfolio::{entry_key, Experience as Entry, PortfolioDocument};

pub struct Experience;

impl Section for Experience {
    fn id(&self) -> &'static str {
        "experience"
    }

    fn noun(&self) -> &'static str {
        "experience"
    }

    fn render_ready(&self, doc: &PortfolioDocument) -> String {
        let header = section_header("My Journey", "Experience");
        if doc.experience.is_empty() {
            return format!("{}{}", header, empty_state("No experience to display."));
        }

        let mut html = format!("{}<div class=\"timeline\">", header);
        for (index, entry) in doc.experience.iter().enumerate() {
            html.push_str(&card(entry, index));
        }
        html.push_str("</div>");
        html
    }
}

fn card(entry: &Entry, index: usize) -> String {
    let key = html_escape(&entry_key(entry.id.as_ref(), index));
    let location = if entry.location.trim().is_empty() {
        String::new()
    } else {
        format!("<span class=\"location\">{}</span>", html_escape(&entry.location))
    };
    let description = if entry.description.trim().is_empty() {
        String::new()
    } else {
        format!("<p>{}</p>", html_escape(&entry.description))
    };

    format!(
        "<article class=\"item timeline-card\" data-key=\"{key}\" data-testid=\"experience-{key}\"><div class=\"timeline-head\"><h3>{position}</h3><span class=\"duration\">{duration}</span></div><div class=\"timeline-sub\"><span class=\"org\">{company}</span>{location}</div>{description}{achievements}</article>",
        key = key,
        position = html_escape(&entry.position),
        duration = html_escape(&date_range(&entry.start_date, entry.end_date.as_deref(), entry.current)),
        company = html_escape(&entry.company),
        location = location,
        description = description,
        achievements = bullet_list("achievements", &entry.achievements),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::portfolio::EntryId;

    fn entry(id: i64, end: Option<&str>) -> Entry {
        Entry {
            id: Some(EntryId::Num(id)),
            company: "Acme".into(),
            position: "Engineer".into(),
            start_date: "2020-01-01".into(),
            end_date: end.map(String::from),
            achievements: vec!["Shipped it".into()],
            ..Default::default()
        }
    }

    #[test]
    fn open_ended_entries_end_in_present() {
        for end in [None, Some("")] {
            let html = card(&entry(1, end), 0);
            assert!(html.contains("<span class=\"duration\">Jan 2020 - Present</span>"));
        }
    }

    #[test]
    fn closed_range() {
        let html = card(&entry(1, Some("2021-07-31")), 0);
        assert!(html.contains("Jan 2020 - Jul 2021"));
        assert!(html.contains("<li>Shipped it</li>"));
    }

    #[test]
    fn rows_in_source_order() {
        let mut doc = PortfolioDocument::default();
        doc.experience = vec![entry(5, None), entry(2, Some("2021-01-01"))];
        let html = Experience.render_ready(&doc);
        assert_eq!(html.matches("class=\"item timeline-card\"").count(), 2);
        assert!(html.find("data-key=\"5\"").unwrap() < html.find("data-key=\"2\"").unwrap());
    }

    #[test]
    fn empty_experience() {
        let html = Experience.render_ready(&PortfolioDocument::default());
        assert!(html.contains("No experience to display."));
        assert!(!html.contains("timeline-card"));
    }
}
