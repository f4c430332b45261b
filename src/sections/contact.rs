use super::{empty_state, html_escape, section_header, Section};
use crate::contact::FormView;
use crate::models::catalog;
use crate::models::portfolio::{Personal, PortfolioDocument};

const DEFAULT_DESCRIPTION: &str =
    "Have a question or want to work together? Feel free to reach out!";

/// Contact details plus the contact form. The form keeps whatever values
/// and errors the last submission produced.
pub struct Contact<'a> {
    pub form: &'a FormView,
}

/// Known social links for `keys`, in table order.
pub(crate) fn social_links(personal: &Personal, keys: &[&str]) -> String {
    let mut html = String::new();
    for key in keys {
        let meta = catalog::social(key);
        if !meta.known {
            continue;
        }
        let Some(url) = personal.social_url(key) else {
            continue;
        };
        html.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" aria-label=\"{}\" data-testid=\"link-{}\">{}</a>",
            html_escape(url),
            html_escape(&meta.label),
            html_escape(&meta.key),
            meta.icon
        ));
    }
    html
}

fn field_error(field: &str, error: Option<&str>) -> String {
    match error {
        Some(msg) => format!(
            "<p class=\"field-error\" data-field=\"{}\">{}</p>",
            field,
            html_escape(msg)
        ),
        None => String::new(),
    }
}

fn render_form(form: &FormView) -> String {
    format!(
        r#"<form method="post" action="/contact" class="contact-form" novalidate>
<div class="contact-form-group"><label for="cf-name">Name</label><input type="text" id="cf-name" name="name" value="{name}" placeholder="Your name">{name_err}</div>
<div class="contact-form-group"><label for="cf-email">Email</label><input type="email" id="cf-email" name="email" value="{email}" placeholder="your@email.com">{email_err}</div>
<div class="contact-form-group"><label for="cf-message">Message</label><textarea id="cf-message" name="message" rows="6" placeholder="Your message...">{message}</textarea>{message_err}</div>
<div style="display:none"><input type="text" name="_honey" tabindex="-1" autocomplete="off"></div>
<button type="submit" class="btn contact-submit" data-testid="button-submit">Send Message</button>
</form>"#,
        name = html_escape(&form.values.name),
        email = html_escape(&form.values.email),
        message = html_escape(&form.values.message),
        name_err = field_error("name", form.errors.name),
        email_err = field_error("email", form.errors.email),
        message_err = field_error("message", form.errors.message),
    )
}

impl Section for Contact<'_> {
    fn id(&self) -> &'static str {
        "contact"
    }

    fn noun(&self) -> &'static str {
        "contact information"
    }

    fn render_ready(&self, doc: &PortfolioDocument) -> String {
        let personal = &doc.personal;
        let info = &doc.contact;

        let title = if info.title.trim().is_empty() {
            "Get in Touch"
        } else {
            info.title.as_str()
        };
        let description = if info.description.trim().is_empty() {
            DEFAULT_DESCRIPTION
        } else {
            info.description.as_str()
        };

        let mut details = String::new();
        if !personal.email.trim().is_empty() {
            details.push_str(&format!(
                "<div class=\"item contact-detail\" data-key=\"email\"><a href=\"mailto:{0}\">{0}</a></div>",
                html_escape(personal.email.trim())
            ));
        }
        if !personal.phone.trim().is_empty() {
            let digits: String = personal.phone.chars().filter(|c| c.is_ascii_digit()).collect();
            details.push_str(&format!(
                "<div class=\"item contact-detail\" data-key=\"phone\"><a href=\"tel:{}\">{}</a></div>",
                digits,
                html_escape(&personal.phone)
            ));
        }
        if !personal.location.trim().is_empty() {
            details.push_str(&format!(
                "<div class=\"item contact-detail\" data-key=\"location\"><span>{}</span></div>",
                html_escape(&personal.location)
            ));
        }

        let socials = social_links(personal, catalog::CONTACT_SOCIALS);
        let details_html = if details.is_empty() && socials.is_empty() {
            empty_state("No contact details available.")
        } else {
            let socials_html = if socials.is_empty() {
                String::new()
            } else {
                format!("<div class=\"contact-social\">{}</div>", socials)
            };
            format!("<div class=\"contact-details\">{}</div>{}", details, socials_html)
        };

        let availability = if info.availability.trim().is_empty() {
            String::new()
        } else {
            format!("<p class=\"availability\">{}</p>", html_escape(&info.availability))
        };

        format!(
            "{header}<div class=\"contact-grid\"><div class=\"contact-info\"><p class=\"contact-description\">{description}</p>{availability}{details}</div><div class=\"contact-form-wrap\">{form}</div></div>",
            header = section_header("Let's Connect", title),
            description = html_escape(description),
            availability = availability,
            details = details_html,
            form = render_form(self.form),
        )
    }
}
