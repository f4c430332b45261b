//! Static lookup tables for skill/technology logos and social platforms.
//! Keys are free-form strings from the data file, so every lookup has a
//! defined answer for keys the tables don't know.

const DEVICON_BASE: &str = "https://cdn.jsdelivr.net/gh/devicons/devicon@latest/icons";

/// Logo and brand color for a skill or technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechMeta {
    /// Path under the devicon icon set.
    pub icon: &'static str,
    pub color: &'static str,
}

impl TechMeta {
    pub fn logo_url(&self) -> String {
        format!("{}/{}", DEVICON_BASE, self.icon)
    }
}

pub const FALLBACK_TECH: TechMeta = TechMeta {
    icon: "codepen/codepen-plain.svg",
    color: "#666666",
};

// (name, devicon path, brand color)
const TECHNOLOGIES: &[(&str, &str, &str)] = &[
    ("React", "react/react-original.svg", "#61DAFB"),
    ("TypeScript", "typescript/typescript-original.svg", "#3178C6"),
    ("JavaScript", "javascript/javascript-original.svg", "#F7DF1E"),
    ("HTML/CSS", "html5/html5-original.svg", "#E34F26"),
    ("Tailwind CSS", "tailwindcss/tailwindcss-original.svg", "#06B6D4"),
    ("Next.js", "nextjs/nextjs-original.svg", "#000000"),
    ("Node.js", "nodejs/nodejs-original.svg", "#339933"),
    ("Express", "express/express-original.svg", "#000000"),
    ("Python", "python/python-original.svg", "#3776AB"),
    ("PostgreSQL", "postgresql/postgresql-original.svg", "#336791"),
    ("MongoDB", "mongodb/mongodb-original.svg", "#47A248"),
    ("REST APIs", "nestjs/nestjs-original.svg", "#E0234E"),
    ("Go", "go/go-original.svg", "#00ADD8"),
    ("Git", "git/git-original.svg", "#F05032"),
    ("GitHub", "github/github-original.svg", "#181717"),
    ("Docker", "docker/docker-original.svg", "#2496ED"),
    ("DigitalOcean", "digitalocean/digitalocean-original.svg", "#0080FF"),
    ("Figma", "figma/figma-original.svg", "#F24E1E"),
    ("Stripe", "stripe/stripe-original.svg", "#635BFF"),
    ("WebSocket", "socketio/socketio-original.svg", "#010101"),
    ("OpenAI API", "openai/openai-original.svg", "#412991"),
    ("Redis", "redis/redis-original.svg", "#DC382D"),
    ("GraphQL", "graphql/graphql-plain.svg", "#E10098"),
    ("AWS", "amazonwebservices/amazonwebservices-original-wordmark.svg", "#FF9900"),
    ("D3.js", "d3js/d3js-original.svg", "#F9A03C"),
    ("Firebase", "firebase/firebase-original.svg", "#FFCA28"),
    ("Material-UI", "materialui/materialui-original.svg", "#007FFF"),
    ("Chart.js", "chartjs/chartjs-original.svg", "#FF6384"),
    ("JWT", "json/json-original.svg", "#000000"),
    ("Svelte", "svelte/svelte-original.svg", "#FF3E00"),
];

/// Exact-name lookup. Projects only show a logo when this returns `Some`.
pub fn tech(name: &str) -> Option<TechMeta> {
    TECHNOLOGIES
        .iter()
        .find(|(n, _, _)| *n == name)
        .map(|&(_, icon, color)| TechMeta { icon, color })
}

/// Lookup that never misses; skill cards always carry a logo.
pub fn tech_or_fallback(name: &str) -> TechMeta {
    tech(name).unwrap_or(FALLBACK_TECH)
}

/// Display record for a `personal.social` key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialMeta {
    pub key: String,
    pub label: String,
    pub icon: &'static str,
    /// False for keys missing from the table; renderers skip those.
    pub known: bool,
}

const ICON_GITHUB: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22"/></svg>"#;
const ICON_LINKEDIN: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/><rect x="2" y="9" width="4" height="12"/><circle cx="4" cy="4" r="2"/></svg>"#;
const ICON_SEND: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><line x1="22" y1="2" x2="11" y2="13"/><polygon points="22 2 15 22 11 13 2 9 22 2"/></svg>"#;
const ICON_MAIL: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><rect x="2" y="4" width="20" height="16" rx="2"/><path d="m22 7-10 6L2 7"/></svg>"#;
const ICON_TWITTER: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="currentColor"><path d="M18.244 2.25h3.308l-7.227 8.26 8.502 11.24H16.17l-5.214-6.817L4.99 21.75H1.68l7.73-8.835L1.254 2.25H8.08l4.713 6.231zm-1.161 17.52h1.833L7.084 4.126H5.117z"/></svg>"#;
const ICON_INSTAGRAM: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><rect x="2" y="2" width="20" height="20" rx="5"/><path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"/><line x1="17.5" y1="6.5" x2="17.51" y2="6.5"/></svg>"#;
const ICON_LINK: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71"/><path d="M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71"/></svg>"#;

// (key, label, icon)
const SOCIAL_PLATFORMS: &[(&str, &str, &str)] = &[
    ("github", "GitHub", ICON_GITHUB),
    ("linkedin", "LinkedIn", ICON_LINKEDIN),
    ("telegram", "Telegram", ICON_SEND),
    ("twitter", "Twitter", ICON_TWITTER),
    ("instagram", "Instagram", ICON_INSTAGRAM),
    ("email", "Email", ICON_MAIL),
];

/// Social platforms shown in the contact section.
pub const CONTACT_SOCIALS: &[&str] = &["github", "linkedin", "telegram", "email"];

/// Social platforms shown in the footer.
pub const FOOTER_SOCIALS: &[&str] = &["github", "linkedin", "twitter", "email", "instagram"];

pub fn social(key: &str) -> SocialMeta {
    match SOCIAL_PLATFORMS.iter().find(|(k, _, _)| *k == key) {
        Some(&(k, label, icon)) => SocialMeta {
            key: k.to_string(),
            label: label.to_string(),
            icon,
            known: true,
        },
        None => SocialMeta {
            key: key.to_string(),
            label: capitalize(key),
            icon: ICON_LINK,
            known: false,
        },
    }
}

fn capitalize(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        None => String::new(),
        Some(f) => format!("{}{}", f.to_uppercase(), c.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tech_has_logo() {
        let meta = tech("React").unwrap();
        assert_eq!(meta.color, "#61DAFB");
        assert!(meta.logo_url().ends_with("/react/react-original.svg"));
    }

    #[test]
    fn unknown_tech_uses_fallback() {
        assert!(tech("Cobol").is_none());
        assert_eq!(tech_or_fallback("Cobol"), FALLBACK_TECH);
    }

    #[test]
    fn social_lookup() {
        let gh = social("github");
        assert!(gh.known);
        assert_eq!(gh.label, "GitHub");

        let other = social("mastodon");
        assert!(!other.known);
        assert_eq!(other.label, "Mastodon");
        assert_eq!(other.icon, ICON_LINK);
    }
}
