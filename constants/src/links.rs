/// A labelled anchor rendered by the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ExternalLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// Social profile shown on the contact page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct SocialLink {
    pub name: &'static str,
    pub handle: &'static str,
    pub url: &'static str,
}

pub const NAV_LINKS: &[ExternalLink] = &[
    ExternalLink { label: "home", url: "/" },
    ExternalLink { label: "about", url: "/about" },
    ExternalLink { label: "projects", url: "/projects" },
    ExternalLink { label: "contact", url: "/contact" },
];

pub const FOOTER_LINKS: &[ExternalLink] = &[
    ExternalLink { label: "CONTACT", url: "/contact" },
    ExternalLink { label: "ARCHIVE", url: "/archive" },
    ExternalLink {
        label: "SOURCE",
        url: "https://github.com/Hiba-Malkan/portfolio-website.git",
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        handle: "@Hiba-Malkan",
        url: "https://github.com/Hiba-Malkan",
    },
    SocialLink {
        name: "Discord",
        handle: "hiba_19",
        url: "https://discord.com/users/hiba_19",
    },
    SocialLink {
        name: "Slack",
        handle: "@grumpymarie",
        url: "https://hackclub.enterprise.slack.com/team/U0A4VCLJC05",
    },
    SocialLink {
        name: "Email",
        handle: "hiba.malkan@gmail.com",
        url: "mailto:hiba.malkan@gmail.com",
    },
];
