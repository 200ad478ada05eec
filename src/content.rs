//! Static page copy. Everything here is fixed at compile time and rendered in
//! declaration order.

pub const OWNER_NAME: &str = "Ruchika Metkar";
pub const HERO_HEADLINE: &str = "Hi, I'm Ruchika";
pub const HERO_TAGLINE: &str =
    "Computer Science & Business Undergrad | Machine Learning Developer | Cognitive Science Researcher";
pub const HERO_SUMMARY: &str =
    "Exploring the intersection of Machine Learning, Cognitive Science, and Business Intelligence";
pub const RESUME_HREF: &str = "/resume.pdf";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub image: Option<&'static str>,
}

pub static PROJECTS: [Project; 5] = [
    Project {
        title: "visualsense.ai",
        description: "A web app enhancing accessibility for visually impaired individuals through audio prompts, flexible UI, and real-time image analysis.",
        tags: &["TensorFlow", "PyTorch", "React.js", "Node.js"],
        image: None,
    },
    Project {
        title: "legaldash.ai",
        description: "A web app automating legal document analysis and lawsuit management for SaaS companies, featuring clause detection, loophole identification, and real-time dashboards.",
        tags: &["NLP Libraries", "ML", "Django"],
        image: None,
    },
    Project {
        title: "signflow.ai",
        description: "A model converting Indian Sign Language gestures into text and speech, supporting real-time and uploaded content.",
        tags: &["OpenCV", "MediaPipe", "Flask"],
        image: None,
    },
    Project {
        title: "AYA - Cohere for AI",
        description: "A project promoting multilingual representation in AI, focusing on Marathi language contributions for LLMs.",
        tags: &["Hugging Face Transformers"],
        image: None,
    },
    Project {
        title: "Pet Frame Detection",
        description: "Contributions in Image Annotations for developing an ML model that detects pets in images.",
        tags: &["OpenCV", "YOLO", "Flask"],
        image: None,
    },
];

pub static CERTIFICATIONS: [&str; 2] = [
    "IBM's Python for Data Science, AI & Development",
    "ISRO-IIRS Remote Sensing and Geospatial Information Systems",
];

pub static BIO_PARAGRAPHS: [&str; 3] = [
    "I'm a second-year undergraduate student pursuing a double major in Computer Science and Business. \
     Understanding and exploring the intersection between the two, and research in Computational Neuroscience interests me.",
    "My research interests lie at the intersection of Machine Learning, Cognitive Science, and Computational Neuroscience. \
     I'm particularly fascinated by neural networks and their parallels with human cognition.",
    "On campus, I'm actively involved in multiple clubs, where I collaborate \
     with fellow students on innovative projects and participate in hackathons.",
];

pub static INTERESTS: [&str; 7] = [
    "Artificial Intelligence",
    "Machine Learning",
    "Deep Learning",
    "Cognitive Science",
    "Computational Neuroscience",
    "Risk Analysis",
    "Business Intelligence",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// In-page anchors shared by the desktop bar and the mobile menu.
pub static NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "About", href: "#about" },
    NavLink { label: "Projects", href: "#projects" },
    NavLink { label: "Certifications", href: "#certifications" },
    NavLink { label: "Contact", href: "#contact" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactKind {
    CodeHosting,
    ProfessionalNetwork,
    Email,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub label: &'static str,
    pub href: &'static str,
}

impl ContactLink {
    /// Web profiles open in a new tab; `mailto:` stays in place.
    pub fn opens_new_tab(&self) -> bool {
        self.href.starts_with("https://") || self.href.starts_with("http://")
    }

    pub fn icon(&self) -> &'static str {
        match self.kind {
            ContactKind::CodeHosting => "⌥",
            ContactKind::ProfessionalNetwork => "in",
            ContactKind::Email => "✉",
        }
    }
}

pub static CONTACT_LINKS: [ContactLink; 3] = [
    ContactLink {
        kind: ContactKind::CodeHosting,
        label: "GitHub",
        href: "https://github.com/groovycatblaze",
    },
    ContactLink {
        kind: ContactKind::ProfessionalNetwork,
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/ruchika-metkar/",
    },
    ContactLink {
        kind: ContactKind::Email,
        label: "Email",
        href: "mailto:ruchika.metkar@gmail.com",
    },
];

pub fn footer_text(year: u32) -> String {
    format!("© {year} {OWNER_NAME}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_keep_declared_order_and_fields() {
        let titles: Vec<&str> = PROJECTS.iter().map(|project| project.title).collect();
        assert_eq!(
            titles,
            [
                "visualsense.ai",
                "legaldash.ai",
                "signflow.ai",
                "AYA - Cohere for AI",
                "Pet Frame Detection",
            ]
        );
        assert_eq!(PROJECTS[0].tags, ["TensorFlow", "PyTorch", "React.js", "Node.js"]);
        assert_eq!(PROJECTS[3].tags, ["Hugging Face Transformers"]);
        assert!(PROJECTS[2].description.starts_with("A model converting Indian Sign Language"));
    }

    #[test]
    fn every_project_has_copy_and_tags() {
        for project in &PROJECTS {
            assert!(!project.title.is_empty());
            assert!(!project.description.is_empty());
            assert!(!project.tags.is_empty(), "{} has no tags", project.title);
            assert!(project.image.is_none());
        }
    }

    #[test]
    fn certifications_keep_declared_order() {
        assert_eq!(CERTIFICATIONS.len(), 2);
        assert!(CERTIFICATIONS[0].starts_with("IBM"));
        assert!(CERTIFICATIONS[1].starts_with("ISRO-IIRS"));
    }

    #[test]
    fn contact_links_cover_three_channels() {
        let kinds: Vec<ContactKind> = CONTACT_LINKS.iter().map(|link| link.kind).collect();
        assert_eq!(
            kinds,
            [ContactKind::CodeHosting, ContactKind::ProfessionalNetwork, ContactKind::Email]
        );
        assert!(CONTACT_LINKS[0].opens_new_tab());
        assert!(CONTACT_LINKS[1].opens_new_tab());
        assert!(!CONTACT_LINKS[2].opens_new_tab());
        assert!(CONTACT_LINKS[2].href.starts_with("mailto:"));
    }

    #[test]
    fn nav_links_point_at_section_anchors() {
        for link in &NAV_LINKS {
            assert!(link.href.starts_with('#'));
        }
        assert_eq!(INTERESTS.len(), 7);
        assert_eq!(BIO_PARAGRAPHS.len(), 3);
    }

    #[test]
    fn footer_names_year_and_owner() {
        assert_eq!(footer_text(2026), "© 2026 Ruchika Metkar");
    }
}
