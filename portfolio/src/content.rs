//! Hard-coded page copy: profile, services, skills, projects.

pub struct Profile {
    pub name: &'static str,
    pub brand: &'static str,
    pub tagline: &'static str,
    pub avatar: &'static str,
    pub email: &'static str,
    pub github_user: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Firaol Mengistu",
    brand: "Fira web.",
    tagline: "Web Developer & UI/UX Designer",
    avatar: "assets/Home1.png",
    email: "firaolmengistu796@gmail.com",
    github_user: "firaol1214",
    phone: "+251957034895",
    location: "Bale Robe, Bole",
};

impl Profile {
    pub fn github_url(&self) -> String {
        format!("https://github.com/{}", self.github_user)
    }

    /// Rows of the contact info card, in display order.
    pub fn contact_links(&self) -> Vec<ContactLink> {
        vec![
            ContactLink {
                icon: "✉️",
                label: "Email",
                value: self.email.to_string(),
                href: Some(format!("mailto:{}", self.email)),
                external: false,
                aria_label: format!("Send email to {}", self.email),
            },
            ContactLink {
                icon: "💻",
                label: "GitHub",
                value: format!("github.com/{}", self.github_user),
                href: Some(self.github_url()),
                external: true,
                aria_label: "Visit GitHub profile".to_string(),
            },
            ContactLink {
                icon: "📍",
                label: "Location",
                value: self.location.to_string(),
                href: None,
                external: false,
                aria_label: format!("Located in {}", self.location),
            },
            ContactLink {
                icon: "📱",
                label: "Phone",
                value: self.phone.to_string(),
                href: Some(format!("tel:{}", self.phone)),
                external: false,
                aria_label: format!("Call {}", self.phone),
            },
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: String,
    /// `None` renders a plain row (location).
    pub href: Option<String>,
    /// Opens in a new tab with `rel="noopener noreferrer"`.
    pub external: bool,
    pub aria_label: String,
}

pub const AVAILABILITY: &str = "I'm currently available for freelance work. If you have a \
    project that needs creative expertise, feel free to reach out.";

pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub content: &'static str,
}

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: "🎓",
        title: "Education",
        content: "Computer Science Degree",
    },
    Highlight {
        icon: "💼",
        title: "Experience",
        content: "1+ Years in Web Development",
    },
    Highlight {
        icon: "🚀",
        title: "Projects",
        content: "5+ Completed Projects",
    },
];

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Accent modifier class, `service-card--<accent>`.
    pub accent: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: "🖥️",
        title: "Web Design",
        description: "Beautiful, responsive websites tailored to your brand",
        accent: "purple",
    },
    Service {
        icon: "🎨",
        title: "UI/UX Design",
        description: "Intuitive user interfaces with exceptional experiences",
        accent: "pink",
    },
    Service {
        icon: "🎮",
        title: "Online Game Development",
        description: "Interactive browser-based games and applications",
        accent: "green",
    },
    Service {
        icon: "📱",
        title: "Mobile App Development",
        description: "Cross-platform mobile applications for iOS and Android",
        accent: "blue",
    },
];

pub struct Skill {
    pub name: &'static str,
    /// Proficiency, 0..=100.
    pub level: u8,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "HTML", level: 90 },
    Skill { name: "CSS", level: 85 },
    Skill { name: "JavaScript", level: 80 },
    Skill { name: "React", level: 75 },
    Skill { name: "Next.js", level: 70 },
    Skill { name: "Tailwind CSS", level: 85 },
    Skill { name: "Git", level: 70 },
    Skill { name: "TypeScript", level: 65 },
    Skill { name: "Node.js", level: 60 },
    Skill { name: "Figma", level: 75 },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub image: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Personal Portfolio",
        description: "Modern responsive website with React hooks",
        tags: &["React", "Tailwind"],
        image: "assets/portfol2.png",
    },
    Project {
        title: "Derartu Hotel Website",
        description: "Modern responsive website with React hooks",
        tags: &["React", "Tailwind"],
        image: "assets/derartu1.png",
    },
    Project {
        title: "Online Game",
        description: "Interactive browser game with Canvas API",
        tags: &["JavaScript", "HTML5"],
        image: "assets/game.jpg",
    },
];
