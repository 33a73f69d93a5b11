//! Fixed portfolio content: navigation, skills, projects, contact details.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use super::site::Section;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub section: Section,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency percentage, 0..=100.
    pub level: u8,
}

impl Skill {
    /// Proficiency rendered as a literal percentage, e.g. `"95%"`.
    #[must_use]
    pub fn percent_label(&self) -> String {
        format!("{}%", self.level.min(100))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactDetails {
    pub email: &'static str,
    pub location: &'static str,
    pub availability: &'static str,
    pub social_links: &'static [&'static str],
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { section: Section::Hero, label: "Home" },
    NavItem { section: Section::About, label: "About" },
    NavItem { section: Section::Projects, label: "Projects" },
    NavItem { section: Section::Contact, label: "Contact" },
];

pub const SKILLS: [Skill; 6] = [
    Skill { name: "Next.js", level: 90 },
    Skill { name: "React", level: 95 },
    Skill { name: "Animation", level: 85 },
    Skill { name: "UI/UX Design", level: 80 },
    Skill { name: "Three.js", level: 75 },
    Skill { name: "Node.js", level: 85 },
];

pub const PROJECTS: [Project; 4] = [
    Project {
        id: 1,
        title: "3D E-Commerce Experience",
        description: "An immersive shopping experience with WebGL and Three.js",
        tags: &["Next.js", "Three.js", "Framer Motion"],
    },
    Project {
        id: 2,
        title: "AI Portfolio Generator",
        description: "AI-powered tool that creates personalized portfolios",
        tags: &["React", "AI", "Node.js"],
    },
    Project {
        id: 3,
        title: "Interactive Data Visualization",
        description: "Real-time data dashboard with animated charts",
        tags: &["D3.js", "WebSockets", "SVG"],
    },
    Project {
        id: 4,
        title: "AR Product Preview",
        description: "Web-based AR for product visualization",
        tags: &["WebXR", "Three.js", "AR"],
    },
];

pub const CONTACT: ContactDetails = ContactDetails {
    email: "hello@portfolio.com",
    location: "San Francisco, CA",
    availability: "Currently available for freelance",
    social_links: &["GitHub", "LinkedIn", "Twitter", "Dribbble"],
};

pub const HERO_SUBTITLE: &str = "I build immersive digital experiences with cutting-edge technology";

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "I'm a passionate frontend developer specializing in creating immersive digital experiences \
     with cutting-edge technology. With over 5 years of experience, I blend design and code to \
     build performant, accessible, and beautiful web applications.",
    "My expertise includes React, Next.js, advanced CSS animations, 3D rendering with Three.js, \
     and creating responsive, user-friendly interfaces that leave a lasting impression.",
];
