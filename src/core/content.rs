//! # Portfolio Content
//!
//! The fixed-shape content model rendered by the route views: profile,
//! social links, projects, skills, and contact details. Content is defined
//! once as compiled-in defaults; a few fields (name, headline, email,
//! resume path) can be overridden from the config file.
//!
//! Views treat this as read-only props. No view mutates content.

/// Who the portfolio is about.
#[derive(Debug, Clone)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub summary: String,
    /// Short line under the brand mark in the footer.
    pub tagline: String,
    pub email: String,
}

/// Where a social link points. The view layer maps the kind to an accent
/// color for hover styling, the way the source tagged each icon with its
/// brand color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    Twitter,
    Instagram,
    Email,
}

#[derive(Debug, Clone)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub label: &'static str,
    pub url: String,
}

/// A single project card. `description` is markdown (paragraphs and bullet
/// lists) rendered by `tui::markdown`.
#[derive(Debug, Clone)]
pub struct Project {
    pub title: String,
    pub tag: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct Skill {
    pub name: String,
    pub glyph: String,
}

/// One row in the contact-info panel (email, GitHub, LinkedIn).
#[derive(Debug, Clone)]
pub struct ContactItem {
    pub label: &'static str,
    pub value: String,
    pub url: String,
}

/// A card on the About view.
#[derive(Debug, Clone)]
pub struct AboutCard {
    pub initial: char,
    pub title: &'static str,
    pub body: &'static str,
}

/// Everything the five views and the chrome render.
#[derive(Debug, Clone)]
pub struct Portfolio {
    pub profile: Profile,
    pub socials: Vec<SocialLink>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub skills_blurb: String,
    pub about_cards: Vec<AboutCard>,
    pub contact_items: Vec<ContactItem>,
    pub available_for: Vec<&'static str>,
    /// Footer link grid: (label, route path).
    pub footer_links: Vec<(&'static str, &'static str)>,
    /// Social icon row at the bottom of the footer; deliberately a
    /// different set from the hero row.
    pub footer_socials: Vec<SocialLink>,
}

impl Default for Portfolio {
    fn default() -> Self {
        default_portfolio()
    }
}

const SUMMARY: &str = "I build modern, responsive web applications using MongoDB, Express, \
React, and Node.js. Specialized in crafting scalable solutions that solve real-world \
problems with clean code.";

const SKILLS_BLURB: &str = "Expert in building full-stack web applications using MongoDB, \
Express.js, React, and Node.js. Experienced in developing RESTful APIs, implementing \
authentication systems, and deploying scalable applications with modern web technologies.";

pub fn default_portfolio() -> Portfolio {
    Portfolio {
        profile: Profile {
            name: "ARJUN REJI".to_string(),
            headline: "MERN Stack Developer".to_string(),
            summary: SUMMARY.to_string(),
            tagline: "Crafting digital experiences".to_string(),
            email: "arjunreji364@gmail.com".to_string(),
        },
        socials: vec![
            SocialLink {
                kind: SocialKind::GitHub,
                label: "GitHub",
                url: "https://github.com/ArjunReji".to_string(),
            },
            SocialLink {
                kind: SocialKind::LinkedIn,
                label: "LinkedIn",
                url: "https://www.linkedin.com/in/arjun-reji/".to_string(),
            },
            SocialLink {
                kind: SocialKind::Twitter,
                label: "Twitter",
                url: "https://x.com/home".to_string(),
            },
            SocialLink {
                kind: SocialKind::Email,
                label: "Mail",
                url: "mailto:arjunreji364@gmail.com".to_string(),
            },
        ],
        projects: default_projects(),
        skills: [
            ("MongoDB", "📊"),
            ("Express", "🔌"),
            ("React", "⚛"),
            ("Node.js", "🔧"),
            ("JavaScript", "📜"),
            ("Tailwind", "🎨"),
            ("Redux", "🔄"),
            ("Git", "📚"),
        ]
        .into_iter()
        .map(|(name, glyph)| Skill {
            name: name.to_string(),
            glyph: glyph.to_string(),
        })
        .collect(),
        skills_blurb: SKILLS_BLURB.to_string(),
        about_cards: vec![
            AboutCard {
                initial: 'M',
                title: "MongoDB",
                body: "Database design, schema optimization, and data modeling for scalable \
                       applications. Expertise in aggregation pipelines and indexing.",
            },
            AboutCard {
                initial: 'E',
                title: "Express.js",
                body: "Building robust APIs, middleware implementation, and server-side \
                       architecture for efficient backend solutions.",
            },
            AboutCard {
                initial: 'R',
                title: "React",
                body: "Creating interactive UIs with component-based architecture, state \
                       management with Redux, and responsive design implementation.",
            },
            AboutCard {
                initial: 'N',
                title: "Node.js",
                body: "Server-side JavaScript development, asynchronous programming, and \
                       RESTful API development for seamless client-server interaction.",
            },
        ],
        contact_items: vec![
            ContactItem {
                label: "Email",
                value: "arjunreji364@gmail.com".to_string(),
                url: "mailto:arjunreji364@gmail.com".to_string(),
            },
            ContactItem {
                label: "GitHub",
                value: "github.com/ArjunReji".to_string(),
                url: "https://github.com/ArjunReji".to_string(),
            },
            ContactItem {
                label: "LinkedIn",
                value: "linkedin.com/in/arjun-reji".to_string(),
                url: "https://www.linkedin.com/in/arjun-reji/".to_string(),
            },
        ],
        available_for: vec!["Freelance Projects", "Contract Work", "Consultation"],
        footer_links: vec![
            ("Home", "/"),
            ("About", "/about"),
            ("Projects", "/projects"),
            ("Contact", "/contact"),
            ("Skills", "/skills"),
            ("Resume", "/"),
            ("Services", "/contact"),
        ],
        footer_socials: vec![
            SocialLink {
                kind: SocialKind::GitHub,
                label: "GitHub",
                url: "https://github.com/ArjunReji".to_string(),
            },
            SocialLink {
                kind: SocialKind::Instagram,
                label: "Instagram",
                url: "https://www.instagram.com/_arjun_reji/".to_string(),
            },
            SocialLink {
                kind: SocialKind::Twitter,
                label: "Twitter",
                url: "https://x.com/home".to_string(),
            },
            SocialLink {
                kind: SocialKind::LinkedIn,
                label: "LinkedIn",
                url: "https://www.linkedin.com/in/arjun-reji/".to_string(),
            },
        ],
    }
}

fn default_projects() -> Vec<Project> {
    vec![
        Project {
            title: "Plantation Management System".to_string(),
            tag: "Full Stack MERN".to_string(),
            description: "\
A comprehensive Plantation Management System tailored for cardamom plantations, \
using React for a dynamic and responsive user experience.

Key features include:

* Workforce management and real-time attendance tracking via QR codes
* Worker gamification with points and leaderboards to boost productivity
* Produce tracking with historical harvest analysis
* Financial reporting and task management modules
* Intuitive dashboard for streamlined operations

Built with React, Node.js, MongoDB, and Tailwind CSS, this system improves \
operational efficiency and data-driven decision-making for modern agricultural \
management."
                .to_string(),
        },
        Project {
            title: "E-Commerce Platform".to_string(),
            tag: "React + API integration".to_string(),
            description: "\
A fully functional, responsive eCommerce web application built using React, Redux \
for state management, and REST API integration for dynamic product and user data.

The platform enables users to:

* Browse products with detailed information
* Add items to cart and manage wishlists
* Complete purchases securely
* Track order history and status

Backend services are consumed via REST APIs for product listing, cart management, \
and order processing, creating a seamless shopping experience."
                .to_string(),
        },
        Project {
            title: "Random Quote Generator".to_string(),
            tag: "React + API Integration".to_string(),
            description: "\
An interactive quote generator that fetches random quotes from the DummyJSON API \
using Axios for smooth API calls.

Technical highlights:

* React hooks (useState, useEffect) for state management
* Dynamic rendering of quotes and authors
* Styled with CSS for a polished, aesthetic interface
* Deployed on Netlify for optimal performance

The core functionality is contained in the QuoteGenerator component, which updates \
the display whenever users request a new quote through an intuitive interface."
                .to_string(),
        },
        Project {
            title: "Tesla Home Page Front-End".to_string(),
            tag: "HTML, CSS, Bootstrap".to_string(),
            description: "\
A pixel-perfect recreation of the Tesla website's homepage that demonstrates \
front-end development skills.

Implementation details:

* HTML structure with semantic markup
* CSS and Flexbox for responsive layouts
* Bootstrap components for UI elements
* Video auto-play feature matching the original site

This project showcases attention to detail and the ability to replicate complex \
designs with clean, maintainable code for an optimal desktop experience."
                .to_string(),
        },
    ]
}
