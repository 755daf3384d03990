//! Static portfolio data behind the read-only API endpoints.
//!
//! The bio, project list, and contact details are process-wide immutable
//! configuration: built once on first access and shared for the lifetime of
//! the process. Serialized field names follow the public API's camelCase.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// External profile links shown on the site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLinks {
    pub linkedin: String,
    pub github: String,
    pub twitter: String,
    pub portfolio: String,
}

/// The owner's bio as served by `GET /api/portfolio`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    pub name: String,
    pub title: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    pub skills: Vec<String>,
    pub social_links: SocialLinks,
}

/// One portfolio project as served by `GET /api/projects`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Frontend stack, one entry per technology.
    pub frontend: Vec<String>,
    /// One-line backend/hosting summary.
    pub backend: String,
    pub link: String,
}

/// Contact details as served by `GET /api/contact-info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub response_time: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

static PROFILE: OnceLock<ProfileData> = OnceLock::new();

/// The site owner's profile.
pub fn profile() -> &'static ProfileData {
    PROFILE.get_or_init(|| ProfileData {
        name: "Kelvin".to_string(),
        title: "Web Developer".to_string(),
        location: "Nairobi, Kenya".to_string(),
        email: "kibuikevin@zetech.ac.ke".to_string(),
        phone: "+254 742 171 271".to_string(),
        bio: "Passionate web developer building amazing digital experiences".to_string(),
        skills: strings(&[
            "HTML5",
            "CSS3",
            "JavaScript",
            "Responsive Design",
            "Web Development",
            "Problem Solving",
            "Git",
            "UI/UX",
        ]),
        social_links: SocialLinks {
            linkedin: "https://www.linkedin.com/in/ķèłvïņ-ĥåįž-0a7226362".to_string(),
            github: "https://github.com/BCS-05-0109KEVIN".to_string(),
            twitter: "#".to_string(),
            portfolio: "#".to_string(),
        },
    })
}

static PROJECTS: OnceLock<Vec<Project>> = OnceLock::new();

/// The project list, in display order.
pub fn projects() -> &'static [Project] {
    PROJECTS.get_or_init(|| {
        vec![
            Project {
                id: 1,
                title: "Responsive Portfolio Website".to_string(),
                description: "A fully responsive portfolio website with modern design"
                    .to_string(),
                frontend: strings(&["HTML5", "CSS3", "JavaScript", "Dark Mode"]),
                backend: "Static hosting (GitHub Pages, Netlify)".to_string(),
                link: "#".to_string(),
            },
            Project {
                id: 2,
                title: "Interactive Web App".to_string(),
                description: "Dynamic web application with state management".to_string(),
                frontend: strings(&["JavaScript", "DOM Manipulation", "CSS Grid", "React"]),
                backend: "Node.js/Express, MongoDB, JWT auth".to_string(),
                link: "#".to_string(),
            },
            Project {
                id: 3,
                title: "E-Commerce Platform".to_string(),
                description: "Full-stack e-commerce solution with payment integration"
                    .to_string(),
                frontend: strings(&["React", "Redux", "CSS"]),
                backend: "Node.js/Express, PostgreSQL, Stripe API".to_string(),
                link: "#".to_string(),
            },
        ]
    })
}

static CONTACT_DETAILS: OnceLock<ContactDetails> = OnceLock::new();

/// Where and how fast the owner can be reached.
pub fn contact_details() -> &'static ContactDetails {
    CONTACT_DETAILS.get_or_init(|| ContactDetails {
        email: "kibuikevin@zetech.ac.ke".to_string(),
        phone: "+254 742 171 271".to_string(),
        location: "Nairobi, Kenya".to_string(),
        response_time: "24 hours".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_data() {
        let profile = profile();
        assert_eq!(profile.name, "Kelvin");
        assert_eq!(profile.skills.len(), 8);
    }

    #[test]
    fn test_projects_in_display_order() {
        let projects = projects();
        assert_eq!(projects.len(), 3);
        assert_eq!(projects[0].id, 1);
        assert_eq!(projects[2].title, "E-Commerce Platform");
    }

    #[test]
    fn test_camel_case_serialization() {
        let json = serde_json::to_value(profile()).unwrap();
        assert!(json.get("socialLinks").is_some());
        assert!(json.get("social_links").is_none());

        let json = serde_json::to_value(contact_details()).unwrap();
        assert_eq!(json["responseTime"], "24 hours");
    }
}
