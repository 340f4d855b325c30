//! Default catalog
//!
//! Built-in seed content used on first run (or when stored data cannot be
//! read), and the source of truth for project icons:
//! - 5 showcase projects, in display order, each with an icon
//! - 10 skills with proficiency levels
//! - the owner's profile

use crate::domain::{IconGlyph, Profile, Project, ProjectIcon, ProjectRecord, Skill};

struct CatalogEntry {
    title: &'static str,
    description: &'static str,
    long_description: &'static str,
    technologies: &'static [&'static str],
    learnings: &'static str,
    color: &'static str,
    icon: ProjectIcon,
    demo_url: &'static str,
    code_url: &'static str,
    video_url: Option<&'static str>,
}

const SAMPLE_VIDEO_URL: &str = "https://www.youtube.com/embed/dQw4w9WgXcQ";

const PROJECTS: [CatalogEntry; 5] = [
    CatalogEntry {
        title: "Task Management System",
        description: "Developed a task management app using Python and OOP principles.",
        long_description: "A comprehensive task management system built with Python that leverages object-oriented programming principles to create a flexible and maintainable codebase. This application enables users to create, organize, and track tasks with features like priority levels, due dates, and task categories. The project demonstrates strong debugging skills and collaborative development practices.",
        technologies: &["Python", "OOP", "Git", "Unit Testing"],
        learnings: "Code optimization, debugging, and collaboration",
        color: "from-blue-500 to-cyan-400",
        icon: ProjectIcon::new(IconGlyph::Calendar, "text-blue-500"),
        demo_url: "#",
        code_url: "https://github.com/DevloperJI/task-management-system",
        video_url: None,
    },
    CatalogEntry {
        title: "Weather Forecast Application",
        description: "Built a real-time weather app with Java, integrating external APIs.",
        long_description: "An intuitive weather forecast application developed in Java that provides real-time weather data by integrating with external weather APIs. The application features a clean user interface built with JavaFX, displaying current conditions, hourly forecasts, and 5-day predictions. It includes features like location detection, favorite locations saving, and weather alerts for severe conditions.",
        technologies: &["Java", "APIs", "JavaFX", "Integration Testing"],
        learnings: "API integration, data handling, and UI development with JavaFX",
        color: "from-purple-500 to-pink-400",
        icon: ProjectIcon::new(IconGlyph::Code, "text-purple-500"),
        demo_url: "#",
        code_url: "https://github.com/DevloperJI/weather-forecast-app",
        video_url: Some(SAMPLE_VIDEO_URL),
    },
    CatalogEntry {
        title: "E-Commerce Frontend",
        description: "Designed a responsive e-commerce website as part of Reliance Frontend Certification.",
        long_description: "A modern e-commerce frontend developed for the Reliance Frontend Certification, featuring a responsive design that works seamlessly across all devices. The website includes product listings, detailed product pages, shopping cart functionality, user authentication, and a streamlined checkout process. The project demonstrates advanced CSS techniques, JavaScript DOM manipulation, and attention to user experience design principles.",
        technologies: &["HTML", "CSS", "JavaScript", "Responsive Design"],
        learnings: "Frontend development, user experience design, and web optimization",
        color: "from-orange-500 to-amber-400",
        icon: ProjectIcon::new(IconGlyph::ExternalLink, "text-orange-500"),
        demo_url: "#",
        code_url: "https://github.com/DevloperJI/ecommerce-frontend",
        video_url: None,
    },
    CatalogEntry {
        title: "Digital Marketing Automation Tool",
        description: "Created a tool for automating social media posts with platform API integration.",
        long_description: "An advanced digital marketing automation tool that streamlines social media management by scheduling and publishing posts across multiple platforms. The tool integrates with various social media APIs (Twitter, Facebook, Instagram, LinkedIn) to provide a unified interface for content planning, scheduling, and analytics. It includes features like content calendar, performance tracking, and audience engagement metrics.",
        technologies: &["Python", "APIs", "Data Analysis", "Automation"],
        learnings: "Automation, data analysis, and API interaction",
        color: "from-green-500 to-emerald-400",
        icon: ProjectIcon::new(IconGlyph::ArrowRight, "text-green-500"),
        demo_url: "#",
        code_url: "https://github.com/DevloperJI/marketing-automation",
        video_url: None,
    },
    CatalogEntry {
        title: "React Portfolio Website",
        description: "Developed a modern, responsive portfolio website using React, TypeScript and Tailwind CSS.",
        long_description: "A modern portfolio website built with React, TypeScript, and Tailwind CSS that showcases professional skills, projects, and experience. The site features smooth animations, dark mode support, responsive design for all devices, and interactive UI components. The architecture follows best practices with modular components, custom hooks, and efficient state management.",
        technologies: &["React", "TypeScript", "Tailwind CSS", "Shadcn UI"],
        learnings: "Modern frontend development, component architecture, and responsive design principles",
        color: "from-blue-600 to-indigo-500",
        icon: ProjectIcon::new(IconGlyph::Code, "text-blue-600"),
        demo_url: "https://devloper-ji.vercel.app",
        code_url: "https://github.com/DevloperJI/portfolio-website",
        video_url: Some(SAMPLE_VIDEO_URL),
    },
];

const SKILLS: [(&str, u8); 10] = [
    ("React", 90),
    ("TypeScript", 85),
    ("Tailwind CSS", 88),
    ("Node.js", 75),
    ("MongoDB", 70),
    ("UI/UX Design", 65),
    ("Git", 85),
    ("Python", 80),
    ("Docker", 60),
    ("AWS", 65),
];

impl CatalogEntry {
    fn to_project(&self) -> Project {
        Project::new(
            ProjectRecord {
                title: self.title.to_string(),
                description: self.description.to_string(),
                long_description: self.long_description.to_string(),
                technologies: self.technologies.iter().map(|t| t.to_string()).collect(),
                learnings: self.learnings.to_string(),
                color: self.color.to_string(),
                demo_url: self.demo_url.to_string(),
                code_url: self.code_url.to_string(),
                video_url: self.video_url.map(String::from),
            },
            Some(self.icon),
        )
    }
}

/// The seed projects, in display order, with their icons
pub fn default_projects() -> Vec<Project> {
    PROJECTS.iter().map(CatalogEntry::to_project).collect()
}

/// Icon of the catalog project with exactly this title, if any
pub fn icon_for(title: &str) -> Option<ProjectIcon> {
    PROJECTS.iter().find(|p| p.title == title).map(|p| p.icon)
}

/// The seed skills
pub fn default_skills() -> Vec<Skill> {
    SKILLS
        .iter()
        .map(|(name, level)| Skill {
            name: name.to_string(),
            level: *level,
        })
        .collect()
}

/// The seed profile
pub fn default_profile() -> Profile {
    Profile {
        name: "Prashant Mishra".to_string(),
        email: "contact@prashantmishra.com".to_string(),
        location: "Mumbai, India".to_string(),
        phone: "+91 98765 43210".to_string(),
        bio: "Passionate developer specializing in building modern web applications with React, TypeScript, and other cutting-edge technologies. Committed to creating intuitive, responsive user experiences.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_projects_order_and_icons() {
        let projects = default_projects();
        let titles: Vec<&str> = projects.iter().map(|p| p.title()).collect();
        assert_eq!(
            titles,
            vec![
                "Task Management System",
                "Weather Forecast Application",
                "E-Commerce Frontend",
                "Digital Marketing Automation Tool",
                "React Portfolio Website",
            ]
        );
        assert!(projects.iter().all(|p| p.icon.is_some()));
    }

    #[test]
    fn test_icon_lookup_is_exact() {
        assert_eq!(
            icon_for("E-Commerce Frontend").map(|i| i.glyph),
            Some(IconGlyph::ExternalLink)
        );
        assert_eq!(icon_for("e-commerce frontend"), None);
        assert_eq!(icon_for("Unknown"), None);
    }

    #[test]
    fn test_default_skills_and_profile_are_valid() {
        let skills = default_skills();
        assert_eq!(skills.len(), 10);
        assert!(skills.iter().all(|s| Skill::new(s.name.clone(), s.level).is_ok()));
        assert!(default_profile().validate().is_ok());
    }
}
