//! Built-in content used when no `--content` file is given.

use crate::model::Accent;
use crate::model::Content;
use crate::model::Education;
use crate::model::FocusArea;
use crate::model::Icon;
use crate::model::Profile;
use crate::model::Project;
use crate::model::Skill;
use crate::model::SkillCategory;
use crate::model::SocialLink;
use crate::model::Stat;

impl Default for Content {
    fn default() -> Self {
        Content::built_in()
    }
}

impl Content {
    /// The compiled-in portfolio content.
    pub fn built_in() -> Self {
        Content {
            profile: Profile {
                brand: "alex.dev".to_string(),
                name: "Alex Johnson".to_string(),
                tagline: "Frontend Developer & UI/UX Enthusiast".to_string(),
                intro: "Passionate about creating beautiful, functional web experiences. \
                        Fresh graduate with a strong foundation in modern web technologies \
                        and a keen eye for design."
                    .to_string(),
                email: "alex.johnson@example.com".to_string(),
                phone: "+1 (555) 123-4567".to_string(),
                location: "New York, NY".to_string(),
                stats: vec![
                    Stat {
                        value: "15+".to_string(),
                        label: "Projects Completed".to_string(),
                    },
                    Stat {
                        value: "3+".to_string(),
                        label: "Years Learning".to_string(),
                    },
                ],
                story: vec![
                    "I'm a recent Computer Science graduate with a passion for frontend \
                     development and user experience design. My journey began with curiosity \
                     about how websites work, and it has evolved into a deep appreciation \
                     for clean code and beautiful interfaces."
                        .to_string(),
                    "When I'm not coding, you can find me exploring new design trends, \
                     contributing to open-source projects, or experimenting with the latest \
                     web technologies. I believe in continuous learning and staying \
                     up-to-date with industry best practices."
                        .to_string(),
                ],
                focus: vec![
                    FocusArea {
                        title: "Frontend Development".to_string(),
                        summary: "Building responsive and interactive web applications"
                            .to_string(),
                        icon: Icon::Code,
                        accent: Accent::Blue,
                    },
                    FocusArea {
                        title: "UI/UX Design".to_string(),
                        summary: "Creating intuitive and visually appealing interfaces"
                            .to_string(),
                        icon: Icon::Palette,
                        accent: Accent::Cyan,
                    },
                    FocusArea {
                        title: "Responsive Design".to_string(),
                        summary: "Ensuring great experiences across all devices".to_string(),
                        icon: Icon::Mobile,
                        accent: Accent::Green,
                    },
                ],
                education: Education {
                    degree: "Bachelor of Computer Science".to_string(),
                    school: "University Name".to_string(),
                    years: "2020-2024".to_string(),
                    note: Some("GPA: 3.8/4.0".to_string()),
                },
            },
            social: vec![
                SocialLink {
                    label: "GitHub".to_string(),
                    url: "#".to_string(),
                },
                SocialLink {
                    label: "LinkedIn".to_string(),
                    url: "#".to_string(),
                },
                SocialLink {
                    label: "Twitter".to_string(),
                    url: "#".to_string(),
                },
                SocialLink {
                    label: "Email".to_string(),
                    url: "#".to_string(),
                },
            ],
            skill_categories: vec![
                SkillCategory {
                    title: "Frontend".to_string(),
                    icon: Icon::Code,
                    accent: Accent::Blue,
                    skills: vec![
                        Skill {
                            name: "HTML5 & CSS3".to_string(),
                            level: 4,
                        },
                        Skill {
                            name: "JavaScript (ES6+)".to_string(),
                            level: 4,
                        },
                        Skill {
                            name: "React.js".to_string(),
                            level: 3,
                        },
                        Skill {
                            name: "Tailwind CSS".to_string(),
                            level: 4,
                        },
                    ],
                },
                SkillCategory {
                    title: "Backend & Tools".to_string(),
                    icon: Icon::Server,
                    accent: Accent::Cyan,
                    skills: vec![
                        Skill {
                            name: "Node.js".to_string(),
                            level: 3,
                        },
                        Skill {
                            name: "MongoDB".to_string(),
                            level: 3,
                        },
                        Skill {
                            name: "Git & GitHub".to_string(),
                            level: 4,
                        },
                        Skill {
                            name: "REST APIs".to_string(),
                            level: 3,
                        },
                    ],
                },
                SkillCategory {
                    title: "Design & Others".to_string(),
                    icon: Icon::Palette,
                    accent: Accent::Green,
                    skills: vec![
                        Skill {
                            name: "Figma".to_string(),
                            level: 4,
                        },
                        Skill {
                            name: "Adobe XD".to_string(),
                            level: 3,
                        },
                        Skill {
                            name: "Responsive Design".to_string(),
                            level: 4,
                        },
                        Skill {
                            name: "UI/UX Principles".to_string(),
                            level: 3,
                        },
                    ],
                },
            ],
            currently_learning: vec![
                "TypeScript".to_string(),
                "Next.js".to_string(),
                "GraphQL".to_string(),
                "Docker".to_string(),
            ],
            projects: vec![
                Project {
                    id: 1,
                    title: "E-Commerce Platform".to_string(),
                    description: "A modern e-commerce platform built with React and Node.js, \
                                  featuring user authentication, product catalog, and secure \
                                  payment integration."
                        .to_string(),
                    technologies: vec![
                        "React".to_string(),
                        "Node.js".to_string(),
                        "MongoDB".to_string(),
                    ],
                    live_demo: "#".to_string(),
                    code_url: "#".to_string(),
                    accent: Accent::Blue,
                },
                Project {
                    id: 2,
                    title: "Task Management App".to_string(),
                    description: "A collaborative task management application with real-time \
                                  updates, drag-and-drop functionality, and team collaboration \
                                  features."
                        .to_string(),
                    technologies: vec![
                        "React".to_string(),
                        "Socket.io".to_string(),
                        "Express".to_string(),
                    ],
                    live_demo: "#".to_string(),
                    code_url: "#".to_string(),
                    accent: Accent::Purple,
                },
                Project {
                    id: 3,
                    title: "Weather Dashboard".to_string(),
                    description: "A responsive weather dashboard that provides current weather \
                                  conditions, 5-day forecasts, and location-based weather \
                                  alerts."
                        .to_string(),
                    technologies: vec![
                        "JavaScript".to_string(),
                        "APIs".to_string(),
                        "CSS3".to_string(),
                    ],
                    live_demo: "#".to_string(),
                    code_url: "#".to_string(),
                    accent: Accent::Emerald,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_content_is_valid() {
        let content = Content::built_in();
        assert!(crate::load::validate(&content).is_ok());
    }

    #[test]
    fn built_in_lists_keep_source_order() {
        let content = Content::built_in();
        let titles: Vec<&str> = content
            .skill_categories
            .iter()
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Frontend", "Backend & Tools", "Design & Others"]);

        let ids: Vec<u32> = content.projects.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
