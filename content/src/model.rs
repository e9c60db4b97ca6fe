use serde::Deserialize;

/// Upper bound of the proficiency gauge. Levels above this render as a
/// full gauge rather than overflowing it.
pub const SKILL_LEVEL_MAX: u8 = 5;

/// Style token attached to content entries. The terminal theme maps each
/// token onto a concrete color; content never names colors directly.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Blue,
    Cyan,
    Green,
    Purple,
    Emerald,
}

/// Icon token for category and focus-area headings.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Code,
    Server,
    Palette,
    Mobile,
}

impl Icon {
    /// Terminal glyph for the token.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Code => "</>",
            Icon::Server => "[#]",
            Icon::Palette => "(*)",
            Icon::Mobile => "[o]",
        }
    }
}

/// Root content table: everything the page renders.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Content {
    pub profile: Profile,
    #[serde(default)]
    pub social: Vec<SocialLink>,
    pub skill_categories: Vec<SkillCategory>,
    #[serde(default)]
    pub currently_learning: Vec<String>,
    pub projects: Vec<Project>,
}

/// Hero and about-section copy.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    /// Short brand string shown on the navigation bar (e.g. `alex.dev`).
    pub brand: String,
    pub name: String,
    pub tagline: String,
    pub intro: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub story: Vec<String>,
    #[serde(default)]
    pub focus: Vec<FocusArea>,
    pub education: Education,
}

/// A single about-section stat card (`15+` / `Projects Completed`).
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// A "what I do" entry in the about section.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FocusArea {
    pub title: String,
    pub summary: String,
    pub icon: Icon,
    pub accent: Accent,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub years: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// Outbound link to a third-party profile or resource.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SkillCategory {
    pub title: String,
    pub icon: Icon,
    pub accent: Accent,
    pub skills: Vec<Skill>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Skill {
    pub name: String,
    /// Proficiency in the fixed range 0–5; see [`SKILL_LEVEL_MAX`].
    pub level: u8,
}

impl Skill {
    /// Level clamped into the range the gauge can show.
    pub fn gauge_level(&self) -> u8 {
        self.level.min(SKILL_LEVEL_MAX)
    }
}

/// A project gallery entry. `live_demo`/`code_url` may be `#` placeholders.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Project {
    /// Unique within the project list; checked at load time.
    pub id: u32,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub live_demo: String,
    pub code_url: String,
    pub accent: Accent,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn gauge_level_clamps_out_of_range_values() {
        let skill = Skill {
            name: "Rust".to_string(),
            level: 9,
        };
        assert_eq!(skill.gauge_level(), SKILL_LEVEL_MAX);

        let skill = Skill {
            name: "CSS".to_string(),
            level: 3,
        };
        assert_eq!(skill.gauge_level(), 3);
    }
}
