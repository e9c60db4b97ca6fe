//! Static content tables for the folio terminal portfolio.
//!
//! Everything the page shows (profile copy, skill categories, projects,
//! outbound links) lives here as plain data: constructed once at startup,
//! read many times, never mutated. The tables double as a configuration
//! schema; [`load_from_path`] deserializes the same shapes from a TOML file
//! so the page can be re-skinned without recompiling.

mod defaults;
mod load;
mod model;
mod section;

pub use load::ContentError;
pub use load::load_from_path;
pub use model::Accent;
pub use model::Content;
pub use model::Education;
pub use model::FocusArea;
pub use model::Icon;
pub use model::Profile;
pub use model::Project;
pub use model::SKILL_LEVEL_MAX;
pub use model::Skill;
pub use model::SkillCategory;
pub use model::SocialLink;
pub use model::Stat;
pub use section::SectionId;
