use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;

use crate::model::Content;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse content file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid content: {0}")]
    Invalid(String),
}

/// Load content tables from a TOML file and validate them.
pub fn load_from_path(path: &Path) -> Result<Content, ContentError> {
    let raw = fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let content: Content = toml::from_str(&raw).map_err(|source| ContentError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    validate(&content)?;
    Ok(content)
}

/// Structural checks the type system cannot express.
pub(crate) fn validate(content: &Content) -> Result<(), ContentError> {
    if content.skill_categories.is_empty() {
        return Err(ContentError::Invalid(
            "at least one skill category is required".to_string(),
        ));
    }
    for category in &content.skill_categories {
        if category.skills.is_empty() {
            return Err(ContentError::Invalid(format!(
                "skill category '{}' has no skills",
                category.title
            )));
        }
    }
    if content.projects.is_empty() {
        return Err(ContentError::Invalid(
            "at least one project is required".to_string(),
        ));
    }
    let mut seen = HashSet::new();
    for project in &content.projects {
        if !seen.insert(project.id) {
            return Err(ContentError::Invalid(format!(
                "duplicate project id {}",
                project.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const MINIMAL_TOML: &str = r##"
[profile]
brand = "jane.dev"
name = "Jane Doe"
tagline = "Systems Programmer"
intro = "Hello."
email = "jane@x.com"
phone = "+1 (555) 000-0000"
location = "Berlin"

[profile.education]
degree = "BSc Computer Science"
school = "Somewhere"
years = "2018-2022"

[[skill_categories]]
title = "Systems"
icon = "code"
accent = "blue"

[[skill_categories.skills]]
name = "Rust"
level = 4

[[projects]]
id = 1
title = "Demo"
description = "A demo."
technologies = ["Rust"]
live_demo = "#"
code_url = "#"
accent = "emerald"
"##;

    fn write_temp(toml: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(toml.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn loads_minimal_toml() {
        let file = write_temp(MINIMAL_TOML);
        let content = load_from_path(file.path()).expect("load");
        assert_eq!(content.profile.name, "Jane Doe");
        assert_eq!(content.skill_categories.len(), 1);
        assert_eq!(content.projects[0].id, 1);
        // Optional tables default to empty.
        assert!(content.social.is_empty());
        assert!(content.currently_learning.is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_from_path(Path::new("/nonexistent/content.toml"))
            .expect_err("missing file must fail");
        assert!(matches!(err, ContentError::Io { .. }));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let file = write_temp("profile = 3");
        let err = load_from_path(file.path()).expect_err("bad toml must fail");
        assert!(matches!(err, ContentError::Parse { .. }));
    }

    #[test]
    fn duplicate_project_ids_are_rejected() {
        let duplicated = MINIMAL_TOML.replace("id = 1", "id = 7")
            + r##"
[[projects]]
id = 7
title = "Again"
description = "Same id."
technologies = ["Rust"]
live_demo = "#"
code_url = "#"
accent = "blue"
"##;
        let file = write_temp(&duplicated);
        let err = load_from_path(file.path()).expect_err("duplicate ids must fail");
        assert!(matches!(err, ContentError::Invalid(_)), "got {err:?}");
    }

    #[test]
    fn empty_skill_category_is_rejected() {
        let gutted = MINIMAL_TOML.replace(
            "accent = \"blue\"\n\n[[skill_categories.skills]]\nname = \"Rust\"\nlevel = 4",
            "accent = \"blue\"\nskills = []",
        );
        let file = write_temp(&gutted);
        let err = load_from_path(file.path()).expect_err("empty category must fail");
        assert!(matches!(err, ContentError::Invalid(_)), "got {err:?}");
    }
}
