//! Update-feed descriptor rendering.
//!
//! The descriptor template is a static text file carrying four literal
//! placeholders: `{{fileName}}`, `{{sha1}}`, `{{releaseDate}}` and
//! `{{timestamp}}`. Rendering is plain global substitution; placeholders
//! absent from the template are silently ignored and duplicates are all
//! replaced.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Computed values substituted into the descriptor template.
#[derive(Debug, Clone)]
pub struct FeedValues {
    pub file_name: String,
    pub sha1: String,
    pub release_date: String,
    pub timestamp: String,
}

/// Read the descriptor template. The template is read-only input and never
/// mutated.
pub fn load_template(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("reading descriptor template '{}'", path.display()))
}

/// Substitute the four placeholders. Pure; two renders of the same inputs
/// produce byte-identical output.
pub fn render(template: &str, values: &FeedValues) -> String {
    template
        .replace("{{fileName}}", &values.file_name)
        .replace("{{sha1}}", &values.sha1)
        .replace("{{releaseDate}}", &values.release_date)
        .replace("{{timestamp}}", &values.timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn values() -> FeedValues {
        FeedValues {
            file_name: "SetiAstroScripts05.11.2024.zip".to_string(),
            sha1: "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d".to_string(),
            release_date: "20240511".to_string(),
            timestamp: "2024-05-11T18:40:41.000Z".to_string(),
        }
    }

    #[test]
    fn substitutes_all_four_placeholders() {
        let template = "f={{fileName}} s={{sha1}} r={{releaseDate}} t={{timestamp}}";
        let rendered = render(template, &values());
        assert_eq!(
            rendered,
            "f=SetiAstroScripts05.11.2024.zip \
             s=aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d \
             r=20240511 t=2024-05-11T18:40:41.000Z"
        );
    }

    #[test]
    fn duplicate_placeholders_are_all_replaced() {
        let rendered = render("{{sha1}}/{{sha1}}", &values());
        assert_eq!(
            rendered,
            "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d/aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d"
        );
    }

    #[test]
    fn absent_placeholders_are_silently_ignored() {
        assert_eq!(render("no placeholders here", &values()), "no placeholders here");
    }

    #[test]
    fn unknown_placeholders_pass_through() {
        assert_eq!(render("{{version}}", &values()), "{{version}}");
    }

    #[test]
    fn rendering_is_idempotent_on_inputs() {
        let template = "<package fileName=\"{{fileName}}\" sha1=\"{{sha1}}\"/>";
        assert_eq!(render(template, &values()), render(template, &values()));
    }

    #[test]
    fn load_template_surfaces_missing_file() {
        let tmp = TempDir::new().unwrap();
        assert!(load_template(&tmp.path().join("updates_template.xml")).is_err());
    }
}
