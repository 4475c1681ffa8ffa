use std::path::Path;

use crate::error::{JarvisError, JarvisResult};

const DEFAULT_PREAMBLE: &str = include_str!("../../prompts/intent_classifier.txt");

/// Instruction preamble sent ahead of every command.
///
/// The shipped preamble lives in `prompts/intent_classifier.txt`; deployments
/// can point `JARVIS_PROMPT_PATH` at their own revision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    preamble: String,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            preamble: DEFAULT_PREAMBLE.to_string(),
        }
    }
}

impl PromptTemplate {
    pub fn new(preamble: impl Into<String>) -> Self {
        Self {
            preamble: preamble.into(),
        }
    }

    pub fn load(path: &Path) -> JarvisResult<Self> {
        let preamble = std::fs::read_to_string(path).map_err(|error| {
            JarvisError::Config(format!(
                "failed to read prompt template {}: {error}",
                path.display()
            ))
        })?;
        if preamble.trim().is_empty() {
            return Err(JarvisError::Config(format!(
                "prompt template {} is empty",
                path.display()
            )));
        }
        Ok(Self::new(preamble))
    }

    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The single text block sent to the service for `command`.
    pub fn render(&self, command: &str) -> String {
        format!("{}\n\nUser command: {}", self.preamble.trim_end(), command)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn default_preamble_lists_every_wire_kind() {
        let template = PromptTemplate::default();
        for kind in crate::action::ActionKind::ALL {
            assert!(
                template.preamble().contains(&format!("- {}:", kind.as_wire())),
                "preamble is missing {kind}"
            );
        }
    }

    #[test]
    fn render_appends_command_after_preamble() {
        let template = PromptTemplate::new("Classify this.\n");
        assert_eq!(
            template.render("It's too dark in here"),
            "Classify this.\n\nUser command: It's too dark in here"
        );
    }

    #[test]
    fn loads_preamble_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write!(file, "Custom preamble").expect("write");

        let template = PromptTemplate::load(file.path()).expect("load");
        assert_eq!(template.preamble(), "Custom preamble");
    }

    #[test]
    fn empty_or_missing_file_is_a_config_error() {
        let file = tempfile::NamedTempFile::new().expect("tempfile");
        assert!(matches!(
            PromptTemplate::load(file.path()),
            Err(JarvisError::Config(_))
        ));

        let dir = tempfile::tempdir().expect("tempdir");
        assert!(matches!(
            PromptTemplate::load(&dir.path().join("missing.txt")),
            Err(JarvisError::Config(_))
        ));
    }
}
