use crate::errors::Result;
use crate::models::WindowInfo;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Keep matching windows out of tiling.
///
/// # Example
///
/// In `config.toml`
///
/// ```toml
/// [[ignore]]
/// class = "^firefox$"
/// title = "Picture-in-Picture"
/// ```
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct IgnoreRule {
    /// Regular expression matched against the window class.
    pub class: String,
    /// Optional regular expression matched against the window title.
    pub title: Option<String>,
}

#[derive(Debug)]
struct CompiledRule {
    class: Regex,
    title: Option<Regex>,
}

/// Compiled set of ignore rules.
#[derive(Debug, Default)]
pub struct IgnoreRules(Vec<CompiledRule>);

impl IgnoreRule {
    /// # Errors
    ///
    /// Fails if the class or title is not a valid regular expression.
    pub fn check(&self) -> Result<()> {
        self.compile().map(|_| ())
    }

    fn compile(&self) -> Result<CompiledRule> {
        Ok(CompiledRule {
            class: Regex::new(&self.class)?,
            title: self.title.as_deref().map(Regex::new).transpose()?,
        })
    }
}

impl IgnoreRules {
    /// Compile the rules, dropping the ones that are not valid regular expressions.
    #[must_use]
    pub fn new(rules: &[IgnoreRule]) -> Self {
        let compiled = rules
            .iter()
            .filter_map(|rule| match rule.compile() {
                Ok(compiled) => Some(compiled),
                Err(err) => {
                    tracing::warn!(?rule, error = %err, "Skipping invalid ignore rule");
                    None
                }
            })
            .collect();
        Self(compiled)
    }

    #[must_use]
    pub fn matches(&self, info: &WindowInfo) -> bool {
        self.0.iter().any(|rule| {
            rule.class.is_match(&info.class)
                && rule.title.as_ref().map_or(true, |t| t.is_match(&info.name))
        })
    }
}
