use anyhow::{Context, anyhow};

/// Names checked for the Gemini credential, in precedence order.
const KEY_NAMES: [&str; 2] = ["GEMINI_API_KEY", "GOOGLE_API_KEY"];

/// Optional dotenv-format secrets file (managed-hosting secrets store).
/// When set, the file is consulted before the process environment.
const SECRETS_FILE_VAR: &str = "GEMINI_SECRETS_FILE";

const MODEL_VAR: &str = "GEMINI_MODEL";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

const MISSING_KEY_HELP: &str = r#"Gemini API key is not configured.

Local run:
  export GEMINI_API_KEY="YOUR_KEY"

Managed hosting:
  add GEMINI_API_KEY (or GOOGLE_API_KEY) to the provider's secrets settings,
  or point GEMINI_SECRETS_FILE at a dotenv-format secrets file"#;

/// Configuration for Gemini API access.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
}

impl GeminiConfig {
    /// Resolves the credential once, at startup.
    ///
    /// Sources in order: the secrets file named by GEMINI_SECRETS_FILE
    /// (when set), then the process environment. Within each source
    /// GEMINI_API_KEY wins over GOOGLE_API_KEY. Values are trimmed and a
    /// blank value counts as unset. Fails with setup instructions when no
    /// source yields a key.
    pub fn resolve() -> anyhow::Result<Self> {
        let api_key = match Self::from_secrets_file()? {
            Some(key) => key,
            None => Self::from_process_env().ok_or_else(|| anyhow!(MISSING_KEY_HELP))?,
        };

        let model = std::env::var(MODEL_VAR)
            .ok()
            .and_then(non_blank)
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self { api_key, model })
    }

    fn from_secrets_file() -> anyhow::Result<Option<String>> {
        let Some(path) = std::env::var(SECRETS_FILE_VAR).ok().and_then(non_blank) else {
            return Ok(None);
        };

        let entries: Vec<(String, String)> = dotenvy::from_path_iter(&path)
            .with_context(|| format!("cannot open secrets file {}", path))?
            .collect::<Result<_, _>>()
            .with_context(|| format!("cannot parse secrets file {}", path))?;

        Ok(pick_key(|name| {
            entries
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone())
        }))
    }

    fn from_process_env() -> Option<String> {
        pick_key(|name| std::env::var(name).ok())
    }
}

/// First usable credential among the known names, honoring their order.
fn pick_key(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    KEY_NAMES
        .iter()
        .find_map(|name| lookup(name).and_then(non_blank))
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn lookup(map: &HashMap<String, String>) -> impl Fn(&str) -> Option<String> + '_ {
        |name| map.get(name).cloned()
    }

    #[test]
    fn should_prefer_gemini_api_key_when_both_are_set() {
        let env = source(&[("GEMINI_API_KEY", "primary"), ("GOOGLE_API_KEY", "fallback")]);

        assert_eq!(pick_key(lookup(&env)), Some("primary".to_string()));
    }

    #[test]
    fn should_fall_back_to_google_api_key() {
        let env = source(&[("GOOGLE_API_KEY", "fallback")]);

        assert_eq!(pick_key(lookup(&env)), Some("fallback".to_string()));
    }

    #[test]
    fn should_treat_empty_value_as_unset() {
        let env = source(&[("GEMINI_API_KEY", ""), ("GOOGLE_API_KEY", "fallback")]);

        assert_eq!(pick_key(lookup(&env)), Some("fallback".to_string()));
    }

    #[test]
    fn should_treat_whitespace_value_as_unset() {
        let env = source(&[("GEMINI_API_KEY", "   "), ("GOOGLE_API_KEY", "  \t ")]);

        assert_eq!(pick_key(lookup(&env)), None);
    }

    #[test]
    fn should_trim_resolved_key() {
        let env = source(&[("GEMINI_API_KEY", "  key-123  ")]);

        assert_eq!(pick_key(lookup(&env)), Some("key-123".to_string()));
    }

    #[test]
    fn should_resolve_nothing_from_empty_source() {
        let env = source(&[]);

        assert_eq!(pick_key(lookup(&env)), None);
    }
}
