use super::ProviderMode;

/// Endpoint exported as `ANTHROPIC_BASE_URL` in OpenRouter mode.
pub const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api";

/// Substring whose presence marks a file as OpenRouter mode.
pub const OPENROUTER_MARKER: &str = "openrouter.ai/api";

/// Line prefix carrying the saved key.
pub const API_KEY_PREFIX: &str = "export OPENROUTER_API_KEY=\"";

/// Variables cleared when switching back to the subscription login.
pub const CLEARED_VARS: &[&str] = &[
    "OPENROUTER_API_KEY",
    "ANTHROPIC_AUTH_TOKEN",
    "ANTHROPIC_BASE_URL",
    "ANTHROPIC_CUSTOM_HEADERS",
    "ANTHROPIC_API_KEY",
];

/// Build the full file content for `mode`. The key is ignored in subscription mode.
pub fn render(mode: ProviderMode, api_key: Option<&str>) -> String {
    let mut lines: Vec<String> = Vec::new();

    match mode {
        ProviderMode::Subscription => {
            lines.push("# Claude Code: subscription mode (no API env)".to_string());
            for var in CLEARED_VARS {
                lines.push(format!("unset {}", var));
            }
        }
        ProviderMode::OpenRouter => {
            let key = api_key.unwrap_or("");
            lines.push("# Claude Code: OpenRouter mode".to_string());
            lines.push(format!("{}{}\"", API_KEY_PREFIX, key));
            lines.push(format!("export ANTHROPIC_BASE_URL=\"{}\"", OPENROUTER_BASE_URL));
            lines.push("export ANTHROPIC_AUTH_TOKEN=\"$OPENROUTER_API_KEY\"".to_string());
            lines.push("export ANTHROPIC_API_KEY=\"\"".to_string());
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUBSCRIPTION: &str = "# Claude Code: subscription mode (no API env)
unset OPENROUTER_API_KEY
unset ANTHROPIC_AUTH_TOKEN
unset ANTHROPIC_BASE_URL
unset ANTHROPIC_CUSTOM_HEADERS
unset ANTHROPIC_API_KEY";

    #[test]
    fn subscription_template_is_exact() {
        assert_eq!(render(ProviderMode::Subscription, None), SUBSCRIPTION);
    }

    #[test]
    fn subscription_ignores_key() {
        assert_eq!(render(ProviderMode::Subscription, Some("sk-leak")), SUBSCRIPTION);
        assert!(!render(ProviderMode::Subscription, Some("sk-leak")).contains("sk-leak"));
    }

    #[test]
    fn openrouter_template_is_exact() {
        let expected = "# Claude Code: OpenRouter mode
export OPENROUTER_API_KEY=\"sk-or-abc\"
export ANTHROPIC_BASE_URL=\"https://openrouter.ai/api\"
export ANTHROPIC_AUTH_TOKEN=\"$OPENROUTER_API_KEY\"
export ANTHROPIC_API_KEY=\"\"";
        assert_eq!(render(ProviderMode::OpenRouter, Some("sk-or-abc")), expected);
    }

    #[test]
    fn no_trailing_newline() {
        for mode in ProviderMode::ALL {
            assert!(!render(mode, Some("k")).ends_with('\n'));
        }
    }

    #[test]
    fn openrouter_without_key_writes_empty_value() {
        let content = render(ProviderMode::OpenRouter, None);
        assert!(content.contains("export OPENROUTER_API_KEY=\"\"\n"));
        assert!(content.contains(OPENROUTER_MARKER));
    }
}
