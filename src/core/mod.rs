pub mod reveal;
pub mod store;
pub mod template;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Which provider the shell snippet points Claude Code at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderMode {
    Subscription,
    OpenRouter,
}

impl ProviderMode {
    pub const ALL: [ProviderMode; 2] = [ProviderMode::Subscription, ProviderMode::OpenRouter];

    /// Stable identifier, also accepted on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            ProviderMode::Subscription => "subscription",
            ProviderMode::OpenRouter => "openrouter",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderMode::Subscription => "Subscription",
            ProviderMode::OpenRouter => "OpenRouter",
        }
    }

    /// SF Symbol name used by menu-bar front ends.
    pub fn icon_name(&self) -> &'static str {
        match self {
            ProviderMode::Subscription => "person.fill",
            ProviderMode::OpenRouter => "network",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            ProviderMode::Subscription => ProviderMode::OpenRouter,
            ProviderMode::OpenRouter => ProviderMode::Subscription,
        }
    }
}

impl fmt::Display for ProviderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ProviderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "subscription" | "sub" => Ok(ProviderMode::Subscription),
            "openrouter" | "or" => Ok(ProviderMode::OpenRouter),
            other => Err(format!(
                "unknown provider mode '{}' (expected one of: {})",
                other,
                ProviderMode::ALL
                    .iter()
                    .map(|m| m.id())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_modes() {
        assert_eq!(ProviderMode::Subscription.toggle(), ProviderMode::OpenRouter);
        assert_eq!(ProviderMode::OpenRouter.toggle(), ProviderMode::Subscription);
    }

    #[test]
    fn parse_ids_and_short_forms() {
        assert_eq!("subscription".parse::<ProviderMode>(), Ok(ProviderMode::Subscription));
        assert_eq!("OpenRouter".parse::<ProviderMode>(), Ok(ProviderMode::OpenRouter));
        assert_eq!("or".parse::<ProviderMode>(), Ok(ProviderMode::OpenRouter));
        assert_eq!(" sub ".parse::<ProviderMode>(), Ok(ProviderMode::Subscription));
    }

    #[test]
    fn parse_unknown_lists_choices() {
        let err = "anthropic".parse::<ProviderMode>().unwrap_err();
        assert!(err.contains("anthropic"));
        assert!(err.contains("subscription, openrouter"));
    }

    #[test]
    fn display_uses_human_name() {
        assert_eq!(ProviderMode::OpenRouter.to_string(), "OpenRouter");
        assert_eq!(ProviderMode::Subscription.to_string(), "Subscription");
    }

    #[test]
    fn serializes_as_id() {
        let json = serde_json::to_string(&ProviderMode::OpenRouter).unwrap();
        assert_eq!(json, "\"openrouter\"");
        for mode in ProviderMode::ALL {
            assert_eq!(serde_json::to_string(&mode).unwrap(), format!("\"{}\"", mode.id()));
        }
    }
}
