//! Environment configuration.
//!
//! Variables (a `.env` file is loaded by the binary before these are read):
//! - SPORT_ALIASES="code=canonical,..." extra sport codes layered on the
//!   built-in table (e.g. `SPORT_ALIASES="ipl=cricket,kbo=baseball"`)
//! - PRETTY_OUTPUT=1|true pretty-print the JSON report

use tracing::warn;

use crate::normalize::SportNormalizer;

/// Parse a `code=canonical` list separated by commas.
///
/// Malformed entries (no `=`, blank side) are warned about and dropped.
pub fn parse_sport_aliases(raw: &str) -> Vec<(String, String)> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| match entry.split_once('=') {
            Some((code, canonical)) if !code.trim().is_empty() && !canonical.trim().is_empty() => {
                Some((code.trim().to_string(), canonical.trim().to_string()))
            }
            _ => {
                warn!(entry, "[CONFIG] Ignoring malformed sport alias");
                None
            }
        })
        .collect()
}

/// Extra sport aliases from SPORT_ALIASES. Empty when unset.
pub fn sport_aliases_from_env() -> Vec<(String, String)> {
    std::env::var("SPORT_ALIASES")
        .map(|raw| parse_sport_aliases(&raw))
        .unwrap_or_default()
}

fn flag_enabled(value: &str) -> bool {
    value == "1" || value.to_lowercase() == "true"
}

/// Runtime settings for a breakdown run
#[derive(Debug, Clone, Default)]
pub struct BreakdownConfig {
    pub sport_aliases: Vec<(String, String)>,
    pub pretty_output: bool,
}

impl BreakdownConfig {
    pub fn from_env() -> Self {
        Self {
            sport_aliases: sport_aliases_from_env(),
            pretty_output: std::env::var("PRETTY_OUTPUT")
                .map(|v| flag_enabled(&v))
                .unwrap_or(false),
        }
    }

    /// Built-in sport table extended with the configured aliases
    pub fn normalizer(&self) -> SportNormalizer {
        SportNormalizer::default().with_aliases(self.sport_aliases.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sport_aliases() {
        let aliases = parse_sport_aliases(" ipl=cricket, kbo = baseball ,,");
        assert_eq!(
            aliases,
            vec![
                ("ipl".to_string(), "cricket".to_string()),
                ("kbo".to_string(), "baseball".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_sport_aliases_drops_malformed() {
        let aliases = parse_sport_aliases("ipl,=cricket,kbo=,nrl=rugby");
        assert_eq!(aliases, vec![("nrl".to_string(), "rugby".to_string())]);
    }

    #[test]
    fn test_flag_enabled() {
        assert!(flag_enabled("1"));
        assert!(flag_enabled("TRUE"));
        assert!(!flag_enabled("0"));
        assert!(!flag_enabled("yes"));
    }

    #[test]
    fn test_config_normalizer_uses_aliases() {
        let config = BreakdownConfig {
            sport_aliases: vec![("kbo".to_string(), "baseball".to_string())],
            pretty_output: false,
        };
        let normalizer = config.normalizer();
        assert_eq!(normalizer.normalize("KBO").as_deref(), Some("baseball"));
        assert_eq!(normalizer.normalize("nfl").as_deref(), Some("football"));
    }
}
