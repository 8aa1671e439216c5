//! Sport code normalization.
//!
//! Slips carry whatever sport identifier the upstream book used ("nfl",
//! "NBA", "football"). The aggregator keys tallies by a canonical display name,
//! so every code is mapped through an explicit, immutable lookup table.

use rustc_hash::FxHashMap;

/// Immutable code -> canonical sport name table
#[derive(Debug, Clone)]
pub struct SportNormalizer {
    table: FxHashMap<String, String>,
}

impl Default for SportNormalizer {
    fn default() -> Self {
        Self {
            table: build_default_table(),
        }
    }
}

impl SportNormalizer {
    /// A table with no entries; every code passes through.
    pub fn empty() -> Self {
        Self {
            table: FxHashMap::default(),
        }
    }

    /// Return a new table with extra aliases layered on top.
    ///
    /// Later entries override earlier ones and built-in mappings. Blank codes
    /// or names are ignored. Every value in the table stays a fixed point:
    /// the target is resolved through the table, and remapping a canonical
    /// name drags its existing aliases along with it.
    pub fn with_aliases<I, K, V>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (code, canonical) in aliases {
            let code = lookup_key(code.as_ref());
            let canonical = lookup_key(canonical.as_ref());
            if code.is_empty() || canonical.is_empty() {
                continue;
            }
            let target = self.table.get(&canonical).cloned().unwrap_or(canonical);
            if code == target {
                self.table.insert(target.clone(), target);
                continue;
            }
            for value in self.table.values_mut() {
                if *value == code {
                    *value = target.clone();
                }
            }
            self.table.insert(target.clone(), target.clone());
            self.table.insert(code, target);
        }
        self
    }

    /// Map a raw sport code to its canonical name.
    ///
    /// Lookup is on the trimmed, lowercased code. Unknown codes pass through
    /// in that form. Returns `None` for blank input.
    pub fn normalize(&self, raw: &str) -> Option<String> {
        let key = lookup_key(raw);
        if key.is_empty() {
            return None;
        }
        match self.table.get(&key) {
            Some(canonical) => Some(canonical.clone()),
            None => Some(key),
        }
    }

    /// Whether `raw` has an explicit entry in the table
    pub fn is_known(&self, raw: &str) -> bool {
        self.table.contains_key(&lookup_key(raw))
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

fn lookup_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn build_default_table() -> FxHashMap<String, String> {
    let mut table = FxHashMap::default();

    add_aliases(
        &mut table,
        "football",
        &["nfl", "ncaaf", "cfb", "americanfootball", "american football"],
    );
    add_aliases(
        &mut table,
        "basketball",
        &["nba", "wnba", "ncaab", "ncaamb", "ncaawb", "cbb"],
    );
    add_aliases(&mut table, "baseball", &["mlb"]);
    add_aliases(&mut table, "hockey", &["nhl", "icehockey", "ice hockey"]);
    add_aliases(
        &mut table,
        "soccer",
        &["epl", "mls", "ucl", "laliga", "seriea", "bundesliga", "ligue1"],
    );
    add_aliases(&mut table, "mma", &["ufc"]);
    add_aliases(&mut table, "tennis", &["atp", "wta"]);
    add_aliases(&mut table, "golf", &["pga"]);

    table
}

/// Point each alias at `canonical`, and `canonical` at itself
fn add_aliases(table: &mut FxHashMap<String, String>, canonical: &str, aliases: &[&str]) {
    for alias in aliases {
        table.insert(alias.to_string(), canonical.to_string());
    }
    table.insert(canonical.to_string(), canonical.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_league_codes() {
        let normalizer = SportNormalizer::default();

        assert_eq!(normalizer.normalize("nfl").as_deref(), Some("football"));
        assert_eq!(normalizer.normalize("NBA").as_deref(), Some("basketball"));
        assert_eq!(normalizer.normalize(" mlb ").as_deref(), Some("baseball"));
        assert_eq!(normalizer.normalize("epl").as_deref(), Some("soccer"));
    }

    #[test]
    fn test_canonical_names_map_to_themselves() {
        let normalizer = SportNormalizer::default();

        for canonical in ["football", "basketball", "baseball", "hockey", "soccer"] {
            assert_eq!(normalizer.normalize(canonical).as_deref(), Some(canonical));
        }
        assert_eq!(normalizer.normalize("Football").as_deref(), Some("football"));
    }

    #[test]
    fn test_unknown_codes_pass_through() {
        let normalizer = SportNormalizer::default();

        assert_eq!(normalizer.normalize("Cricket").as_deref(), Some("cricket"));
        assert!(!normalizer.is_known("cricket"));
        assert_eq!(normalizer.normalize("   "), None);
        assert_eq!(normalizer.normalize(""), None);
    }

    #[test]
    fn test_with_aliases_extends_and_overrides() {
        let normalizer = SportNormalizer::default()
            .with_aliases([("ipl", "cricket"), ("MMA", "combat"), ("", "ignored")]);

        assert_eq!(normalizer.normalize("IPL").as_deref(), Some("cricket"));
        assert_eq!(normalizer.normalize("cricket").as_deref(), Some("cricket"));
        assert_eq!(normalizer.normalize("mma").as_deref(), Some("combat"));
        // aliases of a remapped canonical name follow it
        assert_eq!(normalizer.normalize("ufc").as_deref(), Some("combat"));
        assert_eq!(normalizer.normalize("combat").as_deref(), Some("combat"));
        // untouched entries survive
        assert_eq!(normalizer.normalize("nfl").as_deref(), Some("football"));
        assert!(!normalizer.is_known(""));
    }

    #[test]
    fn test_alias_target_resolves_through_table() {
        let normalizer = SportNormalizer::default().with_aliases([("gridiron", "nfl")]);
        assert_eq!(normalizer.normalize("gridiron").as_deref(), Some("football"));
        assert_eq!(normalizer.normalize("nfl").as_deref(), Some("football"));

        // pointing a canonical name at one of its own aliases changes nothing
        let normalizer = SportNormalizer::default().with_aliases([("mma", "ufc")]);
        assert_eq!(normalizer.normalize("ufc").as_deref(), Some("mma"));
        assert_eq!(normalizer.normalize("mma").as_deref(), Some("mma"));
    }

    #[test]
    fn test_normalize_is_idempotent_after_aliases() {
        let normalizer = SportNormalizer::default().with_aliases([
            ("mma", "combat"),
            ("ipl", "cricket"),
            ("basketball", "hoops"),
            ("kbo", "mlb"),
            ("combat", "fighting"),
        ]);

        for code in normalizer.table.keys() {
            let once = normalizer.normalize(code).unwrap();
            let twice = normalizer.normalize(&once).unwrap();
            assert_eq!(once, twice, "code {} not stable", code);
        }
        assert_eq!(normalizer.normalize("ufc").as_deref(), Some("fighting"));
        assert_eq!(normalizer.normalize("nba").as_deref(), Some("hoops"));
        assert_eq!(normalizer.normalize("kbo").as_deref(), Some("baseball"));
    }

    #[test]
    fn test_empty_table() {
        let normalizer = SportNormalizer::empty();
        assert!(normalizer.is_empty());
        assert_eq!(normalizer.normalize("NFL").as_deref(), Some("nfl"));
    }
}
