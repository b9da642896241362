use crate::models::Config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }
}

/// Flag settings that will work but probably not the way the user wants.
pub fn check(config: &Config) -> ConfigWarnings {
    let mut warnings = ConfigWarnings::default();

    if !config.catalog.has_credentials() {
        warnings.push_with_hint(
            "No TMDB credentials configured; every catalog request will fail",
            "Set TMDB_BEARER_TOKEN or TMDB_API_KEY, or add [catalog] to netflop.toml",
        );
    }

    if config.search.debounce.is_zero() {
        warnings.push(
            "Search debounce is 0ms; every keystroke will hit the catalog",
        );
    }

    if config.search.min_query_len == 0 {
        warnings.push_with_hint(
            "Minimum query length is 0; empty input still shows suggestions",
            "Use 1 or more to make the setting meaningful",
        );
    }

    if config.search.suggestion_batch == 0 {
        warnings.push("Suggestion batch size is 0; suggestions will be empty");
    }

    warnings
}
