use dioxus::prelude::*;
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct EggConfig {
    pub min_viewport_width: f64,
    pub secret_word: String,
    pub hello_word: String,
    pub secret_duration_ms: u32,
    pub hearts_duration_ms: u32,
    pub hello_duration_ms: u32,
    pub particle_lifetime_ms: u32,
    pub exit_duration_ms: u32,
    pub particle_probability: f64,
    pub max_particles: usize,
    pub typed_text_limit: usize,
    pub typed_text_keep: usize,
    pub info_storage_key: String,
}

impl Default for EggConfig {
    fn default() -> Self {
        Self {
            min_viewport_width: 640.0,
            secret_word: "EASTER".to_string(),
            hello_word: "hello".to_string(),
            secret_duration_ms: 5000,
            hearts_duration_ms: 3000,
            hello_duration_ms: 3000,
            particle_lifetime_ms: 2000,
            exit_duration_ms: 300,
            particle_probability: 0.02,
            max_particles: 10,
            typed_text_limit: 20,
            typed_text_keep: 10,
            info_storage_key: "easterEggInfoDisabled".to_string(),
        }
    }
}

impl EggConfig {
    pub fn is_enabled_for(&self, width: f64) -> bool {
        width > self.min_viewport_width
    }

    pub fn secret_len(&self) -> usize {
        self.secret_word.chars().count()
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match std::env::var("EASTER_EGGS_CONFIG") {
            Ok(raw) => Self::from_json(&raw).unwrap_or_else(|err| {
                tracing::warn!("easter-eggs: ignoring EASTER_EGGS_CONFIG: {err}");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, String> {
        serde_json::from_str::<Self>(raw)
            .map(Self::validated)
            .map_err(|err| format!("config decode failed: {err}"))
    }

    pub fn validated(mut self) -> Self {
        let defaults = Self::default();
        if self.secret_word.is_empty() {
            tracing::warn!("easter-eggs: empty secret_word, using {}", defaults.secret_word);
            self.secret_word = defaults.secret_word;
        }
        if self.hello_word.is_empty() {
            tracing::warn!("easter-eggs: empty hello_word, using {}", defaults.hello_word);
            self.hello_word = defaults.hello_word;
        }
        if self.typed_text_keep > self.typed_text_limit {
            tracing::warn!(
                "easter-eggs: typed_text_keep {} exceeds typed_text_limit {}, clamping",
                self.typed_text_keep,
                self.typed_text_limit
            );
            self.typed_text_keep = self.typed_text_limit;
        }
        self
    }
}

pub fn use_egg_config() -> EggConfig {
    use_hook(|| {
        try_consume_context::<EggConfig>()
            .map(EggConfig::validated)
            .unwrap_or_else(EggConfig::load)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn threshold_is_exclusive() {
        let config = EggConfig::default();
        assert!(!config.is_enabled_for(640.0));
        assert!(!config.is_enabled_for(320.0));
        assert!(config.is_enabled_for(641.0));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = EggConfig::from_json(r#"{"secret_word":"BUNNY","max_particles":4}"#)
            .expect("config parses");
        assert_eq!(config.secret_word, "BUNNY");
        assert_eq!(config.max_particles, 4);
        assert_eq!(config.hello_word, "hello");
        assert_eq!(config.secret_len(), 5);
        assert_eq!(config.info_storage_key, "easterEggInfoDisabled");
    }

    #[test]
    fn inconsistent_limits_are_clamped() {
        let config = EggConfig::from_json(r#"{"typed_text_limit":5,"typed_text_keep":10}"#)
            .expect("config parses");
        assert_eq!(config.typed_text_limit, 5);
        assert_eq!(config.typed_text_keep, 5);
    }

    #[test]
    fn empty_words_fall_back_to_defaults() {
        let config = EggConfig::from_json(r#"{"secret_word":"","hello_word":""}"#)
            .expect("config parses");
        assert_eq!(config.secret_word, "EASTER");
        assert_eq!(config.hello_word, "hello");
        assert_eq!(config.secret_len(), 6);
    }

    #[test]
    fn context_config_is_validated_too() {
        let config = EggConfig {
            secret_word: String::new(),
            typed_text_keep: 50,
            ..EggConfig::default()
        }
        .validated();
        assert_eq!(config.secret_word, "EASTER");
        assert_eq!(config.typed_text_keep, 20);
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = EggConfig::from_json("{not json").unwrap_err();
        assert!(err.starts_with("config decode failed"));
    }
}
