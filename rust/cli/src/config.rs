use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub min_number: i64,
    pub max_number: i64,
    pub starting_score: u32,
    pub seed: Option<u64>,
    pub store: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub min_number: ValueSource,
    pub max_number: ValueSource,
    pub starting_score: ValueSource,
    pub seed: ValueSource,
    pub store: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            min_number: ValueSource::Default,
            max_number: ValueSource::Default,
            starting_score: ValueSource::Default,
            seed: ValueSource::Default,
            store: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_number: 1,
            max_number: 20,
            starting_score: 15,
            seed: None,
            store: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("HILO_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.min_number {
            cfg.min_number = v;
            sources.min_number = ValueSource::File;
        }
        if let Some(v) = f.max_number {
            cfg.max_number = v;
            sources.max_number = ValueSource::File;
        }
        if let Some(v) = f.starting_score {
            cfg.starting_score = v;
            sources.starting_score = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.store {
            cfg.store = Some(v);
            sources.store = ValueSource::File;
        }
    }

    if let Ok(min) = std::env::var("HILO_MIN_NUMBER")
        && !min.is_empty()
    {
        cfg.min_number = min
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid min_number".into()))?;
        sources.min_number = ValueSource::Env;
    }
    if let Ok(max) = std::env::var("HILO_MAX_NUMBER")
        && !max.is_empty()
    {
        cfg.max_number = max
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid max_number".into()))?;
        sources.max_number = ValueSource::Env;
    }
    if let Ok(score) = std::env::var("HILO_STARTING_SCORE")
        && !score.is_empty()
    {
        cfg.starting_score = score
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid starting_score".into()))?;
        sources.starting_score = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var("HILO_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(store) = std::env::var("HILO_STORE")
        && !store.is_empty()
    {
        cfg.store = Some(store);
        sources.store = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    min_number: Option<i64>,
    #[serde(default)]
    max_number: Option<i64>,
    #[serde(default)]
    starting_score: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    store: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_score == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_score must be >=1".into(),
        ));
    }
    if cfg.min_number > cfg.max_number {
        return Err(ConfigError::Invalid(
            "Invalid configuration: min_number must not exceed max_number".into(),
        ));
    }
    Ok(())
}
