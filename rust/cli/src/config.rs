use serde::{Deserialize, Serialize};
use std::fs;

pub const DEFAULT_PAUSE_MS: u64 = 1500;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub player_one: String,
    pub player_two: String,
    pub pause_ms: u64,
}

impl Config {
    pub fn names(&self) -> [String; 2] {
        [self.player_one.clone(), self.player_two.clone()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub player_one: ValueSource,
    pub player_two: ValueSource,
    pub pause_ms: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            player_one: ValueSource::Default,
            player_two: ValueSource::Default,
            pause_ms: ValueSource::Default,
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
        let [player_one, player_two] = liarsclub_engine::game::default_names();
        Self {
            seed: None,
            player_one,
            player_two,
            pause_ms: DEFAULT_PAUSE_MS,
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
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

/// Resolves configuration with precedence default < file < env.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("LIARSCLUB_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(&path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.player_one {
            cfg.player_one = v;
            sources.player_one = ValueSource::File;
        }
        if let Some(v) = f.player_two {
            cfg.player_two = v;
            sources.player_two = ValueSource::File;
        }
        if let Some(v) = f.pause_ms {
            cfg.pause_ms = v;
            sources.pause_ms = ValueSource::File;
        }
        tracing::debug!(path = %path, "config file applied");
    }

    if let Ok(seed) = std::env::var("LIARSCLUB_SEED")
        && !seed.is_empty()
    {
        cfg.seed = match seed.parse() {
            Ok(v) => Some(v),
            Err(_) => return Err(ConfigError::Invalid("Invalid seed".into())),
        };
        sources.seed = ValueSource::Env;
    }
    if let Ok(name) = std::env::var("LIARSCLUB_PLAYER_ONE")
        && !name.is_empty()
    {
        cfg.player_one = name;
        sources.player_one = ValueSource::Env;
    }
    if let Ok(name) = std::env::var("LIARSCLUB_PLAYER_TWO")
        && !name.is_empty()
    {
        cfg.player_two = name;
        sources.player_two = ValueSource::Env;
    }
    if let Ok(pause) = std::env::var("LIARSCLUB_PAUSE_MS")
        && !pause.is_empty()
    {
        cfg.pause_ms = pause
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid pause_ms".into()))?;
        sources.pause_ms = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    player_one: Option<String>,
    #[serde(default)]
    player_two: Option<String>,
    #[serde(default)]
    pause_ms: Option<u64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.player_one.trim().is_empty() || cfg.player_two.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "player names must not be empty".into(),
        ));
    }
    if cfg.player_one == cfg.player_two {
        return Err(ConfigError::Invalid("player names must differ".into()));
    }
    Ok(())
}
