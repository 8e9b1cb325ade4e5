//! Codec configuration.

use crate::decode::Decoder;
use figment::{
    Figment, Metadata, Profile, Provider,
    providers::{Env, Format, Serialized, Toml},
    value::{Dict, Map},
};
use serde::{Deserialize, Serialize};

/// Decoder settings, loadable from `rlp.toml` and `RLP_` environment variables.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RlpConfig {
    /// Reject trailing bytes after the top-level item
    pub strict: bool,
    /// Maximum list nesting depth, unbounded if `None`
    pub max_depth: Option<usize>,
}

impl Default for RlpConfig {
    fn default() -> Self {
        Self { strict: true, max_depth: None }
    }
}

impl RlpConfig {
    /// File name of the config file.
    pub const FILE_NAME: &'static str = "rlp.toml";

    /// Prefix of the environment variables that override the config file.
    pub const ENV_PREFIX: &'static str = "RLP_";

    /// Returns the figment that layers the defaults, the config file and the environment.
    ///
    /// The config file is read from the `[default]` profile, e.g.
    ///
    /// ```toml
    /// [default]
    /// strict = false
    /// max_depth = 64
    /// ```
    pub fn figment() -> Figment {
        Figment::from(Self::default())
            .merge(Toml::file(Self::FILE_NAME).nested())
            .merge(Env::prefixed(Self::ENV_PREFIX))
    }

    /// Loads the config from [`Self::figment`].
    pub fn load() -> Result<Self, figment::Error> {
        Self::from_provider(Self::figment())
    }

    /// Extracts a config from the given provider.
    pub fn from_provider<T: Provider>(provider: T) -> Result<Self, figment::Error> {
        trace!("load config with provider: {:?}", provider.metadata());
        Figment::from(provider).extract()
    }

    /// Returns a decoder with these settings.
    pub fn decoder(&self) -> Decoder {
        Decoder::from(self)
    }
}

impl Provider for RlpConfig {
    fn metadata(&self) -> Metadata {
        Metadata::named("RLP Config")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        Serialized::defaults(self).data()
    }
}
