//! Technology configuration.
//!
//! A technology configuration declares, for each generated device class, the
//! cell/model pairs to emit and the per-format parameter lists forwarded to
//! the model instance. It also carries the per-format header includes that
//! are handed back to the caller untouched.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::path::Path;

use arcstr::ArcStr;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::error::{ErrorSource, Result};
use crate::format::OutputFormat;
use crate::io::read_to_string;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ConfigError {
    #[error("unknown output format `{0}`")]
    UnknownFormat(String),

    #[error("no `{format}` entry in section `{section}`")]
    MissingFormat {
        section: &'static str,
        format: OutputFormat,
    },

    #[error("no `port_order` entry for diode `{0}`")]
    MissingPortOrder(ArcStr),

    #[error("no `res_map` entry {index} for metal resistor `{cell_name}`")]
    MissingResValue { cell_name: ArcStr, index: u32 },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TechConfig {
    pub header: FormatMap<HeaderConfig>,
    pub mos: MosConfig,
    pub diode: DiodeConfig,
    pub res_metal: ResMetalConfig,
}

impl TechConfig {
    /// Loads a configuration, picking the parser from the file extension.
    ///
    /// `.toml` and `.json` files are parsed as such; `.yaml`, `.yml`, and
    /// extensionless files are read as YAML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path.extension().and_then(|ext| ext.to_str());
        if !matches!(ext, Some("toml" | "json" | "yaml" | "yml") | None) {
            return Err(ErrorSource::UnsupportedConfigFile(path.to_path_buf()).into());
        }

        let data = read_to_string(path)?;
        let config = match ext {
            Some("toml") => toml::from_str(&data)?,
            Some("json") => serde_json::from_str(&data)?,
            _ => serde_yaml::from_str(&data)?,
        };
        Ok(config)
    }

    pub fn from_yaml_str(data: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(data)?)
    }

    /// Checks that every format key names a supported [`OutputFormat`].
    pub fn validate(&self) -> ConfigResult<()> {
        self.header.validate()?;
        self.mos.params.validate()?;
        self.diode.params.validate()?;
        self.res_metal.params.validate()?;
        Ok(())
    }
}

/// A mapping from format names to per-format data.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct FormatMap<T>(BTreeMap<String, T>);

impl<T> FormatMap<T> {
    pub fn get(&self, section: &'static str, format: OutputFormat) -> ConfigResult<&T> {
        self.0
            .get(format.name())
            .ok_or(ConfigError::MissingFormat { section, format })
    }

    pub fn validate(&self) -> ConfigResult<()> {
        for key in self.0.keys() {
            key.parse::<OutputFormat>()?;
        }
        Ok(())
    }
}

impl<T> FromIterator<(OutputFormat, T)> for FormatMap<T> {
    fn from_iter<I: IntoIterator<Item = (OutputFormat, T)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(fmt, v)| (fmt.name().to_string(), v))
                .collect(),
        )
    }
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Deserialize)]
pub struct HeaderConfig {
    pub includes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MosConfig {
    pub types: Vec<DeviceType>,
    #[serde(flatten)]
    pub params: FormatMap<ParamList>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DiodeConfig {
    pub types: Vec<DeviceType>,
    /// Selects the fixed-instance templates, which forward no parameters.
    #[serde(rename = "static")]
    pub is_static: bool,
    #[serde(default)]
    pub port_order: BTreeMap<String, [String; 2]>,
    #[serde(flatten)]
    pub params: FormatMap<ParamList>,
}

impl DiodeConfig {
    pub fn port_order(&self, cell_name: &ArcStr) -> ConfigResult<&[String; 2]> {
        self.port_order
            .get(cell_name.as_str())
            .ok_or_else(|| ConfigError::MissingPortOrder(cell_name.clone()))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResMetalConfig {
    pub types: Vec<DeviceType>,
    #[serde(default)]
    pub write_res_val: bool,
    /// Sheet resistance per metal layer, keyed from 1.
    #[serde(default)]
    pub res_map: BTreeMap<ResIndex, Scalar>,
    #[serde(flatten)]
    pub params: FormatMap<ParamList>,
}

impl ResMetalConfig {
    /// Returns the sheet resistance of the `idx`-th declared type.
    pub fn sheet_res(&self, idx: usize, cell_name: &ArcStr) -> ConfigResult<&Scalar> {
        let index = idx as u32 + 1;
        self.res_map
            .get(&ResIndex(index))
            .ok_or_else(|| ConfigError::MissingResValue {
                cell_name: cell_name.clone(),
                index,
            })
    }
}

/// A generated cell name and the technology model it instantiates.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
#[serde(from = "(String, String)")]
pub struct DeviceType {
    pub cell_name: ArcStr,
    pub model_name: ArcStr,
}

impl DeviceType {
    pub fn new(cell_name: impl Into<ArcStr>, model_name: impl Into<ArcStr>) -> Self {
        Self {
            cell_name: cell_name.into(),
            model_name: model_name.into(),
        }
    }
}

impl From<(String, String)> for DeviceType {
    fn from((cell_name, model_name): (String, String)) -> Self {
        Self::new(cell_name, model_name)
    }
}

pub type ParamList = Vec<Param>;

/// A `name=value` pair appended to a model instance.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(from = "(String, Scalar)")]
pub struct Param {
    pub name: String,
    pub value: String,
}

impl Param {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl From<(String, Scalar)> for Param {
    fn from((name, value): (String, Scalar)) -> Self {
        Self {
            name,
            value: value.to_string(),
        }
    }
}

/// A scalar configuration value, kept in its natural text form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            // Shortest round-trip form: `2.0` stays `2.0`, `2.0e-6` becomes `2e-6`.
            // Quote a value in the configuration to keep its exact spelling.
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Str(v) => write!(f, "{v}"),
        }
    }
}

/// A `res_map` key.
///
/// Accepts both integer keys (YAML) and numeric string keys (TOML, JSON).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ResIndex(pub u32);

impl<'de> Deserialize<'de> for ResIndex {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ResIndexVisitor;

        impl<'de> Visitor<'de> for ResIndexVisitor {
            type Value = ResIndex;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "a non-negative layer index")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<ResIndex, E> {
                u32::try_from(v)
                    .map(ResIndex)
                    .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<ResIndex, E> {
                u32::try_from(v)
                    .map(ResIndex)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<ResIndex, E> {
                v.parse()
                    .map(ResIndex)
                    .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_any(ResIndexVisitor)
    }
}
