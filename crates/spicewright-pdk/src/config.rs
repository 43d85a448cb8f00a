//! PDK configuration: the logical-to-physical device mapping.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{PdkError, PdkResult};

/// How one logical device name maps to a PDK model.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModelEntry {
    /// Physical PDK subcircuit or model name.
    pub pdk_name: String,
    /// True → emit as a wrapped subcircuit (X element); false → rename the
    /// primitive's model card in place.
    #[serde(default = "default_true")]
    pub is_subckt: bool,
    /// Explicit physical port order. None → lowercase canonical order.
    #[serde(default)]
    pub ports: Option<Vec<String>>,
}

fn default_true() -> bool {
    true
}

/// Configuration for one process design kit.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PdkConfig {
    /// PDK name (e.g. "sky130A").
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Base path of the PDK installation.
    pub path: PathBuf,
    /// Library file path, relative to `path`.
    pub lib_file: PathBuf,
    /// Valid corner section names.
    pub corners: Vec<String>,
    /// Corner used when the caller does not override it. Must be a member
    /// of `corners`; enforced at construction.
    pub default_corner: String,
    /// Logical device name → physical mapping.
    #[serde(default)]
    pub models: IndexMap<String, ModelEntry>,
}

impl PdkConfig {
    /// Parse a PDK configuration from YAML text and validate it.
    pub fn from_yaml(text: &str) -> PdkResult<Self> {
        let config: PdkConfig = serde_yaml_ng::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a PDK configuration file.
    pub fn load(path: impl AsRef<Path>) -> PdkResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| PdkError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text)
    }

    fn validate(&self) -> PdkResult<()> {
        if !self.corners.contains(&self.default_corner) {
            return Err(PdkError::InvalidDefaultCorner {
                corner: self.default_corner.clone(),
                corners: self.corners.clone(),
            });
        }
        Ok(())
    }

    /// The mapping for a logical name, or None if the PDK does not know it.
    pub fn resolve_model(&self, logical_name: &str) -> Option<&ModelEntry> {
        self.models.get(logical_name)
    }

    /// Absolute path to the PDK library file.
    pub fn lib_path(&self) -> PathBuf {
        self.path.join(&self.lib_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SKY130: &str = r#"
name: sky130A
description: SkyWater 130nm open PDK
path: /opt/pdk/sky130A
lib_file: libs.tech/ngspice/sky130.lib.spice
corners: [tt, ff, ss, sf, fs]
default_corner: tt
models:
  nmos_1v8:
    pdk_name: sky130_fd_pr__nfet_01v8
    is_subckt: true
    ports: [d, g, s, b]
  pmos_1v8:
    pdk_name: sky130_fd_pr__pfet_01v8
    is_subckt: true
    ports: [d, g, s, b]
  res_poly:
    pdk_name: sky130_fd_pr__res_high_po
    is_subckt: false
"#;

    #[test]
    fn test_load_valid_config() {
        let pdk = PdkConfig::from_yaml(SKY130).unwrap();
        assert_eq!(pdk.name, "sky130A");
        assert!(pdk.corners.contains(&"tt".to_string()));
        assert_eq!(pdk.default_corner, "tt");
        assert!(pdk.models.contains_key("nmos_1v8"));
    }

    #[test]
    fn test_invalid_default_corner() {
        let yaml = r#"
name: bad
path: /tmp
lib_file: x.spice
corners: [tt, ff]
default_corner: gg
models: {}
"#;
        assert!(matches!(
            PdkConfig::from_yaml(yaml).unwrap_err(),
            PdkError::InvalidDefaultCorner { corner, .. } if corner == "gg"
        ));
    }

    #[test]
    fn test_resolve_model() {
        let pdk = PdkConfig::from_yaml(SKY130).unwrap();
        let entry = pdk.resolve_model("nmos_1v8").unwrap();
        assert_eq!(entry.pdk_name, "sky130_fd_pr__nfet_01v8");
        assert!(entry.is_subckt);
        assert_eq!(
            entry.ports.as_deref(),
            Some(["d", "g", "s", "b"].map(String::from).as_slice())
        );
        assert!(pdk.resolve_model("nonexistent").is_none());
    }

    #[test]
    fn test_is_subckt_defaults_true() {
        let yaml = r#"
name: t
path: /tmp
lib_file: x.spice
corners: [tt]
default_corner: tt
models:
  nmos_x: {pdk_name: REAL}
"#;
        let pdk = PdkConfig::from_yaml(yaml).unwrap();
        assert!(pdk.resolve_model("nmos_x").unwrap().is_subckt);
    }

    #[test]
    fn test_lib_path_joined() {
        let pdk = PdkConfig::from_yaml(SKY130).unwrap();
        assert!(
            pdk.lib_path()
                .to_string_lossy()
                .ends_with("sky130.lib.spice")
        );
        assert!(pdk.lib_path().starts_with("/opt/pdk/sky130A"));
    }
}
