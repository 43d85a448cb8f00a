//! Spicewright PDK support: technology configuration and device mapping.
//!
//! A [`PdkConfig`] describes one process design kit: where its library
//! file lives, which process corners it defines, and how logical device
//! names map onto physical models. [`resolve`] applies that mapping to a
//! netlist as a pure transform, leaving its input untouched.
//!
//! ```rust
//! use spicewright_pdk::PdkConfig;
//!
//! let pdk = PdkConfig::from_yaml(r#"
//! name: demo
//! path: /opt/pdk/demo
//! lib_file: demo.lib.spice
//! corners: [tt, ff]
//! default_corner: tt
//! models:
//!   nmos_lv: {pdk_name: demo__nfet, is_subckt: true, ports: [d, g, s, b]}
//! "#).unwrap();
//! assert_eq!(pdk.resolve_model("nmos_lv").unwrap().pdk_name, "demo__nfet");
//! ```

pub mod config;
pub mod error;
pub mod resolver;

pub use config::{ModelEntry, PdkConfig};
pub use error::{PdkError, PdkResult};
pub use resolver::resolve;
