#![allow(dead_code)]

use std::path::PathBuf;

use primgen::config::TechConfig;

pub const DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/tests");

pub fn data_path(name: &str) -> PathBuf {
    PathBuf::from(DATA_DIR).join(name)
}

pub fn tech_config() -> TechConfig {
    TechConfig::from_file(data_path("tech.yaml")).expect("failed to load test configuration")
}

/// A configuration that declares no devices in any class.
pub fn empty_config() -> TechConfig {
    TechConfig::from_yaml_str(
        r#"
header:
  CDL: {includes: []}
  SPECTRE: {includes: []}
  VERILOG: {includes: []}
  SYSVERILOG: {includes: []}
mos: {types: [], CDL: [], SPECTRE: [], VERILOG: [], SYSVERILOG: []}
diode: {types: [], static: true, CDL: [], SPECTRE: [], VERILOG: [], SYSVERILOG: []}
res_metal: {types: [], CDL: [], SPECTRE: [], VERILOG: [], SYSVERILOG: []}
"#,
    )
    .expect("failed to parse empty configuration")
}
