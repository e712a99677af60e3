use std::path::{Path, PathBuf};

use primgen::config::TechConfig;
use primgen::io::create_dir_all;
use primgen::NetlistSetup;

/// Generates the primitive files for `config` and writes the netlist setup
/// document to `output_dir/setup_name`.
///
/// Returns the path of the setup document along with the setup itself.
pub fn run(
    config: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    setup_name: &str,
) -> primgen::error::Result<(PathBuf, NetlistSetup)> {
    let output_dir = output_dir.as_ref();
    create_dir_all(output_dir)?;
    let config = TechConfig::from_file(config)?;
    let setup = primgen::generate(&config, output_dir)?;
    let setup_path = output_dir.join(setup_name);
    setup.write_yaml(&setup_path)?;
    Ok((setup_path, setup))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempdir::TempDir;

    use super::*;

    fn tech_yaml() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../primgen/data/tests/tech.yaml")
    }

    #[test]
    fn writes_setup_document() {
        let dir = TempDir::new("netlist_setup").unwrap();
        let out = dir.path().join("nested/out");
        let (path, setup) = run(tech_yaml(), &out, primgen::NETLIST_SETUP_FILE).unwrap();

        assert_eq!(path, out.join("netlist_setup.yaml"));
        assert!(out.join("bag_prim.cdl").exists());
        assert!(out.join("bag_prim.scs").exists());

        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: NetlistSetup = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed, setup);
    }

    #[test]
    fn missing_config_is_an_error() {
        let dir = TempDir::new("netlist_setup").unwrap();
        let missing = dir.path().join("missing.yaml");
        assert!(run(&missing, dir.path(), "setup.yaml").is_err());
        assert!(!dir.path().join("setup.yaml").exists());
    }
}
