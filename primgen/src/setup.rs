//! Assembly of the netlist setup.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::builtin::BUILTIN;
use crate::config::{ConfigResult, FormatMap, HeaderConfig, TechConfig};
use crate::error::{with_err_context, ErrorContext, Result};
use crate::format::OutputFormat;
use crate::generate::custom::populate_custom_cells;
use crate::generate::diode::populate_diode;
use crate::generate::mos::populate_mos;
use crate::generate::res_metal::populate_res_metal;
use crate::generate::GenCtx;
use crate::io::{create_dir_all, remove_file_if_exists, write_file};
use crate::log::{self, Log};
use crate::registry::{NetlistMap, PRIM_LIB};

/// The default name of the serialized [`NetlistSetup`].
pub const NETLIST_SETUP_FILE: &str = "netlist_setup.yaml";

/// Everything a netlister needs to resolve primitive instances.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct NetlistSetup {
    /// Generated primitive files keyed by format id.
    ///
    /// Formats with no generated text map to an empty string.
    pub prim_files: BTreeMap<u32, String>,
    /// Header includes keyed by format id.
    pub inc_list: BTreeMap<u32, Vec<String>>,
    pub netlist_map: NetlistMap,
}

impl NetlistSetup {
    pub fn prim_file(&self, format: OutputFormat) -> Option<&str> {
        self.prim_files.get(&format.id()).map(|s| s.as_str())
    }

    pub fn includes(&self, format: OutputFormat) -> Option<&[String]> {
        self.inc_list.get(&format.id()).map(|v| v.as_slice())
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn write_yaml(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let data = with_err_context(self.to_yaml_string(), || {
            ErrorContext::WriteFile(path.to_path_buf())
        })?;
        write_file(path, data)
    }
}

impl Log for NetlistSetup {
    fn log(&self) {
        for format in OutputFormat::ALL {
            match self.prim_file(format) {
                Some(path) if !path.is_empty() => {
                    log::info!("{format} primitives: {path}")
                }
                _ => log::info!("{format} primitives: none"),
            }
        }
        log::info!(
            "netlist map: {} cells in {} libraries",
            self.netlist_map.num_cells(),
            self.netlist_map.lib_names().count()
        );
    }
}

/// Copies the configured header includes of every format.
pub fn populate_header(config: &FormatMap<HeaderConfig>) -> ConfigResult<BTreeMap<u32, Vec<String>>> {
    OutputFormat::ALL
        .into_iter()
        .map(|format| {
            let header = config.get("header", format)?;
            Ok((format.id(), header.includes.clone()))
        })
        .collect()
}

/// Generates the primitive files for every format into `output_dir`.
///
/// Nothing is written until every device has been rendered, so a
/// configuration or template error leaves `output_dir` untouched.
pub fn generate(config: &TechConfig, output_dir: impl AsRef<Path>) -> Result<NetlistSetup> {
    let output_dir = output_dir.as_ref();
    config.validate()?;

    let inc_list = populate_header(&config.header)?;
    let mut ctx = GenCtx::new();
    populate_mos(&config.mos, &mut ctx)?;
    populate_diode(&config.diode, &mut ctx)?;
    populate_res_metal(&config.res_metal, &mut ctx)?;
    populate_custom_cells(&mut ctx);
    let (mut generated, buffers) = ctx.into_parts();
    generated.add_lib(PRIM_LIB);

    create_dir_all(output_dir)?;
    let mut prim_files = BTreeMap::new();
    for format in OutputFormat::ALL {
        let file = match buffers.contents(format) {
            Some(text) => {
                let path = output_dir.join(format.file_name());
                write_file(&path, text)?;
                log::info!("wrote {format} primitives to {path:?}");
                path.display().to_string()
            }
            None => {
                log::warn!("no {format} primitives generated");
                let stale = output_dir.join(format.file_name());
                if remove_file_if_exists(&stale)? {
                    log::info!("removed stale {format} primitives {stale:?}");
                }
                String::new()
            }
        };
        prim_files.insert(format.id(), file);
    }

    let mut netlist_map = BUILTIN.clone();
    netlist_map.merge(generated);

    let setup = NetlistSetup {
        prim_files,
        inc_list,
        netlist_map,
    };
    setup.log();
    Ok(setup)
}
