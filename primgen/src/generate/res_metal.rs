//! Metal resistors.
//!
//! When `write_res_val` is set, each resistor also forwards its resistance as
//! `r=<sheet resistance>*l/w`, using the sheet resistance of its layer.

use arcstr::ArcStr;

use crate::config::{DeviceType, Param, ResMetalConfig};
use crate::error::{with_err_context, ErrorContext, Result};
use crate::format::{DeviceClass, OutputFormat};
use crate::generate::GenCtx;
use crate::log;
use crate::registry::{DeviceInfo, PropSpec, PRIM_LIB};
use crate::templates::PrimCtx;

pub fn device_info(cell_name: impl Into<ArcStr>) -> DeviceInfo {
    DeviceInfo::prim(
        PRIM_LIB,
        cell_name,
        ["MINUS", "PLUS"],
        [("l", PropSpec::empty()), ("w", PropSpec::empty())],
    )
}

pub fn populate_res_metal(config: &ResMetalConfig, ctx: &mut GenCtx) -> Result<()> {
    for (idx, dev) in config.types.iter().enumerate() {
        with_err_context(gen_cell(config, idx, dev, ctx), || ErrorContext::GenCell {
            class: DeviceClass::ResMetal,
            cell_name: dev.cell_name.clone(),
        })?;
        log::debug!("generated res_metal cell {} ({})", dev.cell_name, dev.model_name);
    }
    Ok(())
}

fn gen_cell(
    config: &ResMetalConfig,
    idx: usize,
    dev: &DeviceType,
    ctx: &mut GenCtx,
) -> Result<()> {
    ctx.add_cell(device_info(dev.cell_name.clone()))?;
    let res_param = if config.write_res_val {
        let sheet_res = config.sheet_res(idx, &dev.cell_name)?;
        Some(Param::new("r", format!("{sheet_res}*l/w")))
    } else {
        None
    };

    for format in OutputFormat::ALL {
        // The configured list is shared by every resistor; extend a copy.
        let mut params = config.params.get("res_metal", format)?.clone();
        params.extend(res_param.clone());
        ctx.emit(
            DeviceClass::ResMetal,
            format,
            &PrimCtx {
                cell_name: &dev.cell_name,
                model_name: &dev.model_name,
                ports: None,
                params: &params,
            },
        )?;
    }
    Ok(())
}
