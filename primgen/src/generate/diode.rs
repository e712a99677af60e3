//! Two-terminal diodes.

use arcstr::ArcStr;

use crate::config::{DeviceType, DiodeConfig};
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

pub fn populate_diode(config: &DiodeConfig, ctx: &mut GenCtx) -> Result<()> {
    let class = if config.is_static {
        DeviceClass::DiodeStatic
    } else {
        DeviceClass::Diode
    };

    for dev in config.types.iter() {
        with_err_context(gen_cell(config, class, dev, ctx), || {
            ErrorContext::GenCell {
                class,
                cell_name: dev.cell_name.clone(),
            }
        })?;
        log::debug!("generated {} cell {} ({})", class, dev.cell_name, dev.model_name);
    }
    Ok(())
}

fn gen_cell(
    config: &DiodeConfig,
    class: DeviceClass,
    dev: &DeviceType,
    ctx: &mut GenCtx,
) -> Result<()> {
    ctx.add_cell(device_info(dev.cell_name.clone()))?;
    let ports = config.port_order(&dev.cell_name)?;
    for format in OutputFormat::ALL {
        let params = config.params.get("diode", format)?;
        ctx.emit(
            class,
            format,
            &PrimCtx {
                cell_name: &dev.cell_name,
                model_name: &dev.model_name,
                ports: Some(ports),
                params,
            },
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::config::{ConfigError, Param};
    use crate::error::ErrorSource;

    fn config(is_static: bool) -> DiodeConfig {
        DiodeConfig {
            types: vec![DeviceType::new("ndio", "dn"), DeviceType::new("pdio", "dp")],
            is_static,
            port_order: BTreeMap::from([
                ("ndio".to_string(), ["PLUS".to_string(), "MINUS".to_string()]),
                ("pdio".to_string(), ["MINUS".to_string(), "PLUS".to_string()]),
            ]),
            params: OutputFormat::ALL
                .into_iter()
                .map(|fmt| (fmt, vec![Param::new("area", "1e-12"), Param::new("pj", "4e-6")]))
                .collect(),
        }
    }

    #[test]
    fn parameterized_diode_forwards_params() {
        let mut ctx = GenCtx::new();
        populate_diode(&config(false), &mut ctx).unwrap();

        let cdl = ctx.buffers().contents(OutputFormat::Cdl).unwrap();
        assert_eq!(
            cdl,
            concat!(
                "\n.SUBCKT ndio MINUS PLUS\n*.PININFO MINUS:B PLUS:B\nXD0 PLUS MINUS dn area=1e-12 pj=4e-6\n.ENDS\n",
                "\n.SUBCKT pdio MINUS PLUS\n*.PININFO MINUS:B PLUS:B\nXD0 MINUS PLUS dp area=1e-12 pj=4e-6\n.ENDS\n",
            )
        );
        let scs = ctx.buffers().contents(OutputFormat::Spectre).unwrap();
        assert!(scs.contains("XD0 PLUS MINUS dn area=1e-12 pj=4e-6\nends ndio\n"));
        assert!(ctx.buffers().is_empty(OutputFormat::Verilog));
        assert!(ctx.buffers().is_empty(OutputFormat::SystemVerilog));
        assert_eq!(ctx.netlist_map().lib("BAG_prim").unwrap().len(), 2);
    }

    #[test]
    fn static_diode_ignores_params() {
        let mut ctx = GenCtx::new();
        populate_diode(&config(true), &mut ctx).unwrap();

        for format in [OutputFormat::Cdl, OutputFormat::Spectre] {
            let text = ctx.buffers().contents(format).unwrap();
            assert!(!text.contains("area="));
            assert!(!text.contains("pj="));
            assert!(text.contains("XD0 MINUS PLUS dp\n"));
        }
    }

    #[test]
    fn missing_port_order_is_a_config_error() {
        let mut config = config(false);
        config.port_order.remove("pdio");
        let mut ctx = GenCtx::new();
        let err = populate_diode(&config, &mut ctx).unwrap_err();
        assert!(matches!(
            err.source(),
            ErrorSource::Config(ConfigError::MissingPortOrder(cell)) if cell.as_str() == "pdio"
        ));
    }
}
