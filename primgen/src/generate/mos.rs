//! Four-terminal MOS transistors.

use arcstr::ArcStr;

use crate::config::{DeviceType, MosConfig};
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
        ["B", "D", "G", "S"],
        [
            ("l", PropSpec::empty()),
            ("w", PropSpec::empty()),
            ("nf", PropSpec::empty()),
        ],
    )
}

pub fn populate_mos(config: &MosConfig, ctx: &mut GenCtx) -> Result<()> {
    for dev in config.types.iter() {
        with_err_context(gen_cell(config, dev, ctx), || ErrorContext::GenCell {
            class: DeviceClass::Mos,
            cell_name: dev.cell_name.clone(),
        })?;
        log::debug!("generated mos cell {} ({})", dev.cell_name, dev.model_name);
    }
    Ok(())
}

fn gen_cell(config: &MosConfig, dev: &DeviceType, ctx: &mut GenCtx) -> Result<()> {
    ctx.add_cell(device_info(dev.cell_name.clone()))?;
    for format in OutputFormat::ALL {
        let params = config.params.get("mos", format)?;
        ctx.emit(
            DeviceClass::Mos,
            format,
            &PrimCtx {
                cell_name: &dev.cell_name,
                model_name: &dev.model_name,
                ports: None,
                params,
            },
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FormatMap, Param};

    fn config(params: impl Fn(OutputFormat) -> Vec<Param>) -> MosConfig {
        MosConfig {
            types: vec![DeviceType::new("nmos4", "nch")],
            params: OutputFormat::ALL
                .into_iter()
                .map(|fmt| (fmt, params(fmt)))
                .collect::<FormatMap<_>>(),
        }
    }

    #[test]
    fn mos_registry_entry() {
        let info = device_info("nmos4_svt");
        assert_eq!(info.lib_name, PRIM_LIB);
        assert_eq!(info.cell_name.as_str(), "nmos4_svt");
        let terms: Vec<_> = info.io_terms.iter().map(|t| t.as_str()).collect();
        assert_eq!(terms, ["B", "D", "G", "S"]);
        assert_eq!(info.props.len(), 3);
        assert!(info.is_prim && !info.ignore);
    }

    #[test]
    fn mos_renders_in_every_format() {
        let config = config(|_| vec![Param::new("l", "1e-6"), Param::new("w", "2e-6")]);
        let mut ctx = GenCtx::new();
        populate_mos(&config, &mut ctx).unwrap();

        assert_eq!(
            ctx.buffers().contents(OutputFormat::Cdl).unwrap(),
            "\n.SUBCKT nmos4 B D G S\n*.PININFO B:B D:B G:B S:B\nMM0 D G S B nch l=1e-6 w=2e-6\n.ENDS\n"
        );
        assert_eq!(
            ctx.buffers().contents(OutputFormat::Spectre).unwrap(),
            "\nsubckt nmos4 B D G S\nparameters l w nf\nMM0 D G S B nch l=1e-6 w=2e-6\nends nmos4\n"
        );
        let verilog = ctx.buffers().contents(OutputFormat::Verilog).unwrap();
        assert!(verilog.starts_with("\nmodule nmos4(\n"));
        assert!(!verilog.contains("nch"));
        assert_eq!(
            ctx.buffers().contents(OutputFormat::SystemVerilog),
            Some(verilog)
        );
        assert!(ctx.netlist_map().cell("BAG_prim", "nmos4").is_some());
    }

    #[test]
    fn formats_keep_their_own_params() {
        let config = config(|fmt| match fmt {
            OutputFormat::Cdl => vec![Param::new("l", "l")],
            _ => vec![Param::new("nf", "nf")],
        });
        let mut ctx = GenCtx::new();
        populate_mos(&config, &mut ctx).unwrap();

        let cdl = ctx.buffers().contents(OutputFormat::Cdl).unwrap();
        let scs = ctx.buffers().contents(OutputFormat::Spectre).unwrap();
        assert!(cdl.contains("nch l=l\n") && !cdl.contains("nf=nf"));
        assert!(scs.contains("nch nf=nf\n") && !scs.contains("l=l"));
    }

    #[test]
    fn missing_format_params_fail() {
        let mut config = config(|_| Vec::new());
        config.params = [(OutputFormat::Cdl, Vec::new())].into_iter().collect();
        let mut ctx = GenCtx::new();
        let err = populate_mos(&config, &mut ctx).unwrap_err();
        assert_eq!(
            err.context(),
            &[ErrorContext::GenCell {
                class: DeviceClass::Mos,
                cell_name: arcstr::literal!("nmos4"),
            }]
        );
        assert!(err.to_string().contains("no `SPECTRE` entry in section `mos`"));
    }
}
