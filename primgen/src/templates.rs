use lazy_static::lazy_static;
use serde::Serialize;
use tera::{Context, Tera};

use crate::config::Param;
use crate::error::{with_err_context, ErrorContext, Result};
use crate::format::OutputFormat;

/// Fixed Spectre text for the ideal balun transformer.
pub const SCS_IDEAL_BALUN: &str = include_str!("../templates/ideal_balun.scs");

lazy_static! {
    pub(crate) static ref TEMPLATES: Tera = {
        let mut tera = Tera::default();
        // Template names end in netlist extensions; none of them may be escaped.
        tera.autoescape_on(Vec::new());
        if let Err(e) = tera.add_raw_templates(vec![
            ("mos.cdl", include_str!("../templates/mos.cdl")),
            ("mos.scs", include_str!("../templates/mos.scs")),
            ("mos.v", include_str!("../templates/mos.v")),
            ("diode.cdl", include_str!("../templates/diode.cdl")),
            ("diode.scs", include_str!("../templates/diode.scs")),
            ("diode_static.cdl", include_str!("../templates/diode_static.cdl")),
            ("diode_static.scs", include_str!("../templates/diode_static.scs")),
            ("res_metal.cdl", include_str!("../templates/res_metal.cdl")),
            ("res_metal.scs", include_str!("../templates/res_metal.scs")),
        ]) {
            panic!("Encountered errors while parsing Tera templates: {e}");
        }
        tera
    };
}

/// Values substituted into a primitive subcircuit template.
#[derive(Serialize)]
pub(crate) struct PrimCtx<'a> {
    pub(crate) cell_name: &'a str,
    pub(crate) model_name: &'a str,
    /// Instance terminals bound to the cell's MINUS and PLUS ports, in order.
    pub(crate) ports: Option<&'a [String; 2]>,
    pub(crate) params: &'a [Param],
}

pub(crate) fn render_prim(
    template: &'static str,
    format: OutputFormat,
    ctx: &PrimCtx<'_>,
) -> Result<String> {
    with_err_context(
        Context::from_serialize(ctx).and_then(|ctx| TEMPLATES.render(template, &ctx)),
        || ErrorContext::Render { template, format },
    )
}
