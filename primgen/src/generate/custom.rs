//! Cells with fixed, technology-independent text.

use crate::format::OutputFormat;
use crate::generate::GenCtx;
use crate::log;
use crate::templates::SCS_IDEAL_BALUN;

/// A cell whose definition is the same for every technology.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CustomCell {
    pub name: &'static str,
    pub format: OutputFormat,
    pub text: &'static str,
}

pub const CUSTOM_CELLS: [CustomCell; 1] = [CustomCell {
    name: "ideal_balun",
    format: OutputFormat::Spectre,
    text: SCS_IDEAL_BALUN,
}];

pub fn populate_custom_cells(ctx: &mut GenCtx) {
    for cell in CUSTOM_CELLS.iter() {
        ctx.buffers.push(cell.format, cell.text);
        log::debug!("added fixed cell {} to {} output", cell.name, cell.format);
    }
}
