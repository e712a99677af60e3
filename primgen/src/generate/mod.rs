//! Device-class generators.
//!
//! Each generator walks the device types declared for its class, registering
//! a [`DeviceInfo`] per cell and appending the rendered subcircuit text to
//! every format that defines a template for the class. Generators run
//! strictly in sequence against one [`GenCtx`]; their order fixes the order of
//! definitions in the output files.

pub mod custom;
pub mod diode;
pub mod mos;
pub mod res_metal;

use std::collections::BTreeMap;

use crate::builtin::BUILTIN;
use crate::error::{ErrorSource, Result};
use crate::format::{DeviceClass, OutputFormat};
use crate::registry::{DeviceInfo, NetlistMap};
use crate::templates::{render_prim, PrimCtx};

/// Text fragments accumulated for each output format.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FormatBuffers(BTreeMap<OutputFormat, Vec<String>>);

impl Default for FormatBuffers {
    fn default() -> Self {
        Self(
            OutputFormat::ALL
                .into_iter()
                .map(|fmt| (fmt, Vec::new()))
                .collect(),
        )
    }
}

impl FormatBuffers {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a definition, preceded by a blank line.
    pub fn push(&mut self, format: OutputFormat, text: impl Into<String>) {
        let buf = self.0.entry(format).or_default();
        buf.push("\n".to_string());
        buf.push(text.into());
    }

    pub fn is_empty(&self, format: OutputFormat) -> bool {
        self.0.get(&format).map_or(true, |buf| buf.is_empty())
    }

    /// Returns the full text for `format`, or [`None`] if nothing was emitted.
    pub fn contents(&self, format: OutputFormat) -> Option<String> {
        if self.is_empty(format) {
            None
        } else {
            Some(self.0[&format].concat())
        }
    }
}

/// Shared state threaded through the generators.
#[derive(Debug, Default, Clone)]
pub struct GenCtx {
    pub(crate) netlist_map: NetlistMap,
    pub(crate) buffers: FormatBuffers,
}

impl GenCtx {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn netlist_map(&self) -> &NetlistMap {
        &self.netlist_map
    }

    #[inline]
    pub fn buffers(&self) -> &FormatBuffers {
        &self.buffers
    }

    /// Registers a generated cell.
    ///
    /// Fails if the name is taken by a built-in primitive or by
    /// a previously generated cell.
    pub fn add_cell(&mut self, info: DeviceInfo) -> Result<()> {
        let existing = BUILTIN
            .find_cell(&info.cell_name)
            .or_else(|| self.netlist_map.find_cell(&info.cell_name));
        if let Some(lib_name) = existing {
            return Err(ErrorSource::DuplicateCell {
                lib_name: lib_name.clone(),
                cell_name: info.cell_name,
            }
            .into());
        }
        self.netlist_map.insert(info);
        Ok(())
    }

    /// Renders `class` for `format` if the format has a template for it.
    pub(crate) fn emit(
        &mut self,
        class: DeviceClass,
        format: OutputFormat,
        ctx: &PrimCtx<'_>,
    ) -> Result<()> {
        if let Some(template) = format.template(class) {
            let text = render_prim(template, format, ctx)?;
            self.buffers.push(format, text);
        }
        Ok(())
    }

    pub(crate) fn into_parts(self) -> (NetlistMap, FormatBuffers) {
        (self.netlist_map, self.buffers)
    }
}
