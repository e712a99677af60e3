//! Output formats and the template registry.

use std::fmt::Display;
use std::str::FromStr;

use crate::config::ConfigError;

/// An enumeration of supported output formats.
///
/// Declaration order is the order in which per-format buffers
/// are filled and flushed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum OutputFormat {
    /// CDL structural netlist.
    Cdl,
    /// Spectre structural netlist.
    Spectre,
    /// Verilog.
    Verilog,
    /// SystemVerilog.
    SystemVerilog,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Cdl,
        OutputFormat::Spectre,
        OutputFormat::Verilog,
        OutputFormat::SystemVerilog,
    ];

    /// The integer identifier used to key result tables.
    ///
    /// These match the design output ids netlisters expect, which do not
    /// follow declaration order.
    pub fn id(&self) -> u32 {
        match self {
            Self::Cdl => 4,
            Self::Verilog => 5,
            Self::SystemVerilog => 6,
            Self::Spectre => 7,
        }
    }

    /// The key under which this format appears in a technology configuration.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cdl => "CDL",
            Self::Spectre => "SPECTRE",
            Self::Verilog => "VERILOG",
            Self::SystemVerilog => "SYSVERILOG",
        }
    }

    /// The template set and output file name for this format.
    pub fn info(&self) -> &'static FormatInfo {
        match self {
            Self::Cdl => &CDL_INFO,
            Self::Spectre => &SPECTRE_INFO,
            Self::Verilog => &VERILOG_INFO,
            Self::SystemVerilog => &SYSVERILOG_INFO,
        }
    }

    #[inline]
    pub fn file_name(&self) -> &'static str {
        self.info().file_name
    }

    /// Returns the template used to render `class` in this format,
    /// or [`None`] if this format has no text for that class.
    #[inline]
    pub fn template(&self, class: DeviceClass) -> Option<&'static str> {
        self.info().template(class)
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|fmt| fmt.name() == s)
            .ok_or_else(|| ConfigError::UnknownFormat(s.to_string()))
    }
}

/// The classes of generated primitive devices.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DeviceClass {
    Mos,
    Diode,
    /// A diode bound to a fixed instance with no forwarded parameters.
    DiodeStatic,
    ResMetal,
}

impl Display for DeviceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Mos => write!(f, "mos"),
            Self::Diode => write!(f, "diode"),
            Self::DiodeStatic => write!(f, "diode_static"),
            Self::ResMetal => write!(f, "res_metal"),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FormatInfo {
    pub file_name: &'static str,
    pub mos: Option<&'static str>,
    pub diode: Option<&'static str>,
    pub diode_static: Option<&'static str>,
    pub res_metal: Option<&'static str>,
}

impl FormatInfo {
    pub fn template(&self, class: DeviceClass) -> Option<&'static str> {
        match class {
            DeviceClass::Mos => self.mos,
            DeviceClass::Diode => self.diode,
            DeviceClass::DiodeStatic => self.diode_static,
            DeviceClass::ResMetal => self.res_metal,
        }
    }
}

pub const CDL_INFO: FormatInfo = FormatInfo {
    file_name: "bag_prim.cdl",
    mos: Some("mos.cdl"),
    diode: Some("diode.cdl"),
    diode_static: Some("diode_static.cdl"),
    res_metal: Some("res_metal.cdl"),
};

pub const SPECTRE_INFO: FormatInfo = FormatInfo {
    file_name: "bag_prim.scs",
    mos: Some("mos.scs"),
    diode: Some("diode.scs"),
    diode_static: Some("diode_static.scs"),
    res_metal: Some("res_metal.scs"),
};

// HDL primitives are empty modules; only transistors get one.
pub const VERILOG_INFO: FormatInfo = FormatInfo {
    file_name: "bag_prim.v",
    mos: Some("mos.v"),
    diode: None,
    diode_static: None,
    res_metal: None,
};

pub const SYSVERILOG_INFO: FormatInfo = FormatInfo {
    file_name: "bag_prim.sv",
    mos: Some("mos.v"),
    diode: None,
    diode_static: None,
    res_metal: None,
};
