//! The device registry consumed by netlisters.

use std::collections::BTreeMap;

use arcstr::ArcStr;
use serde::{Deserialize, Serialize};

/// The library holding all generated primitives.
pub const PRIM_LIB: ArcStr = arcstr::literal!("BAG_prim");

/// The default display precision of a device property.
pub const DEFAULT_PRECISION: u32 = 3;

/// A device property: display precision and default value.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(from = "(u32, ArcStr)", into = "(u32, ArcStr)")]
pub struct PropSpec {
    pub precision: u32,
    pub default: ArcStr,
}

impl PropSpec {
    #[inline]
    pub fn new(default: impl Into<ArcStr>) -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            default: default.into(),
        }
    }

    /// A property with no default value.
    #[inline]
    pub fn empty() -> Self {
        Self::new(arcstr::literal!(""))
    }
}

impl From<(u32, ArcStr)> for PropSpec {
    fn from((precision, default): (u32, ArcStr)) -> Self {
        Self { precision, default }
    }
}

impl From<PropSpec> for (u32, ArcStr) {
    fn from(value: PropSpec) -> Self {
        (value.precision, value.default)
    }
}

/// The terminals and properties of one primitive cell.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub lib_name: ArcStr,
    pub cell_name: ArcStr,
    pub in_terms: Vec<ArcStr>,
    pub out_terms: Vec<ArcStr>,
    pub io_terms: Vec<ArcStr>,
    pub nets: Vec<ArcStr>,
    pub is_prim: bool,
    pub props: BTreeMap<ArcStr, PropSpec>,
    /// Set for devices that netlisters should skip entirely.
    #[serde(default)]
    pub ignore: bool,
}

impl DeviceInfo {
    /// Creates a primitive with only bidirectional terminals.
    pub fn prim<'a>(
        lib_name: ArcStr,
        cell_name: impl Into<ArcStr>,
        io_terms: impl IntoIterator<Item = &'a str>,
        props: impl IntoIterator<Item = (&'a str, PropSpec)>,
    ) -> Self {
        Self {
            lib_name,
            cell_name: cell_name.into(),
            in_terms: Vec::new(),
            out_terms: Vec::new(),
            io_terms: io_terms.into_iter().map(ArcStr::from).collect(),
            nets: Vec::new(),
            is_prim: true,
            props: props
                .into_iter()
                .map(|(k, v)| (ArcStr::from(k), v))
                .collect(),
            ignore: false,
        }
    }

    #[inline]
    pub fn ignored(mut self) -> Self {
        self.ignore = true;
        self
    }
}

pub type Library = BTreeMap<ArcStr, DeviceInfo>;

/// Device libraries keyed by library name.
#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetlistMap(BTreeMap<ArcStr, Library>);

impl NetlistMap {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a cell to its library, replacing any cell of the same name.
    pub fn insert(&mut self, info: DeviceInfo) -> Option<DeviceInfo> {
        self.0
            .entry(info.lib_name.clone())
            .or_default()
            .insert(info.cell_name.clone(), info)
    }

    /// Adds an empty library named `lib_name` if none exists.
    pub fn add_lib(&mut self, lib_name: ArcStr) -> &mut Library {
        self.0.entry(lib_name).or_default()
    }

    /// Merges `other` into `self`, library by library.
    ///
    /// Libraries in `other` replace libraries of the same name in `self`.
    pub fn merge(&mut self, other: NetlistMap) {
        self.0.extend(other.0);
    }

    pub fn lib(&self, lib_name: &str) -> Option<&Library> {
        self.0.get(lib_name)
    }

    pub fn cell(&self, lib_name: &str, cell_name: &str) -> Option<&DeviceInfo> {
        self.lib(lib_name)?.get(cell_name)
    }

    /// Returns the name of a library containing a cell named `cell_name`.
    pub fn find_cell(&self, cell_name: &str) -> Option<&ArcStr> {
        self.0
            .iter()
            .find(|(_, lib)| lib.contains_key(cell_name))
            .map(|(name, _)| name)
    }

    pub fn lib_names(&self) -> impl Iterator<Item = &ArcStr> {
        self.0.keys()
    }

    pub fn cells(&self) -> impl Iterator<Item = &DeviceInfo> {
        self.0.values().flat_map(|lib| lib.values())
    }

    pub fn num_cells(&self) -> usize {
        self.0.values().map(|lib| lib.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prop_serializes_as_pair() {
        let prop = PropSpec::new("1.0");
        assert_eq!(serde_json::to_string(&prop).unwrap(), r#"[3,"1.0"]"#);
        let parsed: PropSpec = serde_json::from_str(r#"[5,""]"#).unwrap();
        assert_eq!(parsed.precision, 5);
        assert_eq!(parsed.default.as_str(), "");
    }

    #[test]
    fn insert_and_lookup() {
        let mut map = NetlistMap::new();
        let info = DeviceInfo::prim(PRIM_LIB, "nmos4", ["B", "D", "G", "S"], []);
        assert!(map.insert(info.clone()).is_none());
        assert_eq!(map.insert(info).map(|i| i.cell_name), Some(arcstr::literal!("nmos4")));
        assert_eq!(map.find_cell("nmos4"), Some(&PRIM_LIB));
        assert_eq!(map.cell("BAG_prim", "nmos4").unwrap().io_terms.len(), 4);
        assert!(map.find_cell("pmos4").is_none());
        assert_eq!(map.num_cells(), 1);
    }
}
