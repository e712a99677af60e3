//! Built-in primitives shared by every technology.

use arcstr::ArcStr;
use lazy_static::lazy_static;

use crate::registry::{DeviceInfo, NetlistMap, PropSpec};

pub const BASIC_LIB: ArcStr = arcstr::literal!("basic");
pub const ANALOG_LIB: ArcStr = arcstr::literal!("analogLib");

const TWO_TERM: [&str; 2] = ["PLUS", "MINUS"];
const FOUR_TERM: [&str; 4] = ["PLUS", "MINUS", "NC+", "NC-"];

lazy_static! {
    /// The `basic` and `analogLib` libraries.
    pub static ref BUILTIN: NetlistMap = {
        let mut map = NetlistMap::new();
        for info in basic_cells().into_iter().chain(analog_cells()) {
            map.insert(info);
        }
        map
    };
}

fn empty(name: &str) -> (&str, PropSpec) {
    (name, PropSpec::empty())
}

fn default(name: &'static str, value: &'static str) -> (&'static str, PropSpec) {
    (name, PropSpec::new(value))
}

fn basic_cells() -> Vec<DeviceInfo> {
    vec![
        DeviceInfo::prim(BASIC_LIB, "cds_thru", ["src", "dst"], []),
        DeviceInfo::prim(BASIC_LIB, "noConn", ["noConn"], []).ignored(),
    ]
}

fn analog_cells() -> Vec<DeviceInfo> {
    vec![
        DeviceInfo::prim(
            ANALOG_LIB,
            "cap",
            TWO_TERM,
            [empty("c"), empty("l"), empty("m"), empty("w")],
        ),
        DeviceInfo::prim(
            ANALOG_LIB,
            "cccs",
            TWO_TERM,
            [
                default("fgain", "1.0"),
                empty("maxm"),
                empty("minm"),
                empty("vref"),
            ],
        ),
        DeviceInfo::prim(
            ANALOG_LIB,
            "ccvs",
            TWO_TERM,
            [
                default("hgain", "1.0"),
                empty("maxm"),
                empty("minm"),
                empty("vref"),
            ],
        ),
        DeviceInfo::prim(ANALOG_LIB, "dcblock", TWO_TERM, [empty("c")]),
        DeviceInfo::prim(ANALOG_LIB, "dcfeed", TWO_TERM, [empty("l")]),
        DeviceInfo::prim(
            ANALOG_LIB,
            "idc",
            TWO_TERM,
            [
                empty("acm"),
                empty("acp"),
                empty("idc"),
                empty("pacm"),
                empty("pacp"),
                default("srcType", "dc"),
                empty("xfm"),
            ],
        ),
        DeviceInfo::prim(ANALOG_LIB, "ideal_balun", ["d", "c", "p", "n"], []),
        DeviceInfo::prim(
            ANALOG_LIB,
            "ind",
            TWO_TERM,
            [empty("l"), empty("m"), empty("r")],
        ),
        DeviceInfo::prim(ANALOG_LIB, "iprobe", TWO_TERM, []),
        DeviceInfo::prim(
            ANALOG_LIB,
            "ipulse",
            TWO_TERM,
            [
                empty("i1"),
                empty("i2"),
                empty("idc"),
                empty("per"),
                empty("pw"),
                default("srcType", "pulse"),
                empty("td"),
            ],
        ),
        DeviceInfo::prim(
            ANALOG_LIB,
            "isin",
            TWO_TERM,
            [
                empty("freq"),
                empty("ia"),
                empty("idc"),
                default("srcType", "sine"),
            ],
        ),
        DeviceInfo::prim(ANALOG_LIB, "gnd", ["gnd!"], []).ignored(),
        DeviceInfo::prim(
            ANALOG_LIB,
            "port",
            TWO_TERM,
            [empty("num"), empty("r"), default("srcType", "sine")],
        ),
        DeviceInfo::prim(
            ANALOG_LIB,
            "res",
            TWO_TERM,
            [empty("l"), empty("m"), empty("r"), empty("w")],
        ),
        DeviceInfo::prim(
            ANALOG_LIB,
            "switch",
            ["N+", "N-", "NC+", "NC-"],
            [empty("rc"), empty("ro"), empty("vt1"), empty("vt2")],
        ),
        DeviceInfo::prim(
            ANALOG_LIB,
            "vccs",
            FOUR_TERM,
            [default("ggain", "1.0"), empty("maxm"), empty("minm")],
        ),
        DeviceInfo::prim(
            ANALOG_LIB,
            "vcvs",
            FOUR_TERM,
            [default("egain", "1.0"), empty("maxm"), empty("minm")],
        ),
        DeviceInfo::prim(
            ANALOG_LIB,
            "vdc",
            TWO_TERM,
            [
                empty("acm"),
                empty("acp"),
                empty("pacm"),
                empty("pacp"),
                default("srcType", "dc"),
                empty("vdc"),
                empty("xfm"),
            ],
        ),
        DeviceInfo::prim(
            ANALOG_LIB,
            "vpulse",
            TWO_TERM,
            [
                empty("per"),
                empty("pw"),
                default("srcType", "pulse"),
                empty("td"),
                empty("v1"),
                empty("v2"),
                empty("vdc"),
            ],
        ),
        DeviceInfo::prim(
            ANALOG_LIB,
            "vpwlf",
            TWO_TERM,
            [empty("fileName"), default("srcType", "pwl")],
        ),
        DeviceInfo::prim(
            ANALOG_LIB,
            "vsin",
            TWO_TERM,
            [
                empty("freq"),
                default("srcType", "sine"),
                empty("va"),
                empty("vdc"),
            ],
        ),
    ]
}
