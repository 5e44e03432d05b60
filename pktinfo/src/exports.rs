//! Names the program and its constants for an external loader.
//!
//! The loader reads these tables to register the program and to let
//! configuration refer to selection bits by name.

use crate::Layers;

/// Describes a program entry point and its host-supplied arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramDescriptor {
    /// Registered program name.
    pub name: &'static str,
    /// Argument names in the order the host passes them.
    pub args: &'static [&'static str],
}

/// A named constant exported to configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportedConst {
    /// Name used by configuration.
    pub name: &'static str,
    /// Its value.
    pub value: u64,
}

/// The layer inspection program.
pub const PROGRAM: ProgramDescriptor = ProgramDescriptor {
    name: "show_pkt_info",
    args: &["select_layers", "user_info"],
};

/// The selection mask bits.
pub const EXPORTED_CONSTS: &[ExportedConst] = &[
    ExportedConst {
        name: "LAYER_2",
        value: Layers::LINK.bits(),
    },
    ExportedConst {
        name: "NET_LAYER",
        value: Layers::NET.bits(),
    },
    ExportedConst {
        name: "TRANSP_LAYER",
        value: Layers::TRANSPORT.bits(),
    },
];

/// Look up an exported constant by name.
pub fn lookup_const(name: &str) -> Option<u64> {
    EXPORTED_CONSTS
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.value)
}
