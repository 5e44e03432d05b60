//! The selection mask that picks which layers an invocation inspects.

use core::fmt;
use core::str::FromStr;

use bitflags::bitflags;

bitflags! {
    /// A set of layers, encoded as the bit values the host passes in.
    ///
    /// The bit values are part of the program's external interface and must
    /// never change.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Layers: u64 {
        /// The link layer header at `mac_offset`.
        const LINK = 1;
        /// The network layer header at `net_offset`.
        const NET = 2;
        /// The transport layer, found through the extension header chain.
        const TRANSPORT = 4;
    }
}

impl From<u64> for Layers {
    /// Bits that name no layer are dropped.
    #[inline]
    fn from(bits: u64) -> Self {
        Layers::from_bits_truncate(bits)
    }
}

impl fmt::Display for Layers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        bitflags::parser::to_writer(self, f)
    }
}

/// A layer name in a mask string was not recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseLayersError;

impl fmt::Display for ParseLayersError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected a number or a list of link, net, transport, all")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseLayersError {}

const ALIASES: &[(&str, Layers)] = &[
    ("none", Layers::empty()),
    ("link", Layers::LINK),
    ("l2", Layers::LINK),
    ("net", Layers::NET),
    ("network", Layers::NET),
    ("l3", Layers::NET),
    ("transport", Layers::TRANSPORT),
    ("l4", Layers::TRANSPORT),
    ("all", Layers::all()),
];

fn alias(name: &str) -> Option<Layers> {
    ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
        .map(|&(_, layers)| layers)
}

impl FromStr for Layers {
    type Err = ParseLayersError;

    /// Accepts a decimal mask (`"7"`), the flag text format
    /// (`"LINK | NET"`, `"0x6"`) or lowercase aliases separated by `,` or
    /// `|` (`"l2,net"`, `"all"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(bits) = s.parse::<u64>() {
            return Ok(Layers::from_bits_truncate(bits));
        }
        if let Ok(layers) = bitflags::parser::from_str::<Layers>(s) {
            return Ok(layers);
        }
        s.split([',', '|'])
            .try_fold(Layers::empty(), |acc, name| {
                alias(name.trim()).map(|layer| acc | layer)
            })
            .ok_or(ParseLayersError)
    }
}
