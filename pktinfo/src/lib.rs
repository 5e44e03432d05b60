#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]
#![no_std]

//! Per-packet layer introspection for restricted packet-processing hooks.
//!
//! Every header read goes through [`access`], which hands out a view only
//! when the requested range is fully inside the [`PacketWindow`]. The
//! transport layer of an IPv6 packet is located with a bounded walk over the
//! extension header chain ([`chain::find_transport_protocol`]), and the
//! [`inspect()`] entry point reports the selected layers of one packet.

#[cfg(any(feature = "std", test))]
extern crate std;

#[macro_use]
mod macros;

mod window;
pub use window::{access, ByteWindow, HeaderView, PacketWindow};

mod cursor;
pub use cursor::{HdrCursor, PktInfo};

mod error;
pub use error::{AbortReason, AccessError, ChainError};

pub mod chain;
pub mod ether;
pub mod exports;
pub mod inspect;
pub mod ipv6;
pub mod layers;
pub mod report;
pub mod udp;

pub use inspect::{inspect, show_pkt_info, Disposition, ProgramArgs};
pub use layers::Layers;
pub use report::{LogReporter, NullReporter, Report, Reporter};
