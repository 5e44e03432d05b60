//! What an invocation found, and where it gets written.

use core::fmt;

use crate::ether::EtherAddr;
use crate::ipv6::{IpProtocol, Ipv6Addr};
use crate::{AbortReason, ChainError};

/// Link layer addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkInfo {
    /// Destination address.
    pub dst: EtherAddr,
    /// Source address.
    pub src: EtherAddr,
}

/// Network layer addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetInfo {
    /// Source address.
    pub src: Ipv6Addr,
    /// Destination address.
    pub dst: Ipv6Addr,
}

/// The transport layer as far as it was interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportInfo {
    /// UDP ports.
    Udp {
        /// Source port.
        src_port: u16,
        /// Destination port.
        dst_port: u16,
    },
    /// A TCP header was found; its fields are not extracted.
    Tcp,
    /// Some other payload protocol.
    Other(IpProtocol),
    /// The chain ended without a transport header.
    NoTransport(IpProtocol),
    /// The chain continued with an extension the walk cannot size.
    Unsupported(IpProtocol),
}

impl TransportInfo {
    /// Whether a transport header was located.
    #[inline]
    pub fn is_resolved(&self) -> bool {
        !matches!(
            self,
            TransportInfo::NoTransport(_) | TransportInfo::Unsupported(_)
        )
    }
}

/// Everything a completed invocation extracted.
///
/// Layers that were not selected are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// Link layer, if selected.
    pub link: Option<LinkInfo>,
    /// Network layer, if selected.
    pub net: Option<NetInfo>,
    /// Transport layer, if selected.
    pub transport: Option<TransportInfo>,
    /// The caller's opaque value, echoed unchanged.
    pub user_info: u64,
}

impl Report {
    /// An empty report carrying `user_info`.
    #[inline]
    pub fn new(user_info: u64) -> Self {
        Self {
            link: None,
            net: None,
            transport: None,
            user_info,
        }
    }

    /// Write one line per extracted fact.
    pub fn emit<R: Reporter + ?Sized>(&self, out: &mut R) {
        if let Some(link) = &self.link {
            out.line(format_args!("Layer 2 dst : {:x}", link.dst.to_u64()));
            out.line(format_args!("Layer 2 src : {:x}", link.src.to_u64()));
        }

        if let Some(net) = &self.net {
            let (hi, lo) = split_addr(&net.src);
            out.line(format_args!("Net Layer src : {:x} {:x}", hi, lo));
            let (hi, lo) = split_addr(&net.dst);
            out.line(format_args!("Net Layer dst : {:x} {:x}", hi, lo));
        }

        match self.transport {
            Some(TransportInfo::Udp { src_port, dst_port }) => {
                out.line(format_args!("UDP src: {}", src_port));
                out.line(format_args!("UDP dst: {}", dst_port));
            }
            Some(TransportInfo::Tcp) => out.line(format_args!("Transport: TCP")),
            Some(TransportInfo::Other(proto)) => out.line(format_args!("Transport: {}", proto)),
            Some(TransportInfo::NoTransport(proto)) => {
                out.line(format_args!("No Transport Info; next header: {}", proto))
            }
            Some(TransportInfo::Unsupported(proto)) => out.line(format_args!(
                "No Transport Info; unsupported extension: {}",
                proto
            )),
            None => {}
        }

        out.line(format_args!("User info : {}", self.user_info));
    }
}

fn split_addr(addr: &Ipv6Addr) -> (u64, u64) {
    let bits = u128::from(*addr);
    ((bits >> 64) as u64, bits as u64)
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FmtReporter { f, res: Ok(()) };
        self.emit(&mut w);
        w.res
    }
}

struct FmtReporter<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    res: fmt::Result,
}

impl Reporter for FmtReporter<'_, '_> {
    fn line(&mut self, args: fmt::Arguments<'_>) {
        if self.res.is_ok() {
            self.res = self.f.write_fmt(args);
        }
        if self.res.is_ok() {
            self.res = self.f.write_str("\n");
        }
    }
}

/// The diagnostic sink of an invocation.
///
/// Nothing written here feeds back into packet processing.
pub trait Reporter {
    /// One diagnostic line.
    fn line(&mut self, args: fmt::Arguments<'_>);

    /// A finished invocation.
    fn completed(&mut self, report: &Report) {
        report.emit(self);
    }

    /// A malformed extension header chain, reported before the drop.
    fn unrecoverable(&mut self, err: &ChainError) {
        self.line(format_args!("Unrecoverable error: {}", err));
    }

    /// A dropped packet.
    fn aborted(&mut self, reason: &AbortReason) {
        if let AbortReason::TransportChain(err) = reason {
            self.unrecoverable(err);
        }
        self.line(format_args!("drop packet"));
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    #[inline]
    fn line(&mut self, args: fmt::Arguments<'_>) {
        (**self).line(args)
    }

    #[inline]
    fn completed(&mut self, report: &Report) {
        (**self).completed(report)
    }

    #[inline]
    fn unrecoverable(&mut self, err: &ChainError) {
        (**self).unrecoverable(err)
    }

    #[inline]
    fn aborted(&mut self, reason: &AbortReason) {
        (**self).aborted(reason)
    }
}

/// Sends every line to the `log` facade under the `pktinfo` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn line(&mut self, args: fmt::Arguments<'_>) {
        log::debug!(target: "pktinfo", "{}", args);
    }

    fn unrecoverable(&mut self, err: &ChainError) {
        log::warn!(target: "pktinfo", "Unrecoverable error: {}", err);
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    #[inline]
    fn line(&mut self, _args: fmt::Arguments<'_>) {}
}
