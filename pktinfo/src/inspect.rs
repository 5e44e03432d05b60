//! The layer inspector: the entry point a host calls once per packet.
//!
//! An invocation is a single pass over the selected layers. Any failure to
//! read a header that the selection asks for aborts the pass and drops the
//! packet. A transport chain that simply has nothing to report is not a
//! failure: the transport part of the report says so and the pass goes on.

use crate::chain::{find_transport_protocol, ChainOutcome};
use crate::ether::{EtherHeader, ETHER_HEADER_LEN};
use crate::ipv6::{IpProtocol, Ipv6Header, IPV6_HEADER_LEN};
use crate::report::{LinkInfo, NetInfo, TransportInfo};
use crate::udp::{UdpHeader, UDP_HEADER_LEN};
use crate::{AbortReason, HdrCursor, Layers, PacketWindow, PktInfo, Report, Reporter};

/// What the host should do with the packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Carry on with normal processing.
    Continue,
    /// Drop the packet.
    Abort,
}

/// The two 64-bit arguments the host passes to the program.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgramArgs {
    /// Raw selection mask, see [`Layers`].
    pub select_layers: u64,
    /// Opaque value echoed in the report.
    pub user_info: u64,
}

impl ProgramArgs {
    /// Arguments selecting `layers`.
    #[inline]
    pub fn new(layers: Layers, user_info: u64) -> Self {
        Self {
            select_layers: layers.bits(),
            user_info,
        }
    }
}

/// Inspect the selected layers of one packet.
///
/// `info` is the per-cpu state block holding the cursor; without it nothing
/// can be located and the invocation aborts. The cursor's transport offset
/// is updated when the transport layer is selected and resolved.
pub fn inspect(
    info: Option<&mut PktInfo>,
    window: &PacketWindow<'_>,
    layers: Layers,
    user_info: u64,
) -> Result<Report, AbortReason> {
    let info = info.ok_or(AbortReason::MissingState)?;
    let cur = info.cur_mut();
    let mut report = Report::new(user_info);

    if layers.contains(Layers::LINK) {
        let view = window
            .access(cur.mac_offset, ETHER_HEADER_LEN)
            .map_err(AbortReason::LinkHeader)?;
        let eth_h = EtherHeader::parse_unchecked(view);
        report.link = Some(LinkInfo {
            dst: eth_h.dst_addr(),
            src: eth_h.src_addr(),
        });
    }

    if layers.contains(Layers::NET) {
        let view = window
            .access(cur.net_offset, IPV6_HEADER_LEN)
            .map_err(AbortReason::NetworkHeader)?;
        let ip6h = Ipv6Header::parse_unchecked(view);
        report.net = Some(NetInfo {
            src: ip6h.src_addr(),
            dst: ip6h.dst_addr(),
        });
    }

    if layers.contains(Layers::TRANSPORT) {
        report.transport = Some(inspect_transport(window, cur)?);
    }

    Ok(report)
}

fn inspect_transport(
    window: &PacketWindow<'_>,
    cur: &mut HdrCursor,
) -> Result<TransportInfo, AbortReason> {
    let outcome = find_transport_protocol(window, cur).map_err(AbortReason::TransportChain)?;
    let info = match outcome {
        ChainOutcome::Resolved {
            protocol: IpProtocol::UDP,
            offset,
        } => {
            let view = window
                .access(offset, UDP_HEADER_LEN)
                .map_err(AbortReason::TransportHeader)?;
            let udph = UdpHeader::parse_unchecked(view);
            TransportInfo::Udp {
                src_port: udph.src_port(),
                dst_port: udph.dst_port(),
            }
        }
        ChainOutcome::Resolved {
            protocol: IpProtocol::TCP,
            ..
        } => TransportInfo::Tcp,
        ChainOutcome::Resolved { protocol, .. } => TransportInfo::Other(protocol),
        ChainOutcome::NoTransport(protocol) => TransportInfo::NoTransport(protocol),
        ChainOutcome::UnsupportedChain(protocol) => TransportInfo::Unsupported(protocol),
    };
    Ok(info)
}

/// Run one invocation and report it.
///
/// A completed inspection is written to `reporter` and lets the packet
/// continue; an aborted one is reported as a drop.
pub fn show_pkt_info<R: Reporter + ?Sized>(
    info: Option<&mut PktInfo>,
    window: &PacketWindow<'_>,
    args: ProgramArgs,
    reporter: &mut R,
) -> Disposition {
    let layers = Layers::from_bits_truncate(args.select_layers);
    match inspect(info, window, layers, args.user_info) {
        Ok(report) => {
            reporter.completed(&report);
            Disposition::Continue
        }
        Err(reason) => {
            reporter.aborted(&reason);
            Disposition::Abort
        }
    }
}
