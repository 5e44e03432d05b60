//! Bounded walk over the IPv6 extension header chain.
//!
//! The walk starts at the fixed IPv6 header and skips extension headers until
//! the next header value names something that is not an extension. The
//! number of skipped headers is capped by [`MAX_EXT_HEADERS`], so the loop
//! has a constant trip count no matter what the packet says.
//!
//! ```text
//!  +--------------+-----------+-----------+-----+-----------+
//!  | IPv6 (40 B)  | ext hdr 1 | ext hdr 2 | ... | transport |
//!  +--------------+-----------+-----------+-----+-----------+
//!  next_header -> next_header -> ...          -> UDP / TCP / ...
//! ```

use crate::ipv6::{
    ExtHeader, ExtLenRule, FragmentHeader, IpProtocol, Ipv6Header, NextHeaderClass,
    EXT_HEADER_PREFIX_LEN, IPV6_HEADER_LEN,
};
use crate::{access, ChainError, HdrCursor, PacketWindow};

/// Maximum number of extension headers skipped before the chain is rejected.
pub const MAX_EXT_HEADERS: usize = 8;

/// How a walk that did not fail came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainOutcome {
    /// The transport header of `protocol` starts at `offset`.
    Resolved {
        /// The terminal next header value.
        protocol: IpProtocol,
        /// Packet offset of the transport header.
        offset: usize,
    },
    /// The chain ends without a transport header in this packet.
    NoTransport(IpProtocol),
    /// The chain continues with a header the walk cannot size.
    UnsupportedChain(IpProtocol),
}

impl ChainOutcome {
    /// The resolved protocol and offset, if any.
    #[inline]
    pub fn resolved(&self) -> Option<(IpProtocol, usize)> {
        match *self {
            ChainOutcome::Resolved { protocol, offset } => Some((protocol, offset)),
            _ => None,
        }
    }
}

/// State of one walk: where the next header starts, what it is, and how
/// many extension headers have been skipped so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainWalk {
    current_offset: usize,
    next_header: IpProtocol,
    hops_taken: usize,
}

impl ChainWalk {
    /// Read the fixed header at `start` and position the walk right after it.
    pub fn start(window: &PacketWindow<'_>, start: usize) -> Result<Self, ChainError> {
        let view = access(window, start, IPV6_HEADER_LEN)?;
        let ip6h = Ipv6Header::parse_unchecked(view);
        Ok(Self {
            current_offset: view.end(),
            next_header: ip6h.next_header(),
            hops_taken: 0,
        })
    }

    /// Offset of the header named by [`next_header`](Self::next_header).
    #[inline]
    pub fn current_offset(&self) -> usize {
        self.current_offset
    }

    /// The protocol found at the current offset.
    #[inline]
    pub fn next_header(&self) -> IpProtocol {
        self.next_header
    }

    /// Extension headers skipped so far.
    #[inline]
    pub fn hops_taken(&self) -> usize {
        self.hops_taken
    }

    /// Look at the current header and either finish the walk or skip it.
    ///
    /// `Ok(None)` means one extension header was skipped and the walk should
    /// go on.
    pub fn step(&mut self, window: &PacketWindow<'_>) -> Result<Option<ChainOutcome>, ChainError> {
        let rule = match self.next_header.classify() {
            NextHeaderClass::Terminal => {
                return Ok(Some(ChainOutcome::Resolved {
                    protocol: self.next_header,
                    offset: self.current_offset,
                }))
            }
            NextHeaderClass::NoTransport => {
                return Ok(Some(ChainOutcome::NoTransport(self.next_header)))
            }
            NextHeaderClass::Unsupported => {
                return Ok(Some(ChainOutcome::UnsupportedChain(self.next_header)))
            }
            NextHeaderClass::Extension(rule) => rule,
        };

        if self.hops_taken >= MAX_EXT_HEADERS {
            return Err(ChainError::TooManyHeaders {
                hops: self.hops_taken,
            });
        }

        let prefix = access(window, self.current_offset, EXT_HEADER_PREFIX_LEN)?;
        let ext = ExtHeader::parse_unchecked(prefix);
        let hdr_len = rule.header_len(ext.hdr_ext_len());
        let view = access(window, self.current_offset, hdr_len)?;

        log::trace!(
            target: "pktinfo",
            "skip ext header {} at {} ({} bytes)",
            self.next_header,
            self.current_offset,
            hdr_len
        );

        if rule == ExtLenRule::Fixed8 {
            let frag = FragmentHeader::parse_unchecked(view);
            if frag.frag_off() != 0 {
                // Only the first fragment carries the transport header.
                return Ok(Some(ChainOutcome::NoTransport(frag.next_header())));
            }
        }

        self.current_offset = view.end();
        self.next_header = ext.next_header();
        self.hops_taken += 1;
        Ok(None)
    }

    /// Step until the walk finishes.
    ///
    /// Every `Ok(None)` step skips one header and [`step`](Self::step)
    /// refuses to skip more than [`MAX_EXT_HEADERS`], so this takes at most
    /// `MAX_EXT_HEADERS + 1` steps.
    pub fn run(mut self, window: &PacketWindow<'_>) -> Result<ChainOutcome, ChainError> {
        for _ in 0..=MAX_EXT_HEADERS {
            if let Some(outcome) = self.step(window)? {
                return Ok(outcome);
            }
        }
        // Safety backstop: unreachable, `step` rejects the hop after the
        // bound. The range above keeps the loop syntactically bounded.
        Err(ChainError::TooManyHeaders {
            hops: self.hops_taken,
        })
    }
}

/// Find the transport protocol of the IPv6 packet at `cur.net_offset`.
///
/// On [`ChainOutcome::Resolved`] the transport offset is stored in
/// `cur.trans_offset`; the cursor is left alone otherwise.
pub fn find_transport_protocol(
    window: &PacketWindow<'_>,
    cur: &mut HdrCursor,
) -> Result<ChainOutcome, ChainError> {
    let outcome = ChainWalk::start(window, cur.net_offset)?.run(window)?;
    if let Some((_, offset)) = outcome.resolved() {
        cur.trans_offset = Some(offset);
    }
    Ok(outcome)
}
