//! IPv6 fixed header, extension header overlays and protocol numbers.

pub use core::net::Ipv6Addr;

use byteorder::{ByteOrder, NetworkEndian};

/// A constant that defines the fixed byte length of the Ipv6 header.
pub const IPV6_HEADER_LEN: usize = 40;

/// Bytes every extension header starts with: next header and length.
pub const EXT_HEADER_PREFIX_LEN: usize = 2;

/// A constant that defines the fixed byte length of the fragment header.
pub const FRAGMENT_HEADER_LEN: usize = 8;

enum_sim! {
    /// An enum-like type for representing different protocols in IPv6.
    pub struct IpProtocol (u8) {
        /// Hop-by-hop options extension.
        HOPOPT = 0,
        /// TCP.
        TCP = 6,
        /// UDP.
        UDP = 17,
        /// Routing extension.
        IPV6_ROUTE = 43,
        /// Fragment extension.
        IPV6_FRAG = 44,
        /// Encapsulating security payload.
        ESP = 50,
        /// Authentication header.
        AH = 51,
        /// ICMP for IPv6.
        ICMPV6 = 58,
        /// No next header.
        IPV6_NO_NXT = 59,
        /// Destination options extension.
        IPV6_OPTS = 60,
        /// Mobility header.
        MOBILITY = 135,
        /// Host identity protocol.
        HIP = 139,
        /// Shim6 protocol.
        SHIM6 = 140,
        /// Reserved for experimentation.
        EXPERIMENT1 = 253,
        /// Reserved for experimentation.
        EXPERIMENT2 = 254,
    }
}

/// How the length of an extension header is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtLenRule {
    /// `8 + hdr_ext_len * 8` bytes.
    Octets8,
    /// Always 8 bytes, the length byte is reserved.
    Fixed8,
    /// `(hdr_ext_len + 2) * 4` bytes.
    Words4,
}

impl ExtLenRule {
    /// Total header length for the given length field.
    #[inline]
    pub fn header_len(self, hdr_ext_len: u8) -> usize {
        match self {
            ExtLenRule::Octets8 => 8 + (hdr_ext_len as usize) * 8,
            ExtLenRule::Fixed8 => FRAGMENT_HEADER_LEN,
            ExtLenRule::Words4 => ((hdr_ext_len as usize) + 2) * 4,
        }
    }
}

/// What a next header value means to the extension header walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextHeaderClass {
    /// Another extension header follows, sized by the rule.
    Extension(ExtLenRule),
    /// Nothing the walk could call a transport header follows.
    NoTransport,
    /// An extension header the walk cannot size.
    Unsupported,
    /// A payload protocol.
    Terminal,
}

impl IpProtocol {
    /// Classify a next header value.
    pub fn classify(self) -> NextHeaderClass {
        match self {
            IpProtocol::HOPOPT
            | IpProtocol::IPV6_ROUTE
            | IpProtocol::IPV6_OPTS
            | IpProtocol::MOBILITY
            | IpProtocol::HIP
            | IpProtocol::SHIM6 => NextHeaderClass::Extension(ExtLenRule::Octets8),
            IpProtocol::IPV6_FRAG => NextHeaderClass::Extension(ExtLenRule::Fixed8),
            IpProtocol::AH => NextHeaderClass::Extension(ExtLenRule::Words4),
            IpProtocol::ESP | IpProtocol::EXPERIMENT1 | IpProtocol::EXPERIMENT2 => {
                NextHeaderClass::Unsupported
            }
            IpProtocol::IPV6_NO_NXT | IpProtocol::ICMPV6 => NextHeaderClass::NoTransport,
            _ => NextHeaderClass::Terminal,
        }
    }
}

/// A typed overlay on the fixed Ipv6 header.
#[derive(Debug, Clone, Copy)]
pub struct Ipv6Header<T> {
    buf: T,
}

impl<T: AsRef<[u8]>> Ipv6Header<T> {
    /// Wrap `buf` without checking its length.
    #[inline]
    pub fn parse_unchecked(buf: T) -> Self {
        Self { buf }
    }

    /// Wrap `buf`, handing it back if it cannot hold the fixed header.
    #[inline]
    pub fn parse(buf: T) -> Result<Self, T> {
        if buf.as_ref().len() < IPV6_HEADER_LEN {
            return Err(buf);
        }
        Ok(Self { buf })
    }

    /// Protocol of the header that follows.
    #[inline]
    pub fn next_header(&self) -> IpProtocol {
        IpProtocol::from(self.buf.as_ref()[6])
    }

    /// Source address.
    #[inline]
    pub fn src_addr(&self) -> Ipv6Addr {
        Ipv6Addr::from(NetworkEndian::read_u128(&self.buf.as_ref()[8..24]))
    }

    /// Destination address.
    #[inline]
    pub fn dst_addr(&self) -> Ipv6Addr {
        Ipv6Addr::from(NetworkEndian::read_u128(&self.buf.as_ref()[24..40]))
    }
}

/// The two bytes shared by every sizable extension header.
#[derive(Debug, Clone, Copy)]
pub struct ExtHeader<T> {
    buf: T,
}

impl<T: AsRef<[u8]>> ExtHeader<T> {
    /// Wrap `buf` without checking its length.
    #[inline]
    pub fn parse_unchecked(buf: T) -> Self {
        Self { buf }
    }

    /// Wrap `buf`, handing it back if it is shorter than the prefix.
    #[inline]
    pub fn parse(buf: T) -> Result<Self, T> {
        if buf.as_ref().len() < EXT_HEADER_PREFIX_LEN {
            return Err(buf);
        }
        Ok(Self { buf })
    }

    /// Protocol of the header that follows.
    #[inline]
    pub fn next_header(&self) -> IpProtocol {
        IpProtocol::from(self.buf.as_ref()[0])
    }

    /// Raw length field; its unit depends on the header type.
    #[inline]
    pub fn hdr_ext_len(&self) -> u8 {
        self.buf.as_ref()[1]
    }
}

/// RFC 8200 - Sec. 4.5
#[derive(Debug, Clone, Copy)]
pub struct FragmentHeader<T> {
    buf: T,
}

impl<T: AsRef<[u8]>> FragmentHeader<T> {
    /// Wrap `buf` without checking its length.
    #[inline]
    pub fn parse_unchecked(buf: T) -> Self {
        Self { buf }
    }

    /// Wrap `buf`, handing it back if it cannot hold the header.
    #[inline]
    pub fn parse(buf: T) -> Result<Self, T> {
        if buf.as_ref().len() < FRAGMENT_HEADER_LEN {
            return Err(buf);
        }
        Ok(Self { buf })
    }

    /// Protocol of the header that follows.
    #[inline]
    pub fn next_header(&self) -> IpProtocol {
        IpProtocol::from(self.buf.as_ref()[0])
    }

    /// Offset of the fragment payload in 8-octet units.
    #[inline]
    pub fn frag_off(&self) -> u16 {
        NetworkEndian::read_u16(&self.buf.as_ref()[2..4]) >> 3
    }
}
