//! Ethernet II link layer header.

use core::fmt;

use byteorder::{ByteOrder, NetworkEndian};

/// A constant that defines the fixed byte length of the Ethernet header.
pub const ETHER_HEADER_LEN: usize = 14;

enum_sim! {
    /// An enum-like type for representing Ethertype in Ethernet frame.
    pub struct EtherType (u16) {
        /// Frame payload is Ipv6 protocol.
        IPV6 = 0x86DD,
    }
}

/// A six-octet Ethernet II address.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default)]
pub struct EtherAddr(pub [u8; 6]);

impl EtherAddr {
    /// Construct an Ethernet address from a sequence of octets, in big-endian.
    ///
    /// # Panics
    /// The function panics if `data` is not six octets long.
    pub fn from_bytes(data: &[u8]) -> EtherAddr {
        let mut bytes = [0; 6];
        bytes.copy_from_slice(data);
        EtherAddr(bytes)
    }

    /// The address as a 48-bit big-endian number.
    pub fn to_u64(&self) -> u64 {
        NetworkEndian::read_u48(&self.0)
    }
}

impl fmt::Display for EtherAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            b[0], b[1], b[2], b[3], b[4], b[5]
        )
    }
}

/// A typed overlay on an Ethernet header.
#[derive(Debug, Clone, Copy)]
pub struct EtherHeader<T> {
    buf: T,
}

impl<T: AsRef<[u8]>> EtherHeader<T> {
    /// Wrap `buf` without checking its length.
    ///
    /// Field getters panic if `buf` is shorter than [`ETHER_HEADER_LEN`].
    #[inline]
    pub fn parse_unchecked(buf: T) -> Self {
        Self { buf }
    }

    /// Wrap `buf`, handing it back if it cannot hold the header.
    #[inline]
    pub fn parse(buf: T) -> Result<Self, T> {
        if buf.as_ref().len() < ETHER_HEADER_LEN {
            return Err(buf);
        }
        Ok(Self { buf })
    }

    /// Destination address.
    #[inline]
    pub fn dst_addr(&self) -> EtherAddr {
        EtherAddr::from_bytes(&self.buf.as_ref()[0..6])
    }

    /// Source address.
    #[inline]
    pub fn src_addr(&self) -> EtherAddr {
        EtherAddr::from_bytes(&self.buf.as_ref()[6..12])
    }

    /// Type of the frame payload.
    #[inline]
    pub fn ethertype(&self) -> EtherType {
        EtherType::from(NetworkEndian::read_u16(&self.buf.as_ref()[12..14]))
    }
}
