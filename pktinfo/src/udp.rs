//! UDP header overlay (RFC 768).

use byteorder::{ByteOrder, NetworkEndian};

/// A constant that defines the fixed byte length of the Udp header.
pub const UDP_HEADER_LEN: usize = 8;

/// A typed overlay on a Udp header.
#[derive(Debug, Clone, Copy)]
pub struct UdpHeader<T> {
    buf: T,
}

impl<T: AsRef<[u8]>> UdpHeader<T> {
    /// Wrap `buf` without checking its length.
    #[inline]
    pub fn parse_unchecked(buf: T) -> Self {
        Self { buf }
    }

    /// Wrap `buf`, handing it back if it cannot hold the header.
    #[inline]
    pub fn parse(buf: T) -> Result<Self, T> {
        if buf.as_ref().len() < UDP_HEADER_LEN {
            return Err(buf);
        }
        Ok(Self { buf })
    }

    /// Source port.
    #[inline]
    pub fn src_port(&self) -> u16 {
        NetworkEndian::read_u16(&self.buf.as_ref()[0..2])
    }

    /// Destination port.
    #[inline]
    pub fn dst_port(&self) -> u16 {
        NetworkEndian::read_u16(&self.buf.as_ref()[2..4])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn udp_header_fields() {
        let hdr = [0x13, 0x88, 0x17, 0x70, 0x00, 0x0c, 0xab, 0xcd];
        let udp = UdpHeader::parse(&hdr[..]).unwrap();
        assert_eq!(udp.src_port(), 5000);
        assert_eq!(udp.dst_port(), 6000);
        assert!(UdpHeader::parse(&hdr[..7]).is_err());
    }
}
