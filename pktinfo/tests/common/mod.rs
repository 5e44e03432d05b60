#![allow(dead_code)]

use smoltcp::wire::{
    EthernetAddress, EthernetFrame, EthernetProtocol, IpProtocol, Ipv6Address, Ipv6Packet,
    UdpPacket,
};

pub const ETH_LEN: usize = 14;
pub const IPV6_LEN: usize = 40;

pub const DST_MAC: [u8; 6] = [0x00, 0x0b, 0x86, 0x64, 0x8b, 0xa0];
pub const SRC_MAC: [u8; 6] = [0x00, 0x50, 0x56, 0xae, 0x76, 0xf5];

pub const SRC_IP: [u8; 16] = [
    0x20, 0x01, 0x0d, 0xb8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x01,
];
pub const DST_IP: [u8; 16] = [
    0x20, 0x01, 0x0d, 0xb8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x02,
];

/// Ethernet + IPv6 fixed header, followed by `payload`.
pub fn eth_ipv6(next_header: u8, payload: &[u8]) -> Vec<u8> {
    let mut pkt = vec![0u8; ETH_LEN + IPV6_LEN + payload.len()];

    let mut eth = EthernetFrame::new_unchecked(&mut pkt[..ETH_LEN]);
    eth.set_dst_addr(EthernetAddress(DST_MAC));
    eth.set_src_addr(EthernetAddress(SRC_MAC));
    eth.set_ethertype(EthernetProtocol::Ipv6);

    let mut ip = Ipv6Packet::new_unchecked(&mut pkt[ETH_LEN..ETH_LEN + IPV6_LEN]);
    ip.set_version(6);
    ip.set_payload_len(payload.len() as u16);
    ip.set_next_header(IpProtocol::from(next_header));
    ip.set_hop_limit(64);
    ip.set_src_addr(Ipv6Address(SRC_IP));
    ip.set_dst_addr(Ipv6Address(DST_IP));

    pkt[ETH_LEN + IPV6_LEN..].copy_from_slice(payload);
    pkt
}

/// A bare IPv6 fixed header followed by `payload`.
pub fn ipv6(next_header: u8, payload: &[u8]) -> Vec<u8> {
    eth_ipv6(next_header, payload).split_off(ETH_LEN)
}

/// A UDP header with an 8 byte length and no checksum.
pub fn udp(src_port: u16, dst_port: u16) -> Vec<u8> {
    let mut hdr = vec![0u8; 8];
    let mut udp = UdpPacket::new_unchecked(&mut hdr[..]);
    udp.set_src_port(src_port);
    udp.set_dst_port(dst_port);
    udp.set_len(8);
    udp.set_checksum(0);
    hdr
}

/// An option-style extension header of `8 + hdr_ext_len * 8` bytes.
pub fn ext(next_header: u8, hdr_ext_len: u8) -> Vec<u8> {
    let mut hdr = vec![0u8; 8 + hdr_ext_len as usize * 8];
    hdr[0] = next_header;
    hdr[1] = hdr_ext_len;
    // PadN covering the rest of the header
    if let Ok(pad) = u8::try_from(hdr.len() - 4) {
        hdr[2] = 1;
        hdr[3] = pad;
    }
    hdr
}

/// A fragment header.
pub fn frag(next_header: u8, frag_off: u16, more: bool) -> Vec<u8> {
    let mut hdr = vec![next_header, 0, 0, 0, 0x12, 0x34, 0x56, 0x78];
    let raw = (frag_off << 3) | more as u16;
    hdr[2..4].copy_from_slice(&raw.to_be_bytes());
    hdr
}

pub fn concat(parts: &[&[u8]]) -> Vec<u8> {
    parts.iter().flat_map(|p| p.iter().copied()).collect()
}
