use bytes::Bytes;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pktinfo::*;

// ether + ipv6 + udp 5000 -> 6000
static FRAME_BYTES: [u8; 62] = [
    0x00, 0x0b, 0x86, 0x64, 0x8b, 0xa0, 0x00, 0x50, 0x56, 0xae, 0x76, 0xf5, 0x86, 0xdd, 0x60, 0x00,
    0x00, 0x00, 0x00, 0x08, 0x11, 0x40, 0x20, 0x01, 0x0d, 0xb8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x20, 0x01, 0x0d, 0xb8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x13, 0x88, 0x17, 0x70, 0x00, 0x08, 0x00, 0x00,
];

fn inspect_all(buf: &[u8]) -> Disposition {
    let mut info = PktInfo::new(HdrCursor::new(0, 14));
    show_pkt_info(
        Some(&mut info),
        &PacketWindow::new(buf),
        ProgramArgs::new(Layers::all(), 1),
        &mut NullReporter,
    )
}

fn inspect_net(buf: &[u8]) -> Disposition {
    let mut info = PktInfo::new(HdrCursor::new(0, 14));
    show_pkt_info(
        Some(&mut info),
        &PacketWindow::new(buf),
        ProgramArgs::new(Layers::NET, 1),
        &mut NullReporter,
    )
}

fn criterion_benchmark(c: &mut Criterion) {
    let frame = Bytes::from_static(&FRAME_BYTES);

    c.bench_function("inspect_all", |b| {
        b.iter(|| {
            let d = inspect_all(black_box(&frame));
            assert!(d == Disposition::Continue);
        })
    });

    c.bench_function("inspect_net", |b| {
        b.iter(|| {
            let d = inspect_net(black_box(&frame));
            assert!(d == Disposition::Continue);
        })
    });

    c.bench_function("inspect_truncated", |b| {
        b.iter(|| {
            let d = inspect_all(black_box(&FRAME_BYTES[..10]));
            assert!(d == Disposition::Abort);
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
