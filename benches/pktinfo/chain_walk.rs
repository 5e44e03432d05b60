use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pktinfo::chain::{ChainWalk, MAX_EXT_HEADERS};
use pktinfo::PacketWindow;

fn chain(ext_headers: usize, last: u8) -> Vec<u8> {
    let mut pkt = vec![0u8; 40];
    pkt[0] = 0x60;
    pkt[6] = if ext_headers == 0 { last } else { 60 };
    for i in 0..ext_headers {
        let next = if i + 1 == ext_headers { last } else { 60 };
        pkt.extend_from_slice(&[next, 1, 1, 12, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    }
    pkt.extend_from_slice(&[0; 8]);
    pkt
}

fn walk(buf: &[u8]) -> bool {
    let window = PacketWindow::new(buf);
    match ChainWalk::start(&window, 0) {
        Ok(w) => w.run(&window).is_ok(),
        Err(_) => false,
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let direct = chain(0, 17);
    let longest = chain(MAX_EXT_HEADERS, 17);
    let too_long = chain(MAX_EXT_HEADERS + 1, 17);

    c.bench_function("chain_walk_direct", |b| {
        b.iter(|| assert!(walk(black_box(&direct))))
    });

    c.bench_function("chain_walk_longest", |b| {
        b.iter(|| assert!(walk(black_box(&longest))))
    });

    c.bench_function("chain_walk_too_long", |b| {
        b.iter(|| assert!(!walk(black_box(&too_long))))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
