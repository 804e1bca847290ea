use criterion::*;
use wad::{DSector, DSidedef, Lump};

fn sectors(count: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(count * 26);
    for i in 0..count {
        data.extend_from_slice(&(i as i16).to_le_bytes());
        data.extend_from_slice(&128i16.to_le_bytes());
        data.extend_from_slice(b"FLOOR4_8");
        data.extend_from_slice(b"CEIL3_5\0");
        data.extend_from_slice(&[160, 0, 0, 0, 0, 0]);
    }
    data
}

fn sidedefs(count: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(count * 30);
    for i in 0..count {
        data.extend_from_slice(&[0, 0, 0, 0]);
        data.extend_from_slice(b"-\0\0\0\0\0\0\0");
        data.extend_from_slice(b"STEP6\0\0\0");
        data.extend_from_slice(b"STARTAN3");
        data.extend_from_slice(&((i % 512) as i16).to_le_bytes());
    }
    data
}

fn bench(c: &mut Criterion) {
    let sector_data = sectors(4096);
    let side_data = sidedefs(16384);

    c.bench_function("Decode SECTORS", |b| {
        b.iter(|| Lump::<DSector>::from_bytes(black_box(&sector_data)))
    });
    c.bench_function("Decode SIDEDEFS", |b| {
        b.iter(|| Lump::<DSidedef>::from_bytes(black_box(&side_data)))
    });
}

criterion_group!(benches, bench,);
criterion_main!(benches);
