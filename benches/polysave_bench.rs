use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use polysave::{
    container,
    document::{GameState, SaveDocument},
    records::{Improvement, MapHeader, Player, Rgba, Tile, TileImprovement},
    DecodeOptions,
};

fn document(size: u16) -> SaveDocument {
    let header = MapHeader {
        version: 105,
        width: size,
        height: size,
        map_name: String::from("Bench"),
        ..MapHeader::default()
    };

    let mut state = GameState::blank(header);
    for (i, tile) in state.tiles.iter_mut().enumerate() {
        tile.terrain = (i % 7) as u16;
        tile.player_visibility = vec![1, 2, 3];
        if i % 11 == 0 {
            tile.improvement = Some(TileImprovement {
                kind: Tile::CITY,
                data: Improvement {
                    level: 2,
                    city_name: Some(format!("City {}", i)),
                    ..Improvement::default()
                },
            });
        }
    }

    for i in 1..=8 {
        let player = Player::empty(i, &format!("Player{}", i), Rgba::new(i, i, i, 255)).unwrap();
        state.players.push(player);
    }

    SaveDocument::new(state.clone(), state)
}

pub fn container_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("container");
    for size in [16, 32, 64].iter() {
        let data = document(*size).to_bytes().unwrap();
        let compressed = container::compress(&data);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("compress", size), size, |b, &_size| {
            b.iter(|| container::compress(black_box(&data)))
        });
        group.bench_with_input(BenchmarkId::new("decompress", size), size, |b, &_size| {
            b.iter(|| container::decompress(black_box(&compressed)).unwrap())
        });
    }
    group.finish();
}

pub fn document_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("document");
    for size in [16, 32, 64].iter() {
        let input = document(*size);
        let data = input.to_bytes().unwrap();
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("decode", size), size, |b, &_size| {
            b.iter(|| SaveDocument::from_slice(black_box(&data)).unwrap())
        });
        group.bench_with_input(
            BenchmarkId::new("decode-without-offsets", size),
            size,
            |b, &_size| {
                let options = DecodeOptions::new().with_offsets(false);
                b.iter(|| options.decode(black_box(&data)).unwrap())
            },
        );
        group.bench_with_input(BenchmarkId::new("encode", size), size, |b, &_size| {
            b.iter(|| black_box(&input).to_bytes().unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, container_benchmark, document_benchmark);
criterion_main!(benches);
