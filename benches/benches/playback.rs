//! Benchmark suite for playback and GIF export
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use std::hint::black_box;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use dirsprite_benches::generate_animation_set;
use dirsprite_player::export::{ExportRequest, encode_gif};
use dirsprite_player::playback::{PlayMode, Player, PlayerOptions};

/// Benchmark the tick state machine in both modes
fn bench_ticks(c: &mut Criterion) {
	let mut group = c.benchmark_group("playback_tick");
	let set = generate_animation_set(8, 16, 1, 1);

	for mode in PlayMode::ALL {
		let options = PlayerOptions {
			play_mode: mode,
			autoplay: true,
			..PlayerOptions::default()
		};

		group.throughput(Throughput::Elements(1000));
		group.bench_with_input(BenchmarkId::new("update_1000", mode), &options, |b, options| {
			b.iter(|| {
				let mut player = Player::for_set(&set, options);
				for _ in 0..1000 {
					player.update(black_box(Duration::from_millis(100)));
				}
				black_box(player.state().frame())
			});
		});
	}

	group.finish();
}

/// Benchmark GIF encoding of one direction at several frame sizes
fn bench_encode_gif(c: &mut Criterion) {
	let mut group = c.benchmark_group("export_gif");
	group.sample_size(20);

	for size in [32u32, 96, 192] {
		let set = generate_animation_set(1, 8, size, size);
		let request = ExportRequest::for_direction(&set, 0, 100);

		group.throughput(Throughput::Elements(u64::from(size * size) * 8));
		group.bench_with_input(BenchmarkId::new("encode", size), &request, |b, request| {
			b.iter(|| black_box(encode_gif(black_box(request))));
		});
	}

	group.finish();
}

criterion_group!(benches, bench_ticks, bench_encode_gif);
criterion_main!(benches);
