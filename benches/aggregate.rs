//! Status bar aggregation benchmarks

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use statusbar_core::core::{
    summarize, Aggregator, SelectionSet, SessionInfo, StatusInputs, StatusSources, Torrent,
};
use std::hint::black_box;

fn torrents(count: i64) -> Vec<Torrent> {
    (0..count)
        .map(|id| Torrent {
            id,
            name: Some(format!("torrent-{id}")),
            size_when_done: 1_000_000 + id * 37,
            have_valid: id * 13,
            rate_download: id % 4096,
            rate_upload: id % 1024,
        })
        .collect()
}

fn summary_benchmark(c: &mut Criterion) {
    let all = torrents(10_000);
    let filtered: Vec<Torrent> = all.iter().filter(|t| t.id % 3 == 0).cloned().collect();
    let selection: SelectionSet = (0..10_000).step_by(7).collect();
    let session = SessionInfo {
        version: Some("4.0.6".to_string()),
        speed_limit_down_enabled: true,
        speed_limit_down: 512,
        download_dir_free_space: 1 << 40,
        ..Default::default()
    };

    let mut group = c.benchmark_group("summary");
    group.throughput(Throughput::Elements(all.len() as u64));

    for global in [false, true] {
        let name = if global { "summarize_global" } else { "summarize_filtered" };
        group.bench_function(name, |b| {
            b.iter(|| {
                let summary = summarize(black_box(&StatusInputs {
                    session: Some(&session),
                    torrents: &all,
                    filtered: &filtered,
                    selection: &selection,
                    show_global_speeds: global,
                    hostname: "seedbox",
                }));
                black_box(summary)
            })
        });
    }

    group.finish();
}

fn memo_benchmark(c: &mut Criterion) {
    let mut sources = StatusSources::default();
    sources.torrents.replace(torrents(10_000));
    sources.filtered.replace(torrents(5_000));

    let mut group = c.benchmark_group("aggregator");

    group.bench_function("unchanged_sources", |b| {
        let mut aggregator = Aggregator::new();
        b.iter(|| {
            let down = aggregator.summary(black_box(&sources), false).transfer.download;
            black_box(down)
        })
    });

    group.bench_function("selection_changes", |b| {
        let mut aggregator = Aggregator::new();
        let mut id = 0;
        b.iter(|| {
            id = (id + 1) % 5_000;
            sources.selection.replace([id].into_iter().collect());
            let selected = aggregator.summary(&sources, false).selection.selected;
            black_box(selected)
        })
    });

    group.finish();
}

criterion_group!(benches, summary_benchmark, memo_benchmark);
criterion_main!(benches);
