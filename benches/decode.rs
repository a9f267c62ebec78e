//! Benchmark for decoding `getmeasure` payloads.
//!
//! Covers the whole path from response bytes to records: JSON parsing, sentinel
//! resolution and series expansion.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use netatmo_weather::{METRICS, decode_measure};

const TEST_DEVICE: &str = "70:ee:50:00:00:01";
const TEST_MODULE: &str = "02:00:00:00:00:02";

/// A single-block response with `rows` five-minute rows.
///
/// Every fourth cell is null and every seventh is a zero sentinel so the
/// resolution branches are all exercised.
fn payload(rows: usize) -> Vec<u8> {
    let mut values = Vec::with_capacity(rows);
    for r in 0..rows {
        let cells: Vec<String> = (0..METRICS.len())
            .map(|c| match (r + c) % 28 {
                n if n % 4 == 0 => "null".to_string(),
                n if n % 7 == 0 => "0".to_string(),
                n => format!("{}.5", 10 + n),
            })
            .collect();
        values.push(format!("[{}]", cells.join(",")));
    }
    format!(
        r#"{{"body":[{{"beg_time":1700000000,"step_time":300,"value":[{}]}}],"status":"ok","time_exec":0.01,"time_server":1700000000}}"#,
        values.join(",")
    )
    .into_bytes()
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_measure");

    for rows in [1usize, 288, 1024] {
        let data = payload(rows);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &data, |b, data| {
            b.iter(|| {
                let set = decode_measure(black_box(data), TEST_DEVICE, TEST_MODULE)
                    .expect("payload is well-formed");
                black_box(set)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
