//! Performance benchmarks for line reassembly and decoding

use bytes::Bytes;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use futures::StreamExt;
use quill::providers::{Dialect, LineReader, ProviderStream};
use quill::{Error, ProviderKind};
use tokio::runtime::Runtime;

/// An OpenAI-style body with `n` deltas and a closing sentinel
fn openai_body(n: usize) -> Vec<u8> {
    let mut body = String::new();
    for i in 0..n {
        body.push_str(&format!(
            "data: {{\"choices\":[{{\"delta\":{{\"content\":\"token {} \u{e9}\"}}}}]}}\n\n",
            i
        ));
    }
    body.push_str("data: [DONE]\n\n");
    body.into_bytes()
}

/// Benchmark line reassembly at different chunk sizes
fn benchmark_line_reader(c: &mut Criterion) {
    let body = openai_body(500);
    let mut group = c.benchmark_group("line_reader");

    for chunk_size in [1usize, 16, 512, 64 * 1024] {
        group.bench_with_input(
            BenchmarkId::from_parameter(chunk_size),
            &chunk_size,
            |b, &chunk_size| {
                b.iter(|| {
                    let mut reader = LineReader::new();
                    let mut lines = 0;
                    for chunk in body.chunks(chunk_size) {
                        lines += reader.push(black_box(chunk)).len();
                    }
                    lines
                })
            },
        );
    }

    group.finish();
}

/// Benchmark decoding of single lines
fn benchmark_decode_line(c: &mut Criterion) {
    let openai = r#"data: {"choices":[{"delta":{"content":"Hello"}}]}"#;
    let gemini = r#"data: {"candidates":[{"content":{"parts":[{"text":"Hello"}]},"safetyRatings":[{"probability":"NEGLIGIBLE"}]}]}"#;

    c.bench_function("decode_openai_line", |b| {
        b.iter(|| ProviderKind::OpenAI.decode_line(black_box(openai)))
    });
    c.bench_function("decode_gemini_line", |b| {
        b.iter(|| ProviderKind::Gemini.decode_line(black_box(gemini)))
    });
}

/// Benchmark a full body through the provider stream
fn benchmark_provider_stream(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let body = openai_body(500);

    c.bench_function("provider_stream_openai_500", |b| {
        b.to_async(&rt).iter(|| async {
            let chunks: Vec<Result<Bytes, Error>> = body
                .chunks(256)
                .map(|c| Ok(Bytes::copy_from_slice(c)))
                .collect();
            let inner = futures::stream::iter(chunks).boxed();
            let stream = ProviderStream::new(inner, ProviderKind::OpenAI);
            stream.count().await
        })
    });
}

criterion_group!(
    benches,
    benchmark_line_reader,
    benchmark_decode_line,
    benchmark_provider_stream
);
criterion_main!(benches);
