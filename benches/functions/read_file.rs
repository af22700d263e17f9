use criterion::{BenchmarkId, Criterion, Throughput};
use tokio::runtime::Runtime;

const FILE_SIZE: usize = 1024 * 1024;

pub fn criterion_benchmark(c: &mut Criterion) {
    let runtime = Runtime::new().expect("Failed to build tokio runtime");

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("blob.bin");
    let contents: Vec<u8> = (0..=255u8).cycle().take(FILE_SIZE).collect();
    std::fs::write(&path, &contents).expect("Failed to write bench file");

    let data = runtime
        .block_on(dirload::read_file(&path))
        .expect("Failed to read bench file");
    assert_eq!(data.len(), FILE_SIZE);

    let mut group = c.benchmark_group("read_file");
    group.throughput(Throughput::Bytes(FILE_SIZE as u64));

    for chunk_size in [4 * 1024usize, 40 * 1024, 256 * 1024] {
        group.bench_with_input(
            BenchmarkId::from_parameter(chunk_size),
            &chunk_size,
            |b, &chunk_size| {
                b.to_async(&runtime).iter(|| async {
                    dirload::read_file_with_chunk_size(&path, chunk_size)
                        .await
                        .expect("Failed to read bench file")
                })
            },
        );
    }

    group.finish();
}
