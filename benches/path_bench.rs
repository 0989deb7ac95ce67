use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use crosspath::{
    get_full_path, get_volume_name, join, sanitize_filename, sanitize_path, PathContext,
    PathStyle,
};

fn bench_full_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_path");
    let posix = PathContext::default().with_style(PathStyle::Posix);
    let windows = PathContext::default().with_style(PathStyle::Windows);

    // Already normalized absolute path
    group.bench_function("posix_absolute", |b| {
        b.iter(|| get_full_path(black_box(&b"/absolute/path/to/file"[..]), &posix));
    });

    // Path with . and .. segments
    group.bench_function("posix_with_dots", |b| {
        b.iter(|| get_full_path(black_box(&b"/a/b/../c/./d/../../e/f"[..]), &posix));
    });

    // Relative path, includes the working directory query
    group.bench_function("posix_relative", |b| {
        b.iter(|| get_full_path(black_box(&b"relative/./path/.."[..]), &posix));
    });

    group.bench_function("windows_drive", |b| {
        let path = &b"C:\\Windows\\..\\Program Files\\app"[..];
        b.iter(|| get_full_path(black_box(path), &windows));
    });

    group.bench_function("windows_unc", |b| {
        let path = &b"\\\\server\\share\\dir\\..\\file"[..];
        b.iter(|| get_full_path(black_box(path), &windows));
    });

    group.finish();
}

fn bench_join(c: &mut Criterion) {
    let mut group = c.benchmark_group("join");

    group.bench_function("plain", |b| {
        b.iter(|| {
            join(
                black_box(&b"/first/second"[..]),
                black_box(&b"third/fourth"[..]),
                PathStyle::Posix,
            )
        });
    });

    group.bench_function("redundant_separators", |b| {
        b.iter(|| {
            join(
                black_box(&b"/first/second///"[..]),
                black_box(&b"///third"[..]),
                PathStyle::Posix,
            )
        });
    });

    group.finish();
}

fn bench_sanitize(c: &mut Criterion) {
    let mut group = c.benchmark_group("sanitize");

    // Input length scaling with a mix of literal and escaped units
    for length in [16usize, 256, 4096] {
        let input: Vec<u8> = (0..length).map(|i| (i % 128) as u8).collect();
        group.bench_with_input(BenchmarkId::new("filename", length), &input, |b, input| {
            b.iter(|| sanitize_filename(black_box(input.as_slice()), PathStyle::Posix));
        });
        group.bench_with_input(BenchmarkId::new("path", length), &input, |b, input| {
            b.iter(|| sanitize_path(black_box(input.as_slice()), PathStyle::Windows));
        });
    }

    group.finish();
}

fn bench_volume(c: &mut Criterion) {
    let mut group = c.benchmark_group("volume");

    for (name, path) in [
        ("drive", &b"C:\\Windows\\System32"[..]),
        ("unc", &b"\\\\server\\share\\dir"[..]),
        ("extended", &b"\\\\?\\UNC\\server\\share\\dir"[..]),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| get_volume_name(black_box(path), PathStyle::Windows));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_full_path, bench_join, bench_sanitize, bench_volume);
criterion_main!(benches);
