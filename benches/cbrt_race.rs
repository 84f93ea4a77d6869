/// Benchmarking code to compare the performance of the cube root implementations on the same input data.
/// This code uses the Criterion crate for benchmarking, and races the bit-serial digit recurrence against the binary search and Newton–Raphson references, with the floating-point `cbrt` as an outside baseline.
/// The input blocks are generated from a fixed seed so every contender sees identical radicands, and the benchmarks are organized into groups by radicand width.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use icbrt::cube_root::digit_recurrence::{
    cube_root_digit_recurrence_u32, cube_root_digit_recurrence_u64,
};
use icbrt::cube_root::reference_roots::{cube_root_binary_search, cube_root_newton};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn radicand_block_u64(len: usize) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(0x1cb7_b001);
    (0..len).map(|_| rng.random()).collect()
}

fn radicand_block_u32(len: usize) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(0x1cb7_b002);
    (0..len).map(|_| rng.random::<u32>() as u64).collect()
}

fn bench_cube_root(
    c: &mut Criterion,
    group_name: &str,
    contender_name: &str,
    input: &[u64],
    f: impl Fn(u64) -> u64,
) {
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(input.len() as u64));
    group.bench_with_input(
        BenchmarkId::from_parameter(contender_name),
        input,
        |b, data| {
            b.iter(|| {
                let mut folded = 0u64;
                for &x in data {
                    folded ^= f(black_box(x));
                }
                black_box(folded);
            })
        },
    );
    group.finish();
}

fn cbrt_race(c: &mut Criterion) {
    let input64 = radicand_block_u64(4096);
    let input32 = radicand_block_u32(4096);

    bench_cube_root(
        c,
        "cube_root_u64",
        "digit_recurrence",
        &input64,
        cube_root_digit_recurrence_u64,
    );
    bench_cube_root(c, "cube_root_u64", "binary_search", &input64, |x| {
        cube_root_binary_search(x as u128) as u64
    });
    bench_cube_root(c, "cube_root_u64", "newton", &input64, |x| {
        cube_root_newton(x as u128) as u64
    });
    bench_cube_root(c, "cube_root_u64", "f64_cbrt", &input64, |x| {
        (x as f64).cbrt() as u64
    });

    bench_cube_root(c, "cube_root_u32", "digit_recurrence", &input32, |x| {
        cube_root_digit_recurrence_u32(x as u32) as u64
    });
    bench_cube_root(c, "cube_root_u32", "binary_search", &input32, |x| {
        cube_root_binary_search(x as u128) as u64
    });
    bench_cube_root(c, "cube_root_u32", "newton", &input32, |x| {
        cube_root_newton(x as u128) as u64
    });
    bench_cube_root(c, "cube_root_u32", "f64_cbrt", &input32, |x| {
        (x as f64).cbrt() as u64
    });
}

criterion_group!(benches, cbrt_race);
criterion_main!(benches);
