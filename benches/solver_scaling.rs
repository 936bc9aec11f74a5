use banded_solve::{SolverConfig, SolvingMethod, generate_system, lu_factorize, solve};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use faer::linalg::solvers::SolveCore;

fn bench_methods(c: &mut Criterion) {
    let cfg = SolverConfig::default();
    let mut group = c.benchmark_group("convergent banded system");
    for n in [100, 300] {
        let system = generate_system(n, 8.0, -1.0, -1.0, 1.0).unwrap();
        for method in SolvingMethod::ALL {
            group.bench_with_input(BenchmarkId::new(method.to_string(), n), &system, |ben, sys| {
                ben.iter(|| solve(black_box(sys), method, &cfg).unwrap())
            });
        }
    }
    group.finish();
}

fn bench_naive_lu_vs_faer(c: &mut Criterion) {
    let n = 200;
    let system = generate_system(n, 8.0, -1.0, -1.0, 1.0).unwrap();
    let a = system.matrix();
    let b = system.rhs().to_vec();

    c.bench_function("naive LU factorization", |ben| {
        ben.iter(|| lu_factorize(black_box(a)).unwrap())
    });

    c.bench_function("faer pivoted LU solve", |ben| {
        ben.iter(|| {
            let factor = faer::linalg::solvers::FullPivLu::new(a.as_ref());
            let mut y = b.clone();
            let n = y.len();
            let y_mat = faer::MatMut::from_column_major_slice_mut(&mut y, n, 1);
            factor.solve_in_place_with_conj(faer::Conj::No, y_mat);
        })
    });
}

criterion_group!(benches, bench_methods, bench_naive_lu_vs_faer);
criterion_main!(benches);
