use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlbuilder::{ParameterBinding, SqlBuilder, format_parameters};

/// Build `select col0,col1,... from dbo.t where col0=0 and col1=1 ...` with `n` columns.
fn build_select(n: usize) -> SqlBuilder {
    let columns: Vec<String> = (0..n).map(|i| format!("col{i}")).collect();
    let mut b = SqlBuilder::new();
    b.select(&columns).from(["t"]);
    for (i, col) in columns.iter().enumerate() {
        if i == 0 {
            b.where_(col);
        } else {
            b.and(col);
        }
        b.equal_to(i as i64);
    }
    b
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/build");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(build_select(n).finish()));
        });
    }

    group.finish();
}

fn bench_in_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/in_list");

    for n in [5, 20, 100, 500] {
        let values: Vec<i64> = (0..n).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| {
                let mut q = SqlBuilder::new();
                q.select(["*"]).from(["t"]).where_("id").in_list(values.iter().copied());
                black_box(q.finish());
            });
        });
    }

    group.finish();
}

fn bench_format_parameters(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/format_parameters");

    for n in [1, 10, 100] {
        let bindings: Vec<ParameterBinding> = (0..n)
            .map(|i| ParameterBinding::new(format!("p{i}"), i as i32))
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &bindings, |b, bindings| {
            b.iter(|| black_box(format_parameters(bindings.iter().cloned())));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_in_list, bench_format_parameters);
criterion_main!(benches);
