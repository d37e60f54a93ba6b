use condflow::{conditional, Conditional};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tokio::runtime::Runtime; // To run async code within Criterion

// Using anyhow::Error, the default pipeline error type.
type BenchError = anyhow::Error;

// --- Helper: pipeline where only the last of `num_branches` matches ---
fn build_cascade(num_branches: usize, links_per_branch: usize) -> Conditional<u64, BenchError> {
  let mut builder = conditional::<u64, BenchError>();
  for i in 0..num_branches {
    let is_last = i + 1 == num_branches;
    builder = if i == 0 {
      builder.when(move |_| is_last)
    } else {
      builder.else_when(move |_| is_last)
    };
    for _ in 0..links_per_branch {
      builder = builder.then(|v| Ok(v.wrapping_add(1)));
    }
  }
  builder.end()
}

// --- Benchmark Functions ---

fn bench_branch_dispatch_overhead(c: &mut Criterion) {
  let mut group = c.benchmark_group("BranchDispatchOverhead");
  let rt = Runtime::new().unwrap();

  for num_branches in [1, 5, 10, 50].iter() {
    let pipeline = build_cascade(*num_branches, 1);

    group.throughput(Throughput::Elements(*num_branches as u64)); // conditions evaluated per run
    group.bench_with_input(BenchmarkId::from_parameter(*num_branches), num_branches, |b, _| {
      b.to_async(&rt).iter(|| {
        let p_clone = pipeline.clone();
        async move { p_clone.run(criterion::black_box(7)).await.unwrap() }
      });
    });
  }
  group.finish();
}

fn bench_consequence_chain_length(c: &mut Criterion) {
  let mut group = c.benchmark_group("ConsequenceChainLength");
  let rt = Runtime::new().unwrap();

  for num_links in [1, 10, 100].iter() {
    let pipeline = build_cascade(1, *num_links);

    group.throughput(Throughput::Elements(*num_links as u64));
    group.bench_with_input(BenchmarkId::from_parameter(*num_links), num_links, |b, _| {
      b.to_async(&rt).iter(|| {
        let p_clone = pipeline.clone();
        async move { p_clone.run(criterion::black_box(0)).await.unwrap() }
      });
    });
  }
  group.finish();
}

fn bench_async_condition(c: &mut Criterion) {
  let mut group = c.benchmark_group("AsyncCondition");
  let rt = Runtime::new().unwrap();

  for delay_us in [0u64, 10, 100].iter() {
    let delay = *delay_us;
    let pipeline = conditional::<u64, BenchError>()
      .when_async(move |v| async move {
        if delay > 0 {
          tokio::time::sleep(std::time::Duration::from_micros(delay)).await;
        }
        Ok::<_, BenchError>(v % 2 == 0)
      })
      .then(|v| Ok(v / 2))
      .otherwise()
      .then(|v| Ok(v * 3 + 1))
      .end();

    group.bench_with_input(BenchmarkId::new("delay_us", delay), delay_us, |b, _| {
      b.to_async(&rt).iter(|| {
        let p_clone = pipeline.clone();
        async move { p_clone.run(criterion::black_box(27)).await.unwrap() }
      });
    });
  }
  group.finish();
}

fn bench_builder_construction(c: &mut Criterion) {
  let mut group = c.benchmark_group("BuilderConstruction");
  for num_branches in [1, 10, 50].iter() {
    group.bench_with_input(BenchmarkId::from_parameter(*num_branches), num_branches, |b, &n| {
      b.iter(|| criterion::black_box(build_cascade(n, 3)));
    });
  }
  group.finish();
}

criterion_group!(
  benches,
  bench_branch_dispatch_overhead,
  bench_consequence_chain_length,
  bench_async_condition,
  bench_builder_construction
);
criterion_main!(benches);
