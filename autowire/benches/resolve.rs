use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fibre_autowire::{object, vars, Arguments, Container, Injectable, Param, Result};
use std::sync::Arc;

// --- Fixtures ---

struct Leaf;

impl Injectable for Leaf {
  const NAME: &'static str = "Leaf";

  fn construct(_: &mut Arguments) -> Result<Self> {
    Ok(Leaf)
  }
}

struct Node {
  _leaf: Arc<Leaf>,
  _label: String,
}

impl Injectable for Node {
  const NAME: &'static str = "Node";

  fn constructor() -> Option<Vec<Param>> {
    Some(vec![
      Param::object::<Leaf>("leaf"),
      Param::value("label").with_default(String::from("node")),
    ])
  }

  fn construct(args: &mut Arguments) -> Result<Self> {
    Ok(Node {
      _leaf: args.next()?,
      _label: args.next_value()?,
    })
  }
}

fn container() -> Container {
  let container = Container::new();
  container.register::<Leaf>().register::<Node>();
  container.bind("a", "b").bind("b", "c").bind("c", "Node");
  container.instance("cached", object(Leaf));
  container
}

// --- Benchmark Functions ---

fn bench_resolve(c: &mut Criterion) {
  let container = container();
  let mut group = c.benchmark_group("resolve");

  group.bench_function("cached_instance", |b| {
    b.iter(|| black_box(container.get(black_box("cached")).unwrap()))
  });
  group.bench_function("autowired_class", |b| {
    b.iter(|| black_box(container.get(black_box("Node")).unwrap()))
  });
  group.bench_function("alias_chain", |b| {
    b.iter(|| black_box(container.get(black_box("a")).unwrap()))
  });
  group.bench_function("named_arguments", |b| {
    b.iter(|| {
      let vars = vars! { "label" => String::from("bench") };
      black_box(container.make(black_box("Node"), vars).unwrap())
    })
  });

  group.finish();
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
