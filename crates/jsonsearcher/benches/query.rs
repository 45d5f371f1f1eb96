use codspeed_criterion_compat::{criterion_group, criterion_main, BenchmarkId, Criterion};
use jsonsearcher::{path, Searcher, Segment};
use serde_json::{json, Value};

fn document() -> Value {
    let friends: Vec<Value> = (0..1000)
        .map(|idx| json!({"name": format!("friend-{idx}"), "age": idx, "tags": ["a", "b", "c"]}))
        .collect();
    json!({
        "name": "Markity",
        "age": 16,
        "friends": friends,
        "details": {"interests": ["golang", "python"], "nested": {"a": {"b": {"c": {"d": 1}}}}}
    })
}

fn bench_construct(c: &mut Criterion) {
    let data = serde_json::to_vec(&document()).expect("Serializable document");
    c.bench_function("searcher/new", |b| {
        b.iter(|| Searcher::new(&data).expect("Valid document"));
    });
}

fn bench_query(c: &mut Criterion) {
    let searcher = Searcher::from(document());
    let paths: [(&str, &[Segment<'_>]); 5] = [
        ("root", &path![]),
        ("shallow", &path!["name"]),
        ("array", &path!["friends", 500, "tags", 2]),
        ("deep", &path!["details", "nested", "a", "b", "c", "d"]),
        ("missing", &path!["friends", 1000, "name"]),
    ];

    let mut group = c.benchmark_group("query");
    for (name, path) in paths {
        group.bench_with_input(BenchmarkId::new("query", name), path, |b, path| {
            b.iter(|| searcher.query(path).exists());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_construct, bench_query);
criterion_main!(benches);
