#![allow(
    clippy::unwrap_used,
    clippy::panic,
    clippy::expect_used,
    clippy::print_stdout
)]

/// Comparison benchmarks: query-state codec vs url crate form_urlencoded
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use query_state::{MemoryHost, ParamMap, ParamValue, QueryPairs, QueryState, QueryStateOptions};

const SIMPLE_QUERY: &str = "page=2&sort=price&dir=asc";
const ENCODED_QUERY: &str = "q=hello+world&tags%5B%5D=rust%2Curl&name=Fran%C3%A7ois";

fn bench_parse_simple_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_simple");

    group.bench_function("query_state", |b| {
        b.iter(|| QueryPairs::parse(black_box(SIMPLE_QUERY)));
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| {
            url::form_urlencoded::parse(black_box(SIMPLE_QUERY).as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect::<Vec<_>>()
        });
    });

    group.finish();
}

fn bench_parse_encoded_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_encoded");

    group.bench_function("query_state", |b| {
        b.iter(|| QueryPairs::parse(black_box(ENCODED_QUERY)));
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| {
            url::form_urlencoded::parse(black_box(ENCODED_QUERY).as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect::<Vec<_>>()
        });
    });

    group.finish();
}

fn bench_serialize_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");
    let pairs = QueryPairs::parse(ENCODED_QUERY);

    group.bench_function("query_state", |b| {
        b.iter(|| black_box(&pairs).serialize());
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| {
            let mut out = url::form_urlencoded::Serializer::new(String::new());
            for (k, v) in black_box(&pairs).iter() {
                out.append_pair(k, v);
            }
            out.finish()
        });
    });

    group.finish();
}

fn bench_manager_mutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("manager");

    group.bench_function("set_all_and_read", |b| {
        b.iter(|| {
            let host = MemoryHost::new("https://app.dev/list?page=1");
            let mut state = QueryState::new(host, QueryStateOptions::default());
            state.set_all(
                ParamMap::from([
                    ("page", ParamValue::from("2")),
                    ("tags", ParamValue::from(["rust", "url"])),
                ]),
                None,
            );
            black_box(state.get_values())
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_simple_all,
    bench_parse_encoded_all,
    bench_serialize_all,
    bench_manager_mutation
);
criterion_main!(benches);
