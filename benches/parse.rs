use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use json_dom::{parse, Parser, Path};

fn telemetry_message() -> String {
    "{\"identity\":12345,\"location\":{\"latitude\":51.5047650,\"longitude\":-2.4841220},\
     \"status\":\"active\",\"tags\":[\"fixed\",\"outdoor\"],\"battery\":0.87}"
        .to_string()
}

fn array_message(size: usize) -> String {
    let mut message = String::from("[");
    for i in 0..size {
        if i > 0 {
            message.push(',');
        }
        message.push_str(&format!(
            "{{\"id\":{i},\"name\":\"item {i}\",\"price\":{i}.99,\"in_stock\":true}}"
        ));
    }
    message.push(']');
    message
}

fn benchmark_parse_message(c: &mut Criterion) {
    let message = telemetry_message();

    c.bench_function("parse_telemetry_message", |b| {
        b.iter(|| parse(black_box(&message)))
    });
}

fn benchmark_parse_arrays(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_array");

    for size in [10, 50, 100, 500].iter() {
        let message = array_message(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &message, |b, message| {
            b.iter(|| parse(black_box(message)))
        });
    }
    group.finish();
}

fn benchmark_path_resolution(c: &mut Criterion) {
    let message = telemetry_message();
    let mut parser = Parser::new();
    parser.parse(&message).unwrap();
    let latitude = Path::new("/@location/@latitude").unwrap();
    let missing = Path::new("/@location/@altitude").unwrap();

    c.bench_function("resolve_present_path", |b| {
        b.iter(|| parser.get_element(black_box(&latitude)))
    });
    c.bench_function("resolve_absent_path", |b| {
        b.iter(|| parser.contains(black_box(&missing)))
    });
}

fn benchmark_render(c: &mut Criterion) {
    let doc = parse(&array_message(100)).unwrap();

    c.bench_function("render_canonical_text", |b| b.iter(|| doc.to_string()));
}

criterion_group!(
    benches,
    benchmark_parse_message,
    benchmark_parse_arrays,
    benchmark_path_resolution,
    benchmark_render
);
criterion_main!(benches);
