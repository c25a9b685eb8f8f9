use chrono::{NaiveDate, NaiveDateTime};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;

use edifact_orders::core::*;
use edifact_orders::edifact::{OrderGenerator, Segment, SyntaxConfig};

fn ordered_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 15)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

fn build_order(lines: u32) -> Order {
    let mut builder = OrderBuilder::new("BENCH-001", ordered_at())
        .interchange("4012345000009", "4098765000007", "100001")
        .message_reference("1")
        .currency("EUR")
        .buyer(
            AddressBuilder::new("Kunde AG")
                .line("Leopoldstr. 42")
                .line("80331 München")
                .id("4012345000009")
                .build(),
        )
        .seller(
            AddressBuilder::new("Benchmark GmbH")
                .line("Hauptstr. 1")
                .line("10115 Berlin")
                .build(),
        )
        .payment_terms(CodedText::text("Net 30"))
        .total_lines(lines as usize);

    for i in 1..=lines {
        builder = builder.add_item(
            LineItemBuilder::new(i, format!("ART{i:06}"), dec!(2), dec!(9.99))
                .supplier_item_code(format!("S-{i}"))
                .description(format!("Item {i} 5+6 o'clock"))
                .build(),
        );
    }

    builder.build().unwrap()
}

fn bench_build_order(c: &mut Criterion) {
    c.bench_function("build_order_10_lines", |b| {
        b.iter(|| black_box(build_order(10)));
    });
}

fn bench_validate(c: &mut Criterion) {
    let order = build_order(10);
    c.bench_function("validate_order_10_lines", |b| {
        b.iter(|| black_box(validate_order(black_box(&order))));
    });
}

fn bench_render_segment(c: &mut Criterion) {
    let syntax = SyntaxConfig::default();
    let segment = Segment::new("IMD", ["F", "", "", ":::Bolt 5+6 o'clock? Release"]);
    c.bench_function("render_escaped_segment", |b| {
        b.iter(|| black_box(segment.render(black_box(&syntax))));
    });
}

fn bench_generate(c: &mut Criterion) {
    let generator = OrderGenerator::new(SyntaxConfig::default());
    let order = build_order(10);
    c.bench_function("generate_10_lines", |b| {
        b.iter(|| black_box(generator.generate(black_box(&order))));
    });
}

fn bench_generate_1000_lines(c: &mut Criterion) {
    let generator = OrderGenerator::new(SyntaxConfig::default());
    let order = build_order(1000);
    c.bench_function("generate_1000_lines", |b| {
        b.iter(|| black_box(generator.generate(black_box(&order))));
    });
}

criterion_group!(
    benches,
    bench_build_order,
    bench_validate,
    bench_render_segment,
    bench_generate,
    bench_generate_1000_lines,
);
criterion_main!(benches);
