use eltax_calendar::{render_page, schedule_template, Context, FiscalYear, Language, Schedule};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

const YEAR: i32 = 2024;

fn bench_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("schedule");
    let fiscal_year = FiscalYear::new(YEAR).unwrap();
    let ctx = Context::default();

    group.bench_function("template", |b| {
        b.iter(|| schedule_template(black_box(&ctx), black_box(fiscal_year)))
    });

    let schedule = schedule_template(&ctx, fiscal_year);
    let mut raw = Vec::new();
    schedule.write_json(&mut raw).unwrap();
    let raw = String::from_utf8(raw).unwrap();

    group.bench_function("write_json", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(raw.len());
            black_box(&schedule).write_json(&mut buf).unwrap();
            buf
        })
    });

    group.bench_function("from_json", |b| {
        b.iter(|| Schedule::from_json(black_box(&raw)).unwrap())
    });
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let fiscal_year = FiscalYear::new(YEAR).unwrap();

    for (slug, language) in [("en", Language::English), ("ja", Language::Japanese)] {
        let ctx = Context::default().with_language(language);
        let ctx = ctx.clone().with_schedule(schedule_template(&ctx, fiscal_year));

        group.bench_function(slug, |b| {
            b.iter(|| render_page(black_box(&ctx), black_box(fiscal_year)).into_string())
        });
    }
}

criterion_group!(benches, bench_schedule, bench_render);
criterion_main!(benches);
