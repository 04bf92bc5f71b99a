use criterion::{criterion_group, criterion_main, Criterion};
use tintty::cmd::{DynSetForeground8, ResetStyle, SetForeground24};
use tintty::color::AnsiColor;
use tintty::gate::{Choice, Gate, StreamKind};
use tintty::style::Style;

pub fn run_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    group.bench_function("static-24bit", |b| {
        b.iter(|| format!("{}hello{}", SetForeground24::<255, 0, 0>, ResetStyle))
    });

    group.bench_function("dynamic-8bit", |b| {
        b.iter(|| format!("{}hello{}", DynSetForeground8(196), ResetStyle))
    });

    let style = Style::default()
        .bold()
        .with_foreground(AnsiColor::Red)
        .with_background(AnsiColor::BrightWhite);
    group.bench_function("style", |b| {
        b.iter(|| format!("{}hello{}", style, style.undo()))
    });

    let open = Gate::with_choice(Choice::Always);
    let shut = Gate::with_choice(Choice::Never);
    group.bench_function("gated-open", |b| {
        b.iter(|| format!("{}", open.apply(StreamKind::Stdout, &style, "hello")))
    });
    group.bench_function("gated-shut", |b| {
        b.iter(|| format!("{}", shut.apply(StreamKind::Stdout, &style, "hello")))
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
