use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use themevars::{
    Animation, ApplyConfig, PropertyMap, Theme, ThemeRegistry, TimingFunction, Transition,
    VarKind, css_var_name, hex_to_rgb,
};

const SAMPLE_KEY: &str = "button.primary background color";

fn sample_registry(keys: usize) -> ThemeRegistry {
    let mut theme = Theme::new("Bench");
    for i in 0..keys {
        let value = if i % 2 == 0 {
            format!("#{:06x}", i * 4099)
        } else {
            format!("{i}px")
        };
        theme.set(format!("param {i}"), value);
    }
    let mut registry = ThemeRegistry::new();
    registry.add_theme(theme, true);
    registry
}

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("themevars/formatting");

    let transition = Transition::new(2).cubic_bezier(0.25, 0.1, 0.25, 1.0).delay(0.5);
    group.bench_function("Transition::to_css", |b| {
        b.iter(|| black_box(transition.to_css()));
    });

    let animation = Animation::new()
        .name("spin")
        .duration(1.5)
        .timing(TimingFunction::Linear);
    group.bench_function("Animation::to_css", |b| {
        b.iter(|| black_box(animation.to_css()));
    });

    group.finish();
}

fn bench_naming(c: &mut Criterion) {
    let mut group = c.benchmark_group("themevars/naming");

    group.bench_function("css_var_name", |b| {
        b.iter(|| black_box(css_var_name(black_box(SAMPLE_KEY), VarKind::Normal, "-")));
    });

    group.bench_function("hex_to_rgb", |b| {
        b.iter(|| black_box(hex_to_rgb(black_box("#7c3aed"))));
    });

    group.finish();
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("themevars/apply");

    for keys in [10usize, 100, 1000] {
        let registry = sample_registry(keys);
        group.throughput(Throughput::Elements(keys as u64));

        group.bench_function(format!("apply_theme/{keys}"), |b| {
            b.iter(|| {
                let mut props = PropertyMap::new();
                registry.apply_theme(None, "-", &mut props);
                black_box(props)
            });
        });

        group.bench_function(format!("render_stylesheet/{keys}"), |b| {
            let config = ApplyConfig::new();
            b.iter(|| black_box(registry.render_stylesheet(None, &config)));
        });
    }

    group.finish();
}

criterion_group!(themevars_benches, bench_formatting, bench_naming, bench_apply);
criterion_main!(themevars_benches);
