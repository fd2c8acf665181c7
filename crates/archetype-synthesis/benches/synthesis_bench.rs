use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use archetype_core::config::SynthesisConfig;
use archetype_core::context::ContextPath;
use archetype_core::{CharacterisationFactor, Directionality, FlowKey, FlowRecord};
use archetype_synthesis::{children_of, FrequencyWeighting, HierarchyIndex, LciaMethod};

/// ~2K CFs: 40 substances, each with 1 root, 8 subcompartments and
/// 6 long-term splits per subcompartment.
fn build_method() -> LciaMethod {
    let mut cfs = Vec::new();
    for s in 0..40 {
        let record = FlowRecord {
            name: format!("substance {s}"),
            unit: "kilogram".to_string(),
            flow_type: Directionality::Emission,
            categories: vec![],
        };
        let mut push = |context: Vec<String>, value: f64| {
            let code = format!("{s}-{}", context.join("/"));
            cfs.push(CharacterisationFactor::new(
                FlowKey::new("biosphere3", code),
                &record,
                ContextPath::from(context),
                value,
            ));
        };
        push(vec!["air".to_string()], 1.0);
        for sub in 0..8 {
            push(vec!["air".to_string(), format!("sub {sub}")], sub as f64 + 1.0);
            for lt in 0..6 {
                push(
                    vec!["air".to_string(), format!("sub {sub}"), format!(" split {lt}")],
                    (sub * lt) as f64 + 0.5,
                );
            }
        }
    }
    assert!(cfs.len() >= 2000, "Should have ~2K CFs, got {}", cfs.len());
    LciaMethod::from_factors(cfs)
}

fn bench_hierarchy(c: &mut Criterion) {
    let method = build_method();

    c.bench_function("hierarchy_index_build_2k", |b| {
        b.iter(|| HierarchyIndex::build(method.factors()));
    });

    c.bench_function("children_scan_all_roots_2k", |b| {
        let roots: Vec<_> = method.iter().filter(|cf| cf.level() == 1).collect();
        b.iter(|| {
            for root in &roots {
                children_of(method.factors(), root);
            }
        });
    });
}

fn bench_synthesis(c: &mut Criterion) {
    let method = build_method();
    let config = SynthesisConfig::default();

    c.bench_function("synthesize_immediate_2k", |b| {
        b.iter_batched(
            || method.clone(),
            |mut m| m.synthesize_immediate(&config),
            BatchSize::SmallInput,
        );
    });

    c.bench_function("synthesize_weighted_2k", |b| {
        b.iter_batched(
            || method.clone(),
            |mut m| m.synthesize_weighted(&config, &FrequencyWeighting::Uniform),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_hierarchy, bench_synthesis);
criterion_main!(benches);
