//! Benchmarks for page rendering and pointer tracking
//!
//! Run with: cargo bench

use std::cell::RefCell;
use std::rc::Rc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use linkmee::content::SITE;
use linkmee::effects::ParticlesOptions;
use linkmee::page::{
    render, Bounds, EffectCallback, EffectEngine, PageController, PageState, PointerHandler,
    PointerSample, PointerSource,
};
use linkmee::server::shell::render_document;
use linkmee::ThemeMode;

struct NoPointer;

impl PointerSource for NoPointer {
    type Subscription = ();

    fn subscribe(&self, _handler: PointerHandler) {}

    fn unsubscribe(&self, _subscription: ()) {}
}

struct ReadyEngine;

impl EffectEngine for ReadyEngine {
    fn start(&self, on_done: EffectCallback) {
        on_done(Ok(()));
    }
}

fn mounted(theme: ThemeMode) -> PageState {
    let mut state = PageState {
        theme,
        ..PageState::default()
    };
    state.mark_mounted();
    state.mark_effect_ready();
    state
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for theme in [ThemeMode::Dark, ThemeMode::Light] {
        let state = mounted(theme);
        group.bench_function(format!("view_{}", theme), |b| {
            b.iter(|| render(black_box(&state), &SITE, 2025))
        });

        let view = render(&state, &SITE, 2025).unwrap();
        group.bench_function(format!("document_{}", theme), |b| {
            b.iter(|| render_document(black_box(&view)))
        });
    }

    group.bench_function("particles_json", |b| {
        b.iter(|| ParticlesOptions::for_theme(black_box(ThemeMode::Dark)).to_json().unwrap())
    });

    group.finish();
}

fn bench_pointer(c: &mut Criterion) {
    let store = Rc::new(RefCell::new(PageState::default()));
    let mut page = PageController::new(store, NoPointer, ReadyEngine);
    page.initialize();

    let bounds = Some(Bounds {
        left: 0.0,
        top: 0.0,
        width: 1280.0,
        height: 720.0,
    });

    c.bench_function("pointer_move", |b| {
        let mut x = 0.0;
        b.iter(|| {
            x = (x + 1.0) % 1280.0;
            page.on_pointer_move(black_box(PointerSample {
                client_x: x,
                client_y: 360.0,
                bounds,
            }))
        })
    });
}

criterion_group!(benches, bench_render, bench_pointer);
criterion_main!(benches);
