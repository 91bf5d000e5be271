use criterion::{black_box, criterion_group, criterion_main, Criterion};

use brainrot_deck::audio::SilentAudio;
use brainrot_deck::cards::{CardSpec, DeckStore};
use brainrot_deck::core::{DeckRng, RandomPolicy, SessionConfig};
use brainrot_deck::navigation::NavigationController;
use brainrot_deck::session::{CardView, Renderer, Session, UiEvent};

fn deck(n: usize) -> DeckStore {
    DeckStore::new(
        (0..n)
            .map(|i| CardSpec::new(format!("Card {i}"), format!("Script {i}")))
            .collect(),
    )
    .unwrap()
}

struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, view: &CardView) {
        black_box(view);
    }
}

fn bench_controller(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller");

    for (name, policy) in [
        ("random_exclude_current", RandomPolicy::ExcludeCurrent),
        ("random_allow_repeat", RandomPolicy::AllowRepeat),
    ] {
        // Two cards is the worst case for rejection sampling.
        let mut nav = NavigationController::new(deck(2), DeckRng::new(42)).with_policy(policy);
        group.bench_function(name, |b| b.iter(|| black_box(nav.random())));
    }

    let mut nav = NavigationController::new(deck(5), DeckRng::new(42));
    group.bench_function("next", |b| b.iter(|| black_box(nav.next())));

    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let mut session = Session::new(
        deck(5),
        SessionConfig::new().with_seed(42),
        SilentAudio,
        NullRenderer,
    );
    c.bench_function("session_next", |b| b.iter(|| black_box(session.handle(UiEvent::Next))));
}

criterion_group!(benches, bench_controller, bench_session);
criterion_main!(benches);
