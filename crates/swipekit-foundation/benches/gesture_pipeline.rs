use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use swipekit_foundation::{
    InputModality, SwipeConfig, SwipeInputEvent, SwipeList, SwipeToReveal, SwipeableItem,
};

const MOVES_PER_DRAG_SAMPLES: &[usize] = &[4, 32, 256];
const ROW_COUNT: u32 = 256;

fn drag_events(moves: usize, modality: InputModality) -> Vec<SwipeInputEvent> {
    let mut events = Vec::with_capacity(moves + 2);
    events.push(SwipeInputEvent::down(modality, 400.0));
    for step in 0..moves {
        let x = 400.0 - (step as f32 + 1.0) * (300.0 / moves as f32);
        events.push(SwipeInputEvent::moved(modality, x));
    }
    events.push(SwipeInputEvent::up(modality, None));
    events
}

fn bench_single_row(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_row_drag");
    for &moves in MOVES_PER_DRAG_SAMPLES {
        for modality in [InputModality::Touch, InputModality::Mouse] {
            let events = drag_events(moves, modality);
            group.bench_with_input(
                BenchmarkId::new(format!("{modality:?}"), moves),
                &events,
                |b, events| {
                    let mut detector = SwipeToReveal::new(SwipeConfig::default());
                    b.iter(|| {
                        for event in events {
                            black_box(detector.handle_event(*event));
                        }
                        detector.request_close();
                    });
                },
            );
        }
    }
    group.finish();
}

fn bench_list_dispatch(c: &mut Criterion) {
    let events = drag_events(16, InputModality::Touch);
    c.bench_function("list_dispatch_last_row", |b| {
        let mut list = SwipeList::new();
        for id in 0..ROW_COUNT {
            list.push(SwipeableItem::new(
                id,
                SwipeToReveal::new(SwipeConfig::default()),
                |_: &u32| {},
            ));
        }
        let target = ROW_COUNT - 1;
        b.iter(|| {
            for event in &events {
                black_box(list.dispatch(&target, *event));
            }
            list.close_all();
        });
    });
}

criterion_group!(benches, bench_single_row, bench_list_dispatch);
criterion_main!(benches);
