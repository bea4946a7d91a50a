use criterion::{black_box, criterion_group, criterion_main, Criterion};

use wordform_core::{
    check_answer, generate_questions, Accepted, Catalog, QuizSession, SelectionPolicy,
    DEFAULT_PAGE_SIZE,
};

fn bench_check_answer(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_answer");

    let single = Accepted::from("competition");
    let many = Accepted::from(vec!["organization", "organisation", "organizing", "organising"]);

    group.bench_function("single_match", |b| {
        b.iter(|| check_answer(black_box("  Competition "), black_box(&single)))
    });

    group.bench_function("single_miss", |b| {
        b.iter(|| check_answer(black_box("competitor"), black_box(&single)))
    });

    group.bench_function("set_last_member", |b| {
        b.iter(|| check_answer(black_box("ORGANISING"), black_box(&many)))
    });

    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("session");
    let catalog = Catalog::builtin(DEFAULT_PAGE_SIZE).unwrap();

    group.bench_function("generate_full_catalog", |b| {
        b.iter(|| {
            generate_questions(
                black_box(catalog.entries()),
                SelectionPolicy::Rotating,
                black_box(3),
            )
        })
    });

    group.bench_function("submit_page", |b| {
        let mut session = QuizSession::initialize(&catalog, 1, SelectionPolicy::Priority);
        let answers: Vec<String> = session
            .questions()
            .iter()
            .map(|q| q.answer.primary().to_uppercase())
            .collect();
        for (i, a) in answers.into_iter().enumerate() {
            session.set_answer(i, a).unwrap();
        }
        b.iter(|| black_box(&mut session).submit())
    });

    group.finish();
}

criterion_group!(benches, bench_check_answer, bench_session);
criterion_main!(benches);
