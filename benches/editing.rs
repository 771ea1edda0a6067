//! Benchmarks for editing and layout hot paths.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use parley::editor::{Command, Direction, Session};
use parley::transcript;
use parley::ui::layout;

fn sample_transcript(entries: usize) -> String {
    let mut text = String::new();
    for i in 0..entries {
        let speaker = if i % 2 == 0 { "Interviewer" } else { "Guest" };
        text.push_str(&format!(
            "{speaker}\tThis is line {i} of a fairly ordinary conversation about nothing much.\n"
        ));
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let text = sample_transcript(5_000);
    c.bench_function("parse_5000", |b| {
        b.iter(|| transcript::parse(black_box(&text)))
    });
}

fn bench_typing(c: &mut Criterion) {
    let text = sample_transcript(2_000);
    c.bench_function("type_word_with_undo", |b| {
        b.iter(|| {
            let mut session = Session::new();
            session.load(transcript::parse(&text));
            for _ in 0..500 {
                session.apply(Command::MoveCursor(Direction::Down));
            }
            session.apply(Command::ToggleField);
            for ch in "hello".chars() {
                session.apply(Command::InsertChar(black_box(ch)));
            }
            session.apply(Command::Undo)
        });
    });
}

fn bench_cursor_position(c: &mut Criterion) {
    let text = sample_transcript(2_000);
    let mut session = Session::new();
    session.load(transcript::parse(&text));
    for _ in 0..1_999 {
        session.apply(Command::MoveCursor(Direction::Down));
    }
    c.bench_function("cursor_position_last_entry", |b| {
        b.iter(|| layout::cursor_position(black_box(session.document()), 50))
    });
}

criterion_group!(benches, bench_parse, bench_typing, bench_cursor_position);
criterion_main!(benches);
