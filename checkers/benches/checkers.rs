use checkers::{Board, KingRule, Rules, Square};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const BOARDS: [(&str, &str); 5] = [
    (
        "initial",
        ".b.b.b.b\nb.b.b.b.\n.b.b.b.b\n........\n........\nw.w.w.w.\n.w.w.w.w\nw.w.w.w.\n",
    ),
    (
        "open",
        ".b.b...b\n..b.....\n...b.b..\n..w.....\n.....b..\nw...w...\n.w......\n..w.....\n",
    ),
    (
        "chains",
        "........\n..b.b.b.\n........\n..b.b.b.\n........\n..b.b.b.\n...w....\n........\n",
    ),
    (
        "kings",
        "...B....\n........\n.w...w..\n........\n...W....\n..b.b...\n........\n.B......\n",
    ),
    (
        "crowded",
        ".b.b.b.b\nb.b.b.b.\n.w.b.b.b\nb.b.w.w.\n.w.b.b.w\nw.w.w.w.\n.w.w.w.w\nw.w.w.w.\n",
    ),
];

fn boards() -> impl Iterator<Item = (&'static str, Board)> {
    BOARDS
        .iter()
        .map(|&(name, text)| (name, Board::from_text(text).unwrap()))
}

fn gen_all(board: &Board, rules: &Rules) -> usize {
    board
        .occupied()
        .into_iter()
        .map(|sq| board.get_moves_with(rules, sq, false).len())
        .sum()
}

fn bench_gen_moves(c: &mut Criterion) {
    for (group_name, king) in [
        ("gen_moves_short", KingRule::Short),
        ("gen_moves_flying", KingRule::Flying),
    ] {
        let rules = Rules::new().with_king(king);
        let mut group = c.benchmark_group(group_name);
        for (name, board) in boards() {
            group.bench_function(name, |b| b.iter(|| black_box(gen_all(&board, &rules))));
        }
        group.finish();
    }
}

fn bench_make_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("make_move");
    let rules = Rules::new().with_king(KingRule::Short);
    for (name, board) in boards() {
        let moves: Vec<(Square, Vec<Square>)> = board
            .occupied()
            .into_iter()
            .flat_map(|sq| {
                board
                    .get_moves_with(&rules, sq, false)
                    .sequences()
                    .into_iter()
                    .map(move |path| (sq, path))
            })
            .collect();
        group.bench_function(name, |b| {
            b.iter(|| {
                for (origin, path) in &moves {
                    black_box(board.make_move_with(&rules, *origin, path).unwrap());
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_gen_moves, bench_make_move);
criterion_main!(benches);
