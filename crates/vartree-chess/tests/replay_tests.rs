use vartree_chess::{
    ChessError, ChessMove, ChessOracle, MoveRequest, load_position_from_path,
};
use vartree_core::{MoveTree, Path, TreeError};

fn fabricated(san: &str) -> ChessMove {
    ChessMove {
        from: "a1".to_string(),
        to: "a2".to_string(),
        promotion: None,
        san: san.to_string(),
        fen: "invalid".to_string(),
    }
}

#[test]
fn replaying_oracle_recorded_moves_reproduces_their_positions() {
    let mut oracle = ChessOracle::new();
    let mut tree = MoveTree::new();
    let mut path = Path::start();

    for (from, to) in [("e2", "e4"), ("c7", "c5"), ("g1", "f3")] {
        let request = MoveRequest::parse(from, to, None).expect("request parses");
        let record = oracle.play(request).expect("legal move");
        path = tree.add_move(&path, record).expect("insertion succeeds").path;
    }
    let expected = oracle.fen();

    let mut replayer = ChessOracle::new();
    load_position_from_path(&mut replayer, &tree, &path, None).expect("replay succeeds");
    assert_eq!(replayer.fen(), expected);
}

#[test]
fn replay_honors_a_custom_starting_position() {
    let start = "4k3/8/8/8/8/8/8/4K2R w K - 0 1";
    let tree: MoveTree<ChessMove> = MoveTree::new();

    let mut oracle = ChessOracle::new();
    load_position_from_path(&mut oracle, &tree, &Path::start(), Some(start))
        .expect("replay succeeds");
    assert_eq!(oracle.fen(), start);
}

#[test]
fn corrupt_first_move_diverges_at_index_zero() {
    let mut tree = MoveTree::new();
    // "e5" is valid SAN but no white first move reaches e5.
    tree.add_move(&Path::start(), fabricated("e5"))
        .expect("insertion succeeds");

    let mut oracle = ChessOracle::new();
    let err = load_position_from_path(&mut oracle, &tree, &Path::main(0), None)
        .expect_err("replay should fail");

    match err {
        ChessError::ReplayDiverged { index, source } => {
            assert_eq!(index, 0);
            assert!(matches!(*source, ChessError::StoredMoveRejected { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn corruption_deeper_in_the_line_reports_its_index() {
    let mut oracle = ChessOracle::new();
    let mut tree = MoveTree::new();

    let opening = oracle
        .play(MoveRequest::parse("e2", "e4", None).expect("request parses"))
        .expect("legal move");
    let path = tree
        .add_move(&Path::start(), opening)
        .expect("insertion succeeds")
        .path;
    let path = tree
        .add_move(&path, fabricated("Qxf9"))
        .expect("insertion succeeds")
        .path;

    let mut replayer = ChessOracle::new();
    let err = load_position_from_path(&mut replayer, &tree, &path, None)
        .expect_err("replay should fail");

    assert!(matches!(err, ChessError::ReplayDiverged { index: 1, .. }));
}

#[test]
fn replay_rejects_unresolvable_paths() {
    let tree: MoveTree<ChessMove> = MoveTree::new();
    let mut oracle = ChessOracle::new();

    let err = load_position_from_path(&mut oracle, &tree, &Path::main(0), None)
        .expect_err("replay should fail");
    assert!(matches!(
        err,
        ChessError::Tree(TreeError::UnresolvedPath { .. })
    ));
}

#[test]
fn replay_rejects_an_invalid_starting_fen() {
    let tree: MoveTree<ChessMove> = MoveTree::new();
    let mut oracle = ChessOracle::new();

    let err = load_position_from_path(&mut oracle, &tree, &Path::start(), Some("garbage"))
        .expect_err("reset should fail");
    assert!(matches!(err, ChessError::InvalidFen { .. }));
}
