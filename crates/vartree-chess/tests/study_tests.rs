use vartree_chess::{
    ChessError, MoveRequest, STARTING_FEN, Study, from_json_str, load_json, save_json,
    to_json_string,
};
use vartree_core::{Path, TreeError};

fn request(from: &str, to: &str) -> MoveRequest {
    MoveRequest::parse(from, to, None).expect("squares should parse")
}

#[test]
fn first_move_extends_the_main_line() {
    let mut study = Study::new();
    let insertion = study.play(request("e2", "e4")).expect("e4 is legal");

    assert_eq!(insertion.path, Path::main(0));
    assert!(!insertion.new_branch);
    assert_eq!(study.current_path(), &Path::main(0));

    let node = study.tree().node_at(&insertion.path).expect("node exists");
    assert_eq!(node.mv().san, "e4");
    assert_eq!(node.mv().from, "e2");
    assert_eq!(node.mv().to, "e4");
}

#[test]
fn illegal_requests_are_rejected_and_leave_the_study_unchanged() {
    let mut study = Study::new();

    let err = study
        .play(request("e2", "e5"))
        .expect_err("pawns cannot jump three squares");
    assert!(matches!(err, ChessError::IllegalMove { .. }));
    assert!(study.tree().is_empty());
    assert_eq!(study.current_path(), &Path::start());
}

#[test]
fn alternative_first_move_opens_a_root_branch() {
    let mut study = Study::new();
    study.play(request("e2", "e4")).expect("e4 is legal");

    study
        .set_current_path(Path::start())
        .expect("start is always valid");
    let insertion = study.play(request("d2", "d4")).expect("d4 is legal");

    assert_eq!(insertion.path, Path::root_branch(0, 0));
    assert!(insertion.new_branch);
    assert_eq!(study.tree().main_line().len(), 1);
    assert_eq!(study.tree().root_branches().len(), 1);

    let node = study.tree().node_at(&insertion.path).expect("node exists");
    assert_eq!(node.mv().san, "d4");
}

#[test]
fn alternative_reply_opens_a_branch_on_the_anchor_move() {
    let mut study = Study::new();
    study.play(request("e2", "e4")).expect("e4 is legal");
    study.play(request("e7", "e5")).expect("e5 is legal");

    // Back to the position after 1. e4 and try the Sicilian instead.
    study
        .set_current_path(Path::main(0))
        .expect("path resolves");
    let insertion = study.play(request("c7", "c5")).expect("c5 is legal");

    assert_eq!(insertion.path, Path::from(vec![0, 0, 0]));
    assert!(insertion.new_branch);

    // 1... e5 stays the main continuation.
    assert_eq!(study.tree().main_line()[1].mv().san, "e5");
    let branches = study.tree().main_line()[0].branches();
    assert_eq!(branches.len(), 1);
    assert_eq!(branches[0].get(0).expect("branch node").mv().san, "c5");
}

#[test]
fn replayed_positions_match_the_positions_recorded_at_insertion() {
    let mut study = Study::new();
    let mut inserted = Vec::new();

    for (from, to) in [("e2", "e4"), ("e7", "e5"), ("g1", "f3")] {
        inserted.push(study.play(request(from, to)).expect("legal move").path);
    }
    study
        .set_current_path(Path::main(0))
        .expect("path resolves");
    inserted.push(study.play(request("c7", "c5")).expect("legal move").path);

    for path in inserted {
        let recorded = study.tree().node_at(&path).expect("node exists").mv().fen.clone();
        let replayed = study.position_at(&path).expect("replay succeeds");
        assert_eq!(replayed, recorded);
    }
}

#[test]
fn promotion_requests_populate_the_promotion_field() {
    let mut study = Study::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("valid FEN");
    let req = MoveRequest::parse("a7", "a8", Some('q')).expect("request parses");

    let insertion = study.play(req).expect("promotion is legal");
    let node = study.tree().node_at(&insertion.path).expect("node exists");

    assert_eq!(node.mv().promotion.as_deref(), Some("q"));
    assert!(node.mv().san.starts_with("a8=Q"));
}

#[test]
fn castling_is_requested_by_king_destination() {
    let mut study = Study::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").expect("valid FEN");

    let legal = study.legal_moves().expect("position replays");
    assert!(legal.contains(&request("e1", "g1")));

    let insertion = study.play(request("e1", "g1")).expect("castling is legal");
    let node = study.tree().node_at(&insertion.path).expect("node exists");
    assert_eq!(node.mv().san, "O-O");
    assert_eq!(node.mv().to, "g1");
}

#[test]
fn legal_moves_at_the_start_position() {
    let study = Study::new();
    assert_eq!(study.legal_moves().expect("start replays").len(), 20);
    assert_eq!(study.position(), STARTING_FEN);
    assert_eq!(
        study.current_position().expect("start replays"),
        STARTING_FEN
    );
}

#[test]
fn set_current_path_rejects_unresolvable_targets() {
    let mut study = Study::new();
    study.play(request("e2", "e4")).expect("e4 is legal");

    let err = study
        .set_current_path(Path::main(5))
        .expect_err("path does not resolve");
    assert!(matches!(
        err,
        ChessError::Tree(TreeError::UnresolvedPath { .. })
    ));

    study
        .set_current_path(Path::start())
        .expect("start is always valid");
}

#[test]
fn from_fen_rejects_garbage() {
    let err = Study::from_fen("not a position").expect_err("parse should fail");
    assert!(matches!(err, ChessError::InvalidFen { .. }));
}

#[test]
fn snapshot_json_round_trips_with_comments_and_flip_state() {
    let mut study = Study::new();
    study.play(request("d2", "d4")).expect("d4 is legal");
    study.play(request("d7", "d5")).expect("d5 is legal");

    study
        .set_current_path(Path::main(0))
        .expect("path resolves");
    let branch = study.play(request("g8", "f6")).expect("Nf6 is legal");

    study.set_comment(&branch.path, "The Indian defences start here.");
    study.set_flipped(true);

    let json = to_json_string(&study).expect("study serializes");
    let restored = from_json_str(&json).expect("study deserializes");

    assert_eq!(restored.tree(), study.tree());
    assert_eq!(restored.current_path(), &branch.path);
    assert!(restored.is_flipped());
    assert_eq!(
        restored.comment_at(&branch.path),
        Some("The Indian defences start here.")
    );
}

#[test]
fn snapshot_json_uses_the_persisted_field_names() {
    let mut study = Study::new();
    study.play(request("e2", "e4")).expect("e4 is legal");

    let json = to_json_string(&study).expect("study serializes");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");

    for key in ["position", "moveTree", "rootBranches", "currentPath", "isFlipped", "comments"] {
        assert!(value.get(key).is_some(), "missing key {key}");
    }
    assert_eq!(value["moveTree"][0]["move"]["san"], "e4");
    assert_eq!(value["currentPath"][0], 0);
}

#[test]
fn study_files_round_trip_on_disk() {
    let mut study = Study::new();
    study.play(request("c2", "c4")).expect("c4 is legal");
    study.set_comment(&Path::main(0), "English.");

    let dir = tempfile::tempdir().expect("temp dir");
    let file = dir.path().join("study.json");

    save_json(&file, &study).expect("save succeeds");
    let restored = load_json(&file).expect("load succeeds");

    assert_eq!(restored.tree(), study.tree());
    assert_eq!(restored.comment_at(&Path::main(0)), Some("English."));
}

#[test]
fn restoring_a_snapshot_with_an_empty_branch_fails() {
    let json = format!(
        r#"{{
            "position": "{STARTING_FEN}",
            "moveTree": [{{"move": {{"from": "e2", "to": "e4", "san": "e4", "fen": "{STARTING_FEN}"}}, "branches": [[]]}}],
            "rootBranches": [],
            "currentPath": [0],
            "isFlipped": false,
            "comments": {{}}
        }}"#
    );

    let err = from_json_str(&json).expect_err("validation should fail");
    assert!(matches!(err, ChessError::Tree(TreeError::EmptyBranch)));
}
