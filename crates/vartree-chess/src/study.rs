use vartree_core::{CommentStore, MoveInsertion, MoveTree, Path, StudySnapshot, TreeError};

use crate::{
    error::ChessError,
    moves::{ChessMove, MoveRequest},
    oracle::{ChessOracle, STARTING_FEN},
    replay::load_position_from_path,
};

#[derive(Debug, Clone)]
/// One editable study: a starting position, the branching move history, the
/// path currently on display, board orientation, and annotations.
///
/// All mutation funnels through [`Study::play`], which re-derives the
/// current board from the tree before consulting the oracle — the tree is
/// the single source of truth, never a cached board.
pub struct Study {
    position: String,
    tree: MoveTree<ChessMove>,
    current_path: Path,
    is_flipped: bool,
    comments: CommentStore,
}

impl Default for Study {
    fn default() -> Self {
        Self::new()
    }
}

impl Study {
    /// Empty study from the standard starting position.
    pub fn new() -> Self {
        Study {
            position: STARTING_FEN.to_string(),
            tree: MoveTree::new(),
            current_path: Path::start(),
            is_flipped: false,
            comments: CommentStore::new(),
        }
    }

    /// Empty study from an arbitrary starting FEN.
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        ChessOracle::from_fen(fen)?;
        let mut study = Self::new();
        study.position = fen.to_string();
        Ok(study)
    }

    /// Starting position FEN.
    pub fn position(&self) -> &str {
        &self.position
    }

    /// The move history being edited.
    pub fn tree(&self) -> &MoveTree<ChessMove> {
        &self.tree
    }

    /// Path of the node currently on display.
    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    /// Board orientation flag.
    pub fn is_flipped(&self) -> bool {
        self.is_flipped
    }

    /// Set the board orientation flag.
    pub fn set_flipped(&mut self, flipped: bool) {
        self.is_flipped = flipped;
    }

    /// Flip the board orientation flag.
    pub fn toggle_flipped(&mut self) {
        self.is_flipped = !self.is_flipped;
    }

    /// Stored annotations.
    pub fn comments(&self) -> &CommentStore {
        &self.comments
    }

    /// Annotate the node at `path`.
    pub fn set_comment(&mut self, path: &Path, text: impl Into<String>) {
        self.comments.set(path, text);
    }

    /// Annotation at `path`, if any.
    pub fn comment_at(&self, path: &Path) -> Option<&str> {
        self.comments.get(path)
    }

    /// Move the view to another node. The start path is always valid; any
    /// other path must resolve within the tree.
    pub fn set_current_path(&mut self, path: Path) -> Result<(), ChessError> {
        if !path.is_start() && self.tree.node_at(&path).is_none() {
            return Err(ChessError::Tree(TreeError::UnresolvedPath { path }));
        }
        self.current_path = path;
        Ok(())
    }

    /// Oracle positioned at the node `path` addresses.
    fn oracle_at(&self, path: &Path) -> Result<ChessOracle, ChessError> {
        let mut oracle = ChessOracle::new();
        load_position_from_path(&mut oracle, &self.tree, path, Some(&self.position))?;
        Ok(oracle)
    }

    /// FEN of the position at a path.
    pub fn position_at(&self, path: &Path) -> Result<String, ChessError> {
        Ok(self.oracle_at(path)?.fen())
    }

    /// FEN of the position currently on display.
    pub fn current_position(&self) -> Result<String, ChessError> {
        self.position_at(&self.current_path)
    }

    /// Requests for every legal move at the current node.
    pub fn legal_moves(&self) -> Result<Vec<MoveRequest>, ChessError> {
        Ok(self.oracle_at(&self.current_path)?.legal_moves())
    }

    /// Try a move at the current node: replay there, ask the oracle, insert
    /// the validated record, and advance the view to the new node.
    ///
    /// An illegal request or an unresolvable current path rejects the whole
    /// operation with the tree untouched.
    pub fn play(&mut self, request: MoveRequest) -> Result<MoveInsertion, ChessError> {
        let mut oracle = self.oracle_at(&self.current_path)?;
        let record = oracle.play(request)?;

        let insertion = self.tree.add_move(&self.current_path, record)?;
        self.current_path = insertion.path.clone();
        Ok(insertion)
    }

    /// Serialize the full study state.
    pub fn snapshot(&self) -> StudySnapshot<ChessMove> {
        StudySnapshot::capture(
            self.position.clone(),
            &self.tree,
            &self.current_path,
            self.is_flipped,
            &self.comments,
        )
    }

    /// Rebuild a study from a snapshot, checking structural invariants and
    /// that the starting position parses. An unresolvable `currentPath` is
    /// kept as-is; navigation falls back to the start position at lookup
    /// time.
    pub fn from_snapshot(snapshot: StudySnapshot<ChessMove>) -> Result<Self, ChessError> {
        snapshot.validate()?;
        ChessOracle::from_fen(&snapshot.position)?;

        Ok(Study {
            tree: snapshot.restore_tree(),
            position: snapshot.position,
            current_path: snapshot.current_path,
            is_flipped: snapshot.is_flipped,
            comments: snapshot.comments,
        })
    }
}
