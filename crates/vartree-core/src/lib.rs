mod tree;

pub use tree::comments::CommentStore;
pub use tree::error::{ReplayError, TreeError};
pub use tree::node::{Branch, MoveNode};
pub use tree::path::{Path, ROOT_BRANCH_INDEX};
pub use tree::replay::replay_along_path;
pub use tree::snapshot::{SNAPSHOT_SCHEMA_VERSION, StudySnapshot};
pub use tree::tree::{MoveInsertion, MoveTree};
