mod error;
mod io;
mod moves;
mod oracle;
mod replay;
mod study;

pub use error::ChessError;
pub use io::{from_json_str, load_json, save_json, to_json_string};
pub use moves::{ChessMove, MoveRequest};
pub use oracle::{ChessOracle, STARTING_FEN};
pub use replay::load_position_from_path;
pub use study::Study;
