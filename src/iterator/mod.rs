// Iterator and Composite patterns
//
// - playlist: ordered/shuffled traversal and a cursor that can remove songs
// - tree: file/folder composite with a depth-first iterator

pub mod playlist;
pub mod tree;

pub use playlist::{Playlist, PlaylistCursor, PlaylistIter, Song};
pub use tree::{Component, ComponentIter};

/// Misuse of a removing cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IteratorError {
    #[error("remove() called before next()")]
    RemoveBeforeNext,
    #[error("remove() already called for the current element")]
    AlreadyRemoved,
}
