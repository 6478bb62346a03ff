pub mod chain;
pub mod cursor;

pub use chain::{build_chain, ChainNode, TraversalDirection};
pub use cursor::PathCursor;
