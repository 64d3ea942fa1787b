//! Game collaborators
//!
//! The standard tile set, a letter bag, the standard board layout and
//! board-file loading.

mod bag;
pub mod board_file;
pub mod layout;
pub mod tiles;

pub use bag::LetterBag;
pub use board_file::load_board;
pub use layout::standard_board;
