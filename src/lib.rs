pub mod classify;
pub mod config;
pub mod csvio;
pub mod lexicon;
pub mod progress;
pub mod split;
pub mod translate;

pub use classify::should_not_translate;
pub use csvio::{part_paths, read_table, write_table, Table};
pub use lexicon::Lexicon;
pub use split::{split_and_translate, SplitOptions, SplitReport};
pub use translate::translate_text;
