pub mod paths;
pub mod search;

pub use paths::{base_dir, relative_slash_path};
pub use search::find_files_with_suffix;
