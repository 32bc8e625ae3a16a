pub mod format;
pub mod fs;
