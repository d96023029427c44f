pub mod directory;
pub mod embeds;
pub mod format;
pub mod threads;
