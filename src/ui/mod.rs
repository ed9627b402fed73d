pub mod icons;
pub mod message;
pub mod prompt;

pub use prompt::SelectPrompter;
