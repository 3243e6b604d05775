// Presentation binding: turns typed text into requests and outcomes into text.

pub mod prompt;
pub mod render;
