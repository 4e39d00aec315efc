pub mod fallback;
pub mod prompt;
pub mod providers;
