// Template recommendation: keyword signals, static catalog, rule-based engine.
// The engine is pure and synchronous; handlers only adapt it to HTTP.

pub mod catalog;
pub mod engine;
pub mod handlers;
pub mod keywords;
