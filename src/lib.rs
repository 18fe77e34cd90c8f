// The binary in main.rs only owns the terminal; everything it drives lives
// here so integration tests can reach it as `wordflip::*`.

pub mod app;
pub mod config;
pub mod event;
pub mod flashcard;
pub mod navigation;
pub mod ui;
pub mod vocab;
