//! Terminal front end. It renders engine state and turns key presses into
//! agent intents; all rules live in the engine.

pub mod app;
pub mod controller;
pub mod logger;
mod ui;
