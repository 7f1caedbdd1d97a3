#![forbid(unsafe_code)]

pub mod canon;
pub mod card;
pub mod cli;
pub mod insight;
pub mod logging;
pub mod panel;
pub mod progress;
pub mod render;
pub mod status;
pub mod track;
pub mod tracker;
