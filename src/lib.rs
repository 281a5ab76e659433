// src/lib.rs

pub mod config;
pub mod constants;
pub mod errors;
pub mod tweaks;
pub mod ui;

pub use tweaks::{
    declare::{attach, Tweakable},
    TweakContext, TweakValue,
};
pub use ui::panel::TweakPanel;
