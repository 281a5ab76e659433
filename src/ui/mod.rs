// src/ui/mod.rs

pub mod combobox;
pub mod panel;
pub mod slider;
pub mod switch;
