pub mod selection_controller;

pub use selection_controller::*;
