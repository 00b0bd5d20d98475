pub mod architecture;
pub mod errors;
pub mod logging;
