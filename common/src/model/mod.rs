pub mod detail;
pub mod display;
pub mod other_fee;
