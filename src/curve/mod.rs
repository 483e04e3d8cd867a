//----------------------------------------
// curve mod
//----------------------------------------
pub mod error;
pub mod mde_curve;
pub mod render;
pub mod types;
