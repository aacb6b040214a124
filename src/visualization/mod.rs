pub mod trace;
#[cfg(feature = "viewer")]
pub mod viewer3d;
