pub mod clock;
pub mod color;

#[cfg(feature = "utils")]
pub mod noise;
