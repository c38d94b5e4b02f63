#![allow(clippy::not_unsafe_ptr_arg_deref, clippy::type_complexity, clippy::too_many_arguments)]

pub mod config;
pub mod raycast;
pub mod renderer;
pub mod utils;
pub mod window;

#[cfg(all(target_os = "linux", feature = "window"))]
pub mod app;

#[cfg(all(target_os = "linux", feature = "window"))]
pub mod scene;

pub use anyhow;
pub use fastrand;
pub use glam;
pub use instant;
pub use log;

#[cfg(feature = "utils")]
pub use noise;

#[macro_export]
macro_rules! error_return {
    ($($arg:tt)+) => { { $crate::log::error!($($arg)+); return; } };
}

#[macro_export]
macro_rules! error_continue {
    ($($arg:tt)+) => { { $crate::log::error!($($arg)+); continue; } };
}
