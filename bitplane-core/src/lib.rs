#![crate_name = "bitplane_core"]

pub mod alphabet;
pub mod bit_plane;
pub mod codecs;
pub mod diff;
pub mod error;
pub mod image_wrapper;
mod logger;
mod macros;
pub mod pixel;
pub mod transform;
mod utilities;
