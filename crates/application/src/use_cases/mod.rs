//! Application use cases (service calls wrapped in UI feedback).

mod enhance_image;
mod generate_note;

pub use enhance_image::*;
pub use generate_note::*;
