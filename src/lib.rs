pub mod error;
pub mod geometry;
pub mod math;
pub mod tessellation;

pub use error::{PolystrokeError, Result};
pub use tessellation::{tessellate, tessellate_into, EndCapStyle, JointStyle, StrokeStyle, TessellateStroke};
