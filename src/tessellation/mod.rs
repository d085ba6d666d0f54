mod end_cap;
mod joint;
mod stroke_style;
mod tessellate_stroke;
mod triangle_fan;

pub use end_cap::{resolve_end_caps, PathEnds};
pub use joint::{effective_joint_style, resolve_joint, JointBoundary};
pub use stroke_style::{
    EndCapStyle, JointStyle, StrokeStyle, MITER_MIN_ANGLE, ROUND_ANGLE_LOWER_BOUND, ROUND_MIN_ANGLE,
};
pub use tessellate_stroke::{tessellate, tessellate_into, triangles, TessellateStroke};
pub use triangle_fan::{emit_triangle_fan, fan_sweep, fan_triangle_count};
