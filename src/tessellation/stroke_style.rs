use crate::error::{Result, TessellationError};

/// Default threshold below which a mitered joint is drawn beveled (~20°).
pub const MITER_MIN_ANGLE: f64 = 0.349_066;

/// Default minimum angle covered by each triangle of a round fan (~10°).
pub const ROUND_MIN_ANGLE: f64 = 0.174_533;

/// Smallest accepted round fan angle. A full turn stays under ~6300 triangles.
pub const ROUND_ANGLE_LOWER_BOUND: f64 = 1e-3;

/// How two adjacent segments are connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JointStyle {
    /// Sharp corners. Falls back to [`JointStyle::Bevel`] when the corner is
    /// too acute, so the miter point cannot extend arbitrarily far out.
    #[default]
    Miter,
    /// Flattened corners.
    Bevel,
    /// Rounded corners.
    Round,
}

/// How the ends of the path are terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndCapStyle {
    /// Flat ends that stop at the end points.
    #[default]
    Butt,
    /// Flat ends extended past the end points by half the thickness.
    Square,
    /// Half-disc ends.
    Round,
    /// The path is closed: the last point connects back to the first and that
    /// corner uses the joint style. Don't repeat the first point at the end.
    Joint,
}

/// Style parameters for polyline stroke tessellation.
#[derive(Debug, Clone, Copy)]
pub struct StrokeStyle {
    thickness: f64,
    joint_style: JointStyle,
    end_cap_style: EndCapStyle,
    allow_overlap: bool,
    miter_min_angle: f64,
    round_min_angle: f64,
}

impl StrokeStyle {
    /// Creates a new stroke style with miter joints and butt caps.
    ///
    /// # Errors
    ///
    /// Returns an error if `thickness` is not a positive finite number.
    pub fn new(thickness: f64) -> Result<Self> {
        if !(thickness.is_finite() && thickness > 0.0) {
            return Err(TessellationError::InvalidParameters(format!(
                "stroke thickness must be positive and finite, got {thickness}"
            ))
            .into());
        }
        Ok(Self {
            thickness,
            joint_style: JointStyle::default(),
            end_cap_style: EndCapStyle::default(),
            allow_overlap: false,
            miter_min_angle: MITER_MIN_ANGLE,
            round_min_angle: ROUND_MIN_ANGLE,
        })
    }

    /// Sets the joint style.
    #[must_use]
    pub fn with_joint_style(mut self, joint_style: JointStyle) -> Self {
        self.joint_style = joint_style;
        self
    }

    /// Sets the end cap style.
    #[must_use]
    pub fn with_end_cap_style(mut self, end_cap_style: EndCapStyle) -> Self {
        self.end_cap_style = end_cap_style;
        self
    }

    /// Lets bevel and round joints intersect their inner edges as infinite
    /// lines, so the inner corner may reach past short segments.
    #[must_use]
    pub fn with_allow_overlap(mut self, allow_overlap: bool) -> Self {
        self.allow_overlap = allow_overlap;
        self
    }

    /// Sets the wrapped corner angle (radians) below which miters become bevels.
    ///
    /// # Errors
    ///
    /// Returns an error if `angle` is negative or not finite.
    pub fn with_miter_min_angle(mut self, angle: f64) -> Result<Self> {
        if !(angle.is_finite() && angle >= 0.0) {
            return Err(TessellationError::InvalidParameters(format!(
                "miter minimum angle must be non-negative and finite, got {angle}"
            ))
            .into());
        }
        self.miter_min_angle = angle;
        Ok(self)
    }

    /// Sets the minimum angle (radians) covered by one round fan triangle.
    ///
    /// # Errors
    ///
    /// Returns an error if `angle` is not finite or is below
    /// [`ROUND_ANGLE_LOWER_BOUND`].
    pub fn with_round_min_angle(mut self, angle: f64) -> Result<Self> {
        if !(angle.is_finite() && angle >= ROUND_ANGLE_LOWER_BOUND) {
            return Err(TessellationError::InvalidParameters(format!(
                "round minimum angle must be finite and at least {ROUND_ANGLE_LOWER_BOUND}, got {angle}"
            ))
            .into());
        }
        self.round_min_angle = angle;
        Ok(self)
    }

    /// Returns the stroke thickness.
    #[must_use]
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Returns half the stroke thickness.
    #[must_use]
    pub fn half_thickness(&self) -> f64 {
        self.thickness * 0.5
    }

    #[must_use]
    pub fn joint_style(&self) -> JointStyle {
        self.joint_style
    }

    #[must_use]
    pub fn end_cap_style(&self) -> EndCapStyle {
        self.end_cap_style
    }

    #[must_use]
    pub fn allow_overlap(&self) -> bool {
        self.allow_overlap
    }

    #[must_use]
    pub fn miter_min_angle(&self) -> f64 {
        self.miter_min_angle
    }

    #[must_use]
    pub fn round_min_angle(&self) -> f64 {
        self.round_min_angle
    }
}
