pub mod offset_segment;
pub mod segment;

pub use offset_segment::OffsetSegment;
pub use segment::Segment;
