//! # BoxKit Cut Tools
//!
//! Cut-path geometry for flat-panel laser-cut box templates. Given panel
//! dimensions and material properties, these tools compute the exact vector
//! paths a cutter consumes:
//!
//! - **Dasher**: subdivides a segment into evenly-scaled perforation dashes,
//!   or drives a path through an interlocking finger-joint zigzag offset by
//!   the material thickness
//! - **Twist Lock**: parametric circular tab/slot closure geometry with
//!   conditional arc sweep selection and an optional perforated fold line
//! - **Path model**: the `M L H V A Z` command vocabulary the tools emit,
//!   with exact SVG arc-flag semantics
//!
//! Everything is a pure computation over immutable inputs; styling, file
//! emission, and panel-layout recipes live with the callers.

pub mod dasher;
pub mod error;
pub mod path;
pub mod twist_lock;

pub use dasher::{Dasher, DasherConfig};
pub use error::{CutToolError, CutToolResult};
pub use path::{GuideMarker, PathCommand, PathData};
pub use twist_lock::{TwistLock, TwistLockConfig};
