//! Major/minor axis search on a convex hull.
//!
//! - `major_axis`: all-pairs diameter, first maximal pair wins.
//! - `minor_axis`: normal rays from positive-side hull points onto edges ending
//!   on the non-positive side of the major axis.
//!
//! Both are single-call folds: no state survives a call.

mod major;
mod minor;

pub use major::major_axis;
pub use minor::minor_axis;
