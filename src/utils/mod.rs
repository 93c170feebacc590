//! Various unsorted geometrical and logical operators.

pub use self::center::center;
pub use self::circular::{angle_of, circular_distance};

mod center;
mod circular;
