//! Specifies population types which keep track of scored candidate solutions.

mod ranked;
pub use self::ranked::*;

mod snapshot;
pub use self::snapshot::*;
