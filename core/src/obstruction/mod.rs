pub mod matcher;
pub mod zone;

pub use matcher::{any_blocking, blocking_zones, is_blocking};
pub use zone::{default_blockage_zones, validate_zones, BlockageZone};
