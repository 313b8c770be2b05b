//! Domain logic - version rules independent of git and the filesystem

pub mod channel;
pub mod ordering;
pub mod tag;
pub mod version;

pub use channel::Channel;
pub use ordering::SortKey;
pub use tag::{Tag, TagPattern};
pub use version::{
    split_version, validate_version, validate_version_with_fix, ReleaseVersion, Version,
};
