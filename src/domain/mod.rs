//! Domain logic - pure business rules independent of git and the project API

pub mod labels;
pub mod merge_request;
pub mod remote_url;
pub mod tag;
pub mod version;

pub use labels::LabelSet;
pub use merge_request::MergeRequestRef;
pub use remote_url::push_url_from;
pub use tag::TagDescription;
pub use version::{Version, VersionBump};
