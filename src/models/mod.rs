//! 42 intranet resource types.
//!
//! Decoding is lenient: missing fields take defaults and unknown fields are
//! ignored, so a profile only has to be a JSON object to decode. Explicit
//! `null` on a non-optional field decodes as that field's default.

pub mod project;
pub mod user;

pub use project::{ProjectRef, ProjectStatus, ProjectUser};
pub use user::{Campus, CampusLanguage, Cursus, CursusUser, ImageVersions, Skill, User, UserImage};

use serde::{Deserialize, Deserializer};

/// Decode an explicit `null` the same way as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
