pub mod add;
pub mod compare;
pub mod fields;
pub mod latest;
pub mod list;
pub mod show;
pub mod version;

pub(crate) const NO_SESSIONS: &str = "No sessions recorded yet.";
