//! Source records owned by the surrounding application.
//! The reporting engine only ever reads them.

pub mod account;
pub mod dataset;
pub mod event;
pub mod participation;
pub mod profile;

pub use account::{Account, Role};
pub use dataset::Dataset;
pub use event::{Event, Urgency};
pub use participation::ParticipationRecord;
pub use profile::Profile;
