//! Domain model (trigger descriptors, arguments, responses, profile snapshot).

pub mod argument;
pub mod errors;
pub mod ids;
pub mod profile;
pub mod response;
pub mod trigger;

pub use self::argument::TriggerArgument;
pub use self::errors::{ContentError, ReloadError, StoreError};
pub use self::ids::InvocationId;
pub use self::profile::{Command, CronEntry, ProfileConfig, ProfileSnapshot};
pub use self::response::BackendResponse;
pub use self::trigger::{TriggerDescriptor, TriggerKind};
