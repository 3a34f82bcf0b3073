pub mod launches;
pub mod payloads;
pub(crate) mod response_common;
pub mod rockets;
