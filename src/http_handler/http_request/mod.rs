pub mod launches_get;
pub mod payloads_get;
pub(crate) mod request_common;
pub mod rockets_get;
