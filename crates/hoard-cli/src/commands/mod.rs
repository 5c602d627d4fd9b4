pub mod dispatch;
pub mod fetch;
pub mod refresh;
pub mod shared;
pub mod targets;
