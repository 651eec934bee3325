pub mod list;
pub mod show;
pub mod stats;
pub mod status;
pub mod submit;
pub mod watch;
