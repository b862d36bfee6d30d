pub mod attendance;
pub mod photo_cache;
pub mod session;
