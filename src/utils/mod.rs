pub mod camera;
pub mod download;
pub mod storage;
pub mod time;

pub use download::trigger_binary_download;
