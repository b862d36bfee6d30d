pub mod admin;
pub mod attendance;
pub mod home;
pub mod login;

pub use admin::AdminPage;
pub use attendance::AttendancePage;
pub use home::HomePage;
pub use login::LoginPage;
