mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod dashboard;
pub use dashboard::Dashboard;

mod session_guard;
pub use session_guard::SessionGuard;
