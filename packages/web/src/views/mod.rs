mod layout;
pub use layout::{AdminLayout, SiteLayout, UserLayout};

mod home;
pub use home::Home;

mod about;
pub use about::About;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod verify_otp;
pub use verify_otp::VerifyOtp;

mod forgot_password;
pub use forgot_password::ForgotPassword;

mod reset_password;
pub use reset_password::ResetPassword;

mod dashboard;
pub use dashboard::Dashboard;

mod profile;
pub use profile::Profile;

mod admin_login;
pub use admin_login::AdminLogin;

mod admin_dashboard;
pub use admin_dashboard::AdminDashboard;

mod admin_jobs;
pub use admin_jobs::AdminJobs;

mod not_found;
pub use not_found::NotFound;
