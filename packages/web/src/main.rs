use dioxus::prelude::*;

use store::AppConfig;
use ui::AuthProvider;
use views::{
    About, AdminDashboard, AdminJobs, AdminLayout, AdminLogin, Dashboard, ForgotPassword, Home,
    Login, NotFound, Profile, Register, ResetPassword, SiteLayout, UserLayout, VerifyOtp,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/verify-otp?:email")]
        VerifyOtp { email: String },
        #[route("/forgot-password")]
        ForgotPassword {},
        #[route("/reset-password?:email&:token")]
        ResetPassword { email: String, token: String },
        #[route("/admin/login")]
        AdminLogin {},
        #[layout(UserLayout)]
            #[route("/dashboard")]
            Dashboard {},
            #[route("/profile")]
            Profile {},
        #[end_layout]
        #[layout(AdminLayout)]
            #[route("/admin")]
            AdminDashboard {},
            #[route("/admin/jobs")]
            AdminJobs {},
        #[end_layout]
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Embedded `jobboard.toml`, with the build-time `JOBBOARD_API_URL` override.
fn load_config() -> AppConfig {
    let config = match AppConfig::from_toml(include_str!("../jobboard.toml")) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("invalid {}: {e}; using defaults", AppConfig::filename());
            AppConfig::default()
        }
    };
    match option_env!("JOBBOARD_API_URL") {
        Some(url) if !url.trim().is_empty() => config.with_base_url(url.trim()),
        _ => config,
    }
}

fn main() {
    ui::configure(load_config());
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_hook(|| tracing::info!(base_url = %ui::api_base_url(), "jobboard frontend starting"));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::UI_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}
