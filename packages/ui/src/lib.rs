//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod client;
pub use client::{api_base_url, app_config, configure, make_client};

pub mod views;

pub const UI_CSS: Asset = asset!("/assets/ui.css");

mod navbar;
pub use navbar::{Footer, Navbar};

mod auth;
pub use auth::{
    redirect, use_admin_auth, use_auth, use_logout, use_scope_auth, use_session, AuthProvider,
    AuthState, LogoutButton,
};

pub mod validation;

pub mod otp;
pub use otp::{OtpChange, OtpDigits, OtpInput};

mod countdown;
pub use countdown::{use_countdown, Countdown, RESEND_COOLDOWN_SECS};

pub mod apply_wizard;
pub use apply_wizard::{ApplicationDraft, ApplyWizard, ApplyWizardModal, WizardStep};

pub mod markdown;

mod job_card;
pub use job_card::JobCard;

mod job_detail;
pub use job_detail::JobDetail;

mod job_filters;
pub use job_filters::JobFilters;
