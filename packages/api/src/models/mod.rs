//! Wire models for the backend API.

mod payloads;
mod user;

pub use payloads::{LoginResponse, MessageResponse, Paginated, UserQuery, UserStatus, UserUpdate, ProfileUpdate};
pub use user::{MeResponse, UserInfo};
