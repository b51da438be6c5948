//! Form primitives shared by every screen.

mod button;
mod form_message;
mod input;

pub use button::{Button, ButtonVariant};
pub use form_message::{FormMessage, MessageKind};
pub use input::{Input, Label};
