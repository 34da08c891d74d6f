mod command;
mod error;
mod render;
mod session;

pub use command::Command;
pub use error::ConsoleError;
pub use render::{render_counts, render_item, render_state, render_user, render_weather};
pub use session::Session;
