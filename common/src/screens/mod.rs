//! Full-screen overlays.

mod welcome;

pub use welcome::{MENU_HINT, SPECTROGRAPH_HINT, VERSION_LINE, draw_welcome_screen};
