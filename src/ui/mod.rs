pub mod hud;
pub mod popup;
