// Slash and prefix commands
pub mod focus;
pub mod help;
