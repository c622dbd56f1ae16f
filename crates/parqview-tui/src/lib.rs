pub mod layout;
pub mod panel;
pub mod theme;
pub mod widgets;
