pub mod duration;
pub mod layout;
