pub mod layout;
pub mod navbar;
