pub mod consumption;
pub mod forecast;
pub mod layout;
