//! Page components, one per route.

pub mod home;
pub mod login;
pub mod profile;
pub mod register;
