//! One renderer per route.

pub mod about;
pub mod detail;
pub mod home;
pub mod user_form;
