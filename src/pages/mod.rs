pub mod case_study;
pub mod home;
pub mod not_found;
