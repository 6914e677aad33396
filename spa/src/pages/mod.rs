pub mod login;
pub mod register;
pub mod reservations;
pub mod session_detail;
pub mod sessions;
