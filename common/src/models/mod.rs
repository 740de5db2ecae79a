pub mod locale;
pub mod role;
pub mod session;
