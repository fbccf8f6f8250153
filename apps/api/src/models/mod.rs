pub mod profile;
pub mod role;
