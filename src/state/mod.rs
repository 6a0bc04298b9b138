pub mod session;
pub mod tenant;
