pub mod categorias;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod usuarios;
