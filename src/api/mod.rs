mod auth;
mod catalogo;
pub mod client;
mod demandas;
mod proprietarios;
mod solucoes;
pub mod types;

pub use client::*;
pub use types::*;
