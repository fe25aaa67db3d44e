//! Wire shapes and their explicit conversions to and from entities.

pub mod cinema;
pub mod endereco;
pub mod filme;
pub mod sessao;
