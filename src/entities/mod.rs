pub mod cinema;
pub mod endereco;
pub mod filme;
pub mod sessao;
