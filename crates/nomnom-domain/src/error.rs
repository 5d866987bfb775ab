use crate::nutrition::{Alimentacao, Sexo};

/// Validation failures raised by domain types before anything is persisted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("Sexo inválido. Valores aceitos: {}", Sexo::accepted())]
    InvalidSexo,
    #[error("Alimentação inválida. Valores aceitos: {}", Alimentacao::accepted())]
    InvalidAlimentacao,
    #[error("Altura deve estar entre 50 e 300 cm")]
    AlturaOutOfRange,
    #[error("Peso deve estar entre 20 e 500 kg")]
    PesoOutOfRange,
    #[error("Data de nascimento inválida, use AAAA-MM-DD")]
    InvalidDataNascimento,
    #[error("Nome é obrigatório")]
    MissingNome,
    #[error("Campo obrigatório: {0}")]
    MissingField(&'static str),
    #[error("Nenhum dado fornecido para atualização")]
    EmptyUpdate,
    #[error("Nome deve ter entre 2 e 100 caracteres")]
    InvalidAccountName,
    #[error("Email inválido")]
    InvalidEmail,
    #[error("Senha deve ter no mínimo 6 caracteres")]
    PasswordTooShort,
    #[error("URL de imagem inválida")]
    InvalidPictureUrl,
    #[error("Quantidade inválida")]
    InvalidQuantity,
    #[error("limit deve estar entre 1 e 1000")]
    LimitOutOfRange,
    #[error("offset deve ser maior ou igual a 0")]
    NegativeOffset,
}
