//! Closed value sets stored in the `Utilizador` table.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// `{value, label}` pair returned by the enum-options endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Biological sex as stored in `Utilizador.sexo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sexo {
    Masculino,
    Feminino,
    Outro,
}

impl Sexo {
    pub const ALL: [Sexo; 3] = [Sexo::Masculino, Sexo::Feminino, Sexo::Outro];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Masculino => "masculino",
            Self::Feminino => "feminino",
            Self::Outro => "outro",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Masculino => "Masculino",
            Self::Feminino => "Feminino",
            Self::Outro => "Outro",
        }
    }

    /// Parse the stored value. Matching is exact.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str() == raw)
            .ok_or(DomainError::InvalidSexo)
    }

    /// Accepted values joined for error messages.
    pub fn accepted() -> String {
        join_values(Self::ALL.iter().map(|s| s.as_str()))
    }

    pub fn options() -> Vec<EnumOption> {
        Self::ALL
            .iter()
            .map(|s| EnumOption {
                value: s.as_str(),
                label: s.label(),
            })
            .collect()
    }
}

/// Dietary regime as stored in `Utilizador.alimentacao`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alimentacao {
    #[serde(rename = "sem restrições")]
    SemRestricoes,
    #[serde(rename = "celiaco")]
    Celiaco,
    #[serde(rename = "vegetariano")]
    Vegetariano,
    #[serde(rename = "vegano")]
    Vegano,
    #[serde(rename = "pescetariano")]
    Pescetariano,
    #[serde(rename = "sem lactose")]
    SemLactose,
}

impl Alimentacao {
    pub const ALL: [Alimentacao; 6] = [
        Alimentacao::SemRestricoes,
        Alimentacao::Celiaco,
        Alimentacao::Vegetariano,
        Alimentacao::Vegano,
        Alimentacao::Pescetariano,
        Alimentacao::SemLactose,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SemRestricoes => "sem restrições",
            Self::Celiaco => "celiaco",
            Self::Vegetariano => "vegetariano",
            Self::Vegano => "vegano",
            Self::Pescetariano => "pescetariano",
            Self::SemLactose => "sem lactose",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::SemRestricoes => "Sem Restrições",
            Self::Celiaco => "Celíaco",
            Self::Vegetariano => "Vegetariano",
            Self::Vegano => "Vegano",
            Self::Pescetariano => "Pescetariano",
            Self::SemLactose => "Sem Lactose",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == raw)
            .ok_or(DomainError::InvalidAlimentacao)
    }

    pub fn accepted() -> String {
        join_values(Self::ALL.iter().map(|a| a.as_str()))
    }

    pub fn options() -> Vec<EnumOption> {
        Self::ALL
            .iter()
            .map(|a| EnumOption {
                value: a.as_str(),
                label: a.label(),
            })
            .collect()
    }
}

fn join_values<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values.collect::<Vec<_>>().join(", ")
}
