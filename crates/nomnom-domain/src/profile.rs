//! Field rules for the nutrition profile (`Utilizador`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::nutrition::{Alimentacao, Sexo};

pub const ALTURA_RANGE_CM: (f64, f64) = (50.0, 300.0);
pub const PESO_RANGE_KG: (f64, f64) = (20.0, 500.0);

pub fn validate_altura(altura: f64) -> Result<f64, DomainError> {
    let (min, max) = ALTURA_RANGE_CM;
    if altura.is_finite() && (min..=max).contains(&altura) {
        Ok(altura)
    } else {
        Err(DomainError::AlturaOutOfRange)
    }
}

pub fn validate_peso(peso: f64) -> Result<f64, DomainError> {
    let (min, max) = PESO_RANGE_KG;
    if peso.is_finite() && (min..=max).contains(&peso) {
        Ok(peso)
    } else {
        Err(DomainError::PesoOutOfRange)
    }
}

/// Parse an ISO `YYYY-MM-DD` birth date.
pub fn parse_data_nascimento(raw: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| DomainError::InvalidDataNascimento)
}

pub fn validate_nome(nome: &str) -> Result<&str, DomainError> {
    let trimmed = nome.trim();
    if trimmed.is_empty() {
        Err(DomainError::MissingNome)
    } else {
        Ok(trimmed)
    }
}

/// Profile fields as received from clients, before validation.
///
/// Blank strings count as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProfile {
    pub nome: Option<String>,
    pub data_nascimento: Option<String>,
    pub altura: Option<f64>,
    pub peso: Option<f64>,
    pub sexo: Option<String>,
    pub alimentacao: Option<String>,
}

/// Validated partial write of a `Utilizador` row. Absent fields are left
/// untouched by an update.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_nascimento: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altura: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peso: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sexo: Option<Sexo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alimentacao: Option<Alimentacao>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        self.nome.is_none()
            && self.data_nascimento.is_none()
            && self.altura.is_none()
            && self.peso.is_none()
            && self.sexo.is_none()
            && self.alimentacao.is_none()
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl RawProfile {
    /// Validate whichever fields are present.
    pub fn validate(self) -> Result<ProfilePatch, DomainError> {
        Ok(ProfilePatch {
            nome: present(self.nome).map(|n| n.trim().to_owned()),
            data_nascimento: present(self.data_nascimento)
                .map(|d| parse_data_nascimento(&d))
                .transpose()?,
            altura: self.altura.map(validate_altura).transpose()?,
            peso: self.peso.map(validate_peso).transpose()?,
            sexo: present(self.sexo).map(|s| Sexo::parse(&s)).transpose()?,
            alimentacao: present(self.alimentacao)
                .map(|a| Alimentacao::parse(&a))
                .transpose()?,
        })
    }

    /// Validate a full profile: every field must be present.
    pub fn validate_complete(self) -> Result<ProfilePatch, DomainError> {
        let patch = self.validate()?;
        if patch.nome.is_none() {
            return Err(DomainError::MissingNome);
        }
        let required = [
            ("altura", patch.altura.is_some()),
            ("data_nascimento", patch.data_nascimento.is_some()),
            ("peso", patch.peso.is_some()),
            ("alimentacao", patch.alimentacao.is_some()),
            ("sexo", patch.sexo.is_some()),
        ];
        if let Some((field, _)) = required.iter().find(|(_, ok)| !ok) {
            return Err(DomainError::MissingField(field));
        }
        Ok(patch)
    }
}
