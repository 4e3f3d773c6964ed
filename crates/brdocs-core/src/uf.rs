use std::fmt;
use std::str::FromStr;

use brdocs_canonical::ValidationError;
use serde::{Deserialize, Serialize};

/// Brazilian federative units (26 states and the Federal District).
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Uf {
    /// Acre
    AC,
    /// Alagoas
    AL,
    /// Amapá
    AP,
    /// Amazonas
    AM,
    /// Bahia
    BA,
    /// Ceará
    CE,
    /// Distrito Federal
    DF,
    /// Espírito Santo
    ES,
    /// Goiás
    GO,
    /// Maranhão
    MA,
    /// Mato Grosso
    MT,
    /// Mato Grosso do Sul
    MS,
    /// Minas Gerais
    MG,
    /// Pará
    PA,
    /// Paraíba
    PB,
    /// Paraná
    PR,
    /// Pernambuco
    PE,
    /// Piauí
    PI,
    /// Rio de Janeiro
    RJ,
    /// Rio Grande do Norte
    RN,
    /// Rio Grande do Sul
    RS,
    /// Rondônia
    RO,
    /// Roraima
    RR,
    /// Santa Catarina
    SC,
    /// São Paulo
    SP,
    /// Sergipe
    SE,
    /// Tocantins
    TO,
}

impl Uf {
    /// Every unit, in alphabetical order of name.
    pub const ALL: [Uf; 27] = [
        Uf::AC,
        Uf::AL,
        Uf::AP,
        Uf::AM,
        Uf::BA,
        Uf::CE,
        Uf::DF,
        Uf::ES,
        Uf::GO,
        Uf::MA,
        Uf::MT,
        Uf::MS,
        Uf::MG,
        Uf::PA,
        Uf::PB,
        Uf::PR,
        Uf::PE,
        Uf::PI,
        Uf::RJ,
        Uf::RN,
        Uf::RS,
        Uf::RO,
        Uf::RR,
        Uf::SC,
        Uf::SP,
        Uf::SE,
        Uf::TO,
    ];

    /// Two-letter abbreviation.
    pub fn short(self) -> &'static str {
        match self {
            Uf::AC => "AC",
            Uf::AL => "AL",
            Uf::AP => "AP",
            Uf::AM => "AM",
            Uf::BA => "BA",
            Uf::CE => "CE",
            Uf::DF => "DF",
            Uf::ES => "ES",
            Uf::GO => "GO",
            Uf::MA => "MA",
            Uf::MT => "MT",
            Uf::MS => "MS",
            Uf::MG => "MG",
            Uf::PA => "PA",
            Uf::PB => "PB",
            Uf::PR => "PR",
            Uf::PE => "PE",
            Uf::PI => "PI",
            Uf::RJ => "RJ",
            Uf::RN => "RN",
            Uf::RS => "RS",
            Uf::RO => "RO",
            Uf::RR => "RR",
            Uf::SC => "SC",
            Uf::SP => "SP",
            Uf::SE => "SE",
            Uf::TO => "TO",
        }
    }

    /// Full name in Portuguese.
    pub fn name(self) -> &'static str {
        match self {
            Uf::AC => "Acre",
            Uf::AL => "Alagoas",
            Uf::AP => "Amapá",
            Uf::AM => "Amazonas",
            Uf::BA => "Bahia",
            Uf::CE => "Ceará",
            Uf::DF => "Distrito Federal",
            Uf::ES => "Espírito Santo",
            Uf::GO => "Goiás",
            Uf::MA => "Maranhão",
            Uf::MT => "Mato Grosso",
            Uf::MS => "Mato Grosso do Sul",
            Uf::MG => "Minas Gerais",
            Uf::PA => "Pará",
            Uf::PB => "Paraíba",
            Uf::PR => "Paraná",
            Uf::PE => "Pernambuco",
            Uf::PI => "Piauí",
            Uf::RJ => "Rio de Janeiro",
            Uf::RN => "Rio Grande do Norte",
            Uf::RS => "Rio Grande do Sul",
            Uf::RO => "Rondônia",
            Uf::RR => "Roraima",
            Uf::SC => "Santa Catarina",
            Uf::SP => "São Paulo",
            Uf::SE => "Sergipe",
            Uf::TO => "Tocantins",
        }
    }
}

impl FromStr for Uf {
    type Err = ValidationError;

    /// Accepts the abbreviation in any case, surrounding whitespace ignored.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim();
        if wanted.is_empty() {
            return Err(ValidationError::EmptyValue { field: "UF" });
        }
        Uf::ALL
            .into_iter()
            .find(|uf| uf.short().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::NotFound {
                field: "UF",
                value: wanted.to_owned(),
            })
    }
}

impl fmt::Display for Uf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short())
    }
}
