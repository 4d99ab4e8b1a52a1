// ABOUTME: Defines the Person record, its writable fields, and the enumerated city and profession sets.
// ABOUTME: Validation of write payloads lives here so every caller enforces the same rules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Highest age accepted on write.
pub const MAX_AGE: u32 = 120;

/// Errors raised when a write payload fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("age {0} is out of range (0..={MAX_AGE})")]
    AgeOutOfRange(u32),
}

/// Returned when text does not name a known city or profession.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Cities a person can be registered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    #[serde(rename = "São Paulo")]
    SaoPaulo,
    #[serde(rename = "Rio de Janeiro")]
    RioDeJaneiro,
    #[serde(rename = "Belo Horizonte")]
    BeloHorizonte,
    #[serde(rename = "Curitiba")]
    Curitiba,
}

impl City {
    pub const ALL: [City; 4] = [
        City::SaoPaulo,
        City::RioDeJaneiro,
        City::BeloHorizonte,
        City::Curitiba,
    ];

    /// Display text, which is also the stored representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            City::SaoPaulo => "São Paulo",
            City::RioDeJaneiro => "Rio de Janeiro",
            City::BeloHorizonte => "Belo Horizonte",
            City::Curitiba => "Curitiba",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for City {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        City::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "city",
                value: s.to_string(),
            })
    }
}

/// Professions a person can be registered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Profession {
    #[serde(rename = "Engenheiro")]
    Engenheiro,
    #[serde(rename = "Médico")]
    Medico,
    #[serde(rename = "Professor")]
    Professor,
    #[serde(rename = "Advogado")]
    Advogado,
}

impl Profession {
    pub const ALL: [Profession; 4] = [
        Profession::Engenheiro,
        Profession::Medico,
        Profession::Professor,
        Profession::Advogado,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Profession::Engenheiro => "Engenheiro",
            Profession::Medico => "Médico",
            Profession::Professor => "Professor",
            Profession::Advogado => "Advogado",
        }
    }
}

impl fmt::Display for Profession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profession {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Profession::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "profession",
                value: s.to_string(),
            })
    }
}

/// A stored person row. The id is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub age: u32,
    pub city: City,
    pub profession: Profession,
}

/// The four writable fields of a person, as submitted for insert or update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonFields {
    pub name: String,
    pub age: u32,
    pub city: City,
    pub profession: Profession,
}

impl PersonFields {
    pub fn new(name: impl Into<String>, age: u32, city: City, profession: Profession) -> Self {
        Self {
            name: name.into(),
            age,
            city,
            profession,
        }
    }

    /// Check the payload and return the trimmed name that should be persisted.
    pub fn validate(&self) -> Result<&str, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.age > MAX_AGE {
            return Err(ValidationError::AgeOutOfRange(self.age));
        }
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_trims_name() {
        let fields = PersonFields::new("  Ana ", 30, City::SaoPaulo, Profession::Engenheiro);
        assert_eq!(fields.validate().unwrap(), "Ana");
    }

    #[test]
    fn validate_rejects_blank_names() {
        for name in ["", "   ", "\t\n"] {
            let fields = PersonFields::new(name, 30, City::Curitiba, Profession::Professor);
            assert_eq!(fields.validate(), Err(ValidationError::EmptyName));
        }
    }

    #[test]
    fn validate_age_bounds() {
        let ok = PersonFields::new("Bia", MAX_AGE, City::Curitiba, Profession::Medico);
        assert!(ok.validate().is_ok());

        let zero = PersonFields::new("Bebê", 0, City::Curitiba, Profession::Medico);
        assert!(zero.validate().is_ok());

        let too_old = PersonFields::new("Matusalém", 121, City::Curitiba, Profession::Medico);
        assert_eq!(too_old.validate(), Err(ValidationError::AgeOutOfRange(121)));
    }

    #[test]
    fn city_text_round_trips() {
        for city in City::ALL {
            assert_eq!(city.as_str().parse::<City>().unwrap(), city);
        }
        let err = "Recife".parse::<City>().unwrap_err();
        assert_eq!(err.to_string(), "unknown city: Recife");
    }

    #[test]
    fn profession_text_round_trips() {
        for profession in Profession::ALL {
            assert_eq!(profession.as_str().parse::<Profession>().unwrap(), profession);
        }
        assert!("Astronauta".parse::<Profession>().is_err());
    }

    #[test]
    fn serde_uses_display_text() {
        let fields = PersonFields::new("Ana", 30, City::SaoPaulo, Profession::Medico);
        let json = serde_json::to_value(&fields).unwrap();
        assert_eq!(json["city"], "São Paulo");
        assert_eq!(json["profession"], "Médico");

        let parsed: PersonFields = serde_json::from_value(serde_json::json!({
            "name": "Caio",
            "age": 41,
            "city": "Rio de Janeiro",
            "profession": "Advogado"
        }))
        .unwrap();
        assert_eq!(parsed.city, City::RioDeJaneiro);
        assert_eq!(parsed.profession, Profession::Advogado);
    }

    #[test]
    fn serde_rejects_unknown_city() {
        let result: Result<PersonFields, _> = serde_json::from_value(serde_json::json!({
            "name": "Caio",
            "age": 41,
            "city": "Lisboa",
            "profession": "Advogado"
        }));
        assert!(result.is_err());
    }
}
