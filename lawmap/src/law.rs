//! Table des lois sur la vie privée, par nom de pays
//!
//! Le document source est une séquence ordonnée d'objets à une seule clé:
//!
//! ```json
//! [
//!   { "France": { "law": "...", "lawLink": "...", "regulator": "...", "description": "..." } },
//!   { "Germany": { ... } }
//! ]
//! ```
//!
//! La recherche retourne la première entrée dont la clé est exactement le nom
//! demandé (sensible à la casse). Un index nom -> position est construit au
//! chargement; la première occurrence d'un nom gagne, comme pour un parcours linéaire.
//!
//! Un objet à plusieurs clés donne plusieurs entrées (ordre alphabétique des clés).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::LawmapError;

/// Métadonnées d'une loi pour un pays
///
/// Un champ absent du document vaut une chaîne vide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LawRecord {
    /// Nom de la loi
    #[serde(alias = "lawName")]
    pub law: String,

    /// Lien vers le texte de loi
    pub law_link: String,

    /// Autorité de contrôle
    pub regulator: String,

    pub description: String,
}

/// Table des lois, ordre du document conservé
#[derive(Debug, Clone, Default)]
pub struct LawTable {
    entries: Vec<(String, LawRecord)>,
    index: HashMap<String, usize>,

    /// Entrées ignorées au chargement (non fatal)
    pub errors: Vec<LawmapError>,
}

impl LawTable {
    /// Construit la table depuis le texte JSON servi par le service.
    ///
    /// # Errors
    ///
    /// `LawmapError::InvalidLawTable` si le texte n'est pas du JSON ou si le
    /// document n'est pas un tableau. Une entrée illisible est seulement
    /// ignorée et consignée dans `errors`.
    pub fn from_json(text: &str) -> Result<Self, LawmapError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// Construit la table depuis une valeur JSON déjà décodée
    pub fn from_value(value: Value) -> Result<Self, LawmapError> {
        let Value::Array(items) = value else {
            return Err(LawmapError::invalid_law_table("expected a JSON array"));
        };

        let mut entries = Vec::with_capacity(items.len());
        let mut errors = Vec::new();

        for (position, item) in items.into_iter().enumerate() {
            let Value::Object(object) = item else {
                warn!(index = position, "Law entry is not an object, skipped");
                errors.push(LawmapError::skipped_law_entry(position, "not an object"));
                continue;
            };

            for (country, record) in object {
                match serde_json::from_value::<LawRecord>(record) {
                    Ok(record) => entries.push((country, record)),
                    Err(e) => {
                        warn!(index = position, country = %country, error = %e, "Law record skipped");
                        errors.push(LawmapError::skipped_law_entry(
                            position,
                            format!("record for {}: {}", country, e),
                        ));
                    }
                }
            }
        }

        let mut table = Self::from_entries(entries);
        table.errors = errors;
        Ok(table)
    }

    /// Construit la table depuis des paires (pays, loi) ordonnées
    pub fn from_entries(entries: Vec<(String, LawRecord)>) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, (country, _)) in entries.iter().enumerate() {
            index.entry(country.clone()).or_insert(position);
        }
        Self {
            entries,
            index,
            errors: Vec::new(),
        }
    }

    /// Loi associée au nom de pays, ou `None` si absent
    pub fn find_law_for_country(&self, country: &str) -> Option<&LawRecord> {
        let position = *self.index.get(country)?;
        self.entries.get(position).map(|(_, record)| record)
    }

    /// Pays présents, dans l'ordre du document
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(country, _)| country.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Recherche linéaire dans le document brut, sans index
///
/// Première entrée contenant exactement la clé `country`.
pub fn find_law_for_country<'a>(table: &'a [Map<String, Value>], country: &str) -> Option<&'a Value> {
    table.iter().find_map(|entry| entry.get(country))
}
