//! Contenu de la popup affichée sur le pays sélectionné

use std::fmt;

use serde::Serialize;

use crate::geometry::LatLng;
use crate::law::LawRecord;

/// Texte affiché tant que la table des lois n'est pas chargée
pub const LOADING_TEXT: &str = "Loading...";

/// Texte affiché quand aucun enregistrement ne correspond au pays
pub const NO_DATA_TEXT: &str = "No law data available";

/// Popup ancrée au point représentatif du pays sélectionné
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Popup {
    pub position: LatLng,
    pub body: PopupBody,
}

/// Corps de la popup selon l'état du chargement et le résultat de la recherche
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PopupBody {
    /// Table des lois en cours de chargement
    Loading,

    /// Échec du chargement, message affiché tel quel
    Error { message: String },

    /// Loi trouvée pour le pays
    Law { country: String, record: LawRecord },

    /// Pays sans loi connue
    NoData { country: String },
}

impl fmt::Display for PopupBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => f.write_str(LOADING_TEXT),
            Self::Error { message } => write!(f, "Error: {}", message),
            Self::Law { country, record } => {
                writeln!(f, "{}", country)?;
                writeln!(f, "Law: {}", record.law)?;
                writeln!(f, "Regulator: {}", record.regulator)?;
                write!(f, "Description: {}", record.description)
            }
            Self::NoData { country } => {
                writeln!(f, "{}", country)?;
                f.write_str(NO_DATA_TEXT)
            }
        }
    }
}

impl fmt::Display for Popup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "@ {}", self.position)?;
        write!(f, "{}", self.body)
    }
}
