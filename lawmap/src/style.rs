//! Style des polygones pays

use serde::{Deserialize, Serialize};

use crate::feature::CountryFeature;

/// Style de tracé d'un polygone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    pub color: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

impl Style {
    pub fn new(color: impl Into<String>, weight: Option<u32>) -> Self {
        Self {
            color: color.into(),
            weight,
        }
    }
}

/// Deux styles possibles: le pays sélectionné est toujours le style distinct
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRule {
    pub selected: Style,
    pub default: Style,
}

impl Default for StyleRule {
    fn default() -> Self {
        Self {
            selected: Style::new("blue", Some(2)),
            default: Style::new("white", None),
        }
    }
}

impl StyleRule {
    /// Fonction pure de (feature, sélection courante).
    ///
    /// La comparaison se fait sur le nom d'affichage: sans sélection, tout
    /// pays prend le style par défaut.
    pub fn resolve(&self, feature: &CountryFeature, selection: Option<&CountryFeature>) -> &Style {
        match selection {
            Some(selected) if selected.name == feature.name => &self.selected,
            _ => &self.default,
        }
    }
}
