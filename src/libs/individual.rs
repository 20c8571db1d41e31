use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub type IndividualsById = IndexMap<String, Individual>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[default]
    #[serde(rename = "U", other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Affected {
    #[serde(rename = "A")]
    Affected,
    #[serde(rename = "N")]
    Unaffected,
    #[default]
    #[serde(rename = "U", other)]
    Unknown,
}

impl Affected {
    pub fn is_affected(&self) -> bool {
        matches!(self, Affected::Affected)
    }
}

/// A family member, as supplied by the caller. Never mutated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Individual {
    pub individual_guid: String,
    pub individual_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub sex: Sex,
    #[serde(default)]
    pub affected: Affected,
    #[serde(default)]
    pub family_guid: Option<String>,
}

impl Individual {
    pub fn new(guid: &str, individual_id: &str, sex: Sex, affected: Affected) -> Self {
        Self {
            individual_guid: guid.to_string(),
            individual_id: individual_id.to_string(),
            display_name: None,
            sex,
            affected,
            family_guid: None,
        }
    }

    /// The name shown in track headers
    ///
    /// ```
    /// # use igvtracks::libs::individual::*;
    /// let mut indiv = Individual::new("I1", "NA19675_1", Sex::Male, Affected::Affected);
    /// assert_eq!(indiv.display_name(), "NA19675_1");
    ///
    /// indiv.display_name = Some("proband".to_string());
    /// assert_eq!(indiv.display_name(), "proband");
    /// ```
    pub fn display_name(&self) -> &str {
        match &self.display_name {
            Some(name) if !name.is_empty() => name,
            _ => &self.individual_id,
        }
    }
}
