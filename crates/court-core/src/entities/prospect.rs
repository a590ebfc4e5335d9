use serde::{Deserialize, Serialize};

/// Biographical record for a draft-eligible player.
///
/// Every field except the identifier is optional in the source feed; missing
/// values surface as `None` rather than failing the load.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Prospect {
    pub player_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    /// Height in inches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Weight in pounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_team: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub league: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub league_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_school: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_school_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_town: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl Prospect {
    /// Overlay a bio record onto this prospect.
    ///
    /// Fields present on `bio` win; fields it lacks keep this prospect's value.
    /// The identifier is never changed.
    #[must_use]
    pub fn merged_with(&self, bio: &Self) -> Self {
        fn pick<T: Clone>(ours: &Option<T>, theirs: &Option<T>) -> Option<T> {
            theirs.clone().or_else(|| ours.clone())
        }

        Self {
            player_id: self.player_id,
            name: if bio.name.is_empty() {
                self.name.clone()
            } else {
                bio.name.clone()
            },
            first_name: pick(&self.first_name, &bio.first_name),
            last_name: pick(&self.last_name, &bio.last_name),
            birth_date: pick(&self.birth_date, &bio.birth_date),
            height: pick(&self.height, &bio.height),
            weight: pick(&self.weight, &bio.weight),
            position: pick(&self.position, &bio.position),
            current_team: pick(&self.current_team, &bio.current_team),
            league: pick(&self.league, &bio.league),
            league_type: pick(&self.league_type, &bio.league_type),
            high_school: pick(&self.high_school, &bio.high_school),
            high_school_state: pick(&self.high_school_state, &bio.high_school_state),
            home_town: pick(&self.home_town, &bio.home_town),
            home_state: pick(&self.home_state, &bio.home_state),
            home_country: pick(&self.home_country, &bio.home_country),
            nationality: pick(&self.nationality, &bio.nationality),
            photo_url: pick(&self.photo_url, &bio.photo_url),
        }
    }
}
