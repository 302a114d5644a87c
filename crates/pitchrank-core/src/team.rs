//! Team model.

use serde::{Deserialize, Serialize};

/// A team as listed for a league.
///
/// `id` is the external `team_api_id`; the long and short names are both
/// carried because match edges reference teams by short name while the
/// dashboard displays the long name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamInfo {
    pub id: i64,
    pub team_long_name: String,
    pub team_short_name: String,
}
