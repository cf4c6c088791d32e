use serde::Deserialize;
use utoipa::IntoParams;

use crate::features::technicians::models::{Technician, TechnicianStatus};
use crate::shared::filtering::{FilterValue, RecordFilter, SearchText, Searchable};

/// Filter configuration of the technician roster
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct TechnicianFilter {
    /// Technician status (`available`, `busy`, `inactive` or `all`)
    #[serde(default)]
    #[param(value_type = Option<String>, example = "available")]
    pub status: FilterValue<TechnicianStatus>,

    /// Case-insensitive text matched against id, name and email
    #[serde(default)]
    #[param(value_type = Option<String>, example = "johnson")]
    pub search: SearchText,
}

impl RecordFilter<Technician> for TechnicianFilter {
    fn matches(&self, technician: &Technician) -> bool {
        self.status.admits(&technician.status)
            && self.search.matches_any(&technician.search_fields())
    }
}
