use serde::Deserialize;
use validator::Validate;

use crate::config::MIN_NAME_SEARCH_LEN;
use crate::domain::types::ManagerId;
use crate::forms::FormError;
use crate::repository::ClientFilter;

#[derive(Debug, Default, Deserialize, Validate)]
/// Raw filter panel inputs exactly as entered by the user.
///
/// Edits land here without side effects; nothing reaches the data source
/// until the form is committed through
/// [`crate::services::console::ClientConsole::apply_filter`].
pub struct ClientFilterForm {
    /// Partial client name.
    #[serde(default)]
    #[validate(length(max = 255))]
    pub name: String,
    /// Identifier chosen in the owner picker, if any.
    #[serde(default)]
    pub manager_id: Option<i32>,
    /// Minimum annual revenue, as raw text.
    #[serde(default)]
    #[validate(length(max = 32))]
    pub revenue: String,
    /// Selected industry; the empty value means all categories.
    #[serde(default)]
    pub industry: String,
}

impl ClientFilterForm {
    /// Gates each raw field independently into the canonical filter.
    ///
    /// A validation failure rejects the whole form and no filter is
    /// produced. An under-length name or malformed revenue is not an error:
    /// the field is simply treated as absent, so a filter is still built
    /// from whatever fields pass their gates.
    pub fn parse(&self) -> Result<ClientFilter, FormError> {
        self.validate()?;

        let name = Some(self.name.trim())
            .filter(|s| s.chars().count() >= MIN_NAME_SEARCH_LEN)
            .map(str::to_string);

        let manager = self
            .manager_id
            .map(ManagerId::new)
            .transpose()
            .map_err(|_| FormError::InvalidManagerId)?;

        let min_revenue = self
            .revenue
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| *value > 0.0);

        let industry = Some(self.industry.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(ClientFilter {
            name,
            manager,
            min_revenue,
            industry,
        })
    }
}
