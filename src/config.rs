//! Console configuration and crate-wide defaults.

use serde::Deserialize;

/// Page sizes the console offers to the user.
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [5, 10, 15, 20, 30];

/// Page size used until the user picks another one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Minimum trimmed length before a name input participates in the filter.
pub const MIN_NAME_SEARCH_LEN: usize = 3;

#[derive(Clone, Debug, Deserialize)]
/// Tunables consumed by [`crate::services::console::ClientConsole`].
pub struct ConsoleConfig {
    /// Page size applied at startup. Must be one of `page_size_options`.
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    /// Page sizes offered by the page-size picker.
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_page_size_options() -> Vec<usize> {
    PAGE_SIZE_OPTIONS.to_vec()
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            page_size_options: default_page_size_options(),
        }
    }
}

impl ConsoleConfig {
    /// Returns true if `size` is one of the offered page sizes.
    pub fn offers_page_size(&self, size: usize) -> bool {
        self.page_size_options.contains(&size)
    }
}
