//! The console state machine: committed filter, page bookkeeping, and
//! reconciliation of arriving result sets.
//!
//! The console never talks to the data source directly. Every committing
//! operation (filter apply, page move, page-size change) returns a
//! [`FetchRequest`] that the caller executes against a
//! [`ClientReader`], feeding the outcome back through
//! [`ClientConsole::apply_result`]. Requests carry a monotonically
//! increasing ticket; only the newest ticket is accepted on completion, so a
//! slow response from a superseded query can never overwrite newer state.

use chrono::Utc;

use crate::config::{ConsoleConfig, DEFAULT_PAGE_SIZE};
use crate::domain::client::Client;
use crate::dto::client::{ClientRow, ConsolePageData, FilterOptions, SelectOption};
use crate::forms::filter::ClientFilterForm;
use crate::pagination::PaginationState;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClientFilter, ClientListQuery, ClientReader, ManagerReader};
use crate::services::{ServiceError, ServiceResult};

/// One fetch the caller must run against the data source. The ticket
/// identifies this request when its completion is delivered back.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub ticket: u64,
    pub query: ClientListQuery,
}

/// Paged view over the client record set.
///
/// Owns the committed filter and the pagination cursor; everything shown to
/// the user ([`PaginationState`], display rows) is derived from those plus
/// the most recent accepted result, and rebuilt as a whole on every arrival.
#[derive(Debug, Clone)]
pub struct ClientConsole {
    config: ConsoleConfig,
    filter: ClientFilter,
    page: usize,
    per_page: usize,
    rows: Vec<ClientRow>,
    pagination: PaginationState,
    last_ticket: u64,
}

impl ClientConsole {
    /// A console showing the unfiltered record set from page 1. No fetch has
    /// been issued yet; call [`Self::initial_fetch`] for the first load.
    pub fn new(config: ConsoleConfig) -> Self {
        let per_page = if config.offers_page_size(config.default_page_size) {
            config.default_page_size
        } else {
            DEFAULT_PAGE_SIZE
        };

        Self {
            config,
            filter: ClientFilter::default(),
            page: 1,
            per_page,
            rows: Vec::new(),
            pagination: PaginationState::new(1, per_page, 0),
            last_ticket: 0,
        }
    }

    pub fn rows(&self) -> &[ClientRow] {
        &self.rows
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    pub fn filter(&self) -> &ClientFilter {
        &self.filter
    }

    /// Snapshot handed to the presentation boundary.
    pub fn page_data(&self) -> ConsolePageData {
        ConsolePageData {
            rows: self.rows.clone(),
            pagination: self.pagination.clone(),
        }
    }

    /// First load of the unfiltered record set.
    pub fn initial_fetch(&mut self) -> FetchRequest {
        self.issue_fetch()
    }

    /// Commits the filter form and issues a fetch for page 1.
    ///
    /// The page resets to 1 on every commit, even when the parsed filter is
    /// unchanged. A form that fails its validation gate changes nothing and
    /// issues nothing.
    pub fn apply_filter(&mut self, form: &ClientFilterForm) -> ServiceResult<FetchRequest> {
        let filter = form.parse().map_err(|err| {
            log::error!("Failed to validate filter form: {err}");
            ServiceError::from(err)
        })?;

        self.filter = filter;
        self.page = 1;
        Ok(self.issue_fetch())
    }

    /// Moves one page back, or does nothing when already on the first page.
    ///
    /// The cursor check covers the window where a commit has already reset
    /// the cursor to page 1 but the displayed state still reports an earlier
    /// page as current.
    pub fn previous_page(&mut self) -> Option<FetchRequest> {
        if !self.pagination.has_previous || self.page <= 1 {
            return None;
        }
        self.page -= 1;
        Some(self.issue_fetch())
    }

    /// Moves one page forward, or does nothing when already on the last page.
    pub fn next_page(&mut self) -> Option<FetchRequest> {
        if !self.pagination.has_next {
            return None;
        }
        self.page += 1;
        Some(self.issue_fetch())
    }

    /// Switches to one of the offered page sizes and refetches from page 1.
    /// A size outside the offered set does nothing.
    pub fn set_page_size(&mut self, size: usize) -> Option<FetchRequest> {
        if !self.config.offers_page_size(size) {
            log::debug!("Ignoring page size {size} outside the offered set");
            return None;
        }
        self.per_page = size;
        self.page = 1;
        Some(self.issue_fetch())
    }

    /// Delivers the outcome of a previously issued fetch.
    ///
    /// A ticket older than the newest issued one is a stale completion and
    /// is discarded whole. A failed fetch is logged and leaves the displayed
    /// rows and pagination untouched. A successful result may reveal that
    /// the cursor points past the shrunken result set; the page is then
    /// clamped to the last page and a corrective [`FetchRequest`] is
    /// returned, which the caller must execute before anything changes on
    /// screen.
    pub fn apply_result(
        &mut self,
        ticket: u64,
        result: RepositoryResult<(usize, Vec<Client>)>,
    ) -> Option<FetchRequest> {
        if ticket != self.last_ticket {
            log::debug!(
                "Discarding stale fetch completion: ticket {ticket}, newest {}",
                self.last_ticket
            );
            return None;
        }

        let (total, clients) = match result {
            Ok(payload) => payload,
            Err(err) => {
                log::error!("Client fetch failed: {err}");
                return None;
            }
        };

        let total_pages = if total == 0 {
            1
        } else {
            total.div_ceil(self.per_page)
        };

        if self.page > total_pages {
            self.page = total_pages;
            return Some(self.issue_fetch());
        }

        let now = Utc::now().naive_utc();
        let first_sequence = (self.page - 1) * self.per_page + 1;
        self.rows = clients
            .iter()
            .enumerate()
            .map(|(offset, client)| ClientRow::from_client(client, first_sequence + offset, now))
            .collect();
        self.pagination = PaginationState::new(self.page, self.per_page, total);

        None
    }

    fn issue_fetch(&mut self) -> FetchRequest {
        self.last_ticket += 1;
        FetchRequest {
            ticket: self.last_ticket,
            query: ClientListQuery::new()
                .filter(self.filter.clone())
                .paginate(self.page, self.per_page),
        }
    }
}

/// Executes a fetch request and any corrective follow-ups until the console
/// is idle again.
pub fn resolve_fetch<R>(
    console: &mut ClientConsole,
    repo: &R,
    request: FetchRequest,
) -> ServiceResult<()>
where
    R: ClientReader + ?Sized,
{
    let mut next = Some(request);

    while let Some(request) = next {
        let payload = repo.list_clients(request.query.clone()).map_err(|err| {
            log::error!("Client fetch failed: {err}");
            err
        })?;
        next = console.apply_result(request.ticket, Ok(payload));
    }

    Ok(())
}

/// Opens a console over the repository: builds the initial unfiltered view.
pub fn open_console<R>(repo: &R, config: ConsoleConfig) -> ServiceResult<ClientConsole>
where
    R: ClientReader + ?Sized,
{
    let mut console = ClientConsole::new(config);
    let request = console.initial_fetch();
    resolve_fetch(&mut console, repo, request)?;
    Ok(console)
}

/// Loads the picker option lists, fetched once at startup. The industry list
/// always starts with the "All" entry, whatever the data source returned.
pub fn load_filter_options<R>(repo: &R) -> ServiceResult<FilterOptions>
where
    R: ClientReader + ManagerReader + ?Sized,
{
    let industries = repo.list_industries().map_err(|err| {
        log::error!("Failed to list industries: {err}");
        err
    })?;
    let managers = repo.list_managers().map_err(|err| {
        log::error!("Failed to list managers: {err}");
        err
    })?;

    let mut industry_options = Vec::with_capacity(industries.len() + 1);
    industry_options.push(SelectOption::all_categories());
    industry_options.extend(
        industries
            .into_iter()
            .map(|name| SelectOption::new(name.clone(), name)),
    );

    Ok(FilterOptions {
        industries: industry_options,
        managers: managers.iter().map(SelectOption::from).collect(),
    })
}
