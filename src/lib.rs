//! Paged, filterable browser over client records.
//!
//! The crate turns raw filter input into a canonical [`repository::ClientListQuery`],
//! hands it to a data-source boundary ([`repository::ClientReader`]), and keeps
//! pagination bookkeeping consistent with a result set whose size can change
//! after every filter edit. See [`services::console::ClientConsole`] for the
//! state machine and [`forms::filter::ClientFilterForm`] for input gating.

pub mod config;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod pagination;
pub mod repository;
pub mod services;
