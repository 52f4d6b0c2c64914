//! Search page state as immutable snapshots.
//!
//! The page never mutates its model in place. Every user event or network
//! outcome becomes a [`Msg`], and [`update`] returns the next snapshot plus
//! any [`Effect`]s the caller has to run.

use crate::error::SearchError;
use crate::filters::FilterState;
use crate::models::{GolfPackage, PartySize, SearchRequest};
use crate::sorting::{sort_by_price, SortOrder};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchModel {
    pub filters: FilterState,
    pub status: SearchStatus,
    /// Results of the last successful search, already in `sort` order.
    pub results: Vec<GolfPackage>,
    pub error: Option<SearchError>,
    pub expanded: Option<u32>,
    /// Client-side price order. Incoming results are re-sorted by it, so the
    /// backend's own ranking is never shown.
    pub sort: SortOrder,
}

impl SearchModel {
    pub fn is_loading(&self) -> bool {
        self.status == SearchStatus::Loading
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.error.as_ref().map(SearchError::user_message)
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    SetMaxPrice(i64),
    SetPartySize(PartySize),
    SetLocation(String),
    Submit,
    SearchSucceeded(Vec<GolfPackage>),
    SearchFailed(SearchError),
    ToggleExpanded(u32),
    ToggleSort,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Search(SearchRequest),
}

pub fn update(model: SearchModel, msg: Msg) -> (SearchModel, Vec<Effect>) {
    let mut next = model;
    match msg {
        Msg::SetMaxPrice(price) => {
            next.filters.set_max_price(price);
            (next, vec![])
        }
        Msg::SetPartySize(size) => {
            next.filters.set_party_size(size);
            (next, vec![])
        }
        Msg::SetLocation(location) => {
            next.filters.set_location(location);
            (next, vec![])
        }
        Msg::Submit => {
            if next.is_loading() {
                return (next, vec![]);
            }
            next.status = SearchStatus::Loading;
            let request = next.filters.to_request();
            (next, vec![Effect::Search(request)])
        }
        Msg::SearchSucceeded(mut results) => {
            if !next.is_loading() {
                return (next, vec![]);
            }
            sort_by_price(&mut results, next.sort);
            next.results = results;
            next.status = SearchStatus::Success;
            next.error = None;
            next.expanded = None;
            (next, vec![])
        }
        Msg::SearchFailed(err) => {
            if !next.is_loading() {
                return (next, vec![]);
            }
            next.status = SearchStatus::Error;
            next.error = Some(err);
            (next, vec![])
        }
        Msg::ToggleExpanded(id) => {
            next.expanded = if next.expanded == Some(id) { None } else { Some(id) };
            (next, vec![])
        }
        Msg::ToggleSort => {
            next.sort = next.sort.toggled();
            sort_by_price(&mut next.results, next.sort);
            (next, vec![])
        }
    }
}
