//! Pagination module
//!
//! Turns a filtered, offset-paginated collection endpoint into an eager
//! "fetch everything" call ([`Cursor::all`]) or a lazy item-by-item
//! iterator ([`ItemCursor::next`]).
//!
//! # Overview
//!
//! A [`ListRequest`] describes the collection. A [`Cursor`] re-builds that
//! request for every page with its own `offset` and `limit`, and reads the
//! collection size back from the pagination headers. Because the reported
//! size may change between pages of an unsorted filtered listing, the
//! cursor always decides whether to continue from the latest value.

mod cursor;
mod types;

pub use cursor::{Cursor, ItemCursor};
pub use types::{ListRequest, FETCH_ALL, FILTER_PARAM, LIMIT_PARAM, OFFSET_PARAM};
