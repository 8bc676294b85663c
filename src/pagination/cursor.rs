//! Offset cursors over paginated collection endpoints
//!
//! The Tracker API reports the size of a filtered collection in the
//! `X-Tracker-Pagination-Total` header, but the total is not stable across
//! pages of an unsorted, filtered listing. Cursors therefore refresh the
//! total from every response and decide whether to continue from the most
//! recent value.

use super::types::{ListRequest, FETCH_ALL, LIMIT_PARAM, OFFSET_PARAM};
use crate::error::{Error, Result};
use crate::http::{ApiResponse, Transport};
use futures::stream::{self, Stream};
use serde::de::DeserializeOwned;
use std::collections::VecDeque;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

// ============================================================================
// Cursor
// ============================================================================

/// Tracks offset, limit and total for one filtered collection.
///
/// A limit of [`FETCH_ALL`] makes the cursor issue a sizing request on
/// construction and then ask for the whole collection in a single page.
pub struct Cursor<T> {
    transport: Arc<dyn Transport>,
    request: ListRequest,
    limit: usize,
    offset: usize,
    total: Option<usize>,
    done: bool,
    _item: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> Cursor<T> {
    /// Create a cursor. Only a [`FETCH_ALL`] cursor performs I/O here.
    pub async fn new(
        transport: Arc<dyn Transport>,
        request: ListRequest,
        limit: usize,
    ) -> Result<Self> {
        let mut cursor = Self {
            transport,
            request,
            limit,
            offset: 0,
            total: None,
            done: false,
            _item: PhantomData,
        };

        if limit == FETCH_ALL {
            cursor.size().await?;
        }

        Ok(cursor)
    }

    /// Learn the collection size so the next request can cover all of it
    async fn size(&mut self) -> Result<()> {
        let mut request = self.request.build();
        request.set_query(OFFSET_PARAM, "0");
        request.set_query(LIMIT_PARAM, "1");

        let response = self.transport.send(&request).await?;
        if let Some(pagination) = response.pagination {
            self.total = Some(pagination.total);
            self.limit = pagination.total;
        }

        debug!(
            "Sized cursor for {}: total {:?}",
            self.request.path(),
            self.total
        );
        Ok(())
    }

    /// Fetch the next page into `acc`, returning how many items it held.
    ///
    /// Returns `Ok(0)` without I/O once the collection is exhausted.
    pub async fn fetch_next<A: Extend<T>>(&mut self, acc: &mut A) -> Result<usize> {
        if self.is_exhausted() {
            return Ok(0);
        }

        let mut request = self.request.build();
        request.set_query(OFFSET_PARAM, self.offset.to_string());
        if self.limit != FETCH_ALL {
            request.set_query(LIMIT_PARAM, self.limit.to_string());
        }

        let response = self.transport.send(&request).await?;
        let page: Vec<T> = response.json()?;
        let fetched = page.len();
        acc.extend(page);

        self.advance(fetched, &response);
        Ok(fetched)
    }

    /// Fetch every remaining page. Any error discards what was fetched.
    pub async fn all(mut self) -> Result<Vec<T>> {
        let mut items = Vec::new();
        while !self.is_exhausted() {
            self.fetch_next(&mut items).await?;
        }
        Ok(items)
    }
}

impl<T> Cursor<T> {
    fn advance(&mut self, fetched: usize, response: &ApiResponse) {
        let pagination = response.pagination;

        // The server may cap the page below what was asked for.
        let applied = pagination.and_then(|p| p.limit).filter(|l| *l > 0);
        let step = match self.limit {
            FETCH_ALL => fetched,
            limit => applied.map_or(limit, |applied| applied.min(limit)),
        };
        self.offset += step;

        if let Some(pagination) = pagination {
            if let Some(previous) = self.total.filter(|t| *t != pagination.total) {
                debug!(
                    "Total for {} changed from {} to {}",
                    self.request.path(),
                    previous,
                    pagination.total
                );
            }
            self.total = Some(pagination.total);
        }

        if fetched == 0 || fetched < step {
            self.done = true;
        }

        debug!(
            "Fetched {} items from {} (offset {}, total {:?})",
            fetched,
            self.request.path(),
            self.offset,
            self.total
        );
    }

    /// True once the server has signalled there is nothing left to fetch
    pub fn is_exhausted(&self) -> bool {
        self.done || self.total.is_some_and(|total| self.offset >= total)
    }

    /// Offset of the next page
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Page size requested per fetch
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Most recently reported collection size
    pub fn total(&self) -> Option<usize> {
        self.total
    }

    /// Request builder this cursor pages through
    pub fn request(&self) -> &ListRequest {
        &self.request
    }
}

impl<T> fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("request", &self.request)
            .field("limit", &self.limit)
            .field("offset", &self.offset)
            .field("total", &self.total)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Item Cursor
// ============================================================================

/// Single-item, forward-only iteration over a collection.
///
/// Buffers one page and fetches the next only when the buffer runs dry.
pub struct ItemCursor<T> {
    cursor: Cursor<T>,
    buffer: VecDeque<T>,
}

impl<T: DeserializeOwned> ItemCursor<T> {
    /// Create an item cursor paging `limit` items at a time
    pub async fn new(
        transport: Arc<dyn Transport>,
        request: ListRequest,
        limit: usize,
    ) -> Result<Self> {
        Ok(Self::from_cursor(
            Cursor::new(transport, request, limit).await?,
        ))
    }

    /// Wrap an existing cursor
    pub fn from_cursor(cursor: Cursor<T>) -> Self {
        Self {
            cursor,
            buffer: VecDeque::new(),
        }
    }

    /// Next item, `Ok(None)` at the end of the collection.
    ///
    /// After an error the cursor should be dropped.
    #[allow(clippy::should_implement_trait)]
    pub async fn next(&mut self) -> Result<Option<T>> {
        if self.buffer.is_empty() {
            self.cursor.fetch_next(&mut self.buffer).await?;
        }
        Ok(self.buffer.pop_front())
    }

    /// Convert into a stream that ends at the end of the collection or
    /// after the first error
    pub fn into_stream(self) -> impl Stream<Item = Result<T>> {
        stream::try_unfold(self, |mut cursor| async move {
            let item = cursor.next().await?;
            Ok::<_, Error>(item.map(|item| (item, cursor)))
        })
    }
}

impl<T> ItemCursor<T> {
    /// Items fetched but not yet returned
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Underlying page cursor
    pub fn cursor(&self) -> &Cursor<T> {
        &self.cursor
    }
}

impl<T> fmt::Debug for ItemCursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemCursor")
            .field("cursor", &self.cursor)
            .field("buffered", &self.buffer.len())
            .finish()
    }
}
