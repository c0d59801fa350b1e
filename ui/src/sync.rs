//! Keeping client-side lists in step with the backend.
//!
//! Two rules hold for every list the UI shows:
//!
//! - Only the response to the most recent request may write state. Each
//!   fetch takes a [`RequestToken`] from a [`RequestTracker`] and checks it
//!   is still current before applying its result.
//! - After a mutation succeeds, the list is updated through [`reconcile`]
//!   with a [`Change`] describing what happened, whether that is an item the
//!   backend returned, an id that is gone, or a fresh list.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use payloads::responses::{Category, FileResource};
use payloads::{CategoryId, FileId};
use yew::Reducible;

/// Hands out increasing tokens. Clones share the same counter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestTracker {
    latest: Rc<Cell<u64>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

impl RequestTracker {
    /// Start a request. Every token issued before this one becomes stale.
    pub fn issue(&self) -> RequestToken {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        RequestToken(next)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.get() == token.0
    }

    /// Make every outstanding token stale, e.g. when the owner unmounts.
    pub fn invalidate(&self) {
        self.issue();
    }
}

/// Items that can be told apart by an id.
pub trait Keyed {
    type Key: PartialEq + Clone;

    fn key(&self) -> &Self::Key;
}

impl Keyed for Category {
    type Key = CategoryId;

    fn key(&self) -> &CategoryId {
        &self.id
    }
}

impl Keyed for FileResource {
    type Key = FileId;

    fn key(&self) -> &FileId {
        &self.id
    }
}

/// What a successful mutation did to a collection.
#[derive(Debug)]
pub enum Change<T: Keyed> {
    /// The backend returned the new item. An item already present under
    /// the same key is replaced in place.
    Created(T),
    Removed(T::Key),
    /// The mutation's response carries nothing usable, so the list was
    /// fetched again.
    Replaced(Vec<T>),
}

pub fn reconcile<T: Keyed>(items: &mut Vec<T>, change: Change<T>) {
    match change {
        Change::Created(item) => {
            match items.iter_mut().find(|i| i.key() == item.key()) {
                Some(existing) => *existing = item,
                None => items.push(item),
            }
        }
        Change::Removed(key) => items.retain(|i| i.key() != &key),
        Change::Replaced(fresh) => *items = fresh,
    }
}

/// Ask before deleting. A declined confirmation does nothing and is not an
/// error. An accepted one runs `delete` and yields the removal to reconcile.
pub async fn confirmed_removal<T, C, F, Fut, E>(
    key: T::Key,
    confirm: C,
    delete: F,
) -> Result<Option<Change<T>>, E>
where
    T: Keyed,
    C: FnOnce() -> bool,
    F: FnOnce(T::Key) -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    if !confirm() {
        return Ok(None);
    }
    delete(key.clone()).await?;
    Ok(Some(Change::Removed(key)))
}

/// A fetched list together with its loading and error flags.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionState<T> {
    pub items: Vec<T>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        CollectionState {
            items: Vec::new(),
            // Lists start loading as soon as they mount
            is_loading: true,
            error: None,
        }
    }
}

pub enum CollectionAction<T: Keyed> {
    Loading,
    /// Drop what is shown and wait for the next load.
    Reset,
    Loaded(Vec<T>),
    Failed(String),
    Apply(Change<T>),
}

impl<T: Keyed + Clone> Reducible for CollectionState<T> {
    type Action = CollectionAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CollectionAction::Loading => {
                next.is_loading = true;
                next.error = None;
            }
            CollectionAction::Reset => {
                next.items.clear();
                next.is_loading = true;
                next.error = None;
            }
            CollectionAction::Loaded(items) => {
                reconcile(&mut next.items, Change::Replaced(items));
                next.is_loading = false;
            }
            CollectionAction::Failed(error) => {
                next.items.clear();
                next.is_loading = false;
                next.error = Some(error);
            }
            CollectionAction::Apply(change) => {
                reconcile(&mut next.items, change);
            }
        }
        Rc::new(next)
    }
}
