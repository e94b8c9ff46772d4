// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Synchronization controller.
//!
//! Orchestrates every user-visible action against the remote gateway and
//! the local [`EntityCache`]:
//! - Validate locally before any remote call
//! - Track each action through its lifecycle and publish [`SyncEvent`]s
//! - Apply reorders optimistically and persist them afterwards
//! - Refetch after moves and completion toggles so derived order converges
//! - Drop fetch results that lost to a newer fetch or to navigation
//!
//! Methods take `&mut self`, so at most one operation runs per controller.
//! Fetches that a front end wants to overlap go through [`begin_load`]
//! and [`finish_load`].
//!
//! [`begin_load`]: SyncController::begin_load
//! [`finish_load`]: SyncController::finish_load

use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use tl_core::cache::{insert_item, remove_item, replace_item};
use tl_core::validate::{validate_description, validate_name, validate_title};
use tl_core::{
    plan_move, Draft, EditSession, EditSessions, EditTarget, EntityCache, Item, ItemId, ItemPatch,
    ListId, ListSummary, NewItem, TodoList, ValidationError,
};

use super::action::{Action, ActionState, ActionTracker};
use super::fetch::{FetchSequence, FetchTicket, StaleResponse};
use super::gateway::{Gateway, TransportError, TransportResult};
use super::http::{GatewayConfig, HttpGateway};

/// Error type for controller operations.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// Local validation or state error; no remote call was made.
    #[error(transparent)]
    Core(#[from] tl_core::Error),

    /// The remote call failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A fetch result lost to a newer fetch.
    #[error(transparent)]
    Stale(#[from] StaleResponse),

    /// The operation needs a selected list.
    #[error("no list is open\n  hint: open a list first")]
    NoListOpen,
}

impl From<ValidationError> for SyncError {
    fn from(err: ValidationError) -> Self {
        SyncError::Core(err.into())
    }
}

/// Result type for controller operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Notifications for a front end.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncEvent {
    /// An action changed lifecycle state.
    Action { action: Action, state: ActionState },
    /// The selected list's snapshot was replaced.
    ListLoaded(TodoList),
    /// The selected list was closed or deleted.
    ListClosed(ListId),
    /// The list summaries changed.
    ListsChanged(Vec<ListSummary>),
    /// An action failed; `message` is suitable for display.
    Failed { action: Action, message: String },
}

/// What happened to a completed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The snapshot replaced the cached list.
    Applied,
    /// The fetch lost to a newer one or to navigation; nothing changed.
    Discarded,
}

/// Result of a move request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Source and destination were equal; nothing was sent.
    Unchanged,
    /// Reordered locally and persisted remotely.
    Persisted,
    /// Reordered locally; persisting failed and the local order was kept.
    Unpersisted(TransportError),
}

/// Drives list and item actions against a [`Gateway`].
pub struct SyncController<G: Gateway = HttpGateway> {
    gateway: G,
    cache: EntityCache,
    edits: EditSessions,
    fetches: FetchSequence,
    actions: ActionTracker,
    events: Option<mpsc::UnboundedSender<SyncEvent>>,
}

impl SyncController<HttpGateway> {
    /// Create a controller talking HTTP to the configured remote.
    pub fn connect(config: &GatewayConfig) -> SyncResult<Self> {
        Ok(Self::with_gateway(HttpGateway::new(config)?))
    }
}

impl<G: Gateway> SyncController<G> {
    /// Create a controller with a custom gateway (for testing).
    pub fn with_gateway(gateway: G) -> Self {
        SyncController {
            gateway,
            cache: EntityCache::new(),
            edits: EditSessions::new(),
            fetches: FetchSequence::new(),
            actions: ActionTracker::new(),
            events: None,
        }
    }

    /// Start publishing events; replaces any earlier subscriber.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<SyncEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.events = Some(tx);
        rx
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn cache(&self) -> &EntityCache {
        &self.cache
    }

    /// The selected list's snapshot, once loaded.
    pub fn current(&self) -> Option<&TodoList> {
        self.cache.current()
    }

    pub fn summaries(&self) -> &[ListSummary] {
        self.cache.summaries()
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edits.active()
    }

    pub fn action_state(&self, action: &Action) -> ActionState {
        self.actions.state(action)
    }

    // -- Lists --------------------------------------------------------------

    /// Fetch every list and replace the summaries.
    pub async fn refresh_lists(&mut self) -> SyncResult<&[ListSummary]> {
        let action = Action::RefreshLists;
        self.begin(&action);
        let result = self.gateway.list_all().await;
        let lists = self.settle(&action, result)?;

        let summaries: Vec<ListSummary> = lists.iter().map(TodoList::summary).collect();
        debug!(count = summaries.len(), "refreshed list summaries");
        self.cache.set_summaries(summaries);
        self.publish_summaries();
        Ok(self.cache.summaries())
    }

    /// Select a list and load its snapshot.
    pub async fn open_list(&mut self, id: &ListId) -> SyncResult<LoadOutcome> {
        let ticket = self.begin_load(id);
        let result = self.gateway.read_list(id).await;
        self.finish_load(ticket, result)
    }

    /// Select `id` and issue a fetch ticket for it.
    ///
    /// Switching to a different list cancels any open edit and clears the
    /// previous snapshot.
    pub fn begin_load(&mut self, id: &ListId) -> FetchTicket {
        self.navigate(id);
        let ticket = self.fetches.issue(id);
        debug!(list = %id, seq = ticket.seq(), "loading list");
        self.begin(&Action::LoadList(id.clone()));
        ticket
    }

    /// Complete a fetch started by [`begin_load`](Self::begin_load).
    ///
    /// Stale results are discarded whether they succeeded or failed.
    pub fn finish_load(
        &mut self,
        ticket: FetchTicket,
        result: TransportResult<TodoList>,
    ) -> SyncResult<LoadOutcome> {
        let action = Action::LoadList(ticket.list_id().clone());
        if let Err(stale) = self.fetches.check(&ticket) {
            self.settled(&action, result.is_ok());
            debug!(%stale, "discarding fetch result");
            return Ok(LoadOutcome::Discarded);
        }

        let list = self.settle(&action, result)?;
        self.fetches.accept(&ticket)?;
        debug!(list = %list.id, items = list.items.len(), "applied list snapshot");
        self.show(list);
        Ok(LoadOutcome::Applied)
    }

    /// Deselect the current list; outstanding fetches become stale.
    pub fn close_list(&mut self) {
        self.fetches.invalidate();
        self.drop_edit("closing list");
        if let Some(list) = self.cache.clear() {
            debug!(list = %list.id, "closed list");
            self.emit(SyncEvent::ListClosed(list.id));
        }
    }

    /// Refetch the selected list so locally derived state converges.
    pub async fn reconcile(&mut self) -> SyncResult<LoadOutcome> {
        let id = self.selected_id()?;
        let ticket = self.fetches.issue(&id);
        self.begin(&Action::LoadList(id.clone()));
        let result = self.gateway.read_list(&id).await;
        self.finish_load(ticket, result)
    }

    /// Create a list and select it.
    pub async fn create_list(&mut self, name: &str) -> SyncResult<TodoList> {
        let name = validate_name(name)?;
        let action = Action::CreateList;
        self.begin(&action);
        let result = self.gateway.create_list(&name).await;
        let list = self.settle(&action, result)?;
        info!(list = %list.id, name = %list.name, "created list");

        self.navigate(&list.id);
        let ticket = self.fetches.issue(&list.id);
        self.fetches.accept(&ticket)?;
        self.show(list.clone());
        Ok(list)
    }

    /// Rename a list.
    ///
    /// Only the name and timestamp of the response are merged; the cached
    /// items are kept.
    pub async fn rename_list(&mut self, id: &ListId, name: &str) -> SyncResult<()> {
        let name = validate_name(name)?;
        let action = Action::RenameList(id.clone());
        self.begin(&action);
        let result = self.gateway.update_list(id, &name).await;
        let renamed = self.settle(&action, result)?;
        info!(list = %id, name = %renamed.name, "renamed list");

        match self.cache.current().filter(|list| &list.id == id) {
            Some(current) => {
                let mut next = current.clone();
                next.name = renamed.name;
                next.updated_at = renamed.updated_at;
                self.show(next);
            }
            None => {
                let summary = self
                    .cache
                    .summaries()
                    .iter()
                    .find(|s| &s.id == id)
                    .map(|s| ListSummary {
                        name: renamed.name.clone(),
                        ..s.clone()
                    })
                    .unwrap_or_else(|| renamed.summary());
                self.cache.upsert_summary(summary);
            }
        }
        self.publish_summaries();
        Ok(())
    }

    /// Delete a list; deleting the selected list closes it.
    pub async fn delete_list(&mut self, id: &ListId) -> SyncResult<()> {
        let action = Action::DeleteList(id.clone());
        self.begin(&action);
        let result = self.gateway.delete_list(id).await;
        self.settle(&action, result)?;
        info!(list = %id, "deleted list");

        if self.fetches.selected() == Some(id) || self.cache.current_id() == Some(id) {
            self.close_list();
        }
        self.cache.remove_summary(id);
        self.publish_summaries();
        Ok(())
    }

    // -- Items --------------------------------------------------------------

    /// Append an item to the selected list.
    ///
    /// The new item's order is the count of incomplete items before it.
    pub async fn create_item(
        &mut self,
        title: &str,
        description: Option<&str>,
    ) -> SyncResult<Item> {
        let title = validate_title(title)?;
        let description = match description {
            Some(text) => validate_description(text)?,
            None => None,
        };
        let list = self.current_list()?;
        let list_id = list.id.clone();
        // CORRECTNESS: list length is bounded far below u32::MAX
        #[allow(clippy::cast_possible_truncation)]
        let order = list.incomplete_count() as u32;
        let new = NewItem {
            title,
            description,
            completed: false,
            order,
        };

        let action = Action::CreateItem(list_id.clone());
        self.begin(&action);
        let result = self.gateway.create_item(&list_id, &new).await;
        let item = self.settle(&action, result)?;
        info!(list = %list_id, item = %item.id, order = item.order, "created item");

        if let Some(current) = self.cache.current().filter(|l| l.id == list_id) {
            let next = insert_item(current, item.clone());
            self.show(next);
        }
        Ok(item)
    }

    /// Apply a partial update to an item of the selected list.
    ///
    /// Text fields are validated and trimmed first. A completion change is
    /// followed by a refetch of the list.
    pub async fn update_item(&mut self, id: &ItemId, patch: ItemPatch) -> SyncResult<Item> {
        let patch = validate_patch(patch)?;
        let was_completed = self.current_item(id)?.completed;

        let action = Action::UpdateItem(id.clone());
        self.begin(&action);
        let result = self.gateway.update_item(id, &patch).await;
        let item = self.settle(&action, result)?;
        debug!(item = %id, "updated item");

        let toggled = item.completed != was_completed;
        if let Some(current) = self.cache.current() {
            let next = replace_item(current, item.clone());
            self.show(next);
        }
        if toggled {
            info!(item = %id, completed = item.completed, "completion changed");
            self.reconcile_quietly().await;
        }
        Ok(item)
    }

    pub async fn set_completed(&mut self, id: &ItemId, completed: bool) -> SyncResult<Item> {
        self.update_item(id, ItemPatch::completed(completed)).await
    }

    /// Flip an item's completion flag.
    pub async fn toggle_completed(&mut self, id: &ItemId) -> SyncResult<Item> {
        let completed = self.current_item(id)?.completed;
        self.set_completed(id, !completed).await
    }

    /// Refetch one item and replace it in the cache.
    pub async fn refresh_item(&mut self, id: &ItemId) -> SyncResult<Item> {
        self.current_item(id)?;
        let action = Action::UpdateItem(id.clone());
        self.begin(&action);
        let result = self.gateway.read_item(id).await;
        let item = self.settle(&action, result)?;
        if let Some(current) = self.cache.current() {
            let next = replace_item(current, item.clone());
            self.show(next);
        }
        Ok(item)
    }

    /// Delete an item of the selected list.
    pub async fn delete_item(&mut self, id: &ItemId) -> SyncResult<()> {
        self.current_item(id)?;
        let action = Action::DeleteItem(id.clone());
        self.begin(&action);
        let result = self.gateway.delete_item(id).await;
        self.settle(&action, result)?;
        info!(item = %id, "deleted item");

        if self.edits.is_editing(&EditTarget::Item(id.clone())) {
            self.edits.cancel();
        }
        if let Some(current) = self.cache.current() {
            let next = remove_item(current, id);
            self.show(next);
        }
        Ok(())
    }

    /// Move the incomplete item at `source` to `dest`.
    ///
    /// The new order is shown immediately. If persisting it fails, the
    /// local order is kept and the failure only logged.
    pub async fn move_item(&mut self, source: usize, dest: usize) -> SyncResult<MoveOutcome> {
        let list = self.current_list()?;
        let Some(plan) = plan_move(list, source, dest)? else {
            debug!(source, "move to same position ignored");
            return Ok(MoveOutcome::Unchanged);
        };
        let next = plan.apply(list);
        self.show(next);

        let action = Action::MoveItem(plan.moved.clone());
        self.begin(&action);
        match self.gateway.update_order(&plan.moved, plan.position).await {
            Ok(()) => {
                self.applied(&action);
                info!(item = %plan.moved, position = plan.position, "moved item");
                self.reconcile_quietly().await;
                Ok(MoveOutcome::Persisted)
            }
            Err(err) => {
                warn!(
                    item = %plan.moved,
                    position = plan.position,
                    error = %err,
                    "failed to persist reorder, keeping local order"
                );
                self.failed(&action, &err);
                Ok(MoveOutcome::Unpersisted(err))
            }
        }
    }

    // -- Editing ------------------------------------------------------------

    /// Enter edit mode on an item of the selected list.
    pub fn begin_item_edit(&mut self, id: &ItemId) -> SyncResult<&mut Draft> {
        let seed = Draft::from_item(self.current_item(id)?);
        Ok(self.edits.begin(EditTarget::Item(id.clone()), seed)?)
    }

    /// Enter edit mode on the selected list's name.
    pub fn begin_list_edit(&mut self) -> SyncResult<&mut Draft> {
        let list = self.current_list()?;
        let target = EditTarget::ListName(list.id.clone());
        let seed = Draft::from_list(list);
        Ok(self.edits.begin(target, seed)?)
    }

    pub fn draft_mut(&mut self) -> Option<&mut Draft> {
        self.edits.draft_mut()
    }

    /// Leave edit mode, discarding the draft.
    pub fn cancel_edit(&mut self) -> bool {
        self.edits.cancel().is_some()
    }

    /// Validate and send the open draft.
    ///
    /// Edit mode is left only once the remote accepted the change; on any
    /// error the draft stays open for correction or retry.
    pub async fn commit_edit(&mut self) -> SyncResult<()> {
        let commit = self.edits.prepare_commit()?;
        match &commit.target {
            EditTarget::ListName(id) => self.rename_list(id, &commit.title).await?,
            EditTarget::Item(id) => {
                self.update_item(id, commit.item_patch()).await?;
            }
        }
        self.edits.finish(&commit.target);
        Ok(())
    }

    // -- Internals ----------------------------------------------------------

    fn selected_id(&self) -> SyncResult<ListId> {
        self.fetches
            .selected()
            .or_else(|| self.cache.current_id())
            .cloned()
            .ok_or(SyncError::NoListOpen)
    }

    fn current_list(&self) -> SyncResult<&TodoList> {
        self.cache.current().ok_or(SyncError::NoListOpen)
    }

    fn current_item(&self, id: &ItemId) -> SyncResult<&Item> {
        self.current_list()?
            .item(id)
            .ok_or_else(|| tl_core::Error::ItemNotFound(id.to_string()).into())
    }

    /// Leave the selected list if it is not `id`.
    fn navigate(&mut self, id: &ListId) {
        if self.fetches.selected() == Some(id) {
            return;
        }
        self.drop_edit("navigation");
        if let Some(previous) = self.cache.clear() {
            self.emit(SyncEvent::ListClosed(previous.id));
        }
    }

    /// Cancel any open edit; unsaved changes are logged before they go.
    fn drop_edit(&mut self, reason: &str) {
        let Some(session) = self.edits.cancel() else {
            return;
        };
        if session.is_dirty() {
            info!(edit = %session.target(), reason, "discarded unsaved edit");
        } else {
            debug!(edit = %session.target(), reason, "cancelled edit");
        }
    }

    /// Refetch after a server-derived change; failures are logged only.
    async fn reconcile_quietly(&mut self) {
        if let Err(err) = self.reconcile().await {
            warn!(error = %err, "reconciliation fetch failed");
        }
    }

    /// Replace the cached list and notify.
    fn show(&mut self, list: TodoList) {
        self.cache.load(list.clone());
        self.emit(SyncEvent::ListLoaded(list));
        self.publish_summaries();
    }

    fn publish_summaries(&self) {
        self.emit(SyncEvent::ListsChanged(self.cache.summaries().to_vec()));
    }

    fn emit(&self, event: SyncEvent) {
        if let Some(tx) = &self.events {
            // A dropped receiver just means nobody is listening.
            let _ = tx.send(event);
        }
    }

    fn begin(&mut self, action: &Action) {
        let state = self.actions.begin(action);
        self.emit(SyncEvent::Action {
            action: action.clone(),
            state,
        });
    }

    /// Settle one start of `action` and publish its new state.
    fn settled(&mut self, action: &Action, ok: bool) {
        let state = self.actions.settle(action, ok);
        self.emit(SyncEvent::Action {
            action: action.clone(),
            state,
        });
    }

    fn applied(&mut self, action: &Action) {
        self.settled(action, true);
    }

    fn failed(&mut self, action: &Action, err: &TransportError) {
        self.settled(action, false);
        self.emit(SyncEvent::Failed {
            action: action.clone(),
            message: err.to_string(),
        });
    }

    fn settle<T>(&mut self, action: &Action, result: TransportResult<T>) -> SyncResult<T> {
        match result {
            Ok(value) => {
                self.applied(action);
                Ok(value)
            }
            Err(err) => {
                error!(%action, error = %err, "remote call failed");
                self.failed(action, &err);
                Err(err.into())
            }
        }
    }
}

/// Validate and trim the text fields of a patch.
fn validate_patch(patch: ItemPatch) -> Result<ItemPatch, ValidationError> {
    let title = patch.title.as_deref().map(validate_title).transpose()?;
    let description = match patch.description {
        Some(Some(ref text)) => Some(validate_description(text)?),
        other => other,
    };
    Ok(ItemPatch {
        title,
        description,
        ..patch
    })
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
