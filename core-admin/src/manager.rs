//! List manager orchestration
//!
//! Owns the loaded entity list, the active filter, the create form, and the
//! edit session for one media kind, and sequences repository calls with
//! local state refresh.
//!
//! Consistency policy is reconciliation by refetch: after every successful
//! mutation the full list is re-read, so the local view always reflects
//! backend-assigned identifiers and server-side normalization. Every
//! mutating operation takes `&mut self` and awaits its own reload, so
//! overlapping mutations cannot interleave stale reloads.

use bridge_traits::notify::{Notifier, Severity};
use core_catalog::{filter, Result};
use core_runtime::{CatalogEvent, EventBus};
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::catalog::Catalog;
use crate::forms::CreateForm;
use crate::session::EditSession;

/// Generic entity-list manager, instantiated once per media kind.
pub struct ListManager<C: Catalog> {
    catalog: C,
    notifier: Arc<dyn Notifier>,
    events: Option<EventBus>,
    entities: Vec<C::Entity>,
    selected_category: String,
    session: EditSession<C::Id, C::Staged>,
    form: C::Form,
    uploading: bool,
}

impl<C: Catalog> ListManager<C> {
    pub fn new(catalog: C, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            catalog,
            notifier,
            events: None,
            entities: Vec::new(),
            selected_category: filter::ALL_CATEGORIES.to_string(),
            session: EditSession::default(),
            form: C::Form::default(),
            uploading: false,
        }
    }

    /// Attach an event bus; mutations and reloads are published to it.
    pub fn with_events(mut self, events: EventBus) -> Self {
        self.events = Some(events);
        self
    }

    fn emit(&self, event: CatalogEvent) {
        if let Some(bus) = &self.events {
            bus.emit(event).ok();
        }
    }

    // ---- list & filter ----------------------------------------------------

    /// Re-read the full list from the backend.
    ///
    /// On failure the current list is left untouched (empty on first load)
    /// and the error goes to the developer log only; there is no user-facing
    /// retry for loads.
    pub async fn refresh(&mut self) {
        match self.catalog.fetch_all().await {
            Ok(entities) => {
                info!(kind = %C::kind(), count = entities.len(), "catalog list refreshed");
                self.entities = entities;
                self.emit(CatalogEvent::Reloaded {
                    kind: C::kind(),
                    count: self.entities.len(),
                });
            }
            Err(err) => {
                error!(kind = %C::kind(), error = %err, "failed to fetch catalog list");
            }
        }
    }

    /// The full loaded list, unfiltered.
    pub fn entities(&self) -> &[C::Entity] {
        &self.entities
    }

    /// The subsequence visible under the active category filter.
    pub fn visible(&self) -> Vec<&C::Entity> {
        filter::visible(&self.entities, &self.selected_category)
    }

    /// Filter options derived from the loaded list, sentinel first.
    pub fn category_options(&self) -> Vec<String> {
        filter::categories(&self.entities)
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    /// Change the active filter. Purely local: no backend call, and the
    /// selection survives reloads.
    pub fn set_filter(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
    }

    // ---- create flow ------------------------------------------------------

    pub fn form(&self) -> &C::Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut C::Form {
        &mut self.form
    }

    /// Whether a create submission is in flight (disables the submit
    /// control).
    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    /// Validate and submit the create form.
    ///
    /// A validation failure notifies the user and performs no network call,
    /// leaving the form untouched. On success the form resets to defaults
    /// and the list is refetched; on a server or transport failure the form
    /// keeps its values so the user can correct and resubmit.
    pub async fn submit_form(&mut self) -> Result<()> {
        let draft = match self.form.draft() {
            Ok(draft) => draft,
            Err(err) => {
                debug!(kind = %C::kind(), error = %err, "create rejected client-side");
                self.notifier.alert(Severity::Error, &err.user_message());
                return Err(err);
            }
        };

        self.uploading = true;
        let outcome = self.catalog.submit_new(draft).await;
        self.uploading = false;

        match outcome {
            Ok(created) => {
                let message = if created.message.is_empty() {
                    "Upload complete".to_string()
                } else {
                    created.message.clone()
                };
                self.notifier.alert(Severity::Info, &message);

                if let Some(id) = &created.id {
                    self.emit(CatalogEvent::Created {
                        kind: C::kind(),
                        id: id.clone(),
                    });
                }

                self.form.clear();
                self.refresh().await;
                Ok(())
            }
            Err(err) => {
                error!(kind = %C::kind(), error = %err, "upload failed");
                self.notifier.alert(Severity::Error, &err.user_message());
                Err(err)
            }
        }
    }

    // ---- delete flow ------------------------------------------------------

    /// Delete an entity after an explicit user confirmation.
    ///
    /// Returns `Ok(false)` when the user declines; nothing is sent. On
    /// failure the list is unchanged.
    pub async fn delete(&mut self, id: C::Id) -> Result<bool> {
        if !self
            .notifier
            .confirm("Delete this entry permanently?")
            .await
        {
            debug!(kind = %C::kind(), id = %id, "delete declined by user");
            return Ok(false);
        }

        match self.catalog.submit_delete(&id).await {
            Ok(ack) => {
                let message = if ack.message.is_empty() {
                    "Entry deleted".to_string()
                } else {
                    ack.message
                };
                self.notifier.alert(Severity::Info, &message);
                self.emit(CatalogEvent::Deleted {
                    kind: C::kind(),
                    id: id.to_string(),
                });
                self.refresh().await;
                Ok(true)
            }
            Err(err) => {
                error!(kind = %C::kind(), id = %id, error = %err, "delete failed");
                self.notifier.alert(Severity::Error, &err.user_message());
                Err(err)
            }
        }
    }

    // ---- edit flow --------------------------------------------------------

    pub fn session(&self) -> &EditSession<C::Id, C::Staged> {
        &self.session
    }

    /// Staged fields of the active edit, for binding to input controls.
    pub fn staged_mut(&mut self) -> Option<&mut C::Staged> {
        self.session.staged_mut()
    }

    /// Begin editing `id`, copying its current field values into the staged
    /// form. Any already-active session is replaced, its staged edits
    /// discarded. Returns `false` when `id` is not in the loaded list.
    pub fn start_edit(&mut self, id: C::Id) -> bool {
        let Some(entity) = self
            .entities
            .iter()
            .find(|entity| C::entity_id(entity) == id)
        else {
            debug!(kind = %C::kind(), id = %id, "start_edit on unknown id");
            return false;
        };

        self.session.start(id, C::stage(entity));
        true
    }

    /// Discard the staged edit, no backend call. The source entity is
    /// untouched.
    pub fn cancel_edit(&mut self) {
        self.session.cancel();
    }

    /// Validate and submit the staged edit.
    ///
    /// The session stays `Editing` on any failure so the user can correct
    /// and retry; it returns to `Idle` only after a successful save and the
    /// reload that follows it.
    pub async fn save_edit(&mut self) -> Result<()> {
        let (id, staged) = match &self.session {
            EditSession::Editing { id, staged } => (id.clone(), staged.clone()),
            EditSession::Idle => {
                debug!(kind = %C::kind(), "save_edit with no active session");
                return Ok(());
            }
        };

        if let Err(err) = C::check_staged(&staged) {
            debug!(kind = %C::kind(), id = %id, error = %err, "edit rejected client-side");
            self.notifier.alert(Severity::Error, &err.user_message());
            return Err(err);
        }

        match self.catalog.submit_update(&id, &staged).await {
            Ok(ack) => {
                let message = if ack.message.is_empty() {
                    "Changes saved".to_string()
                } else {
                    ack.message
                };
                self.notifier.alert(Severity::Info, &message);
                self.emit(CatalogEvent::Updated {
                    kind: C::kind(),
                    id: id.to_string(),
                });
                self.session.cancel();
                self.refresh().await;
                Ok(())
            }
            Err(err) => {
                error!(kind = %C::kind(), id = %id, error = %err, "update failed");
                self.notifier.alert(Severity::Error, &err.user_message());
                Err(err)
            }
        }
    }
}
