//! The generic list/add/edit/delete screen.
//!
//! Every resource screen in the original front end repeated the same shape:
//! a committed list, one working draft, fixed failure messages, and a full
//! re-fetch after every successful mutation. [`CrudScreen`] implements that
//! shape once, parameterized by a [`Resource`] and the gateway that reaches
//! its collection.
//!
//! The list is the authoritative server snapshot. Mutations never splice it
//! locally; success triggers a wholesale refresh (first page, for paginated
//! screens), trading a round trip for guaranteed agreement with the backend.
//! Read failures keep the previous list untouched.

use tracing::warn;

use collegiate_client::{ApiError, ResourceGateway};
use collegiate_core::PageRequest;
use collegiate_models::Resource;

/// What the open form is doing: creating a new entity or replacing an
/// existing one. Edit mode carries the identity of its source entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode<Id> {
    Add,
    Edit(Id),
}

/// Where a screen currently is.
#[derive(Debug)]
pub enum ScreenState<R: Resource> {
    /// List shown (possibly empty), no form open.
    Viewing,
    /// A form is open over the given draft.
    Editing {
        mode: FormMode<R::Id>,
        draft: R::Draft,
    },
    /// A delete awaits the operator's yes/no answer.
    ConfirmPending { id: R::Id, name: String },
    /// A mutation round trip is in flight.
    Submitting,
}

/// How the screen reads its collection.
#[derive(Debug, Clone)]
enum ListSource {
    Full,
    Paginated { request: PageRequest, total_pages: i64 },
}

/// One resource screen: committed list, working draft, surfaced error.
pub struct CrudScreen<R: Resource, G: ResourceGateway<R>> {
    gateway: G,
    items: Vec<R::Entity>,
    state: ScreenState<R>,
    error: Option<String>,
    list: ListSource,
    /// Form suspended while a delete confirmation is outstanding.
    suspended_form: Option<(FormMode<R::Id>, R::Draft)>,
}

impl<R: Resource, G: ResourceGateway<R>> CrudScreen<R, G> {
    /// A screen that reads the whole collection at once.
    #[must_use]
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            items: Vec::new(),
            state: ScreenState::Viewing,
            error: None,
            list: ListSource::Full,
            suspended_form: None,
        }
    }

    /// A screen that pages through the collection with the given request.
    #[must_use]
    pub fn paginated(gateway: G, request: PageRequest) -> Self {
        Self {
            gateway,
            items: Vec::new(),
            state: ScreenState::Viewing,
            error: None,
            list: ListSource::Paginated {
                request,
                total_pages: 1,
            },
            suspended_form: None,
        }
    }

    /// The committed list snapshot.
    #[must_use]
    pub fn items(&self) -> &[R::Entity] {
        &self.items
    }

    /// The last surfaced failure message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn state(&self) -> &ScreenState<R> {
        &self.state
    }

    /// The open form draft, when a form is open.
    #[must_use]
    pub fn draft(&self) -> Option<&R::Draft> {
        match &self.state {
            ScreenState::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Mutable access to the open form draft.
    pub fn draft_mut(&mut self) -> Option<&mut R::Draft> {
        match &mut self.state {
            ScreenState::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Zero-based current page, for paginated screens.
    #[must_use]
    pub fn page(&self) -> Option<i64> {
        match &self.list {
            ListSource::Paginated { request, .. } => Some(request.page()),
            ListSource::Full => None,
        }
    }

    /// Total page count reported by the last successful load.
    #[must_use]
    pub fn total_pages(&self) -> Option<i64> {
        match &self.list {
            ListSource::Paginated { total_pages, .. } => Some(*total_pages),
            ListSource::Full => None,
        }
    }

    /// Refresh the list from the backend.
    ///
    /// On failure the previous list stays untouched and the fixed load
    /// message is surfaced.
    pub async fn load(&mut self) -> bool {
        self.error = None;
        let request = match &self.list {
            ListSource::Full => None,
            ListSource::Paginated { request, .. } => Some(request.clone()),
        };
        match request {
            None => match self.gateway.list().await {
                Ok(items) => {
                    self.items = items;
                    true
                }
                Err(err) => self.fail_load(&err),
            },
            Some(request) => match self.gateway.list_paginated(&request).await {
                Ok(page) => {
                    self.items = page.content;
                    if let ListSource::Paginated { total_pages, .. } = &mut self.list {
                        *total_pages = page.total_pages;
                    }
                    true
                }
                Err(err) => self.fail_load(&err),
            },
        }
    }

    fn fail_load(&mut self, err: &ApiError) -> bool {
        warn!(resource = R::PLURAL, error = %err, "List refresh failed");
        self.error = Some(format!("Failed to load {}.", R::PLURAL));
        false
    }

    /// Jump to the given zero-based page and refresh. Full-list screens
    /// ignore this.
    pub async fn goto_page(&mut self, page: i64) -> bool {
        match &mut self.list {
            ListSource::Paginated { request, .. } => {
                *request = request.at_page(page);
                self.load().await
            }
            ListSource::Full => false,
        }
    }

    /// Open an empty add form, discarding any uncommitted draft.
    pub fn open_add_form(&mut self) {
        self.error = None;
        self.state = ScreenState::Editing {
            mode: FormMode::Add,
            draft: R::Draft::default(),
        };
    }

    /// Open an edit form over a snapshot of the given entity.
    ///
    /// The draft is an independent copy; the committed list entry changes
    /// only when a later submit succeeds.
    pub fn open_edit_form(&mut self, entity: &R::Entity) {
        self.open_edit_form_with(entity, R::draft_from(entity));
    }

    /// Open an edit form with a caller-prepared draft, for resources whose
    /// snapshot needs context the entity alone cannot provide.
    pub fn open_edit_form_with(&mut self, entity: &R::Entity, draft: R::Draft) {
        self.error = None;
        self.state = ScreenState::Editing {
            mode: FormMode::Edit(R::id(entity)),
            draft,
        };
    }

    /// Discard the open form unconditionally.
    pub fn cancel(&mut self) {
        if matches!(self.state, ScreenState::Editing { .. }) {
            self.state = ScreenState::Viewing;
        }
    }

    /// Commit the open form: create in add mode, full replace in edit mode.
    ///
    /// Success refreshes the list and closes the form. Failure surfaces the
    /// fixed message for the action and leaves the form open with the draft
    /// intact so the operator can retry.
    pub async fn submit(&mut self) -> bool {
        let (mode, draft) = match std::mem::replace(&mut self.state, ScreenState::Submitting) {
            ScreenState::Editing { mode, draft } => (mode, draft),
            other => {
                self.state = other;
                return false;
            }
        };
        self.error = None;

        let result = match mode {
            FormMode::Add => self.gateway.create(&draft).await.map(drop),
            FormMode::Edit(id) => self.gateway.update(id, &draft).await.map(drop),
        };

        match result {
            Ok(()) => {
                self.state = ScreenState::Viewing;
                self.refresh_after_mutation().await;
                true
            }
            Err(err) => {
                let action = match mode {
                    FormMode::Add => "add",
                    FormMode::Edit(_) => "update",
                };
                warn!(resource = R::SINGULAR, action, error = %err, "Submit failed");
                self.error = Some(format!("Failed to {action} {}.", R::SINGULAR));
                self.state = ScreenState::Editing { mode, draft };
                false
            }
        }
    }

    /// Ask to delete the entity with the given id.
    ///
    /// Returns the entity's display name for the confirmation prompt, or
    /// `None` when the id is not in the current list (or a confirmation is
    /// already outstanding). An open form is suspended until the
    /// confirmation resolves.
    pub fn request_delete(&mut self, id: R::Id) -> Option<&str> {
        if matches!(
            self.state,
            ScreenState::Submitting | ScreenState::ConfirmPending { .. }
        ) {
            return None;
        }
        let name = self
            .items
            .iter()
            .find(|entity| R::id(entity) == id)
            .map(R::display_name)?;
        self.error = None;

        let prior = std::mem::replace(&mut self.state, ScreenState::ConfirmPending { id, name });
        if let ScreenState::Editing { mode, draft } = prior {
            self.suspended_form = Some((mode, draft));
        }
        match &self.state {
            ScreenState::ConfirmPending { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }

    /// Answer no to an outstanding confirmation. The suspended form, if
    /// any, reopens untouched.
    pub fn decline_delete(&mut self) {
        if matches!(self.state, ScreenState::ConfirmPending { .. }) {
            self.resume_form();
        }
    }

    /// Answer yes to an outstanding confirmation and perform the delete.
    ///
    /// Success refreshes the list; failure surfaces the fixed message and
    /// leaves the list unchanged. Either way, a suspended draft whose source
    /// was the deleted entity is discarded.
    pub async fn confirm_delete(&mut self) -> bool {
        let id = match std::mem::replace(&mut self.state, ScreenState::Submitting) {
            ScreenState::ConfirmPending { id, .. } => id,
            other => {
                self.state = other;
                return false;
            }
        };

        let result = self.gateway.delete(id).await;

        if matches!(&self.suspended_form, Some((FormMode::Edit(source), _)) if *source == id) {
            self.suspended_form = None;
        }

        match result {
            Ok(()) => {
                self.resume_form();
                self.refresh_after_mutation().await;
                true
            }
            Err(err) => {
                warn!(resource = R::SINGULAR, error = %err, "Delete failed");
                self.error = Some(format!("Failed to delete {}.", R::SINGULAR));
                self.resume_form();
                false
            }
        }
    }

    fn resume_form(&mut self) {
        self.state = match self.suspended_form.take() {
            Some((mode, draft)) => ScreenState::Editing { mode, draft },
            None => ScreenState::Viewing,
        };
    }

    async fn refresh_after_mutation(&mut self) {
        if let ListSource::Paginated { request, .. } = &mut self.list {
            *request = request.at_page(0);
        }
        // load surfaces its own failure message
        self.load().await;
    }
}
