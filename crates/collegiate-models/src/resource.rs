//! The resource descriptor trait.
//!
//! Every screen in the original front end wrapped one REST collection with
//! the same list/add/edit/delete shape; [`Resource`] captures what actually
//! varies between them: the entity type, its creation/update draft, the
//! collection path, and the nouns used in user-facing messages.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Descriptor of one backend-managed REST collection.
///
/// Implemented by unit marker types (e.g. `Students`) so the generic client
/// and screen machinery can be instantiated per resource without carrying
/// per-entity code.
pub trait Resource: Send + Sync + 'static {
    /// The committed entity, as returned by the backend. Carries the
    /// server-assigned identity.
    type Entity: Clone + Debug + Send + Sync + 'static;

    /// The creation/update payload. Excludes the identity; `update` has full
    /// replace semantics, so every field is always supplied.
    type Draft: Clone + Debug + Default + Send + Sync + 'static;

    /// The strongly-typed identity for this collection.
    type Id: Copy + Eq + Hash + Debug + Display + Send + Sync + 'static;

    /// Collection path under the API base URL, e.g. `/api/students`.
    const BASE_PATH: &'static str;

    /// Singular noun for per-entity messages ("student").
    const SINGULAR: &'static str;

    /// Plural noun for collection messages ("students").
    const PLURAL: &'static str;

    /// The entity's server-assigned identity.
    fn id(entity: &Self::Entity) -> Self::Id;

    /// Human-readable name used when confirming destructive actions.
    fn display_name(entity: &Self::Entity) -> String;

    /// Snapshot an entity into a draft for the edit form. Mutating the draft
    /// never touches the committed entity.
    fn draft_from(entity: &Self::Entity) -> Self::Draft;
}
