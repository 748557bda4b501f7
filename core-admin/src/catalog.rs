//! Catalog glue trait
//!
//! Binds one media kind's entity, id, form, and staged-field types to its
//! repository so the list manager can be written once and instantiated per
//! kind.

use async_trait::async_trait;
use core_catalog::models::{Categorized, Exercise, ExerciseId, Music, MusicId};
use core_catalog::repositories::{Ack, Created, ExerciseRepository, MusicRepository};
use core_catalog::Result;
use core_runtime::MediaKind;
use std::fmt;
use std::sync::Arc;

use crate::forms::{CreateForm, ExerciseForm, ExerciseStaged, MusicForm, MusicStaged};

/// One media kind as seen by the generic [`ListManager`](crate::ListManager).
///
/// Associated functions are pure type glue; the async operations delegate to
/// the kind's repository.
#[async_trait]
pub trait Catalog: Send + Sync {
    type Entity: Categorized + Clone + Send + Sync;
    type Id: Clone + PartialEq + fmt::Display + Send + Sync;
    type Form: CreateForm + Send + Sync;
    type Staged: Clone + Send + Sync;

    fn kind() -> MediaKind;

    fn entity_id(entity: &Self::Entity) -> Self::Id;

    /// Copy an entity's current field values into a staged edit.
    fn stage(entity: &Self::Entity) -> Self::Staged;

    /// Required-field validation for a staged edit.
    fn check_staged(staged: &Self::Staged) -> Result<()>;

    async fn fetch_all(&self) -> Result<Vec<Self::Entity>>;

    async fn submit_new(&self, draft: <Self::Form as CreateForm>::Draft) -> Result<Created>;

    async fn submit_update(&self, id: &Self::Id, staged: &Self::Staged) -> Result<Ack>;

    async fn submit_delete(&self, id: &Self::Id) -> Result<Ack>;
}

/// Exercise kind bound to an [`ExerciseRepository`].
pub struct ExerciseCatalog {
    repo: Arc<dyn ExerciseRepository>,
}

impl ExerciseCatalog {
    pub fn new(repo: Arc<dyn ExerciseRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl Catalog for ExerciseCatalog {
    type Entity = Exercise;
    type Id = ExerciseId;
    type Form = ExerciseForm;
    type Staged = ExerciseStaged;

    fn kind() -> MediaKind {
        MediaKind::Exercise
    }

    fn entity_id(entity: &Exercise) -> ExerciseId {
        entity.id.clone()
    }

    fn stage(entity: &Exercise) -> ExerciseStaged {
        ExerciseStaged::from_entity(entity)
    }

    fn check_staged(staged: &ExerciseStaged) -> Result<()> {
        staged.validate()
    }

    async fn fetch_all(&self) -> Result<Vec<Exercise>> {
        self.repo.list().await
    }

    async fn submit_new(&self, draft: core_catalog::repositories::NewExercise) -> Result<Created> {
        self.repo.create(draft).await
    }

    async fn submit_update(&self, id: &ExerciseId, staged: &ExerciseStaged) -> Result<Ack> {
        self.repo.update(id, &staged.to_patch()).await
    }

    async fn submit_delete(&self, id: &ExerciseId) -> Result<Ack> {
        self.repo.remove(id).await
    }
}

/// Music kind bound to a [`MusicRepository`].
pub struct MusicCatalog {
    repo: Arc<dyn MusicRepository>,
}

impl MusicCatalog {
    pub fn new(repo: Arc<dyn MusicRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl Catalog for MusicCatalog {
    type Entity = Music;
    type Id = MusicId;
    type Form = MusicForm;
    type Staged = MusicStaged;

    fn kind() -> MediaKind {
        MediaKind::Music
    }

    fn entity_id(entity: &Music) -> MusicId {
        entity.id.clone()
    }

    fn stage(entity: &Music) -> MusicStaged {
        MusicStaged::from_entity(entity)
    }

    fn check_staged(staged: &MusicStaged) -> Result<()> {
        staged.validate()
    }

    async fn fetch_all(&self) -> Result<Vec<Music>> {
        self.repo.list().await
    }

    async fn submit_new(&self, draft: core_catalog::repositories::NewMusic) -> Result<Created> {
        self.repo.create(draft).await
    }

    async fn submit_update(&self, id: &MusicId, staged: &MusicStaged) -> Result<Ack> {
        self.repo.update(id, &staged.to_patch()).await
    }

    async fn submit_delete(&self, id: &MusicId) -> Result<Ack> {
        self.repo.remove(id).await
    }
}
