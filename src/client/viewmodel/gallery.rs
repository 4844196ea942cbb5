use tokio::sync::watch;

use crate::client::repository::GalleryRepository;
use crate::client::viewmodel::{Loadable, TaskScope, UiState};
use crate::shared::models::{CreateMediaRequest, MediaItem, MediaUpload};
use crate::shared::Outcome;

#[derive(Debug, Clone)]
struct GalleryCore {
    repository: GalleryRepository,
    items: Loadable<Vec<MediaItem>>,
    create: Loadable<MediaItem>,
}

impl GalleryCore {
    async fn load(&self) -> bool {
        self.items.run(self.repository.gallery_items()).await
    }

    async fn publish<F>(&self, operation: F) -> bool
    where
        F: std::future::Future<Output = Outcome<MediaItem>>,
    {
        let created = self.create.run(operation).await;
        if created {
            self.load().await;
        }
        created
    }
}

/// Gallery screen: browse, add by URL, upload a file
#[derive(Debug)]
pub struct GalleryViewModel {
    core: GalleryCore,
    scope: TaskScope,
}

impl GalleryViewModel {
    pub fn new(repository: GalleryRepository) -> Self {
        Self {
            core: GalleryCore {
                repository,
                items: Loadable::new(),
                create: Loadable::new(),
            },
            scope: TaskScope::new(),
        }
    }

    pub fn items(&self) -> watch::Receiver<UiState<Vec<MediaItem>>> {
        self.core.items.subscribe()
    }

    pub fn create_state(&self) -> watch::Receiver<UiState<MediaItem>> {
        self.core.create.subscribe()
    }

    pub async fn load_gallery(&self) -> bool {
        self.core.load().await
    }

    pub fn spawn_load_gallery(&self) {
        let core = self.core.clone();
        self.scope.spawn(async move {
            core.load().await;
        });
    }

    pub async fn create_media_item(&self, request: CreateMediaRequest) -> bool {
        self.core
            .publish(self.core.repository.create_media_item(&request))
            .await
    }

    pub fn spawn_create_media_item(&self, request: CreateMediaRequest) {
        let core = self.core.clone();
        self.scope.spawn(async move {
            core.publish(core.repository.create_media_item(&request)).await;
        });
    }

    pub async fn upload_media_item(&self, upload: MediaUpload) -> bool {
        self.core
            .publish(self.core.repository.upload_media_item(&upload))
            .await
    }

    pub fn spawn_upload_media_item(&self, upload: MediaUpload) {
        let core = self.core.clone();
        self.scope.spawn(async move {
            core.publish(core.repository.upload_media_item(&upload)).await;
        });
    }

    pub fn reset_create_state(&self) {
        self.core.create.reset();
    }
}
