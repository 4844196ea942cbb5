//! Class scheduling screen.

use futures_util::join;
use tokio::sync::watch;

use crate::client::repository::ScheduleRepository;
use crate::client::viewmodel::{Loadable, TaskScope, UiState};
use crate::shared::models::{ClassDraft, ClassSession, Person};

#[derive(Debug, Clone)]
struct ScheduleCore {
    repository: ScheduleRepository,
    professors: Loadable<Vec<Person>>,
    students: Loadable<Vec<Person>>,
    create: Loadable<Option<ClassSession>>,
}

impl ScheduleCore {
    async fn load_people(&self) -> bool {
        let (professors, students) = join!(
            self.professors.run(self.repository.professors()),
            self.students.run(self.repository.students())
        );
        professors && students
    }

    async fn create_class(&self, draft: ClassDraft) -> bool {
        self.create.run(self.repository.create_class(draft)).await
    }
}

#[derive(Debug)]
pub struct ScheduleClassViewModel {
    core: ScheduleCore,
    scope: TaskScope,
}

impl ScheduleClassViewModel {
    pub fn new(repository: ScheduleRepository) -> Self {
        Self {
            core: ScheduleCore {
                repository,
                professors: Loadable::new(),
                students: Loadable::new(),
                create: Loadable::new(),
            },
            scope: TaskScope::new(),
        }
    }

    pub fn professors(&self) -> watch::Receiver<UiState<Vec<Person>>> {
        self.core.professors.subscribe()
    }

    pub fn students(&self) -> watch::Receiver<UiState<Vec<Person>>> {
        self.core.students.subscribe()
    }

    pub fn create_state(&self) -> watch::Receiver<UiState<Option<ClassSession>>> {
        self.core.create.subscribe()
    }

    /// Professors and students load side by side.
    pub async fn load_people(&self) -> bool {
        self.core.load_people().await
    }

    pub fn spawn_load_people(&self) {
        let core = self.core.clone();
        self.scope.spawn(async move {
            core.load_people().await;
        });
    }

    pub async fn create_class(&self, draft: ClassDraft) -> bool {
        self.core.create_class(draft).await
    }

    pub fn spawn_create_class(&self, draft: ClassDraft) {
        let core = self.core.clone();
        self.scope.spawn(async move {
            core.create_class(draft).await;
        });
    }
}
