use std::sync::Arc;

use adapter::document::DocumentStore;
use adapter::repository::book::BookRepositoryImpl;
use adapter::repository::health::HealthCheckRepositoryImpl;
use adapter::repository::photograph::PhotographRepositoryImpl;
use adapter::repository::request::RequestRepositoryImpl;
use adapter::repository::user::UserRepositoryImpl;
use kernel::repository::book::BookRepository;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::photograph::PhotographRepository;
use kernel::repository::request::RequestRepository;
use kernel::repository::user::UserRepository;

// ストレージゲートウェイはプロセス起動時に一度だけ組み立て、
// 必要とするコンポーネントへ明示的に渡す
#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    book_repository: Arc<dyn BookRepository>,
    request_repository: Arc<dyn RequestRepository>,
    user_repository: Arc<dyn UserRepository>,
    photograph_repository: Arc<dyn PhotographRepository>,
}

impl AppRegistry {
    pub fn new(store: DocumentStore) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(store.clone()));
        let book_repository = Arc::new(BookRepositoryImpl::new(store.clone()));
        let request_repository = Arc::new(RequestRepositoryImpl::new(store.clone()));
        let user_repository = Arc::new(UserRepositoryImpl::new(store.clone()));
        let photograph_repository = Arc::new(PhotographRepositoryImpl::new(store));
        Self {
            health_check_repository,
            book_repository,
            request_repository,
            user_repository,
            photograph_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn book_repository(&self) -> Arc<dyn BookRepository> {
        self.book_repository.clone()
    }

    pub fn request_repository(&self) -> Arc<dyn RequestRepository> {
        self.request_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn photograph_repository(&self) -> Arc<dyn PhotographRepository> {
        self.photograph_repository.clone()
    }
}
