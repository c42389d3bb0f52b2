use std::sync::Arc;

use crate::{
    infra::config::AppConfig,
    use_cases::{
        admin_access::AdminAccessUseCases, purchases::PurchasesUseCases, upload::UploadUseCases,
        user::UserUseCases,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub user_use_cases: Arc<UserUseCases>,
    pub admin_access_use_cases: Arc<AdminAccessUseCases>,
    pub purchases_use_cases: Arc<PurchasesUseCases>,
    pub upload_use_cases: Arc<UploadUseCases>,
}
