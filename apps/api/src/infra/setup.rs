use std::fs::File;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    adapters::http::app_state::AppState,
    application::ports::billing_provider::BillingProvider,
    infra::{
        config::AppConfig, error::InfraError, file_store::LocalFileStore, postgres_persistence,
        stripe_billing_adapter::StripeBillingAdapter,
    },
    use_cases::{
        admin_access::AdminAccessUseCases, purchases::PurchasesUseCases, upload::UploadUseCases,
        user::{UserRepo, UserUseCases},
    },
};

pub async fn init_app_state() -> Result<AppState, InfraError> {
    let config = AppConfig::from_env()?;

    let postgres_arc = Arc::new(postgres_persistence(&config.database_url).await?);
    let user_repo_arc = postgres_arc.clone() as Arc<dyn UserRepo>;

    let billing = match &config.stripe_secret_key {
        Some(key) => {
            let adapter = StripeBillingAdapter::new(key.clone()).map_err(InfraError::HttpClient)?;
            Some(Arc::new(adapter) as Arc<dyn BillingProvider>)
        }
        None => {
            tracing::warn!("STRIPE_SECRET_KEY not set, purchase history disabled");
            None
        }
    };

    let file_store = Arc::new(LocalFileStore::new(
        config.upload_dir.clone(),
        &config.upload_public_prefix,
    ));

    let user_use_cases = UserUseCases::new(user_repo_arc.clone());
    let admin_access_use_cases = AdminAccessUseCases::new(user_repo_arc.clone());
    let purchases_use_cases =
        PurchasesUseCases::new(user_repo_arc, billing, config.plans.clone());
    let upload_use_cases = UploadUseCases::new(file_store, config.upload_policy);

    Ok(AppState {
        config: Arc::new(config),
        user_use_cases: Arc::new(user_use_cases),
        admin_access_use_cases: Arc::new(admin_access_use_cases),
        purchases_use_cases: Arc::new(purchases_use_cases),
        upload_use_cases: Arc::new(upload_use_cases),
    })
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shipfast_api=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don’t show target (module path)
        .with_level(true)
        .pretty();

    // File (structured JSON logs); console only when the file can't be created.
    let json_layer = File::create("app.log").ok().map(|file| {
        fmt::layer()
            .json()
            .with_writer(Arc::new(file))
            .with_current_span(true)
            .with_span_list(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
