use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::configuration::Settings;
use crate::routes::auth::{login_handler, register_handler};
use crate::routes::users::{create_user, delete_user, get_user, update_user};
use crate::services::{AuthService, UserService};
use crate::store::UserStore;

#[derive(Clone, Debug)]
pub struct AppState {
    pub auth_service: AuthService,
    pub user_service: UserService,
}

impl AppState {
    pub fn new(store: Arc<UserStore>) -> Self {
        Self {
            auth_service: AuthService::new(store.clone()),
            user_service: UserService::new(store),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/users", post(create_user))
        .route(
            "/api/users/{user_id}",
            get(get_user)
                .put(update_user)
                .patch(update_user)
                .delete(delete_user),
        )
        .route("/api/register", post(register_handler))
        .route("/api/login", post(login_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    pub async fn build(settings: Settings) -> anyhow::Result<Self> {
        let address = settings.application.address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!(%address, "Failed to bind listener: {:?}", e);
            e
        })?;
        let port = listener.local_addr()?.port();

        let store = Arc::new(UserStore::new(settings.seed));
        let router = router(AppState::new(store));

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        tracing::info!(port = self.port, "Listening");
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {:?}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {:?}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}
