use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub portal_jwt_secret: String,
    pub admin_api_url: String,
    pub store_path: String,
    pub admin_username: String,
    pub admin_password: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            portal_jwt_secret: env::var("PORTAL_JWT_SECRET")
                .unwrap_or_else(|_| {
                    warn!("PORTAL_JWT_SECRET not set, using empty value");
                    String::new()
                }),
            admin_api_url: env::var("ADMIN_API_URL")
                .unwrap_or_else(|_| {
                    warn!("ADMIN_API_URL not set, using empty value");
                    String::new()
                }),
            // Empty means the in-memory repository; set a file path for
            // persistence across restarts.
            store_path: env::var("PORTAL_STORE_PATH").unwrap_or_default(),
            admin_username: env::var("ADMIN_USERNAME")
                .unwrap_or_else(|_| {
                    warn!("ADMIN_USERNAME not set, using empty value");
                    String::new()
                }),
            admin_password: env::var("ADMIN_PASSWORD")
                .unwrap_or_else(|_| {
                    warn!("ADMIN_PASSWORD not set, using empty value");
                    String::new()
                }),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.portal_jwt_secret.is_empty() && !self.admin_api_url.is_empty()
    }

    pub fn is_admin_login_configured(&self) -> bool {
        !self.admin_username.is_empty() && !self.admin_password.is_empty()
    }
}
