use anyhow::Result;

use super::config_model::DotEnvyConfig;

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let server = super::config_model::Server {
        port: std::env::var("SERVER_PORT")
            .expect("SERVER_PORT is invalid")
            .parse()?,
        body_limit: std::env::var("SERVER_BODY_LIMIT")
            .expect("SERVER_BODY_LIMIT is invalid")
            .parse()?,
        timeout: std::env::var("SERVER_TIMEOUT")
            .expect("SERVER_TIMEOUT is invalid")
            .parse()?,
    };

    let database = super::config_model::Database {
        url: std::env::var("DATABASE_URL").expect("DATABASE_URL is invalid"),
    };

    let session = super::config_model::Session {
        jwt_secret: std::env::var("SESSION_JWT_SECRET").expect("SESSION_JWT_SECRET is invalid"),
        ttl_seconds: std::env::var("SESSION_TTL_SECONDS")
            .unwrap_or_else(|_| "86400".to_string())
            .parse()?,
    };

    let routes = super::config_model::Routes {
        invoices_path: std::env::var("INVOICES_PATH")
            .unwrap_or_else(|_| "/dashboard/invoices".to_string()),
    };

    Ok(DotEnvyConfig {
        server,
        database,
        session,
        routes,
    })
}

#[cfg(test)]
mod tests {
    use std::env;

    fn set_env_vars() {
        unsafe {
            env::set_var("SERVER_PORT", "8080");
            env::set_var("SERVER_BODY_LIMIT", "10");
            env::set_var("SERVER_TIMEOUT", "30");
            env::set_var("DATABASE_URL", "postgres://localhost:5432/invoice_desk");
            env::set_var("SESSION_JWT_SECRET", "supersecretjwtsecretforunittesting123");
        }
    }

    #[test]
    fn loads_config_with_route_defaults() {
        set_env_vars();

        let config = super::load().unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.session.ttl_seconds, 86400);
        assert_eq!(config.routes.invoices_path, "/dashboard/invoices");
    }
}
