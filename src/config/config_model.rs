#[derive(Debug, Clone)]
pub struct DotEnvyConfig {
    pub server: Server,
    pub database: Database,
    pub session: Session,
    pub routes: Routes,
}

#[derive(Debug, Clone)]
pub struct Server {
    pub port: u16,
    pub body_limit: u64,
    pub timeout: u64,
}

#[derive(Debug, Clone)]
pub struct Database {
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub jwt_secret: String,
    pub ttl_seconds: u64,
}

/// Destination paths handed to the mutation pipeline; injected rather than
/// baked in as module constants.
#[derive(Debug, Clone)]
pub struct Routes {
    pub invoices_path: String,
}
