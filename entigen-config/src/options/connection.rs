use serde::{Deserialize, Serialize};

/// Database connection rendered into `ormconfig.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConnectionOptions {
    /// TypeORM driver name (`postgres`, `mysql`, `mssql`, `sqlite`, ...).
    #[serde(rename = "type")]
    pub database_type: String,
    pub host: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    pub database: String,
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    pub synchronize: bool,
    pub logging: bool,
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        Self {
            database_type: "postgres".to_string(),
            host: "localhost".to_string(),
            port: None,
            database: String::new(),
            username: String::new(),
            password: String::new(),
            schema: None,
            synchronize: false,
            logging: false,
        }
    }
}
