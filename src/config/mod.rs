use once_cell::sync::Lazy;
use rocket::serde::Deserialize;

/// where the config file is looked up, relative to the working directory
#[cfg(not(test))]
static CONFIG_FILE: &str = "./NotesServer.toml";

#[derive(Deserialize, Clone, Debug)]
#[serde(crate = "rocket::serde")]
pub struct DbConfig {
    pub location: String,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(crate = "rocket::serde")]
pub struct UploadConfig {
    pub directory: String,
    #[serde(rename = "maxfilesizemib")]
    pub max_file_size_mib: u64,
}

/// credentials for the developer endpoints. Both must be set, otherwise every admin request is refused
#[derive(Deserialize, Clone, Debug, Default)]
#[serde(crate = "rocket::serde")]
pub struct AdminConfig {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(crate = "rocket::serde")]
pub struct ClientConfig {
    #[serde(rename = "staticdirectory")]
    pub static_directory: String,
}

/// config properties for the whole of this application
#[derive(Deserialize, Clone, Debug)]
#[serde(crate = "rocket::serde")]
pub struct NotesServerConfig {
    pub database: DbConfig,
    pub uploads: UploadConfig,
    #[serde(default)]
    pub admin: AdminConfig,
    pub client: ClientConfig,
}

impl UploadConfig {
    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mib * 1024 * 1024
    }
}

impl AdminConfig {
    /// returns the configured username and password, if both are present and non-empty
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(user), Some(pass)) if !user.trim().is_empty() && !pass.is_empty() => {
                Some((user, pass))
            }
            _ => None,
        }
    }
}

/// Parses the config file located at ./NotesServer.toml, if it exists, layered with `NOTES_` environment
/// variables (e.g. `NOTES_ADMIN__PASSWORD`).
/// If this fails to parse, the application will panic
#[cfg(not(test))]
pub fn parse_config() -> NotesServerConfig {
    use config::{Config, Environment, File};

    if !std::path::Path::new(CONFIG_FILE).exists() {
        log::warn!("No config file found at {CONFIG_FILE}. Continuing startup...");
    }
    let builder = Config::builder()
        .add_source(File::with_name(CONFIG_FILE).required(false))
        .add_source(
            Environment::with_prefix("NOTES")
                .prefix_separator("_")
                .separator("__"),
        )
        .set_default("database.location", NOTES_CONFIG_DEFAULT.database.location.clone())
        .and_then(|b| b.set_default("uploads.directory", NOTES_CONFIG_DEFAULT.uploads.directory.clone()))
        .and_then(|b| {
            b.set_default(
                "uploads.maxfilesizemib",
                NOTES_CONFIG_DEFAULT.uploads.max_file_size_mib as i64,
            )
        })
        .and_then(|b| {
            b.set_default(
                "client.staticdirectory",
                NOTES_CONFIG_DEFAULT.client.static_directory.clone(),
            )
        });
    let settings = match builder.and_then(|b| b.build()) {
        Ok(s) => s,
        Err(e) => {
            // basically everything here is unrecoverable
            log::error!("Failed to parse config file. Exception is {e}");
            panic!("Failed to parse config file. Exception is {e}");
        }
    };
    let parsed: NotesServerConfig = match settings.try_deserialize() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to read config values. Exception is {e}");
            panic!("Failed to read config values. Exception is {e}");
        }
    };
    if parsed.admin.credentials().is_none() {
        log::warn!("admin.username / admin.password are not configured; developer endpoints will reject every request");
    }
    parsed
}

/// tests never read the disk or environment, so every test thread sees the same known credentials
#[cfg(test)]
pub fn parse_config() -> NotesServerConfig {
    let mut config = NOTES_CONFIG_DEFAULT.clone();
    config.admin = AdminConfig {
        username: Some(crate::test::ADMIN_USERNAME.to_string()),
        password: Some(crate::test::ADMIN_PASSWORD.to_string()),
    };
    config
}

/// global variable for config, that way it doesn't need to be repeatedly parsed
pub static NOTES_SERVER_CONFIG: Lazy<NotesServerConfig> = Lazy::new(parse_config);
static NOTES_CONFIG_DEFAULT: Lazy<NotesServerConfig> = Lazy::new(|| NotesServerConfig {
    database: DbConfig {
        location: "./notes.sqlite".to_string(),
    },
    uploads: UploadConfig {
        directory: "./uploads".to_string(),
        max_file_size_mib: 50,
    },
    admin: AdminConfig::default(),
    client: ClientConfig {
        static_directory: "./public".to_string(),
    },
});
