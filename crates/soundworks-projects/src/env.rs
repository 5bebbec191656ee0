//! Create an environment config file

use camino::{Utf8Path, Utf8PathBuf};
use soundworks_core::config::{env_filename, ConfigFormat};
use soundworks_core::types::{AuthConfig, EnvType, HttpsInfos};
use soundworks_core::utils::to_valid_filename;
use soundworks_core::{AnswerProvider, Choice, ConfigStore, EnvConfig, ProjectPaths, Question};
use tracing::info;

use crate::error::{Error, Result};

const DEFAULT_ENV_NAME: &str = "default";
const DEFAULT_PORT: &str = "8000";

/// An environment config ready to be written
#[derive(Debug, Clone)]
pub struct EnvPlan {
    pub name: String,
    pub format: ConfigFormat,
    pub env: EnvConfig,
    config_dir: Utf8PathBuf,
}

impl EnvPlan {
    pub fn filename(&self) -> String {
        env_filename(&self.name, self.format)
    }

    pub fn path(&self) -> Utf8PathBuf {
        self.config_dir.join(self.filename())
    }

    /// File contents as they will be written
    pub fn rendered(&self) -> Result<String> {
        Ok(self.format.render(&self.env.to_record()?)?)
    }

    pub fn apply(&self) -> Result<Utf8PathBuf> {
        let path = self.path();
        if path.exists() {
            return Err(Error::destination_exists(path.as_str()));
        }

        let store = ConfigStore::new(self.config_dir.clone());
        let path = store.write_env(&self.name, self.format, &self.env)?;
        info!("Created {}", path);
        Ok(path)
    }
}

/// Ask everything needed to create an environment config
///
/// The file takes the format of the application config.
pub fn plan_env(paths: &ProjectPaths, answers: &dyn AnswerProvider) -> Result<EnvPlan> {
    let config_dir = paths.config_dir();
    let store = ConfigStore::new(config_dir.clone());

    let Some((_, application)) = store.read_application()? else {
        return Err(Error::missing_application_config(config_dir.as_str()));
    };
    let format = store
        .application_format()?
        .unwrap_or(ConfigFormat::Yaml);

    let name = answers.text(Question::text_with_default(
        "Name of the config",
        DEFAULT_ENV_NAME,
    ))?;
    let name = match name.trim() {
        "" => DEFAULT_ENV_NAME.to_string(),
        name => to_valid_filename(name, None),
    };

    let env_type = match answers
        .select(Question::select(
            "Type:",
            vec![
                Choice::new(EnvType::Development.as_str()),
                Choice::new(EnvType::Production.as_str()),
            ],
        ))?
        .as_str()
    {
        "production" => EnvType::Production,
        _ => EnvType::Development,
    };

    let port = answers.text(Question::text_with_default(
        "Port (default is 80 for http and 443 for https):",
        DEFAULT_PORT,
    ))?;
    let port = parse_port(&port)?;

    let server_address = answers.text(Question::text(
        "Address of the server (domain or ip), leave empty for local development:",
    ))?;

    let use_https = answers.confirm(Question::confirm("Use https?", false))?;

    let base_url = answers.text(Question::text(
        "baseUrl (if the application live behind a proxy server, leave empty for most cases):",
    ))?;

    let https_infos = if use_https {
        let cert = answers.text(Question::text(
            "Path to the cert file (leave blank for self-signed certificates)?",
        ))?;
        let key = answers.text(Question::text(
            "Path to the key file (leave blank for self-signed certificates)?",
        ))?;
        HttpsInfos::new(use_https, &cert, &key)
    } else {
        HttpsInfos::default()
    };

    let mut auth = AuthConfig::default();
    let protect = answers.confirm(Question::confirm(
        "Do you want to protect some clients with a password?",
        false,
    ))?;

    if protect {
        let choices = application
            .browser_clients()
            .into_iter()
            .map(Choice::new)
            .collect();
        auth.clients = answers.multi_select(Question::multi_select(
            "Which clients would you like to protect?",
            choices,
        ))?;
        auth.login = answers.text(Question::text("Define a login:"))?.trim().to_string();
        auth.password = answers
            .text(Question::text("Define a password:"))?
            .trim()
            .to_string();
    }

    let env = EnvConfig {
        env_type,
        port,
        base_url: base_url.trim().to_string(),
        server_address: server_address.trim().to_string(),
        use_https,
        https_infos,
        auth,
        ..Default::default()
    };

    Ok(EnvPlan {
        name,
        format,
        env,
        config_dir,
    })
}

fn parse_port(input: &str) -> Result<u16> {
    let input = input.trim();
    if input.is_empty() {
        return parse_port(DEFAULT_PORT);
    }

    input.parse().map_err(|_| {
        soundworks_core::Error::prompt(format!("Invalid port \"{}\"", input)).into()
    })
}

/// Hint printed once an environment exists
pub fn launch_hint(env_path: &Utf8Path) -> Option<String> {
    let stem = env_path.file_stem()?;
    let name = stem.strip_prefix("env-")?;
    Some(format!("ENV={} npm run dev", name))
}
