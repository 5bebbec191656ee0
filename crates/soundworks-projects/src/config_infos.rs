//! Summary of a project's configuration files

use camino::Utf8PathBuf;
use soundworks_core::config::ENV_PATTERN;
use soundworks_core::{ApplicationConfig, ConfigStore, ProjectPaths, Record};

use crate::env::launch_hint;
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct EnvEntry {
    pub path: Utf8PathBuf,
    pub name: String,
    pub record: Record,
    /// Command starting the application with this environment
    pub hint: String,
}

#[derive(Debug, Clone)]
pub struct ConfigInfos {
    pub application_path: Utf8PathBuf,
    pub application: ApplicationConfig,
    pub envs: Vec<EnvEntry>,
}

impl ConfigInfos {
    /// One line per client: name, runtime and default marker
    pub fn client_lines(&self) -> Vec<String> {
        self.application
            .clients
            .iter()
            .map(|(name, client)| {
                let runtime = client
                    .runtime()
                    .map(|r| r.to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                let marker = if client.default { " (default)" } else { "" };
                format!("{} \t| runtime: {}{}", name, runtime, marker)
            })
            .collect()
    }
}

/// Read the application config and every environment config
pub fn read_config_infos(paths: &ProjectPaths) -> Result<ConfigInfos> {
    let store = ConfigStore::new(paths.config_dir());

    let Some((application_path, application)) = store.read_application()? else {
        return Err(Error::missing_application_config(paths.config_dir().as_str()));
    };

    let envs = store
        .read(ENV_PATTERN)?
        .into_iter()
        .map(|entry| {
            let name = entry.env_name().unwrap_or(entry.stem()).to_string();
            let hint = launch_hint(&entry.path).unwrap_or_default();
            EnvEntry {
                path: entry.path,
                name,
                record: entry.record,
                hint,
            }
        })
        .collect();

    Ok(ConfigInfos {
        application_path,
        application,
        envs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_config_infos() {
        let temp = TempDir::new().unwrap();
        let root = Utf8PathBuf::try_from(temp.path().to_path_buf()).unwrap();
        fs::create_dir_all(root.join("config")).unwrap();
        fs::write(
            root.join("config/application.yaml"),
            "name: app\nauthor: me\nclients:\n  player:\n    target: browser\n    default: true\n  thing:\n    runtime: node\n",
        )
        .unwrap();
        fs::write(root.join("config/env-default.yaml"), "port: 8000\n").unwrap();
        fs::write(root.join("config/env-prod.json"), r#"{ "port": 443 }"#).unwrap();

        let infos = read_config_infos(&ProjectPaths::new(root)).unwrap();

        assert_eq!(infos.application.author, "me");
        assert_eq!(
            infos.client_lines(),
            vec![
                "player \t| runtime: browser (default)".to_string(),
                "thing \t| runtime: node".to_string(),
            ]
        );
        let names: Vec<_> = infos.envs.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["default", "prod"]);
        assert_eq!(infos.envs[1].hint, "ENV=prod npm run dev");
    }

    #[test]
    fn test_missing_application_config() {
        let temp = TempDir::new().unwrap();
        let root = Utf8PathBuf::try_from(temp.path().to_path_buf()).unwrap();

        let err = read_config_infos(&ProjectPaths::new(root)).unwrap_err();
        assert!(matches!(err, Error::MissingApplicationConfig { .. }));
    }
}
