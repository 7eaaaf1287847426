use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("falha ao acessar {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parâmetros inválidos em {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Parâmetros nomeados do modelo, lidos de um arquivo JSON.
///
/// Só o seed é tipado; o resto fica em `extra` e volta intacto pro arquivo.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelParams {
    #[serde(rename = "model.RandomState", default)]
    pub random_state: Option<u64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ModelParams {
    pub fn from_file(path: impl AsRef<Path>) -> Result<ModelParams, ConfigError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let params = Self::parse(&data, path.display().to_string())?;
        info!(
            "config: loaded {} (seed: {:?}, {} other parameters)",
            path.display(),
            params.random_state,
            params.extra.len()
        );

        Ok(params)
    }

    pub fn from_json_str(data: &str) -> Result<ModelParams, ConfigError> {
        Self::parse(data, "<string>".to_string())
    }

    fn parse(data: &str, origin: String) -> Result<ModelParams, ConfigError> {
        serde_json::from_str(data).map_err(|source| ConfigError::Parse { origin, source })
    }

    /// Garante que existe um seed: usa o já configurado ou grava o devolvido por `fresh`.
    pub fn ensure_seed(&mut self, fresh: impl FnOnce() -> u64) -> u64 {
        match self.random_state {
            Some(seed) => seed,
            None => {
                let seed = fresh();
                debug!("config: no model.RandomState, recording fresh seed {}", seed);
                self.random_state = Some(seed);
                seed
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }

    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let data = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Parse {
            origin: path.display().to_string(),
            source,
        })?;

        fs::write(path, data).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!("config: wrote parameters to {}", path.display());

        Ok(())
    }
}
