//! Local persistence of era preferences.
//!
//! Desktop keeps a JSON map (user id -> era code) in the platform data
//! directory; on the web the same JSON lives in `localStorage`.

use std::collections::BTreeMap;

use api::{ApiError, PreferenceSink};
use serde::{Deserialize, Serialize};

use super::era::EraCode;

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "chronopath.preferences";
#[cfg(not(target_arch = "wasm32"))]
const FILE_NAME: &str = "preferences.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Preferences {
    #[serde(default)]
    pub preferred_eras: BTreeMap<String, EraCode>,
}

/// Handle to the preference store for the current platform.
#[derive(Debug, Clone, Default)]
pub struct PreferenceFile {
    #[cfg(not(target_arch = "wasm32"))]
    path: Option<std::path::PathBuf>,
}

impl PreferenceFile {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn platform_default() -> Self {
        let path = directories::ProjectDirs::from("org", "Chronopath", "Chronopath")
            .map(|dirs| dirs.data_dir().join(FILE_NAME));
        Self { path }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn platform_default() -> Self {
        Self {}
    }

    /// Store rooted at an explicit file (tests, portable installs).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn at(path: impl Into<std::path::PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn preferred_era(&self, user_id: &str) -> Result<Option<EraCode>, ApiError> {
        Ok(self.load()?.preferred_eras.get(user_id).cloned())
    }

    pub fn save_preferred_era(&self, user_id: &str, era: &EraCode) -> Result<(), ApiError> {
        let mut prefs = self.load()?;
        prefs
            .preferred_eras
            .insert(user_id.to_string(), era.clone());
        self.store(&prefs)
    }

    pub fn load(&self) -> Result<Preferences, ApiError> {
        match self.read_raw()? {
            Some(raw) if !raw.trim().is_empty() => Ok(serde_json::from_str(&raw)?),
            _ => Ok(Preferences::default()),
        }
    }

    fn store(&self, prefs: &Preferences) -> Result<(), ApiError> {
        let raw = serde_json::to_string_pretty(prefs)
            .map_err(|err| ApiError::Storage(format!("serialise preferences: {err}")))?;
        self.write_raw(&raw)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn read_raw(&self) -> Result<Option<String>, ApiError> {
        let Some(path) = &self.path else {
            return Ok(None);
        };
        match std::fs::read_to_string(path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(ApiError::Storage(format!("read {}: {err}", path.display()))),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn write_raw(&self, raw: &str) -> Result<(), ApiError> {
        let path = self
            .path
            .as_ref()
            .ok_or_else(|| ApiError::Storage("no data directory available".into()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|err| ApiError::Storage(format!("create {}: {err}", parent.display())))?;
        }
        std::fs::write(path, raw)
            .map_err(|err| ApiError::Storage(format!("write {}: {err}", path.display())))
    }

    #[cfg(target_arch = "wasm32")]
    fn local_storage() -> Result<web_sys::Storage, ApiError> {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .ok_or_else(|| ApiError::Storage("localStorage unavailable".into()))
    }

    #[cfg(target_arch = "wasm32")]
    fn read_raw(&self) -> Result<Option<String>, ApiError> {
        Self::local_storage()?
            .get_item(STORAGE_KEY)
            .map_err(|_| ApiError::Storage("localStorage read failed".into()))
    }

    #[cfg(target_arch = "wasm32")]
    fn write_raw(&self, raw: &str) -> Result<(), ApiError> {
        Self::local_storage()?
            .set_item(STORAGE_KEY, raw)
            .map_err(|_| ApiError::Storage("localStorage write failed".into()))
    }
}

impl PreferenceSink for PreferenceFile {
    async fn persist_preferred_era(&self, user_id: &str, era: &str) -> Result<(), ApiError> {
        self.save_preferred_era(user_id, &EraCode::from(era))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn scratch_file(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "chronopath-prefs-{}-{name}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir.join(FILE_NAME)
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let store = PreferenceFile::at(scratch_file("missing"));
        assert_eq!(store.load().unwrap(), Preferences::default());
        assert_eq!(store.preferred_era("ada").unwrap(), None);
    }

    #[test]
    fn saved_era_round_trips_per_user() {
        let path = scratch_file("roundtrip");
        let store = PreferenceFile::at(&path);
        block_on(store.persist_preferred_era("ada", "china")).unwrap();
        block_on(store.persist_preferred_era("grace", "islamic")).unwrap();
        block_on(store.persist_preferred_era("ada", "rome-greece")).unwrap();

        let reopened = PreferenceFile::at(&path);
        assert_eq!(
            reopened.preferred_era("ada").unwrap(),
            Some(EraCode::from("rome-greece"))
        );
        assert_eq!(
            reopened.preferred_era("grace").unwrap(),
            Some(EraCode::from("islamic"))
        );
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn corrupt_file_is_a_decode_error() {
        let path = scratch_file("corrupt");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();
        let err = PreferenceFile::at(&path).load().unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn store_without_location_refuses_writes() {
        let store = PreferenceFile::default();
        let err = block_on(store.persist_preferred_era("ada", "china")).unwrap_err();
        assert!(matches!(err, ApiError::Storage(_)));
    }
}
