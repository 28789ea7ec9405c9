use super::load::{CONFIG_PATH_ENV, resolve_config_path};
use super::schema::*;
use std::io::Write;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn defaults_match_saavn_search() {
    let settings = Settings::default();
    assert_eq!(settings.api.query, "sonunigam");
    assert_eq!(settings.api.limit, 100);
    assert_eq!(settings.player.tick_interval_ms, 1000);
    assert_eq!(settings.player.audio_quality_index, 4);
    assert!(settings.validate().is_ok());
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let _lock = env_lock();
    let settings =
        Settings::load_from(Some("/nonexistent/saavn/config.toml".into())).unwrap();
    assert_eq!(settings.api.base_url, "https://saavn.dev/");
}

#[test]
fn file_values_override_defaults() {
    let _lock = env_lock();
    let file = write_config(
        r#"
[api]
query = "arijit"
limit = 12

[player]
seek_step_secs = 10
"#,
    );

    let settings = Settings::load_from(Some(file.path().to_path_buf())).unwrap();
    assert_eq!(settings.api.query, "arijit");
    assert_eq!(settings.api.limit, 12);
    assert_eq!(settings.player.seek_step_secs, 10);
    assert_eq!(settings.player.volume, 100);
}

#[test]
fn environment_wins_over_file() {
    let _lock = env_lock();
    let file = write_config("[api]\nlimit = 12\n");
    let _g = EnvGuard::set("SAAVN__API__LIMIT", "7");

    let settings = Settings::load_from(Some(file.path().to_path_buf())).unwrap();
    assert_eq!(settings.api.limit, 7);
}

#[test]
fn resolve_config_path_prefers_explicit_env() {
    let _lock = env_lock();
    let _g = EnvGuard::set(CONFIG_PATH_ENV, "/tmp/saavn-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/saavn-test-config.toml")
    );
}

#[test]
fn validate_rejects_zero_limit_and_tick() {
    let mut settings = Settings::default();
    settings.api.limit = 0;
    assert!(settings.validate().is_err());

    let mut settings = Settings::default();
    settings.player.tick_interval_ms = 0;
    assert!(settings.validate().is_err());
}
