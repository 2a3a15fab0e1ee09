use super::*;
use figment::Jail;

/// Point HOME into the jail so a real user config cannot leak into tests
fn isolate_home(jail: &mut Jail) {
    let home = jail.directory().to_path_buf();
    jail.set_env("HOME", home.display());
}

#[test]
fn test_config_loads_defaults() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        let config = ParfactConfig::load().map_err(|e| e.to_string())?;

        assert_eq!(config.default_strategy, Strategy::Thread);
        assert_eq!(config.parallel.workers, 0);
        // The embedded file caps CLI runs, the library default does not
        assert_eq!(config.parallel.max_workers, 4096);
        assert_eq!(ParfactConfig::default().parallel.max_workers, 0);
        assert_eq!(config.parallel.long_running_threshold, 10_000);
        Ok(())
    });
}

#[test]
fn test_repository_config_overrides_defaults() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        jail.create_file(
            "parfact.toml",
            r#"
                default_strategy = "parallel-map"

                [parallel]
                workers = 6
            "#,
        )?;

        let config = ParfactConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.default_strategy, Strategy::ParallelMap);
        assert_eq!(config.parallel.workers, 6);
        // Untouched keys keep their defaults
        assert_eq!(config.parallel.max_workers, 4096);
        Ok(())
    });
}

#[test]
fn test_user_config_is_read_from_home() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        std::fs::create_dir_all(jail.directory().join(".config/parfact"))
            .map_err(|e| e.to_string())?;
        jail.create_file(".config/parfact/config.toml", "[parallel]\nworkers = 3\n")?;

        let config = ParfactConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.parallel.workers, 3);
        Ok(())
    });
}

#[test]
fn test_environment_has_highest_priority() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        jail.create_file("parfact.toml", "[parallel]\nworkers = 6\n")?;
        jail.set_env("PARFACT_PARALLEL__WORKERS", 2);
        jail.set_env("PARFACT_DEFAULT_STRATEGY", "task");

        let config = ParfactConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.parallel.workers, 2);
        assert_eq!(config.default_strategy, Strategy::Task);
        Ok(())
    });
}

#[test]
fn test_custom_config_replaces_file_layers() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        jail.create_file("parfact.toml", "[parallel]\nworkers = 6\n")?;
        jail.create_file("custom.toml", "[parallel]\nmax_workers = 16\n")?;

        let config =
            ParfactConfig::load_with_custom_config(Some("custom.toml")).map_err(|e| e.to_string())?;
        assert_eq!(config.parallel.max_workers, 16);
        // parfact.toml is ignored when a custom file is given
        assert_eq!(config.parallel.workers, 0);
        Ok(())
    });
}

#[test]
fn test_missing_custom_config_is_an_error() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        let err = ParfactConfig::load_with_custom_config(Some("non_existent.toml")).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
        Ok(())
    });
}

#[test]
fn test_invalid_strategy_is_rejected() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        jail.create_file("parfact.toml", "default_strategy = \"quantum\"\n")?;

        assert!(ParfactConfig::load().is_err());
        Ok(())
    });
}
