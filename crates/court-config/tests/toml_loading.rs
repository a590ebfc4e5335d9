use figment::Jail;
use pretty_assertions::assert_eq;
use court_config::CourtConfig;

#[test]
fn project_file_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.create_dir(".courtside")?;
        jail.create_file(
            ".courtside/config.toml",
            r#"
[server]
port = 8080

[database]
path = ":memory:"
"#,
        )?;

        let config: CourtConfig = CourtConfig::figment(None).extract()?;
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(config.database.is_in_memory());
        assert_eq!(config.general.default_limit, 50);
        Ok(())
    });
}

#[test]
fn explicit_file_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".courtside")?;
        jail.create_file(".courtside/config.toml", "[general]\ndefault_limit = 10\n")?;
        jail.create_file("custom.toml", "[general]\ndefault_limit = 25\n")?;

        let config = CourtConfig::load_from(Some(std::path::Path::new("custom.toml")))
            .expect("config loads");
        assert_eq!(config.general.default_limit, 25);
        Ok(())
    });
}

#[test]
fn season_opener_from_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            "[general]\nseason_opener = \"2026-10-20T19:30:00\"\n",
        )?;

        let config = CourtConfig::load_from(Some(std::path::Path::new("config.toml")))
            .expect("config loads");
        let opener = config.general.season_opener().expect("valid opener");
        assert_eq!(opener.to_string(), "2026-10-20 19:30:00");
        Ok(())
    });
}

#[test]
fn wrong_type_is_an_error() {
    Jail::expect_with(|jail| {
        jail.create_file("bad.toml", "[server]\nport = \"not a port\"\n")?;
        assert!(CourtConfig::load_from(Some(std::path::Path::new("bad.toml"))).is_err());
        Ok(())
    });
}
