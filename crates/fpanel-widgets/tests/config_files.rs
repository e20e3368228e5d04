#![forbid(unsafe_code)]
#![cfg(feature = "config")]

//! Loading `FloatingConfig` from files on disk.

use std::io::Write;

use fpanel_layout::Side;
use fpanel_widgets::{ConfigError, FloatingConfig, Popover};
use web_time::Duration;

#[test]
fn toml_file_drives_widgets() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[popover]
side = "right"
side_offset = 12.0
show_arrow = false

[menu]
gap = 4.0
mount_delay_ms = 0

[tabs]
transition_ms = 150
"#
    )
    .unwrap();

    let config = FloatingConfig::from_toml_file(file.path())
        .unwrap()
        .validated()
        .unwrap();

    let popover = Popover::new(config.to_popover_config());
    assert_eq!(popover.config().side, Side::Right);
    assert_eq!(popover.config().side_offset, 12.0);
    assert!(!popover.config().show_arrow);

    let menu = config.to_menu_config();
    assert_eq!(menu.gap, 4.0);
    assert_eq!(menu.mount_delay, Duration::ZERO);
    assert_eq!(menu.debounce, Duration::from_millis(50));

    assert_eq!(
        config.to_tab_indicator_config().transition,
        Duration::from_millis(150)
    );
}

#[test]
fn json_file_with_bad_values_fails_validation() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "popover": {{ "margin": -4.0, "arrow_size": 0.0 }} }}"#
    )
    .unwrap();

    let err = FloatingConfig::from_json_file(file.path())
        .unwrap()
        .validated()
        .unwrap_err();
    let errors = match err {
        ConfigError::Validation(errors) => errors,
        other => panic!("expected validation error, got {other:?}"),
    };
    assert_eq!(errors.len(), 2);
    assert!(err_mentions(&errors, "popover.margin"));
    assert!(err_mentions(&errors, "popover.arrow_size"));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = FloatingConfig::from_toml_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

fn err_mentions(errors: &[String], needle: &str) -> bool {
    errors.iter().any(|e| e.contains(needle))
}
