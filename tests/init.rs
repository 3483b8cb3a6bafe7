//! `log` keeps one global logger per process, so this lives in its own test binary.

use duo_log::*;
use log::LevelFilter;

#[test]
fn second_init_fails_without_touching_max_level() {
    let shared = SharedDefaults::new();
    let installed = Logger::builder(&shared)
        .term_level(Severity::Verbose)
        .config(ConfigBuilder::new().set_color_choice(ColorChoice::Never).build())
        .build()
        .unwrap();
    installed.init().unwrap();
    assert_eq!(log::max_level(), LevelFilter::Trace);

    let muted = Logger::builder(&shared)
        .term_level(Severity::Disabled)
        .build()
        .unwrap();
    assert_eq!(muted.max_level(), Severity::Disabled);

    assert!(muted.init().is_err());
    assert_eq!(log::max_level(), LevelFilter::Trace);
}
