//! Configuration sources driving real runs

use barrelgen::{
    config::{load_config_with_env_prefix, CliArgs},
    core::BarrelGenerator,
    models::config::{OutputMode, SpecifierPrefix},
};
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_config_file_selects_subdirectory_mode() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("barrelgen.toml");
    fs::write(
        &config_path,
        "output_mode = \"subdirectory\"\noutput_dir = \"exports\"\noutput_base_name = \"all\"\n",
    )
    .unwrap();

    let root = dir.path().join("src");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("Card.tsx"), "export default function Card() {}").unwrap();

    let cli_args = CliArgs {
        config: Some(config_path),
        ..Default::default()
    };
    let settings = load_config_with_env_prefix(cli_args, "BARRELGEN_CONFIG_FILE_TEST").unwrap();

    assert_eq!(settings.output_mode, OutputMode::Subdirectory);
    assert_eq!(settings.specifier_prefix, SpecifierPrefix::Parent);

    BarrelGenerator::new(settings).generate(&root).unwrap();

    assert_eq!(
        fs::read_to_string(root.join("exports").join("all.ts")).unwrap(),
        "export { default as Card } from '../Card';"
    );
}

#[test]
fn test_explicit_prefix_overrides_mode() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("barrelgen.toml");
    fs::write(
        &config_path,
        "output_mode = \"subdirectory\"\nspecifier_prefix = \"./\"\n",
    )
    .unwrap();

    let cli_args = CliArgs {
        config: Some(config_path),
        ..Default::default()
    };
    let settings = load_config_with_env_prefix(cli_args, "BARRELGEN_PREFIX_TEST").unwrap();

    assert_eq!(settings.specifier_prefix, SpecifierPrefix::Current);
}

#[test]
fn test_environment_configures_binary() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("Card.jsx"), "export default function Card() {}").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_barrelgen"))
        .args(["--quiet", "."])
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env("BARRELGEN_OUTPUT_MODE", "subdirectory")
        .env("BARRELGEN_OUTPUT_DIR", "generated")
        .env_remove("BARRELGEN_OUTPUT_BASE_NAME")
        .env_remove("BARRELGEN_SPECIFIER_PREFIX")
        .env_remove("BARRELGEN_ANONYMOUS_EXPORTS")
        .output()
        .expect("Failed to run barrelgen");

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    assert_eq!(
        fs::read_to_string(dir.path().join("generated").join("index.js")).unwrap(),
        "export { default as Card } from '../Card';"
    );
}
