//! Library-level tests for whole barrel runs

use barrelgen::{
    core::BarrelGenerator,
    models::{
        barrel::ExtensionFamily,
        config::{AnonymousExportPolicy, OutputMode, PartialSettings, Settings},
        report::BarrelOutcome,
    },
};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// A small component library in the layout the tool is meant for
fn create_component_library(root: &Path) {
    write(&root.join("Button.tsx"), "export default function Button() {\n  return null;\n}\n");
    write(&root.join("useToggle.ts"), "const useToggle = () => {};\nexport default useToggle;\n");
    write(&root.join("types.ts"), "export interface Props {}\n");
    write(&root.join("Modal").join("index.tsx"), "export default class Modal {}\n");
    write(&root.join("Modal").join("Backdrop.tsx"), "export default function Backdrop() {}\n");
    write(&root.join("styles").join("theme.css"), "body {}\n");
    write(&root.join("README.md"), "# components\n");
}

#[test]
fn test_generate_component_library() {
    let dir = tempdir().unwrap();
    create_component_library(dir.path());

    let report = BarrelGenerator::new(Settings::default()).generate(dir.path()).unwrap();

    let barrel = dir.path().join("index.ts");
    assert_eq!(
        report.outcome,
        BarrelOutcome::Written {
            path: barrel.clone(),
            family: ExtensionFamily::Typed,
        }
    );
    assert_eq!(
        fs::read_to_string(&barrel).unwrap(),
        "export { default as Button } from './Button';\n\
         export { default as useToggle } from './useToggle';\n\
         export { default as Modal } from './Modal';"
    );
}

#[test]
fn test_nothing_found_writes_nothing() {
    let dir = tempdir().unwrap();
    write(&dir.path().join("notes.txt"), "export default Foo");
    write(&dir.path().join("styles").join("index.css"), "body {}");
    write(&dir.path().join("helpers.js"), "module.exports = {};");

    let before = entries(dir.path());
    let report = BarrelGenerator::new(Settings::default()).generate(dir.path()).unwrap();

    assert_eq!(report.outcome, BarrelOutcome::NothingFound);
    assert_eq!(entries(dir.path()), before);
}

#[test]
fn test_named_function_in_widget() {
    let dir = tempdir().unwrap();
    write(&dir.path().join("widget.js"), "export default function Foo() {}");

    BarrelGenerator::new(Settings::default()).generate(dir.path()).unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join("index.js")).unwrap(),
        "export { default as Foo } from './widget';"
    );
}

#[test]
fn test_index_module_uses_directory_name() {
    let dir = tempdir().unwrap();
    write(&dir.path().join("moduleFoo").join("index.ts"), "export default class Foo {}");

    let report = BarrelGenerator::new(Settings::default()).generate(dir.path()).unwrap();

    assert_eq!(report.statements.len(), 1);
    assert_eq!(report.statements[0].specifier, "./moduleFoo");
    assert_eq!(
        fs::read_to_string(dir.path().join("index.ts")).unwrap(),
        "export { default as Foo } from './moduleFoo';"
    );
}

#[test]
fn test_ambiguous_index_is_skipped() {
    let dir = tempdir().unwrap();
    write(&dir.path().join("both").join("index.js"), "export default function A() {}");
    write(&dir.path().join("both").join("index.ts"), "export default function B() {}");
    write(&dir.path().join("solo.ts"), "export default function Solo() {}");

    let report = BarrelGenerator::new(Settings::default()).generate(dir.path()).unwrap();

    // Only the direct file contributes; the mixed index files never reach the tally
    assert_eq!(
        report.outcome,
        BarrelOutcome::Written {
            path: dir.path().join("index.ts"),
            family: ExtensionFamily::Typed,
        }
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("index.ts")).unwrap(),
        "export { default as Solo } from './solo';"
    );
}

#[test]
fn test_family_conflict_writes_nothing() {
    let dir = tempdir().unwrap();
    write(&dir.path().join("a.js"), "export default function A() {}");
    write(&dir.path().join("b.ts"), "export default function B() {}");

    let report = BarrelGenerator::new(Settings::default()).generate(dir.path()).unwrap();

    assert_eq!(
        report.outcome,
        BarrelOutcome::FamilyConflict {
            script: vec![dir.path().join("a.js")],
            typed: vec![dir.path().join("b.ts")],
        }
    );
    assert!(!dir.path().join("index.js").exists());
    assert!(!dir.path().join("index.ts").exists());
}

#[test]
fn test_conflict_counts_files_without_exports() {
    let dir = tempdir().unwrap();
    write(&dir.path().join("a.ts"), "export default function A() {}");
    write(&dir.path().join("legacy.js"), "module.exports = 1;");

    let report = BarrelGenerator::new(Settings::default()).generate(dir.path()).unwrap();

    assert!(matches!(report.outcome, BarrelOutcome::FamilyConflict { .. }));
}

#[test]
fn test_second_run_is_identical() {
    let dir = tempdir().unwrap();
    create_component_library(dir.path());
    let generator = BarrelGenerator::new(Settings::default());

    generator.generate(dir.path()).unwrap();
    let first = fs::read(dir.path().join("index.ts")).unwrap();

    let report = generator.generate(dir.path()).unwrap();
    let second = fs::read(dir.path().join("index.ts")).unwrap();

    assert_eq!(first, second);
    assert!(report
        .statements
        .iter()
        .all(|s| s.source != dir.path().join("index.ts")));
}

#[test]
fn test_subdirectory_mode() {
    let dir = tempdir().unwrap();
    write(&dir.path().join("Card.jsx"), "export default function Card() {}");
    write(&dir.path().join("list").join("index.js"), "export default function List() {}");

    let settings = PartialSettings {
        output_mode: Some(OutputMode::Subdirectory),
        ..Default::default()
    }
    .to_settings();
    let generator = BarrelGenerator::new(settings);

    generator.generate(dir.path()).unwrap();
    let barrel = dir.path().join("barrel").join("index.js");
    let first = fs::read_to_string(&barrel).unwrap();
    assert_eq!(
        first,
        "export { default as Card } from '../Card';\nexport { default as List } from '../list';"
    );

    // The output directory is not re-scanned as a module directory
    generator.generate(dir.path()).unwrap();
    assert_eq!(fs::read_to_string(&barrel).unwrap(), first);
}

#[test]
fn test_custom_base_name_is_excluded() {
    let dir = tempdir().unwrap();
    write(&dir.path().join("all.ts"), "export default function Stale() {}");
    write(&dir.path().join("fresh.ts"), "export default function Fresh() {}");

    let settings = PartialSettings {
        output_base_name: Some("all".to_string()),
        ..Default::default()
    }
    .to_settings();

    BarrelGenerator::new(settings).generate(dir.path()).unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join("all.ts")).unwrap(),
        "export { default as Fresh } from './fresh';"
    );
}

#[test]
fn test_anonymous_exports_policy() {
    let dir = tempdir().unwrap();
    write(&dir.path().join("date-picker.tsx"), "export default () => {\n  return null;\n};\n");
    write(&dir.path().join("Named.tsx"), "export default function Named() {}");

    let inferred = BarrelGenerator::new(Settings::default()).generate(dir.path()).unwrap();
    let names: Vec<&str> = inferred.statements.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Named", "datePicker"]);

    let settings = Settings {
        anonymous_exports: AnonymousExportPolicy::Skip,
        ..Settings::default()
    };
    let skipped = BarrelGenerator::new(settings).generate(dir.path()).unwrap();
    let names: Vec<&str> = skipped.statements.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Named"]);
}

#[test]
fn test_missing_root_is_an_error() {
    let dir = tempdir().unwrap();
    let result = BarrelGenerator::new(Settings::default()).generate(&dir.path().join("missing"));

    let err = result.unwrap_err();
    assert!(!err.is_critical());
}
