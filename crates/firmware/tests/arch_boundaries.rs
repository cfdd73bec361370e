//! Architecture boundary tests: run with `cargo test -p firmware --test arch_boundaries`
// Architecture test file: expect/unwrap/panic are intentional test mechanisms.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//!
//! These tests enforce the layering rules of the workspace:
//!   Rule 1: platform (HAL) depends on no workspace crate
//!   Rule 2: synthesis depends only on platform
//!   Rule 3: firmware (register drivers) depends only on platform
//!   Rule 4: ui depends on synthesis + platform, never on firmware
//!
//! # How enforcement works
//!
//! Each crate's `Cargo.toml` is embedded with `include_str!` and its
//! `[dependencies]` tables are scanned for workspace crate names.
//! Dev-dependencies are ignored: test-only edges (such as this file using
//! `synthesis` and `ui`) are allowed. The remaining tests check that the
//! layers compose through the platform port.

use platform::{Channel, MockToneGenerator, ToneGeneratorPort};

const WORKSPACE_CRATES: [&str; 5] = ["platform", "synthesis", "firmware", "ui", "cwgen-cli"];

/// Workspace crates named in the normal `[dependencies]` of `manifest`,
/// in either the inline (`name = ...`) or table (`[dependencies.name]`) form.
fn workspace_deps(manifest: &str) -> Vec<&str> {
    let mut section = "";
    let mut deps = Vec::new();
    for line in manifest.lines().map(str::trim) {
        if let Some(header) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            section = header.trim();
            if let Some(name) = section.strip_prefix("dependencies.") {
                deps.push(name.trim());
            }
            continue;
        }
        if section != "dependencies" || line.is_empty() || line.starts_with('#') {
            continue;
        }
        let key = line.split(['=', '.']).next().unwrap().trim();
        deps.push(key);
    }
    deps.retain(|d| WORKSPACE_CRATES.contains(d));
    deps
}

#[test]
fn platform_manifest_has_no_workspace_deps() {
    let deps = workspace_deps(include_str!("../../platform/Cargo.toml"));
    assert!(deps.is_empty(), "platform must stay at the bottom, found {deps:?}");
}

#[test]
fn synthesis_manifest_depends_only_on_platform() {
    let deps = workspace_deps(include_str!("../../synthesis/Cargo.toml"));
    assert_eq!(deps, ["platform"]);
}

#[test]
fn firmware_manifest_depends_only_on_platform() {
    let deps = workspace_deps(include_str!("../Cargo.toml"));
    assert_eq!(deps, ["platform"]);
}

#[test]
fn ui_manifest_never_depends_on_firmware() {
    let deps = workspace_deps(include_str!("../../ui/Cargo.toml"));
    assert!(!deps.contains(&"firmware"), "ui must not depend on firmware: {deps:?}");
    assert_eq!(deps, ["platform", "synthesis"]);
}

#[test]
fn dependency_scanner_sees_both_forms_and_skips_dev_deps() {
    let manifest = "[dependencies]\nplatform = { path = \"../platform\" }\n\
                    heapless.workspace = true\n\n[dependencies.ui]\npath = \"../ui\"\n\n\
                    [dev-dependencies]\nfirmware = { path = \"../firmware\" }\n";
    assert_eq!(workspace_deps(manifest), ["platform", "ui"]);
}

/// The port trait and domain types are reachable without firmware code.
#[test]
fn platform_hal_is_independent() {
    fn _assert_port_trait_exists<T: ToneGeneratorPort>() {}
    _assert_port_trait_exists::<MockToneGenerator>();

    assert_eq!(Channel::try_from(2u8), Ok(Channel::Channel2));
}

/// The firmware driver satisfies the platform port on its own.
#[test]
fn firmware_driver_implements_platform_port() {
    fn _assert_port<T: ToneGeneratorPort>() {}
    _assert_port::<firmware::Esp32ToneGenerator<firmware::RegisterFile>>();
}

/// The synthesis model is generic over the port, not tied to a driver.
///
/// Running the same search against the mock and the firmware driver must
/// produce the same parameters.
#[test]
fn synthesis_is_driver_agnostic() {
    use synthesis::FrequencySynthesisModel;

    let mut on_mock = FrequencySynthesisModel::new(132.5, MockToneGenerator::new());
    let mut on_driver = FrequencySynthesisModel::new(
        132.5,
        firmware::Esp32ToneGenerator::new(firmware::RegisterFile::new()),
    );
    let a = on_mock.search_best_frequency(2_500.0);
    let b = on_driver.search_best_frequency(2_500.0);
    assert_eq!(a, b);
    assert_eq!(on_mock.port().divisor, b.divisor);
    assert_eq!(on_mock.port().step, b.step);
}

/// The `ui` control panel drives any port through the model.
#[test]
fn ui_panel_starts_on_speaker_channel() {
    use synthesis::FrequencySynthesisModel;
    use ui::ControlPanel;

    let mut model = FrequencySynthesisModel::new(132.5, MockToneGenerator::new());
    let mut panel = ControlPanel::new();
    panel.start(&mut model);
    assert!(model.is_enabled(platform::config::SPEAKER_CHANNEL));
    assert_eq!(panel.output_channel(), Channel::Channel2);
}
