//! Tone integration tests: verify the model driving the ESP32 register driver.
// Integration test file: expect/unwrap/panic are intentional test mechanisms.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//!
//! Tests the interaction between the synthesis model, the platform port
//! trait and the register driver over an in-memory register file.
//!
//! Run with: cargo test -p firmware --test integration_tone

use firmware::tone::esp32::registers::{
    CK8M_DIV_SEL, DAC_CW_EN2, DAC_DC1, DAC_DC2, DAC_INV2, DAC_SCALE1, DAC_SCALE2,
    RTC_CNTL_CLK_CONF_REG, SENS_SAR_DAC_CTRL1_REG, SENS_SAR_DAC_CTRL2_REG, SW_FSTEP, SW_TONE_EN,
};
use firmware::{Esp32ToneGenerator, RegisterFile};
use platform::{Channel, ClockDivisor, DcOffset, FrequencyStep, Scale, WaveformMode};
use synthesis::FrequencySynthesisModel;

type Model = FrequencySynthesisModel<Esp32ToneGenerator<RegisterFile>>;

fn model() -> Model {
    FrequencySynthesisModel::new(132.5, Esp32ToneGenerator::new(RegisterFile::new()))
}

fn reg(model: &Model, address: u32) -> u32 {
    model.port().registers().get(address)
}

/// Construction writes scale, offset and the default divisor/step pair.
#[test]
fn test_new_model_programs_reset_configuration() {
    let m = model();
    let ctrl2 = reg(&m, SENS_SAR_DAC_CTRL2_REG);
    assert_eq!(DAC_SCALE1.extract(ctrl2), 0);
    assert_eq!(DAC_SCALE2.extract(ctrl2), 0);
    assert_eq!(DAC_DC1.extract(ctrl2), 0);
    assert_eq!(SW_FSTEP.extract(reg(&m, SENS_SAR_DAC_CTRL1_REG)), 1);
    assert_eq!(CK8M_DIV_SEL.extract(reg(&m, RTC_CNTL_CLK_CONF_REG)), 0);
}

/// A 1 kHz search lands in CK8M_DIV_SEL and SW_FSTEP.
#[test]
fn test_search_result_reaches_registers() {
    let mut m = model();
    let outcome = m.search_best_frequency(1000.0);
    assert!(outcome.tolerance_met);
    assert_eq!(CK8M_DIV_SEL.extract(reg(&m, RTC_CNTL_CLK_CONF_REG)), 1);
    assert_eq!(SW_FSTEP.extract(reg(&m, SENS_SAR_DAC_CTRL1_REG)), 15);
}

/// Single-field setters touch only their own register.
#[test]
fn test_single_field_setters_touch_one_register() {
    let mut m = model();
    m.search_best_frequency(1000.0);

    m.set_clock_divisor(ClockDivisor::new(4));
    assert_eq!(CK8M_DIV_SEL.extract(reg(&m, RTC_CNTL_CLK_CONF_REG)), 4);
    assert_eq!(SW_FSTEP.extract(reg(&m, SENS_SAR_DAC_CTRL1_REG)), 15);

    m.set_frequency_step(FrequencyStep::new(1234));
    assert_eq!(CK8M_DIV_SEL.extract(reg(&m, RTC_CNTL_CLK_CONF_REG)), 4);
    assert_eq!(SW_FSTEP.extract(reg(&m, SENS_SAR_DAC_CTRL1_REG)), 1234);
}

/// Speaker channel bring-up as the control panel performs it.
#[test]
fn test_speaker_channel_configuration() {
    let mut m = model();
    m.set_scale(Channel::Channel2, Scale::new(1));
    m.set_offset(Channel::Channel2, DcOffset::new(40));
    m.set_mode(Channel::Channel2, WaveformMode::FallingCosineFirst);
    m.enable(Channel::Channel2);

    let ctrl2 = reg(&m, SENS_SAR_DAC_CTRL2_REG);
    assert_eq!(DAC_SCALE2.extract(ctrl2), 1);
    assert_eq!(DAC_DC2.extract(ctrl2), 40);
    assert_eq!(DAC_INV2.extract(ctrl2), 0b01);
    assert_eq!(DAC_CW_EN2.extract(ctrl2), 1);
    assert_eq!(SW_TONE_EN.extract(reg(&m, SENS_SAR_DAC_CTRL1_REG)), 1);

    m.toggle(Channel::Channel2);
    assert_eq!(DAC_CW_EN2.extract(reg(&m, SENS_SAR_DAC_CTRL2_REG)), 0);
    assert!(!m.is_enabled(Channel::Channel2));
}

/// New step latches preserve the tone enable bit sharing CTRL1.
#[test]
fn test_retune_while_running_keeps_tone_enabled() {
    let mut m = model();
    m.enable(Channel::Channel1);
    for hz in [20.0, 440.0, 12_345.0, 1_000_000.0] {
        m.search_best_frequency(hz);
        assert_eq!(SW_TONE_EN.extract(reg(&m, SENS_SAR_DAC_CTRL1_REG)), 1, "{hz} Hz");
        assert_eq!(
            SW_FSTEP.extract(reg(&m, SENS_SAR_DAC_CTRL1_REG)),
            u32::from(m.frequency_step().get())
        );
    }
}
