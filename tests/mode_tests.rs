//! Integration tests for ModeMachine

mod common;
use common::*;

use glyph_matrix::{
    Button, DisplayMode, MatrixConfig, MatrixRenderer, ModeMachine, ModeTransition, RawColor,
};

#[test]
fn machine_starts_idle() {
    let machine = ModeMachine::<TestInstant>::new(TestDuration(400));
    assert_eq!(machine.state(), DisplayMode::Idle);
}

#[test]
fn button_a_selects_demo_and_button_b_selects_message() {
    let mut machine = ModeMachine::<TestInstant>::from_config(&MatrixConfig::default());

    assert_eq!(
        machine.handle_edge(Button::A, TestInstant(0)),
        Some(ModeTransition {
            from: DisplayMode::Idle,
            to: DisplayMode::Demo,
        })
    );
    assert_eq!(
        machine.handle_edge(Button::B, TestInstant(500)),
        Some(ModeTransition {
            from: DisplayMode::Demo,
            to: DisplayMode::Message,
        })
    );
}

#[test]
fn bounces_inside_window_are_dropped() {
    let mut machine = ModeMachine::<TestInstant>::new(TestDuration(400));
    machine.handle_edge(Button::B, TestInstant(1_000));
    assert_eq!(machine.handle_edge(Button::A, TestInstant(1_010)), None);
    assert_eq!(machine.handle_edge(Button::A, TestInstant(1_399)), None);
    assert_eq!(machine.state(), DisplayMode::Message);
}

#[test]
fn repeated_press_of_active_mode_is_not_a_transition() {
    let mut machine = ModeMachine::<TestInstant>::new(TestDuration(400));
    machine.handle_edge(Button::A, TestInstant(0));
    assert_eq!(machine.handle_edge(Button::A, TestInstant(1_000)), None);
    assert_eq!(machine.state(), DisplayMode::Demo);
}

#[test]
fn poll_loop_runs_mode_then_returns_to_idle() {
    let mut machine = ModeMachine::<TestInstant>::new(TestDuration(400));
    let mut renderer: MatrixRenderer<MockSink, MockDelay> =
        MatrixRenderer::new(MockSink::new(), MockDelay::new());
    let color = RawColor::new(100, 156, 255);

    let edges = [
        (Button::from_gpio(6), TestInstant(100)),
        (Button::from_gpio(6), TestInstant(150)),
        (Button::from_gpio(5), TestInstant(900)),
    ];

    let mut modes_run = Vec::new();
    for (button, now) in edges {
        let Some(button) = button else { continue };
        if machine.handle_edge(button, now).is_some() {
            let mode = machine.state();
            renderer.run_mode(mode, "HI", color, || false).unwrap();
            modes_run.push(mode);
            machine.finish();
        }
    }

    assert_eq!(modes_run, vec![DisplayMode::Message, DisplayMode::Demo]);
    assert_eq!(machine.state(), DisplayMode::Idle);
}
