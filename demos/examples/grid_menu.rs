// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gamepad navigation over a 3×3 menu grid.
//!
//! This example shows how to:
//! - implement `Platform` for a toy UI whose `y` axis grows downward,
//! - drive a `Navigator` with a scripted controller closure,
//! - react to non-directional buttons in `Platform::process_input`.
//!
//! The script presses Right once, holds Down long enough to auto-repeat, then
//! presses Accept.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_pad_demos --example grid_menu`

use kurbo::Point;
use understory_pad_nav::input::{ButtonText, DefaultText};
use understory_pad_nav::{Buttons, FrameInput, InputState, Navigator, Platform, TickOutcome};

const LABELS: [&str; 9] = [
    "New Game", "Continue", "Load", "Options", "Audio", "Video", "Credits", "Extras", "Quit",
];
const COLUMNS: usize = 3;
const CELL: f64 = 120.0;

/// A menu laid out in rows, with focus on one entry.
#[derive(Debug)]
struct Menu {
    focused: usize,
    /// Entry index for each candidate slot of the latest query.
    offered: Vec<usize>,
    chosen: Option<&'static str>,
}

impl Menu {
    fn center(entry: usize) -> Point {
        let (row, column) = (entry / COLUMNS, entry % COLUMNS);
        Point::new((column as f64 + 0.5) * CELL, (row as f64 + 0.5) * CELL)
    }
}

impl Platform for Menu {
    fn flip_y(&self) -> bool {
        true
    }

    fn has_focus(&self) -> bool {
        true
    }

    fn current_position(&self) -> Point {
        Self::center(self.focused)
    }

    fn fill_candidates(&mut self, buffer: &mut [Point]) -> usize {
        self.offered.clear();
        let others = (0..LABELS.len()).filter(|&entry| entry != self.focused);
        for (slot, entry) in buffer.iter_mut().zip(others) {
            *slot = Self::center(entry);
            self.offered.push(entry);
        }
        self.offered.len()
    }

    fn select(&mut self, index: usize) {
        self.focused = self.offered[index];
        println!("  focus -> {}", LABELS[self.focused]);
    }

    fn process_input(&mut self, state: &InputState) {
        if state.is_pressed(Buttons::ACCEPT) {
            self.chosen = Some(LABELS[self.focused]);
        }
    }
}

fn main() {
    env_logger::init();

    // One frame per entry, at roughly 60 Hz.
    let mut script = Vec::new();
    script.push(Buttons::RIGHT);
    script.extend([Buttons::empty(); 3]);
    script.extend([Buttons::DOWN; 30]);
    script.extend([Buttons::empty(); 3]);
    script.push(Buttons::ACCEPT);
    script.push(Buttons::empty());
    let frames = script.len();

    let mut script = script.into_iter();
    let controller = move || FrameInput::new(script.next().unwrap_or_default());
    let menu = Menu {
        focused: 0,
        offered: Vec::new(),
        chosen: None,
    };
    let mut nav = Navigator::new(controller, menu);

    println!("start on {}", LABELS[nav.platform().focused]);
    for frame in 0..frames {
        let outcome = nav.tick_with_delta(1000.0 / 60.0);
        if let TickOutcome::Processed { .. } = outcome {
            let pressed = nav.state().pressed();
            for (_, button) in pressed.iter_names() {
                let name = DefaultText.name(button).unwrap_or("?");
                println!("frame {frame:2}: pressed {name}");
            }
        }
    }

    let menu = nav.platform();
    match menu.chosen {
        Some(label) => println!("accepted {label}"),
        None => println!("nothing accepted; focus on {}", LABELS[menu.focused]),
    }
}
