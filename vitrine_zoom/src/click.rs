// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click input: pointer position plus the modifier keys held at the time.

use kurbo::Point;

bitflags::bitflags! {
    /// Modifier keys that alter how a click is interpreted.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift flips the zoom direction.
        const SHIFT = 0b0000_0001;
        /// Control jumps to the inspect view.
        const CTRL  = 0b0000_0010;
    }
}

impl Modifiers {
    /// Builds a modifier set from the boolean flags carried by pointer events.
    #[must_use]
    pub fn from_keys(shift: bool, ctrl: bool) -> Self {
        let mut mods = Self::empty();
        mods.set(Self::SHIFT, shift);
        mods.set(Self::CTRL, ctrl);
        mods
    }
}

/// A single click on the active image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Click {
    /// Pointer position in client (viewport) coordinates.
    pub position: Point,
    /// Modifier keys held during the click.
    pub modifiers: Modifiers,
}

impl Click {
    /// Creates a click at `position` with the given modifiers.
    #[must_use]
    pub const fn new(position: Point, modifiers: Modifiers) -> Self {
        Self {
            position,
            modifiers,
        }
    }

    /// Creates an unmodified click at `position`.
    #[must_use]
    pub const fn plain(position: Point) -> Self {
        Self::new(position, Modifiers::empty())
    }

    /// Returns `true` when shift was held.
    #[must_use]
    pub fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }

    /// Returns `true` when control was held.
    #[must_use]
    pub fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }
}
