//! Core state logic for the property parameter picker: the closed
//! category enumeration, the per-category slider specification catalog,
//! and the selection state machine that keeps every slider value inside
//! its active bounds.

use log::debug;
use std::fmt;

pub mod analytics;
pub mod config;
pub mod controller;
pub mod emitter;
pub mod url_sync;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

/// Number of sliders shown for every category.
pub const SLIDER_COUNT: usize = 3;

/// The fixed set of property categories. Never extended at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Residential,
    Commercial,
    Industrial,
}

impl Category {
    /// All categories in enumeration order; the first is the startup default.
    pub const ALL: [Category; 3] = [
        Category::Residential,
        Category::Commercial,
        Category::Industrial,
    ];

    /// Stable identifier used in URLs and analytics payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Residential => "residential",
            Category::Commercial => "commercial",
            Category::Industrial => "industrial",
        }
    }

    /// Capitalized name for buttons and dropdown options.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Residential => "Residential",
            Category::Commercial => "Commercial",
            Category::Industrial => "Industrial",
        }
    }

    /// Parse a category identifier coming from the UI. Anything outside
    /// the fixed enumeration is rejected here, before it can reach the
    /// state machine.
    pub fn parse(input: &str) -> Result<Category, SelectionError> {
        match input {
            "residential" => Ok(Category::Residential),
            "commercial" => Ok(Category::Commercial),
            "industrial" => Ok(Category::Industrial),
            other => Err(SelectionError::UnknownCategory(other.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one of the three slider controls. The set is closed, so a
/// slider id absent from the active category cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliderId {
    Slider1,
    Slider2,
    Slider3,
}

impl SliderId {
    /// All slider ids in display order.
    pub const ALL: [SliderId; SLIDER_COUNT] =
        [SliderId::Slider1, SliderId::Slider2, SliderId::Slider3];

    pub fn as_str(self) -> &'static str {
        match self {
            SliderId::Slider1 => "slider1",
            SliderId::Slider2 => "slider2",
            SliderId::Slider3 => "slider3",
        }
    }

    fn index(self) -> usize {
        match self {
            SliderId::Slider1 => 0,
            SliderId::Slider2 => 1,
            SliderId::Slider3 => 2,
        }
    }
}

impl fmt::Display for SliderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bounds, step size, and display label for one slider under one
/// category. Invariants: `min < max`, `step > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderSpec {
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub label: &'static str,
}

impl SliderSpec {
    /// Neutral default value for this spec.
    #[inline]
    pub fn midpoint(self) -> u32 {
        (self.min + self.max) / 2
    }

    /// Inclusive range check, matching the semantics of a physical
    /// slider control. Step alignment is deliberately not checked.
    #[inline]
    pub fn contains(self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Look up the slider specification for a category/slider pair.
///
/// Pure and total over the closed `Category` × `SliderId` product; the
/// table is a compile-time constant.
pub fn spec_for(category: Category, slider: SliderId) -> SliderSpec {
    use Category::*;
    use SliderId::*;

    match (category, slider) {
        (Residential, Slider1) => SliderSpec { min: 0, max: 100, step: 1, label: "Price Range (k)" },
        (Residential, Slider2) => SliderSpec { min: 1, max: 10, step: 1, label: "Bedrooms" },
        (Residential, Slider3) => SliderSpec { min: 500, max: 5000, step: 50, label: "Square Feet" },
        (Commercial, Slider1) => SliderSpec { min: 0, max: 1000, step: 10, label: "Budget (k)" },
        (Commercial, Slider2) => SliderSpec { min: 1, max: 50, step: 1, label: "Floors" },
        (Commercial, Slider3) => SliderSpec { min: 1000, max: 50000, step: 100, label: "Square Feet" },
        (Industrial, Slider1) => SliderSpec { min: 0, max: 5000, step: 50, label: "Investment (k)" },
        (Industrial, Slider2) => SliderSpec { min: 1, max: 100, step: 1, label: "Units" },
        (Industrial, Slider3) => SliderSpec { min: 5000, max: 100000, step: 500, label: "Square Feet" },
    }
}

// Custom error type for selection state transitions
#[derive(Debug)]
pub enum SelectionError {
    /// A slider update outside the active spec's `[min, max]`. Rejected
    /// rather than clamped so the bounds invariant is enforced at the
    /// boundary.
    OutOfRange {
        slider: SliderId,
        value: u32,
        min: u32,
        max: u32,
    },
    /// A category identifier outside the fixed enumeration.
    UnknownCategory(String),
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::OutOfRange { slider, value, min, max } => write!(
                f,
                "value {} for {} is outside the allowed range [{}, {}]",
                value, slider, min, max
            ),
            SelectionError::UnknownCategory(input) => {
                write!(f, "unknown property category: '{}'", input)
            }
        }
    }
}

impl std::error::Error for SelectionError {}

/// One slider's contribution to a [`Snapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderReading {
    pub id: SliderId,
    pub label: &'static str,
    pub value: u32,
}

/// Immutable copy of the selection state plus the labels needed for
/// emission, taken at a single point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub category: Category,
    pub sliders: [SliderReading; SLIDER_COUNT],
}

/// The mutable selection state: the active category and one value per
/// slider. After every transition each value lies inside its current
/// spec's `[min, max]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    category: Category,
    values: [u32; SLIDER_COUNT],
}

impl Selection {
    /// Startup state: first enumerated category, all sliders at the
    /// midpoint of their spec.
    pub fn new() -> Self {
        Self::with_category(Category::ALL[0])
    }

    pub fn with_category(category: Category) -> Self {
        let mut selection = Selection {
            category,
            values: [0; SLIDER_COUNT],
        };
        selection.reset_to_midpoints();
        selection
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn value(&self, slider: SliderId) -> u32 {
        self.values[slider.index()]
    }

    /// Replace the active category and reset every slider to the new
    /// specs' midpoints, discarding the previous values. Selecting the
    /// category that is already active performs the same full reset.
    pub fn switch_category(&mut self, category: Category) {
        self.category = category;
        self.reset_to_midpoints();
        debug!("category switched to {}, sliders reset to defaults", category);
    }

    /// Store a slider value verbatim if it lies inside the active
    /// spec's inclusive range; otherwise reject it and leave the prior
    /// value unchanged.
    pub fn update_slider(&mut self, slider: SliderId, value: u32) -> Result<(), SelectionError> {
        let spec = spec_for(self.category, slider);
        if !spec.contains(value) {
            return Err(SelectionError::OutOfRange {
                slider,
                value,
                min: spec.min,
                max: spec.max,
            });
        }
        self.values[slider.index()] = value;
        debug!("{} set to {}", slider, value);
        Ok(())
    }

    /// Immutable copy of the current state with the active category's
    /// display labels attached.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            category: self.category,
            sliders: SliderId::ALL.map(|slider| SliderReading {
                id: slider,
                label: spec_for(self.category, slider).label,
                value: self.values[slider.index()],
            }),
        }
    }

    fn reset_to_midpoints(&mut self) {
        for slider in SliderId::ALL {
            self.values[slider.index()] = spec_for(self.category, slider).midpoint();
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}
