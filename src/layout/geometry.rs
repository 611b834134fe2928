//! Grid geometry: minutes and lanes to pixels and percentages.
//!
//! # Mapping
//! - `top    = start_minute * px_per_minute`
//! - `height = max(duration * px_per_minute, min_height_px)`
//! - `slot   = 100 / column_count`
//! - `left   = column_index * slot`
//! - `width  = max(slot - gutter_percent, 0)`
//!
//! The gutter is taken from the right edge of every lane, so lanes keep
//! their left edges and `left + width <= 100` always holds.

use serde::{Deserialize, Serialize};

use super::columns::ColumnAssignment;
use crate::error::GridError;

/// Render settings for the time-grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Height of one hour row (px).
    pub pixels_per_hour: f64,
    /// Floor on block height so very short items stay legible (px).
    pub min_height_px: f64,
    /// Horizontal gap at the right of each lane (percent of day width).
    pub gutter_percent: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            pixels_per_hour: 60.0,
            min_height_px: 0.0,
            gutter_percent: 0.0,
        }
    }
}

impl GridConfig {
    /// Creates the default configuration (60 px per hour, no gutter).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hour-row height.
    pub fn with_pixels_per_hour(mut self, pixels_per_hour: f64) -> Self {
        self.pixels_per_hour = pixels_per_hour;
        self
    }

    /// Sets the minimum block height.
    pub fn with_min_height(mut self, min_height_px: f64) -> Self {
        self.min_height_px = min_height_px;
        self
    }

    /// Sets the inter-column gutter.
    pub fn with_gutter(mut self, gutter_percent: f64) -> Self {
        self.gutter_percent = gutter_percent;
        self
    }

    /// Checks the settings are usable.
    pub fn validate(&self) -> Result<(), GridError> {
        if !(self.pixels_per_hour.is_finite() && self.pixels_per_hour > 0.0) {
            return Err(GridError::InvalidConfig(format!(
                "pixels_per_hour must be positive, got {}",
                self.pixels_per_hour
            )));
        }
        if !(self.min_height_px.is_finite() && self.min_height_px >= 0.0) {
            return Err(GridError::InvalidConfig(format!(
                "min_height_px must be non-negative, got {}",
                self.min_height_px
            )));
        }
        if !(0.0..100.0).contains(&self.gutter_percent) {
            return Err(GridError::InvalidConfig(format!(
                "gutter_percent must be in [0, 100), got {}",
                self.gutter_percent
            )));
        }
        Ok(())
    }

    /// Pixels per minute.
    #[inline]
    pub fn pixels_per_minute(&self) -> f64 {
        self.pixels_per_hour / 60.0
    }

    /// Geometry for raw inputs.
    ///
    /// `column_count` of zero is treated as one.
    pub fn geometry(
        &self,
        start_minute: u32,
        end_minute: u32,
        column_index: usize,
        column_count: usize,
    ) -> Geometry {
        let ppm = self.pixels_per_minute();
        let duration = end_minute.saturating_sub(start_minute);
        let slot = 100.0 / column_count.max(1) as f64;

        Geometry {
            top: start_minute as f64 * ppm,
            height: (duration as f64 * ppm).max(self.min_height_px),
            left: column_index as f64 * slot,
            width: (slot - self.gutter_percent).max(0.0),
        }
    }

    /// Geometry for a placed item.
    pub fn geometry_for<P>(&self, assignment: &ColumnAssignment<'_, P>) -> Geometry {
        let range = &assignment.item.range;
        self.geometry(
            range.start_minute(),
            range.end_minute(),
            assignment.column_index,
            assignment.column_count,
        )
    }
}

/// Render box of one item. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Geometry {
    /// Offset from the top of the day column (px).
    pub top: f64,
    /// Block height (px).
    pub height: f64,
    /// Offset from the left of the day column (percent).
    pub left: f64,
    /// Block width (percent).
    pub width: f64,
}

/// Geometry for a placed item with the default [`GridConfig`].
pub fn geometry_for<P>(assignment: &ColumnAssignment<'_, P>) -> Geometry {
    GridConfig::default().geometry_for(assignment)
}
