use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Elevation grid decoded from the course elevation JSON resource.
///
/// Row index 0 corresponds to `max_latitude` and rows advance towards
/// decreasing latitude; column index 0 corresponds to `min_longitude` and
/// columns advance towards increasing longitude. Loaded once per course and
/// read-only afterwards.
#[derive(Asset, TypePath, Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElevationGrid {
    pub max_latitude: f64,
    pub long_points: i32,
    pub step: f64,
    pub elevation_array: Vec<Vec<f64>>,
    pub step_longitude_meters: f64,
    pub step_latitude_meters: f64,
    pub lat_points: i32,
    pub min_longitude: f64,
}

impl ElevationGrid {
    /// Southern latitude bound derived from the grid dimensions.
    pub fn min_latitude(&self) -> f64 {
        self.max_latitude - f64::from(self.lat_points) * self.step
    }

    /// Eastern longitude bound derived from the grid dimensions.
    pub fn max_longitude(&self) -> f64 {
        self.min_longitude + f64::from(self.long_points) * self.step
    }

    /// Check that the elevation matrix matches the declared dimensions.
    ///
    /// A mismatch means the resource is unusable and scene construction must
    /// not proceed, so the message is surfaced to the user verbatim.
    pub fn validate(&self) -> Result<(), String> {
        if self.lat_points <= 0 || self.long_points <= 0 {
            return Err(format!(
                "elevation grid has degenerate dimensions {}x{}",
                self.lat_points, self.long_points
            ));
        }

        if self.elevation_array.len() != self.lat_points as usize {
            return Err(format!(
                "elevation grid declares {} rows but contains {}",
                self.lat_points,
                self.elevation_array.len()
            ));
        }

        for (row_index, row) in self.elevation_array.iter().enumerate() {
            if row.len() != self.long_points as usize {
                return Err(format!(
                    "elevation grid row {} has {} values, expected {}",
                    row_index,
                    row.len(),
                    self.long_points
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
impl ElevationGrid {
    /// Construct a grid with uniform height for geometry tests.
    pub fn flat(lat_points: i32, long_points: i32, height: f64) -> Self {
        Self::with_heights(vec![
            vec![height; long_points as usize];
            lat_points as usize
        ])
    }

    /// Construct a grid around an explicit height matrix, anchored at
    /// (min_longitude 0, max_latitude = rows) with a 1-degree step so cell
    /// indices equal coordinate offsets.
    pub fn with_heights(heights: Vec<Vec<f64>>) -> Self {
        let lat_points = heights.len() as i32;
        let long_points = heights.first().map_or(0, |row| row.len()) as i32;
        Self {
            max_latitude: f64::from(lat_points),
            long_points,
            step: 1.0,
            elevation_array: heights,
            step_longitude_meters: 1.0,
            step_latitude_meters: 1.0,
            lat_points,
            min_longitude: 0.0,
        }
    }
}
