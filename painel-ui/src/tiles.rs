//! Web Mercator projection for the raster tile map.

use std::f64::consts::PI;

use painel_core::GeoPoint;

pub const TILE_SIZE: f64 = 256.0;
pub const TILE_URL_TEMPLATE: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str = "© OpenStreetMap contributors";

/// Size of the territorial map in pixels.
pub const MAP_WIDTH: f64 = 720.0;
pub const MAP_HEIGHT: f64 = 500.0;

/// Minimum distance in pixels between a fitted marker and the viewport edge.
pub const FIT_PADDING: f64 = 24.0;

/// Pixel position of `point` in the world image at `zoom`.
pub fn project(point: GeoPoint, zoom: u8) -> (f64, f64) {
    let world = TILE_SIZE * f64::from(1u32 << zoom);
    let lat = point.lat.clamp(-85.051_128, 85.051_128).to_radians();
    let x = (point.lon + 180.0) / 360.0 * world;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * world;
    (x, y)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub x: u32,
    pub y: u32,
    pub zoom: u8,
    /// Offset of the tile's top-left corner inside the viewport.
    pub left: f64,
    pub top: f64,
}

impl Tile {
    pub fn url(&self) -> String {
        TILE_URL_TEMPLATE
            .replace("{z}", &self.zoom.to_string())
            .replace("{x}", &self.x.to_string())
            .replace("{y}", &self.y.to_string())
    }
}

/// A fixed-size window onto the world image, centred on a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    origin: (f64, f64),
    pub width: f64,
    pub height: f64,
    pub zoom: u8,
}

impl Viewport {
    pub fn new(center: GeoPoint, zoom: u8, width: f64, height: f64) -> Self {
        let (cx, cy) = project(center, zoom);
        Self {
            origin: (cx - width / 2.0, cy - height / 2.0),
            width,
            height,
            zoom,
        }
    }

    /// Smallest view, zoomed in no further than `max_zoom`, that shows every
    /// point at least [`FIT_PADDING`] from the edge. Without points the view
    /// sits on `fallback` at `max_zoom`.
    pub fn fitting(
        points: &[GeoPoint],
        fallback: GeoPoint,
        max_zoom: u8,
        width: f64,
        height: f64,
    ) -> Self {
        if points.is_empty() {
            return Self::new(fallback, max_zoom, width, height);
        }

        let usable = (
            (width - 2.0 * FIT_PADDING).max(0.0),
            (height - 2.0 * FIT_PADDING).max(0.0),
        );
        let mut zoom = max_zoom;
        loop {
            let (min, max) = projected_bounds(points, zoom);
            let fits = max.0 - min.0 <= usable.0 && max.1 - min.1 <= usable.1;
            if fits || zoom == 0 {
                let center = ((min.0 + max.0) / 2.0, (min.1 + max.1) / 2.0);
                return Self {
                    origin: (center.0 - width / 2.0, center.1 - height / 2.0),
                    width,
                    height,
                    zoom,
                };
            }
            zoom -= 1;
        }
    }

    /// Viewport coordinates of `point`, or `None` when it falls outside.
    pub fn to_screen(&self, point: GeoPoint) -> Option<(f64, f64)> {
        let (x, y) = project(point, self.zoom);
        let (sx, sy) = (x - self.origin.0, y - self.origin.1);
        let inside = (0.0..=self.width).contains(&sx) && (0.0..=self.height).contains(&sy);
        inside.then_some((sx, sy))
    }

    /// Every tile overlapping the viewport.
    pub fn tiles(&self) -> Vec<Tile> {
        let count = 1i64 << self.zoom;
        let first_x = (self.origin.0 / TILE_SIZE).floor() as i64;
        let last_x = ((self.origin.0 + self.width) / TILE_SIZE).ceil() as i64;
        let first_y = ((self.origin.1 / TILE_SIZE).floor() as i64).max(0);
        let last_y = (((self.origin.1 + self.height) / TILE_SIZE).ceil() as i64).min(count);

        let mut tiles = Vec::new();
        for ty in first_y..last_y {
            for tx in first_x..last_x {
                tiles.push(Tile {
                    x: tx.rem_euclid(count) as u32,
                    y: ty as u32,
                    zoom: self.zoom,
                    left: tx as f64 * TILE_SIZE - self.origin.0,
                    top: ty as f64 * TILE_SIZE - self.origin.1,
                });
            }
        }
        tiles
    }
}

fn projected_bounds(points: &[GeoPoint], zoom: u8) -> ((f64, f64), (f64, f64)) {
    points.iter().fold(
        ((f64::INFINITY, f64::INFINITY), (f64::NEG_INFINITY, f64::NEG_INFINITY)),
        |(min, max), point| {
            let (x, y) = project(*point, zoom);
            ((min.0.min(x), min.1.min(y)), (max.0.max(x), max.1.max(y)))
        },
    )
}
