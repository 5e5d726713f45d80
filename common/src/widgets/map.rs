//! Home direction widgets: the "H" map marker and the home arrow.

use embedded_graphics::prelude::*;
use micromath::F32;

use crate::colors::OsdColor;
use crate::styles::{HAlign, OsdFont, VAlign};
use crate::widgets::primitives::{draw_outlined_polygon, draw_text_outlined};

/// Marker radius at the configured maximum distance.
pub const MAP_MAX_DIST_PX: f32 = 70.0;

const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;

/// Arrow outline pointing up, rotated by the home direction.
pub const HOME_ARROW: [Point; 7] = [
    Point::new(0, -10),
    Point::new(9, 1),
    Point::new(3, 1),
    Point::new(3, 8),
    Point::new(-3, 8),
    Point::new(-3, 1),
    Point::new(-9, 1),
];

/// Direction to home relative to the nose, in degrees.
///
/// `yaw` is in tenths of a degree, `direction_to_home` in degrees.
#[inline]
pub fn relative_home_direction(
    direction_to_home: i16,
    yaw: i16,
) -> i32 {
    i32::from(direction_to_home) - i32::from(yaw) / 10
}

/// Screen position of the home marker, `None` when it would sit on the center.
///
/// The distance is clamped to `max_distance_m` so home stays on the map
/// edge when far away. A zero maximum disables the widget.
pub fn map_marker(
    center: Point,
    distance_m: u16,
    max_distance_m: u16,
    home_dir_deg: i32,
) -> Option<Point> {
    if max_distance_m == 0 {
        return None;
    }
    let distance = distance_m.min(max_distance_m);
    let d_px = MAP_MAX_DIST_PX * f32::from(distance) / f32::from(max_distance_m);
    if d_px < 1.0 {
        return None;
    }

    let theta = F32(home_dir_deg as f32 * DEG_TO_RAD);
    let dx = F32(theta.sin().0 * d_px).round().0 as i32;
    let dy = F32(theta.cos().0 * d_px).round().0 as i32;
    Some(Point::new(center.x + dx, center.y - dy))
}

/// Draw the map marker, if any.
pub fn draw_map<D>(
    display: &mut D,
    center: Point,
    distance_m: u16,
    max_distance_m: u16,
    home_dir_deg: i32,
) where
    D: DrawTarget<Color = OsdColor>,
{
    let Some(marker) = map_marker(center, distance_m, max_distance_m, home_dir_deg) else {
        return;
    };
    draw_text_outlined(display, "H", marker + Point::new(1, -3), OsdFont::Ladder, HAlign::Center, VAlign::Top);
}

/// Rotate `point` clockwise (screen coordinates) by `angle_deg`.
pub fn rotate(
    point: Point,
    angle_deg: i32,
) -> Point {
    let theta = F32(angle_deg as f32 * DEG_TO_RAD);
    let (sin, cos) = (theta.sin().0, theta.cos().0);
    let (x, y) = (point.x as f32, point.y as f32);
    Point::new(
        F32(x * cos - y * sin).round().0 as i32,
        F32(x * sin + y * cos).round().0 as i32,
    )
}

/// Draw the home arrow at `position`, pointing toward home.
pub fn draw_home_arrow<D>(
    display: &mut D,
    position: Point,
    home_dir_deg: i32,
) where
    D: DrawTarget<Color = OsdColor>,
{
    let points = HOME_ARROW.map(|p| position + rotate(p, home_dir_deg));
    draw_outlined_polygon(display, &points);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Canvas;

    const CENTER: Point = Point::new(180, 144);

    #[test]
    fn test_relative_direction() {
        assert_eq!(relative_home_direction(90, 450), 45);
        assert_eq!(relative_home_direction(0, 900), -90);
    }

    #[test]
    fn test_marker_suppressed_at_home() {
        assert_eq!(map_marker(CENTER, 0, 500, 0), None);
        // 3 m of 500 m is below one pixel.
        assert_eq!(map_marker(CENTER, 3, 500, 0), None);
    }

    #[test]
    fn test_marker_suppressed_without_range() {
        assert_eq!(map_marker(CENTER, 100, 0, 0), None);
    }

    #[test]
    fn test_marker_at_max_radius() {
        assert_eq!(map_marker(CENTER, 500, 500, 0), Some(Point::new(180, 144 - 70)));
        assert_eq!(map_marker(CENTER, 5000, 500, 0), Some(Point::new(180, 144 - 70)));
    }

    #[test]
    fn test_marker_direction() {
        let east = map_marker(CENTER, 500, 500, 90).unwrap();
        assert!((east.x - (180 + 70)).abs() <= 1);
        assert!((east.y - 144).abs() <= 1);

        let south = map_marker(CENTER, 250, 500, 180).unwrap();
        assert!((south.x - 180).abs() <= 1);
        assert!((south.y - (144 + 35)).abs() <= 1);
    }

    #[test]
    fn test_rotate_arrow_tip() {
        let tip = rotate(HOME_ARROW[0], 90);
        assert!((tip.x - 10).abs() <= 1);
        assert!(tip.y.abs() <= 1);
        assert_eq!(rotate(HOME_ARROW[0], 0), HOME_ARROW[0]);
    }

    #[test]
    fn test_draw_map_at_home_is_empty() {
        let mut canvas = Canvas::new(360, 288);
        draw_map(&mut canvas.fb(), CENTER, 0, 500, 0);
        assert_eq!(canvas.fb().keyed_pixels(), 0);

        draw_map(&mut canvas.fb(), CENTER, 500, 500, 0);
        assert!(canvas.fb().keyed_pixels() > 0);
    }
}
