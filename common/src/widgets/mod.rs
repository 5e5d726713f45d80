//! Overlay widgets.
//!
//! All widgets are generic over `DrawTarget<Color = OsdColor>` and take their
//! anchors from a [`ScreenGeometry`], so the same code renders on PAL and NTSC.

mod frame;
mod horizon;
mod link_info;
mod logo;
mod map;
pub mod primitives;
mod scale;
mod sticks;

pub use frame::{FRAME_CORNER_LEN, FrameStyle, draw_frame_border, frame_corners};
pub use horizon::{
    CENTER_BODY,
    CENTER_RUDDER,
    CENTER_WING,
    Horizon,
    LADDER_CAPACITY,
    Ladder,
    MAX_PITCH_DEG,
    PITCH_STEP_DEG,
    Rung,
    RungKind,
    draw_center_mark,
    wrap_ladder_angle,
};
pub use link_info::{LinkLine, LinkStatPolicy, draw_link_info, link_info_lines};
pub use logo::{
    ARMING_LOGO_Y,
    MAIN_LOGO_HEIGHT,
    MAIN_LOGO_WIDTH,
    PILOT_LOGO_CELL,
    USER_LOGO_HEIGHT,
    USER_LOGO_LEN,
    USER_LOGO_WIDTH,
    UserLogo,
    draw_arming_logos,
    draw_main_logo,
    draw_user_logo,
    main_logo,
};
pub use map::{HOME_ARROW, MAP_MAX_DIST_PX, draw_home_arrow, draw_map, map_marker, relative_home_direction, rotate};
pub use scale::{TickKind, TickSide, VerticalScale};
pub use sticks::{STICK_BOX_SIZE, STICK_LENGTH, STICK_TRAVEL, STICK_WIDTH, SticksDisplay, draw_stick, draw_sticks, rc_deflection, stick_dot};

use embedded_graphics::prelude::*;

use crate::colors::OsdColor;
use crate::layout::{ScreenGeometry, cell_origin};
use crate::state::OsdInputs;

/// Draw the locally rendered flight widgets enabled in the configuration.
///
/// Sensor-dependent widgets are skipped when their sensor is missing:
/// altitude needs a barometer; speed, map and home arrow need GPS.
pub fn draw_local_overlay<D>(
    display: &mut D,
    inputs: &OsdInputs,
) where
    D: DrawTarget<Color = OsdColor> + OriginDimensions,
{
    let geom = ScreenGeometry::of(display);
    let config = &inputs.config;
    let telemetry = &inputs.telemetry;
    let attitude = inputs.attitude;

    if config.artificial_horizon {
        Horizon::for_screen(geom, config.ahi_steps).draw(display, attitude.roll, attitude.pitch.saturating_neg());
    }
    if config.center_mark {
        draw_center_mark(display, geom.center());
    }

    if config.altitude_scale && telemetry.has_baro {
        VerticalScale::altitude(geom).draw(display, config.units.altitude(telemetry.altitude_cm));
    }

    if telemetry.has_gps {
        if config.speed_scale {
            VerticalScale::speed(geom).draw(display, config.units.speed(telemetry.ground_speed_cm_s));
        }

        let home_dir = relative_home_direction(telemetry.direction_to_home_deg, attitude.yaw);
        if config.map {
            draw_map(display, geom.center(), telemetry.distance_to_home_m, config.map_max_dist_m, home_dir);
        }
        if config.home_arrow {
            let (col, row) = config.home_arrow_anchor;
            draw_home_arrow(display, cell_origin(col, row), home_dir);
        }
    }

    draw_sticks(display, geom, config.sticks, &inputs.sticks);

    if config.link_stats.enabled && telemetry.link_stats_available {
        draw_link_info(display, &telemetry.link, &config.link_stats, config.rssi_alarm, config.cell_font());
    }

    draw_frame_border(display, geom, &config.frame);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OsdConfig;
    use crate::test_support::Canvas;

    fn bare_config() -> OsdConfig {
        OsdConfig {
            artificial_horizon: false,
            center_mark: false,
            altitude_scale: false,
            speed_scale: false,
            map: false,
            ..OsdConfig::default()
        }
    }

    #[test]
    fn test_everything_disabled_draws_nothing() {
        let mut canvas = Canvas::new(360, 288);
        let inputs = OsdInputs {
            config: bare_config(),
            ..OsdInputs::default()
        };
        draw_local_overlay(&mut canvas.fb(), &inputs);
        assert_eq!(canvas.fb().keyed_pixels(), 0);
    }

    #[test]
    fn test_sensor_gating() {
        // Scales enabled but no sensors present.
        let inputs = OsdInputs {
            config: OsdConfig {
                altitude_scale: true,
                speed_scale: true,
                map: true,
                ..bare_config()
            },
            ..OsdInputs::default()
        };
        let mut canvas = Canvas::new(360, 288);
        draw_local_overlay(&mut canvas.fb(), &inputs);
        assert_eq!(canvas.fb().keyed_pixels(), 0);

        let mut with_baro = inputs;
        with_baro.telemetry.has_baro = true;
        draw_local_overlay(&mut canvas.fb(), &with_baro);
        assert!(canvas.fb().keyed_pixels() > 0);
    }

    #[test]
    fn test_default_overlay_draws_horizon() {
        let mut canvas = Canvas::new(360, 288);
        draw_local_overlay(&mut canvas.fb(), &OsdInputs::default());
        assert!(canvas.fb().keyed_pixels() > 0);
    }
}
