//! Demo pilot logo: an outlined diamond filling the logo slot.

use osd_common::widgets::{USER_LOGO_HEIGHT, USER_LOGO_LEN, USER_LOGO_WIDTH, UserLogo};

const ROW_BYTES: usize = USER_LOGO_WIDTH as usize / 4;

const fn rasterize() -> [u8; USER_LOGO_LEN] {
    let (w, h) = (USER_LOGO_WIDTH as usize, USER_LOGO_HEIGHT as usize);
    let (cx, cy) = (w / 2, h / 2);
    let mut data = [0; USER_LOGO_LEN];

    let mut y = 0;
    while y < h {
        let mut x = 0;
        while x < w {
            // 0 at the center, cx * cy on the diamond edge
            let d = x.abs_diff(cx) * cy + y.abs_diff(cy) * cx;
            let edge = cx * cy;
            let value: u8 = if d + edge / 4 < edge && d + edge / 3 >= edge {
                0b11
            } else if d < edge && d + edge / 2 >= edge {
                0b10
            } else {
                0
            };
            let shift = 6 - 2 * (x % 4);
            data[y * ROW_BYTES + x / 4] |= value << shift;
            x += 1;
        }
        y += 1;
    }
    data
}

static PILOT_LOGO: [u8; USER_LOGO_LEN] = rasterize();

pub fn pilot_logo() -> UserLogo<'static> { UserLogo::new(&PILOT_LOGO, USER_LOGO_WIDTH) }
