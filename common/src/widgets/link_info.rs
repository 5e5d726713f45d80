//! Link statistics readout (link quality, TX power, RSSI, SNR).
//!
//! The block is anchored at a character cell so it lines up with the legacy
//! elements around it. The first line uses the cell font, detail lines the
//! small label font.

use core::fmt::Write;

use embedded_graphics::prelude::*;
use heapless::{String, Vec};

use crate::colors::OsdColor;
use crate::config::LinkStatsConfig;
use crate::layout::cell_origin;
use crate::state::LinkStats;
use crate::styles::{CellFont, HAlign, OsdFont, VAlign};
use crate::widgets::primitives::draw_text_outlined;

/// Advance after the link quality line.
pub const LQ_LINE_HEIGHT: i32 = 16;

/// Advance after each detail line.
pub const DETAIL_LINE_SPACING: i32 = 12;

/// When an optional line is shown.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkStatPolicy {
    Off,
    /// Link quality at or below the RSSI alarm.
    WhenLqLow,
    /// SNR at or below the configured threshold.
    WhenSnrLow,
    On,
}

impl LinkStatPolicy {
    pub fn visible(
        self,
        link: &LinkStats,
        rssi_alarm: u8,
        snr_threshold: i8,
    ) -> bool {
        match self {
            Self::Off => false,
            Self::WhenLqLow => link.lq <= rssi_alarm,
            Self::WhenSnrLow => link.snr <= snr_threshold,
            Self::On => true,
        }
    }
}

/// One rendered line, offset from the block origin.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LinkLine {
    pub text: String<20>,
    pub dy: i32,
    pub font: OsdFont,
}

fn line(
    dy: i32,
    font: OsdFont,
    args: core::fmt::Arguments<'_>,
) -> LinkLine {
    let mut text = String::new();
    text.write_fmt(args).ok();
    LinkLine { text, dy, font }
}

/// Lines visible for this frame, top to bottom.
pub fn link_info_lines(
    link: &LinkStats,
    config: &LinkStatsConfig,
    rssi_alarm: u8,
    font: CellFont,
) -> Vec<LinkLine, 4> {
    let mut lines = Vec::new();
    let mut dy = 0;

    lines.push(line(dy, OsdFont::Cell(font), format_args!("LQ {}", link.lq))).ok();
    dy += LQ_LINE_HEIGHT;

    if config.show_power {
        lines.push(line(dy, OsdFont::Label, format_args!("{}mW", link.tx_power_mw))).ok();
        dy += DETAIL_LINE_SPACING;
    }

    if config.rssi.visible(link, rssi_alarm, config.snr_threshold) {
        lines.push(line(dy, OsdFont::Label, format_args!("{}dBm", -i16::from(link.rssi)))).ok();
        dy += DETAIL_LINE_SPACING;
    }

    if config.snr.visible(link, rssi_alarm, config.snr_threshold) {
        lines.push(line(dy, OsdFont::Label, format_args!("SN {}dB", link.snr))).ok();
    }

    lines
}

/// Draw the readout at its configured cell.
pub fn draw_link_info<D>(
    display: &mut D,
    link: &LinkStats,
    config: &LinkStatsConfig,
    rssi_alarm: u8,
    font: CellFont,
) where
    D: DrawTarget<Color = OsdColor>,
{
    let (col, row) = config.anchor;
    let origin = cell_origin(col, row);
    for l in link_info_lines(link, config, rssi_alarm, font) {
        draw_text_outlined(display, &l.text, origin + Point::new(0, l.dy), l.font, HAlign::Left, VAlign::Top);
    }
}
