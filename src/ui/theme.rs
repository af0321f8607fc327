// Style table passed explicitly into the renderer.

use crate::config::AlertsConfig;
use ratatui::style::{Color, Modifier, Style};

/// Above this CPU/memory percentage a bar turns from green to yellow.
const BAR_MEDIUM_PERCENT: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Style,
    pub summary: Style,
    pub meta: Style,
    pub border: Style,
    pub table_header: Style,
    pub row: Style,
    pub zebra: Style,
    pub selected: Style,
    pub id: Style,
    pub image: Style,
    pub status_up: Style,
    pub status_down: Style,
    pub port_host: Style,
    pub port_container: Style,
    pub help: Style,
    pub status_message: Style,
    pub log_title: Style,
    pub filter: Style,
    pub confirm_border: Style,
    pub confirm_text: Style,
    pub error: Style,
    pub band_low: Color,
    pub band_medium: Color,
    pub band_high: Color,
    pub band_critical: Color,
    pub mem_warn_percent: f64,
    pub mem_critical_percent: f64,
}

impl Theme {
    pub fn from_config(alerts: &AlertsConfig) -> Self {
        Self {
            title: Style::new().fg(Color::Indexed(205)).add_modifier(Modifier::BOLD),
            summary: Style::new().fg(Color::Indexed(241)),
            meta: Style::new().fg(Color::Indexed(63)),
            border: Style::new().fg(Color::Indexed(240)),
            table_header: Style::new().fg(Color::Indexed(205)).add_modifier(Modifier::BOLD),
            row: Style::new(),
            zebra: Style::new().bg(Color::Indexed(235)),
            selected: Style::new()
                .fg(Color::Indexed(229))
                .bg(Color::Indexed(57))
                .add_modifier(Modifier::BOLD),
            id: Style::new().fg(Color::Indexed(141)),
            image: Style::new().fg(Color::Indexed(243)),
            status_up: Style::new().fg(Color::Indexed(42)),
            status_down: Style::new().fg(Color::Indexed(196)),
            port_host: Style::new().fg(Color::Indexed(45)),
            port_container: Style::new().fg(Color::Indexed(214)),
            help: Style::new().fg(Color::Indexed(241)),
            status_message: Style::new().fg(Color::Indexed(229)),
            log_title: Style::new().fg(Color::Indexed(205)).add_modifier(Modifier::BOLD),
            filter: Style::new().fg(Color::Indexed(63)),
            confirm_border: Style::new().fg(Color::Indexed(196)),
            confirm_text: Style::new().fg(Color::Indexed(196)).add_modifier(Modifier::BOLD),
            error: Style::new().fg(Color::Indexed(196)).add_modifier(Modifier::BOLD),
            band_low: Color::Indexed(46),
            band_medium: Color::Indexed(226),
            band_high: Color::Indexed(214),
            band_critical: Color::Indexed(196),
            mem_warn_percent: alerts.mem_warn_percent,
            mem_critical_percent: alerts.mem_critical_percent,
        }
    }

    pub fn band(&self, percent: f64) -> Band {
        if percent > self.mem_critical_percent {
            Band::Critical
        } else if percent > self.mem_warn_percent {
            Band::High
        } else if percent > BAR_MEDIUM_PERCENT {
            Band::Medium
        } else {
            Band::Low
        }
    }

    pub fn bar(&self, percent: f64) -> Style {
        let color = match self.band(percent) {
            Band::Low => self.band_low,
            Band::Medium => self.band_medium,
            Band::High => self.band_high,
            Band::Critical => self.band_critical,
        };
        Style::new().fg(color)
    }

    /// Row background for a container whose memory use crosses an alert threshold.
    pub fn mem_alert(&self, mem_percent: f64) -> Option<Color> {
        match self.band(mem_percent) {
            Band::Critical => Some(self.band_critical),
            Band::High => Some(self.band_high),
            Band::Medium | Band::Low => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&AlertsConfig::default())
    }
}
