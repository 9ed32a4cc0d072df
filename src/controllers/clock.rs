use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use std::fmt::Write;

use crate::config::SiteConfig;

pub const CLOCK_PLACEHOLDER: &str = "--:--";

// Browser timers may fire slightly ahead of schedule.
const TICK_SLACK_MS: i64 = 1_000;

/// Wall-clock text for a fixed timezone, refreshed on a fixed cadence.
///
/// The formatted value is computed at mount so the first render is never
/// blank. A zone or format that cannot be resolved leaves the ticker on
/// [`CLOCK_PLACEHOLDER`] instead of failing.
#[derive(Clone, Debug)]
pub struct ClockTicker {
    zone: Option<Tz>,
    format: Option<String>,
    period: Duration,
    next_due: DateTime<Utc>,
    formatted: String,
}

impl ClockTicker {
    pub fn mount(config: &SiteConfig, now: DateTime<Utc>) -> Self {
        let zone = config.clock_timezone.parse::<Tz>().ok();
        let format = Some(config.clock_format.clone()).filter(|value| is_valid_format(value));
        let period = Duration::milliseconds(i64::from(config.clock_period_ms));

        let mut ticker = Self {
            zone,
            format,
            period,
            next_due: now,
            formatted: CLOCK_PLACEHOLDER.to_string(),
        };
        ticker.refresh(now);
        ticker
    }

    pub fn formatted(&self) -> &str {
        &self.formatted
    }

    pub fn is_resolved(&self) -> bool {
        self.zone.is_some() && self.format.is_some()
    }

    pub fn zone_name(&self) -> Option<&'static str> {
        self.zone.map(|zone| zone.name())
    }

    /// Refreshes when the period has elapsed; returns whether it did.
    pub fn poll(&mut self, now: DateTime<Utc>) -> bool {
        if now + Duration::milliseconds(TICK_SLACK_MS) < self.next_due {
            return false;
        }

        self.refresh(now);
        true
    }

    pub fn refresh(&mut self, now: DateTime<Utc>) {
        self.formatted = self
            .render(now)
            .unwrap_or_else(|| CLOCK_PLACEHOLDER.to_string());
        self.next_due = now + self.period;
    }

    fn render(&self, now: DateTime<Utc>) -> Option<String> {
        let zone = self.zone?;
        let format = self.format.as_deref()?;
        let mut out = String::new();
        write!(out, "{}", now.with_timezone(&zone).format(format)).ok()?;
        Some(out)
    }
}

fn is_valid_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| item == Item::Error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, hour, minute, second)
            .single()
            .expect("valid timestamp")
    }

    fn looks_like_hh_mm(value: &str) -> bool {
        let bytes = value.as_bytes();
        bytes.len() == 5
            && bytes[2] == b':'
            && bytes
                .iter()
                .enumerate()
                .all(|(index, byte)| index == 2 || byte.is_ascii_digit())
    }

    #[test]
    fn formats_india_time_at_mount() {
        let ticker = ClockTicker::mount(&SiteConfig::default(), at(0, 0, 0));

        assert_eq!(ticker.formatted(), "05:30");
        assert!(looks_like_hh_mm(ticker.formatted()));
        assert_eq!(ticker.zone_name(), Some("Asia/Kolkata"));
    }

    #[test]
    fn uses_twenty_four_hour_time() {
        let ticker = ClockTicker::mount(&SiteConfig::default(), at(14, 45, 0));

        assert_eq!(ticker.formatted(), "20:15");
    }

    #[test]
    fn updates_every_minute_over_three_minutes() {
        let start = at(8, 0, 0);
        let mut ticker = ClockTicker::mount(&SiteConfig::default(), start);
        let mut updates = 0;
        let mut seen = vec![ticker.formatted().to_string()];

        for step in 1..=18 {
            if ticker.poll(start + Duration::seconds(step * 10)) {
                updates += 1;
                seen.push(ticker.formatted().to_string());
            }
        }

        assert!(updates >= 2, "only {updates} updates in three minutes");
        assert_eq!(seen, vec!["13:30", "13:31", "13:32", "13:33"]);
    }

    #[test]
    fn poll_before_period_is_a_no_op() {
        let start = at(8, 0, 0);
        let mut ticker = ClockTicker::mount(&SiteConfig::default(), start);

        assert!(!ticker.poll(start + Duration::seconds(58)));
        assert!(ticker.poll(start + Duration::seconds(60)));
        assert!(!ticker.poll(start + Duration::seconds(90)));
    }

    #[test]
    fn early_timer_fire_still_counts() {
        let start = at(8, 0, 0);
        let mut ticker = ClockTicker::mount(&SiteConfig::default(), start);

        assert!(ticker.poll(start + Duration::milliseconds(59_400)));
    }

    #[test]
    fn unknown_timezone_falls_back_to_placeholder() {
        let config = SiteConfig::default().with_clock_timezone("Mars/Olympus_Mons");
        let mut ticker = ClockTicker::mount(&config, at(8, 0, 0));

        assert!(!ticker.is_resolved());
        assert_eq!(ticker.formatted(), CLOCK_PLACEHOLDER);
        assert!(ticker.poll(at(8, 1, 0)));
        assert_eq!(ticker.formatted(), CLOCK_PLACEHOLDER);
    }

    #[test]
    fn broken_format_falls_back_to_placeholder() {
        let config = SiteConfig::default().with_clock_format("%H:%");
        let ticker = ClockTicker::mount(&config, at(8, 0, 0));

        assert!(!ticker.is_resolved());
        assert_eq!(ticker.formatted(), CLOCK_PLACEHOLDER);
    }

    #[test]
    fn custom_zone_and_format() {
        let config = SiteConfig::default()
            .with_clock_timezone("Europe/London")
            .with_clock_format("%H.%M");
        let ticker = ClockTicker::mount(&config, at(9, 5, 0));

        assert_eq!(ticker.formatted(), "09.05");
    }
}
