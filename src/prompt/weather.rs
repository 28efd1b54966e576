//! Random "when" phrases and matching weather descriptions.
//!
//! A phrase looks like `early morning during early winter of 2020`. The
//! weather lookup keys off the season and time-of-day words in it.

use chrono::{Datelike, Duration, NaiveDate};
use once_cell::sync::OnceCell;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{pick_weighted, WeightedOption};
use crate::error::{PromptError, Result};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Bias applied to a random integer draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Skew {
    /// Uniform.
    #[default]
    None,
    /// Lower of two draws.
    EarlierOfTwo,
    /// Higher of two draws.
    LaterOfTwo,
    /// Median of three draws.
    MiddleOfThree,
}

impl Skew {
    /// Random integer in `min..=max` with this bias.
    pub fn draw<R: Rng + ?Sized>(self, rng: &mut R, min: i64, max: i64) -> i64 {
        let mut roll = || rng.gen_range(min..=max);
        match self {
            Self::None => roll(),
            Self::EarlierOfTwo => roll().min(roll()),
            Self::LaterOfTwo => roll().max(roll()),
            Self::MiddleOfThree => {
                let mut rolls = [roll(), roll(), roll()];
                rolls.sort_unstable();
                rolls[1]
            }
        }
    }
}

impl fmt::Display for Skew {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "no skew",
            Self::EarlierOfTwo => "earlier of two",
            Self::LaterOfTwo => "later of two",
            Self::MiddleOfThree => "middle of three",
        })
    }
}

impl FromStr for Skew {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], " ").as_str() {
            "no skew" | "none" => Ok(Self::None),
            "earlier of two" | "earlier" => Ok(Self::EarlierOfTwo),
            "later of two" | "later" => Ok(Self::LaterOfTwo),
            "middle of three" | "middle" => Ok(Self::MiddleOfThree),
            other => Err(PromptError::Configuration(format!(
                "Unknown skew '{other}'. Use no skew, earlier of two, later of two or middle of three"
            ))),
        }
    }
}

/// Inputs to [`random_when`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhenRequest {
    /// First year, inclusive.
    pub year_from: i32,
    /// Last year, inclusive.
    pub year_to: i32,
    /// Start of the time window, e.g. `6:00am`.
    pub time_from: String,
    /// End of the time window; equal to `time_from` means the whole day.
    pub time_to: String,
    /// Bias for the day pick.
    pub year_skew: Skew,
    /// Bias for the time pick.
    pub time_skew: Skew,
}

impl Default for WhenRequest {
    fn default() -> Self {
        Self {
            year_from: 1980,
            year_to: 2025,
            time_from: "6:00am".to_string(),
            time_to: "7:00pm".to_string(),
            year_skew: Skew::None,
            time_skew: Skew::None,
        }
    }
}

/// Parses a 12-hour clock time such as `6:00am` or `11:30 PM` into seconds
/// after midnight.
///
/// # Errors
/// Returns [`PromptError::InvalidTime`] for anything else.
pub fn parse_time(input: &str) -> Result<i64> {
    let invalid = || PromptError::InvalidTime(input.to_string());
    let lower = input.trim().to_ascii_lowercase();
    let (clock, pm) = if let Some(clock) = lower.strip_suffix("am") {
        (clock, false)
    } else if let Some(clock) = lower.strip_suffix("pm") {
        (clock, true)
    } else {
        return Err(invalid());
    };
    let (hour, minute) = clock.trim().split_once(':').ok_or_else(invalid)?;
    let hour: i64 = hour.parse().map_err(|_| invalid())?;
    let minute: i64 = minute.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&hour) || !(0..60).contains(&minute) {
        return Err(invalid());
    }
    let hour24 = match (hour, pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, false) => h,
        (h, true) => h + 12,
    };
    Ok(hour24 * 3600 + minute * 60)
}

/// Coarse time-of-day label for an hour in `0..24`.
#[must_use]
pub fn time_of_day(hour: u32) -> &'static str {
    match hour {
        5..=7 => "early morning",
        8..=9 => "morning",
        10..=11 => "late morning",
        12..=13 => "early afternoon",
        14..=15 => "afternoon",
        16..=17 => "late afternoon",
        18..=19 => "early evening",
        20..=21 => "evening",
        3 => "witching hour",
        4 => "pre-dawn",
        _ => "night",
    }
}

/// Season phrase for a month in `1..=12`, e.g. `middle of the summer`.
#[must_use]
pub fn season_part(month: u32) -> &'static str {
    match month {
        12 => "early winter",
        1 | 2 => "late winter",
        3 => "early spring",
        4 => "middle of the spring",
        5 => "late spring",
        6 => "early summer",
        7 => "middle of the summer",
        8 => "late summer",
        9 => "early fall",
        10 => "middle of the fall",
        11 => "late fall",
        _ => "unknown season",
    }
}

/// Random "when" phrase within the requested year and time windows.
///
/// # Errors
/// Returns [`PromptError::InvalidTime`] or [`PromptError::InvalidYearRange`]
/// for unusable inputs.
pub fn random_when<R: Rng + ?Sized>(request: &WhenRequest, rng: &mut R) -> Result<String> {
    let invalid_years = || PromptError::InvalidYearRange {
        from: request.year_from,
        to: request.year_to,
    };
    if request.year_from > request.year_to {
        return Err(invalid_years());
    }
    let start = NaiveDate::from_ymd_opt(request.year_from, 1, 1).ok_or_else(invalid_years)?;
    let end = request
        .year_to
        .checked_add(1)
        .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
        .ok_or_else(invalid_years)?;

    let from = parse_time(&request.time_from)?;
    let mut to = parse_time(&request.time_to)?;
    if to <= from {
        // equal endpoints mean a full day; otherwise the window crosses midnight
        to += SECONDS_PER_DAY;
    }

    let days = (end - start).num_days();
    let date = start + Duration::days(request.year_skew.draw(rng, 0, days - 1));
    let seconds = from + request.time_skew.draw(rng, 0, to - from);
    let hour = u32::try_from(seconds.rem_euclid(SECONDS_PER_DAY) / 3600).unwrap_or(0);

    Ok(format!(
        "{} during {} of {}",
        time_of_day(hour),
        season_part(date.month()),
        date.year()
    ))
}

/// `when` without its trailing ` of YEAR`.
#[must_use]
pub fn when_no_year(when: &str) -> &str {
    when.rsplit_once(" of ").map_or(when, |(head, _)| head)
}

#[derive(Debug, Deserialize)]
struct SeasonTable {
    morning: Vec<WeightedOption>,
    afternoon: Vec<WeightedOption>,
    evening: Vec<WeightedOption>,
    night: Vec<WeightedOption>,
}

impl SeasonTable {
    fn for_phrase(&self, when: &str) -> &[WeightedOption] {
        if when.contains("morning") {
            &self.morning
        } else if when.contains("afternoon") {
            &self.afternoon
        } else if when.contains("evening") || when.contains("dusk") {
            &self.evening
        } else if when.contains("night") {
            &self.night
        } else {
            &self.morning
        }
    }
}

#[derive(Debug, Deserialize)]
struct WeatherTable {
    winter: SeasonTable,
    spring: SeasonTable,
    summer: SeasonTable,
    fall: SeasonTable,
}

static WEATHER: OnceCell<WeatherTable> = OnceCell::new();

fn weather_table() -> Result<&'static WeatherTable> {
    WEATHER.get_or_try_init(|| Ok(serde_json::from_str(include_str!("../data/weather.json"))?))
}

/// Weighted weather description matching the season and time of day named
/// in `when`.
///
/// # Errors
/// Returns an error only if the embedded weather table is malformed.
pub fn weather_for<R: Rng + ?Sized>(when: &str, rng: &mut R) -> Result<String> {
    let table = weather_table()?;
    let season = if when.contains("winter") {
        &table.winter
    } else if when.contains("spring") {
        &table.spring
    } else if when.contains("summer") {
        &table.summer
    } else if when.contains("fall") {
        &table.fall
    } else {
        return Ok("unpredictable weather".to_string());
    };
    pick_weighted(season.for_phrase(when), rng).map(str::to_string)
}

/// A "when" phrase with its year-less form and a matching weather line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WhenReport {
    /// e.g. "early morning during early winter of 2020".
    pub when: String,
    /// `when` without the trailing year.
    pub when_no_year: String,
    /// Weather line for the season and time of day.
    pub weather: String,
}

/// Draws a "when" phrase and its weather from one generator.
///
/// # Errors
/// See [`random_when`] and [`weather_for`].
pub fn describe_when<R: Rng + ?Sized>(request: &WhenRequest, rng: &mut R) -> Result<WhenReport> {
    let when = random_when(request, rng)?;
    let weather = weather_for(&when, rng)?;
    Ok(WhenReport {
        when_no_year: when_no_year(&when).to_string(),
        when,
        weather,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seed_rng;

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("6:00am").unwrap(), 6 * 3600);
        assert_eq!(parse_time("7:30pm").unwrap(), 19 * 3600 + 30 * 60);
        assert_eq!(parse_time("12:00am").unwrap(), 0);
        assert_eq!(parse_time("12:15PM").unwrap(), 12 * 3600 + 15 * 60);
        assert!(parse_time("13:00pm").is_err());
        assert!(parse_time("6am").is_err());
        assert!(parse_time("06:00").is_err());
    }

    #[test]
    fn test_time_of_day_buckets() {
        assert_eq!(time_of_day(5), "early morning");
        assert_eq!(time_of_day(9), "morning");
        assert_eq!(time_of_day(13), "early afternoon");
        assert_eq!(time_of_day(21), "evening");
        assert_eq!(time_of_day(23), "night");
        assert_eq!(time_of_day(0), "night");
        assert_eq!(time_of_day(2), "night");
        assert_eq!(time_of_day(3), "witching hour");
        assert_eq!(time_of_day(4), "pre-dawn");
    }

    #[test]
    fn test_season_parts() {
        assert_eq!(season_part(12), "early winter");
        assert_eq!(season_part(2), "late winter");
        assert_eq!(season_part(4), "middle of the spring");
        assert_eq!(season_part(11), "late fall");
    }

    #[test]
    fn test_skew_stays_in_range() {
        let mut rng = seed_rng(10);
        for skew in [Skew::None, Skew::EarlierOfTwo, Skew::LaterOfTwo, Skew::MiddleOfThree] {
            for _ in 0..100 {
                let value = skew.draw(&mut rng, 3, 9);
                assert!((3..=9).contains(&value));
            }
        }
    }

    #[test]
    fn test_skew_biases_draws() {
        let mut rng = seed_rng(10);
        let earlier: i64 = (0..2000).map(|_| Skew::EarlierOfTwo.draw(&mut rng, 0, 100)).sum();
        let later: i64 = (0..2000).map(|_| Skew::LaterOfTwo.draw(&mut rng, 0, 100)).sum();
        assert!(earlier < later);
    }

    #[test]
    fn test_random_when_single_year_window() {
        let request = WhenRequest {
            year_from: 2020,
            year_to: 2020,
            time_from: "1:00pm".to_string(),
            time_to: "1:30pm".to_string(),
            ..WhenRequest::default()
        };
        let mut rng = seed_rng(3);
        for _ in 0..20 {
            let when = random_when(&request, &mut rng).unwrap();
            assert!(when.starts_with("early afternoon during "), "{when}");
            assert!(when.ends_with(" of 2020"), "{when}");
        }
    }

    #[test]
    fn test_random_when_cross_midnight() {
        let request = WhenRequest {
            time_from: "11:00pm".to_string(),
            time_to: "1:00am".to_string(),
            ..WhenRequest::default()
        };
        let mut rng = seed_rng(3);
        for _ in 0..20 {
            let when = random_when(&request, &mut rng).unwrap();
            assert!(when.starts_with("night during "), "{when}");
        }
    }

    #[test]
    fn test_random_when_rejects_bad_input() {
        let mut rng = seed_rng(3);
        let backwards = WhenRequest {
            year_from: 2020,
            year_to: 2010,
            ..WhenRequest::default()
        };
        assert!(matches!(
            random_when(&backwards, &mut rng),
            Err(PromptError::InvalidYearRange { .. })
        ));
        let bad_time = WhenRequest {
            time_from: "noon".to_string(),
            ..WhenRequest::default()
        };
        assert!(matches!(
            random_when(&bad_time, &mut rng),
            Err(PromptError::InvalidTime(_))
        ));
    }

    #[test]
    fn test_when_no_year() {
        assert_eq!(
            when_no_year("early morning during early winter of 2020"),
            "early morning during early winter"
        );
        assert_eq!(when_no_year("no year here"), "no year here");
    }

    #[test]
    fn test_weather_for_unknown_season() {
        let mut rng = seed_rng(1);
        assert_eq!(weather_for("sometime", &mut rng).unwrap(), "unpredictable weather");
    }

    #[test]
    fn test_weather_for_known_phrase() {
        let mut rng = seed_rng(1);
        let weather = weather_for("night during late winter of 1999", &mut rng).unwrap();
        assert!(!weather.is_empty());
        assert_ne!(weather, "unpredictable weather");
    }

    #[test]
    fn test_describe_when_is_reproducible() {
        let request = WhenRequest::default();
        let a = describe_when(&request, &mut seed_rng(21)).unwrap();
        let b = describe_when(&request, &mut seed_rng(21)).unwrap();
        assert_eq!(a, b);
        assert!(a.when.starts_with(&a.when_no_year));
    }
}
