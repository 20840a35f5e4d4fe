//! Planetary hour schedules for fixed sunrise/sunset instants.

use chrono::{DateTime, TimeDelta, TimeZone, Utc, Weekday};
use pretty_assertions::assert_eq;
use resonance_base::{ALL_PLANETS, Planet, day_ruler};
use resonance_timing::{HOURS_PER_DAY, SolarDay};
use rstest::rstest;

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

#[test]
fn six_to_six_sunday() {
    let day = SolarDay::new(
        utc(2024, 3, 17, 6, 0),
        utc(2024, 3, 17, 18, 0),
        utc(2024, 3, 18, 6, 0),
        Weekday::Sun,
    )
    .unwrap();
    let schedule = day.schedule();
    assert_eq!(schedule.len(), HOURS_PER_DAY);

    let rulers: Vec<Planet> = schedule.iter().map(|w| w.ruling_planet).collect();
    assert_eq!(
        rulers[..8].to_vec(),
        vec![
            Planet::Sun,
            Planet::Venus,
            Planet::Mercury,
            Planet::Moon,
            Planet::Saturn,
            Planet::Jupiter,
            Planet::Mars,
            Planet::Sun,
        ]
    );

    for (i, w) in schedule.iter().enumerate() {
        assert_eq!(w.start, utc(2024, 3, 17, 6, 0) + TimeDelta::hours(i as i64));
        assert_eq!(w.duration(), TimeDelta::minutes(60));
        assert_eq!(w.is_daytime, i < 12);
        assert_eq!(w.index as usize, i % 12 + 1);
    }
}

#[rstest]
#[case(Weekday::Sun)]
#[case(Weekday::Mon)]
#[case(Weekday::Tue)]
#[case(Weekday::Wed)]
#[case(Weekday::Thu)]
#[case(Weekday::Fri)]
#[case(Weekday::Sat)]
fn first_hour_is_day_ruler(#[case] weekday: Weekday) {
    let day = SolarDay::new(
        utc(2024, 6, 1, 4, 45),
        utc(2024, 6, 1, 21, 10),
        utc(2024, 6, 2, 4, 44),
        weekday,
    )
    .unwrap();
    let s = day.schedule();
    assert_eq!(s[0].ruling_planet, day_ruler(weekday));
    // Hour 1 of the next day follows the 24th hour in Chaldean order
    assert_eq!(
        resonance_base::chaldean_successor(s[23].ruling_planet, 1),
        day_ruler(weekday.succ())
    );
}

#[test]
fn summer_day_hours_are_longer_than_night_hours() {
    let day = SolarDay::new(
        utc(2024, 6, 21, 3, 43),
        utc(2024, 6, 21, 20, 21),
        utc(2024, 6, 22, 3, 43),
        Weekday::Fri,
    )
    .unwrap();
    assert!(day.day_hour_length() > day.night_hour_length());
    assert_eq!(day.day_length() + day.night_length(), TimeDelta::hours(24));
    let s = day.schedule();
    assert_eq!(s[11].end, day.sunset());
    assert_eq!(s[23].end, day.next_sunrise());
}

#[test]
fn every_planet_rules_some_hour() {
    let day = SolarDay::new(
        utc(2024, 1, 1, 8, 0),
        utc(2024, 1, 1, 16, 0),
        utc(2024, 1, 2, 8, 0),
        Weekday::Mon,
    )
    .unwrap();
    let s = day.schedule();
    for planet in ALL_PLANETS {
        assert!(s.iter().any(|w| w.ruling_planet == planet), "{planet}");
    }
}

#[test]
fn walk_the_whole_day_minute_by_minute() {
    let day = SolarDay::new(
        utc(2024, 3, 20, 6, 7),
        utc(2024, 3, 20, 18, 19),
        utc(2024, 3, 21, 6, 5),
        Weekday::Wed,
    )
    .unwrap();
    let mut now = day.sunrise();
    let mut last_ordinal = 0;
    while now < day.next_sunrise() {
        let c = day.current(now).unwrap();
        assert!(c.window.contains(now));
        assert!(c.window.ordinal() >= last_ordinal);
        assert!(c.elapsed_seconds >= 0 && c.remaining_seconds >= 0);
        assert_eq!(c.next.is_none(), c.window.ordinal() == 23);
        last_ordinal = c.window.ordinal();
        now += TimeDelta::minutes(1);
    }
    assert_eq!(last_ordinal, 23);
}
