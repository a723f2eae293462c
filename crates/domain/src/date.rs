use crate::shared::recurrence::TimeOfDay;
use chrono::{prelude::*, Duration, LocalResult, Offset};
use chrono_tz::Tz;

/// The instant `ts` seen from the given timezone
pub fn datetime_in(ts: i64, tz: &Tz) -> Option<DateTime<Tz>> {
    tz.timestamp_millis_opt(ts).single()
}

/// Maps a local wall clock time to an instant.
///
/// Ambiguous local times (clocks turned back) resolve to the earliest
/// instant. Local times inside a gap (clocks turned forward) are read with
/// the offset in effect before the gap, which moves them forward by the
/// length of the gap.
pub fn local_instant(tz: &Tz, date: NaiveDate, time: &TimeOfDay) -> Option<DateTime<Tz>> {
    let naive = date.and_hms_opt(time.hours(), time.minutes(), 0)?;
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => {
            let before_gap = tz
                .from_local_datetime(&(naive - Duration::hours(24)))
                .earliest()?;
            let offset = before_gap.offset().fix().local_minus_utc();
            let utc = naive - Duration::seconds(i64::from(offset));
            Some(tz.from_utc_datetime(&utc))
        }
    }
}

/// Local midnight of the day `dt` falls on
pub fn start_of_day(dt: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    let midnight = TimeOfDay::new(0, 0).ok()?;
    local_instant(&dt.timezone(), dt.date_naive(), &midnight)
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono_tz::{America::Sao_Paulo, Europe::Oslo, Pacific::Apia, UTC};

    #[test]
    fn it_builds_local_instants() {
        let date = NaiveDate::from_ymd_opt(2021, 6, 1).unwrap();
        let time = TimeOfDay::new(20, 0).unwrap();

        let utc = local_instant(&UTC, date, &time).unwrap();
        assert_eq!(utc.to_rfc3339(), "2021-06-01T20:00:00+00:00");

        // Oslo is UTC+2 in the summer
        let oslo = local_instant(&Oslo, date, &time).unwrap();
        assert_eq!(oslo.with_timezone(&Utc).hour(), 18);
    }

    #[test]
    fn it_moves_local_times_in_a_gap_forward() {
        // Oslo skipped 02:00 - 03:00 on 2021-03-28
        let date = NaiveDate::from_ymd_opt(2021, 3, 28).unwrap();
        let time = TimeOfDay::new(2, 30).unwrap();
        let dt = local_instant(&Oslo, date, &time).unwrap();
        assert_eq!(dt.hour(), 3);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn it_moves_local_times_in_a_day_long_gap_forward() {
        // Apia skipped 2011-12-30 entirely, going from UTC-10 to UTC+14
        let date = NaiveDate::from_ymd_opt(2011, 12, 30).unwrap();
        let time = TimeOfDay::new(12, 0).unwrap();
        let dt = local_instant(&Apia, date, &time).unwrap();
        assert_eq!(dt.day(), 31);
        assert_eq!(dt.hour(), 12);
    }

    #[test]
    fn it_picks_earliest_ambiguous_local_time() {
        // Oslo repeated 02:00 - 03:00 on 2021-10-31
        let date = NaiveDate::from_ymd_opt(2021, 10, 31).unwrap();
        let time = TimeOfDay::new(2, 30).unwrap();
        let dt = local_instant(&Oslo, date, &time).unwrap();
        assert_eq!(dt.with_timezone(&Utc).hour(), 0);
    }

    #[test]
    fn it_finds_start_of_day_even_without_midnight() {
        // Sao Paulo jumped from 00:00 to 01:00 on 2018-11-04
        let dt = Sao_Paulo.with_ymd_and_hms(2018, 11, 4, 12, 0, 0).unwrap();
        let start = start_of_day(&dt).unwrap();
        assert_eq!(start.day(), 4);
        assert_eq!(start.hour(), 1);

        let dt = UTC.with_ymd_and_hms(2021, 1, 1, 13, 45, 0).unwrap();
        assert_eq!(
            start_of_day(&dt).unwrap(),
            UTC.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap()
        );
    }
}
