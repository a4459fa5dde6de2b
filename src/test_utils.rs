use crate::Date;

pub fn date(day: u8, month: u8, year: u16) -> Date {
    Date::new(day.into(), month.into(), year.into())
        .unwrap_or_else(|e| panic!("invalid test date {day} {month} {year}: {e}"))
}
