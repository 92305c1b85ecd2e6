use crate::{Date, TimeOfDay};

pub fn date(year: i32, month: u32, day: u32) -> Date {
    Date::new(year, month, day).expect("valid test date")
}

pub fn time(hour: u32, minute: u32) -> TimeOfDay {
    TimeOfDay::hm(hour, minute).expect("valid test time")
}

pub fn time_hms(hour: u32, minute: u32, second: u32) -> TimeOfDay {
    TimeOfDay::hms(hour, minute, second).expect("valid test time")
}
