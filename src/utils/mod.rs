pub(crate) mod date;
pub(crate) mod logging;

pub(crate) use date::{
    MONTH_NAMES, add_days, days_in_month, end_of_week, first_of_month, format_date,
    minutes_to_time, parse_date, parse_month, time_to_minutes, weekday_long, weekday_short,
};
pub(crate) use logging::init_logging;
