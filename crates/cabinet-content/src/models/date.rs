use time::{Date, Month};

/// Long French date used on article pages, e.g. `1 décembre 2024`.
pub fn format_date_fr(date: Date) -> String {
    format!("{} {} {}", date.day(), month_fr(date.month()), date.year())
}

fn month_fr(month: Month) -> &'static str {
    match month {
        Month::January => "janvier",
        Month::February => "février",
        Month::March => "mars",
        Month::April => "avril",
        Month::May => "mai",
        Month::June => "juin",
        Month::July => "juillet",
        Month::August => "août",
        Month::September => "septembre",
        Month::October => "octobre",
        Month::November => "novembre",
        Month::December => "décembre",
    }
}
