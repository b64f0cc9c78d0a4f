use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Today's date in the form used for sheet filenames (YYYY-MM-DD).
pub fn today_str() -> String {
    today().format("%Y-%m-%d").to_string()
}
