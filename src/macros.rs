/// Similar to `info!` macro in tracing.
/// You can pass in the starting time and it will log how long it took from starting time to now.
/// ```ignore
/// info_time!("str {}, {}", 1, 2);
/// let time = Local::now();
/// info_time!(time, "str {}, {}", 1, 2);
/// ```
#[macro_export]
macro_rules! info_time {
    ($strfm:literal $(,)? $($arg:expr),*) => {{
        ::tracing::info!($strfm, $($arg),*);
    }};
    ($time:expr, $strfm:literal $(,)? $($arg:expr),*) => {{
        let run_time = (::chrono::Local::now() - $time)
                .num_microseconds()
                .map(|n| n as f64 / 1_000_000.0)
                .unwrap_or(0.0);
        ::tracing::info!(runtime_secs = run_time, $strfm, $($arg),*);
    }};
}

#[cfg(test)]
mod tests {
    use chrono::Local;

    #[test]
    fn accepts_positional_and_captured_arguments() {
        let page_num = 3;
        let start_time = Local::now();
        info_time!("Requesting page {}", page_num);
        info_time!("Requesting page {page_num}");
        info_time!(start_time, "Fetched page {}: {} records", page_num, 12);
        info_time!(start_time, "Full program time:");
    }
}
