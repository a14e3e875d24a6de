pub mod day_logs;
