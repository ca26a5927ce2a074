pub mod backup;
pub mod calculator;
pub mod grid;
pub mod list;
pub mod log;
pub mod message;
pub mod persistence;
pub mod schedule;
pub mod staff;
pub mod week;
