pub mod booking;
pub mod guardrail;
pub mod schedule;
