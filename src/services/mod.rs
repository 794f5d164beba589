pub mod availability;
pub mod booking;
pub mod extraction;
pub mod guardrail;
pub mod normalize;

#[cfg(test)]
#[path = "availability_test.rs"]
mod availability_tests;

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_tests;

#[cfg(test)]
#[path = "extraction_test.rs"]
mod extraction_tests;

#[cfg(test)]
#[path = "guardrail_test.rs"]
mod guardrail_tests;

#[cfg(test)]
#[path = "normalize_test.rs"]
mod normalize_tests;
