//! Unit tests for the decode front end.




/// ROB queue behavior.
pub mod rob;
