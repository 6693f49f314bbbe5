//! Entity <-> model mappers

mod credential;
