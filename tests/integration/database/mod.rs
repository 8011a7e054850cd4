//! Postgres store tests
//!
//! Ignored by default; they need `DATABASE_URL`.
