//! The middleware chain wrapping every request.
//!
//! Stages compose in fixed outer-to-inner order, each able to short-circuit
//! by writing a response instead of calling the next stage:
//!
//! 1. [`fault`] - containment: converts any panic below into a generic 500
//! 2. [`auth`] - token check: denies with 401 before any business logic
//! 3. [`access_log`] - one status line per request that passed auth
//!
//! The ordering is a contract, not an accident: containment must observe
//! faults from auth and logging too, and auth must gate route execution
//! before the success-path log line. A denied request is therefore never
//! logged by [`access_log`]; the warning emitted by [`auth`] is its only
//! audit record.

pub mod access_log;
pub mod auth;
pub mod fault;
