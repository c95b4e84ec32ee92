//! Workspace root package.
//!
//! Carries workspace-level development tooling such as the `rusty-hook`
//! pre-commit configuration. The planner lives in `crates/roadtrip-lib` and
//! the `roadtrip` binary in `crates/roadtrip-cli`.
