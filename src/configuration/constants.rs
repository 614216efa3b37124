pub mod cargo_env {
    pub const CARGO_PKG_NAME: &'static str = env!("CARGO_PKG_NAME");
}

pub mod common {
    pub const EXIT_FAILED_CASES: i32 = 1;
    pub const EXIT_RUNNER_ERROR: i32 = 2;
}
