pub mod activity;
pub mod seed;

pub use activity::{Activity, ActivityDetails};
pub use seed::{default_seed, SeedSet};
