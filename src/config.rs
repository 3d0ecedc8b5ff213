use std::env;

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    /// Slot grid step in minutes. Granularity is a product policy.
    pub slot_step_min: i32,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a number"),
            slot_step_min: env::var("SLOT_STEP_MINUTES")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .expect("SLOT_STEP_MINUTES must be a number"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            slot_step_min: 30,
        }
    }
}
