/// Lower bound of the expected lifespan estimate (years).
pub const MIN_LIFESPAN: i32 = 60;

/// Upper bound of the expected lifespan estimate (years).
pub const MAX_LIFESPAN: i32 = 100;

/// Horizon used when smart estimation is switched off.
pub const FIXED_HORIZON_YEARS: f64 = 10.0;

pub const DAYS_PER_YEAR: f64 = 365.0;

/// Saturday and Sunday mornings.
pub const WEEKEND_MORNINGS_PER_YEAR: f64 = 104.0;

pub const FULL_MOONS_PER_YEAR: f64 = 12.0;

pub const MEALS_PER_DAY: f64 = 3.0;

/// People met per year. Flat across every tuning pass of the other numbers.
pub const NEW_FACES_PER_YEAR: f64 = 180.0;

/// Hobby slots a profile can carry.
pub const MAX_HOBBIES: usize = 3;

/// Stand-in when the name field is blank.
pub const FALLBACK_NAME: &str = "Friend";
