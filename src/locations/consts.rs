/// Longest accepted city name, in graphemes.
pub const MAX_CITY_NAME_LENGTH: usize = 80;
