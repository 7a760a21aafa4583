//! Setting value validation.

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        "BIGGIFY_DEFAULT_ROWS" | "BIGGIFY_MAX_ROWS" => validate_int_range(value, 1, 50)?,
        "BIGGIFY_MAX_MERGE_IMAGES" => validate_int_range(value, 2, 25)?,
        "BIGGIFY_DEFAULT_STRETCH" => validate_float_range(value, 1.0, 3.0)?,
        "BIGGIFY_OUTPUT_SCALE" => validate_float_range(value, 0.5, 4.0)?,
        "BIGGIFY_LOG" => {
            if value.trim().is_empty() {
                return Err("must not be empty".into());
            }
        }
        _ => {}
    }
    Ok(())
}

fn validate_int_range(value: &str, min: i64, max: i64) -> Result<(), String> {
    let v: i64 = value.parse().map_err(|_| "must be an integer")?;
    if v < min || v > max {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}

fn validate_float_range(value: &str, min: f64, max: f64) -> Result<(), String> {
    let v: f64 = value.parse().map_err(|_| "must be a float")?;
    if !(min..=max).contains(&v) {
        return Err(format!("must be between {min:.1} and {max:.1}"));
    }
    Ok(())
}
