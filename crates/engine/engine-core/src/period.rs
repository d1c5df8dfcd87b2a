//! Period key arithmetic
//!
//! Simple year/month arithmetic over "YYYY-MM" keys. Deliberately not
//! calendar-aware beyond that.

use engine_spi::{EngineError, Result};

fn parse(month: &str) -> Result<(i32, u32)> {
    let (year, month_part) = month
        .split_once('-')
        .ok_or_else(|| EngineError::InvalidInput(format!("bad period key: {month:?}")))?;
    let year: i32 = year
        .parse()
        .map_err(|_| EngineError::InvalidInput(format!("bad period key: {month:?}")))?;
    let m: u32 = month_part
        .parse()
        .map_err(|_| EngineError::InvalidInput(format!("bad period key: {month:?}")))?;
    if !(1..=12).contains(&m) {
        return Err(EngineError::InvalidInput(format!(
            "bad period key: {month:?}"
        )));
    }
    Ok((year, m))
}

/// The period key one month after `month`.
pub fn next_month(month: &str) -> Result<String> {
    let (year, m) = parse(month)?;
    let (year, m) = if m == 12 { (year + 1, 1) } else { (year, m + 1) };
    Ok(format!("{year:04}-{m:02}"))
}

/// Calendar month (1-12) of a period key.
pub fn month_number(month: &str) -> Result<u32> {
    let (_, m) = parse(month)?;
    Ok(m)
}

/// Whole months from `from` to `to` (positive when `to` is later).
pub fn months_between(from: &str, to: &str) -> Result<i64> {
    let (fy, fm) = parse(from)?;
    let (ty, tm) = parse(to)?;
    Ok((ty as i64 - fy as i64) * 12 + (tm as i64 - fm as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_month_within_year() {
        assert_eq!(next_month("2026-01").unwrap(), "2026-02");
        assert_eq!(next_month("2026-02").unwrap(), "2026-03");
    }

    #[test]
    fn test_next_month_across_year_boundary() {
        assert_eq!(next_month("2025-12").unwrap(), "2026-01");
    }

    #[test]
    fn test_months_between() {
        assert_eq!(months_between("2025-12", "2026-01").unwrap(), 1);
        assert_eq!(months_between("2025-12", "2026-04").unwrap(), 4);
        assert_eq!(months_between("2025-10", "2026-10").unwrap(), 12);
        assert_eq!(months_between("2026-01", "2025-12").unwrap(), -1);
    }

    #[test]
    fn test_month_number() {
        assert_eq!(month_number("2026-04").unwrap(), 4);
        assert_eq!(month_number("2025-12").unwrap(), 12);
    }

    #[test]
    fn test_bad_keys_rejected() {
        assert!(next_month("2026").is_err());
        assert!(next_month("2026-13").is_err());
        assert!(months_between("garbage", "2026-01").is_err());
    }
}
