use chrono::{Days, NaiveDate};
use rand::Rng;

use crate::model::DayWindow;

/// GS1 prefix assigned to India.
pub const BARCODE_PREFIX: &str = "890";
pub const PRODUCT_ID_PREFIX: &str = "PROD_";

/// `890` followed by a random 10-digit number.
pub fn barcode(rng: &mut impl Rng) -> String {
    let body: u64 = rng.random_range(1_000_000_000..=9_999_999_999);
    format!("{BARCODE_PREFIX}{body}")
}

/// `PROD_` followed by the index zero-padded to six digits.
pub fn product_id(index: u64) -> String {
    format!("{PRODUCT_ID_PREFIX}{index:06}")
}

pub fn hsn_code(prefix: &str, rng: &mut impl Rng) -> String {
    let suffix: u32 = rng.random_range(1000..=9999);
    format!("{prefix}{suffix}")
}

/// A date between `window.min` and `window.max` days after `today`.
pub fn expiry_date(today: NaiveDate, window: DayWindow, rng: &mut impl Rng) -> NaiveDate {
    let offset = rng.random_range(window.min..=window.max);
    today + Days::new(offset)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn barcode_is_thirteen_digits_with_prefix() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..500 {
            let code = barcode(&mut rng);
            assert_eq!(code.len(), 13);
            assert!(code.starts_with(BARCODE_PREFIX));
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn product_id_is_zero_padded() {
        assert_eq!(product_id(1), "PROD_000001");
        assert_eq!(product_id(47_501), "PROD_047501");
    }

    #[test]
    fn hsn_code_appends_four_digits() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let code = hsn_code("3004", &mut rng);
        assert_eq!(code.len(), 8);
        assert!(code.starts_with("3004"));
    }

    #[test]
    fn expiry_stays_inside_window() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap_or_default();
        let window = DayWindow { min: 180, max: 1095 };
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..200 {
            let date = expiry_date(today, window, &mut rng);
            let days = (date - today).num_days();
            assert!((180..=1095).contains(&days), "offset {days} out of window");
        }
    }
}
