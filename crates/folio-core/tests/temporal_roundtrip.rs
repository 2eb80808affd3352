//! Property tests: a timestamp's rendered form is a fixed point of the
//! lenient parser. Validation relies on this so that re-validating a coerced
//! date/time never changes it.

use chrono::{DateTime, Utc};
use folio_core::Timestamp;
use proptest::prelude::*;

/// Instants between 1900 and 2200, with arbitrary sub-second precision.
fn arb_timestamp() -> impl Strategy<Value = Timestamp> {
    (-2_208_988_800i64..7_258_118_400i64, 0u32..1_000_000_000u32).prop_map(|(secs, nanos)| {
        let dt: DateTime<Utc> = DateTime::from_timestamp(secs, nanos).unwrap();
        Timestamp::from_utc(dt)
    })
}

proptest! {
    #[test]
    fn rendered_form_reparses_to_same_instant(ts in arb_timestamp()) {
        let rendered = ts.to_string();
        prop_assert_eq!(Timestamp::parse_lenient(&rendered).unwrap(), ts);
        prop_assert_eq!(Timestamp::parse(&rendered).unwrap(), ts);
    }

    #[test]
    fn rendering_is_stable(ts in arb_timestamp()) {
        let once = Timestamp::parse_lenient(&ts.to_string()).unwrap();
        prop_assert_eq!(once.to_string(), ts.to_string());
    }

    #[test]
    fn date_only_text_is_midnight(y in 1900i32..2200, m in 1u32..=12, d in 1u32..=28) {
        let text = format!("{y:04}-{m:02}-{d:02}");
        let ts = Timestamp::parse_lenient(&text).unwrap();
        prop_assert_eq!(ts.to_string(), format!("{text}T00:00:00Z"));
    }
}
