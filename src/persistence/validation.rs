//! Field-by-field adoption of a decoded save payload
//!
//! Each field is checked on its own so that a save written by an older or
//! newer build still restores whatever it can.

use serde_json::Value;

use super::ProgressRecord;

/// Merge the valid fields of `payload` into `defaults`
pub fn adopt(payload: &Value, mut record: ProgressRecord) -> ProgressRecord {
    if let Some(coins) = payload.get("coins").and_then(Value::as_u64) {
        record.coins = coins;
    }

    if let Some(flags) = payload.get("owned").and_then(Value::as_array) {
        for (slot, flag) in record.owned.iter_mut().zip(flags) {
            if let Some(flag) = flag.as_bool() {
                *slot = flag;
            }
        }
    }

    let slots = record.owned.len() as u64;
    if let Some(current) = payload
        .get("current")
        .and_then(Value::as_u64)
        .filter(|&current| current < slots)
    {
        record.current = current as usize;
    }

    if let Some(best) = payload.get("best").and_then(Value::as_u64) {
        record.best = best;
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn defaults() -> ProgressRecord {
        ProgressRecord {
            best: 0,
            coins: 0,
            current: 0,
            owned: vec![true, false, false, false],
        }
    }

    #[test]
    fn test_each_field_checked_independently() {
        let payload = json!({
            "coins": -5,
            "owned": [true, "yes", true],
            "current": 99,
            "best": 7,
        });

        let record = adopt(&payload, defaults());
        assert_eq!(record.coins, 0);
        assert_eq!(record.owned, vec![true, false, true, false]);
        assert_eq!(record.current, 0);
        assert_eq!(record.best, 7);
    }

    #[test]
    fn test_extra_flags_and_unknown_keys_ignored() {
        let payload = json!({
            "coins": 12,
            "owned": [true, true, true, true, true, true],
            "current": 3,
            "version": 9,
        });

        let record = adopt(&payload, defaults());
        assert_eq!(record.coins, 12);
        assert_eq!(record.owned, vec![true; 4]);
        assert_eq!(record.current, 3);
        assert_eq!(record.best, 0);
    }

    #[test]
    fn test_wrong_types_rejected() {
        let payload = json!({
            "coins": 10.5,
            "owned": "all",
            "current": "2",
            "best": null,
        });
        assert_eq!(adopt(&payload, defaults()), defaults());
    }
}
