#![cfg(feature = "serde")]

use typelist::prelude::*;
use typelist::{reify, SequenceError};

#[test]
fn exhausted_error_survives_json() -> Result<(), serde_json::Error> {
    let error = match reify::nth::<Take<UnaryOf<2>, Nats>, usize>(5) {
        Err(error) => error,
        Ok(value) => panic!("unexpected element {}", value),
    };
    let json = serde_json::to_string(&error)?;
    assert_eq!(json, r#"{"Exhausted":{"index":5,"length":2}}"#);
    assert_eq!(serde_json::from_str::<SequenceError>(&json)?, error);
    Ok(())
}
