//! Serializes containers as tagged objects: `{"ok": true, "value": ..}` / `{"ok": false, "err": ..}` for
//! [`Outcome`], and `{"some": true, "value": ..}` / `{"some": false}` for [`Maybe`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::Error;
use serde::ser::SerializeStruct;

use crate::maybe::Maybe;
use crate::outcome::Outcome;

impl<T: Serialize, E: Serialize> Serialize for Outcome<T, E> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut state = serializer.serialize_struct("Outcome", 2)?;
    match self {
      Outcome::Ok(value) => {
        state.serialize_field("ok", &true)?;
        state.serialize_field("value", value)?;
      }
      Outcome::Err(error) => {
        state.serialize_field("ok", &false)?;
        state.serialize_field("err", error)?;
      }
    }
    state.end()
  }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct OutcomeRepr<T, E> {
  ok: bool,
  value: Option<T>,
  err: Option<E>,
}

impl<'de, T: Deserialize<'de>, E: Deserialize<'de>> Deserialize<'de> for Outcome<T, E> {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    match OutcomeRepr::deserialize(deserializer)? {
      OutcomeRepr { ok: true, value: Some(value), err: None } => Ok(Outcome::Ok(value)),
      OutcomeRepr { ok: false, value: None, err: Some(error) } => Ok(Outcome::Err(error)),
      OutcomeRepr { ok: true, .. } => Err(D::Error::custom("successful outcome must have a `value` and no `err`")),
      OutcomeRepr { ok: false, .. } => Err(D::Error::custom("failed outcome must have an `err` and no `value`")),
    }
  }
}


impl<T: Serialize> Serialize for Maybe<T> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      Maybe::Some(value) => {
        let mut state = serializer.serialize_struct("Maybe", 2)?;
        state.serialize_field("some", &true)?;
        state.serialize_field("value", value)?;
        state.end()
      }
      Maybe::None => {
        let mut state = serializer.serialize_struct("Maybe", 1)?;
        state.serialize_field("some", &false)?;
        state.end()
      }
    }
  }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct MaybeRepr<T> {
  some: bool,
  value: Option<T>,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Maybe<T> {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    match MaybeRepr::deserialize(deserializer)? {
      MaybeRepr { some: true, value: Some(value) } => Ok(Maybe::Some(value)),
      MaybeRepr { some: false, value: None } => Ok(Maybe::None),
      MaybeRepr { some: true, .. } => Err(D::Error::custom("present value must have a `value`")),
      MaybeRepr { some: false, .. } => Err(D::Error::custom("absent value must not have a `value`")),
    }
  }
}


#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn outcome_uses_tagged_shape() {
    assert_eq!(serde_json::to_value(Outcome::<_, String>::ok(3)).unwrap(), json!({"ok": true, "value": 3}));
    assert_eq!(serde_json::to_value(Outcome::<u8, _>::err("no")).unwrap(), json!({"ok": false, "err": "no"}));

    let outcome: Outcome<u8, String> = serde_json::from_value(json!({"ok": false, "err": "no"})).unwrap();
    assert_eq!(outcome, Outcome::Err("no".to_string()));
  }

  #[test]
  fn outcome_rejects_mismatched_shape() {
    assert!(serde_json::from_value::<Outcome<u8, String>>(json!({"ok": true, "err": "no"})).is_err());
    assert!(serde_json::from_value::<Outcome<u8, String>>(json!({"ok": false})).is_err());
  }

  #[test]
  fn maybe_uses_tagged_shape() {
    assert_eq!(serde_json::to_value(Maybe::some("x")).unwrap(), json!({"some": true, "value": "x"}));
    assert_eq!(serde_json::to_value(Maybe::<u8>::none()).unwrap(), json!({"some": false}));

    let maybe: Maybe<u8> = serde_json::from_value(json!({"some": true, "value": 4})).unwrap();
    assert_eq!(maybe, Maybe::Some(4));
    assert!(serde_json::from_value::<Maybe<u8>>(json!({"some": true})).is_err());
  }
}
