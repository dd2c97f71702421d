use serde::{Deserialize, Serialize};

/// A persisted contact record. The `id` is assigned by the store at creation
/// time and never changes afterwards; the remaining fields are replaceable.
///
/// Serialized in camelCase both on the wire and in the on-disk document.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Caller-supplied shape for create/update: all fields except `id`.
///
/// All three fields are required on the wire (a missing field fails
/// deserialization); no length or format validation is applied.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Contact {
    /// Build a record from an input with a store-assigned id.
    pub fn from_input(id: u64, input: ContactInput) -> Self {
        Self {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
        }
    }

    /// Replace every field except `id`.
    pub fn apply(&mut self, input: ContactInput) {
        self.first_name = input.first_name;
        self.last_name = input.last_name;
        self.email = input.email;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_serializes_camel_case() {
        let c = Contact {
            id: 1,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
        };
        let json = serde_json::to_value(&c).expect("serialize");
        assert_eq!(json["id"], 1);
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["lastName"], "Lovelace");
        assert_eq!(json["email"], "ada@example.com");
    }

    #[test]
    fn input_requires_all_fields() {
        let missing = r#"{"firstName":"Ada","lastName":"Lovelace"}"#;
        assert!(serde_json::from_str::<ContactInput>(missing).is_err());
    }

    #[test]
    fn apply_replaces_everything_but_id() {
        let mut c = Contact {
            id: 7,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
        };
        c.apply(ContactInput {
            first_name: "Augusta".into(),
            last_name: "King".into(),
            email: "augusta@example.com".into(),
        });
        assert_eq!(c.id, 7);
        assert_eq!(c.first_name, "Augusta");
        assert_eq!(c.last_name, "King");
        assert_eq!(c.email, "augusta@example.com");
    }
}
