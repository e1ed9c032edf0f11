use serde::Deserialize;

use crate::domain::identity::Identity;

/// User payload returned by the auth API.
#[derive(Debug, Clone, Deserialize)]
pub struct UserPayload {
    pub id: String,
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserMetadata {
    pub name: Option<String>,
}

impl UserPayload {
    pub fn into_identity(self) -> Identity {
        Identity {
            id: self.id,
            display_name: self.user_metadata.name,
            email: self.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_metadata_name_and_email() {
        let payload: UserPayload = serde_json::from_str(
            r#"{
                "id": "u-1",
                "email": "camille@example.com",
                "user_metadata": { "name": "Camille" }
            }"#,
        )
        .expect("payload must deserialize");

        let identity = payload.into_identity();

        assert_eq!(identity.id, "u-1");
        assert_eq!(identity.display_label(), "Camille");
    }

    #[test]
    fn missing_metadata_falls_back_to_email() {
        let payload: UserPayload =
            serde_json::from_str(r#"{ "id": "u-1", "email": "camille@example.com" }"#)
                .expect("payload must deserialize");

        let identity = payload.into_identity();

        assert_eq!(identity.display_name, None);
        assert_eq!(identity.display_label(), "camille@example.com");
    }
}
