use serde::{Deserialize, Deserializer, Serialize};

/// A bank product or procedure offered through the portal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// French display name, also used as the submission `service_type`.
    #[serde(rename = "name_fr")]
    pub name: String,
    /// French description shown on the catalog card.
    #[serde(rename = "description_fr", default)]
    pub description: String,
}

/// Geographic position of an agency.
///
/// Each axis accepts a JSON number or a decimal string. Missing, null or
/// unparsable values read as `None` so one odd agency does not fail the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees.
    #[serde(default, deserialize_with = "lenient_degrees")]
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees.
    #[serde(default, deserialize_with = "lenient_degrees")]
    pub longitude: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Degrees {
    Number(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

fn lenient_degrees<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(match Option::<Degrees>::deserialize(deserializer)? {
        Some(Degrees::Number(value)) => Some(value),
        Some(Degrees::Text(text)) => text.trim().parse().ok(),
        Some(Degrees::Other(_)) | None => None,
    })
}

/// A physical bank agency where appointments can be booked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agency {
    /// Backend identifier used when booking.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Position, flattened into `latitude`/`longitude` on the wire.
    #[serde(flatten)]
    pub coordinates: Coordinates,
    /// Street address.
    #[serde(default)]
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_uses_french_wire_names() {
        let services: Vec<Service> = serde_json::from_str(
            r#"[{"name_fr":"Carte SESAME","description_fr":"Carte de débit"}]"#,
        )
        .unwrap();

        assert_eq!(services.len(), 1);
        assert_eq!(services[0].name, "Carte SESAME");
        assert_eq!(services[0].description, "Carte de débit");
    }

    #[test]
    fn test_service_without_description() {
        let service: Service = serde_json::from_str(r#"{"name_fr":"Compte Muhira"}"#).unwrap();
        assert!(service.description.is_empty());
    }

    #[test]
    fn test_agency_flattens_coordinates() {
        let agency: Agency = serde_json::from_str(
            r#"{"id":3,"name":"Agence Centrale","latitude":-3.38,"longitude":29.36,"address":"Bujumbura"}"#,
        )
        .unwrap();

        assert_eq!(agency.id, 3);
        assert_eq!(agency.coordinates.latitude, Some(-3.38));
        assert_eq!(agency.coordinates.longitude, Some(29.36));

        let json = serde_json::to_value(&agency).unwrap();
        assert!(json.get("latitude").is_some());
        assert!(json.get("coordinates").is_none());
    }

    #[test]
    fn test_agency_coordinates_as_text_or_missing() {
        let agencies: Vec<Agency> = serde_json::from_str(
            r#"[
                {"id":1,"name":"Agence Centrale","latitude":"-3.38","longitude":"29.36"},
                {"id":2,"name":"Agence Kamenge"},
                {"id":3,"name":"Agence Gitega","latitude":null,"longitude":"n/a"}
            ]"#,
        )
        .unwrap();

        assert_eq!(agencies.len(), 3);
        assert_eq!(agencies[0].coordinates.latitude, Some(-3.38));
        assert_eq!(agencies[0].coordinates.longitude, Some(29.36));
        assert_eq!(agencies[1].coordinates, Coordinates::default());
        assert_eq!(agencies[2].coordinates, Coordinates::default());
        assert!(agencies[1].address.is_empty());
    }
}
