use serde::{Deserialize, Serialize};

/// A venue hosting NCAA Men's Basketball games. Also embedded in [`Team`] as
/// the team's home stadium.
///
/// [`Team`]: crate::models::Team
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stadium {
    #[serde(rename = "StadiumID")]
    pub stadium_id: i32,
    /// Whether this stadium is the home venue for an active team
    #[serde(rename = "Active")]
    pub active: bool,
    #[serde(rename = "Name", deserialize_with = "crate::models::non_empty_string")]
    pub name: String,
    #[serde(rename = "Address", default)]
    pub address: Option<String>,
    #[serde(rename = "City", default)]
    pub city: Option<String>,
    /// US state, absent for stadiums outside the US
    #[serde(rename = "State", default)]
    pub state: Option<String>,
    #[serde(rename = "Zip", default)]
    pub zip: Option<String>,
    #[serde(rename = "Country", default)]
    pub country: Option<String>,
    #[serde(rename = "Capacity", default)]
    pub capacity: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_FIXTURE: &str = r#"{
        "StadiumID": 101,
        "Active": true,
        "Name": "Moody Coliseum",
        "Address": "6024 Airline Rd",
        "City": "Dallas",
        "State": "TX",
        "Zip": "75205",
        "Country": "US",
        "Capacity": 7000
    }"#;

    #[test]
    fn test_stadium_full_decode() {
        let stadium: Stadium = serde_json::from_str(FULL_FIXTURE).unwrap();
        assert_eq!(stadium.stadium_id, 101);
        assert!(stadium.active);
        assert_eq!(stadium.name, "Moody Coliseum");
        assert_eq!(stadium.address.as_deref(), Some("6024 Airline Rd"));
        assert_eq!(stadium.city.as_deref(), Some("Dallas"));
        assert_eq!(stadium.state.as_deref(), Some("TX"));
        assert_eq!(stadium.zip.as_deref(), Some("75205"));
        assert_eq!(stadium.country.as_deref(), Some("US"));
        assert_eq!(stadium.capacity, Some(7000));
    }

    #[test]
    fn test_stadium_optional_fields_default_to_absent() {
        let stadium: Stadium =
            serde_json::from_str(r#"{"StadiumID":45,"Active":false,"Name":"Liacouras Center"}"#)
                .unwrap();
        assert_eq!(stadium.stadium_id, 45);
        assert!(!stadium.active);
        assert!(stadium.address.is_none());
        assert!(stadium.city.is_none());
        assert!(stadium.state.is_none());
        assert!(stadium.zip.is_none());
        assert!(stadium.country.is_none());
        assert!(stadium.capacity.is_none());
    }

    #[test]
    fn test_stadium_missing_required_field_fails() {
        for omitted in ["StadiumID", "Active", "Name"] {
            let mut value: serde_json::Value = serde_json::from_str(FULL_FIXTURE).unwrap();
            value.as_object_mut().unwrap().remove(omitted);
            assert!(
                serde_json::from_value::<Stadium>(value).is_err(),
                "decode should fail without {omitted}"
            );
        }
    }

    #[test]
    fn test_stadium_empty_name_fails() {
        let result = serde_json::from_str::<Stadium>(r#"{"StadiumID":1,"Active":true,"Name":""}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_stadium_ignores_unknown_fields() {
        let stadium: Stadium = serde_json::from_str(
            r#"{"StadiumID":1,"Active":true,"Name":"Arena","GeoLat":32.8,"GeoLong":-96.78}"#,
        )
        .unwrap();
        assert_eq!(stadium.name, "Arena");
    }

    #[test]
    fn test_stadium_equality() {
        let a: Stadium = serde_json::from_str(FULL_FIXTURE).unwrap();
        let b: Stadium = serde_json::from_str(FULL_FIXTURE).unwrap();
        assert_eq!(a, b);

        let mut different = b;
        different.capacity = Some(7001);
        assert_ne!(a, different);
    }
}
