use serde::{Deserialize, Deserializer, Serialize};

/// Country reference data, keyed by uppercase ISO code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub capital: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub continent: String,
    /// Square flag, relative to the static data root
    #[serde(default, deserialize_with = "null_as_default")]
    pub flag_1x1: String,
    /// 4:3 flag, relative to the static data root
    #[serde(default, deserialize_with = "null_as_default")]
    pub flag_4x3: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub iso: bool,
    /// `[latitude, longitude]`
    #[serde(default)]
    pub coordinates: Option<[f64; 2]>,
}

impl Country {
    pub fn key(&self) -> String {
        self.code.to_uppercase()
    }

    pub fn region(&self) -> &str {
        &self.continent
    }
}

/// `null` decodes like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_fields_decode_as_empty() {
        let countries: Vec<Country> = serde_json::from_value(json!([
            {"code": "fr", "name": "France", "capital": "Paris", "continent": "Europe", "iso": true},
            {"code": "XK", "name": "Kosovo", "capital": null, "continent": null,
             "flag_1x1": null, "flag_4x3": null, "iso": null, "coordinates": null}
        ]))
        .unwrap();

        assert_eq!(countries[0].key(), "FR");
        assert_eq!(countries[0].region(), "Europe");
        assert!(countries[0].iso);

        let kosovo = &countries[1];
        assert_eq!(kosovo.capital, "");
        assert_eq!(kosovo.region(), "");
        assert_eq!(kosovo.flag_4x3, "");
        assert!(!kosovo.iso);
        assert_eq!(kosovo.coordinates, None);
    }
}
