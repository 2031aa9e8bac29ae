use crate::Value;

/// Settings of the NexT theme layer.
///
/// The options read here are opaque to this crate: each one is exported
/// exactly as written, including an explicit `null`.
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    #[serde(
        deserialize_with = "crate::value::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub scheme: Option<Value>,
    #[serde(
        deserialize_with = "crate::value::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub exturl: Option<Value>,
    #[serde(
        deserialize_with = "crate::value::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub sidebar: Option<Value>,
    #[serde(deserialize_with = "crate::value::record")]
    pub codeblock: Codeblock,
    #[serde(
        deserialize_with = "crate::value::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub bookmark: Option<Value>,
    #[serde(
        deserialize_with = "crate::value::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub fancybox: Option<Value>,
    #[serde(
        deserialize_with = "crate::value::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub mediumzoom: Option<Value>,
    #[serde(
        deserialize_with = "crate::value::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub lazyload: Option<Value>,
    #[serde(
        deserialize_with = "crate::value::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub pangu: Option<Value>,
    #[serde(
        deserialize_with = "crate::value::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub comments: Option<Value>,
    #[serde(deserialize_with = "crate::value::record")]
    pub algolia_search: AlgoliaSearch,
    #[serde(
        deserialize_with = "crate::value::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub local_search: Option<Value>,
    #[serde(
        deserialize_with = "crate::value::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub motion: Option<Value>,
    #[serde(flatten)]
    pub extra: crate::Extra,
}

#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Codeblock {
    #[serde(deserialize_with = "crate::value::record")]
    pub copy_button: CopyButton,
    #[serde(flatten)]
    pub extra: crate::Extra,
}

#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CopyButton {
    #[serde(
        deserialize_with = "crate::value::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub enable: Option<Value>,
    #[serde(flatten)]
    pub extra: crate::Extra,
}

/// Client-side presentation of Algolia results
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AlgoliaSearch {
    #[serde(
        deserialize_with = "crate::value::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub hits: Option<Value>,
    #[serde(
        deserialize_with = "crate::value::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub labels: Option<Value>,
    #[serde(flatten)]
    pub extra: crate::Extra,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn deserialize_next_options() {
        let theme: ThemeConfig = serde_yaml::from_str(
            "
scheme: Gemini
sidebar:
  position: right
codeblock:
  theme: default
  copy_button:
    enable: true
    style: mac
algolia_search:
  enable: true
  hits:
    per_page: 10
menu:
  home: / || fa fa-home
",
        )
        .unwrap();
        assert_eq!(theme.scheme, Some(Value::from("Gemini")));
        assert_eq!(theme.sidebar, Some(serde_json::json!({"position": "right"})));
        assert_eq!(theme.codeblock.copy_button.enable, Some(Value::Bool(true)));
        assert!(theme.codeblock.copy_button.extra.contains_key("style"));
        assert!(theme.codeblock.extra.contains_key("theme"));
        assert_eq!(theme.algolia_search.hits, Some(serde_json::json!({"per_page": 10})));
        assert_eq!(theme.algolia_search.labels, None);
        assert!(theme.algolia_search.extra.contains_key("enable"));
        assert!(theme.extra.contains_key("menu"));
        assert_eq!(theme.motion, None);
    }

    #[test]
    fn explicit_null_survives() {
        let theme: ThemeConfig = serde_yaml::from_str("pangu: ~\n").unwrap();
        assert_eq!(theme.pangu, Some(Value::Null));
        assert_eq!(theme.fancybox, None);
    }

    #[test]
    fn serialize_round_trips_null() {
        let theme: ThemeConfig = serde_yaml::from_str("pangu: ~\n").unwrap();
        let json = serde_json::to_value(&theme).unwrap();
        assert_eq!(json["pangu"], Value::Null);
        assert!(json.get("fancybox").is_none());
        let back: ThemeConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, theme);
    }

    #[test]
    fn off_type_records_degrade() {
        let theme: ThemeConfig = serde_json::from_value(serde_json::json!({
            "scheme": "Mist",
            "codeblock": "plain",
            "algolia_search": false,
        }))
        .unwrap();
        assert_eq!(theme.scheme, Some(Value::from("Mist")));
        assert_eq!(theme.codeblock, Codeblock::default());
        assert_eq!(theme.algolia_search, AlgoliaSearch::default());
    }
}
