use crate::Value;

/// Site-wide settings, as read from the project's `_config.yml`.
///
/// A value of an unexpected type only loses that one setting.
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    #[serde(
        deserialize_with = "crate::value::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub url: Option<String>,
    #[serde(
        deserialize_with = "crate::value::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub root: Option<Value>,
    #[serde(deserialize_with = "crate::value::record")]
    pub prismjs: Prismjs,
    #[serde(
        deserialize_with = "crate::value::optional_record",
        skip_serializing_if = "Option::is_none"
    )]
    pub search: Option<Search>,
    #[serde(
        deserialize_with = "crate::value::optional_record",
        skip_serializing_if = "Option::is_none"
    )]
    pub algolia: Option<Algolia>,
    #[serde(flatten)]
    pub extra: crate::Extra,
}

impl SiteConfig {
    /// Host the site is served from.
    ///
    /// Falls back to `url` verbatim when it is not an absolute URL with a host.
    pub fn hostname(&self) -> Option<String> {
        let url = self.url.as_deref()?;
        Some(parse_hostname(url).unwrap_or_else(|| url.to_owned()))
    }
}

fn parse_hostname(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let hostname = match parsed.host()? {
        url::Host::Domain(domain) => domain.to_owned(),
        url::Host::Ipv4(addr) => addr.to_string(),
        url::Host::Ipv6(addr) => addr.to_string(),
    };
    (!hostname.is_empty()).then_some(hostname)
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Prismjs {
    #[serde(deserialize_with = "crate::value::strict_true")]
    pub enable: bool,
    #[serde(deserialize_with = "crate::value::truthy")]
    pub preprocess: bool,
}

impl Prismjs {
    /// Whether PrismJS runs client-side rather than at generation time
    pub fn highlights_in_browser(&self) -> bool {
        self.enable && !self.preprocess
    }
}

/// Local search index settings
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Search {
    #[serde(
        deserialize_with = "crate::value::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub path: Option<Value>,
    #[serde(flatten)]
    pub extra: crate::Extra,
}

/// Algolia DocSearch credentials
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Algolia {
    #[serde(
        rename = "applicationID",
        deserialize_with = "crate::value::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub application_id: Option<Value>,
    #[serde(
        rename = "apiKey",
        deserialize_with = "crate::value::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub api_key: Option<Value>,
    #[serde(
        rename = "indexName",
        deserialize_with = "crate::value::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub index_name: Option<Value>,
    #[serde(flatten)]
    pub extra: crate::Extra,
}
