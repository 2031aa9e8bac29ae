use next_config_model::{SiteConfig, ThemeConfig, Value};

/// Configuration handed to the theme's client-side scripts as `CONFIG`.
///
/// Field order is the key order of the emitted object. Absent values are
/// left out of the object entirely.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ExportRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exturl: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copycode: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookmark: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fancybox: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mediumzoom: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lazyload: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pangu: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Value>,
    pub algolia: AlgoliaExport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localsearch: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motion: Option<Value>,
    pub prism: bool,
    /// Search index location; emitted whenever the site configures search
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Value>,
}

#[derive(Debug, Default, Clone, PartialEq, serde::Serialize)]
pub struct AlgoliaExport {
    #[serde(rename = "appID", skip_serializing_if = "Option::is_none")]
    pub app_id: Option<Value>,
    #[serde(rename = "apiKey", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<Value>,
    #[serde(rename = "indexName", skip_serializing_if = "Option::is_none")]
    pub index_name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hits: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Value>,
}

impl ExportRecord {
    pub fn new(site: &SiteConfig, theme: &ThemeConfig, version: Option<&str>) -> Self {
        let algolia = site.algolia.clone().unwrap_or_default();
        Self {
            hostname: site.hostname(),
            root: site.root.clone(),
            scheme: theme.scheme.clone(),
            version: version.map(str::to_owned),
            exturl: theme.exturl.clone(),
            sidebar: theme.sidebar.clone(),
            copycode: theme.codeblock.copy_button.enable.clone(),
            bookmark: theme.bookmark.clone(),
            fancybox: theme.fancybox.clone(),
            mediumzoom: theme.mediumzoom.clone(),
            lazyload: theme.lazyload.clone(),
            pangu: theme.pangu.clone(),
            comments: theme.comments.clone(),
            algolia: AlgoliaExport {
                app_id: algolia.application_id,
                api_key: algolia.api_key,
                index_name: algolia.index_name,
                hits: theme.algolia_search.hits.clone(),
                labels: theme.algolia_search.labels.clone(),
            },
            localsearch: theme.local_search.clone(),
            motion: theme.motion.clone(),
            prism: site.prismjs.highlights_in_browser(),
            path: site
                .search
                .as_ref()
                .map(|search| search.path.clone().unwrap_or(Value::Null)),
        }
    }
}
