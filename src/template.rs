use std::fmt;
use std::io::Write;

use liquid_core::error::ResultLiquidReplaceExt;
use liquid_core::model::ScalarCow;
use liquid_core::Language;
use liquid_core::TagTokenIter;
use liquid_core::ValueView;
use liquid_core::{Renderable, Runtime};
use next_config_model::{SiteConfig, ThemeConfig};

use crate::error::*;

/// Global holding the site config during a render
pub const SITE_GLOBAL: &str = "config";
/// Global holding the theme config during a render
pub const THEME_GLOBAL: &str = "theme";
/// Global holding the theme version during a render
pub const VERSION_GLOBAL: &str = "next_version";

/// Build the render context a page template sees.
pub fn page_globals(
    site: &SiteConfig,
    theme: &ThemeConfig,
    version: Option<&str>,
) -> Result<liquid::model::Object> {
    let mut globals = liquid::model::Object::new();
    globals.insert(SITE_GLOBAL.into(), liquid::model::to_value(site)?);
    globals.insert(THEME_GLOBAL.into(), liquid::model::to_value(theme)?);
    if let Some(version) = version {
        globals.insert(
            VERSION_GLOBAL.into(),
            liquid::model::Value::scalar(version.to_owned()),
        );
    }
    Ok(globals)
}

pub struct Liquid {
    parser: liquid::Parser,
}

impl Liquid {
    pub fn new() -> Result<Self> {
        let parser = liquid::ParserBuilder::with_stdlib()
            .tag(NextConfigTag)
            .build()?;
        Ok(Self { parser })
    }

    pub fn parse(&self, template: &str) -> Result<liquid::Template> {
        let template = self.parser.parse(template)?;
        Ok(template)
    }
}

impl fmt::Debug for Liquid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Liquid{{}}")
    }
}

/// `{% next_config %}`: emit the theme's configuration script.
#[derive(Copy, Clone, Debug, Default)]
pub struct NextConfigTag;

impl liquid_core::TagReflection for NextConfigTag {
    fn tag(&self) -> &'static str {
        "next_config"
    }

    fn description(&self) -> &'static str {
        "Export the site and theme config to client-side scripts"
    }
}

impl liquid_core::ParseTag for NextConfigTag {
    fn reflection(&self) -> &dyn liquid_core::TagReflection {
        self
    }

    fn parse(
        &self,
        mut arguments: TagTokenIter<'_>,
        _options: &Language,
    ) -> Result<Box<dyn Renderable>, liquid_core::Error> {
        arguments.expect_nothing()?;
        Ok(Box::new(NextConfig))
    }
}

#[derive(Copy, Clone, Debug)]
struct NextConfig;

impl Renderable for NextConfig {
    fn render_to(
        &self,
        writer: &mut dyn Write,
        runtime: &dyn Runtime,
    ) -> Result<(), liquid_core::Error> {
        let site: SiteConfig = read_global(runtime, SITE_GLOBAL);
        let theme: ThemeConfig = read_global(runtime, THEME_GLOBAL);
        let version = runtime
            .try_get(&[ScalarCow::new(VERSION_GLOBAL)])
            .filter(|version| !version.is_nil())
            .map(|version| version.to_kstr().into_string());

        let script = crate::render_config_script(&site, &theme, version.as_deref());
        write!(writer, "{script}").replace("Failed to render")?;
        Ok(())
    }
}

/// Missing or malformed globals read as empty config rather than failing the page.
fn read_global<T>(runtime: &dyn Runtime, name: &'static str) -> T
where
    T: Default + serde::de::DeserializeOwned,
{
    let Some(value) = runtime.try_get(&[ScalarCow::new(name)]) else {
        log::debug!("No `{name}` in scope, using defaults");
        return T::default();
    };
    let converted = serde_json::to_value(value.to_value()).and_then(serde_json::from_value);
    match converted {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Ignoring malformed `{name}`: {e}");
            T::default()
        }
    }
}

#[cfg(test)]
mod test {
    use next_config_model::{Search, Value};

    use super::*;
    use crate::fixtures::{site, theme};

    fn render(template: &str, globals: &liquid::model::Object) -> String {
        let liquid = Liquid::new().unwrap();
        liquid.parse(template).unwrap().render(globals).unwrap()
    }

    fn embedded_config(page: &str) -> Value {
        let start = page.find("var CONFIG = ").unwrap() + "var CONFIG = ".len();
        let end = page.rfind(";\n  </script>").unwrap();
        serde_json::from_str(&page[start..end]).unwrap()
    }

    #[test]
    fn tag_matches_direct_render() {
        let globals = page_globals(&site(), &theme(), Some("8.0.0")).unwrap();
        let actual = render("{% next_config %}", &globals);
        let expected = crate::render_config_script(&site(), &theme(), Some("8.0.0"));
        assert_eq!(actual, expected);
    }

    #[test]
    fn tag_inside_layout() {
        let mut site = site();
        site.search = Some(Search {
            path: Some(Value::from("search.xml")),
            ..Default::default()
        });
        let mut theme = theme();
        theme.comments = Some(Value::Null);
        let globals = page_globals(&site, &theme, None).unwrap();
        let actual = render(
            "<head>{% next_config %}</head><title>{{ config.title }}</title>",
            &globals,
        );
        assert!(actual.starts_with("<head><script class=\"hexo-configurations\">"));
        assert!(actual.ends_with("</script></head><title>Example Blog</title>"));
        assert!(!actual.contains("\"version\""));
        assert!(actual.contains(r#""comments":null"#));
        assert!(actual.contains(r#""path":"search.xml""#));
    }

    #[test]
    fn tag_without_globals() {
        let actual = render("{% next_config %}", &liquid::model::Object::new());
        let expected =
            crate::render_config_script(&SiteConfig::default(), &ThemeConfig::default(), None);
        assert_eq!(actual, expected);
        assert!(actual.contains(r#"var CONFIG = {"algolia":{},"prism":false};"#));
    }

    #[test]
    fn tag_with_malformed_globals() {
        let mut globals = liquid::model::Object::new();
        globals.insert(SITE_GLOBAL.into(), liquid::model::Value::scalar("oops"));
        globals.insert(
            VERSION_GLOBAL.into(),
            liquid::model::Value::scalar("8.0.0"),
        );
        let actual = render("{% next_config %}", &globals);
        assert!(actual.contains(r#"var CONFIG = {"version":"8.0.0","algolia":{},"prism":false};"#));
    }

    #[test]
    fn tag_keeps_site_with_off_type_field() {
        let config = serde_json::json!({
            "url": "https://example.com/blog",
            "root": "/",
            "prismjs": {"enable": true},
            "search": {"path": "search.xml"},
            "algolia": {"applicationID": 12345},
        });
        let mut globals = liquid::model::Object::new();
        globals.insert(
            SITE_GLOBAL.into(),
            liquid::model::to_value(&config).unwrap(),
        );
        let actual = embedded_config(&render("{% next_config %}", &globals));
        assert_eq!(
            actual,
            serde_json::json!({
                "hostname": "example.com",
                "root": "/",
                "algolia": {"appID": 12345},
                "prism": true,
                "path": "search.xml",
            })
        );
    }

    #[test]
    fn tag_rejects_arguments() {
        let liquid = Liquid::new().unwrap();
        assert!(liquid.parse("{% next_config site %}").is_err());
    }
}
