use next_config_model::{SiteConfig, ThemeConfig};

pub(crate) fn site() -> SiteConfig {
    SiteConfig::from_file("tests/fixtures/export/_config.yml").unwrap()
}

pub(crate) fn theme() -> ThemeConfig {
    ThemeConfig::from_file("tests/fixtures/export/_config.next.yml").unwrap()
}
