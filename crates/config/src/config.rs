use std::path;

use super::*;

pub const SITE_CONFIG: &str = "_config.yml";
pub const THEME_CONFIGS: &[&str] = &["_config.next.yml", "themes/next/_config.yml"];
pub const THEME_PACKAGE: &str = "themes/next/package.json";

impl SiteConfig {
    pub fn from_file<P: Into<path::PathBuf>>(path: P) -> Result<SiteConfig> {
        from_yaml_file(path.into())
    }
}

impl ThemeConfig {
    pub fn from_file<P: Into<path::PathBuf>>(path: P) -> Result<ThemeConfig> {
        from_yaml_file(path.into())
    }
}

fn from_yaml_file<T>(path: path::PathBuf) -> Result<T>
where
    T: Default + serde::de::DeserializeOwned,
{
    let content = std::fs::read_to_string(&path).map_err(|e| {
        Status::new("Failed to read config")
            .with_source(e)
            .context_with(|c| c.insert("Path", path.display().to_string()))
    })?;

    if content.trim().is_empty() {
        return Ok(T::default());
    }
    serde_yaml::from_str(&content).map_err(|e| {
        Status::new("Failed to parse config")
            .with_source(e)
            .context_with(|c| c.insert("Path", path.display().to_string()))
    })
}

/// Where to look for a project's configuration.
///
/// Unset paths are discovered relative to `cwd`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    pub cwd: path::PathBuf,
    pub site: Option<path::PathBuf>,
    pub theme: Option<path::PathBuf>,
}

/// Site and theme configuration of one Hexo project
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Project {
    pub root: path::PathBuf,
    pub site: SiteConfig,
    pub theme: ThemeConfig,
    /// Theme version, when the theme ships a `package.json`
    pub theme_version: Option<String>,
}

impl Project {
    pub fn load(paths: ProjectPaths) -> Result<Project> {
        let ProjectPaths { cwd, site, theme } = paths;

        let site_path = site.or_else(|| find_project_file(&cwd, SITE_CONFIG));
        let (root, site) = match site_path {
            Some(site_path) => {
                log::debug!("Using site config `{}`", site_path.display());
                let site = SiteConfig::from_file(&site_path)?;
                (parent_dir(&site_path), site)
            }
            None => {
                log::warn!("No {SITE_CONFIG} file found in current directory, using default config.");
                (cwd, SiteConfig::default())
            }
        };

        let theme_path = theme.or_else(|| {
            THEME_CONFIGS
                .iter()
                .map(|name| root.join(name))
                .find(|path| path.is_file())
        });
        let theme = match theme_path {
            Some(theme_path) => {
                log::debug!("Using theme config `{}`", theme_path.display());
                ThemeConfig::from_file(&theme_path)?
            }
            None => {
                log::warn!(
                    "No theme config found under `{}`, using default theme config.",
                    root.display()
                );
                ThemeConfig::default()
            }
        };

        let theme_version = read_package_version(&root.join(THEME_PACKAGE));

        Ok(Project {
            root,
            site,
            theme,
            theme_version,
        })
    }
}

fn parent_dir(file: &path::Path) -> path::PathBuf {
    let mut root = file.to_owned();
    root.pop(); // Remove filename
    if root == path::Path::new("") {
        root = path::Path::new(".").to_owned();
    }
    root
}

#[derive(serde::Deserialize)]
struct Package {
    version: Option<String>,
}

fn read_package_version(path: &path::Path) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str::<Package>(&content) {
        Ok(package) => {
            log::debug!("Read theme version {:?} from `{}`", package.version, path.display());
            package.version
        }
        Err(e) => {
            log::warn!("Ignoring malformed `{}`: {}", path.display(), e);
            None
        }
    }
}

pub fn find_project_file<P: Into<path::PathBuf>>(dir: P, name: &str) -> Option<path::PathBuf> {
    find_project_file_internal(dir.into(), name)
}

fn find_project_file_internal(dir: path::PathBuf, name: &str) -> Option<path::PathBuf> {
    let mut file_path = dir;
    file_path.push(name);
    while !file_path.exists() {
        file_path.pop(); // filename
        let hit_bottom = !file_path.pop();
        if hit_bottom {
            return None;
        }
        file_path.push(name);
    }
    Some(file_path)
}
