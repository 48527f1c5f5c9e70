use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};

/// Directory, next to the executable, holding the source image and the
/// generated icons.
pub const ICONS_SUBDIR: &str = "icons";

/// File name of the source image inside [`ICONS_SUBDIR`].
pub const SOURCE_FILE_NAME: &str = "glippy.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSize {
    pub file_name: &'static str,
    /// Edge length in pixels. Icons are always square.
    pub size: u32,
}

/// Icons written on every run, in generation order.
pub const ICON_SIZES: [IconSize; 3] = [
    IconSize {
        file_name: "icon16.png",
        size: 16,
    },
    IconSize {
        file_name: "icon48.png",
        size: 48,
    },
    IconSize {
        file_name: "icon128.png",
        size: 128,
    },
];

/// Location of the icon directory for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconsLayout {
    icons_dir: PathBuf,
}

impl IconsLayout {
    pub fn new(icons_dir: impl Into<PathBuf>) -> Self {
        Self {
            icons_dir: icons_dir.into(),
        }
    }

    pub fn from_exe_path(exe_path: &Path) -> Result<Self> {
        let parent = exe_path
            .parent()
            .ok_or_else(|| anyhow!("executable path has no parent: {}", exe_path.display()))?;
        Ok(Self::new(parent.join(ICONS_SUBDIR)))
    }

    /// Resolve the layout relative to the running executable.
    pub fn locate() -> Result<Self> {
        let exe_path = std::env::current_exe().context("resolve current executable")?;
        Self::from_exe_path(&exe_path)
    }

    pub fn icons_dir(&self) -> &Path {
        &self.icons_dir
    }

    pub fn source_path(&self) -> PathBuf {
        self.icons_dir.join(SOURCE_FILE_NAME)
    }

    pub fn output_path(&self, icon: &IconSize) -> PathBuf {
        self.icons_dir.join(icon.file_name)
    }
}
