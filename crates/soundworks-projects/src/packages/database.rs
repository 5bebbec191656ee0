//! Known plugins and libraries with their documentation

/// A documented package
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageEntry {
    pub name: &'static str,
    pub doc: &'static str,
}

const fn entry(name: &'static str, doc: &'static str) -> PackageEntry {
    PackageEntry { name, doc }
}

pub const GENERAL_DOCUMENTATION: &[PackageEntry] = &[
    entry("soundworks general documentation", "https://soundworks.dev"),
    entry("soundworks API", "https://soundworks.dev/api"),
];

pub const PLUGINS: &[PackageEntry] = &[
    entry(
        "@soundworks/plugin-platform-init",
        "https://soundworks.dev/plugins/platform-init.html",
    ),
    entry("@soundworks/plugin-sync", "https://soundworks.dev/plugins/sync.html"),
    entry(
        "@soundworks/plugin-filesystem",
        "https://soundworks.dev/plugins/filesystem.html",
    ),
    entry(
        "@soundworks/plugin-scripting",
        "https://soundworks.dev/plugins/scripting.html",
    ),
    entry("@soundworks/plugin-checkin", "https://soundworks.dev/plugins/checkin.html"),
    entry(
        "@soundworks/plugin-position",
        "https://soundworks.dev/plugins/position.html",
    ),
    entry("@soundworks/plugin-logger", "https://soundworks.dev/plugins/logger.html"),
];

pub const LIBRARIES: &[PackageEntry] = &[
    entry("@ircam/sc-components", "https://ircam-ismm.github.io/sc-components/"),
    entry("@ircam/sc-scheduling", "https://github.com/ircam-ismm/sc-scheduling"),
    entry("@ircam/sc-utils", "https://github.com/ircam-ismm/sc-utils"),
    entry("node-web-audio-api", "https://github.com/ircam-ismm/node-web-audio-api"),
];

/// Installable package families
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageKind {
    Plugins,
    Libraries,
}

impl PackageKind {
    pub fn all() -> [PackageKind; 2] {
        [PackageKind::Plugins, PackageKind::Libraries]
    }

    pub fn entries(&self) -> &'static [PackageEntry] {
        match self {
            PackageKind::Plugins => PLUGINS,
            PackageKind::Libraries => LIBRARIES,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PackageKind::Plugins => "plugins",
            PackageKind::Libraries => "libraries",
        }
    }

    pub fn find(&self, name: &str) -> Option<&'static PackageEntry> {
        self.entries().iter().find(|entry| entry.name == name)
    }
}

impl std::fmt::Display for PackageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_docs_follow_naming() {
        for plugin in PLUGINS {
            let short = plugin.name.trim_start_matches("@soundworks/plugin-");
            assert_eq!(
                plugin.doc,
                format!("https://soundworks.dev/plugins/{}.html", short)
            );
        }
    }

    #[test]
    fn test_find() {
        assert!(PackageKind::Libraries.find("@ircam/sc-utils").is_some());
        assert!(PackageKind::Plugins.find("@ircam/sc-utils").is_none());
    }
}
