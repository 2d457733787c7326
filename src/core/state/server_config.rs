pub const DEFAULT_MAX_RAM: &str = "4G";
pub const DEFAULT_MIN_RAM: &str = "2G";
pub const DEFAULT_TYPICAL_START_ARGS: &str = "-XX:+UnlockExperimentalVMOptions -XX:+UseG1GC -XX:G1NewSizePercent=20 -XX:G1ReservePercent=20 -XX:MaxGCPauseMillis=50 -XX:G1HeapRegionSize=32M";
pub const DEFAULT_JAVA_BIN: &str = "java";

/// Tunables read once from the environment at process start.
///
/// | variable                | field                   | default          |
/// |-------------------------|-------------------------|------------------|
/// | `MAX_RAM`               | `max_ram`               | `4G`             |
/// | `MIN_RAM`               | `min_ram`               | `2G`             |
/// | `TYPICAL_START_ARGS`    | `typical_start_args`    | G1GC tuning set  |
/// | `ADDITIONAL_START_ARGS` | `additional_start_args` | empty            |
/// | `INSTALL_OPTIONAL_MODS` | `install_optional_mods` | unset            |
/// | `JAVA_BIN`              | `java_bin`              | `java`           |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub max_ram: String,
    pub min_ram: String,
    pub typical_start_args: String,
    pub additional_start_args: String,
    /// `Some(true)` only for `"1"`. Left `None` when unset so packs with
    /// optional mods can demand an explicit choice.
    pub install_optional_mods: Option<bool>,
    pub java_bin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            max_ram: DEFAULT_MAX_RAM.to_string(),
            min_ram: DEFAULT_MIN_RAM.to_string(),
            typical_start_args: DEFAULT_TYPICAL_START_ARGS.to_string(),
            additional_start_args: String::new(),
            install_optional_mods: None,
            java_bin: DEFAULT_JAVA_BIN.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            max_ram: lookup("MAX_RAM").unwrap_or(defaults.max_ram),
            min_ram: lookup("MIN_RAM").unwrap_or(defaults.min_ram),
            typical_start_args: lookup("TYPICAL_START_ARGS")
                .unwrap_or(defaults.typical_start_args),
            additional_start_args: lookup("ADDITIONAL_START_ARGS")
                .unwrap_or(defaults.additional_start_args),
            install_optional_mods: lookup("INSTALL_OPTIONAL_MODS").map(|v| v == "1"),
            java_bin: lookup("JAVA_BIN").unwrap_or(defaults.java_bin),
        }
    }
}
