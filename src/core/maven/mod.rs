/// Well-known Maven repositories hosting loader installers.
pub const FORGE_MAVEN: &str = "https://maven.minecraftforge.net";
pub const FABRIC_MAVEN: &str = "https://maven.fabricmc.net";
pub const NEOFORGE_MAVEN: &str = "https://maven.neoforged.net/releases";
