use std::env;
use std::fs;
use std::io;
use std::path::Path;

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-changed=config.toml");

    let out_dir = env::var("OUT_DIR").map_err(io::Error::other)?;

    // OUT_DIR is target/<profile>/build/<pkg>/out; the binary lives in target/<profile>
    let Some(profile_dir) = Path::new(&out_dir).ancestors().nth(3) else {
        return Ok(());
    };

    let config_path = Path::new("config.toml");
    if config_path.exists() {
        fs::copy(config_path, profile_dir.join("config.toml"))?;
    }
    Ok(())
}
