fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=EXPECTION_DEFAULT_POLICY");
    println!("cargo:rustc-check-cfg=cfg(expection_default_expected)");

    // EXPECTION_DEFAULT_POLICY takes precedence over the `default-expected` feature.
    let expected = match std::env::var("EXPECTION_DEFAULT_POLICY") {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "exceptions" => false,
            "expected" => true,
            _ => {
                return Err(format!(
                    "EXPECTION_DEFAULT_POLICY must be `exceptions` or `expected`, got `{raw}`"
                )
                .into())
            }
        },
        Err(std::env::VarError::NotPresent) => {
            std::env::var_os("CARGO_FEATURE_DEFAULT_EXPECTED").is_some()
        }
        Err(e) => return Err(format!("failed to read EXPECTION_DEFAULT_POLICY: {e}").into()),
    };

    if expected {
        println!("cargo:rustc-cfg=expection_default_expected");
    }
    Ok(())
}
