use std::fs;

pub fn settings_export() {
    print!("{}", roman_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        roman_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: store.file_name={}, parse.strict={}",
        s.store.file_name, s.parse.strict
    );
}

/// Install a custom settings file before anything reads `settings()`.
pub fn load_custom(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(
        roman_core::settings::init_custom(content),
        "Error loading settings: {}"
    );
}
